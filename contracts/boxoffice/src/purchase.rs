//! Purchase engine: validation ordering, discount application, payment
//! settlement, ticket allocation.
//!
//! Every purchase is planned first and committed only once every check has
//! passed, so a failed call performs zero observable mutation. Batch
//! purchases plan all elements against a staged scratch view (element n sees
//! element n-1's tentative counter movements), assert the aggregate native
//! funding, and only then commit; per-element failure aborts the whole
//! batch with nothing applied.

use std::collections::HashMap;

use crate::discount::DiscountOutcome;
use crate::internal::{deposit_key, discount_key, discount_use_key, price_key};
use crate::*;

/// Counter movements planned but not yet committed within one call.
#[derive(Default)]
pub(crate) struct PurchaseScratch {
    /// Per-type planned purchase-counter bumps (+1 per element, not per
    /// ticket, mirroring the committed accounting exactly).
    type_counts: HashMap<String, u64>,
    minted: u64,
    allocated: u64,
    discount_totals: HashMap<String, u64>,
    discount_addr: HashMap<String, u64>,
    deposit_debits: HashMap<String, u128>,
}

struct FtDebit {
    payer: AccountId,
    currency: String,
    amount: u128,
}

pub(crate) struct PurchasePlan {
    type_key: String,
    amount: u32,
    receiver: AccountId,
    buyer: AccountId,
    currency: String,
    unit_price: u128,
    native_due: u128,
    ft_debit: Option<FtDebit>,
    discount_use: Option<(String, String)>,
    discount_code: Option<String>,
    ticket_ids: Vec<u64>,
}

#[near]
impl Contract {
    /// Purchase `amount` tickets of one type. Returns the allocated ticket
    /// ids. Native purchases settle from the attached deposit (excess is
    /// refunded); non-native purchases settle from the payer's pre-funded
    /// token balance. Privileged callers skip settlement entirely.
    #[payable]
    #[handle_result]
    pub fn purchase(&mut self, request: PurchaseRequest) -> Result<Vec<u64>, BoxofficeError> {
        let buyer = env::predecessor_account_id();
        let privileged = self.is_privileged(&buyer);
        let mut scratch = PurchaseScratch::default();

        let plan = self.plan_purchase(request, &buyer, privileged, &mut scratch)?;

        let attached = env::attached_deposit().as_yoctonear();
        if !privileged && attached < plan.native_due {
            return Err(BoxofficeError::insufficient_payment(
                plan.native_due,
                attached,
            ));
        }

        let settled = if privileged { 0 } else { plan.native_due };
        let ticket_ids = self.commit_purchase(plan);
        self.refund_excess(&buyer, attached, settled);
        Ok(ticket_ids)
    }

    /// Apply the single-purchase operation once per element in order. The
    /// aggregate native funding is asserted only after every element has
    /// planned successfully; underfunding rejects the whole batch.
    #[payable]
    #[handle_result]
    pub fn purchase_batch(
        &mut self,
        items: Vec<PurchaseRequest>,
    ) -> Result<Vec<u64>, BoxofficeError> {
        if items.is_empty() || items.len() > MAX_BATCH_PURCHASE {
            return Err(BoxofficeError::InvalidInput(format!(
                "1-{} items per batch",
                MAX_BATCH_PURCHASE
            )));
        }

        let buyer = env::predecessor_account_id();
        let privileged = self.is_privileged(&buyer);
        let mut scratch = PurchaseScratch::default();

        let mut plans = Vec::with_capacity(items.len());
        for request in items {
            plans.push(self.plan_purchase(request, &buyer, privileged, &mut scratch)?);
        }

        let total_due: u128 = plans.iter().map(|p| p.native_due).sum();
        let attached = env::attached_deposit().as_yoctonear();
        if !privileged && attached < total_due {
            return Err(BoxofficeError::batch_underfunded(total_due, attached));
        }

        let settled = if privileged { 0 } else { total_due };
        let mut ticket_ids = Vec::new();
        for plan in plans {
            ticket_ids.extend(self.commit_purchase(plan));
        }
        self.refund_excess(&buyer, attached, settled);
        Ok(ticket_ids)
    }
}

impl Contract {
    /// Steps 1-8 of the validation order, plus settlement and allocation
    /// planning. Reads state + scratch; mutates scratch only.
    fn plan_purchase(
        &self,
        request: PurchaseRequest,
        buyer: &AccountId,
        privileged: bool,
        scratch: &mut PurchaseScratch,
    ) -> Result<PurchasePlan, BoxofficeError> {
        let PurchaseRequest {
            ticket_type: type_key,
            amount,
            receiver,
            currency,
            payer,
            discount,
        } = request;

        if !self.sale_active {
            return Err(BoxofficeError::sale_inactive());
        }
        if amount == 0 {
            return Err(BoxofficeError::InvalidInput("Amount must be positive".into()));
        }

        let ticket_type = self
            .ticket_types
            .get(&type_key)
            .ok_or_else(|| BoxofficeError::unknown_type(&type_key))?;

        let staged_type = scratch.type_counts.get(&type_key).copied().unwrap_or(0);
        if ticket_type.max_supply >= 0
            && ticket_type.purchased_count + staged_type + amount as u64
                > ticket_type.max_supply as u64
        {
            return Err(BoxofficeError::type_supply_exceeded(&type_key));
        }

        if self.total_max_supply >= 0
            && self.minted_count + scratch.minted + amount as u64 > self.total_max_supply as u64
        {
            return Err(BoxofficeError::contract_supply_exceeded());
        }

        // Strictly less, not less-or-equal: an order of exactly
        // `order_limit` is rejected.
        if amount >= self.order_limit {
            return Err(BoxofficeError::order_limit_exceeded(amount, self.order_limit));
        }

        if !ticket_type.active {
            return Err(BoxofficeError::inactive_type(&type_key));
        }

        let is_native = currency == NATIVE_CURRENCY;
        if !is_native && !self.currency_tokens.contains_key(&currency) {
            return Err(BoxofficeError::unknown_currency(&currency));
        }

        let base_price = self
            .prices
            .get(&price_key(&type_key, &currency))
            .ok_or_else(|| BoxofficeError::price_not_registered(&type_key, &currency))?
            .unit_price
            .0;

        let (staged_total, staged_addr) = match &discount {
            Some(claim) => (
                scratch
                    .discount_totals
                    .get(&discount_key(&type_key, &claim.code))
                    .copied()
                    .unwrap_or(0),
                scratch
                    .discount_addr
                    .get(&discount_use_key(&type_key, &claim.code, buyer))
                    .copied()
                    .unwrap_or(0),
            ),
            None => (0, 0),
        };

        let DiscountOutcome { unit_price, usage } = self.plan_discount(
            ticket_type,
            base_price,
            amount,
            discount.as_ref(),
            buyer,
            privileged,
            staged_total,
            staged_addr,
        )?;

        let total_price = unit_price
            .checked_mul(amount as u128)
            .ok_or_else(|| BoxofficeError::InvalidInput("Price overflow".into()))?;

        let (native_due, ft_debit) = if privileged {
            (0, None)
        } else if is_native {
            (total_price, None)
        } else {
            let payer = payer.unwrap_or_else(|| buyer.clone());
            if &payer != buyer {
                return Err(BoxofficeError::Unauthorized(
                    "Only privileged callers may name another payer".into(),
                ));
            }
            let key = deposit_key(&payer, &currency);
            let staged = scratch.deposit_debits.get(&key).copied().unwrap_or(0);
            let available = self
                .deposits
                .get(&key)
                .copied()
                .unwrap_or(0)
                .saturating_sub(staged);
            if available < total_price {
                return Err(BoxofficeError::Payment(format!(
                    "Insufficient {} balance: required {}, available {}",
                    currency, total_price, available
                )));
            }
            *scratch.deposit_debits.entry(key).or_insert(0) += total_price;
            (
                0,
                Some(FtDebit {
                    payer,
                    currency: currency.clone(),
                    amount: total_price,
                }),
            )
        };

        let start = self.next_ticket_id + scratch.allocated;
        let ticket_ids: Vec<u64> = (start..start + amount as u64).collect();
        scratch.allocated += amount as u64;
        scratch.minted += amount as u64;
        *scratch.type_counts.entry(type_key.clone()).or_insert(0) += 1;
        if let Some((dk, uk)) = &usage {
            *scratch.discount_totals.entry(dk.clone()).or_insert(0) += 1;
            *scratch.discount_addr.entry(uk.clone()).or_insert(0) += 1;
        }

        let discount_code = if usage.is_some() {
            discount.map(|claim| claim.code)
        } else {
            None
        };

        Ok(PurchasePlan {
            type_key,
            amount,
            receiver,
            buyer: buyer.clone(),
            currency,
            unit_price,
            native_due,
            ft_debit,
            discount_use: usage,
            discount_code,
            ticket_ids,
        })
    }

    /// Apply a validated plan. Infallible by construction.
    fn commit_purchase(&mut self, plan: PurchasePlan) -> Vec<u64> {
        let PurchasePlan {
            type_key,
            amount,
            receiver,
            buyer,
            currency,
            unit_price,
            native_due,
            ft_debit,
            discount_use,
            discount_code,
            ticket_ids,
        } = plan;

        // Type purchase counter moves by 1 per call, not per ticket. The
        // original accounting behavior, preserved deliberately.
        let ticket_type = self
            .ticket_types
            .get_mut(&type_key)
            .expect("planned type must exist");
        ticket_type.purchased_count += 1;

        self.minted_count += amount as u64;
        if let Some(last) = ticket_ids.last() {
            self.next_ticket_id = last + 1;
        }
        for id in &ticket_ids {
            self.tickets.insert(
                *id,
                Ticket {
                    ticket_type: type_key.clone(),
                    owner_id: receiver.clone(),
                },
            );
        }

        if native_due > 0 {
            self.credit_custody(NATIVE_CURRENCY, native_due);
        }
        if let Some(FtDebit {
            payer,
            currency,
            amount,
        }) = ft_debit
        {
            self.debit_deposit(&payer, &currency, amount);
            self.credit_custody(&currency, amount);
        }

        if let Some((dk, uk)) = discount_use {
            if let Some(discount) = self.discounts.get_mut(&dk) {
                discount.total_uses += 1;
            }
            let used = self.discount_uses.get(&uk).copied().unwrap_or(0);
            self.discount_uses.insert(uk, used + 1);
        }

        let id_strings: Vec<String> = ticket_ids.iter().map(|id| id.to_string()).collect();
        events::emit_purchase(
            &buyer,
            &receiver,
            &type_key,
            amount,
            &id_strings,
            U128(unit_price),
            &currency,
            discount_code.as_deref(),
        );

        ticket_ids
    }

    fn refund_excess(&self, buyer: &AccountId, attached: u128, settled: u128) {
        if attached > settled {
            let _ = Promise::new(buyer.clone())
                .transfer(NearToken::from_yoctonear(attached - settled));
        }
    }
}
