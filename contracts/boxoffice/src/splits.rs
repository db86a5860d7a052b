//! Proceeds custody and proportional distribution.
//!
//! Sale proceeds accumulate in per-currency custody balances. A split table
//! maps payees to integer shares of a common base; distribution pays each
//! payee `floor(balance * percent / base)` and leaves the rounding dust in
//! custody for the next round.

use crate::events::PayoutShare;
use crate::internal::check_one_yocto;
use crate::*;

#[near]
impl Contract {
    /// Admin level. Replaces the split table wholesale. An empty table is
    /// accepted and disables `distribute` until a new table is registered.
    #[payable]
    #[handle_result]
    pub fn register_splits(&mut self, entries: Vec<SplitEntry>) -> Result<(), BoxofficeError> {
        check_one_yocto()?;
        let caller = env::predecessor_account_id();
        self.check_admin(&caller)?;

        if entries.len() > MAX_SPLIT_ENTRIES {
            return Err(BoxofficeError::InvalidInput(format!(
                "At most {} split entries",
                MAX_SPLIT_ENTRIES
            )));
        }
        if !entries.is_empty() {
            let base = entries[0].base;
            if base == 0 {
                return Err(BoxofficeError::Config("Split base must be positive".into()));
            }
            let mut sum = 0u64;
            for entry in &entries {
                if entry.base != base {
                    return Err(BoxofficeError::Config(
                        "All split entries must share one base".into(),
                    ));
                }
                if entry.percent == 0 {
                    return Err(BoxofficeError::Config(
                        "Split shares must be positive".into(),
                    ));
                }
                sum += entry.percent as u64;
            }
            // Shares must cover the base exactly; dust comes only from
            // per-payee floor rounding, never from an undersubscribed table.
            if sum != base as u64 {
                return Err(BoxofficeError::split_sum_mismatch(sum, base));
            }
        }

        let payees: Vec<String> = entries.iter().map(|e| e.payee.to_string()).collect();
        let base = entries.first().map(|e| e.base).unwrap_or(0);
        self.splits = entries;
        events::emit_splits_registered(&caller, &payees, base);
        Ok(())
    }

    /// Pay out the custody balance of one currency across the split table.
    /// Open to any caller: distribution only moves funds to the registered
    /// payees. Each payee gets `floor(balance * percent / base)`; the dust
    /// stays in custody.
    #[handle_result]
    pub fn distribute(&mut self, currency: String) -> Result<U128, BoxofficeError> {
        let caller = env::predecessor_account_id();
        if self.splits.is_empty() {
            return Err(BoxofficeError::Config("No split table registered".into()));
        }
        let is_native = currency == NATIVE_CURRENCY;
        let token_id = if is_native {
            None
        } else {
            Some(
                self.currency_tokens
                    .get(&currency)
                    .cloned()
                    .ok_or_else(|| BoxofficeError::unknown_currency(&currency))?,
            )
        };

        let balance = self.custody_balance(&currency);
        let mut paid = 0u128;
        let mut payouts = Vec::new();
        for entry in self.splits.clone() {
            let share = balance
                .checked_mul(entry.percent as u128)
                .ok_or_else(|| BoxofficeError::Config("Distribution overflow".into()))?
                / entry.base as u128;
            if share == 0 {
                continue;
            }
            paid += share;
            payouts.push(PayoutShare {
                payee: entry.payee.clone(),
                amount: U128(share),
            });
            match &token_id {
                None => {
                    let _ = Promise::new(entry.payee.clone())
                        .transfer(NearToken::from_yoctonear(share));
                }
                Some(token_id) => {
                    let _ = external::ext_ft::ext(token_id.clone())
                        .with_attached_deposit(ONE_YOCTO)
                        .with_static_gas(GAS_FT_TRANSFER)
                        .ft_transfer(entry.payee.clone(), U128(share), None);
                }
            }
        }

        self.debit_custody(&currency, paid);
        events::emit_distribution(&caller, &currency, &payouts, U128(balance - paid));
        Ok(U128(paid))
    }

    /// Admin level. Sweep every custody balance, dust included, to a single
    /// payee. Used for teardown after the regular split rounds.
    #[payable]
    #[handle_result]
    pub fn distribute_all(&mut self, payee: AccountId) -> Result<(), BoxofficeError> {
        check_one_yocto()?;
        let caller = env::predecessor_account_id();
        self.check_admin(&caller)?;

        let mut swept = Vec::new();

        let native = self.custody_balance(NATIVE_CURRENCY);
        if native > 0 {
            self.debit_custody(NATIVE_CURRENCY, native);
            // The 1 yocto confirmation deposit rides along with the sweep.
            let _ = Promise::new(payee.clone()).transfer(NearToken::from_yoctonear(native));
            swept.push(NATIVE_CURRENCY.to_string());
        }

        for currency in self.currency_keys.clone() {
            let balance = self.custody_balance(&currency);
            if balance == 0 {
                continue;
            }
            let token_id = match self.currency_tokens.get(&currency) {
                Some(token_id) => token_id.clone(),
                None => continue,
            };
            self.debit_custody(&currency, balance);
            let _ = external::ext_ft::ext(token_id)
                .with_attached_deposit(ONE_YOCTO)
                .with_static_gas(GAS_FT_TRANSFER)
                .ft_transfer(payee.clone(), U128(balance), None);
            swept.push(currency);
        }

        events::emit_sweep(&caller, &payee, &swept);
        Ok(())
    }

    // --- Views ---

    pub fn get_splits(&self) -> &[SplitEntry] {
        &self.splits
    }

    pub fn get_custody_balance(&self, currency: String) -> U128 {
        U128(self.custody_balance(&currency))
    }
}
