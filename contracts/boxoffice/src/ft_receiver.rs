//! NEP-141 deposit intake and withdrawal.
//!
//! Non-native purchases settle from pre-funded balances: a buyer first
//! `ft_transfer_call`s tokens to this contract, which credits a per-account
//! spendable balance keyed by the currency the sending token is registered
//! under. Unspent balances can be withdrawn back to the token contract.

use crate::internal::check_one_yocto;
use crate::*;

#[near]
impl Contract {
    /// NEP-141 receiver hook. Only transfers from registered currency token
    /// contracts are accepted; anything else panics so the token refunds the
    /// sender in full. `msg` optionally names a beneficiary other than the
    /// sender. Returns 0: the whole amount is consumed.
    pub fn ft_on_transfer(
        &mut self,
        sender_id: AccountId,
        amount: U128,
        msg: String,
    ) -> PromiseOrValue<U128> {
        let token_id = env::predecessor_account_id();
        let currency = self
            .token_currencies
            .get(&token_id)
            .cloned()
            .unwrap_or_else(|| env::panic_str("Unregistered token contract"));
        near_sdk::require!(amount.0 > 0, "Amount must be positive");

        let beneficiary: AccountId = if msg.is_empty() {
            sender_id.clone()
        } else {
            msg.parse()
                .unwrap_or_else(|_| env::panic_str("Invalid account_id in msg"))
        };

        let balance = self.credit_deposit(&beneficiary, &currency, amount.0);
        events::emit_deposit_credited(&sender_id, &beneficiary, &currency, amount, U128(balance));
        PromiseOrValue::Value(U128(0))
    }

    /// Withdraw unspent deposit back to the caller via the currency's token
    /// contract. `amount: None` withdraws the full balance. The internal
    /// balance is debited before the transfer is scheduled.
    #[payable]
    #[handle_result]
    pub fn withdraw_deposit(
        &mut self,
        currency: String,
        amount: Option<U128>,
    ) -> Result<Promise, BoxofficeError> {
        check_one_yocto()?;
        let caller = env::predecessor_account_id();
        let token_id = self
            .currency_tokens
            .get(&currency)
            .cloned()
            .ok_or_else(|| BoxofficeError::unknown_currency(&currency))?;

        let balance = self.deposit_balance(&caller, &currency);
        let amount = amount.map(|a| a.0).unwrap_or(balance);
        if amount == 0 || amount > balance {
            return Err(BoxofficeError::Payment(format!(
                "Withdrawal of {} exceeds deposit balance {}",
                amount, balance
            )));
        }

        self.debit_deposit(&caller, &currency, amount);
        events::emit_deposit_withdrawn(&caller, &currency, U128(amount));

        Ok(external::ext_ft::ext(token_id)
            .with_attached_deposit(ONE_YOCTO)
            .with_static_gas(GAS_FT_TRANSFER)
            .ft_transfer(caller, U128(amount), None))
    }

    // --- Views ---

    pub fn get_deposit_balance(&self, account_id: AccountId, currency: String) -> U128 {
        U128(self.deposit_balance(&account_id, &currency))
    }
}
