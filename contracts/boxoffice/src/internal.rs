// Internal helper functions: composite keys, deposit guards, balance ledgers,
// and the single authorization predicate consumed by every admin operation.

use crate::*;

// ── Composite keys ───────────────────────────────────────────────────────────
// ":" is not a valid NEAR account-id character, and type keys reject it at
// registration, so these keys cannot collide.

pub(crate) fn price_key(type_key: &str, currency: &str) -> String {
    format!("{}{}{}", type_key, DELIMITER, currency)
}

pub(crate) fn discount_key(type_key: &str, code: &str) -> String {
    format!("{}{}{}", type_key, DELIMITER, code)
}

pub(crate) fn discount_use_key(type_key: &str, code: &str, account: &AccountId) -> String {
    format!("{}{}{}{}{}", type_key, DELIMITER, code, DELIMITER, account)
}

pub(crate) fn deposit_key(account: &AccountId, currency: &str) -> String {
    format!("{}{}{}", account, DELIMITER, currency)
}

// ── Deposit guards ───────────────────────────────────────────────────────────

/// Check exactly one yoctoNEAR is attached (full-access-key confirmation).
pub(crate) fn check_one_yocto() -> Result<(), BoxofficeError> {
    if env::attached_deposit().as_yoctonear() != ONE_YOCTO.as_yoctonear() {
        return Err(BoxofficeError::Payment(
            "Requires attached deposit of exactly 1 yoctoNEAR".into(),
        ));
    }
    Ok(())
}

// ── Authorization ────────────────────────────────────────────────────────────

impl Contract {
    /// The one administrative predicate: owner, admin, or manager.
    pub(crate) fn check_admin(&self, caller: &AccountId) -> Result<(), BoxofficeError> {
        if caller == &self.owner_id
            || self.admins.contains(caller)
            || self.managers.contains(caller)
        {
            Ok(())
        } else {
            Err(BoxofficeError::admin_only())
        }
    }

    pub(crate) fn check_owner(&self, caller: &AccountId) -> Result<(), BoxofficeError> {
        if caller == &self.owner_id {
            Ok(())
        } else {
            Err(BoxofficeError::owner_only())
        }
    }

    pub(crate) fn is_privileged(&self, caller: &AccountId) -> bool {
        self.privileged_minters.contains(caller)
    }
}

// ── Balance ledgers ──────────────────────────────────────────────────────────

impl Contract {
    pub(crate) fn custody_balance(&self, currency: &str) -> u128 {
        self.custody.get(currency).copied().unwrap_or(0)
    }

    pub(crate) fn credit_custody(&mut self, currency: &str, amount: u128) {
        if amount == 0 {
            return;
        }
        let balance = self.custody_balance(currency) + amount;
        self.custody.insert(currency.to_string(), balance);
    }

    /// Caller guarantees `amount <= custody_balance(currency)`.
    pub(crate) fn debit_custody(&mut self, currency: &str, amount: u128) {
        if amount == 0 {
            return;
        }
        let balance = self.custody_balance(currency) - amount;
        self.custody.insert(currency.to_string(), balance);
    }

    pub(crate) fn deposit_balance(&self, account: &AccountId, currency: &str) -> u128 {
        self.deposits
            .get(&deposit_key(account, currency))
            .copied()
            .unwrap_or(0)
    }

    pub(crate) fn credit_deposit(&mut self, account: &AccountId, currency: &str, amount: u128) -> u128 {
        let key = deposit_key(account, currency);
        let balance = self.deposits.get(&key).copied().unwrap_or(0) + amount;
        self.deposits.insert(key, balance);
        balance
    }

    /// Caller guarantees `amount <= deposit_balance(account, currency)`.
    pub(crate) fn debit_deposit(&mut self, account: &AccountId, currency: &str, amount: u128) -> u128 {
        let key = deposit_key(account, currency);
        let balance = self.deposits.get(&key).copied().unwrap_or(0) - amount;
        self.deposits.insert(key, balance);
        balance
    }
}
