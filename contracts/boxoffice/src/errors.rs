//! Typed error handling for the boxoffice contract.
//!
//! Uses `#[derive(near_sdk::FunctionError)]` from the NEAR SDK to enable
//! `#[handle_result]` on public methods. When a method returns
//! `Err(BoxofficeError::Xxx)`, the SDK calls `env::panic_str()` with the
//! Display message. Same on-wire behaviour as raw panics, but with
//! structured, testable code. Every error is a rejected call; the whole
//! transaction unwinds and no state change persists.

use near_sdk_macros::NearSchema;

#[derive(NearSchema, near_sdk::FunctionError)]
#[abi(json)]
#[derive(Debug, Clone, serde::Serialize)]
pub enum BoxofficeError {
    /// Caller lacks the admin/manager/privileged capability, or a gated
    /// type was purchased without a valid discount claim.
    Unauthorized(String),
    /// Purchase-path validation: inactive sale/type, supply or order limit
    /// exceeded, currency or price not registered.
    Validation(String),
    /// Discount claim rejected: not allowlisted, invalid signature, or a
    /// usage ceiling exceeded.
    Discount(String),
    /// Insufficient attached deposit or spendable token balance.
    Payment(String),
    /// Administrative registration rejected: split table does not sum to
    /// its base, price registered against an unknown type, malformed entry.
    Config(String),
    /// Requested entity does not exist.
    NotFound(String),
    /// Invalid parameters, IDs, or data from the caller.
    InvalidInput(String),
}

impl std::fmt::Display for BoxofficeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Unauthorized(msg) => write!(f, "Unauthorized: {}", msg),
            Self::Validation(msg) => write!(f, "Validation: {}", msg),
            Self::Discount(msg) => write!(f, "Discount: {}", msg),
            Self::Payment(msg) => write!(f, "Payment: {}", msg),
            Self::Config(msg) => write!(f, "Config: {}", msg),
            Self::NotFound(msg) => write!(f, "Not found: {}", msg),
            Self::InvalidInput(msg) => write!(f, "Invalid input: {}", msg),
        }
    }
}

// ── Factory helpers for common errors ────────────────────────────────────────

impl BoxofficeError {
    pub fn sale_inactive() -> Self {
        Self::Validation("Sale is not active".into())
    }
    pub fn unknown_type(key: &str) -> Self {
        Self::Validation(format!("Unknown ticket type: {}", key))
    }
    pub fn type_supply_exceeded(key: &str) -> Self {
        Self::Validation(format!("Ticket type supply exceeded: {}", key))
    }
    pub fn contract_supply_exceeded() -> Self {
        Self::Validation("Contract-wide supply exceeded".into())
    }
    pub fn order_limit_exceeded(amount: u32, limit: u32) -> Self {
        Self::Validation(format!(
            "Order of {} exceeds the limit of {}",
            amount, limit
        ))
    }
    pub fn inactive_type(key: &str) -> Self {
        Self::Validation(format!("Ticket type is not active: {}", key))
    }
    pub fn unknown_currency(currency: &str) -> Self {
        Self::Validation(format!("Unknown currency: {}", currency))
    }
    pub fn price_not_registered(key: &str, currency: &str) -> Self {
        Self::Validation(format!("No price registered for {} in {}", key, currency))
    }
    pub fn gated(key: &str) -> Self {
        Self::Unauthorized(format!(
            "Ticket type {} is gated and requires a valid discount claim",
            key
        ))
    }
    pub fn not_allowlisted() -> Self {
        Self::Discount("Claimant is not on the allowlist".into())
    }
    pub fn invalid_signature() -> Self {
        Self::Discount("Invalid discount authorization signature".into())
    }
    pub fn total_uses_exceeded(code: &str) -> Self {
        Self::Discount(format!("Total use ceiling exceeded for code: {}", code))
    }
    pub fn per_address_uses_exceeded(code: &str) -> Self {
        Self::Discount(format!(
            "Per-address use ceiling exceeded for code: {}",
            code
        ))
    }
    pub fn insufficient_payment(required: u128, got: u128) -> Self {
        Self::Payment(format!(
            "Insufficient payment: required {}, got {}",
            required, got
        ))
    }
    pub fn batch_underfunded(required: u128, got: u128) -> Self {
        Self::Payment(format!(
            "Batch underfunded: required {}, got {}",
            required, got
        ))
    }
    pub fn split_sum_mismatch(sum: u64, base: u32) -> Self {
        Self::Config(format!(
            "Split percentages sum to {} but base is {}",
            sum, base
        ))
    }
    pub fn admin_only() -> Self {
        Self::Unauthorized("Requires admin or manager capability".into())
    }
    pub fn owner_only() -> Self {
        Self::Unauthorized("Only the contract owner can perform this action".into())
    }
}
