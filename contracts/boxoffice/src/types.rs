//! Stored entities and request/descriptor shapes.

use near_sdk::json_types::{Base64VecU8, U128};
use near_sdk::{near, AccountId, PublicKey};

// ── Ticket types ─────────────────────────────────────────────────────────────

/// A purchasable category. Static fields are overwritten by re-registration;
/// `purchased_count` survives every overwrite.
#[near(serializers = [borsh, json])]
#[derive(Clone, Debug)]
pub struct TicketType {
    pub key: String,
    pub display_name: String,
    /// -1 = unlimited.
    pub max_supply: i64,
    pub active: bool,
    /// Transfer-lock flag. Stored and exposed; enforcement belongs to the
    /// ownership ledger, not this contract.
    pub locked: bool,
    /// Gated types cannot be bought without a valid discount claim,
    /// independent of price.
    pub gated: bool,
    pub purchased_count: u64,
}

#[near(serializers = [json])]
#[derive(Clone, Debug)]
pub struct TicketTypeDescriptor {
    pub key: String,
    pub display_name: String,
    pub max_supply: i64,
    pub active: bool,
    pub locked: bool,
    pub gated: bool,
}

// ── Prices ───────────────────────────────────────────────────────────────────

/// Keyed by `"{type_key}:{currency}"` in contract state.
#[near(serializers = [borsh, json])]
#[derive(Clone, Debug)]
pub struct PriceEntry {
    pub unit_price: U128,
}

#[near(serializers = [json])]
#[derive(Clone, Debug)]
pub struct PriceDescriptor {
    pub ticket_type: String,
    pub currency: String,
    pub unit_price: U128,
    /// NEP-141 account backing this currency. Required for non-native
    /// currencies the first time the key is seen; ignored afterwards.
    pub token_account: Option<AccountId>,
}

// ── Discounts ────────────────────────────────────────────────────────────────

#[near(serializers = [borsh, json])]
#[derive(Clone, Debug, PartialEq)]
pub enum DiscountMode {
    /// Merkle inclusion proof against `allowlist_root`.
    AllowlistProof,
    /// Off-band ed25519 authorization from `authority_signer`.
    SignedAuth,
}

/// Keyed by `"{type_key}:{code}"`. Per-address usage lives in a separate
/// map keyed `"{type_key}:{code}:{account}"`.
#[near(serializers = [borsh, json])]
#[derive(Clone, Debug)]
pub struct Discount {
    pub discount_bps: u16,
    /// -1 = unlimited.
    pub max_uses_per_address: i64,
    /// -1 = unlimited.
    pub max_uses_total: i64,
    pub mode: DiscountMode,
    pub allowlist_root: Option<Base64VecU8>,
    pub authority_signer: Option<PublicKey>,
    pub total_uses: u64,
}

#[near(serializers = [json])]
#[derive(Clone, Debug)]
pub struct DiscountDescriptor {
    pub ticket_type: String,
    pub code: String,
    pub discount_bps: u16,
    pub max_uses_per_address: i64,
    pub max_uses_total: i64,
    pub mode: DiscountMode,
    pub allowlist_root: Option<Base64VecU8>,
    pub authority_signer: Option<PublicKey>,
}

/// A discount claim presented with a purchase. `proof` is consulted in
/// AllowlistProof mode, `signature` in SignedAuth mode.
#[near(serializers = [json])]
#[derive(Clone, Debug)]
pub struct DiscountClaim {
    pub code: String,
    #[serde(default)]
    pub proof: Vec<Base64VecU8>,
    pub signature: Option<Base64VecU8>,
}

// ── Splits ───────────────────────────────────────────────────────────────────

/// One row of the proportional distribution table. All rows share one `base`
/// and percentages sum to it exactly.
#[near(serializers = [borsh, json])]
#[derive(Clone, Debug)]
pub struct SplitEntry {
    pub payee: AccountId,
    pub percent: u32,
    pub base: u32,
}

// ── Tickets ──────────────────────────────────────────────────────────────────

#[near(serializers = [borsh, json])]
#[derive(Clone, Debug)]
pub struct Ticket {
    pub ticket_type: String,
    pub owner_id: AccountId,
}

// ── Purchase request ─────────────────────────────────────────────────────────

#[near(serializers = [json])]
#[derive(Clone, Debug)]
pub struct PurchaseRequest {
    pub ticket_type: String,
    pub amount: u32,
    pub receiver: AccountId,
    pub currency: String,
    /// Whose spendable balance settles a non-native purchase.
    /// Defaults to the caller; only privileged callers may name another payer.
    pub payer: Option<AccountId>,
    pub discount: Option<DiscountClaim>,
}
