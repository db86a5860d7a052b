//! Boxoffice: ticket-sale authorization and accounting. Per-type/per-currency
//! pricing, dual-mode discount verification (allowlist proof / signed
//! authorization), supply-cap enforcement, batch purchases, and proportional
//! split distribution of proceeds. JSON events (NEP-297).

use near_sdk::json_types::U128;
use near_sdk::store::{IterableMap, IterableSet, LookupMap};
use near_sdk::{
    env, near, AccountId, BorshStorageKey, NearToken, PanicOnDefault, Promise, PromiseOrValue,
};

// --- Modules ---

mod admin;
pub mod constants;
mod discount;
mod errors;
mod events;
mod external;
mod ft_receiver;
mod internal;
mod purchase;
mod registry;
mod splits;
pub mod types;

#[cfg(test)]
mod tests;

pub use constants::*;
pub use errors::BoxofficeError;
pub use types::*;

// --- Storage Keys ---

#[near]
#[derive(BorshStorageKey)]
pub enum StorageKey {
    TicketTypes,
    Prices,
    CurrencyTokens,
    TokenCurrencies,
    Discounts,
    DiscountUses,
    Tickets,
    Custody,
    Deposits,
    Admins,
    Managers,
    PrivilegedMinters,
}

// --- Contract State ---

#[near(
    contract_state,
    contract_metadata(
        version = "0.1.0",
        standard(standard = "nep141", version = "1.0.0"),
        standard(standard = "nep297", version = "1.0.0"),
    )
)]
#[derive(PanicOnDefault)]
pub struct Contract {
    /// From Cargo.toml; updated on each migration.
    pub version: String,

    pub owner_id: AccountId,

    /// Global sale switch; checked before anything else on the purchase path.
    pub sale_active: bool,
    /// Exclusive upper bound on a single order: `amount < order_limit`.
    pub order_limit: u32,
    /// Contract-wide ticket cap; -1 = unlimited.
    pub total_max_supply: i64,
    /// Tickets allocated so far, across all types.
    pub minted_count: u64,
    /// Next ticket id; monotonically increasing, never reused.
    pub next_ticket_id: u64,

    pub ticket_types: IterableMap<String, TicketType>,
    /// Key: "{type_key}:{currency}".
    pub prices: LookupMap<String, PriceEntry>,
    /// Currency key → NEP-141 account. First non-native account seen wins.
    pub currency_tokens: LookupMap<String, AccountId>,
    /// Reverse map; dispatches `ft_on_transfer` by predecessor.
    pub(crate) token_currencies: LookupMap<AccountId, String>,
    /// Append-only iteration list for full-balance sweeps.
    pub currency_keys: Vec<String>,

    /// Key: "{type_key}:{code}".
    pub discounts: LookupMap<String, Discount>,
    /// Key: "{type_key}:{code}:{account}"; per-address use counters.
    pub(crate) discount_uses: LookupMap<String, u64>,

    pub tickets: IterableMap<u64, Ticket>,

    /// Active distribution table; fully replaced on each registration.
    pub splits: Vec<SplitEntry>,
    /// Currency key → accumulated sale proceeds (native under "near").
    pub(crate) custody: LookupMap<String, u128>,
    /// Key: "{account}:{currency}"; pre-funded spendable token balances.
    pub(crate) deposits: LookupMap<String, u128>,

    pub admins: IterableSet<AccountId>,
    pub managers: IterableSet<AccountId>,
    /// May bypass payment and discount proof/signature checks, never
    /// supply or order-limit checks.
    pub privileged_minters: IterableSet<AccountId>,
}
