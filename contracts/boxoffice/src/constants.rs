//! Contract-wide constants.

use near_sdk::{Gas, NearToken};

/// Currency key for the chain's native token. Never mapped to an asset account.
pub const NATIVE_CURRENCY: &str = "near";

/// Basis points denominator (10,000 = 100%)
pub const BASIS_POINTS: u16 = 10_000;

/// Sentinel for unbounded supply / usage ceilings.
pub const UNLIMITED: i64 = -1;

/// Registration calls accept at most this many entries each.
pub const MAX_REGISTRATION_ENTRIES: usize = 100;

/// Maximum elements per batch purchase.
pub const MAX_BATCH_PURCHASE: usize = 20;

/// Maximum entries in a split table. Each payee costs one transfer at
/// distribution time, so the table must stay small enough for one call.
pub const MAX_SPLIT_ENTRIES: usize = 20;

/// Domain prefix for signed discount authorizations.
/// Combined with the contract account id for cross-contract replay prevention.
pub const DISCOUNT_DOMAIN: &str = "boxoffice:discount:v1";

/// Delimiter for composite registry keys.
/// ":" is not a valid character in NEAR account IDs, preventing key collisions.
pub const DELIMITER: &str = ":";

/// Attached to admin mutations and outgoing `ft_transfer` calls.
pub const ONE_YOCTO: NearToken = NearToken::from_yoctonear(1);

/// Gas for NEP-141 `ft_transfer` calls issued by distribution and withdrawal.
pub const GAS_FT_TRANSFER: Gas = Gas::from_tgas(10);
