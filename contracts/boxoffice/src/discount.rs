//! Discount registry and dual-mode claim verification.
//!
//! A discount either carries a Merkle `allowlist_root` (claimants prove set
//! membership) or an `authority_signer` (claimants present an off-band
//! ed25519 authorization over a canonical message binding their account).
//! Usage ceilings are checked against the requested amount, but counters
//! increment by exactly 1 per successful call. The original accounting
//! behavior, preserved deliberately.

use boxoffice_proofs::{
    build_authorization_message, ed25519_public_key_bytes, ed25519_signature_bytes, ordered_pair,
};
use near_sdk::json_types::Base64VecU8;
use near_sdk::CurveType;

use crate::internal::{check_one_yocto, discount_key, discount_use_key};
use crate::*;

/// Plan-time result of discount resolution; committed by the purchase engine.
pub(crate) struct DiscountOutcome {
    pub unit_price: u128,
    /// `(discount_key, use_key)` whose counters bump by 1 on commit.
    pub usage: Option<(String, String)>,
}

#[near]
impl Contract {
    /// Admin level. Registers or overwrites discounts for (type, code) pairs.
    /// Overwrites replace static fields and preserve use counters.
    #[payable]
    #[handle_result]
    pub fn register_discounts(
        &mut self,
        entries: Vec<DiscountDescriptor>,
    ) -> Result<(), BoxofficeError> {
        check_one_yocto()?;
        let caller = env::predecessor_account_id();
        self.check_admin(&caller)?;
        if entries.is_empty() || entries.len() > MAX_REGISTRATION_ENTRIES {
            return Err(BoxofficeError::InvalidInput(format!(
                "1-{} entries per call",
                MAX_REGISTRATION_ENTRIES
            )));
        }

        let mut count = 0u32;
        for entry in entries {
            let DiscountDescriptor {
                ticket_type,
                code,
                discount_bps,
                max_uses_per_address,
                max_uses_total,
                mode,
                allowlist_root,
                authority_signer,
            } = entry;

            if code.is_empty() || code.len() > 64 || code.contains(DELIMITER) {
                return Err(BoxofficeError::Config(format!(
                    "Invalid discount code: {}",
                    code
                )));
            }
            if discount_bps > BASIS_POINTS {
                return Err(BoxofficeError::Config(format!(
                    "discount_bps {} exceeds {}",
                    discount_bps, BASIS_POINTS
                )));
            }
            if max_uses_per_address < UNLIMITED || max_uses_total < UNLIMITED {
                return Err(BoxofficeError::Config(
                    "Use ceilings must be -1 or non-negative".into(),
                ));
            }
            match mode {
                DiscountMode::AllowlistProof => {
                    let root = allowlist_root.as_ref().ok_or_else(|| {
                        BoxofficeError::Config("AllowlistProof requires allowlist_root".into())
                    })?;
                    if root.0.len() != 32 {
                        return Err(BoxofficeError::Config(
                            "allowlist_root must be 32 bytes".into(),
                        ));
                    }
                }
                DiscountMode::SignedAuth => {
                    let signer = authority_signer.as_ref().ok_or_else(|| {
                        BoxofficeError::Config("SignedAuth requires authority_signer".into())
                    })?;
                    if signer.curve_type() != CurveType::ED25519 {
                        return Err(BoxofficeError::Config(
                            "Only ed25519 authority signers are supported".into(),
                        ));
                    }
                }
            }

            let key = discount_key(&ticket_type, &code);
            let total_uses = self.discounts.get(&key).map(|d| d.total_uses).unwrap_or(0);

            self.discounts.insert(
                key,
                Discount {
                    discount_bps,
                    max_uses_per_address,
                    max_uses_total,
                    mode,
                    allowlist_root,
                    authority_signer,
                    total_uses,
                },
            );
            count += 1;
        }

        events::emit_discounts_registered(&caller, count);
        Ok(())
    }

    // --- Views ---

    pub fn get_discount(&self, ticket_type: String, code: String) -> Option<&Discount> {
        self.discounts.get(&discount_key(&ticket_type, &code))
    }

    pub fn get_discount_uses(
        &self,
        ticket_type: String,
        code: String,
        account_id: AccountId,
    ) -> u64 {
        self.discount_uses
            .get(&discount_use_key(&ticket_type, &code, &account_id))
            .copied()
            .unwrap_or(0)
    }
}

// ── Verification (purchase path) ─────────────────────────────────────────────

impl Contract {
    /// Resolve a discount claim into the unit price to charge, without
    /// mutating anything. `staged_total` / `staged_addr` carry counter
    /// movements already planned earlier in the same batch.
    ///
    /// An unregistered (type, code) pair is "no discount": full price,
    /// no counters. A gated type is the exception: it rejects outright for
    /// non-privileged callers. Privileged callers skip proof/signature
    /// validation but still consume usage.
    pub(crate) fn plan_discount(
        &self,
        ticket_type: &TicketType,
        base_price: u128,
        amount: u32,
        claim: Option<&DiscountClaim>,
        claimant: &AccountId,
        privileged: bool,
        staged_total: u64,
        staged_addr: u64,
    ) -> Result<DiscountOutcome, BoxofficeError> {
        let key = claim.map(|c| discount_key(&ticket_type.key, &c.code));
        let discount = key.as_ref().and_then(|k| self.discounts.get(k));

        let (claim, discount, key) = match (claim, discount, key) {
            (Some(claim), Some(discount), Some(key)) => (claim, discount, key),
            _ => {
                // No claim, or the pair is unregistered: neutral result.
                if ticket_type.gated && !privileged {
                    return Err(BoxofficeError::gated(&ticket_type.key));
                }
                return Ok(DiscountOutcome {
                    unit_price: base_price,
                    usage: None,
                });
            }
        };

        if !privileged {
            match discount.mode {
                DiscountMode::AllowlistProof => {
                    let root = discount
                        .allowlist_root
                        .as_ref()
                        .ok_or_else(BoxofficeError::not_allowlisted)?;
                    if !verify_allowlist_proof(claimant, &claim.proof, &root.0) {
                        return Err(BoxofficeError::not_allowlisted());
                    }
                }
                DiscountMode::SignedAuth => {
                    let signer = discount
                        .authority_signer
                        .as_ref()
                        .ok_or_else(BoxofficeError::invalid_signature)?;
                    let signature = claim
                        .signature
                        .as_ref()
                        .ok_or_else(BoxofficeError::invalid_signature)?;
                    if !self.verify_signed_auth(
                        &ticket_type.key,
                        &claim.code,
                        claimant,
                        &signature.0,
                        signer,
                    ) {
                        return Err(BoxofficeError::invalid_signature());
                    }
                }
            }
        }

        // Ceilings compare against the requested amount; counters move by 1.
        if discount.max_uses_total >= 0
            && discount.total_uses + staged_total + amount as u64 > discount.max_uses_total as u64
        {
            return Err(BoxofficeError::total_uses_exceeded(&claim.code));
        }
        let use_key = discount_use_key(&ticket_type.key, &claim.code, claimant);
        if discount.max_uses_per_address >= 0 {
            let used = self.discount_uses.get(&use_key).copied().unwrap_or(0);
            if used + staged_addr + amount as u64 > discount.max_uses_per_address as u64 {
                return Err(BoxofficeError::per_address_uses_exceeded(&claim.code));
            }
        }

        // Truncating division; the rounding always favours the house.
        let rebate = base_price
            .checked_mul(discount.discount_bps as u128)
            .ok_or_else(|| BoxofficeError::InvalidInput("Price overflow".into()))?
            / BASIS_POINTS as u128;
        let unit_price = base_price - rebate;

        Ok(DiscountOutcome {
            unit_price,
            usage: Some((key, use_key)),
        })
    }

    fn verify_signed_auth(
        &self,
        type_key: &str,
        code: &str,
        claimant: &AccountId,
        signature: &[u8],
        signer: &near_sdk::PublicKey,
    ) -> bool {
        let Ok(pk_bytes) = ed25519_public_key_bytes(signer.as_bytes()) else {
            return false;
        };
        let Ok(sig_bytes) = ed25519_signature_bytes(signature) else {
            return false;
        };
        let message = build_authorization_message(
            DISCOUNT_DOMAIN,
            env::current_account_id().as_str(),
            type_key,
            code,
            claimant.as_str(),
        );
        let message_hash = env::sha256_array(&message);
        env::ed25519_verify(&sig_bytes, &message_hash, &pk_bytes)
    }
}

/// Fold the proof over sorted-pair sha256 and compare against the root.
/// The leaf is `sha256(claimant)`.
pub(crate) fn verify_allowlist_proof(
    claimant: &AccountId,
    proof: &[Base64VecU8],
    root: &[u8],
) -> bool {
    let root: [u8; 32] = match root.try_into() {
        Ok(root) => root,
        Err(_) => return false,
    };
    let mut node = env::sha256_array(claimant.as_bytes());
    for sibling in proof {
        let sibling: [u8; 32] = match sibling.0.as_slice().try_into() {
            Ok(sibling) => sibling,
            Err(_) => return false,
        };
        node = env::sha256_array(&ordered_pair(&node, &sibling));
    }
    node == root
}
