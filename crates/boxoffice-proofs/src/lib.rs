//! Pure-logic verification helpers for the boxoffice contract.
//! Zero NEAR SDK dependency, usable on-chain and off-chain.

mod crypto;
mod error;
mod merkle;
mod message;

pub use crypto::{ed25519_public_key_bytes, ed25519_signature_bytes};
pub use error::ProofError;
pub use merkle::ordered_pair;
pub use message::build_authorization_message;
