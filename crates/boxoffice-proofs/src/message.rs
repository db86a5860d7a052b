//! Canonical authorization message for signed discount claims.

/// Format: `{domain_prefix}:{contract_id}:{type_key}:{code}\0{claimant}`.
/// The contract id provides domain separation (cross-contract replay
/// prevention); the NUL byte keeps the claimant from extending the code.
pub fn build_authorization_message(
    domain_prefix: &str,
    contract_id: &str,
    type_key: &str,
    code: &str,
    claimant: &str,
) -> Vec<u8> {
    let header = format!("{domain_prefix}:{contract_id}:{type_key}:{code}");
    let mut message = header.into_bytes();
    message.reserve_exact(1 + claimant.len());
    message.push(0);
    message.extend_from_slice(claimant.as_bytes());
    message
}
