//! NEP-297 JSON events. Each domain module defines typed payload structs
//! and an `emit_*` function per operation; `emit` wraps the payload in the
//! standard envelope and logs it under the `EVENT_JSON:` prefix.

mod types;

mod contract;
mod registry;
mod sale;
mod treasury;

pub use contract::*;
pub use registry::*;
pub use sale::*;
pub use treasury::*;

pub(crate) const STANDARD: &str = "boxoffice";
pub(crate) const VERSION: &str = "1.0.0";
pub(crate) const PREFIX: &str = "EVENT_JSON:";

pub(crate) const TICKET_SALE: &str = "TICKET_SALE";
pub(crate) const REGISTRY: &str = "REGISTRY_UPDATE";
pub(crate) const TREASURY: &str = "TREASURY_UPDATE";
pub(crate) const CONTRACT: &str = "CONTRACT_UPDATE";

pub(crate) fn emit<T: near_sdk::serde::Serialize>(event_type: &str, payload: T) {
    let event = types::Event {
        standard: STANDARD,
        version: VERSION,
        event: event_type,
        data: vec![payload],
    };
    near_sdk::env::log_str(&format!(
        "{PREFIX}{}",
        near_sdk::serde_json::to_string(&event).expect("event serialization failed")
    ));
}
