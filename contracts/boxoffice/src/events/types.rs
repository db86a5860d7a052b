use near_sdk::serde::Serialize;

/// NEP-297 envelope. `data` carries exactly one typed payload per emission;
/// the payload type fixes the per-event field set at compile time.
#[derive(Serialize)]
#[serde(crate = "near_sdk::serde")]
pub(crate) struct Event<'a, T> {
    pub(crate) standard: &'a str,
    pub(crate) version: &'a str,
    pub(crate) event: &'a str,
    pub(crate) data: Vec<T>,
}
