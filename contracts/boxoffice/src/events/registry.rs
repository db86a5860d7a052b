use near_sdk::serde::Serialize;
use near_sdk::AccountId;

use super::{emit, REGISTRY};

// --- REGISTRY_UPDATE ---

#[derive(Serialize)]
#[serde(crate = "near_sdk::serde")]
struct TypesPayload<'a> {
    operation: &'static str,
    author: &'a AccountId,
    keys: &'a [String],
}

#[derive(Serialize)]
#[serde(crate = "near_sdk::serde")]
struct CountPayload<'a> {
    operation: &'static str,
    author: &'a AccountId,
    count: u32,
}

#[derive(Serialize)]
#[serde(crate = "near_sdk::serde")]
struct CurrencyPayload<'a> {
    operation: &'static str,
    author: &'a AccountId,
    currency: &'a str,
    token_account: &'a AccountId,
}

pub fn emit_ticket_types_registered(caller: &AccountId, keys: &[String]) {
    emit(
        REGISTRY,
        TypesPayload {
            operation: "register_ticket_types",
            author: caller,
            keys,
        },
    );
}

pub fn emit_prices_registered(caller: &AccountId, count: u32) {
    emit(
        REGISTRY,
        CountPayload {
            operation: "register_prices",
            author: caller,
            count,
        },
    );
}

pub fn emit_currency_registered(caller: &AccountId, currency: &str, token_account: &AccountId) {
    emit(
        REGISTRY,
        CurrencyPayload {
            operation: "register_currency",
            author: caller,
            currency,
            token_account,
        },
    );
}

pub fn emit_discounts_registered(caller: &AccountId, count: u32) {
    emit(
        REGISTRY,
        CountPayload {
            operation: "register_discounts",
            author: caller,
            count,
        },
    );
}
