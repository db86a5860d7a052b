use near_sdk::json_types::U128;
use near_sdk::serde::Serialize;
use near_sdk::AccountId;

use super::{emit, TREASURY};

// --- TREASURY_UPDATE ---

/// One payee's cut in a `distribute` round.
#[derive(Serialize)]
#[serde(crate = "near_sdk::serde")]
pub struct PayoutShare {
    pub payee: AccountId,
    pub amount: U128,
}

#[derive(Serialize)]
#[serde(crate = "near_sdk::serde")]
struct DepositPayload<'a> {
    operation: &'static str,
    author: &'a AccountId,
    beneficiary_id: &'a AccountId,
    currency: &'a str,
    amount: U128,
    balance: U128,
}

#[derive(Serialize)]
#[serde(crate = "near_sdk::serde")]
struct WithdrawPayload<'a> {
    operation: &'static str,
    author: &'a AccountId,
    currency: &'a str,
    amount: U128,
}

#[derive(Serialize)]
#[serde(crate = "near_sdk::serde")]
struct SplitsPayload<'a> {
    operation: &'static str,
    author: &'a AccountId,
    payees: &'a [String],
    base: u32,
}

#[derive(Serialize)]
#[serde(crate = "near_sdk::serde")]
struct DistributionPayload<'a> {
    operation: &'static str,
    author: &'a AccountId,
    currency: &'a str,
    payouts: &'a [PayoutShare],
    dust: U128,
}

#[derive(Serialize)]
#[serde(crate = "near_sdk::serde")]
struct SweepPayload<'a> {
    operation: &'static str,
    author: &'a AccountId,
    payee: &'a AccountId,
    currencies: &'a [String],
}

pub fn emit_deposit_credited(
    payer_id: &AccountId,
    beneficiary_id: &AccountId,
    currency: &str,
    amount: U128,
    balance: U128,
) {
    emit(
        TREASURY,
        DepositPayload {
            operation: "deposit",
            author: payer_id,
            beneficiary_id,
            currency,
            amount,
            balance,
        },
    );
}

pub fn emit_deposit_withdrawn(account_id: &AccountId, currency: &str, amount: U128) {
    emit(
        TREASURY,
        WithdrawPayload {
            operation: "withdraw_deposit",
            author: account_id,
            currency,
            amount,
        },
    );
}

pub fn emit_splits_registered(caller: &AccountId, payees: &[String], base: u32) {
    emit(
        TREASURY,
        SplitsPayload {
            operation: "register_splits",
            author: caller,
            payees,
            base,
        },
    );
}

pub fn emit_distribution(caller: &AccountId, currency: &str, payouts: &[PayoutShare], dust: U128) {
    emit(
        TREASURY,
        DistributionPayload {
            operation: "distribute",
            author: caller,
            currency,
            payouts,
            dust,
        },
    );
}

pub fn emit_sweep(caller: &AccountId, payee: &AccountId, currencies: &[String]) {
    emit(
        TREASURY,
        SweepPayload {
            operation: "distribute_all",
            author: caller,
            payee,
            currencies,
        },
    );
}
