use near_sdk::serde::Serialize;
use near_sdk::AccountId;

use super::{emit, CONTRACT};

// --- CONTRACT_UPDATE ---

#[derive(Serialize)]
#[serde(crate = "near_sdk::serde")]
struct OwnershipPayload<'a> {
    operation: &'static str,
    author: &'a AccountId,
    old_owner: &'a AccountId,
    new_owner: &'a AccountId,
}

#[derive(Serialize)]
#[serde(crate = "near_sdk::serde")]
struct RolePayload<'a> {
    operation: &'static str,
    author: &'a AccountId,
    account_id: &'a AccountId,
    role: &'a str,
}

#[derive(Serialize)]
#[serde(crate = "near_sdk::serde")]
struct SaleStatePayload<'a> {
    operation: &'static str,
    author: &'a AccountId,
    active: bool,
}

#[derive(Serialize)]
#[serde(crate = "near_sdk::serde")]
struct OrderLimitPayload<'a> {
    operation: &'static str,
    author: &'a AccountId,
    order_limit: u32,
}

#[derive(Serialize)]
#[serde(crate = "near_sdk::serde")]
struct SupplyPayload<'a> {
    operation: &'static str,
    author: &'a AccountId,
    total_max_supply: i64,
}

pub fn emit_owner_transferred(old_owner: &AccountId, new_owner: &AccountId) {
    emit(
        CONTRACT,
        OwnershipPayload {
            operation: "transfer_ownership",
            author: old_owner,
            old_owner,
            new_owner,
        },
    );
}

pub fn emit_role_granted(caller: &AccountId, account_id: &AccountId, role: &str) {
    emit(
        CONTRACT,
        RolePayload {
            operation: "grant_role",
            author: caller,
            account_id,
            role,
        },
    );
}

pub fn emit_role_revoked(caller: &AccountId, account_id: &AccountId, role: &str) {
    emit(
        CONTRACT,
        RolePayload {
            operation: "revoke_role",
            author: caller,
            account_id,
            role,
        },
    );
}

pub fn emit_sale_state_changed(caller: &AccountId, active: bool) {
    emit(
        CONTRACT,
        SaleStatePayload {
            operation: "set_sale_active",
            author: caller,
            active,
        },
    );
}

pub fn emit_order_limit_changed(caller: &AccountId, order_limit: u32) {
    emit(
        CONTRACT,
        OrderLimitPayload {
            operation: "set_order_limit",
            author: caller,
            order_limit,
        },
    );
}

pub fn emit_total_max_supply_changed(caller: &AccountId, total_max_supply: i64) {
    emit(
        CONTRACT,
        SupplyPayload {
            operation: "set_total_max_supply",
            author: caller,
            total_max_supply,
        },
    );
}
