// External contract interfaces for cross-contract calls
//
// `#[ext_contract]` generates helper structs that the compiler flags as dead_code
// even though they are used at runtime for cross-contract calls.
#![allow(dead_code)]

use near_sdk::json_types::U128;
use near_sdk::{ext_contract, AccountId};

/// NEP-141 fungible token interface, the subset used for payouts and
/// deposit withdrawals.
#[ext_contract(ext_ft)]
pub trait FungibleToken {
    fn ft_transfer(&mut self, receiver_id: AccountId, amount: U128, memo: Option<String>);
}
