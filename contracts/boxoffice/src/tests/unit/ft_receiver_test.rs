use crate::tests::test_utils::*;
use crate::*;
use near_sdk::json_types::U128;
use near_sdk::testing_env;

fn contract_with_usdc() -> Contract {
    let mut contract = new_contract();
    register_type(&mut contract, "ga", UNLIMITED, true, false);
    register_token_price(&mut contract, "ga", "usdc", token_contract(), 500);
    contract
}

#[test]
fn transfer_from_registered_token_credits_sender() {
    let mut contract = contract_with_usdc();
    testing_env!(context(token_contract()).build());
    contract.ft_on_transfer(buyer(), U128(1_000), String::new());
    assert_eq!(
        contract.get_deposit_balance(buyer(), "usdc".to_string()),
        U128(1_000)
    );

    // Deposits accumulate.
    contract.ft_on_transfer(buyer(), U128(250), String::new());
    assert_eq!(
        contract.get_deposit_balance(buyer(), "usdc".to_string()),
        U128(1_250)
    );
}

#[test]
fn msg_names_a_beneficiary() {
    let mut contract = contract_with_usdc();
    testing_env!(context(token_contract()).build());
    contract.ft_on_transfer(buyer(), U128(700), other().to_string());
    assert_eq!(
        contract.get_deposit_balance(other(), "usdc".to_string()),
        U128(700)
    );
    assert_eq!(
        contract.get_deposit_balance(buyer(), "usdc".to_string()),
        U128(0)
    );
}

#[test]
#[should_panic(expected = "Unregistered token contract")]
fn transfer_from_unregistered_token_panics() {
    let mut contract = contract_with_usdc();
    testing_env!(context(other()).build());
    contract.ft_on_transfer(buyer(), U128(1_000), String::new());
}

#[test]
#[should_panic(expected = "Amount must be positive")]
fn zero_amount_panics() {
    let mut contract = contract_with_usdc();
    testing_env!(context(token_contract()).build());
    contract.ft_on_transfer(buyer(), U128(0), String::new());
}

#[test]
#[should_panic(expected = "Invalid account_id in msg")]
fn malformed_beneficiary_panics() {
    let mut contract = contract_with_usdc();
    testing_env!(context(token_contract()).build());
    contract.ft_on_transfer(buyer(), U128(100), "not a valid account".to_string());
}

// --- Withdrawals ---

#[test]
fn withdraw_debits_before_the_transfer() {
    let mut contract = contract_with_usdc();
    testing_env!(context(token_contract()).build());
    contract.ft_on_transfer(buyer(), U128(1_000), String::new());

    testing_env!(context_with_deposit(buyer(), 1).build());
    contract
        .withdraw_deposit("usdc".to_string(), Some(U128(400)))
        .unwrap();
    assert_eq!(
        contract.get_deposit_balance(buyer(), "usdc".to_string()),
        U128(600)
    );

    // None withdraws the remainder.
    contract.withdraw_deposit("usdc".to_string(), None).unwrap();
    assert_eq!(
        contract.get_deposit_balance(buyer(), "usdc".to_string()),
        U128(0)
    );
}

#[test]
fn withdraw_rejects_overdraw_and_empty_balance() {
    let mut contract = contract_with_usdc();
    testing_env!(context(token_contract()).build());
    contract.ft_on_transfer(buyer(), U128(100), String::new());

    testing_env!(context_with_deposit(buyer(), 1).build());
    let err = contract
        .withdraw_deposit("usdc".to_string(), Some(U128(101)))
        .err().unwrap();
    assert!(matches!(err, BoxofficeError::Payment(_)));

    testing_env!(context_with_deposit(other(), 1).build());
    let err = contract.withdraw_deposit("usdc".to_string(), None).err().unwrap();
    assert!(matches!(err, BoxofficeError::Payment(_)));
}

#[test]
fn withdraw_rejects_unknown_currency() {
    let mut contract = contract_with_usdc();
    testing_env!(context_with_deposit(buyer(), 1).build());
    let err = contract.withdraw_deposit("eurc".to_string(), None).err().unwrap();
    assert!(matches!(err, BoxofficeError::Validation(_)));
}

#[test]
fn withdraw_requires_one_yocto() {
    let mut contract = contract_with_usdc();
    testing_env!(context(buyer()).build());
    let err = contract.withdraw_deposit("usdc".to_string(), None).err().unwrap();
    assert!(matches!(err, BoxofficeError::Payment(_)));
}
