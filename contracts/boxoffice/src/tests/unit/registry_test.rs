use crate::tests::test_utils::*;
use crate::*;
use near_sdk::json_types::U128;
use near_sdk::testing_env;

// --- Ticket types ---

#[test]
fn register_and_read_ticket_type() {
    let mut contract = new_contract();
    register_type(&mut contract, "vip", 100, true, false);

    let t = contract.get_ticket_type("vip".to_string()).unwrap();
    assert_eq!(t.key, "vip");
    assert_eq!(t.display_name, "VIP");
    assert_eq!(t.max_supply, 100);
    assert!(t.active);
    assert!(!t.gated);
    assert_eq!(t.purchased_count, 0);
    assert_eq!(contract.get_max_supply("vip".to_string()), Some(100));
}

#[test]
fn ticket_types_are_paged() {
    let mut contract = new_contract();
    register_type(&mut contract, "a", UNLIMITED, true, false);
    register_type(&mut contract, "b", UNLIMITED, true, false);
    register_type(&mut contract, "c", UNLIMITED, true, false);

    assert_eq!(contract.get_ticket_types(None, None).len(), 3);
    assert_eq!(contract.get_ticket_types(Some(1), Some(1)).len(), 1);
    assert_eq!(contract.get_ticket_types(Some(3), None).len(), 0);
}

#[test]
fn type_key_rejects_delimiter_and_bad_lengths() {
    let mut contract = new_contract();
    testing_env!(context_with_deposit(owner(), 1).build());

    let err = contract
        .register_ticket_types(vec![type_descriptor("vip:gold", 10, true, false)])
        .unwrap_err();
    assert!(matches!(err, BoxofficeError::Config(_)));

    let err = contract
        .register_ticket_types(vec![type_descriptor("", 10, true, false)])
        .unwrap_err();
    assert!(matches!(err, BoxofficeError::Config(_)));

    let err = contract
        .register_ticket_types(vec![type_descriptor(&"x".repeat(65), 10, true, false)])
        .unwrap_err();
    assert!(matches!(err, BoxofficeError::Config(_)));
}

#[test]
fn type_max_supply_rejects_below_sentinel() {
    let mut contract = new_contract();
    testing_env!(context_with_deposit(owner(), 1).build());
    let err = contract
        .register_ticket_types(vec![type_descriptor("vip", -2, true, false)])
        .unwrap_err();
    assert!(matches!(err, BoxofficeError::Config(_)));
}

#[test]
fn reregistering_type_preserves_purchase_counter() {
    let mut contract = setup_sale(1_000);
    testing_env!(context_with_deposit(buyer(), 2_000).build());
    contract.purchase(request("ga", 2)).unwrap();
    assert_eq!(contract.get_purchased_count("ga".to_string()), Some(1));

    register_type(&mut contract, "ga", 50, false, true);
    let t = contract.get_ticket_type("ga".to_string()).unwrap();
    assert_eq!(t.purchased_count, 1);
    assert_eq!(t.max_supply, 50);
    assert!(!t.active);
    assert!(t.gated);
}

#[test]
fn registration_rejects_non_admin_and_empty_batch() {
    let mut contract = new_contract();
    testing_env!(context_with_deposit(buyer(), 1).build());
    let err = contract
        .register_ticket_types(vec![type_descriptor("vip", 10, true, false)])
        .unwrap_err();
    assert!(matches!(err, BoxofficeError::Unauthorized(_)));

    testing_env!(context_with_deposit(owner(), 1).build());
    let err = contract.register_ticket_types(vec![]).unwrap_err();
    assert!(matches!(err, BoxofficeError::InvalidInput(_)));
}

// --- Prices ---

#[test]
fn price_requires_existing_type() {
    let mut contract = new_contract();
    testing_env!(context_with_deposit(owner(), 1).build());
    let err = contract
        .register_prices(vec![PriceDescriptor {
            ticket_type: "ghost".to_string(),
            currency: NATIVE_CURRENCY.to_string(),
            unit_price: U128(1_000),
            token_account: None,
        }])
        .unwrap_err();
    assert!(matches!(err, BoxofficeError::Config(_)));
}

#[test]
fn native_price_rejects_token_account() {
    let mut contract = new_contract();
    register_type(&mut contract, "ga", UNLIMITED, true, false);
    testing_env!(context_with_deposit(owner(), 1).build());
    let err = contract
        .register_prices(vec![PriceDescriptor {
            ticket_type: "ga".to_string(),
            currency: NATIVE_CURRENCY.to_string(),
            unit_price: U128(1_000),
            token_account: Some(token_contract()),
        }])
        .unwrap_err();
    assert!(matches!(err, BoxofficeError::Config(_)));
}

#[test]
fn first_token_account_wins_for_a_currency() {
    let mut contract = new_contract();
    register_type(&mut contract, "ga", UNLIMITED, true, false);
    register_token_price(&mut contract, "ga", "usdc", token_contract(), 500);
    assert_eq!(
        contract.get_currency_token("usdc".to_string()),
        Some(&token_contract())
    );
    assert_eq!(contract.get_currencies(), &["usdc".to_string()]);

    // Later registration with a different account never remaps the key.
    register_token_price(&mut contract, "ga", "usdc", other(), 600);
    assert_eq!(
        contract.get_currency_token("usdc".to_string()),
        Some(&token_contract())
    );
    assert_eq!(
        contract.get_price("ga".to_string(), "usdc".to_string()),
        Some(U128(600))
    );
}

#[test]
fn unmapped_currency_requires_token_account() {
    let mut contract = new_contract();
    register_type(&mut contract, "ga", UNLIMITED, true, false);
    testing_env!(context_with_deposit(owner(), 1).build());
    let err = contract
        .register_prices(vec![PriceDescriptor {
            ticket_type: "ga".to_string(),
            currency: "usdc".to_string(),
            unit_price: U128(500),
            token_account: None,
        }])
        .unwrap_err();
    assert!(matches!(err, BoxofficeError::Config(_)));
}

#[test]
fn price_overwrite_replaces_amount() {
    let mut contract = setup_sale(1_000);
    register_native_price(&mut contract, "ga", 2_500);
    assert_eq!(
        contract.get_price("ga".to_string(), NATIVE_CURRENCY.to_string()),
        Some(U128(2_500))
    );
}
