use crate::tests::test_utils::*;
use crate::*;
use near_sdk::json_types::U128;
use near_sdk::testing_env;

#[test]
fn batch_allocates_sequential_ids_across_elements() {
    let mut contract = setup_sale(1_000);
    register_type(&mut contract, "vip", UNLIMITED, true, false);
    register_native_price(&mut contract, "vip", 3_000);

    testing_env!(context_with_deposit(buyer(), 8_000).build());
    let ids = contract
        .purchase_batch(vec![request("ga", 2), request("vip", 1), request("ga", 1)])
        .unwrap();
    assert_eq!(ids, vec![0, 1, 2, 3]);
    assert_eq!(contract.total_minted(), 4);
    assert_eq!(contract.get_ticket(2).unwrap().ticket_type, "vip");
    // 2 * 1000 + 3000 + 1000
    assert_eq!(
        contract.get_custody_balance(NATIVE_CURRENCY.to_string()),
        U128(6_000)
    );
    // One counter bump per element, two elements named "ga".
    assert_eq!(contract.get_purchased_count("ga".to_string()), Some(2));
}

#[test]
fn underfunded_batch_rejects_with_no_mutation() {
    let mut contract = setup_sale(1_000);
    // Three valid elements, funding for two.
    testing_env!(context_with_deposit(buyer(), 2_000).build());
    let err = contract
        .purchase_batch(vec![request("ga", 1), request("ga", 1), request("ga", 1)])
        .unwrap_err();
    assert!(matches!(err, BoxofficeError::Payment(_)));

    assert_eq!(contract.total_minted(), 0);
    assert_eq!(contract.get_purchased_count("ga".to_string()), Some(0));
    assert_eq!(
        contract.get_custody_balance(NATIVE_CURRENCY.to_string()),
        U128(0)
    );
    assert!(contract.get_ticket(0).is_none());
}

#[test]
fn one_bad_element_aborts_the_whole_batch() {
    let mut contract = setup_sale(1_000);
    testing_env!(context_with_deposit(buyer(), 10_000).build());
    let err = contract
        .purchase_batch(vec![request("ga", 1), request("ghost", 1)])
        .unwrap_err();
    assert!(matches!(err, BoxofficeError::Validation(_)));
    assert_eq!(contract.total_minted(), 0);
}

#[test]
fn batch_elements_see_earlier_staged_supply() {
    let mut contract = new_contract();
    register_type(&mut contract, "ga", 2, true, false);
    register_native_price(&mut contract, "ga", 1_000);

    // Element 1 stages one counter bump and 2 tickets; element 2 then
    // fails the per-type check (1 + 2 > 2) exactly as sequential calls would.
    testing_env!(context_with_deposit(buyer(), 4_000).build());
    let err = contract
        .purchase_batch(vec![request("ga", 2), request("ga", 2)])
        .unwrap_err();
    assert!(matches!(err, BoxofficeError::Validation(_)));
    assert_eq!(contract.total_minted(), 0);
}

#[test]
fn batch_elements_see_earlier_staged_discount_uses() {
    let mut contract = setup_sale(1_000);
    let (root, proof) = allowlist_root_and_proof(&[buyer()], 0);
    let mut d = allowlist_discount("ga", "early", 1_000, root);
    d.max_uses_total = 1;
    register_discount(&mut contract, d);

    let with_claim = || {
        let mut req = request("ga", 1);
        req.discount = Some(DiscountClaim {
            code: "early".to_string(),
            proof: proof.clone(),
            signature: None,
        });
        req
    };

    testing_env!(context_with_deposit(buyer(), 1_800).build());
    let err = contract
        .purchase_batch(vec![with_claim(), with_claim()])
        .unwrap_err();
    assert!(matches!(err, BoxofficeError::Discount(_)));
    assert_eq!(
        contract.get_discount("ga".to_string(), "early".to_string()).unwrap().total_uses,
        0
    );
}

#[test]
fn batch_elements_see_earlier_staged_deposit_debits() {
    let mut contract = new_contract();
    register_type(&mut contract, "ga", UNLIMITED, true, false);
    register_token_price(&mut contract, "ga", "usdc", token_contract(), 600);

    testing_env!(context(token_contract()).build());
    contract.ft_on_transfer(buyer(), U128(1_000), String::new());

    let usdc_request = || {
        let mut req = request("ga", 1);
        req.currency = "usdc".to_string();
        req
    };

    testing_env!(context(buyer()).build());
    let err = contract
        .purchase_batch(vec![usdc_request(), usdc_request()])
        .unwrap_err();
    assert!(matches!(err, BoxofficeError::Payment(_)));
    assert_eq!(
        contract.get_deposit_balance(buyer(), "usdc".to_string()),
        U128(1_000)
    );
}

#[test]
fn batch_size_is_bounded() {
    let mut contract = setup_sale(1_000);
    testing_env!(context_with_deposit(buyer(), 1_000).build());
    assert!(matches!(
        contract.purchase_batch(vec![]).unwrap_err(),
        BoxofficeError::InvalidInput(_)
    ));

    let items: Vec<_> = (0..MAX_BATCH_PURCHASE + 1).map(|_| request("ga", 1)).collect();
    assert!(matches!(
        contract.purchase_batch(items).unwrap_err(),
        BoxofficeError::InvalidInput(_)
    ));
}
