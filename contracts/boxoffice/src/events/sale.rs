use near_sdk::json_types::U128;
use near_sdk::serde::Serialize;
use near_sdk::AccountId;

use super::{emit, TICKET_SALE};

// --- TICKET_SALE ---

#[derive(Serialize)]
#[serde(crate = "near_sdk::serde")]
struct PurchasePayload<'a> {
    operation: &'static str,
    author: &'a AccountId,
    receiver_id: &'a AccountId,
    ticket_type: &'a str,
    amount: u32,
    ticket_ids: &'a [String],
    unit_price: U128,
    currency: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    discount_code: Option<&'a str>,
}

#[allow(clippy::too_many_arguments)]
pub fn emit_purchase(
    buyer_id: &AccountId,
    receiver_id: &AccountId,
    ticket_type: &str,
    amount: u32,
    ticket_ids: &[String],
    unit_price: U128,
    currency: &str,
    discount_code: Option<&str>,
) {
    emit(
        TICKET_SALE,
        PurchasePayload {
            operation: "purchase",
            author: buyer_id,
            receiver_id,
            ticket_type,
            amount,
            ticket_ids,
            unit_price,
            currency,
            discount_code,
        },
    );
}
