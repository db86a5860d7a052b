//! Ticket-type and price registries.
//! Registration is idempotent-by-key: re-registering a key overwrites its
//! static descriptor but never resets its purchase counter.

use crate::internal::{check_one_yocto, price_key};
use crate::*;

#[near]
impl Contract {
    /// Admin level. Registers or overwrites ticket types.
    #[payable]
    #[handle_result]
    pub fn register_ticket_types(
        &mut self,
        entries: Vec<TicketTypeDescriptor>,
    ) -> Result<(), BoxofficeError> {
        check_one_yocto()?;
        let caller = env::predecessor_account_id();
        self.check_admin(&caller)?;
        if entries.is_empty() || entries.len() > MAX_REGISTRATION_ENTRIES {
            return Err(BoxofficeError::InvalidInput(format!(
                "1-{} entries per call",
                MAX_REGISTRATION_ENTRIES
            )));
        }

        let mut keys = Vec::with_capacity(entries.len());
        for entry in entries {
            let TicketTypeDescriptor {
                key,
                display_name,
                max_supply,
                active,
                locked,
                gated,
            } = entry;

            if key.is_empty() || key.len() > 64 {
                return Err(BoxofficeError::Config(
                    "Type key must be 1-64 characters".into(),
                ));
            }
            // ':' would collide with composite price/discount keys.
            if key.contains(DELIMITER) {
                return Err(BoxofficeError::Config(format!(
                    "Type key cannot contain '{}': {}",
                    DELIMITER, key
                )));
            }
            if max_supply < UNLIMITED {
                return Err(BoxofficeError::Config(
                    "max_supply must be -1 or non-negative".into(),
                ));
            }

            // Overwrite static fields, preserve the counter.
            let purchased_count = self
                .ticket_types
                .get(&key)
                .map(|t| t.purchased_count)
                .unwrap_or(0);

            self.ticket_types.insert(
                key.clone(),
                TicketType {
                    key: key.clone(),
                    display_name,
                    max_supply,
                    active,
                    locked,
                    gated,
                    purchased_count,
                },
            );
            keys.push(key);
        }

        events::emit_ticket_types_registered(&caller, &keys);
        Ok(())
    }

    /// Admin level. Registers or overwrites per-(type, currency) prices.
    /// Fails if a referenced type does not exist; prices cannot precede types.
    #[payable]
    #[handle_result]
    pub fn register_prices(
        &mut self,
        entries: Vec<PriceDescriptor>,
    ) -> Result<(), BoxofficeError> {
        check_one_yocto()?;
        let caller = env::predecessor_account_id();
        self.check_admin(&caller)?;
        if entries.is_empty() || entries.len() > MAX_REGISTRATION_ENTRIES {
            return Err(BoxofficeError::InvalidInput(format!(
                "1-{} entries per call",
                MAX_REGISTRATION_ENTRIES
            )));
        }

        let mut count = 0u32;
        for entry in entries {
            let PriceDescriptor {
                ticket_type,
                currency,
                unit_price,
                token_account,
            } = entry;

            if !self.ticket_types.contains_key(&ticket_type) {
                return Err(BoxofficeError::Config(format!(
                    "Price registered against unknown type: {}",
                    ticket_type
                )));
            }
            if currency.is_empty() || currency.contains(DELIMITER) {
                return Err(BoxofficeError::Config(format!(
                    "Invalid currency key: {}",
                    currency
                )));
            }

            if currency == NATIVE_CURRENCY {
                if token_account.is_some() {
                    return Err(BoxofficeError::Config(
                        "Native currency cannot carry a token account".into(),
                    ));
                }
            } else if let Some(token) = token_account {
                // First non-native account seen for a currency key wins;
                // later registrations never remap it.
                if !self.currency_tokens.contains_key(&currency) {
                    self.currency_tokens.insert(currency.clone(), token.clone());
                    self.token_currencies.insert(token.clone(), currency.clone());
                    self.currency_keys.push(currency.clone());
                    events::emit_currency_registered(&caller, &currency, &token);
                }
            } else if !self.currency_tokens.contains_key(&currency) {
                return Err(BoxofficeError::Config(format!(
                    "Unmapped currency {} requires a token account",
                    currency
                )));
            }

            self.prices
                .insert(price_key(&ticket_type, &currency), PriceEntry { unit_price });
            count += 1;
        }

        events::emit_prices_registered(&caller, count);
        Ok(())
    }

    // --- Views ---

    pub fn get_ticket_type(&self, key: String) -> Option<&TicketType> {
        self.ticket_types.get(&key)
    }

    pub fn get_ticket_types(&self, from_index: Option<u32>, limit: Option<u32>) -> Vec<&TicketType> {
        let from = from_index.unwrap_or(0) as usize;
        let limit = limit.unwrap_or(50) as usize;
        self.ticket_types
            .values()
            .skip(from)
            .take(limit)
            .collect()
    }

    pub fn get_purchased_count(&self, key: String) -> Option<u64> {
        self.ticket_types.get(&key).map(|t| t.purchased_count)
    }

    pub fn get_max_supply(&self, key: String) -> Option<i64> {
        self.ticket_types.get(&key).map(|t| t.max_supply)
    }

    pub fn get_price(&self, ticket_type: String, currency: String) -> Option<U128> {
        self.prices
            .get(&price_key(&ticket_type, &currency))
            .map(|p| p.unit_price)
    }

    pub fn get_currency_token(&self, currency: String) -> Option<&AccountId> {
        self.currency_tokens.get(&currency)
    }

    pub fn get_currencies(&self) -> &[String] {
        &self.currency_keys
    }

    pub fn get_ticket(&self, ticket_id: u64) -> Option<&Ticket> {
        self.tickets.get(&ticket_id)
    }
}
