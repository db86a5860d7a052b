//! Init, roles, and sale-wide settings.

use crate::internal::check_one_yocto;
use crate::*;

#[near]
impl Contract {
    // --- Init ---

    /// `total_max_supply`: None or -1 = unlimited.
    #[init]
    pub fn new(owner_id: AccountId, order_limit: u32, total_max_supply: Option<i64>) -> Self {
        let total_max_supply = total_max_supply.unwrap_or(UNLIMITED);
        near_sdk::require!(total_max_supply >= UNLIMITED, "Invalid total_max_supply");
        Self {
            version: env!("CARGO_PKG_VERSION").to_string(),
            owner_id,
            sale_active: true,
            order_limit,
            total_max_supply,
            minted_count: 0,
            next_ticket_id: 0,
            ticket_types: IterableMap::new(StorageKey::TicketTypes),
            prices: LookupMap::new(StorageKey::Prices),
            currency_tokens: LookupMap::new(StorageKey::CurrencyTokens),
            token_currencies: LookupMap::new(StorageKey::TokenCurrencies),
            currency_keys: Vec::new(),
            discounts: LookupMap::new(StorageKey::Discounts),
            discount_uses: LookupMap::new(StorageKey::DiscountUses),
            tickets: IterableMap::new(StorageKey::Tickets),
            splits: Vec::new(),
            custody: LookupMap::new(StorageKey::Custody),
            deposits: LookupMap::new(StorageKey::Deposits),
            admins: IterableSet::new(StorageKey::Admins),
            managers: IterableSet::new(StorageKey::Managers),
            privileged_minters: IterableSet::new(StorageKey::PrivilegedMinters),
        }
    }

    // --- Ownership ---

    /// Owner only.
    #[payable]
    #[handle_result]
    pub fn transfer_ownership(&mut self, new_owner: AccountId) -> Result<(), BoxofficeError> {
        check_one_yocto()?;
        self.check_owner(&env::predecessor_account_id())?;
        if new_owner == self.owner_id {
            return Err(BoxofficeError::InvalidInput(
                "New owner must differ from current owner".into(),
            ));
        }
        let old_owner = self.owner_id.clone();
        self.owner_id = new_owner;
        events::emit_owner_transferred(&old_owner, &self.owner_id);
        Ok(())
    }

    // --- Roles ---

    /// Owner only.
    #[payable]
    #[handle_result]
    pub fn add_admin(&mut self, account_id: AccountId) -> Result<(), BoxofficeError> {
        check_one_yocto()?;
        self.check_owner(&env::predecessor_account_id())?;
        self.admins.insert(account_id.clone());
        events::emit_role_granted(&self.owner_id, &account_id, "admin");
        Ok(())
    }

    /// Owner only.
    #[payable]
    #[handle_result]
    pub fn remove_admin(&mut self, account_id: AccountId) -> Result<(), BoxofficeError> {
        check_one_yocto()?;
        self.check_owner(&env::predecessor_account_id())?;
        self.admins.remove(&account_id);
        events::emit_role_revoked(&self.owner_id, &account_id, "admin");
        Ok(())
    }

    /// Owner only.
    #[payable]
    #[handle_result]
    pub fn add_manager(&mut self, account_id: AccountId) -> Result<(), BoxofficeError> {
        check_one_yocto()?;
        self.check_owner(&env::predecessor_account_id())?;
        self.managers.insert(account_id.clone());
        events::emit_role_granted(&self.owner_id, &account_id, "manager");
        Ok(())
    }

    /// Owner only.
    #[payable]
    #[handle_result]
    pub fn remove_manager(&mut self, account_id: AccountId) -> Result<(), BoxofficeError> {
        check_one_yocto()?;
        self.check_owner(&env::predecessor_account_id())?;
        self.managers.remove(&account_id);
        events::emit_role_revoked(&self.owner_id, &account_id, "manager");
        Ok(())
    }

    /// Admin level. Privileged minters bypass payment and discount
    /// proof/signature checks (complimentary issuance), never supply checks.
    #[payable]
    #[handle_result]
    pub fn add_privileged_minter(&mut self, account_id: AccountId) -> Result<(), BoxofficeError> {
        check_one_yocto()?;
        let caller = env::predecessor_account_id();
        self.check_admin(&caller)?;
        self.privileged_minters.insert(account_id.clone());
        events::emit_role_granted(&caller, &account_id, "privileged_minter");
        Ok(())
    }

    /// Admin level.
    #[payable]
    #[handle_result]
    pub fn remove_privileged_minter(
        &mut self,
        account_id: AccountId,
    ) -> Result<(), BoxofficeError> {
        check_one_yocto()?;
        let caller = env::predecessor_account_id();
        self.check_admin(&caller)?;
        self.privileged_minters.remove(&account_id);
        events::emit_role_revoked(&caller, &account_id, "privileged_minter");
        Ok(())
    }

    // --- Settings ---

    /// Admin level.
    #[payable]
    #[handle_result]
    pub fn set_sale_active(&mut self, active: bool) -> Result<(), BoxofficeError> {
        check_one_yocto()?;
        let caller = env::predecessor_account_id();
        self.check_admin(&caller)?;
        self.sale_active = active;
        events::emit_sale_state_changed(&caller, active);
        Ok(())
    }

    /// Admin level. The bound is exclusive: orders of exactly `order_limit`
    /// are rejected.
    #[payable]
    #[handle_result]
    pub fn set_order_limit(&mut self, order_limit: u32) -> Result<(), BoxofficeError> {
        check_one_yocto()?;
        let caller = env::predecessor_account_id();
        self.check_admin(&caller)?;
        self.order_limit = order_limit;
        events::emit_order_limit_changed(&caller, order_limit);
        Ok(())
    }

    /// Admin level. -1 = unlimited. May be set below `minted_count`; that
    /// only blocks further purchases, it never unwinds past ones.
    #[payable]
    #[handle_result]
    pub fn set_total_max_supply(&mut self, total_max_supply: i64) -> Result<(), BoxofficeError> {
        check_one_yocto()?;
        let caller = env::predecessor_account_id();
        self.check_admin(&caller)?;
        if total_max_supply < UNLIMITED {
            return Err(BoxofficeError::InvalidInput(
                "total_max_supply must be -1 or non-negative".into(),
            ));
        }
        self.total_max_supply = total_max_supply;
        events::emit_total_max_supply_changed(&caller, total_max_supply);
        Ok(())
    }

    // --- Views ---

    pub fn get_owner(&self) -> &AccountId {
        &self.owner_id
    }

    pub fn is_admin(&self, account_id: AccountId) -> bool {
        account_id == self.owner_id
            || self.admins.contains(&account_id)
            || self.managers.contains(&account_id)
    }

    pub fn is_privileged_minter(&self, account_id: AccountId) -> bool {
        self.privileged_minters.contains(&account_id)
    }

    pub fn is_sale_active(&self) -> bool {
        self.sale_active
    }

    pub fn get_order_limit(&self) -> u32 {
        self.order_limit
    }

    pub fn get_total_max_supply(&self) -> i64 {
        self.total_max_supply
    }

    pub fn total_minted(&self) -> u64 {
        self.minted_count
    }

    pub fn get_version(&self) -> &str {
        &self.version
    }
}
