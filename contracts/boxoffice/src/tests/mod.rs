
// --- Unit Tests ---
pub mod unit {
    pub mod admin_test;
    pub mod batch_test;
    pub mod discount_test;
    pub mod ft_receiver_test;
    pub mod purchase_test;
    pub mod registry_test;
    pub mod splits_test;
}
