pub mod completion;
pub mod correlation_id;
pub mod google_wallet;
pub mod issuance;
