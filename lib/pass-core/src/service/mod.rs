pub mod apple_pass;
pub mod claim;
pub mod completion;
pub mod error;
pub mod google_pass;
pub mod issuance;
pub mod relay;
pub mod wifi_setup;
