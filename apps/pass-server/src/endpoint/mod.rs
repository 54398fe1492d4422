pub mod misc;

pub mod apple_pass;
pub mod google_pass;
pub mod pass_callback;
pub mod wifi_setup;
pub mod wifi_setup_callback;

mod event_stream;
