pub mod completion_stream;
pub mod http_client;
pub mod pass_signer;
