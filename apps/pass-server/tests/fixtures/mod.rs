use pass_core::config::core_config::AppConfig;
use pass_server::ServerConfig;
use secrecy::SecretString;

pub const PRIVATE_KEY: &str = include_str!("private_key.pem");
pub const PUBLIC_KEY: &str = include_str!("public_key.pem");

pub const ISSUER_ID: &str = "3388000000022";
pub const SERVICE_EMAIL: &str = "wallet@demo.iam.gserviceaccount.com";
pub const UPSTREAM_TOKEN: &str = "upstream-token";

#[derive(Default)]
pub struct TestingConfigParams {
    pub without_private_key: bool,
    pub hide_error_response_cause: bool,
    pub additional_config: Option<String>,
}

pub fn create_config(
    upstream_url: impl AsRef<str>,
    params: Option<TestingConfigParams>,
) -> AppConfig<ServerConfig> {
    let params = params.unwrap_or_default();
    let upstream_url = upstream_url.as_ref();

    let root = std::env!("CARGO_MANIFEST_DIR");
    let base_config = std::fs::read_to_string(format!("{root}/../../config/config.yml")).unwrap();

    let test_config = indoc::formatdoc! {"
        googlePass:
            issuerId: \"{ISSUER_ID}\"
            serviceEmail: \"{SERVICE_EMAIL}\"
        upstream:
            walletPassUrl: \"{upstream_url}\"
            bearerToken: \"{UPSTREAM_TOKEN}\"
            requestTimeout: 5
        relay:
            streamTimeout: 2
            callbackBaseUrl: \"http://pass-server.test\"
    "};

    let configs = [base_config, test_config]
        .into_iter()
        .chain(params.additional_config);

    let mut app_config: AppConfig<ServerConfig> = AppConfig::from_yaml(configs).unwrap();

    if !params.without_private_key {
        app_config.core.google_pass.private_key = Some(SecretString::from(PRIVATE_KEY));
    }

    app_config.app = ServerConfig {
        server_ip: None,
        server_port: None,
        trace_json: None,
        trace_level: Some("debug,hyper=error".into()),
        sentry_dsn: None,
        sentry_environment: None,
        hide_error_response_cause: params.hide_error_response_cause,
        allowed_origins: vec![],
        enable_metrics: true,
        enable_server_info: true,
        enable_open_api: true,
    };

    app_config
}
