#![cfg_attr(feature = "strict", deny(warnings))]

//! Runs the pass claim and WiFi setup flows against a pass server.

use std::process::ExitCode;
use std::sync::Arc;
use std::time::Duration;

use clap::{Parser, Subcommand};
use pass_core::model::correlation_id::CorrelationId;
use pass_core::model::issuance::Platform;
use pass_core::provider::completion_stream::sse::SseStreamProvider;
use pass_core::provider::http_client::reqwest_client::ReqwestClient;
use pass_core::service::claim::dto::{ClaimPassRequestDTO, WifiSetupClaimRequestDTO};
use pass_core::service::claim::{ClaimConfig, ClaimService};
use pass_core::service::error::ServiceError;
use serde_json::json;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Pass server hosting the issuance and relay endpoints
    #[arg(long, env = "PASS_BACKEND_URL", default_value = "http://localhost:3000")]
    backend_url: String,

    /// Seconds to wait for the completion event, overrides the flow default
    #[arg(long)]
    timeout: Option<u64>,

    /// Log filter (trace, debug, info, warn, error)
    #[arg(long, default_value = "warn")]
    log_level: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Request a loyalty pass and wait for its download URL
    Pass {
        #[arg(long)]
        campaign: String,
        /// Wallet address of the card holder
        #[arg(long)]
        wallet_address: String,
        #[arg(long)]
        card_id: String,
        /// apple or google
        #[arg(long, default_value = "apple")]
        platform: Platform,
    },

    /// Submit merchant WiFi credentials and wait for the outcome
    WifiSetup {
        #[arg(long)]
        username: String,
        #[arg(long)]
        password: String,
        #[arg(long)]
        ssid: String,
        #[arg(long)]
        wifi_password: String,
    },

    /// Look once at the pass relay without waiting
    Poll {
        /// Correlation id, `{cardId}-{walletAddress}`
        #[arg(long)]
        id: String,
    },
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&cli.log_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    match run(cli).await {
        Ok(output) => {
            println!("{output}");
            ExitCode::SUCCESS
        }
        Err(error) => {
            tracing::error!(%error, code = %error.error_code(), "Claim failed");
            println!(
                "{}",
                json!({ "error": error.to_string(), "code": error.error_code().to_string() })
            );
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<serde_json::Value, ServiceError> {
    let service = claim_service(&cli);

    match cli.command {
        Commands::Pass {
            campaign,
            wallet_address,
            card_id,
            platform,
        } => {
            let claimed = service
                .claim_pass(ClaimPassRequestDTO {
                    campaign: Some(campaign),
                    wallet_address: Some(wallet_address),
                    card_id,
                    platform,
                })
                .await?;

            Ok(json!({
                "id": claimed.correlation_id,
                "fileURL": claimed.file_url,
            }))
        }
        Commands::WifiSetup {
            username,
            password,
            ssid,
            wifi_password,
        } => {
            let outcome = service
                .setup_wifi(WifiSetupClaimRequestDTO {
                    username,
                    password,
                    ssid,
                    wifi_password,
                })
                .await?;

            Ok(json!({
                "setupId": outcome.setup_id,
                "status": outcome.status,
                "message": outcome.message,
            }))
        }
        Commands::Poll { id } => {
            let id = CorrelationId::from(id);
            let file_url = service.poll_pass_result(&id).await?;

            Ok(json!({
                "id": id,
                "ready": file_url.is_some(),
                "fileURL": file_url,
            }))
        }
    }
}

fn claim_service(cli: &Cli) -> ClaimService {
    let mut config = ClaimConfig::new(cli.backend_url.clone());
    if let Some(timeout) = cli.timeout.map(Duration::from_secs) {
        config.pass_timeout = timeout;
        config.wifi_setup_timeout = timeout;
    }

    ClaimService::new(
        Arc::new(ReqwestClient::default()),
        Arc::new(SseStreamProvider::new(
            reqwest::Client::new(),
            cli.backend_url.clone(),
        )),
        config,
    )
}
