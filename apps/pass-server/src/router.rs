use std::any::Any;
use std::net::TcpListener;
use std::sync::Arc;
use std::time::Duration;

use axum::body::Body;
use axum::http::header::{AUTHORIZATION, CONTENT_TYPE};
use axum::http::{HeaderValue, Method, Request, Response};
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Json, Router, middleware};
use pass_core::PassCore;
use pass_core::config::core_config::AppConfig;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::{Any as AnyOrigin, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{Span, info, info_span};
use utoipa::OpenApi;

use crate::dto::response::ErrorResponse;
use crate::endpoint::{
    apple_pass, google_pass, misc, pass_callback, wifi_setup, wifi_setup_callback,
};
use crate::middleware::get_http_request_context;
use crate::{ServerConfig, ServerError, build_info, dto};

pub(crate) struct InternalAppState {
    pub core: PassCore,
    pub config: Arc<ServerConfig>,
}

pub(crate) type AppState = Arc<InternalAppState>;

pub async fn start_server(
    listener: TcpListener,
    config: AppConfig<ServerConfig>,
) -> Result<(), ServerError> {
    listener.set_nonblocking(true)?;

    let core = PassCore::new(config.core, None, None)?;

    let config = Arc::new(config.app);
    let state: AppState = Arc::new(InternalAppState {
        core,
        config: config.to_owned(),
    });

    let addr = listener.local_addr()?;
    info!(
        retention = ?state.core.config.relay.retention,
        stream_timeout = ?state.core.config.relay.stream_timeout,
        "Starting server at http://{addr}"
    );

    let router = router(state, &config)?;

    axum::serve(
        tokio::net::TcpListener::from_std(listener)?,
        router.into_make_service(),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;

    Ok(())
}

// open event streams are drained, relayed results still held are dropped
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(error) = tokio::signal::ctrl_c().await {
            tracing::warn!(%error, "Failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(error) => {
                tracing::warn!(%error, "Failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("Shutting down server");
}

fn router(state: AppState, config: &ServerConfig) -> Result<Router, ServerError> {
    let api = Router::new()
        .route(
            "/api/jwtToken",
            post(google_pass::controller::post_save_token),
        )
        .route(
            "/api/generatePkpass",
            post(apple_pass::controller::post_generate_pkpass),
        )
        .route(
            "/api/wallet-pass-callback",
            get(pass_callback::controller::get_pass_result)
                .post(pass_callback::controller::post_pass_callback),
        )
        .route(
            "/api/wallet-pass-callback/events",
            get(pass_callback::controller::get_pass_events),
        )
        .route(
            "/api/wifi-setup",
            post(wifi_setup::controller::post_wifi_setup),
        )
        .route(
            "/api/wifi-setup-callback",
            get(wifi_setup_callback::controller::get_wifi_setup_result)
                .post(wifi_setup_callback::controller::post_wifi_setup_callback),
        )
        .route(
            "/api/wifi-setup-callback/events",
            get(wifi_setup_callback::controller::get_wifi_setup_events),
        );

    let mut technical_endpoints = Router::new();

    if config.enable_server_info {
        technical_endpoints = technical_endpoints
            .route("/build-info", get(misc::get_build_info))
            .route("/health", get(misc::health_check));
    }

    if config.enable_metrics {
        technical_endpoints = technical_endpoints.route("/metrics", get(misc::get_metrics));
    }

    if config.enable_open_api {
        let openapi_documentation = gen_openapi_documentation();
        technical_endpoints = technical_endpoints.route(
            "/api-docs/openapi.json",
            get(move || {
                let documentation = openapi_documentation.clone();
                async move { Json(documentation) }
            }),
        );
    }

    Ok(api
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(|request: &Request<_>| {
                    let context = get_http_request_context(request);
                    info_span!(
                        "http_request",
                        method = context.method,
                        path = context.path,
                        service = "pass-server",
                        RequestId = context.request_id,
                        SessionId = context.session_id,
                    )
                })
                .on_request(|request: &Request<_>, _span: &Span| {
                    tracing::debug!(
                        "SERVICE CALL START {} {}",
                        request.method(),
                        request.uri().path()
                    )
                })
                .on_failure(|_, _, _: &_| {}) // override default on_failure handler
                .on_response(|response: &Response<_>, _: Duration, _span: &Span| {
                    tracing::debug!("SERVICE CALL END {}", response.status())
                }),
        )
        .layer(middleware::from_fn(crate::middleware::new_sentry_hub))
        .layer(middleware::from_fn(crate::middleware::metrics_counter))
        .layer(cors_layer(config)?)
        .merge(technical_endpoints)
        .layer(CatchPanicLayer::custom(handle_panic))
        .with_state(state))
}

fn cors_layer(config: &ServerConfig) -> Result<CorsLayer, ServerError> {
    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([CONTENT_TYPE, AUTHORIZATION]);

    if config.allowed_origins.is_empty() {
        return Ok(cors.allow_origin(AnyOrigin));
    }

    let origins = config
        .allowed_origins
        .iter()
        .map(|origin| {
            HeaderValue::from_str(origin).map_err(|_| ServerError::InvalidOrigin(origin.clone()))
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(cors.allow_origin(origins))
}

fn gen_openapi_documentation() -> utoipa::openapi::OpenApi {
    #[derive(OpenApi)]
    #[openapi(
        paths(
            google_pass::controller::post_save_token,
            apple_pass::controller::post_generate_pkpass,
            pass_callback::controller::post_pass_callback,
            pass_callback::controller::get_pass_result,
            pass_callback::controller::get_pass_events,
            wifi_setup::controller::post_wifi_setup,
            wifi_setup_callback::controller::post_wifi_setup_callback,
            wifi_setup_callback::controller::get_wifi_setup_result,
            wifi_setup_callback::controller::get_wifi_setup_events,

            misc::get_build_info,
            misc::health_check,
            misc::get_metrics,
        ),
        components(
            schemas(
                google_pass::dto::CreateSaveTokenRequestRestDTO,
                google_pass::dto::CreateSaveTokenResponseRestDTO,

                apple_pass::dto::CreateApplePassRequestRestDTO,

                pass_callback::dto::PassCallbackRequestRestDTO,
                pass_callback::dto::PassCallbackResultRestDTO,
                pass_callback::dto::CallbackAcceptedResponseRestDTO,
                pass_callback::dto::PassResultResponseRestDTO,

                wifi_setup::dto::WifiSetupRequestRestDTO,

                wifi_setup_callback::dto::SetupStatusRestEnum,
                wifi_setup_callback::dto::WifiSetupCallbackRequestRestDTO,
                wifi_setup_callback::dto::WifiSetupResultResponseRestDTO,

                dto::error::ErrorResponseRestDTO,
                dto::error::ErrorCode,
                dto::error::NotReadyReasonRestEnum,
                dto::error::Cause,
            )
        ),
        tags(
            (name = "google_pass", description = "Google Wallet save tokens"),
            (name = "apple_pass", description = "Apple Wallet pass generation"),
            (name = "wallet_pass_relay", description = "Finished pass delivery"),
            (name = "wifi_setup", description = "Merchant WiFi provisioning"),
            (name = "wifi_setup_relay", description = "WiFi setup outcome delivery"),
            (name = "other", description = "Other utility endpoints"),
        ),
    )]
    struct ApiDoc;

    let mut documentation = ApiDoc::openapi();
    documentation.info.title = "Wallet pass server".to_string();
    documentation.info.version = build_info::PKG_VERSION.to_string();
    documentation
}

fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response<Body> {
    let message = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "Unknown panic message".to_string()
    };

    tracing::error!("PANIC occurred in request: {message}");

    ErrorResponse::for_panic(message).into_response()
}
