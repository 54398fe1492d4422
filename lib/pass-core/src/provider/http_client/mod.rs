pub mod reqwest_client;

use std::collections::HashMap;
use std::fmt::Display;
use std::sync::Arc;

use serde::Serialize;
use serde::de::DeserializeOwned;
use thiserror::Error;


/// Outbound HTTP used for the issuance trigger and upstream forwarding.
#[cfg_attr(any(test, feature = "mock"), mockall::automock)]
#[async_trait::async_trait]
pub trait HttpClient: Send + Sync {
    fn get(&self, url: &str) -> RequestBuilder;
    fn post(&self, url: &str) -> RequestBuilder;

    async fn send(
        &self,
        url: &str,
        body: Option<Vec<u8>>,
        headers: Option<Headers>,
        method: Method,
    ) -> Result<Response, Error>;
}

pub type Headers = HashMap<String, String>;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct StatusCode(pub u16);

#[derive(Clone, Debug)]
pub struct Request {
    pub body: Option<Vec<u8>>,
    pub headers: Headers,
    pub method: Method,
    pub url: String,
}

#[derive(Debug)]
pub struct Response {
    pub body: Vec<u8>,
    pub headers: Headers,
    pub status: StatusCode,

    pub request: Request,
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("HTTP error: {0}")]
    HttpError(String),
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
    #[error("Other HTTP client error: {0}")]
    Other(String),
}

impl Error {
    fn log_error(self, location: &std::panic::Location, request: &Request) -> Self {
        let debug_message = format!("\n{} {} - {self}", request.method, request.url);
        tracing::error!(%debug_message, %location);

        self
    }
}

impl Response {
    #[track_caller]
    pub fn json<T: DeserializeOwned>(&self) -> Result<T, Error> {
        serde_json::from_slice(&self.body).map_err(|error| {
            let location = std::panic::Location::caller();
            Error::JsonError(error).log_error(location, &self.request)
        })
    }

    /// Message a failing backend put in its JSON body, under `error` or `message`.
    pub fn error_message(&self) -> Option<String> {
        let body: serde_json::Value = serde_json::from_slice(&self.body).ok()?;

        ["error", "message"]
            .into_iter()
            .find_map(|key| body.get(key).and_then(|value| value.as_str()))
            .filter(|message| !message.is_empty())
            .map(ToOwned::to_owned)
    }

    #[track_caller]
    fn log_success(self) -> Self {
        let location = std::panic::Location::caller();
        let debug_message = format!(
            "\n{} {} - HTTP {}",
            self.request.method, self.request.url, self.status
        );
        tracing::debug!(%debug_message, %location);
        log_request_details(location, &self.request);

        let trace_response = format!(
            "\nResponse\nStatus: {}\nHeaders:\n{}\nBody:\n{}\n",
            self.status,
            format_headers(&self.headers),
            format_body(Some(&self.body))
        );
        tracing::trace!(%trace_response, %location);

        self
    }
}

impl StatusCode {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.0)
    }

    pub fn is_client_error(&self) -> bool {
        (400..500).contains(&self.0)
    }

    pub fn is_server_error(&self) -> bool {
        (500..600).contains(&self.0)
    }

    pub fn canonical_reason(&self) -> Option<&'static str> {
        reqwest::StatusCode::from_u16(self.0)
            .ok()
            .and_then(|status| status.canonical_reason())
    }
}

impl Display for StatusCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, strum::Display)]
pub enum Method {
    #[strum(serialize = "GET")]
    Get,
    #[strum(serialize = "POST")]
    Post,
}

pub struct RequestBuilder {
    client: Arc<dyn HttpClient>,
    body: Option<Vec<u8>>,
    headers: Headers,
    method: Method,
    url: String,
}

impl RequestBuilder {
    pub fn new(client: Arc<dyn HttpClient>, method: Method, url: &str) -> Self {
        Self {
            client,
            body: None,
            headers: Headers::default(),
            method,
            url: url.to_string(),
        }
    }

    pub fn bearer_auth(mut self, token: &str) -> Self {
        self.headers
            .insert("Authorization".to_string(), format!("Bearer {token}"));
        self
    }

    #[track_caller]
    pub fn json<T: Serialize>(mut self, value: T) -> Result<Self, Error> {
        let location = std::panic::Location::caller();

        self.headers
            .insert("Content-Type".to_string(), "application/json".to_owned());
        self.body = Some(
            serde_json::to_vec(&value)
                .map_err(|e| Error::JsonError(e).log_error(location, &self.as_request()))?,
        );
        Ok(self)
    }

    pub async fn send(self) -> Result<Response, Error> {
        let location = std::panic::Location::caller();
        let request = self.as_request();

        let headers = (!self.headers.is_empty()).then_some(self.headers);

        self.client
            .send(&self.url, self.body, headers, self.method)
            .await
            .map(Response::log_success)
            .map_err(|e| {
                let error = e.log_error(location, &request);
                log_request_details(location, &request);
                error
            })
    }

    fn as_request(&self) -> Request {
        Request {
            body: self.body.clone(),
            headers: self.headers.clone(),
            method: self.method,
            url: self.url.clone(),
        }
    }
}

fn format_headers(headers: &Headers) -> String {
    if headers.is_empty() {
        return "<None>".to_string();
    }

    headers
        .iter()
        .map(|(key, value)| {
            if key.eq_ignore_ascii_case("authorization") {
                format!("{key}: <redacted>")
            } else {
                format!("{key}: {value}")
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn format_body(body: Option<&Vec<u8>>) -> String {
    match body {
        None => "<None>".to_string(),
        Some(value) => match std::str::from_utf8(value) {
            Ok(string) => string.to_owned(),
            Err(_) => format!("{value:?}"),
        },
    }
}

fn log_request_details(location: &std::panic::Location, request: &Request) {
    let trace_request = format!(
        "\nRequest\nHeaders:\n{}\nBody:\n{}\n",
        format_headers(&request.headers),
        format_body(request.body.as_ref())
    );

    tracing::trace!(%trace_request, %location);
}
