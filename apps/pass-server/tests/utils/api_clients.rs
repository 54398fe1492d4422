use std::sync::OnceLock;

use serde::de::DeserializeOwned;
use serde_json::Value;

use self::apple_pass::ApplePassApi;
use self::google_pass::GooglePassApi;
use self::misc::MiscApi;
use self::relays::RelayApi;
use self::wifi_setup::WifiSetupApi;

pub mod google_pass;
pub mod misc;
pub mod relays;
pub mod wifi_setup;

pub fn http_client() -> &'static reqwest::Client {
    static CLIENT: OnceLock<reqwest::Client> = OnceLock::new();
    CLIENT.get_or_init(|| reqwest::ClientBuilder::new().build().unwrap())
}

#[derive(Clone)]
pub struct HttpClient {
    base_url: String,
}

impl HttpClient {
    pub async fn get(&self, url: &str) -> Response {
        let url = format!("{}{url}", self.base_url);

        let resp = http_client().get(url).send().await.unwrap();

        Response { resp }
    }

    pub async fn post(&self, url: &str, body: impl Into<Option<Value>>) -> Response {
        let url = format!("{}{url}", self.base_url);

        let resp = http_client()
            .post(url)
            .json(&body.into())
            .send()
            .await
            .unwrap();

        Response { resp }
    }

    pub async fn post_form(&self, url: &str, body: &[(&str, &str)]) -> Response {
        let url = format!("{}{url}", self.base_url);

        let resp = http_client().post(url).form(body).send().await.unwrap();

        Response { resp }
    }

    pub async fn options(&self, url: &str, origin: &str, method: &str) -> Response {
        let url = format!("{}{url}", self.base_url);

        let resp = http_client()
            .request(reqwest::Method::OPTIONS, url)
            .header("Origin", origin)
            .header("Access-Control-Request-Method", method)
            .send()
            .await
            .unwrap();

        Response { resp }
    }
}

pub struct Response {
    resp: reqwest::Response,
}

impl Response {
    pub fn status(&self) -> u16 {
        self.resp.status().into()
    }

    pub fn header(&self, name: &str) -> Option<String> {
        self.resp
            .headers()
            .get(name)
            .and_then(|value| value.to_str().ok())
            .map(ToOwned::to_owned)
    }

    pub async fn json<T: DeserializeOwned>(self) -> T {
        let full = self.resp.bytes().await.unwrap();
        serde_json::from_slice(&full).unwrap()
    }

    pub async fn json_value(self) -> Value {
        self.json().await
    }

    pub async fn text(self) -> String {
        self.resp.text().await.unwrap()
    }
}

pub struct Client {
    pub google_pass: GooglePassApi,
    pub apple_pass: ApplePassApi,
    pub pass_relay: RelayApi,
    pub wifi_setup: WifiSetupApi,
    pub wifi_setup_relay: RelayApi,
    pub misc: MiscApi,
}

impl Client {
    pub fn new(base_url: String) -> Self {
        let client = HttpClient { base_url };

        Self {
            google_pass: GooglePassApi::new(client.clone()),
            apple_pass: ApplePassApi::new(client.clone()),
            pass_relay: RelayApi::new(client.clone(), "/api/wallet-pass-callback"),
            wifi_setup: WifiSetupApi::new(client.clone()),
            wifi_setup_relay: RelayApi::new(client.clone(), "/api/wifi-setup-callback"),
            misc: MiscApi::new(client),
        }
    }
}
