use reqwest::{
    Client,
    header::{HeaderMap, HeaderValue, ACCEPT, CONTENT_TYPE},
    Method,
};
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, error};

use shared_config::AppConfig;
use shared_models::error::{ApiError, ErrorResponse};

pub struct RestClient {
    client: Client,
    base_url: String,
}

impl RestClient {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            client: Client::new(),
            base_url: config.api_base_url().to_string(),
        }
    }

    fn get_headers(&self) -> HeaderMap {
        let mut headers = HeaderMap::new();

        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        headers
    }

    pub async fn request<T>(&self, method: Method, path: &str, body: Option<Value>) -> Result<T, ApiError>
    where T: DeserializeOwned {
        let url = self.url(path);
        debug!("Making {} request to {}", method, url);

        let mut req = self.client.request(method, &url)
            .headers(self.get_headers());

        if let Some(body_data) = body {
            req = req.json(&body_data);
        }

        let response = req.send().await
            .map_err(|e| ApiError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            error!("API error ({}): {}", status, error_text);

            return Err(ApiError::Remote {
                status: status.as_u16(),
                body: ErrorResponse::from_body(&error_text),
            });
        }

        let bytes = response.bytes().await
            .map_err(|e| ApiError::Transport(e.to_string()))?;

        // Some endpoints answer 200 with an empty body
        let bytes = if bytes.iter().all(u8::is_ascii_whitespace) {
            &b"null"[..]
        } else {
            &bytes[..]
        };

        serde_json::from_slice::<T>(bytes)
            .map_err(|e| ApiError::Decode(e.to_string()))
    }

    pub fn get_base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }
}
