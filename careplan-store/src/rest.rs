//! Blocking REST client for the hosted record store.

use reqwest::blocking::Client;
use reqwest::{header, StatusCode};
use serde_json::Value;
use tracing::{debug, warn};

use crate::{RecordStore, ResourceQuery};

const URL_ENV: &str = "CAREPLAN_STORE_URL";
const KEY_ENV: &str = "CAREPLAN_STORE_KEY";

/// Store client errors. Only raised while setting the client up; fetches
/// degrade to "no records" instead.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Store configuration error: {0}")]
    Config(String),
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
}

/// Connection settings, resolved once at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    pub base_url: String,
    pub api_key: String,
}

impl StoreConfig {
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Result<Self, StoreError> {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        let api_key = api_key.into();
        if base_url.is_empty() {
            return Err(StoreError::Config("base URL cannot be empty".into()));
        }
        if api_key.trim().is_empty() {
            return Err(StoreError::Config("API key cannot be empty".into()));
        }
        Ok(Self { base_url, api_key })
    }

    /// Read `CAREPLAN_STORE_URL` and `CAREPLAN_STORE_KEY`.
    pub fn from_env() -> Result<Self, StoreError> {
        let base_url = std::env::var(URL_ENV)
            .map_err(|_| StoreError::Config(format!("{URL_ENV} is not set")))?;
        let api_key = std::env::var(KEY_ENV)
            .map_err(|_| StoreError::Config(format!("{KEY_ENV} is not set")))?;
        Self::new(base_url, api_key)
    }

    fn url_for(&self, query: &ResourceQuery) -> String {
        format!("{}/rest/v1/{}", self.base_url, query.to_path())
    }
}

pub struct RestRecordStore {
    config: StoreConfig,
    client: Client,
}

impl RestRecordStore {
    pub fn new(config: StoreConfig) -> Result<Self, StoreError> {
        let client = Client::builder().build()?;
        Ok(Self { config, client })
    }
}

impl RecordStore for RestRecordStore {
    fn fetch(&self, query: &ResourceQuery) -> Option<Vec<Value>> {
        let url = self.config.url_for(query);
        debug!(%url, "fetching records");

        let response = self
            .client
            .get(&url)
            .header("apikey", &self.config.api_key)
            .bearer_auth(&self.config.api_key)
            .header(header::CONTENT_TYPE, "application/json")
            .send();

        let response = match response {
            Ok(response) => response,
            Err(err) => {
                warn!(%url, error = %err, "record store request failed");
                return None;
            }
        };

        if response.status() != StatusCode::OK {
            warn!(%url, status = %response.status(), "record store returned non-200");
            return None;
        }

        match response.json::<Value>() {
            Ok(Value::Array(records)) => Some(records),
            Ok(other) => {
                warn!(%url, "expected a JSON array, received {}", json_kind(&other));
                None
            }
            Err(err) => {
                warn!(%url, error = %err, "record store returned unreadable JSON");
                None
            }
        }
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
