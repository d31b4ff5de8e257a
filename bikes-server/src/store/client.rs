//! HTTP client for the document store.
//!
//! Talks to a JSON document-collection REST API: query-all, point
//! lookup, create, upsert and delete, each a single request against
//! `{base_url}/dbs/{database}/colls/{collection}/docs`. Every request
//! carries a bounded timeout so a dead store degrades to fallback
//! instead of hanging callers.

use reqwest::StatusCode;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use serde::{Deserialize, Serialize};

use crate::domain::Station;

use super::DocumentStore;
use super::error::StoreError;

/// Default request timeout in seconds.
const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Wrapper for the query-all response.
#[derive(Debug, Deserialize)]
struct DocumentsResponse {
    documents: Vec<Station>,
}

/// Outgoing document: the station plus its storage id.
#[derive(Debug, Serialize)]
struct StationDocument<'a> {
    id: String,
    #[serde(flatten)]
    station: &'a Station,
}

impl<'a> StationDocument<'a> {
    fn new(station: &'a Station) -> Self {
        Self {
            id: station.doc_id(),
            station,
        }
    }
}

/// Configuration for the document store client.
#[derive(Debug, Clone)]
pub struct DocumentStoreConfig {
    /// Base URL of the store.
    pub base_url: String,
    /// Database name.
    pub database: String,
    /// Collection name.
    pub collection: String,
    /// API key for x-apikey header authentication.
    pub api_key: String,
    /// Request timeout in seconds.
    pub timeout_secs: u64,
}

impl DocumentStoreConfig {
    /// Create a new config with the given base URL and API key.
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            database: "DublinBikesDb".to_string(),
            collection: "Stations".to_string(),
            api_key: api_key.into(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }

    /// Set a custom database name.
    pub fn with_database(mut self, database: impl Into<String>) -> Self {
        self.database = database.into();
        self
    }

    /// Set a custom collection name.
    pub fn with_collection(mut self, collection: impl Into<String>) -> Self {
        self.collection = collection.into();
        self
    }

    /// Set request timeout.
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}

/// Client for the document store REST API.
#[derive(Debug, Clone)]
pub struct DocumentStoreClient {
    http: reqwest::Client,
    docs_url: String,
}

impl DocumentStoreClient {
    /// Create a new client with the given configuration.
    pub fn new(config: DocumentStoreConfig) -> Result<Self, StoreError> {
        let mut headers = HeaderMap::new();

        let api_key = HeaderValue::from_str(&config.api_key).map_err(|_| StoreError::Api {
            status: 0,
            message: "Invalid API key format".to_string(),
        })?;
        headers.insert(HeaderName::from_static("x-apikey"), api_key);

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        let docs_url = format!(
            "{}/dbs/{}/colls/{}/docs",
            config.base_url.trim_end_matches('/'),
            config.database,
            config.collection
        );

        Ok(Self { http, docs_url })
    }

    /// Map a non-success response to the matching error.
    async fn error_for(response: reqwest::Response) -> StoreError {
        let status = response.status();

        if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
            return StoreError::Unauthorized;
        }

        let body = response.text().await.unwrap_or_default();
        StoreError::Api {
            status: status.as_u16(),
            message: body,
        }
    }
}

impl DocumentStore for DocumentStoreClient {
    async fn query_all(&self) -> Result<Vec<Station>, StoreError> {
        let response = self.http.get(&self.docs_url).send().await?;

        if !response.status().is_success() {
            return Err(Self::error_for(response).await);
        }

        let body = response.text().await?;
        let response: DocumentsResponse =
            serde_json::from_str(&body).map_err(|e| StoreError::Json {
                message: e.to_string(),
            })?;

        Ok(response.documents)
    }

    async fn get(&self, id: &str) -> Result<Option<Station>, StoreError> {
        let url = format!("{}/{}", self.docs_url, id);
        let response = self.http.get(&url).send().await?;

        if response.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        if !response.status().is_success() {
            return Err(Self::error_for(response).await);
        }

        let body = response.text().await?;
        let station: Station = serde_json::from_str(&body).map_err(|e| StoreError::Json {
            message: e.to_string(),
        })?;

        Ok(Some(station))
    }

    async fn create(&self, station: &Station) -> Result<Station, StoreError> {
        let response = self
            .http
            .post(&self.docs_url)
            .json(&StationDocument::new(station))
            .send()
            .await?;

        if response.status() == StatusCode::CONFLICT {
            return Err(StoreError::Conflict);
        }
        if !response.status().is_success() {
            return Err(Self::error_for(response).await);
        }

        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|e| StoreError::Json {
            message: e.to_string(),
        })
    }

    async fn upsert(&self, station: &Station) -> Result<Station, StoreError> {
        let url = format!("{}/{}", self.docs_url, station.doc_id());
        let response = self
            .http
            .put(&url)
            .json(&StationDocument::new(station))
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(Self::error_for(response).await);
        }

        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|e| StoreError::Json {
            message: e.to_string(),
        })
    }

    async fn delete(&self, id: &str) -> Result<bool, StoreError> {
        let url = format!("{}/{}", self.docs_url, id);
        let response = self.http.delete(&url).send().await?;

        if response.status() == StatusCode::NOT_FOUND {
            return Ok(false);
        }
        if !response.status().is_success() {
            return Err(Self::error_for(response).await);
        }

        Ok(true)
    }
}
