use crate::config::{self, Config};
use crate::syllabus::models::SyllabusRecord;
use async_trait::async_trait;
use reqwest::{Client, Error as ReqwestError, StatusCode};
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;
use tracing::{debug, info, warn};

#[derive(Error, Debug)]
pub enum SearchError {
    #[error("HTTP request failed: {0}")]
    Request(#[from] ReqwestError),
    #[error("Syllabus service responded with {0}")]
    Status(StatusCode),
    #[error("Malformed response body: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("Invalid API base URL: {0}")]
    InvalidBaseUrl(String),
}

/// Sub-resource of `/syllabus` a search is sent to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Endpoint {
    Course,
    Teacher,
}

impl Endpoint {
    pub fn segment(self) -> &'static str {
        match self {
            Endpoint::Course => "course",
            Endpoint::Teacher => "teacher",
        }
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.segment())
    }
}

/// Anything that can answer a syllabus search
#[async_trait]
pub trait SyllabusApi: Send + Sync {
    async fn search(
        &self,
        endpoint: Endpoint,
        query: &str,
    ) -> Result<Vec<SyllabusRecord>, SearchError>;
}

#[derive(Clone)]
pub struct SyllabusClient {
    client: Client,
    base_url: String,
}

impl SyllabusClient {
    pub fn new(base_url: &str) -> Result<Self, SearchError> {
        let base_url = config::parse_base_url(base_url)
            .map_err(|_| SearchError::InvalidBaseUrl(base_url.to_string()))?;

        Ok(Self {
            client: Client::new(),
            base_url,
        })
    }

    pub fn from_config(config: &Config) -> Result<Self, SearchError> {
        Self::new(&config.api_base_url)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Full request URL, with the query percent-encoded
    pub fn search_url(&self, endpoint: Endpoint, query: &str) -> String {
        format!(
            "{}/syllabus/{}?name={}",
            self.base_url,
            endpoint.segment(),
            urlencoding::encode(query)
        )
    }
}

#[async_trait]
impl SyllabusApi for SyllabusClient {
    async fn search(
        &self,
        endpoint: Endpoint,
        query: &str,
    ) -> Result<Vec<SyllabusRecord>, SearchError> {
        let url = self.search_url(endpoint, query);
        info!("📡 Syllabus API: GET {}", url);

        let response = self.client.get(&url).send().await?;

        let status = response.status();
        debug!("Response status: {}", status);

        if !status.is_success() {
            warn!("✗ Syllabus API error: {}", status);
            return Err(SearchError::Status(status));
        }

        let body = response.bytes().await?;
        let records: Vec<SyllabusRecord> = serde_json::from_slice(&body)?;

        info!("✓ {} search returned {} record(s)", endpoint, records.len());
        Ok(records)
    }
}
