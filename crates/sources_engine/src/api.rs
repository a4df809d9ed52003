use std::time::Duration;

use futures_util::StreamExt;
use serde::de::DeserializeOwned;
use sources_logging::{sources_debug, sources_warn};
use url::Url;

use crate::types::CountResponse;
use crate::{FailureKind, FetchError, SourceRecord};

pub const SOURCES_PATH: &str = "api/source";
pub const COUNT_PATH: &str = "api/source/count";

const RECORDS_CONTEXT: &str = "failed to fetch sources";
const COUNT_CONTEXT: &str = "failed to fetch source count";

#[derive(Debug, Clone)]
pub struct ApiSettings {
    /// Origin (and optional path prefix) the `/api/source` routes hang off.
    pub base_url: String,
    pub connect_timeout: Duration,
    pub request_timeout: Duration,
    pub max_bytes: u64,
}

impl Default for ApiSettings {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8000".to_string(),
            connect_timeout: Duration::from_secs(10),
            request_timeout: Duration::from_secs(30),
            max_bytes: 5 * 1024 * 1024,
        }
    }
}

#[async_trait::async_trait]
pub trait SourceApi: Send + Sync {
    /// One page of records for `query`.
    async fn fetch_records(&self, query: &[(String, String)]) -> Result<Vec<SourceRecord>, FetchError>;

    /// Total number of records matching the filter in `query`.
    async fn fetch_count(&self, query: &[(String, String)]) -> Result<u64, FetchError>;
}

#[derive(Debug, Clone)]
pub struct ReqwestSourceApi {
    settings: ApiSettings,
    base: Url,
    client: reqwest::Client,
}

impl ReqwestSourceApi {
    pub fn new(settings: ApiSettings) -> Result<Self, FetchError> {
        let mut base = Url::parse(&settings.base_url)
            .map_err(|err| FetchError::new(FailureKind::InvalidUrl, err.to_string()))?;
        // Joining is relative to the last segment; keep any prefix path intact.
        if !base.path().ends_with('/') {
            let path = format!("{}/", base.path());
            base.set_path(&path);
        }

        let client = reqwest::Client::builder()
            .connect_timeout(settings.connect_timeout)
            .timeout(settings.request_timeout)
            .build()
            .map_err(|err| FetchError::new(FailureKind::Network, err.to_string()))?;

        Ok(Self {
            settings,
            base,
            client,
        })
    }

    /// Full request URL for `path` with `query` appended in order.
    pub fn endpoint(&self, path: &str, query: &[(String, String)]) -> Result<Url, FetchError> {
        let mut url = self
            .base
            .join(path)
            .map_err(|err| FetchError::new(FailureKind::InvalidUrl, err.to_string()))?;
        if !query.is_empty() {
            url.query_pairs_mut().extend_pairs(query);
        }
        Ok(url)
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        url: Url,
        context: &'static str,
    ) -> Result<T, FetchError> {
        sources_debug!("GET {}", url);
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|err| map_reqwest_error(err, context))?;

        let status = response.status();
        if !status.is_success() {
            sources_warn!("{}: {}", context, status);
            return Err(FetchError::new(
                FailureKind::HttpStatus(status.as_u16()),
                context,
            ));
        }

        let max_bytes = self.settings.max_bytes;
        if let Some(content_len) = response.content_length() {
            if content_len > max_bytes {
                return Err(FetchError::new(
                    FailureKind::TooLarge {
                        max_bytes,
                        actual: Some(content_len),
                    },
                    context,
                ));
            }
        }

        let mut body = Vec::new();
        let mut stream = response.bytes_stream();
        while let Some(chunk) = stream.next().await {
            let chunk = chunk.map_err(|err| map_reqwest_error(err, context))?;
            let next_len = body.len() as u64 + chunk.len() as u64;
            if next_len > max_bytes {
                return Err(FetchError::new(
                    FailureKind::TooLarge {
                        max_bytes,
                        actual: Some(next_len),
                    },
                    context,
                ));
            }
            body.extend_from_slice(&chunk);
        }

        serde_json::from_slice(&body).map_err(|err| {
            sources_warn!("{}: {}", context, err);
            FetchError::new(FailureKind::Decode, context)
        })
    }
}

#[async_trait::async_trait]
impl SourceApi for ReqwestSourceApi {
    async fn fetch_records(&self, query: &[(String, String)]) -> Result<Vec<SourceRecord>, FetchError> {
        let url = self.endpoint(SOURCES_PATH, query)?;
        self.get_json(url, RECORDS_CONTEXT).await
    }

    async fn fetch_count(&self, query: &[(String, String)]) -> Result<u64, FetchError> {
        let url = self.endpoint(COUNT_PATH, query)?;
        let response: CountResponse = self.get_json(url, COUNT_CONTEXT).await?;
        Ok(response.count.unwrap_or(0))
    }
}

fn map_reqwest_error(err: reqwest::Error, context: &'static str) -> FetchError {
    sources_warn!("{}: {}", context, err);
    if err.is_timeout() {
        return FetchError::new(FailureKind::Timeout, context);
    }
    FetchError::new(FailureKind::Network, context)
}
