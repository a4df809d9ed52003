//! RON configuration for the app. Every field is optional; missing fields take
//! the defaults below.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::Duration;

use log::LevelFilter;
use serde::{Deserialize, Serialize};
use sources_core::{
    OrderField, SortOrder, UnknownOrderField, UrlLocation, ViewSettings, DEFAULT_PAGE_SIZE,
    MAX_PAGE_SIZE,
};
use sources_engine::ApiSettings;
use thiserror::Error;

use crate::logging::LogDestination;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not read config {path:?}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("invalid config syntax: {0}")]
    Parse(#[from] ron::error::SpannedError),
    #[error("page_size must be between 1 and {max}, got {0}", max = MAX_PAGE_SIZE)]
    PageSize(u32),
    #[error("debounce_ms must be greater than zero")]
    ZeroDebounce,
    #[error(transparent)]
    OrderBy(#[from] UnknownOrderField),
    #[error("invalid api_base_url: {0}")]
    BaseUrl(url::ParseError),
    #[error("invalid page_url: {0}")]
    PageUrl(url::ParseError),
    #[error("unknown log_level {0:?}")]
    LogLevel(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AppConfig {
    /// Origin of the sources API; resolved once here and handed to the engine.
    pub api_base_url: String,
    /// Location the view is mounted at; its `search` parameter seeds the view.
    pub page_url: String,
    pub page_size: u32,
    pub debounce_ms: u64,
    pub order_by: String,
    pub ascending: bool,
    pub connect_timeout_ms: u64,
    pub request_timeout_ms: u64,
    pub max_response_bytes: u64,
    pub log_level: String,
    pub log_destination: LogDestination,
}

impl Default for AppConfig {
    fn default() -> Self {
        let api = ApiSettings::default();
        Self {
            api_base_url: api.base_url,
            page_url: "http://localhost:3000/".to_string(),
            page_size: DEFAULT_PAGE_SIZE,
            debounce_ms: 400,
            order_by: OrderField::default().as_str().to_string(),
            ascending: false,
            connect_timeout_ms: api.connect_timeout.as_millis() as u64,
            request_timeout_ms: api.request_timeout.as_millis() as u64,
            max_response_bytes: api.max_bytes,
            log_level: "info".to_string(),
            log_destination: LogDestination::default(),
        }
    }
}

impl AppConfig {
    pub fn from_ron_str(content: &str) -> Result<Self, ConfigError> {
        let config: AppConfig = ron::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_ron_str(&content)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.view_settings()?;
        url::Url::parse(&self.api_base_url).map_err(ConfigError::BaseUrl)?;
        self.location()?;
        self.log_level()?;
        Ok(())
    }

    pub fn view_settings(&self) -> Result<ViewSettings, ConfigError> {
        if !(1..=MAX_PAGE_SIZE).contains(&self.page_size) {
            return Err(ConfigError::PageSize(self.page_size));
        }
        if self.debounce_ms == 0 {
            return Err(ConfigError::ZeroDebounce);
        }
        Ok(ViewSettings {
            page_size: self.page_size,
            debounce: Duration::from_millis(self.debounce_ms),
            order: SortOrder {
                field: self.order_by.parse()?,
                ascending: self.ascending,
            },
        })
    }

    pub fn api_settings(&self) -> ApiSettings {
        ApiSettings {
            base_url: self.api_base_url.clone(),
            connect_timeout: Duration::from_millis(self.connect_timeout_ms),
            request_timeout: Duration::from_millis(self.request_timeout_ms),
            max_bytes: self.max_response_bytes,
        }
    }

    pub fn location(&self) -> Result<UrlLocation, ConfigError> {
        UrlLocation::parse(&self.page_url).map_err(ConfigError::PageUrl)
    }

    pub fn log_level(&self) -> Result<LevelFilter, ConfigError> {
        sources_logging::parse_level(&self.log_level)
            .ok_or_else(|| ConfigError::LogLevel(self.log_level.clone()))
    }
}
