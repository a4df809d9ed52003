use std::time::Duration;

use sources_logging::{sources_debug, sources_warn};

use crate::pagination::total_pages;
use crate::query::{build_params, QueryParams, SortOrder};
use crate::view_model::{AppViewModel, ViewModeSwitch};

pub type RequestId = u64;
pub type DebounceToken = u64;

pub const DEFAULT_PAGE_SIZE: u32 = 9;
/// Upper bound the sources endpoint accepts for `limit`.
pub const MAX_PAGE_SIZE: u32 = 1_000;
pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(400);

/// A source as returned by the API. Only passed through; never interpreted.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SourceRecord {
    pub id: Option<i64>,
    pub title: String,
    pub url: Option<String>,
    pub content: Option<String>,
    pub published_on: Option<String>,
    pub updated_on: Option<String>,
    pub kind: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewMode {
    #[default]
    Grid,
    List,
}

impl ViewMode {
    pub fn toggled(self) -> Self {
        match self {
            ViewMode::Grid => ViewMode::List,
            ViewMode::List => ViewMode::Grid,
        }
    }
}

/// Key pressed while the view mode switch has focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActivationKey {
    Enter,
    Space,
    Other,
}

impl ActivationKey {
    /// Keys that activate a switch: Enter and Space.
    pub fn activates(self) -> bool {
        matches!(self, ActivationKey::Enter | ActivationKey::Space)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewSettings {
    pub page_size: u32,
    pub debounce: Duration,
    pub order: SortOrder,
}

impl Default for ViewSettings {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            debounce: DEFAULT_DEBOUNCE,
            order: SortOrder::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppState {
    settings: ViewSettings,
    mounted: bool,
    raw_search: String,
    committed_search: String,
    debounce_token: DebounceToken,
    page: u32,
    records: Vec<SourceRecord>,
    total: u64,
    loading: bool,
    error: Option<String>,
    view_mode: ViewMode,
    records_request: RequestId,
    count_request: RequestId,
    dirty: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self::with_settings(ViewSettings::default())
    }
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_settings(settings: ViewSettings) -> Self {
        Self {
            settings,
            mounted: false,
            raw_search: String::new(),
            committed_search: String::new(),
            debounce_token: 0,
            page: 1,
            records: Vec::new(),
            total: 0,
            loading: true,
            error: None,
            view_mode: ViewMode::default(),
            records_request: 0,
            count_request: 0,
            dirty: false,
        }
    }

    pub fn view(&self) -> AppViewModel {
        let total_pages = self.total_pages();
        AppViewModel {
            search_text: self.raw_search.clone(),
            committed_search: self.committed_search.clone(),
            records: self.records.clone(),
            loading: self.loading,
            error: self.error.clone(),
            page: self.page,
            total: self.total,
            total_pages,
            can_previous: self.page > 1,
            can_next: self.page < total_pages,
            view_mode: self.view_mode,
            view_switch: ViewModeSwitch {
                checked: self.view_mode == ViewMode::List,
            },
        }
    }

    /// Returns whether anything visible changed since the last call, and resets the flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub fn settings(&self) -> &ViewSettings {
        &self.settings
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn committed_search(&self) -> &str {
        &self.committed_search
    }

    pub fn total_pages(&self) -> u32 {
        total_pages(self.total, self.settings.page_size)
    }

    /// Parameters for the current page and committed search.
    pub fn query_params(&self) -> QueryParams {
        build_params(
            self.page,
            self.settings.page_size,
            &self.committed_search,
            self.settings.order,
        )
    }

    pub(crate) fn mount(&mut self, search: String) {
        self.mounted = true;
        self.raw_search = search.clone();
        self.committed_search = search;
        self.dirty = true;
    }

    pub(crate) fn set_raw_search(&mut self, raw: String) -> DebounceToken {
        self.raw_search = raw;
        self.debounce_token += 1;
        self.dirty = true;
        self.debounce_token
    }

    pub(crate) fn is_latest_debounce(&self, token: DebounceToken) -> bool {
        token == self.debounce_token
    }

    /// Promotes the raw term to committed. Returns false if it was already
    /// committed. A new term always restarts at page 1.
    pub(crate) fn commit_search(&mut self) -> bool {
        if self.raw_search == self.committed_search {
            return false;
        }
        self.committed_search = self.raw_search.clone();
        self.page = 1;
        self.dirty = true;
        sources_debug!("committed search {:?}", self.committed_search);
        true
    }

    pub(crate) fn set_page(&mut self, page: u32) {
        sources_debug!("page {} -> {}", self.page, page);
        self.page = page;
        self.dirty = true;
    }

    /// Supersedes any in-flight requests of both cycles and returns the ids
    /// for the new ones.
    pub(crate) fn begin_cycles(&mut self) -> (RequestId, RequestId) {
        self.records_request += 1;
        self.count_request += 1;
        self.loading = true;
        self.error = None;
        self.dirty = true;
        (self.records_request, self.count_request)
    }

    pub(crate) fn apply_records(
        &mut self,
        request_id: RequestId,
        result: Result<Vec<SourceRecord>, String>,
    ) -> bool {
        if request_id != self.records_request {
            sources_debug!(
                "discarding stale records response {} (latest {})",
                request_id,
                self.records_request
            );
            return false;
        }
        self.loading = false;
        match result {
            Ok(records) => {
                self.records = records;
                self.error = None;
            }
            Err(message) => {
                sources_warn!("records request {} failed: {}", request_id, message);
                self.error = Some(message);
            }
        }
        self.dirty = true;
        true
    }

    pub(crate) fn apply_count(&mut self, request_id: RequestId, result: Result<u64, String>) -> bool {
        if request_id != self.count_request {
            sources_debug!(
                "discarding stale count response {} (latest {})",
                request_id,
                self.count_request
            );
            return false;
        }
        self.total = match result {
            Ok(total) => total,
            Err(message) => {
                sources_debug!("count request {} failed, using 0: {}", request_id, message);
                0
            }
        };
        self.dirty = true;
        true
    }

    pub(crate) fn toggle_view_mode(&mut self) {
        self.view_mode = self.view_mode.toggled();
        self.dirty = true;
    }
}
