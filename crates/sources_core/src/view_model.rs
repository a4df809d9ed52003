use crate::{SourceRecord, ViewMode};

/// What the record area should show, in precedence order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListStatus<'a> {
    Loading,
    Failed(&'a str),
    Empty,
    Ready(&'a [SourceRecord]),
}

/// Accessibility state of the grid/list switch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ViewModeSwitch {
    /// `aria-checked`: true when the list layout is active.
    pub checked: bool,
}

impl ViewModeSwitch {
    pub const ROLE: &'static str = "switch";
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppViewModel {
    pub search_text: String,
    pub committed_search: String,
    pub records: Vec<SourceRecord>,
    pub loading: bool,
    pub error: Option<String>,
    pub page: u32,
    pub total: u64,
    pub total_pages: u32,
    pub can_previous: bool,
    pub can_next: bool,
    pub view_mode: ViewMode,
    pub view_switch: ViewModeSwitch,
}

impl AppViewModel {
    pub fn page_label(&self) -> String {
        format!("Page {} of {}", self.page, self.total_pages)
    }

    pub fn status(&self) -> ListStatus<'_> {
        if self.loading {
            ListStatus::Loading
        } else if let Some(error) = &self.error {
            ListStatus::Failed(error)
        } else if self.records.is_empty() {
            ListStatus::Empty
        } else {
            ListStatus::Ready(&self.records)
        }
    }
}
