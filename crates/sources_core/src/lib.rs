//! Sources view core: pure state machine, query builder and view-model helpers.
mod effect;
mod location;
mod msg;
mod pagination;
mod query;
mod state;
mod update;
mod view_model;

pub use effect::Effect;
pub use location::{MemoryLocation, QueryLocation, UrlLocation, SEARCH_PARAM};
pub use msg::Msg;
pub use pagination::{next_page, previous_page, total_pages};
pub use query::{build_params, OrderField, QueryParams, SortOrder, UnknownOrderField};
pub use state::{
    ActivationKey, AppState, DebounceToken, RequestId, SourceRecord, ViewMode, ViewSettings,
    DEFAULT_DEBOUNCE, DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE,
};
pub use update::update;
pub use view_model::{AppViewModel, ListStatus, ViewModeSwitch};
