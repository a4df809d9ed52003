//! Sources engine: HTTP access to the sources API, debounce timers and effect execution.
mod api;
mod debounce;
mod engine;
mod sink;
mod types;

pub use api::{ApiSettings, ReqwestSourceApi, SourceApi, COUNT_PATH, SOURCES_PATH};
pub use debounce::Debouncer;
pub use engine::EngineHandle;
pub use sink::{ChannelEventSink, EventSink};
pub use types::{EngineError, EngineEvent, FailureKind, FetchError, Query, SourceRecord};
