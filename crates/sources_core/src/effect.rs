use std::time::Duration;

use crate::{DebounceToken, QueryParams, RequestId};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Deliver `Msg::DebounceElapsed { token }` after `delay`, cancelling any
    /// previously scheduled delivery.
    ScheduleDebounce {
        token: DebounceToken,
        delay: Duration,
    },
    /// Rewrite one query parameter of the page location in place. `None`
    /// removes it.
    ReplaceQueryParam {
        key: &'static str,
        value: Option<String>,
    },
    FetchRecords {
        request_id: RequestId,
        params: QueryParams,
    },
    FetchCount {
        request_id: RequestId,
        params: QueryParams,
    },
}
