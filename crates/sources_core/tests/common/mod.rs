#![allow(dead_code)]

use sources_core::{update, AppState, Effect, Msg, QueryParams, RequestId, SourceRecord};

pub fn init_logging() {
    sources_logging::initialize_for_tests();
}

pub fn mounted(search: Option<&str>) -> (AppState, Vec<Effect>) {
    update(
        AppState::new(),
        Msg::Mounted {
            search: search.map(ToOwned::to_owned),
        },
    )
}

pub fn records(prefix: &str, count: usize) -> Vec<SourceRecord> {
    (0..count)
        .map(|i| SourceRecord {
            id: Some(i as i64),
            title: format!("{prefix} {i}"),
            ..SourceRecord::default()
        })
        .collect()
}

pub fn records_request(effects: &[Effect]) -> (RequestId, QueryParams) {
    effects
        .iter()
        .find_map(|effect| match effect {
            Effect::FetchRecords { request_id, params } => Some((*request_id, params.clone())),
            _ => None,
        })
        .expect("records fetch effect")
}

pub fn count_request(effects: &[Effect]) -> (RequestId, QueryParams) {
    effects
        .iter()
        .find_map(|effect| match effect {
            Effect::FetchCount { request_id, params } => Some((*request_id, params.clone())),
            _ => None,
        })
        .expect("count fetch effect")
}

/// Settles both cycles started by `effects` successfully.
pub fn settle(
    state: AppState,
    effects: &[Effect],
    page: Vec<SourceRecord>,
    total: u64,
) -> AppState {
    let (records_id, _) = records_request(effects);
    let (count_id, _) = count_request(effects);
    let (state, _) = update(
        state,
        Msg::RecordsLoaded {
            request_id: records_id,
            result: Ok(page),
        },
    );
    let (state, _) = update(
        state,
        Msg::CountLoaded {
            request_id: count_id,
            result: Ok(total),
        },
    );
    state
}

/// Types `text` and lets the debounce window elapse.
pub fn type_and_pause(state: AppState, text: &str) -> (AppState, Vec<Effect>) {
    let (state, effects) = update(state, Msg::SearchInput(text.to_string()));
    let token = match effects.as_slice() {
        [Effect::ScheduleDebounce { token, .. }] => *token,
        other => panic!("expected a single debounce effect, got {other:?}"),
    };
    update(state, Msg::DebounceElapsed { token })
}
