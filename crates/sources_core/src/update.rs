use sources_logging::sources_debug;

use crate::pagination::{next_page, previous_page};
use crate::{AppState, Effect, Msg, SEARCH_PARAM};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    // Location writes must never precede the mount-time read.
    if !state.is_mounted() && !matches!(msg, Msg::Mounted { .. }) {
        sources_debug!("ignoring {:?} before mount", msg);
        return (state, Vec::new());
    }

    let effects = match msg {
        Msg::Mounted { search } => {
            if state.is_mounted() {
                return (state, Vec::new());
            }
            // An empty `search` in the location is dropped to keep the URL canonical.
            let drop_empty = search.as_deref() == Some("");
            state.mount(search.unwrap_or_default());
            let mut effects = Vec::with_capacity(3);
            if drop_empty {
                effects.push(Effect::ReplaceQueryParam {
                    key: SEARCH_PARAM,
                    value: None,
                });
            }
            effects.extend(start_cycles(&mut state));
            effects
        }
        Msg::SearchInput(raw) => {
            let token = state.set_raw_search(raw);
            vec![Effect::ScheduleDebounce {
                token,
                delay: state.settings().debounce,
            }]
        }
        Msg::DebounceElapsed { token } => {
            if !state.is_latest_debounce(token) || !state.commit_search() {
                return (state, Vec::new());
            }
            let committed = state.committed_search();
            let mut effects = Vec::with_capacity(3);
            effects.push(Effect::ReplaceQueryParam {
                key: SEARCH_PARAM,
                value: (!committed.is_empty()).then(|| committed.to_string()),
            });
            effects.extend(start_cycles(&mut state));
            effects
        }
        Msg::NextPage => match next_page(state.page(), state.total_pages()) {
            Some(page) => {
                state.set_page(page);
                start_cycles(&mut state)
            }
            None => Vec::new(),
        },
        Msg::PreviousPage => match previous_page(state.page()) {
            Some(page) => {
                state.set_page(page);
                start_cycles(&mut state)
            }
            None => Vec::new(),
        },
        Msg::ViewModeToggled => {
            state.toggle_view_mode();
            Vec::new()
        }
        Msg::ViewModeKey(key) => {
            if key.activates() {
                state.toggle_view_mode();
            }
            Vec::new()
        }
        Msg::RecordsLoaded { request_id, result } => {
            state.apply_records(request_id, result);
            Vec::new()
        }
        Msg::CountLoaded { request_id, result } => {
            state.apply_count(request_id, result);
            Vec::new()
        }
    };

    (state, effects)
}

fn start_cycles(state: &mut AppState) -> Vec<Effect> {
    let (records_id, count_id) = state.begin_cycles();
    let params = state.query_params();
    vec![
        Effect::FetchRecords {
            request_id: records_id,
            params: params.clone(),
        },
        Effect::FetchCount {
            request_id: count_id,
            params,
        },
    ]
}
