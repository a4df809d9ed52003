use std::time::Duration;

use sources_core::{
    update, AppState, AppViewModel, Effect, Msg, QueryLocation, QueryParams, SourceRecord,
    ViewSettings, SEARCH_PARAM,
};
use sources_engine::{EngineEvent, EngineHandle, Query};
use sources_logging::{sources_debug, sources_info};

/// Owns the view state and executes the effects `update` asks for.
///
/// Every mutation goes through `dispatch`, so messages from the user and from
/// the engine are applied one at a time in arrival order.
pub struct ViewDriver<L: QueryLocation> {
    state: AppState,
    engine: EngineHandle,
    location: L,
}

impl<L: QueryLocation> ViewDriver<L> {
    pub fn new(settings: ViewSettings, engine: EngineHandle, location: L) -> Self {
        Self {
            state: AppState::with_settings(settings),
            engine,
            location,
        }
    }

    /// Reads the initial search term from the location and starts the first
    /// fetch cycle. Later calls are ignored by the core.
    pub fn mount(&mut self) {
        let search = self.location.read(SEARCH_PARAM);
        sources_info!("mounting with search={:?}", search);
        self.dispatch(Msg::Mounted { search });
    }

    pub fn dispatch(&mut self, msg: Msg) {
        let state = std::mem::take(&mut self.state);
        let (state, effects) = update(state, msg);
        self.state = state;
        self.run_effects(effects);
    }

    /// Applies every engine event that has already arrived. Returns how many.
    pub fn pump(&mut self) -> usize {
        let mut handled = 0;
        while let Some(event) = self.engine.try_recv() {
            self.dispatch(map_event(event));
            handled += 1;
        }
        handled
    }

    /// Waits up to `timeout` for one engine event, then drains the rest.
    pub fn pump_for(&mut self, timeout: Duration) -> usize {
        match self.engine.recv_timeout(timeout) {
            Some(event) => {
                self.dispatch(map_event(event));
                1 + self.pump()
            }
            None => 0,
        }
    }

    pub fn view(&self) -> AppViewModel {
        self.state.view()
    }

    pub fn consume_dirty(&mut self) -> bool {
        self.state.consume_dirty()
    }

    pub fn location(&self) -> &L {
        &self.location
    }

    fn run_effects(&mut self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::ScheduleDebounce { token, delay } => {
                    self.engine.schedule_debounce(token, delay);
                }
                Effect::ReplaceQueryParam { key, value } => {
                    sources_debug!("ReplaceQueryParam {}={:?}", key, value);
                    self.location.write(key, value.as_deref());
                }
                Effect::FetchRecords { request_id, params } => {
                    sources_info!(
                        "FetchRecords request_id={} offset={} content_like={:?}",
                        request_id,
                        params.offset,
                        params.content_like
                    );
                    self.engine.fetch_records(request_id, to_query(&params));
                }
                Effect::FetchCount { request_id, params } => {
                    sources_debug!("FetchCount request_id={}", request_id);
                    self.engine.fetch_count(request_id, to_query(&params));
                }
            }
        }
    }
}

pub fn map_event(event: EngineEvent) -> Msg {
    match event {
        EngineEvent::RecordsFetched { request_id, result } => Msg::RecordsLoaded {
            request_id,
            result: result
                .map(|records| records.into_iter().map(map_record).collect())
                .map_err(|err| err.to_string()),
        },
        EngineEvent::CountFetched { request_id, result } => Msg::CountLoaded {
            request_id,
            result: result.map_err(|err| err.to_string()),
        },
        EngineEvent::DebounceElapsed { token } => Msg::DebounceElapsed { token },
    }
}

fn map_record(record: sources_engine::SourceRecord) -> SourceRecord {
    SourceRecord {
        id: record.id,
        title: record.title,
        url: record.url,
        content: record.content,
        published_on: record.published_on,
        updated_on: record.updated_on,
        kind: record.kind,
    }
}

fn to_query(params: &QueryParams) -> Query {
    params
        .pairs()
        .into_iter()
        .map(|(key, value)| (key.to_string(), value))
        .collect()
}
