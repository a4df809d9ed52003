use std::sync::{mpsc, Arc};
use std::thread;
use std::time::Duration;

use sources_logging::{sources_debug, sources_warn};

use crate::api::{ApiSettings, ReqwestSourceApi, SourceApi};
use crate::{ChannelEventSink, Debouncer, EngineError, EngineEvent, EventSink, Query};

enum EngineCommand {
    FetchRecords { request_id: u64, query: Query },
    FetchCount { request_id: u64, query: Query },
    ScheduleDebounce { token: u64, delay: Duration },
}

/// Handle to a background thread that owns a tokio runtime and runs fetches
/// and timers. Results come back as `EngineEvent`s in completion order.
pub struct EngineHandle {
    cmd_tx: mpsc::Sender<EngineCommand>,
    event_rx: mpsc::Receiver<EngineEvent>,
}

impl EngineHandle {
    pub fn new(settings: ApiSettings) -> Result<Self, EngineError> {
        let api = ReqwestSourceApi::new(settings)?;
        Self::with_api(Arc::new(api))
    }

    /// The runtime is built on the caller's thread so a failure is reported
    /// here instead of leaving a handle with no engine behind it.
    pub fn with_api(api: Arc<dyn SourceApi>) -> Result<Self, EngineError> {
        let runtime = tokio::runtime::Runtime::new()?;
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (event_tx, event_rx) = mpsc::channel();

        thread::spawn(move || {
            let sink: Arc<dyn EventSink> = Arc::new(ChannelEventSink::new(event_tx));
            let mut debouncer = Debouncer::new(runtime.handle().clone());

            while let Ok(command) = cmd_rx.recv() {
                match command {
                    EngineCommand::ScheduleDebounce { token, delay } => {
                        debouncer.schedule(token, delay, sink.clone());
                    }
                    EngineCommand::FetchRecords { request_id, query } => {
                        let api = api.clone();
                        let sink = sink.clone();
                        runtime.spawn(async move {
                            let result = api.fetch_records(&query).await;
                            sink.emit(EngineEvent::RecordsFetched { request_id, result });
                        });
                    }
                    EngineCommand::FetchCount { request_id, query } => {
                        let api = api.clone();
                        let sink = sink.clone();
                        runtime.spawn(async move {
                            let result = api.fetch_count(&query).await;
                            sink.emit(EngineEvent::CountFetched { request_id, result });
                        });
                    }
                }
            }
            sources_debug!("engine command channel closed");
        });

        Ok(Self { cmd_tx, event_rx })
    }

    pub fn fetch_records(&self, request_id: u64, query: Query) {
        self.send(EngineCommand::FetchRecords { request_id, query });
    }

    pub fn fetch_count(&self, request_id: u64, query: Query) {
        self.send(EngineCommand::FetchCount { request_id, query });
    }

    pub fn schedule_debounce(&self, token: u64, delay: Duration) {
        self.send(EngineCommand::ScheduleDebounce { token, delay });
    }

    fn send(&self, command: EngineCommand) {
        if self.cmd_tx.send(command).is_err() {
            sources_warn!("engine thread is gone; command dropped");
        }
    }

    pub fn try_recv(&self) -> Option<EngineEvent> {
        self.event_rx.try_recv().ok()
    }

    pub fn recv_timeout(&self, timeout: Duration) -> Option<EngineEvent> {
        self.event_rx.recv_timeout(timeout).ok()
    }
}
