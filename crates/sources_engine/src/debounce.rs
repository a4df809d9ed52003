use std::sync::Arc;
use std::time::Duration;

use sources_logging::sources_trace;
use tokio::runtime::Handle;
use tokio_util::sync::CancellationToken;

use crate::{EngineEvent, EventSink};

/// Trailing-edge timer: each `schedule` cancels the pending delivery, so only
/// the last token of a burst is ever emitted.
pub struct Debouncer {
    handle: Handle,
    pending: Option<CancellationToken>,
}

impl Debouncer {
    pub fn new(handle: Handle) -> Self {
        Self {
            handle,
            pending: None,
        }
    }

    pub fn schedule(&mut self, token: u64, delay: Duration, sink: Arc<dyn EventSink>) {
        self.cancel();
        let cancel = CancellationToken::new();
        self.pending = Some(cancel.clone());

        self.handle.spawn(async move {
            tokio::select! {
                _ = cancel.cancelled() => {
                    sources_trace!("debounce token {} cancelled", token);
                }
                _ = tokio::time::sleep(delay) => {
                    sink.emit(EngineEvent::DebounceElapsed { token });
                }
            }
        });
    }

    pub fn cancel(&mut self) {
        if let Some(pending) = self.pending.take() {
            pending.cancel();
        }
    }
}

impl Drop for Debouncer {
    fn drop(&mut self) {
        self.cancel();
    }
}
