use std::sync::{Arc, Mutex};
use std::time::Duration;

use sources_engine::{Debouncer, EngineEvent, EventSink};
use tokio::runtime::Handle;
use tokio::time::sleep;

const WINDOW: Duration = Duration::from_millis(400);

#[derive(Default)]
struct TestSink {
    events: Mutex<Vec<EngineEvent>>,
}

impl TestSink {
    fn take(&self) -> Vec<EngineEvent> {
        self.events.lock().unwrap().drain(..).collect()
    }
}

impl EventSink for TestSink {
    fn emit(&self, event: EngineEvent) {
        self.events.lock().unwrap().push(event);
    }
}

#[tokio::test(start_paused = true)]
async fn burst_emits_only_last_token_after_window() {
    let sink = Arc::new(TestSink::default());
    let mut debouncer = Debouncer::new(Handle::current());

    debouncer.schedule(1, WINDOW, sink.clone());
    sleep(Duration::from_millis(100)).await;
    debouncer.schedule(2, WINDOW, sink.clone());
    sleep(Duration::from_millis(100)).await;
    debouncer.schedule(3, WINDOW, sink.clone());

    sleep(Duration::from_millis(399)).await;
    assert!(sink.take().is_empty());

    sleep(Duration::from_millis(2)).await;
    assert_eq!(sink.take(), vec![EngineEvent::DebounceElapsed { token: 3 }]);

    sleep(WINDOW * 2).await;
    assert!(sink.take().is_empty());
}

#[tokio::test(start_paused = true)]
async fn spaced_inputs_each_emit() {
    let sink = Arc::new(TestSink::default());
    let mut debouncer = Debouncer::new(Handle::current());

    debouncer.schedule(1, WINDOW, sink.clone());
    sleep(WINDOW + Duration::from_millis(1)).await;
    debouncer.schedule(2, WINDOW, sink.clone());
    sleep(WINDOW + Duration::from_millis(1)).await;

    assert_eq!(
        sink.take(),
        vec![
            EngineEvent::DebounceElapsed { token: 1 },
            EngineEvent::DebounceElapsed { token: 2 },
        ]
    );
}

#[tokio::test(start_paused = true)]
async fn dropping_the_debouncer_cancels_pending() {
    let sink = Arc::new(TestSink::default());
    let mut debouncer = Debouncer::new(Handle::current());
    debouncer.schedule(1, WINDOW, sink.clone());
    drop(debouncer);

    sleep(WINDOW * 2).await;
    assert!(sink.take().is_empty());
}
