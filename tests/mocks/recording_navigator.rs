use contactbook_ui::ui::Navigator;
use std::sync::{Arc, Mutex};

use super::EventLog;

/// Navigator test double that records every requested route.
///
/// When given a shared event log, each navigation is also recorded as
/// `navigate:<path>` so tests can assert ordering against store calls.
#[allow(dead_code)]
#[derive(Clone, Default)]
pub struct RecordingNavigator {
    paths: Arc<Mutex<Vec<String>>>,
    events: Option<EventLog>,
}

#[allow(dead_code)]
impl RecordingNavigator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a RecordingNavigator that records into a shared event log.
    pub fn with_event_log(events: EventLog) -> Self {
        Self {
            paths: Arc::new(Mutex::new(Vec::new())),
            events: Some(events),
        }
    }

    /// The routes navigated to, in call order.
    pub fn paths(&self) -> Vec<String> {
        self.paths.lock().unwrap().clone()
    }
}

impl Navigator for RecordingNavigator {
    fn navigate_to(&self, path: &str) {
        self.paths.lock().unwrap().push(path.to_string());

        if let Some(events) = &self.events {
            events
                .lock()
                .unwrap()
                .push(format!("navigate:{}", path));
        }
    }
}
