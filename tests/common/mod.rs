//! Shared fixtures for integration tests.

use std::sync::Arc;

use parking_lot::Mutex;
use serde_json::{json, Value};

use hooktape::{DevtoolReply, ReplySink};

/// Counter reducer used across the scenarios: adds `payload.amount` to the
/// previous value.
pub fn counter_reducer(state: &Value, payload: &Value) -> Value {
    let amount = payload["amount"].as_i64().unwrap_or(0);
    json!(state.as_i64().unwrap_or(0) + amount)
}

/// Build a raw inbound bridge message carrying the given action tag.
pub fn raw_command(action: &str) -> Value {
    json!({ "action": action })
}

/// Reply sink that records every acknowledgment it is handed.
pub struct RecordingSink {
    replies: Mutex<Vec<DevtoolReply>>,
}

impl RecordingSink {
    pub fn new() -> Arc<Self> {
        Arc::new(Self {
            replies: Mutex::new(Vec::new()),
        })
    }

    pub fn replies(&self) -> Vec<DevtoolReply> {
        self.replies.lock().clone()
    }
}

impl ReplySink for RecordingSink {
    fn post(&self, reply: DevtoolReply) {
        self.replies.lock().push(reply);
    }
}
