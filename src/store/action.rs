use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Identity of one registered state producer (a state-hook instance).
///
/// Stable for the lifetime of that producer; an id is only reused after the
/// producer has been explicitly unregistered.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProducerId(String);

impl ProducerId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ProducerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ProducerId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for ProducerId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// One event in the capture-action stream funneled through the store.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CaptureAction {
    /// Seed a producer's value verbatim, bypassing its reducer.
    Init { producer: ProducerId, value: Value },

    /// Feed a producer-specific transition payload through its reducer.
    Update { producer: ProducerId, payload: Value },

    /// Drop a producer's registry slot and snapshot entry.
    Teardown { producer: ProducerId },
}

impl CaptureAction {
    /// The producer this action targets.
    pub fn producer(&self) -> &ProducerId {
        match self {
            CaptureAction::Init { producer, .. }
            | CaptureAction::Update { producer, .. }
            | CaptureAction::Teardown { producer } => producer,
        }
    }

    /// Get a human-readable action kind name for logging.
    pub fn kind_name(&self) -> &'static str {
        match self {
            CaptureAction::Init { .. } => "Init",
            CaptureAction::Update { .. } => "Update",
            CaptureAction::Teardown { .. } => "Teardown",
        }
    }
}
