//! The dynamic state-capture store shared between host hooks and the bridge.

use std::collections::BTreeMap;
use std::sync::Arc;

use parking_lot::Mutex;
use serde_json::Value;

use crate::config::CaptureConfig;
use crate::error::CaptureError;
use crate::store::action::{CaptureAction, ProducerId};
use crate::store::registry::{ProducerCapture, ProducerRegistry, Transition};

struct StoreInner {
    registry: ProducerRegistry,
    recording: bool,
    config: CaptureConfig,
}

/// The dynamic state-capture store.
///
/// Producers register at any point in the host application's lifetime; every
/// update funnels through [`CaptureStore::dispatch`] as a [`CaptureAction`],
/// and the merged snapshot always reflects exactly the currently registered
/// producers. Cloning the store clones a handle to the same shared state.
///
/// All mutation happens as ordered, non-overlapping reactions under one lock:
/// actions apply in dispatch order, and two producers updating
/// "simultaneously" still serialize into two sequential actions, each
/// observing the post-state of the previous one.
#[derive(Clone)]
pub struct CaptureStore {
    inner: Arc<Mutex<StoreInner>>,
}

impl CaptureStore {
    pub fn new() -> Self {
        Self::with_config(CaptureConfig::default())
    }

    pub fn with_config(config: CaptureConfig) -> Self {
        Self {
            inner: Arc::new(Mutex::new(StoreInner {
                registry: ProducerRegistry::new(),
                recording: config.recording,
                config,
            })),
        }
    }

    /// Register a producer and seed its snapshot entry with `initial`.
    ///
    /// The seeding is itself a [`CaptureAction::Init`] applied under the same
    /// lock as the insertion, so no other action can interleave between the
    /// two. Returns the handle used to unregister the producer later.
    ///
    /// Registering an id that is already present surfaces
    /// [`CaptureError::DuplicateProducer`] and leaves the store unchanged;
    /// callers that prefer the silent treatment can ignore the error and
    /// observe identical state.
    pub fn register(
        &self,
        id: impl Into<ProducerId>,
        reduce: impl Fn(&Value, &Value) -> Value + Send + 'static,
        initial: Value,
    ) -> Result<ProducerHandle, CaptureError> {
        let id = id.into();
        let mut inner = self.inner.lock();
        inner
            .registry
            .insert(id.clone(), Box::new(reduce), initial.clone())?;
        inner.apply(CaptureAction::Init {
            producer: id.clone(),
            value: initial,
        });
        Ok(ProducerHandle {
            store: self.clone(),
            id,
        })
    }

    /// Apply one action to the aggregate state.
    ///
    /// Actions apply in the order they are dispatched. The recording gate does
    /// not filter this path: actions flow through whether recording is paused
    /// or not.
    pub fn dispatch(&self, action: CaptureAction) {
        self.inner.lock().apply(action);
    }

    /// Cloned view of the aggregate snapshot: id -> current value.
    pub fn snapshot(&self) -> BTreeMap<ProducerId, Value> {
        self.inner.lock().registry.snapshot()
    }

    /// Captured records for every registered producer, ordered by id.
    pub fn export(&self) -> Vec<ProducerCapture> {
        self.inner.lock().registry.export()
    }

    /// Whether the recording gate is open.
    pub fn is_recording(&self) -> bool {
        self.inner.lock().recording
    }

    /// Flip the recording gate once; returns the new value.
    ///
    /// The gate is advisory: it drives the shell's record/pause affordance and
    /// the bridge acknowledgment, not the action stream.
    pub fn toggle_recording(&self) -> bool {
        let mut inner = self.inner.lock();
        inner.recording = !inner.recording;
        inner.recording
    }

    /// Number of currently registered producers.
    pub fn producer_count(&self) -> usize {
        self.inner.lock().registry.len()
    }

    /// Capture configuration fixed at construction.
    pub fn config(&self) -> CaptureConfig {
        self.inner.lock().config.clone()
    }
}

impl Default for CaptureStore {
    fn default() -> Self {
        Self::new()
    }
}

impl StoreInner {
    // The one writer path for aggregate state. Registry membership is
    // consulted live here, never from a cached copy, so a stale action can
    // never reintroduce an unregistered producer.
    fn apply(&mut self, action: CaptureAction) {
        match action {
            CaptureAction::Teardown { producer } => {
                if !self.registry.remove(&producer) {
                    tracing::debug!(producer = %producer, "dropping teardown for unknown producer");
                }
            }
            CaptureAction::Init { producer, value } => {
                let Some(slot) = self.registry.slot_mut(&producer) else {
                    tracing::debug!(producer = %producer, "dropping init for unregistered producer");
                    return;
                };
                // Seed verbatim, bypassing the reducer.
                slot.seed = value.clone();
                slot.value = value;
                slot.transitions.clear();
            }
            CaptureAction::Update { producer, payload } => {
                let Some(slot) = self.registry.slot_mut(&producer) else {
                    tracing::debug!(producer = %producer, "dropping update for unregistered producer");
                    return;
                };
                let next = (slot.reduce)(&slot.value, &payload);
                slot.value = next.clone();
                slot.transitions.push(Transition {
                    payload,
                    value: next,
                });
            }
        }
    }
}

/// Handle returned by [`CaptureStore::register`], used to unregister the
/// producer it names.
pub struct ProducerHandle {
    store: CaptureStore,
    id: ProducerId,
}

impl ProducerHandle {
    pub fn id(&self) -> &ProducerId {
        &self.id
    }

    /// Remove the producer from the registry and drop its snapshot entry.
    ///
    /// Modeled as a [`CaptureAction::Teardown`] so it serializes with every
    /// other in-flight action. Dropping the handle without calling this
    /// leaves the producer registered.
    pub fn unregister(self) {
        self.store.dispatch(CaptureAction::Teardown { producer: self.id });
    }
}
