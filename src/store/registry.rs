use std::collections::BTreeMap;

use serde::Serialize;
use serde_json::Value;

use crate::error::CaptureError;
use crate::store::action::ProducerId;

/// A producer's state-transition function: `(previous value, payload) -> next value`.
pub type ReducerFn = Box<dyn Fn(&Value, &Value) -> Value + Send>;

/// One recorded transition: the payload that was applied and the value the
/// producer held immediately afterwards.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Transition {
    pub payload: Value,
    pub value: Value,
}

/// Registry slot owned by the store for one producer, from registration
/// until unregistration.
pub(crate) struct ProducerSlot {
    pub(crate) reduce: ReducerFn,
    pub(crate) seed: Value,
    pub(crate) value: Value,
    pub(crate) transitions: Vec<Transition>,
}

/// Everything the store observed about one producer, exported for
/// serialization. Detached from the registry: mutating the store after an
/// export does not affect it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProducerCapture {
    pub id: ProducerId,
    pub seed: Value,
    pub value: Value,
    pub transitions: Vec<Transition>,
}

/// Mapping from producer identity to its registered slot.
///
/// `BTreeMap` keeps iteration deterministic by id; registration order carries
/// no meaning.
#[derive(Default)]
pub struct ProducerRegistry {
    slots: BTreeMap<ProducerId, ProducerSlot>,
}

impl ProducerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a slot for `id`, seeded with `initial`.
    ///
    /// A duplicate id leaves the registry unchanged; the existing producer
    /// keeps its slot until it is unregistered.
    pub fn insert(
        &mut self,
        id: ProducerId,
        reduce: ReducerFn,
        initial: Value,
    ) -> Result<(), CaptureError> {
        if self.slots.contains_key(&id) {
            return Err(CaptureError::DuplicateProducer(id));
        }
        self.slots.insert(
            id,
            ProducerSlot {
                reduce,
                seed: initial.clone(),
                value: initial,
                transitions: Vec::new(),
            },
        );
        Ok(())
    }

    /// Remove `id`'s slot entirely. Returns false if it was not present.
    pub fn remove(&mut self, id: &ProducerId) -> bool {
        self.slots.remove(id).is_some()
    }

    pub fn contains(&self, id: &ProducerId) -> bool {
        self.slots.contains_key(id)
    }

    pub(crate) fn slot_mut(&mut self, id: &ProducerId) -> Option<&mut ProducerSlot> {
        self.slots.get_mut(id)
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Current aggregate snapshot: exactly the registered identities, each
    /// mapped to its current value.
    pub fn snapshot(&self) -> BTreeMap<ProducerId, Value> {
        self.slots
            .iter()
            .map(|(id, slot)| (id.clone(), slot.value.clone()))
            .collect()
    }

    /// Export captured records for every registered producer, ordered by id.
    pub fn export(&self) -> Vec<ProducerCapture> {
        self.slots
            .iter()
            .map(|(id, slot)| ProducerCapture {
                id: id.clone(),
                seed: slot.seed.clone(),
                value: slot.value.clone(),
                transitions: slot.transitions.clone(),
            })
            .collect()
    }
}
