//! Endpoint for the devtool message channel.

use std::sync::Arc;

use parking_lot::Mutex;
use serde_json::Value;

use crate::bridge::messages::{DevtoolCommand, DevtoolReply};
use crate::codegen::template::{RustHookTemplate, TestTemplate};
use crate::codegen::{synthesize, GeneratedTestFile};
use crate::error::BridgeError;
use crate::store::CaptureStore;

/// Transport seam for outbound acknowledgments.
///
/// The shell owns the actual channel (postMessage, WebSocket, in-process
/// queue); the endpoint only hands replies across this boundary.
pub trait ReplySink: Send + Sync {
    fn post(&self, reply: DevtoolReply);
}

struct BridgeState {
    observer_attached: bool,
    staged: Option<GeneratedTestFile>,
    generation: u64,
}

/// Endpoint for the devtool message channel.
///
/// Decodes inbound commands, drives the capture store, posts acknowledgments
/// through the [`ReplySink`], and stages generated artifacts for the shell to
/// deliver as downloads.
pub struct DevtoolBridge {
    store: CaptureStore,
    sink: Arc<dyn ReplySink>,
    template: Box<dyn TestTemplate>,
    state: Mutex<BridgeState>,
}

impl DevtoolBridge {
    pub fn new(store: CaptureStore, sink: Arc<dyn ReplySink>) -> Self {
        Self::with_template(store, sink, Box::new(RustHookTemplate))
    }

    pub fn with_template(
        store: CaptureStore,
        sink: Arc<dyn ReplySink>,
        template: Box<dyn TestTemplate>,
    ) -> Self {
        Self {
            store,
            sink,
            template,
            state: Mutex::new(BridgeState {
                observer_attached: false,
                staged: None,
                generation: 0,
            }),
        }
    }

    /// Attach a listener for inbound messages.
    ///
    /// Attaching again (a shell remount) invalidates every previously issued
    /// listener: a message delivered through a stale listener is dropped, so
    /// one inbound message can never be handled twice.
    pub fn attach(&self) -> BridgeListener<'_> {
        let mut state = self.state.lock();
        state.generation += 1;
        BridgeListener {
            bridge: self,
            generation: state.generation,
        }
    }

    /// Whether the remote observer has connected.
    ///
    /// The shell reads this to switch into observer-controlled mode and hide
    /// its local record/download affordances.
    pub fn observer_attached(&self) -> bool {
        self.state.lock().observer_attached
    }

    /// Take the staged artifact, if any. Hands it off exactly once.
    pub fn take_staged(&self) -> Option<GeneratedTestFile> {
        self.state.lock().staged.take()
    }

    /// Decode and handle one raw inbound message.
    ///
    /// Malformed payloads and unrecognized commands are dropped; nothing on
    /// this path is fatal to the host.
    pub fn handle_raw(&self, raw: &Value) {
        match Self::decode(raw) {
            Ok(DevtoolCommand::Unknown) => {
                tracing::debug!("ignoring unrecognized devtool command");
            }
            Ok(command) => self.handle_command(command),
            Err(err) => {
                tracing::debug!(error = %err, "dropping malformed devtool message");
            }
        }
    }

    fn decode(raw: &Value) -> Result<DevtoolCommand, BridgeError> {
        Ok(serde_json::from_value(raw.clone())?)
    }

    /// Handle one decoded inbound command.
    pub fn handle_command(&self, command: DevtoolCommand) {
        match command {
            DevtoolCommand::Connect => {
                self.state.lock().observer_attached = true;
                self.sink.post(DevtoolReply::ModuleConnected);
            }
            DevtoolCommand::DownloadFile => {
                let config = self.store.config();
                let file = synthesize(&config, self.template.as_ref(), &self.store.export());
                self.state.lock().staged = Some(file);
            }
            DevtoolCommand::ToggleRecord => {
                self.store.toggle_recording();
                self.sink.post(DevtoolReply::SetStatus);
            }
            DevtoolCommand::Unknown => {}
        }
    }
}

/// Inbound delivery handle issued by [`DevtoolBridge::attach`].
pub struct BridgeListener<'a> {
    bridge: &'a DevtoolBridge,
    generation: u64,
}

impl BridgeListener<'_> {
    /// Deliver one raw inbound message through this listener.
    ///
    /// Returns false if the listener went stale (the bridge re-attached) and
    /// the message was dropped.
    pub fn deliver(&self, raw: &Value) -> bool {
        if self.bridge.state.lock().generation != self.generation {
            tracing::debug!("dropping message delivered through stale bridge listener");
            return false;
        }
        self.bridge.handle_raw(raw);
        true
    }

    /// Detach this listener.
    ///
    /// Bumps the generation so a message still in flight toward this listener
    /// drops instead of double-handling after a remount.
    pub fn detach(self) {
        let mut state = self.bridge.state.lock();
        if state.generation == self.generation {
            state.generation += 1;
        }
    }
}
