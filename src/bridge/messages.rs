use serde::{Deserialize, Serialize};

/// Inbound control commands from the devtool observer.
///
/// Tagged on the `action` field. Any unrecognized tag folds to
/// [`DevtoolCommand::Unknown`] and is dropped by the endpoint; decoding is
/// never fatal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "camelCase")]
pub enum DevtoolCommand {
    /// Attach the remote observer; the shell switches into
    /// observer-controlled mode and hides its local affordances.
    ///
    /// `connectChromogen` is the spelling older observers put on the wire.
    #[serde(alias = "connectChromogen")]
    Connect,

    /// Serialize the current snapshot and stage the artifact for download.
    DownloadFile,

    /// Flip the recording gate.
    ToggleRecord,

    /// Anything else on the wire.
    #[serde(other)]
    Unknown,
}

/// Outbound acknowledgments to the devtool observer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "camelCase")]
pub enum DevtoolReply {
    /// Acknowledges [`DevtoolCommand::Connect`].
    ModuleConnected,
    /// Acknowledges [`DevtoolCommand::ToggleRecord`].
    SetStatus,
}
