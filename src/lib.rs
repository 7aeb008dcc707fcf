pub mod bridge;
pub mod codegen;
pub mod config;
pub mod error;
pub mod store;

pub use bridge::{BridgeListener, DevtoolBridge, DevtoolCommand, DevtoolReply, ReplySink};
pub use codegen::{
    build_artifact, synthesize, GeneratedTestFile, RustHookTemplate, TestArtifact, TestCase,
    TestTemplate,
};
pub use config::CaptureConfig;
pub use error::{BridgeError, CaptureError};
pub use store::{
    CaptureAction, CaptureStore, ProducerCapture, ProducerHandle, ProducerId, Transition,
};
