//! Message-passing channel to the out-of-process devtool observer.
//!
//! The protocol is a pair of tagged-message enums validated at the boundary:
//! recognized inbound commands drive the capture store, everything else is
//! dropped without error. Transport mechanics live outside the crate; the
//! endpoint exchanges decoded values with the shell through [`ReplySink`] and
//! [`BridgeListener`].

mod endpoint;
pub mod messages;

pub use endpoint::{BridgeListener, DevtoolBridge, ReplySink};
pub use messages::{DevtoolCommand, DevtoolReply};
