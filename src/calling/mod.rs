// Seam to the external calling SDK.
// The SDK owns connection setup and media; all the app consumes from it is
// whether a call connected, whether the platform is unsupported, and how a
// call ended.

pub mod event_channel;
pub mod event_handler;

pub use event_channel::CallEventChannel;
pub use event_handler::{CallEvent, CallEventHandler, ChannelEventHandler};
