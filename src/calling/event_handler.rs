use log::{error, info, warn};
use tokio::sync::mpsc;

use crate::commands::SessionCommand;
use crate::session::CallEndOutcome;

/// Terminal and connection notifications from the calling SDK
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CallEvent {
    Established,
    Unsupported,
    /// The call finished normally
    Left,
    /// The call finished abnormally
    Ended(CallEndOutcome),
}

impl From<CallEvent> for SessionCommand {
    fn from(event: CallEvent) -> Self {
        match event {
            CallEvent::Established => SessionCommand::CallEstablished,
            CallEvent::Unsupported => SessionCommand::UnsupportedDetected,
            CallEvent::Left => SessionCommand::EndCall,
            CallEvent::Ended(outcome) => SessionCommand::CallEnded { outcome },
        }
    }
}

/// Callbacks the calling SDK integration invokes
#[async_trait::async_trait]
pub trait CallEventHandler: Send + Sync {
    async fn on_call_established(&self);

    async fn on_unsupported_environment(&self);

    /// The call finished normally, from either side
    async fn on_call_left(&self);

    async fn on_call_ended(&self, outcome: CallEndOutcome);
}

/// Event handler that bridges calling SDK notifications to the Dioxus UI.
///
/// Each notification is forwarded over a channel to the session coroutine,
/// which turns it into a [`SessionCommand`].
#[derive(Clone)]
pub struct ChannelEventHandler {
    event_sender: mpsc::UnboundedSender<CallEvent>,
}

impl ChannelEventHandler {
    pub fn new(event_sender: mpsc::UnboundedSender<CallEvent>) -> Self {
        Self { event_sender }
    }

    fn forward(&self, event: CallEvent) {
        if let Err(e) = self.event_sender.send(event) {
            error!("Failed to forward call event {:?}: {}", event, e);
        }
    }
}

#[async_trait::async_trait]
impl CallEventHandler for ChannelEventHandler {
    async fn on_call_established(&self) {
        info!("Call established");
        self.forward(CallEvent::Established);
    }

    async fn on_unsupported_environment(&self) {
        info!("Calling is not supported in this environment");
        self.forward(CallEvent::Unsupported);
    }

    async fn on_call_left(&self) {
        info!("Call left");
        self.forward(CallEvent::Left);
    }

    async fn on_call_ended(&self, outcome: CallEndOutcome) {
        warn!("Call ended ({})", outcome);
        self.forward(CallEvent::Ended(outcome));
    }
}
