use std::cell::RefCell;

use tokio::sync::mpsc;

use super::{CallEvent, ChannelEventHandler};

/// Channel for passing calling SDK events to the session coroutine.
///
/// The receiver can be taken exactly once; handlers can be handed out freely.
pub struct CallEventChannel {
    sender: mpsc::UnboundedSender<CallEvent>,
    receiver: RefCell<Option<mpsc::UnboundedReceiver<CallEvent>>>,
}

impl CallEventChannel {
    pub fn new() -> Self {
        let (sender, receiver) = mpsc::unbounded_channel();
        Self {
            sender,
            receiver: RefCell::new(Some(receiver)),
        }
    }

    /// Handler to give to the calling SDK
    pub fn handler(&self) -> ChannelEventHandler {
        ChannelEventHandler::new(self.sender.clone())
    }

    pub fn take_receiver(&self) -> Option<mpsc::UnboundedReceiver<CallEvent>> {
        self.receiver.borrow_mut().take()
    }
}

impl Default for CallEventChannel {
    fn default() -> Self {
        Self::new()
    }
}
