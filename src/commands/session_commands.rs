use crate::session::CallEndOutcome;

/// Commands sent from screens and the SDK bridge to the session coroutine
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionCommand {
    /// Start or join a call from the home screen
    StartCall,

    /// The calling SDK connected the call
    CallEstablished,

    /// The browser or platform cannot run the calling SDK
    UnsupportedDetected,

    /// The call ended abnormally
    CallEnded {
        outcome: CallEndOutcome,
    },

    /// Leave the call normally
    EndCall,

    /// Reload the page to rejoin the same call
    Rejoin,

    /// Reload the page without the group id
    GoHome,

    /// The viewport was resized
    Resize {
        width: u32,
    },
}
