// Command pattern for session transitions.
// Screens and the calling SDK bridge send these up to the app coroutine,
// which applies them to the session controller.

pub mod session_commands;

pub use session_commands::SessionCommand;
