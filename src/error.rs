use thiserror::Error;

use crate::session::Screen;

/// Errors surfaced by the session controller and the browser seam
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    /// The action is not an edge out of the current screen
    #[error("cannot {action} from the {from:?} screen")]
    InvalidTransition {
        from: Screen,
        action: &'static str,
    },

    /// A history or location write was rejected by the browser
    #[error("navigation failed: {0}")]
    Navigation(String),
}

pub type Result<T> = std::result::Result<T, SessionError>;
