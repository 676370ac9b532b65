//! Errors raised for misuse of the library API itself, as opposed to
//! anything a script can trigger.

use thiserror::Error;

/// A host called the API in a way the state's current status doesn't allow.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LibraryMisuseError {
    /// `resume` was called on a state whose last effect wasn't `Yield`.
    #[error("resume called on a state that is not paused on Yield")]
    NotPaused,
}
