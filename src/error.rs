//! Error types for an interaction
//!
//! Three kinds of failure exist:
//!
//! - terminal I/O failures ([`InteractError::Terminal`]) are fatal and never retried;
//! - cancellations ([`Cancelled`]) are reported back to the calling program;
//! - a completed but invalid form is not an error at all, it is retried.

use std::fmt;
use std::io;
use thiserror::Error;

/// Why the user ended the interaction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CancelReason {
    /// The interrupt key was pressed while the form was shown
    Interrupted,
    /// The result was invalid and the user chose to stop instead of retrying
    Declined,
}

impl fmt::Display for CancelReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CancelReason::Interrupted => write!(f, "interrupted"),
            CancelReason::Declined => write!(f, "declined to retry"),
        }
    }
}

/// The user cancelled the interaction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("user cancelled ({reason})")]
pub struct Cancelled {
    reason: CancelReason,
}

impl Cancelled {
    pub fn new(reason: CancelReason) -> Self {
        Cancelled { reason }
    }

    pub fn reason(&self) -> CancelReason {
        self.reason
    }
}

/// Everything that can end an interaction early
#[derive(Debug, Error)]
pub enum InteractError {
    /// Reading from or drawing to the terminal failed
    #[error("terminal error: {0}")]
    Terminal(#[from] io::Error),

    #[error(transparent)]
    Cancelled(#[from] Cancelled),
}

impl InteractError {
    pub fn is_cancelled(&self) -> bool {
        matches!(self, InteractError::Cancelled(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cancelled_message() {
        let err = Cancelled::new(CancelReason::Interrupted);
        assert_eq!(err.to_string(), "user cancelled (interrupted)");
        assert_eq!(err.reason(), CancelReason::Interrupted);
    }

    #[test]
    fn test_conversions() {
        let err: InteractError = Cancelled::new(CancelReason::Declined).into();
        assert!(err.is_cancelled());

        let err: InteractError = io::Error::new(io::ErrorKind::BrokenPipe, "gone").into();
        assert!(!err.is_cancelled());
        assert_eq!(err.to_string(), "terminal error: gone");
    }
}
