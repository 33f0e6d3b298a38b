//! Cooperative cancellation for long scans.
//!
//! A scan polls its token once per file pulled from the walker. Nothing is
//! interrupted mid-syscall; the scan simply stops pulling.

use crate::errors::{Error, Result};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Shared stop flag. Clones observe the same flag, so the Ctrl+C handler can
/// own one copy while an analyzer or finder polls another.
///
/// # Examples
///
/// ```
/// use storage_tools::{CancellationToken, Error};
///
/// let token = CancellationToken::new();
/// let scanner_side = token.clone();
/// assert!(scanner_side.check().is_ok());
///
/// token.cancel();
/// assert!(matches!(scanner_side.check(), Err(Error::Interrupted)));
/// ```
#[derive(Debug, Clone, Default)]
pub struct CancellationToken {
    cancelled: Arc<AtomicBool>,
}

impl CancellationToken {
    pub fn new() -> Self {
        Self::default()
    }

    /// Requests that every holder of this token stop.
    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::SeqCst);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::Relaxed)
    }

    /// Returns [`Error::Interrupted`] once the token has been cancelled.
    pub fn check(&self) -> Result<()> {
        if self.is_cancelled() {
            Err(Error::Interrupted)
        } else {
            Ok(())
        }
    }
}

/// Polls an optional token; `None` never cancels.
pub(crate) fn check_optional(token: Option<&CancellationToken>) -> Result<()> {
    token.map_or(Ok(()), CancellationToken::check)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn test_clones_share_state() {
        let token = CancellationToken::default();
        let clone = token.clone();
        assert!(!clone.is_cancelled());
        token.cancel();
        assert!(clone.is_cancelled());
    }

    #[test]
    fn test_cancel_from_another_thread() {
        let token = CancellationToken::new();
        let remote = token.clone();
        thread::spawn(move || remote.cancel()).join().unwrap();
        assert!(matches!(token.check(), Err(Error::Interrupted)));
    }

    #[test]
    fn test_missing_token_never_cancels() {
        assert!(check_optional(None).is_ok());
        let token = CancellationToken::new();
        token.cancel();
        assert!(check_optional(Some(&token)).is_err());
    }
}
