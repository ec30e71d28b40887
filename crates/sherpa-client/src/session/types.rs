//! Session types and concurrency guards.

use std::sync::atomic::{AtomicBool, Ordering};

/// Result of a `submit` call. Exchange failures never escape as errors;
/// they are folded into the transcript and reported here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Message delivered; this many assistant replies were appended.
    Delivered { replies: usize },
    /// Input was blank after trimming; nothing happened.
    IgnoredEmpty,
    /// A previous submit has not settled yet; nothing happened.
    IgnoredBusy,
    /// The exchange failed; one fallback reply was appended.
    Fallback,
}

/// Guard that clears the `busy` flag on drop, ensuring it is always released
/// even if the future is cancelled or an early return occurs.
pub(crate) struct BusyGuard<'a> {
    flag: &'a AtomicBool,
}

impl<'a> BusyGuard<'a> {
    /// Attempt to acquire the busy flag. Returns `None` if a request is
    /// already outstanding.
    pub(crate) fn try_acquire(flag: &'a AtomicBool) -> Option<Self> {
        if flag
            .compare_exchange(false, true, Ordering::Acquire, Ordering::Relaxed)
            .is_err()
        {
            return None;
        }
        Some(Self { flag })
    }
}

impl Drop for BusyGuard<'_> {
    fn drop(&mut self) {
        self.flag.store(false, Ordering::Release);
    }
}
