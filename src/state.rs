use crate::fix::RawFix;
use std::sync::{Mutex, MutexGuard};

/// Holds the most recently accepted fix for one tracking session
#[derive(Debug, Default)]
pub struct StateTracker {
    held: Mutex<Option<RawFix>>,
}

impl StateTracker {
    /// Create an empty tracker
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the held fix
    pub fn current(&self) -> Option<RawFix> {
        self.lock().clone()
    }

    /// Replace the held fix unconditionally
    pub fn record(&self, fix: RawFix) {
        *self.lock() = Some(fix);
    }

    /// Store `fix` and hand back the fix it superseded, under a single lock
    pub fn replace(&self, fix: RawFix) -> Option<RawFix> {
        self.lock().replace(fix)
    }

    /// Forget the held fix (session restart)
    pub fn clear(&self) {
        self.lock().take();
    }

    // The guarded value is always a whole Option, so a poisoned lock is still usable
    fn lock(&self) -> MutexGuard<'_, Option<RawFix>> {
        self.held.lock().unwrap_or_else(|poisoned| {
            log::warn!("State tracker lock poisoned, recovering held fix");
            poisoned.into_inner()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::thread;

    #[test]
    fn test_starts_empty() {
        let tracker = StateTracker::new();
        assert!(tracker.current().is_none());
    }

    #[test]
    fn test_record_replaces() {
        let tracker = StateTracker::new();
        tracker.record(RawFix::new(1.0, 1.0, 3.0, 100, 1));
        tracker.record(RawFix::new(2.0, 2.0, 3.0, 200, 1));
        assert_eq!(tracker.current().unwrap().time, 200);
    }

    #[test]
    fn test_current_is_idempotent() {
        let tracker = StateTracker::new();
        tracker.record(RawFix::new(1.0, 1.0, 3.0, 100, 1));
        assert_eq!(tracker.current(), tracker.current());
    }

    #[test]
    fn test_replace_returns_previous() {
        let tracker = StateTracker::new();
        assert!(tracker.replace(RawFix::new(1.0, 1.0, 3.0, 100, 1)).is_none());
        let prev = tracker.replace(RawFix::new(2.0, 2.0, 3.0, 200, 1)).unwrap();
        assert_eq!(prev.time, 100);
        assert_eq!(tracker.current().unwrap().time, 200);
    }

    #[test]
    fn test_clear() {
        let tracker = StateTracker::new();
        tracker.record(RawFix::new(1.0, 1.0, 3.0, 100, 1));
        tracker.clear();
        assert!(tracker.current().is_none());
    }

    #[test]
    fn test_concurrent_replace_chains_every_fix() {
        let tracker = Arc::new(StateTracker::new());
        let handles: Vec<_> = (0..4)
            .map(|t| {
                let tracker = Arc::clone(&tracker);
                thread::spawn(move || {
                    (0..100)
                        .filter_map(|i| tracker.replace(RawFix::new(0.0, 0.0, 1.0, t * 1000 + i, 1)))
                        .count()
                })
            })
            .collect();

        let superseded: usize = handles.into_iter().map(|h| h.join().unwrap()).sum();
        // Every fix but the very first one superseded exactly one predecessor
        assert_eq!(superseded, 399);
    }
}
