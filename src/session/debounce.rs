//! Keystroke debouncer.
//!
//! Coalesces rapid input changes within a time window so the session runs
//! one query per typing pause instead of one per keystroke. Only the
//! latest pending input survives coalescing, which matches the
//! last-write-wins rule the session applies anyway. Purely a tuning
//! layer: sessions work unchanged without it.

use std::time::{Duration, Instant};

/// Default debounce window.
pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(30);

/// Accumulates search-box input until the window elapses.
pub struct Debouncer {
    window: Duration,
    pending: Option<String>,
    last_input: Option<Instant>,
}

impl Debouncer {
    pub fn new(window: Duration) -> Self {
        Self {
            window,
            pending: None,
            last_input: None,
        }
    }

    /// Record the current contents of the search box.
    ///
    /// Replaces any pending input and restarts the window.
    pub fn add(&mut self, input: impl Into<String>) {
        self.pending = Some(input.into());
        self.last_input = Some(Instant::now());
    }

    /// Check if the window has elapsed since the last input.
    pub fn is_ready(&self) -> bool {
        match self.last_input {
            Some(last) => self.pending.is_some() && last.elapsed() >= self.window,
            None => false,
        }
    }

    pub fn has_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Time until the pending input is ready (None if nothing pending)
    pub fn time_until_ready(&self) -> Option<Duration> {
        match (&self.pending, self.last_input) {
            (Some(_), Some(last)) => Some(self.window.saturating_sub(last.elapsed())),
            _ => None,
        }
    }

    /// Take the pending input, ready or not.
    pub fn flush(&mut self) -> Option<String> {
        self.last_input = None;
        self.pending.take()
    }

    /// Drop pending input without producing it.
    pub fn clear(&mut self) {
        self.pending = None;
        self.last_input = None;
    }
}

impl Default for Debouncer {
    fn default() -> Self {
        Self::new(DEFAULT_DEBOUNCE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread::sleep;

    fn quick() -> Debouncer {
        Debouncer::new(Duration::from_millis(50))
    }

    #[test]
    fn test_not_ready_immediately() {
        let mut debouncer = quick();
        debouncer.add("jo");
        assert!(debouncer.has_pending());
        assert!(!debouncer.is_ready());
        assert!(debouncer.time_until_ready().unwrap() > Duration::ZERO);
    }

    #[test]
    fn test_ready_after_window() {
        let mut debouncer = quick();
        debouncer.add("jo");
        sleep(Duration::from_millis(60));
        assert!(debouncer.is_ready());
        assert_eq!(debouncer.flush().as_deref(), Some("jo"));
    }

    #[test]
    fn test_coalesces_to_latest() {
        let mut debouncer = quick();
        debouncer.add("j");
        debouncer.add("jo");
        debouncer.add("job");
        sleep(Duration::from_millis(60));
        assert_eq!(debouncer.flush().as_deref(), Some("job"));
        assert!(!debouncer.has_pending());
    }

    #[test]
    fn test_new_input_restarts_window() {
        let mut debouncer = quick();
        debouncer.add("j");
        sleep(Duration::from_millis(40));
        debouncer.add("jo");
        // Only 40ms of the 50ms window have passed for the new input.
        assert!(!debouncer.is_ready());
    }

    #[test]
    fn test_flush_empties() {
        let mut debouncer = quick();
        debouncer.add("jo");
        debouncer.flush();
        assert!(!debouncer.has_pending());
        assert!(!debouncer.is_ready());
        assert_eq!(debouncer.flush(), None);
    }

    #[test]
    fn test_clear() {
        let mut debouncer = quick();
        debouncer.add("jo");
        debouncer.clear();
        assert!(!debouncer.has_pending());
        assert_eq!(debouncer.flush(), None);
    }
}
