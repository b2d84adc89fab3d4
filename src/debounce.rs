//! Time-windowed rate limiting for high-frequency input.
//!
//! DESIGN
//! ======
//! A call that arrives while the limiter is idle runs immediately and opens a
//! cooldown window. Calls inside the window do not run; the newest one is kept
//! as the pending trailing call and replaces any older one. Once the window
//! has elapsed, [`Debouncer::flush`] hands the pending call back and opens a
//! fresh window. A burst therefore costs at most one leading and one trailing
//! run, and the most recent trigger is never lost.
//!
//! TRADE-OFFS
//! ==========
//! The limiter owns no timer. Callers pass the current time in milliseconds
//! and are told via [`Debouncer::flush_at`] when a flush is due. This keeps it
//! testable with literal timestamps and usable under `Date.now()` in the
//! browser, where `std::time::Instant` is unavailable.

#[cfg(test)]
#[path = "debounce_test.rs"]
mod debounce_test;

/// Coalesces calls carrying a `T` payload within a fixed window.
#[derive(Debug, Clone)]
pub struct Debouncer<T> {
    window_ms: f64,
    /// End of the current cooldown window; `None` until the first run.
    cooldown_until: Option<f64>,
    pending: Option<T>,
}

impl<T> Debouncer<T> {
    #[must_use]
    pub fn new(window_ms: f64) -> Self {
        Self { window_ms, cooldown_until: None, pending: None }
    }

    /// Length of the quiet period in milliseconds.
    #[must_use]
    pub fn window_ms(&self) -> f64 {
        self.window_ms
    }

    /// Offer a call at time `now`.
    ///
    /// Returns the payload when it should run right away. Otherwise the payload
    /// becomes the pending trailing call and `None` is returned.
    pub fn call(&mut self, now: f64, value: T) -> Option<T> {
        if self.is_cooling_down(now) {
            self.pending = Some(value);
            return None;
        }
        self.pending = None;
        self.cooldown_until = Some(now + self.window_ms);
        Some(value)
    }

    /// Release the pending trailing call if its window has elapsed.
    pub fn flush(&mut self, now: f64) -> Option<T> {
        if self.is_cooling_down(now) {
            return None;
        }
        let value = self.pending.take()?;
        self.cooldown_until = Some(now + self.window_ms);
        Some(value)
    }

    /// Whether a trailing call is waiting.
    #[must_use]
    pub fn is_armed(&self) -> bool {
        self.pending.is_some()
    }

    /// Earliest time at which [`Self::flush`] will release the pending call.
    #[must_use]
    pub fn flush_at(&self) -> Option<f64> {
        if self.pending.is_none() {
            return None;
        }
        Some(self.cooldown_until.unwrap_or_default())
    }

    /// Drop the pending trailing call without running it.
    pub fn clear(&mut self) {
        self.pending = None;
    }

    fn is_cooling_down(&self, now: f64) -> bool {
        self.cooldown_until.is_some_and(|until| now < until)
    }
}
