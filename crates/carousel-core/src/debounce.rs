/// Coalesces bursts of triggers into one delayed value.
///
/// Every `trigger` cancels whatever is pending and schedules the new value
/// `window_ms` after `now_ms`; `poll` hands the value out once its deadline has
/// passed. Time is passed in by the caller (milliseconds from any monotonic
/// clock), so the same type works under a browser timer or in tests.
#[derive(Clone, Debug)]
pub struct Debouncer<T> {
    window_ms: f64,
    pending: Option<(f64, T)>,
}

impl<T> Debouncer<T> {
    pub fn new(window_ms: f64) -> Self {
        Self {
            window_ms: window_ms.max(0.0),
            pending: None,
        }
    }

    pub fn window_ms(&self) -> f64 {
        self.window_ms
    }

    /// Replace the pending value and restart the delay.
    pub fn trigger(&mut self, now_ms: f64, value: T) {
        self.pending = Some((now_ms + self.window_ms, value));
    }

    /// Deadline of the pending value, if any.
    pub fn deadline(&self) -> Option<f64> {
        self.pending.as_ref().map(|(d, _)| *d)
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    pub fn cancel(&mut self) {
        self.pending = None;
    }

    /// Take the pending value if its deadline has been reached.
    pub fn poll(&mut self, now_ms: f64) -> Option<T> {
        match self.pending {
            Some((deadline, _)) if now_ms >= deadline => self.pending.take().map(|(_, v)| v),
            _ => None,
        }
    }
}
