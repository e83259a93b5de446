/// Wall-clock rate limiter: admits at most one event per `interval_ms`,
/// independent of the rendering pulse.
#[derive(Clone, Debug)]
pub struct IntervalLimiter {
    interval_ms: f64,
    last_ms: Option<f64>,
}

impl IntervalLimiter {
    pub fn new(interval_ms: f64) -> Self {
        Self {
            interval_ms,
            last_ms: None,
        }
    }

    /// Returns `true` and records `now_ms` if the interval has elapsed since
    /// the last admitted event.
    pub fn try_acquire(&mut self, now_ms: f64) -> bool {
        match self.last_ms {
            Some(last) if now_ms - last < self.interval_ms => false,
            _ => {
                self.last_ms = Some(now_ms);
                true
            }
        }
    }

    #[inline]
    pub fn interval_ms(&self) -> f64 {
        self.interval_ms
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_event_passes_then_interval_applies() {
        let mut lim = IntervalLimiter::new(50.0);
        assert!(lim.try_acquire(1000.0));
        assert!(!lim.try_acquire(1049.9));
        assert!(lim.try_acquire(1050.0));
        assert!(!lim.try_acquire(1060.0));
    }
}
