use std::time::{Duration, Instant};

use crate::geometry::Point;

/// Rate limiter for pointer moves.
///
/// The first move after a quiet period passes straight through; moves arriving
/// inside the interval replace a single pending position that [`flush`] hands
/// out once the interval has elapsed, so the final resting position is never
/// dropped. Time is always supplied by the caller.
///
/// [`flush`]: PointerThrottle::flush
#[derive(Clone, Debug)]
pub struct PointerThrottle {
    interval: Duration,
    last_emit: Option<Instant>,
    pending: Option<Point>,
}

impl PointerThrottle {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            last_emit: None,
            pending: None,
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn set_interval(&mut self, interval: Duration) {
        self.interval = interval;
    }

    /// Offer a new position; returns it if it may be forwarded now.
    pub fn offer(&mut self, now: Instant, pointer: Point) -> Option<Point> {
        if self.ready(now) {
            self.emit(now);
            Some(pointer)
        } else {
            self.pending = Some(pointer);
            None
        }
    }

    /// Release the pending position once the interval has elapsed.
    pub fn flush(&mut self, now: Instant) -> Option<Point> {
        if !self.ready(now) {
            return None;
        }
        let pointer = self.pending.take()?;
        self.emit(now);
        Some(pointer)
    }

    /// When the pending position becomes releasable, if there is one.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.pending?;
        Some(match self.last_emit {
            Some(t) => t + self.interval,
            None => Instant::now(),
        })
    }

    /// Forget timing and any pending position (pointer left the container).
    pub fn reset(&mut self) {
        self.last_emit = None;
        self.pending = None;
    }

    fn ready(&self, now: Instant) -> bool {
        match self.last_emit {
            Some(t) => now.saturating_duration_since(t) >= self.interval,
            None => true,
        }
    }

    fn emit(&mut self, now: Instant) {
        self.last_emit = Some(now);
        self.pending = None;
    }
}
