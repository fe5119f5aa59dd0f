//! Frame-delta driven timers. They only move when the owner calls `advance`,
//! so pausing a game is a matter of not advancing them.

/// Repeating timer that fires once per elapsed period.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IntervalTimer {
    period: f32,
    elapsed: f32,
}

impl IntervalTimer {
    pub fn new(period: f32) -> Self {
        Self {
            period: period.max(f32::EPSILON),
            elapsed: 0.0,
        }
    }

    /// Adds `dt` seconds and returns how many periods completed.
    pub fn advance(&mut self, dt: f32) -> u32 {
        self.elapsed += dt.max(0.0);
        let mut fired = 0;
        while self.elapsed >= self.period {
            self.elapsed -= self.period;
            fired += 1;
        }
        fired
    }

    pub fn reset(&mut self) {
        self.elapsed = 0.0;
    }
}

/// One-shot timer, idle until started.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Countdown {
    duration: f32,
    remaining: Option<f32>,
}

impl Countdown {
    pub fn new(duration: f32) -> Self {
        Self {
            duration,
            remaining: None,
        }
    }

    pub fn start(&mut self) {
        self.remaining = Some(self.duration);
    }

    pub fn stop(&mut self) {
        self.remaining = None;
    }

    pub fn is_running(&self) -> bool {
        self.remaining.is_some()
    }

    /// Returns `true` on the call that runs the countdown out; it is idle afterwards.
    pub fn advance(&mut self, dt: f32) -> bool {
        let Some(remaining) = self.remaining.as_mut() else {
            return false;
        };
        *remaining -= dt.max(0.0);
        if *remaining <= 0.0 {
            self.remaining = None;
            return true;
        }
        false
    }
}
