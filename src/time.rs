use std::time::{Duration, Instant};

pub struct Time {
    start: Instant,
    last: Instant,
    pub delta: Duration,
    scale: f32,
    elapsed_scaled: f32,
}

impl Time {
    pub fn new() -> Self {
        let now = Instant::now();
        Self { start: now, last: now, delta: Duration::from_secs_f32(0.0), scale: 1.0, elapsed_scaled: 0.0 }
    }

    pub fn tick(&mut self) {
        let now = Instant::now();
        self.delta = now - self.last;
        self.last = now;
        self.elapsed_scaled += self.delta.as_secs_f32() * self.scale;
    }

    pub fn delta_seconds(&self) -> f32 {
        self.delta.as_secs_f32() * self.scale
    }

    pub fn delta_seconds_unscaled(&self) -> f32 {
        self.delta.as_secs_f32()
    }

    /// Elapsed seconds with the time scale applied.
    pub fn elapsed_seconds(&self) -> f32 {
        self.elapsed_scaled
    }

    /// Wall-clock elapsed seconds, ignoring the time scale.
    pub fn elapsed_seconds_unscaled(&self) -> f32 {
        self.last.duration_since(self.start).as_secs_f32()
    }

    pub fn scale(&self) -> f32 {
        self.scale
    }

    pub fn set_scale(&mut self, scale: f32) {
        self.scale = scale.max(0.0);
    }
}

impl Default for Time {
    fn default() -> Self {
        Self::new()
    }
}
