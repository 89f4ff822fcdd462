/// Frames-per-second over a window of at least one second.
#[derive(Debug, Clone, PartialEq)]
pub struct FrameRateCounter {
    window_start: f64,
    frames: u32,
    fps: f32,
}

impl FrameRateCounter {
    pub const WINDOW_SECS: f64 = 1.0;

    pub fn new(now: f64) -> Self {
        Self {
            window_start: now,
            frames: 0,
            fps: 0.0,
        }
    }

    /// Count one rendered frame. Once the window exceeds a second the rate
    /// is published and the window restarts at `now`.
    pub fn record_frame(&mut self, now: f64) {
        self.frames += 1;
        let window = now - self.window_start;
        if window > Self::WINDOW_SECS {
            self.fps = (self.frames as f64 / window) as f32;
            self.frames = 0;
            self.window_start = now;
        }
    }

    /// Start a fresh window without touching the published rate.
    pub fn reset(&mut self, now: f64) {
        self.window_start = now;
        self.frames = 0;
    }

    /// Last published rate.
    pub fn fps(&self) -> f32 {
        self.fps
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn publishes_after_window_elapses() {
        let mut counter = FrameRateCounter::new(0.0);
        for i in 1..=60 {
            counter.record_frame(i as f64 / 60.0);
        }
        // Exactly one second is not yet "more than" the window.
        assert_eq!(counter.fps(), 0.0);
        counter.record_frame(61.0 / 60.0);
        assert!((counter.fps() - 60.0).abs() < 0.5, "fps = {}", counter.fps());
    }

    #[test]
    fn reset_discards_partial_window() {
        let mut counter = FrameRateCounter::new(0.0);
        for i in 1..=30 {
            counter.record_frame(i as f64 * 0.01);
        }
        counter.reset(10.0);
        counter.record_frame(10.5);
        counter.record_frame(11.25);
        assert!((counter.fps() - 2.0 / 1.25).abs() < 1e-4);
    }
}
