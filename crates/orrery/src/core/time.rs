/// Animation clock fed by wall-clock samples (seconds).
///
/// `elapsed` only advances while animation is enabled and never goes
/// backwards; `delta` is clamped to zero if the wall clock steps back.
#[derive(Debug, Clone, PartialEq)]
pub struct SimulationClock {
    last_sample_time: f64,
    elapsed: f64,
    delta: f64,
    animation_enabled: bool,
}

impl SimulationClock {
    /// Start at `now` with zero elapsed time and animation running.
    pub fn new(now: f64) -> Self {
        Self {
            last_sample_time: now,
            elapsed: 0.0,
            delta: 0.0,
            animation_enabled: true,
        }
    }

    /// Sample the wall clock once per frame. Returns the frame delta.
    pub fn tick(&mut self, now: f64) -> f64 {
        self.delta = (now - self.last_sample_time).max(0.0);
        self.last_sample_time = now;
        if self.animation_enabled {
            self.elapsed += self.delta;
        }
        self.delta
    }

    /// Switch animation on or off.
    ///
    /// Turning it back on restarts frame timing at `now`, so the time spent
    /// paused is never added to `elapsed`.
    pub fn set_animation(&mut self, enabled: bool, now: f64) {
        if enabled && !self.animation_enabled {
            self.last_sample_time = now;
            self.delta = 0.0;
        }
        self.animation_enabled = enabled;
    }

    /// Simulation time in seconds.
    pub fn elapsed(&self) -> f64 {
        self.elapsed
    }

    /// Wall-clock time between the last two samples, in seconds.
    pub fn delta(&self) -> f64 {
        self.delta
    }

    pub fn animation_enabled(&self) -> bool {
        self.animation_enabled
    }

    pub fn last_sample_time(&self) -> f64 {
        self.last_sample_time
    }
}
