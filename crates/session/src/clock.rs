use std::time::Duration;

/// Fixed-timestep accumulator.
///
/// Wall-clock time goes in, whole simulation frames come out. Leftover time
/// carries over to the next call.
#[derive(Debug, Clone)]
pub struct FixedTimestep {
    step: Duration,
    accumulator: Duration,
    max_catch_up: u32,
}

impl Default for FixedTimestep {
    fn default() -> Self {
        Self::new(Duration::from_secs_f64(1.0 / 60.0), 5)
    }
}

impl FixedTimestep {
    /// `step` is the frame length; `max_catch_up` bounds frames per call so a
    /// long stall does not replay seconds of gameplay at once.
    pub fn new(step: Duration, max_catch_up: u32) -> Self {
        Self {
            step: step.max(Duration::from_micros(1)),
            accumulator: Duration::ZERO,
            max_catch_up,
        }
    }

    pub fn step(&self) -> Duration {
        self.step
    }

    /// Add elapsed time and return how many frames to run.
    pub fn advance(&mut self, elapsed: Duration) -> u32 {
        self.accumulator += elapsed;
        let mut frames = 0;
        while self.accumulator >= self.step && frames < self.max_catch_up {
            self.accumulator -= self.step;
            frames += 1;
        }
        if frames == self.max_catch_up && self.accumulator >= self.step {
            tracing::debug!(dropped = ?self.accumulator, "frame catch-up capped");
            self.accumulator = Duration::ZERO;
        }
        frames
    }

    /// Time banked toward the next frame.
    pub fn pending(&self) -> Duration {
        self.accumulator
    }
}

/// Ring buffer of recent frame durations for instrumentation.
#[derive(Debug)]
pub struct FrameTimer {
    history: Vec<Duration>,
    capacity: usize,
    index: usize,
    filled: bool,
}

impl FrameTimer {
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            history: vec![Duration::ZERO; capacity],
            capacity,
            index: 0,
            filled: false,
        }
    }

    pub fn record(&mut self, dt: Duration) {
        self.history[self.index] = dt;
        self.index = (self.index + 1) % self.capacity;
        if self.index == 0 {
            self.filled = true;
        }
    }

    fn samples(&self) -> &[Duration] {
        let count = if self.filled {
            self.capacity
        } else {
            self.index
        };
        &self.history[..count]
    }

    pub fn average(&self) -> Duration {
        let samples = self.samples();
        if samples.is_empty() {
            return Duration::ZERO;
        }
        samples.iter().sum::<Duration>() / samples.len() as u32
    }

    pub fn max(&self) -> Duration {
        let samples = self.samples();
        samples.iter().copied().max().unwrap_or(Duration::ZERO)
    }

    pub fn sample_count(&self) -> usize {
        self.samples().len()
    }
}
