/// Measures the time between consecutive frames.
#[derive(Clone, Copy, Debug, Default)]
pub struct FrameClock {
    last: Option<f64>,
}

impl FrameClock {
    pub fn new() -> Self {
        Self { last: None }
    }

    /// Seconds since the previous tick; 0 on the first tick after creation or
    /// `reset`. A clock that runs backwards yields 0 as well.
    pub fn tick(&mut self, now: f64) -> f64 {
        let dt = match self.last {
            Some(last) => (now - last).max(0.0),
            None => 0.0,
        };
        self.last = Some(now);
        dt
    }

    /// Forget the previous frame so a pause does not show up as one huge step.
    pub fn reset(&mut self) {
        self.last = None;
    }
}
