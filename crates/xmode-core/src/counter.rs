/// Value shown `elapsed_ms` into a count-up of `duration_ms` towards
/// `end_value`: `floor(min(elapsed / duration, 1) * end_value)`.
pub fn value_at(end_value: u64, duration_ms: u64, elapsed_ms: f64) -> u64 {
    if duration_ms == 0 {
        return end_value;
    }
    let progress = (elapsed_ms.max(0.0) / duration_ms as f64).min(1.0);
    if progress >= 1.0 {
        return end_value;
    }
    (progress * end_value as f64).floor() as u64
}

/// Count-up animation driven by animation-frame timestamps.
///
/// The first tick fixes the start time, so the first value shown is 0.
/// Values never decrease and the last tick yields exactly the end value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CountUp {
    end_value: u64,
    duration_ms: u64,
    started_at: Option<f64>,
    current: u64,
    finished: bool,
}

impl CountUp {
    pub fn new(end_value: u64, duration_ms: u64) -> Self {
        Self {
            end_value,
            duration_ms,
            started_at: None,
            current: 0,
            finished: false,
        }
    }

    pub fn end_value(&self) -> u64 {
        self.end_value
    }

    pub fn current(&self) -> u64 {
        self.current
    }

    pub fn is_started(&self) -> bool {
        self.started_at.is_some()
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Advance to frame timestamp `now_ms` and return the value to show.
    /// The caller keeps requesting frames until [`CountUp::is_finished`].
    pub fn tick(&mut self, now_ms: f64) -> u64 {
        if self.finished {
            return self.current;
        }

        let start = *self.started_at.get_or_insert(now_ms);
        let elapsed = now_ms - start;

        // Timestamps from the host can jitter backwards; hold the line.
        self.current = self
            .current
            .max(value_at(self.end_value, self.duration_ms, elapsed));
        self.finished = self.duration_ms == 0 || elapsed >= self.duration_ms as f64;
        self.current
    }
}
