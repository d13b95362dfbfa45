use std::time::{Duration, Instant};

/// Detects a second key press within a time window (Ctrl+C to quit).
#[derive(Debug)]
pub struct DoublePressState {
    pub(crate) first_press_time: Option<Instant>,
    pub(crate) timeout: Duration,
}

impl DoublePressState {
    pub fn new(timeout_ms: u64) -> Self {
        Self {
            first_press_time: None,
            timeout: Duration::from_millis(timeout_ms),
        }
    }

    /// Handle key press. Returns true if it's the second press within timeout
    pub fn on_pressed(&mut self) -> bool {
        self.on_pressed_at(Instant::now())
    }

    pub(crate) fn on_pressed_at(&mut self, now: Instant) -> bool {
        match self.first_press_time {
            Some(first_time) if now.duration_since(first_time) <= self.timeout => {
                self.first_press_time = None;
                true
            }
            _ => {
                self.first_press_time = Some(now);
                false
            }
        }
    }

    pub fn reset(&mut self) {
        self.first_press_time = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_second_press_within_window() {
        let mut state = DoublePressState::new(300);
        let start = Instant::now();
        assert!(!state.on_pressed_at(start));
        assert!(state.on_pressed_at(start + Duration::from_millis(200)));
        // the sequence starts over after a detected double press
        assert!(!state.on_pressed_at(start + Duration::from_millis(250)));
    }

    #[test]
    fn test_slow_second_press_starts_over() {
        let mut state = DoublePressState::new(300);
        let start = Instant::now();
        assert!(!state.on_pressed_at(start));
        assert!(!state.on_pressed_at(start + Duration::from_millis(400)));
        assert!(state.on_pressed_at(start + Duration::from_millis(500)));
    }

    #[test]
    fn test_reset_forgets_first_press() {
        let mut state = DoublePressState::new(300);
        let start = Instant::now();
        state.on_pressed_at(start);
        state.reset();
        assert!(!state.on_pressed_at(start + Duration::from_millis(10)));
    }
}
