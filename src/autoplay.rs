use std::time::Duration;

/// Repeating countdown that asks the slider to advance. The countdown only
/// exists while autoplay is enabled.
#[derive(Debug, Default)]
pub struct Autoplay {
    interval: f32,
    elapsed: Option<f32>,
}

impl Autoplay {
    /// Arms the countdown from zero. Re-arming an enabled timer restarts it.
    /// A zero interval is refused and leaves the timer as it was.
    pub fn start(&mut self, interval: Duration) -> bool {
        if interval.is_zero() {
            return false;
        }
        self.interval = interval.as_secs_f32();
        self.elapsed = Some(0.0);
        true
    }

    pub fn stop(&mut self) {
        self.elapsed = None;
    }

    /// Restarts the countdown if enabled. Used after manual navigation.
    pub fn restart(&mut self) {
        if let Some(elapsed) = self.elapsed.as_mut() {
            *elapsed = 0.0;
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.elapsed.is_some()
    }

    /// Returns true when a full interval has passed. Fires at most once per
    /// call; time beyond the interval is dropped.
    pub fn tick(&mut self, dt: f32) -> bool {
        let Some(elapsed) = self.elapsed.as_mut() else {
            return false;
        };
        *elapsed += dt;
        if *elapsed >= self.interval {
            *elapsed = 0.0;
            true
        } else {
            false
        }
    }
}
