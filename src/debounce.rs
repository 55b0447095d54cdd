/// Collapses a burst of signals into one value, delivered after `quiet`
/// seconds without a new signal.
#[derive(Debug)]
pub struct Debounce<T> {
    quiet: f32,
    pending: Option<(f32, T)>,
}

impl<T> Debounce<T> {
    pub fn new(quiet: f32) -> Self {
        Self { quiet, pending: None }
    }

    /// Records the latest value and restarts the quiet period.
    pub fn signal(&mut self, value: T) {
        self.pending = Some((0.0, value));
    }

    pub fn cancel(&mut self) {
        self.pending = None;
    }

    #[cfg(test)]
    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    pub fn tick(&mut self, dt: f32) -> Option<T> {
        let (waited, _) = self.pending.as_mut()?;
        *waited += dt;
        if *waited >= self.quiet {
            self.pending.take().map(|(_, value)| value)
        } else {
            None
        }
    }
}
