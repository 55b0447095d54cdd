#[derive(Debug, PartialEq, Clone, Copy)]
pub enum TransitionState {
    Idle,          // Showing the current slide
    Transitioning, // Blending towards the target slide
}

/// Index of the slide after `current`, wrapping at `count`.
pub fn following(current: usize, count: usize) -> usize {
    if count == 0 { 0 } else { (current + 1) % count }
}

/// Index of the slide before `current`, wrapping at `count`.
pub fn preceding(current: usize, count: usize) -> usize {
    if count == 0 { 0 } else { (current + count - 1) % count }
}
