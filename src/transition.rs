use raylib::ease;
use tracing::debug;

use crate::fit::Size;
use crate::slide::Slide;
use crate::state::{following, TransitionState};

/// One eased 0 -> 1 interpolation with its own completion.
struct Track {
    value: f32,
    elapsed: f32,
    duration: f32,
}

impl Track {
    fn new(duration: f32) -> Self {
        Self {
            value: 0.0,
            elapsed: 0.0,
            duration,
        }
    }

    /// Returns true once the track has run its full duration.
    fn advance(&mut self, dt: f32) -> bool {
        self.elapsed += dt;
        if self.elapsed >= self.duration {
            self.value = 1.0;
            return true;
        }
        self.value = ease::cubic_in_out(self.elapsed, 0.0, 1.0, self.duration).clamp(0.0, 1.0);
        false
    }
}

struct ScaleTrack {
    from: usize,
    to: usize,
    track: Track,
}

/// Drives the shader blend factor and the display size between two slides.
///
/// The scale track commits the target as current when it finishes. The blend
/// track resets the blend factor and returns to idle when it finishes. Both
/// run for the same duration, and the scale track is settled first.
pub struct Transition {
    state: TransitionState,
    current: usize,
    next: usize,
    count: usize,
    duration: f32,
    blend: Option<Track>,
    scale: Option<ScaleTrack>,
}

impl Transition {
    pub fn new(count: usize, duration: f32) -> Self {
        Self {
            state: TransitionState::Idle,
            current: 0,
            next: following(0, count),
            count,
            duration,
            blend: None,
            scale: None,
        }
    }

    #[cfg(test)]
    pub fn state(&self) -> TransitionState {
        self.state
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn next(&self) -> usize {
        self.next
    }

    pub fn is_animating(&self) -> bool {
        self.state == TransitionState::Transitioning
    }

    pub fn blend_factor(&self) -> f32 {
        self.blend.as_ref().map_or(0.0, |track| track.value)
    }

    /// Starts a transition towards `target`. Returns false and changes
    /// nothing when a transition is already running, when `target` is the
    /// current slide or out of range, or when there is nothing to switch to.
    pub fn go_to(&mut self, target: usize) -> bool {
        if self.is_animating()
            || self.count <= 1
            || target == self.current
            || target >= self.count
        {
            return false;
        }

        debug!(from = self.current, to = target, "starting transition");
        self.next = target;
        self.state = TransitionState::Transitioning;
        self.blend = Some(Track::new(self.duration));
        self.scale = Some(ScaleTrack {
            from: self.current,
            to: target,
            track: Track::new(self.duration),
        });
        true
    }

    pub fn advance(&mut self, dt: f32) {
        if let Some(scale) = self.scale.as_mut() {
            if scale.track.advance(dt) {
                self.current = scale.to;
                self.scale = None;
            }
        }

        if let Some(blend) = self.blend.as_mut() {
            if blend.advance(dt) {
                self.blend = None;
                self.next = following(self.current, self.count);
                self.state = TransitionState::Idle;
                debug!(current = self.current, "transition finished");
            }
        }
    }

    /// Size at which the transition quad is drawn. Derived from the slides'
    /// current fits, so a relayout mid-transition retargets the scale.
    pub fn display_size(&self, slides: &[Slide]) -> Size {
        match &self.scale {
            Some(scale) => slides[scale.from].fit.lerp(slides[scale.to].fit, scale.track.value),
            None => slides[self.current].fit,
        }
    }
}
