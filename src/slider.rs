use std::time::Duration;

use raylib::prelude::Vector2;
use tracing::{debug, info, warn};

use crate::autoplay::Autoplay;
use crate::constants::*;
use crate::debounce::Debounce;
use crate::error::{Result, SliderError};
use crate::fit::{fit, Size};
use crate::pagination::Pagination;
use crate::slide::Slide;
use crate::state::{following, preceding};
use crate::transition::Transition;

#[derive(Debug, Clone)]
pub struct SliderConfig {
    pub container: Option<Size>,
    pub urls: Vec<String>,
    pub auto: bool,
    pub interval: Duration,
    pub duration: f32,
    pub intensity: f32,
}

impl Default for SliderConfig {
    fn default() -> Self {
        Self {
            container: None,
            urls: Vec::new(),
            auto: true,
            interval: Duration::from_millis(AUTOPLAY_INTERVAL_MS),
            duration: TRANSITION_DURATION,
            intensity: DISPLACEMENT_INTENSITY,
        }
    }
}

impl SliderConfig {
    /// Checks the config and returns the container size.
    pub fn validate(&self) -> Result<Size> {
        if self.urls.is_empty() {
            return Err(SliderError::Config("no images given".into()));
        }
        let container = self
            .container
            .ok_or_else(|| SliderError::Config("no container to attach to".into()))?
            .validate()?;
        // Checked even without autoplay, which can be switched on later
        if self.interval.is_zero() {
            return Err(SliderError::Config("autoplay interval must be positive".into()));
        }
        if !self.duration.is_finite() || self.duration < 0.0 {
            return Err(SliderError::Config(format!(
                "invalid transition duration {}",
                self.duration
            )));
        }
        if !self.intensity.is_finite() {
            return Err(SliderError::Config(format!(
                "invalid displacement intensity {}",
                self.intensity
            )));
        }
        Ok(container)
    }
}

/// Owned widget state: layout, transition, autoplay and resize handling.
/// Everything advances from `update`, so nothing runs after `teardown`.
pub struct Slider {
    container: Size,
    slides: Vec<Slide>,
    transition: Transition,
    autoplay: Autoplay,
    interval: Duration,
    resize: Debounce<Size>,
    pagination: Pagination,
    torn_down: bool,
}

impl Slider {
    pub fn new(
        config: &SliderConfig,
        images: impl IntoIterator<Item = (String, Size)>,
    ) -> Result<Self> {
        let container = config.validate()?;
        let slides = images
            .into_iter()
            .map(|(url, natural)| Slide::new(url, natural, container))
            .collect::<Result<Vec<_>>>()?;
        if slides.is_empty() {
            return Err(SliderError::Config("no slides to show".into()));
        }

        let mut autoplay = Autoplay::default();
        if config.auto {
            autoplay.start(config.interval);
        }

        info!(slides = slides.len(), auto = config.auto, "slider ready");
        Ok(Self {
            container,
            transition: Transition::new(slides.len(), config.duration),
            pagination: Pagination::layout(container, slides.len()),
            slides,
            autoplay,
            interval: config.interval,
            resize: Debounce::new(RESIZE_QUIET_PERIOD),
            torn_down: false,
        })
    }

    pub fn container(&self) -> Size {
        self.container
    }

    #[cfg(test)]
    pub fn slides(&self) -> &[Slide] {
        &self.slides
    }

    pub fn pagination(&self) -> &Pagination {
        &self.pagination
    }

    pub fn current_index(&self) -> usize {
        self.transition.current()
    }

    pub fn next_index(&self) -> usize {
        self.transition.next()
    }

    pub fn blend_factor(&self) -> f32 {
        self.transition.blend_factor()
    }

    pub fn is_animating(&self) -> bool {
        self.transition.is_animating()
    }

    pub fn display_size(&self) -> Size {
        self.transition.display_size(&self.slides)
    }

    pub fn autoplay_enabled(&self) -> bool {
        self.autoplay.is_enabled()
    }

    pub fn is_torn_down(&self) -> bool {
        self.torn_down
    }

    /// Manual navigation. Restarts the autoplay countdown when accepted.
    pub fn go_to(&mut self, index: usize) -> bool {
        if self.torn_down {
            return false;
        }
        let accepted = self.transition.go_to(index);
        if accepted {
            debug!(url = %self.slides[index].url, "manual navigation");
            self.autoplay.restart();
        }
        accepted
    }

    /// Pagination click: navigates to the dot under `point`, if any.
    pub fn click(&mut self, point: Vector2) -> bool {
        match self.pagination.hit_test(point) {
            Some(index) => self.go_to(index),
            None => false,
        }
    }

    pub fn go_forward(&mut self) -> bool {
        self.go_to(following(self.current_index(), self.slides.len()))
    }

    pub fn go_back(&mut self) -> bool {
        self.go_to(preceding(self.current_index(), self.slides.len()))
    }

    pub fn start_autoplay(&mut self) -> bool {
        if self.torn_down || self.autoplay.is_enabled() {
            return false;
        }
        self.autoplay.start(self.interval)
    }

    pub fn stop_autoplay(&mut self) {
        self.autoplay.stop();
    }

    /// Records a resize signal. Layout is recomputed once the signals settle.
    pub fn resized(&mut self, size: Size) {
        if !self.torn_down {
            self.resize.signal(size);
        }
    }

    pub fn update(&mut self, dt: f32) {
        if self.torn_down {
            return;
        }

        self.transition.advance(dt);

        if self.autoplay.tick(dt) {
            let target = following(self.current_index(), self.slides.len());
            if !self.transition.go_to(target) {
                debug!(target, "autoplay tick skipped");
            }
        }

        if let Some(size) = self.resize.tick(dt) {
            if let Err(e) = self.relayout(size) {
                warn!(error = %e, "keeping previous layout");
            }
        }
    }

    /// Recomputes every slide fit for `container`. Nothing changes on error.
    pub fn relayout(&mut self, container: Size) -> Result<()> {
        let container = container.validate()?;
        let fits = self
            .slides
            .iter()
            .map(|slide| fit(container, slide.natural))
            .collect::<Result<Vec<_>>>()?;

        for (slide, fitted) in self.slides.iter_mut().zip(fits) {
            slide.fit = fitted;
        }
        self.container = container;
        self.pagination = Pagination::layout(container, self.slides.len());
        debug!(width = container.width, height = container.height, "relayout");
        Ok(())
    }

    pub fn teardown(&mut self) {
        if self.torn_down {
            return;
        }
        self.autoplay.stop();
        self.resize.cancel();
        self.torn_down = true;
        info!("slider torn down");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(auto: bool) -> SliderConfig {
        SliderConfig {
            container: Some(Size::new(800.0, 600.0)),
            urls: vec!["img1.jpg".into(), "img2.jpg".into(), "img3.jpg".into()],
            auto,
            interval: Duration::from_secs(2),
            duration: 0.5,
            ..SliderConfig::default()
        }
    }

    fn images(count: usize) -> Vec<(String, Size)> {
        (0..count)
            .map(|i| (format!("img{}.jpg", i + 1), Size::new(400.0 + 200.0 * i as f32, 300.0)))
            .collect()
    }

    fn slider(count: usize, auto: bool) -> Slider {
        Slider::new(&config(auto), images(count)).unwrap()
    }

    fn run(slider: &mut Slider, seconds: f32) {
        let steps = (seconds / 0.25) as usize;
        for _ in 0..steps {
            slider.update(0.25);
        }
    }

    #[test]
    fn empty_urls_is_a_config_error() {
        let config = SliderConfig { urls: Vec::new(), ..config(true) };
        assert!(matches!(Slider::new(&config, images(3)), Err(SliderError::Config(_))));
    }

    #[test]
    fn missing_container_is_a_config_error() {
        let config = SliderConfig { container: None, ..config(true) };
        assert!(matches!(Slider::new(&config, images(3)), Err(SliderError::Config(_))));
    }

    #[test]
    fn zero_sized_container_is_rejected() {
        let config = SliderConfig { container: Some(Size::new(0.0, 600.0)), ..config(true) };
        assert!(matches!(
            Slider::new(&config, images(3)),
            Err(SliderError::InvalidDimension { .. })
        ));
    }

    #[test]
    fn zero_interval_is_rejected_even_without_autoplay() {
        let config = SliderConfig { interval: Duration::ZERO, ..config(false) };
        assert!(matches!(Slider::new(&config, images(3)), Err(SliderError::Config(_))));
    }

    #[test]
    fn autoplay_cannot_be_armed_with_a_zero_interval() {
        let mut slider = slider(3, false);
        slider.interval = Duration::ZERO;
        assert!(!slider.start_autoplay());
        assert!(!slider.autoplay_enabled());
        for _ in 0..5 {
            slider.update(1.0 / 60.0);
        }
        assert!(!slider.is_animating());
        assert_eq!(slider.current_index(), 0);
    }

    #[test]
    fn autoplay_example_scenario() {
        let config = SliderConfig {
            interval: Duration::from_millis(5000),
            duration: 1.5,
            ..config(true)
        };
        let mut slider = Slider::new(&config, images(3)).unwrap();
        assert_eq!(slider.current_index(), 0);
        assert!(slider.autoplay_enabled());

        run(&mut slider, 5.0);
        assert!(slider.is_animating());
        assert_eq!(slider.next_index(), 1);
        assert_eq!(slider.current_index(), 0);

        run(&mut slider, 1.5);
        assert_eq!(slider.current_index(), 1);
        assert!(!slider.is_animating());
    }

    #[test]
    fn autoplay_cycles_through_slides() {
        let mut slider = slider(3, true);
        let mut visited = Vec::new();
        let mut was_animating = false;
        for _ in 0..40 {
            slider.update(0.25);
            if slider.is_animating() && !was_animating {
                visited.push(slider.next_index());
            }
            was_animating = slider.is_animating();
        }
        assert_eq!(visited, [1, 2, 0, 1, 2]);
    }

    #[test]
    fn without_autoplay_nothing_moves() {
        let mut slider = slider(3, false);
        run(&mut slider, 30.0);
        assert_eq!(slider.current_index(), 0);
        assert!(!slider.is_animating());
    }

    #[test]
    fn manual_navigation_restarts_autoplay_countdown() {
        let mut slider = slider(3, true);
        run(&mut slider, 1.5);
        assert!(slider.go_to(2));

        // Without the restart autoplay would have fired here
        run(&mut slider, 0.5);
        assert_eq!(slider.current_index(), 2);
        assert!(!slider.is_animating());

        run(&mut slider, 1.25);
        assert!(!slider.is_animating());
        run(&mut slider, 0.25);
        assert!(slider.is_animating());
        assert_eq!(slider.next_index(), 0);
    }

    #[test]
    fn manual_navigation_rules() {
        let mut slider = slider(3, false);
        assert!(!slider.go_to(0));
        assert!(slider.go_to(1));
        assert!(!slider.go_to(2));
        run(&mut slider, 0.5);
        assert_eq!(slider.current_index(), 1);
        assert!(slider.go_back());
        run(&mut slider, 0.5);
        assert_eq!(slider.current_index(), 0);
        assert!(slider.go_back());
        run(&mut slider, 0.5);
        assert_eq!(slider.current_index(), 2);
        assert!(slider.go_forward());
        run(&mut slider, 0.5);
        assert_eq!(slider.current_index(), 0);
    }

    #[test]
    fn clicking_a_dot_navigates_and_restarts_autoplay() {
        let mut slider = slider(3, true);
        run(&mut slider, 1.5);
        let third = slider.pagination().dots()[2];
        assert!(slider.click(third));
        assert!(slider.is_animating());
        assert_eq!(slider.next_index(), 2);

        // Past the original deadline, inside the restarted one
        run(&mut slider, 1.75);
        assert_eq!(slider.current_index(), 2);
        assert!(!slider.is_animating());
        run(&mut slider, 0.25);
        assert!(slider.is_animating());
        assert_eq!(slider.next_index(), 0);
    }

    #[test]
    fn clicking_the_active_dot_or_empty_space_does_nothing() {
        let mut slider = slider(3, true);
        let first = slider.pagination().dots()[0];
        assert!(!slider.click(first));
        assert!(!slider.click(Vector2::new(400.0, 100.0)));
        assert!(!slider.is_animating());
        assert_eq!(slider.current_index(), 0);

        // The countdown was not restarted by the rejected clicks
        run(&mut slider, 2.0);
        assert!(slider.is_animating());
        assert_eq!(slider.next_index(), 1);
    }

    #[test]
    fn single_slide_ignores_navigation() {
        let mut slider = slider(1, true);
        assert!(!slider.go_forward());
        run(&mut slider, 10.0);
        assert_eq!(slider.current_index(), 0);
        assert!(!slider.is_animating());
    }

    #[test]
    fn resize_burst_relayouts_once_after_quiet_period() {
        let mut slider = slider(3, false);
        slider.resized(Size::new(1000.0, 700.0));
        slider.update(0.25);
        slider.resized(Size::new(1200.0, 800.0));
        slider.update(0.25);
        assert_eq!(slider.container(), Size::new(800.0, 600.0));

        slider.update(0.25);
        assert_eq!(slider.container(), Size::new(1200.0, 800.0));
        for slide in slider.slides() {
            assert_eq!(slide.fit, fit(Size::new(1200.0, 800.0), slide.natural).unwrap());
        }
        assert_eq!(slider.display_size(), slider.slides()[0].fit);
    }

    #[test]
    fn zero_sized_resize_keeps_previous_layout() {
        let mut slider = slider(3, false);
        let before: Vec<Slide> = slider.slides().to_vec();
        slider.resized(Size::new(0.0, 0.0));
        run(&mut slider, 1.0);
        assert_eq!(slider.container(), Size::new(800.0, 600.0));
        assert_eq!(slider.slides(), before.as_slice());
    }

    #[test]
    fn relayout_updates_pagination() {
        let mut slider = slider(3, false);
        slider.relayout(Size::new(1000.0, 500.0)).unwrap();
        assert_eq!(slider.pagination().dots()[1].x, 500.0);
    }

    #[test]
    fn stop_and_start_autoplay() {
        let mut slider = slider(3, true);
        slider.stop_autoplay();
        slider.stop_autoplay();
        run(&mut slider, 10.0);
        assert!(!slider.is_animating());
        assert_eq!(slider.current_index(), 0);

        slider.start_autoplay();
        run(&mut slider, 2.0);
        assert!(slider.is_animating());
        assert_eq!(slider.next_index(), 1);
    }

    #[test]
    fn teardown_silences_everything() {
        let mut slider = slider(3, true);
        slider.resized(Size::new(1000.0, 700.0));
        slider.teardown();
        assert!(!slider.autoplay_enabled());
        assert!(!slider.go_to(1));
        run(&mut slider, 30.0);
        assert!(!slider.is_animating());
        assert_eq!(slider.current_index(), 0);
        assert_eq!(slider.container(), Size::new(800.0, 600.0));
        slider.start_autoplay();
        assert!(!slider.autoplay_enabled());
    }
}
