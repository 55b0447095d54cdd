use rand::seq::SliceRandom;
use raylib::prelude::*;
use tracing::info;

use crate::error::Result;
use crate::fit::Size;
use crate::loader;
use crate::shader::DisplacementShader;
use crate::slider::{Slider, SliderConfig};
use crate::texture_loader::upload_texture;

/// Loader options that are not part of the widget state.
#[derive(Debug, Clone, Copy, Default)]
pub struct LoadOptions {
    pub shuffle: bool,
}

pub trait Engine: Sized {
    fn initialize(
        rl: &mut RaylibHandle,
        thread: &RaylibThread,
        config: SliderConfig,
        options: LoadOptions,
    ) -> Result<Self>;
    /// Advances one frame and draws it. Returns false once there is nothing
    /// left to show.
    fn render_frame(&mut self, dt: f32, rl: &mut RaylibHandle, thread: &RaylibThread) -> bool;
    fn teardown(&mut self);
}

/// Owns the slider state plus the GPU resources it is drawn with.
/// Textures are indexed like the slides.
pub struct ShaderSliderEngine {
    slider: Slider,
    textures: Vec<Texture2D>,
    shader: Option<DisplacementShader>,
}

impl ShaderSliderEngine {
    fn handle_input(&mut self, rl: &RaylibHandle) {
        if rl.is_window_resized() {
            self.slider.resized(Size::new(
                rl.get_screen_width() as f32,
                rl.get_screen_height() as f32,
            ));
        }

        if rl.is_mouse_button_pressed(MouseButton::MOUSE_BUTTON_LEFT) {
            self.slider.click(rl.get_mouse_position());
        }

        if rl.is_key_pressed(KeyboardKey::KEY_RIGHT) {
            self.slider.go_forward();
        } else if rl.is_key_pressed(KeyboardKey::KEY_LEFT) {
            self.slider.go_back();
        } else if rl.is_key_pressed(KeyboardKey::KEY_SPACE) {
            if self.slider.autoplay_enabled() {
                self.slider.stop_autoplay();
            } else {
                self.slider.start_autoplay();
            }
        }
    }
}

impl Engine for ShaderSliderEngine {
    fn initialize(
        rl: &mut RaylibHandle,
        thread: &RaylibThread,
        config: SliderConfig,
        options: LoadOptions,
    ) -> Result<Self> {
        config.validate()?;

        let mut urls = loader::expand_locations(&config.urls)?;
        if options.shuffle {
            urls.shuffle(&mut rand::rng());
        }

        let images = loader::load(&urls)?;
        let textures = images
            .iter()
            .map(|image| upload_texture(rl, thread, image))
            .collect::<Result<Vec<_>>>()?;

        let images = images.into_iter().map(|image| (image.url, image.natural));
        let slider = Slider::new(&config, images)?;
        let shader = DisplacementShader::load(rl, thread, config.intensity);

        info!(textures = textures.len(), "engine initialised");
        Ok(Self {
            slider,
            textures,
            shader: Some(shader),
        })
    }

    fn render_frame(&mut self, dt: f32, rl: &mut RaylibHandle, thread: &RaylibThread) -> bool {
        if self.slider.is_torn_down() {
            return false;
        }

        self.handle_input(rl);
        self.slider.update(dt);

        let (Some(current), Some(next), Some(shader)) = (
            self.textures.get(self.slider.current_index()),
            self.textures.get(self.slider.next_index()),
            self.shader.as_mut(),
        ) else {
            return false;
        };

        // Uniforms read the transition mid-flight, never mutate it
        shader.set_blend(self.slider.blend_factor());

        let display = self.slider.display_size();
        let container = self.slider.container();
        let active = self.slider.current_index();
        let pagination = self.slider.pagination();

        let mut d = rl.begin_drawing(thread);
        d.clear_background(Color::BLACK);
        {
            let mut s = d.begin_shader_mode(shader.shader());
            shader.bind_next(next);
            // Centred on the laid-out container, cropped when it overflows
            s.draw_texture_pro(
                current,
                Rectangle::new(0.0, 0.0, current.width() as f32, current.height() as f32),
                Rectangle::new(
                    container.width * 0.5,
                    container.height * 0.5,
                    display.width,
                    display.height,
                ),
                Vector2::new(display.width * 0.5, display.height * 0.5),
                0.0,
                Color::WHITE,
            );
        }

        pagination.draw(&mut d, active);
        true
    }

    fn teardown(&mut self) {
        self.slider.teardown();
        // GPU resources go before the window does
        self.shader = None;
        self.textures.clear();
    }
}
