use raylib::prelude::*;
use tracing::warn;

// Each image's red channel displaces the other's vertical UV. The current
// image is pushed away as the blend rises, the next one settles into place.
const DISPLACEMENT_FS: &str = r#"
#version 330

in vec2 fragTexCoord;
in vec4 fragColor;

uniform sampler2D texture0;
uniform sampler2D texture1;
uniform float dispFactor;
uniform float intensity;

out vec4 finalColor;

void main()
{
    vec2 uv = fragTexCoord;
    vec4 orig1 = texture(texture0, uv);
    vec4 orig2 = texture(texture1, uv);

    vec4 current = texture(texture0, vec2(uv.x, uv.y + dispFactor * (orig2.r * intensity)));
    vec4 next = texture(texture1, vec2(uv.x, uv.y + (1.0 - dispFactor) * (orig1.r * intensity)));

    finalColor = mix(current, next, dispFactor) * fragColor;
}
"#;

/// The displacement shader and its uniform locations.
pub struct DisplacementShader {
    shader: Shader,
    blend_loc: i32,
    next_loc: i32,
}

impl DisplacementShader {
    pub fn load(rl: &mut RaylibHandle, thread: &RaylibThread, intensity: f32) -> Self {
        let mut shader = rl.load_shader_from_memory(thread, None, Some(DISPLACEMENT_FS));

        let blend_loc = shader.get_shader_location("dispFactor");
        let next_loc = shader.get_shader_location("texture1");
        let intensity_loc = shader.get_shader_location("intensity");
        if blend_loc < 0 || next_loc < 0 || intensity_loc < 0 {
            warn!("displacement shader uniforms missing, transitions will not blend");
        }
        shader.set_shader_value(intensity_loc, intensity);

        Self { shader, blend_loc, next_loc }
    }

    pub fn set_blend(&mut self, blend: f32) {
        self.shader.set_shader_value(self.blend_loc, blend);
    }

    /// Binds the next slide to `texture1`. Sampler slots are reset when the
    /// batch flushes, so this must be called inside shader mode.
    pub fn bind_next(&self, next: &Texture2D) {
        let shader = *self.shader.as_ref();
        let texture = *next.as_ref();
        // SAFETY: both handles are copied from live resources borrowed for
        // the call, and raylib only reads them on the render thread.
        unsafe {
            raylib::ffi::SetShaderValueTexture(shader, self.next_loc, texture);
        }
    }

    pub fn shader(&self) -> &Shader {
        &self.shader
    }
}
