use raylib::prelude::*;

use crate::error::{Result, SliderError};
use crate::loader::LoadedImage;

// --- Decode on the render thread, apply EXIF rotation, create texture ---
pub fn upload_texture(
    rl: &mut RaylibHandle,
    thread: &RaylibThread,
    loaded: &LoadedImage,
) -> Result<Texture2D> {
    // Decoder picks the format from the extension hint
    let mut image = Image::load_image_from_mem(&format!(".{}", loaded.extension), &loaded.bytes)
        .map_err(|e| SliderError::load(&loaded.url, e))?;

    // 3 = 180 deg, 6 = 90 deg clockwise, 8 = 90 deg counter-clockwise.
    // Mirrored orientations are drawn as stored.
    match loaded.orientation {
        3 => {
            image.rotate_cw();
            image.rotate_cw();
        }
        6 => image.rotate_cw(),
        8 => image.rotate_ccw(),
        _ => {}
    }

    let texture = rl
        .load_texture_from_image(thread, &image)
        .map_err(|e| SliderError::load(&loaded.url, e))?;

    // CPU copy is no longer needed once uploaded
    drop(image);

    Ok(texture)
}
