use std::fs;
use std::io::Cursor;
use std::path::Path;

use exif::{In, Reader, Tag, Value};
use image::{ImageFormat, ImageReader};
use rayon::prelude::*;
use tracing::{debug, info};

use crate::error::{Result, SliderError};
use crate::fit::Size;

const IMAGE_EXTENSIONS: [&str; 5] = ["png", "jpg", "jpeg", "bmp", "gif"];

/// An image read from disk and probed, ready to be uploaded as a texture.
#[derive(Debug, Clone)]
pub struct LoadedImage {
    pub url: String,
    pub bytes: Vec<u8>,
    /// File type hint for the decoder, without the leading dot.
    pub extension: String,
    /// EXIF orientation, 1 when absent.
    pub orientation: u16,
    /// Dimensions after applying the orientation.
    pub natural: Size,
}

/// Replaces every directory in `locations` by the image files it contains,
/// sorted by file name.
pub fn expand_locations(locations: &[String]) -> Result<Vec<String>> {
    let mut urls = Vec::new();
    for location in locations {
        let path = Path::new(location);
        if path.is_dir() {
            let images = sorted_images_in(path)?;
            if images.is_empty() {
                return Err(SliderError::Config(format!(
                    "no image files found in directory {location}"
                )));
            }
            urls.extend(images);
        } else {
            urls.push(location.clone());
        }
    }
    Ok(urls)
}

fn sorted_images_in(dir: &Path) -> Result<Vec<String>> {
    let url = dir.display().to_string();
    let entries = fs::read_dir(dir).map_err(|e| SliderError::load(&url, e))?;

    let mut paths = Vec::new();
    for entry in entries {
        let path = entry.map_err(|e| SliderError::load(&url, e))?.path();
        let is_image = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| IMAGE_EXTENSIONS.contains(&ext.to_lowercase().as_str()));
        if path.is_file() && is_image {
            paths.push(path);
        }
    }
    paths.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    Ok(paths.into_iter().map(|p| p.display().to_string()).collect())
}

/// Reads and probes every image concurrently. Either all of them load, in
/// input order, or the call fails with the first error observed.
pub fn load(urls: &[String]) -> Result<Vec<LoadedImage>> {
    let images = urls
        .par_iter()
        .map(|url| fetch(url))
        .collect::<Result<Vec<_>>>()?;
    info!(count = images.len(), "images loaded");
    Ok(images)
}

fn fetch(url: &str) -> Result<LoadedImage> {
    let bytes = fs::read(url).map_err(|e| SliderError::load(url, e))?;

    let reader = ImageReader::new(Cursor::new(&bytes))
        .with_guessed_format()
        .map_err(|e| SliderError::load(url, e))?;
    let format = reader
        .format()
        .ok_or_else(|| SliderError::load(url, "unrecognised image format"))?;
    let (width, height) = reader.into_dimensions().map_err(|e| SliderError::load(url, e))?;

    let orientation = if format == ImageFormat::Jpeg {
        read_orientation(url, &bytes)
    } else {
        1
    };
    let natural = oriented(width, height, orientation)
        .validate()
        .map_err(|e| SliderError::load(url, e))?;

    let extension = format.extensions_str().first().copied().unwrap_or("png").to_string();
    debug!(url, width = natural.width, height = natural.height, orientation, "probed image");

    Ok(LoadedImage {
        url: url.to_string(),
        bytes,
        extension,
        orientation,
        natural,
    })
}

/// Natural size of a `width` x `height` image once its EXIF orientation is
/// applied.
pub fn oriented(width: u32, height: u32, orientation: u16) -> Size {
    match orientation {
        // Quarter turns swap the sides
        6 | 8 => Size::new(height as f32, width as f32),
        _ => Size::new(width as f32, height as f32),
    }
}

fn read_orientation(url: &str, bytes: &[u8]) -> u16 {
    match Reader::new().read_from_container(&mut Cursor::new(bytes)) {
        Ok(exif) => exif
            .get_field(Tag::Orientation, In::PRIMARY)
            .and_then(|field| match &field.value {
                Value::Short(values) => values.first().copied(),
                _ => None,
            })
            .unwrap_or(1),
        Err(e) => {
            debug!(url, error = %e, "no EXIF orientation");
            1
        }
    }
}
