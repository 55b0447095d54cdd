use crate::error::{Result, SliderError};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Rejects zero, negative and non-finite dimensions.
    pub fn validate(self) -> Result<Self> {
        let valid = |v: f32| v.is_finite() && v > 0.0;
        if valid(self.width) && valid(self.height) {
            Ok(self)
        } else {
            Err(SliderError::InvalidDimension {
                width: self.width,
                height: self.height,
            })
        }
    }

    pub fn lerp(self, other: Size, t: f32) -> Size {
        Size::new(
            self.width + (other.width - self.width) * t,
            self.height + (other.height - self.height) * t,
        )
    }
}

/// Cover fit: scales `natural` so that it fills `container` without
/// distortion. One side matches the container, the other overflows it.
pub fn fit(container: Size, natural: Size) -> Result<Size> {
    let container = container.validate()?;
    let natural = natural.validate()?;

    let width_ratio = natural.width / container.width;
    let height_ratio = natural.height / container.height;

    if width_ratio > height_ratio {
        // Relatively wider image: pin the height
        Ok(Size::new(container.width * width_ratio / height_ratio, container.height))
    } else {
        Ok(Size::new(container.width, container.height * height_ratio / width_ratio))
    }
}
