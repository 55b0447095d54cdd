use thiserror::Error;

#[derive(Debug, Error)]
pub enum SliderError {
    #[error("invalid configuration: {0}")]
    Config(String),
    #[error("failed to load image '{url}': {reason}")]
    Load { url: String, reason: String },
    #[error("invalid dimension {width}x{height}")]
    InvalidDimension { width: f32, height: f32 },
}

impl SliderError {
    pub fn load(url: impl Into<String>, reason: impl ToString) -> Self {
        SliderError::Load {
            url: url.into(),
            reason: reason.to_string(),
        }
    }
}

pub type Result<T, E = SliderError> = std::result::Result<T, E>;
