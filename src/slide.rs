use crate::error::Result;
use crate::fit::{fit, Size};

/// One loaded image and its cover fit for the current container.
#[derive(Debug, Clone, PartialEq)]
pub struct Slide {
    pub url: String,
    pub natural: Size,
    pub fit: Size,
}

impl Slide {
    pub fn new(url: String, natural: Size, container: Size) -> Result<Self> {
        let fit = fit(container, natural)?;
        Ok(Self { url, natural, fit })
    }
}
