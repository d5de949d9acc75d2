use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum UiError {
    #[error("font family '{family}' is not available")]
    FontUnavailable { family: String },

    #[error("button image: {0}")]
    Image(#[from] ImageError),

    #[error("invalid font size range: max {max} < min {min} or min < 1")]
    InvalidSizeRange { max: u32, min: u32 },
}

#[derive(Debug, Error, PartialEq)]
pub enum ImageError {
    #[error("image has no pixels")]
    EmptyImage,

    #[error("cannot scale image to {w}x{h}")]
    InvalidTarget { w: f32, h: f32 },

    #[error("backend failed to draw image: {0}")]
    Backend(String),
}
