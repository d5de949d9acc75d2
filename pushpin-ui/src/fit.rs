//! Picks the largest font size whose rendered text fits inside a rect.

use crate::{FontSource, Rect, UiError};

/// Horizontal safety pad subtracted from the rect width.
pub const TEXT_MARGIN: f32 = 3.0;

pub const DEFAULT_MAX_SIZE: u32 = 50;
pub const DEFAULT_MIN_SIZE: u32 = 10;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SizeRange {
    max: u32,
    min: u32,
}

impl SizeRange {
    pub fn new(max: u32, min: u32) -> Result<Self, UiError> {
        if min < 1 || max < min {
            return Err(UiError::InvalidSizeRange { max, min });
        }
        Ok(Self { max, min })
    }

    pub fn max(&self) -> u32 {
        self.max
    }

    pub fn min(&self) -> u32 {
        self.min
    }
}

impl Default for SizeRange {
    fn default() -> Self {
        Self { max: DEFAULT_MAX_SIZE, min: DEFAULT_MIN_SIZE }
    }
}

#[derive(Clone, Debug)]
pub struct FittedFont<F> {
    pub size: u32,
    pub font: F,
    /// Measured (width, height) of the text at `size`.
    pub extent: (f32, f32),
}

impl<F> FittedFont<F> {
    pub fn fits(&self, rect: Rect) -> bool {
        fits_in(self.extent, rect)
    }
}

fn fits_in((w, h): (f32, f32), rect: Rect) -> bool {
    w <= rect.w - TEXT_MARGIN && h <= rect.h
}

pub fn fit<S: FontSource>(
    fonts: &mut S,
    text: &str,
    family: Option<&str>,
    rect: Rect,
) -> Result<FittedFont<S::Font>, UiError> {
    fit_in(fonts, text, family, rect, SizeRange::default())
}

/// Scans sizes from `range.max()` down to `range.min()` one step at a time.
///
/// Measurement is not assumed to be monotonic in the size, so this stays a
/// linear scan. When nothing fits the font at `range.min()` is returned and
/// the text is allowed to overflow.
pub fn fit_in<S: FontSource>(
    fonts: &mut S,
    text: &str,
    family: Option<&str>,
    rect: Rect,
    range: SizeRange,
) -> Result<FittedFont<S::Font>, UiError> {
    for size in (range.min..=range.max).rev() {
        let font = fonts.load(family, size)?;
        let extent = fonts.measure(&font, text);

        if fits_in(extent, rect) {
            log::trace!("fit '{}' at size {} ({:?} in {:?})", text, size, extent, rect);
            return Ok(FittedFont { size, font, extent });
        }
    }

    let font = fonts.load(family, range.min)?;
    let extent = fonts.measure(&font, text);
    log::debug!("'{}' overflows {:?} even at size {}", text, rect, range.min);
    Ok(FittedFont { size: range.min, font, extent })
}
