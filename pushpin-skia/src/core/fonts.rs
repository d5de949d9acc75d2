use std::collections::HashMap;
use skia_safe::{Font, FontMgr, FontStyle, Typeface};
use pushpin_ui::{FontSource, UiError};

/// Resolves font families to typefaces and hands out sized fonts.
///
/// Typefaces are cached per family; a family that cannot be resolved is an
/// error rather than a silent substitution.
pub struct FontBook {
    mgr: FontMgr,
    typefaces: HashMap<Option<String>, Typeface>,
}

impl FontBook {
    pub fn new() -> Self {
        Self {
            mgr: FontMgr::default(),
            typefaces: HashMap::new(),
        }
    }

    fn typeface(&mut self, family: Option<&str>) -> Result<Typeface, UiError> {
        let key = family.map(str::to_string);
        if let Some(typeface) = self.typefaces.get(&key) {
            return Ok(typeface.clone());
        }

        let found = match family {
            None => self.mgr.legacy_make_typeface(None::<&str>, FontStyle::normal()),
            Some(name) => self.mgr.match_family_style(name, FontStyle::normal()),
        };

        let typeface = found.ok_or_else(|| UiError::FontUnavailable {
            family: family.unwrap_or("<default>").to_string(),
        })?;

        log::debug!("Resolved font family {:?} -> '{}'", family, typeface.family_name());
        self.typefaces.insert(key, typeface.clone());
        Ok(typeface)
    }
}

impl Default for FontBook {
    fn default() -> Self {
        Self::new()
    }
}

impl FontSource for FontBook {
    type Font = Font;

    fn load(&mut self, family: Option<&str>, size: u32) -> Result<Font, UiError> {
        let typeface = self.typeface(family)?;
        Ok(Font::from_typeface(typeface, size as f32))
    }

    fn measure(&self, font: &Font, text: &str) -> (f32, f32) {
        let (advance, _) = font.measure_str(text, None);
        let (_, metrics) = font.metrics();
        (advance, metrics.descent - metrics.ascent)
    }
}
