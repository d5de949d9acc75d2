use crate::Color;

/// Visual description of one button. `I` is the backend's image handle.
///
/// Every hover override is optional; an attribute without one keeps its
/// normal value while hovered.
#[derive(Clone, Debug, PartialEq)]
pub struct ButtonStyle<I> {
    pub background: Option<Color>,
    pub radius: f32,
    pub text: Option<String>,
    pub font: Option<String>,
    pub text_color: Color,
    pub image: Option<I>,
    pub hover_background: Option<Color>,
    pub hover_text: Option<String>,
}

/// The variant that is active for a single render call.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ResolvedStyle<'a> {
    pub background: Option<Color>,
    pub text: Option<&'a str>,
}

impl<I> ButtonStyle<I> {
    pub fn new() -> Self {
        Self {
            background: None,
            radius: 0.0,
            text: None,
            font: None,
            text_color: Color::BLACK,
            image: None,
            hover_background: None,
            hover_text: None,
        }
    }

    /// 设置基础背景色
    pub fn fill(mut self, color: Color) -> Self {
        self.background = Some(color);
        self
    }

    pub fn fill_opt(mut self, color: Option<Color>) -> Self {
        self.background = color;
        self
    }

    /// 设置圆角 (0 = 直角)
    pub fn rounded(mut self, radius: f32) -> Self {
        self.radius = radius;
        self
    }

    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    /// 设置字体 (None 使用默认字体)
    pub fn font(mut self, family: impl Into<String>) -> Self {
        self.font = Some(family.into());
        self
    }

    pub fn text_color(mut self, color: Color) -> Self {
        self.text_color = color;
        self
    }

    pub fn image(mut self, image: I) -> Self {
        self.image = Some(image);
        self
    }

    pub fn image_opt(mut self, image: Option<I>) -> Self {
        self.image = image;
        self
    }

    pub fn hover_fill(mut self, color: Color) -> Self {
        self.hover_background = Some(color);
        self
    }

    pub fn hover_text(mut self, text: impl Into<String>) -> Self {
        self.hover_text = Some(text.into());
        self
    }

    /// Picks hover overrides only when `hovered` and the override is set.
    /// Empty hover text counts as unset.
    pub fn resolve(&self, hovered: bool) -> ResolvedStyle<'_> {
        let background = match self.hover_background {
            Some(color) if hovered => Some(color),
            _ => self.background,
        };

        let hover_text = self.hover_text.as_deref().filter(|t| !t.is_empty());
        let text = match hover_text {
            Some(t) if hovered => Some(t),
            _ => self.text.as_deref(),
        };

        ResolvedStyle { background, text }
    }
}

impl<I> Default for ButtonStyle<I> {
    fn default() -> Self {
        Self::new()
    }
}
