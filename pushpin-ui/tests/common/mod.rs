#![allow(dead_code)]

use pushpin_ui::{Color, FontSource, ImageError, Point, Rect, UiError, UiRenderer};

/// Monospace metrics: every glyph is `advance * size` wide, lines are
/// `line * size` tall.
pub struct MonoFonts {
    pub advance: f32,
    pub line: f32,
    pub families: Vec<&'static str>,
    pub loads: Vec<u32>,
}

impl MonoFonts {
    pub fn new() -> Self {
        Self {
            advance: 0.5,
            line: 1.2,
            families: vec!["mono"],
            loads: Vec::new(),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct MonoFont {
    pub family: Option<String>,
    pub size: u32,
}

impl FontSource for MonoFonts {
    type Font = MonoFont;

    fn load(&mut self, family: Option<&str>, size: u32) -> Result<MonoFont, UiError> {
        if let Some(name) = family {
            if !self.families.contains(&name) {
                return Err(UiError::FontUnavailable { family: name.to_string() });
            }
        }
        self.loads.push(size);
        Ok(MonoFont { family: family.map(str::to_string), size })
    }

    fn measure(&self, font: &MonoFont, text: &str) -> (f32, f32) {
        let size = font.size as f32;
        (text.chars().count() as f32 * self.advance * size, self.line * size)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct TestImage {
    pub id: u32,
    pub width: u32,
    pub height: u32,
}

impl TestImage {
    pub fn opaque(id: u32) -> Self {
        Self { id, width: 16, height: 16 }
    }

    pub fn empty(id: u32) -> Self {
        Self { id, width: 0, height: 0 }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum Op {
    Fill { rect: Rect, color: Color, radius: f32 },
    Image { id: u32, rect: Rect },
    Text { text: String, size: u32, color: Color, origin: Point },
}

pub struct Recorder {
    pub fonts: MonoFonts,
    pub ops: Vec<Op>,
}

impl Recorder {
    pub fn new() -> Self {
        Self { fonts: MonoFonts::new(), ops: Vec::new() }
    }

    pub fn fills(&self) -> Vec<Color> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                Op::Fill { color, .. } => Some(*color),
                _ => None,
            })
            .collect()
    }

    pub fn texts(&self) -> Vec<&str> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                Op::Text { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    pub fn kinds(&self) -> Vec<&'static str> {
        self.ops
            .iter()
            .map(|op| match op {
                Op::Fill { .. } => "fill",
                Op::Image { .. } => "image",
                Op::Text { .. } => "text",
            })
            .collect()
    }
}

impl FontSource for Recorder {
    type Font = MonoFont;

    fn load(&mut self, family: Option<&str>, size: u32) -> Result<MonoFont, UiError> {
        self.fonts.load(family, size)
    }

    fn measure(&self, font: &MonoFont, text: &str) -> (f32, f32) {
        self.fonts.measure(font, text)
    }
}

impl UiRenderer for Recorder {
    type Image = TestImage;

    fn fill_rect(&mut self, rect: Rect, color: Color, radius: f32) {
        self.ops.push(Op::Fill { rect, color, radius });
    }

    fn draw_image(&mut self, image: &TestImage, rect: Rect) -> Result<(), UiError> {
        if image.width == 0 || image.height == 0 {
            return Err(ImageError::EmptyImage.into());
        }
        self.ops.push(Op::Image { id: image.id, rect });
        Ok(())
    }

    fn draw_text(&mut self, text: &str, font: &MonoFont, color: Color, origin: Point) {
        self.ops.push(Op::Text { text: text.to_string(), size: font.size, color, origin });
    }
}
