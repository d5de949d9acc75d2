pub mod error;
pub mod fit;
pub mod input;
pub mod style;
pub mod types;
pub mod widgets;

pub use error::{ImageError, UiError};
pub use fit::{FittedFont, SizeRange};
pub use style::{ButtonStyle, ResolvedStyle};
pub use types::{Color, Point, Rect};

/// 字体来源：按字体族和字号加载字体，并测量文字尺寸
pub trait FontSource {
    type Font;

    /// `family == None` selects the backend's default font. An unknown family
    /// must fail with [`UiError::FontUnavailable`].
    fn load(&mut self, family: Option<&str>, size: u32) -> Result<Self::Font, UiError>;

    /// Rendered (width, height) of `text`. Empty text still has a line height.
    fn measure(&self, font: &Self::Font, text: &str) -> (f32, f32);
}

pub trait UiRenderer: FontSource {
    type Image;

    /// 绘制实心矩形，`radius` 已经过裁剪
    fn fill_rect(&mut self, rect: Rect, color: Color, radius: f32);

    /// Draws `image` stretched to exactly `rect`.
    fn draw_image(&mut self, image: &Self::Image, rect: Rect) -> Result<(), UiError>;

    /// 绘制文字，`origin` 是文字包围盒的左上角
    fn draw_text(&mut self, text: &str, font: &Self::Font, color: Color, origin: Point);
}
