use pushpin_ui::{Color, FontSource, ImageError, Point, Rect, UiError, UiRenderer};
use skia_safe::{Canvas, Font, Image, Paint, Rect as SkRect};
use crate::core::FontBook;

pub struct UiDrawer<'a> {
    pub(crate) canvas: &'a Canvas,
    fonts: &'a mut FontBook,
}

impl<'a> UiDrawer<'a> {
    pub fn new(canvas: &'a Canvas, fonts: &'a mut FontBook) -> Self {
        Self { canvas, fonts }
    }

    pub fn clear(&mut self, color: Color) {
        self.canvas.clear(to_skia_color(color));
    }
}

fn to_skia_rect(r: Rect) -> SkRect {
    SkRect::from_xywh(r.x, r.y, r.w, r.h)
}

fn to_skia_color(c: Color) -> skia_safe::Color {
    skia_safe::Color::from_argb(c.a, c.r, c.g, c.b)
}

impl FontSource for UiDrawer<'_> {
    type Font = Font;

    fn load(&mut self, family: Option<&str>, size: u32) -> Result<Font, UiError> {
        self.fonts.load(family, size)
    }

    fn measure(&self, font: &Font, text: &str) -> (f32, f32) {
        self.fonts.measure(font, text)
    }
}

impl UiRenderer for UiDrawer<'_> {
    type Image = Image;

    fn fill_rect(&mut self, rect: Rect, color: Color, radius: f32) {
        let sk_rect = to_skia_rect(rect);
        let mut paint = Paint::default();
        paint.set_color(to_skia_color(color));
        paint.set_anti_alias(true);

        if radius > 0.0 {
            self.canvas.draw_round_rect(sk_rect, radius, radius, &paint);
        } else {
            self.canvas.draw_rect(sk_rect, &paint);
        }
    }

    fn draw_image(&mut self, image: &Image, rect: Rect) -> Result<(), UiError> {
        if image.width() <= 0 || image.height() <= 0 {
            return Err(ImageError::EmptyImage.into());
        }
        if !(rect.w > 0.0 && rect.h > 0.0) {
            return Err(ImageError::InvalidTarget { w: rect.w, h: rect.h }.into());
        }

        // 不保持宽高比，直接拉伸
        self.canvas.draw_image_rect(image, None, to_skia_rect(rect), &Paint::default());
        Ok(())
    }

    fn draw_text(&mut self, text: &str, font: &Font, color: Color, origin: Point) {
        let mut paint = Paint::default();
        paint.set_color(to_skia_color(color));
        paint.set_anti_alias(true);

        // origin 是包围盒左上角，draw_str 需要基线
        let (_, metrics) = font.metrics();
        let baseline = origin.y - metrics.ascent;
        self.canvas.draw_str(text, (origin.x, baseline), font, &paint);
    }
}
