use crate::input::{Interaction, UiContext, is_hovered};
use crate::{ButtonStyle, Point, Rect, UiError, UiRenderer, fit};

/// Draws one button: background, then image, then text.
///
/// Hover variants are chosen only when `pointer` is inside `rect`. Image
/// failures are returned as-is; no fallback is applied here.
pub fn render_button<R: UiRenderer>(
    ui: &mut R,
    rect: Rect,
    style: &ButtonStyle<R::Image>,
    pointer: Option<Point>,
) -> Result<(), UiError> {
    let hovered = is_hovered(rect, pointer);
    let current = style.resolve(hovered);

    // 1. 背景
    if let Some(color) = current.background {
        ui.fill_rect(rect, color, rect.clamp_radius(style.radius));
    }

    // 2. 图片 (拉伸到按钮大小，不保持宽高比)
    if let Some(image) = &style.image {
        ui.draw_image(image, rect)?;
    }

    // 3. 文字
    if let Some(text) = current.text.filter(|t| !t.is_empty()) {
        let fitted = fit::fit(&mut *ui, text, style.font.as_deref(), rect)?;
        let (text_w, text_h) = fitted.extent;
        let origin = rect.center(text_w, text_h).top_left();
        ui.draw_text(text, &fitted.font, style.text_color, origin);
    }

    Ok(())
}

/// A declared button: where it is, what it looks like and what to call it
/// when it is activated.
#[derive(Clone, Debug)]
pub struct Button<I> {
    pub name: String,
    pub rect: Rect,
    pub style: ButtonStyle<I>,
}

impl<I> Button<I> {
    pub fn new(name: impl Into<String>, rect: Rect, style: ButtonStyle<I>) -> Self {
        Self {
            name: name.into(),
            rect,
            style,
        }
    }

    pub fn show<R>(&self, ui: &mut R, input: &UiContext) -> Result<Interaction, UiError>
    where
        R: UiRenderer<Image = I>,
    {
        render_button(ui, self.rect, &self.style, input.pointer)?;
        Ok(input.interact(self.rect))
    }
}
