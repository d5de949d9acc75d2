use pushpin_ui::input::UiContext;
use pushpin_ui::widgets::Button;
use pushpin_ui::{ButtonStyle, Color, Rect, UiError};
use skia_safe::Image;
use crate::ui::UiDrawer;

/// The sample screen: three buttons on a white background.
pub struct Showcase {
    buttons: Vec<Button<Image>>,
}

impl Showcase {
    /// Builds the sample buttons. Without an image the image button gets a
    /// flat gray background instead.
    pub fn new(image: Option<Image>) -> Self {
        let fallback = if image.is_none() { Some(Color::GRAY) } else { None };

        let rounded = ButtonStyle::new()
            .fill(Color::BLUE)
            .rounded(10.0)
            .text("Long Text Here! sadadsaddsad")
            .text_color(Color::WHITE)
            .hover_fill(Color::GRAY)
            .hover_text("Hover Text Buddy!");

        let text = ButtonStyle::new()
            .fill(Color::RED)
            .text("Short Text")
            .text_color(Color::WHITE)
            .hover_fill(Color::GREEN);

        let picture = ButtonStyle::new()
            .image_opt(image)
            .fill_opt(fallback)
            .hover_fill(Color::GRAY);

        Self::from_buttons(vec![
            Button::new("Rounded", Rect::new(50.0, 50.0, 200.0, 50.0), rounded),
            Button::new("Text", Rect::new(50.0, 150.0, 200.0, 50.0), text),
            Button::new("Image", Rect::new(50.0, 250.0, 200.0, 100.0), picture),
        ])
    }

    pub fn from_buttons(buttons: Vec<Button<Image>>) -> Self {
        Self { buttons }
    }

    pub fn buttons(&self) -> &[Button<Image>] {
        &self.buttons
    }

    /// Paints every button and returns the name of the first one (in
    /// declaration order) that was clicked this frame.
    pub fn draw(&self, ui: &mut UiDrawer, input: &UiContext) -> Result<Option<&str>, UiError> {
        ui.clear(Color::WHITE);

        let mut activated = None;
        for button in &self.buttons {
            let interaction = button.show(ui, input)?;
            if interaction.is_clicked() && activated.is_none() {
                activated = Some(button.name.as_str());
            }
        }

        Ok(activated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{FontBook, Frame};
    use pushpin_ui::Point;

    fn plain(color: Color) -> ButtonStyle<Image> {
        ButtonStyle::new().fill(color)
    }

    fn click(showcase: &Showcase, at: (f32, f32)) -> Option<String> {
        let mut frame = Frame::new(400, 400).unwrap();
        let mut fonts = FontBook::new();
        let mut ui = UiDrawer::new(frame.canvas(), &mut fonts);

        let mut input = UiContext::with_pointer(at);
        input.pressed = true;
        showcase.draw(&mut ui, &input).unwrap().map(str::to_string)
    }

    #[test]
    fn first_declared_button_wins_overlap() {
        let showcase = Showcase::from_buttons(vec![
            Button::new("Back", Rect::new(0.0, 0.0, 100.0, 100.0), plain(Color::RED)),
            Button::new("Front", Rect::new(50.0, 50.0, 100.0, 100.0), plain(Color::GREEN)),
        ]);

        assert_eq!(click(&showcase, (75.0, 75.0)).as_deref(), Some("Back"));
        assert_eq!(click(&showcase, (120.0, 120.0)).as_deref(), Some("Front"));
        assert_eq!(click(&showcase, (300.0, 300.0)), None);
    }

    #[test]
    fn hover_without_press_is_not_a_click() {
        let showcase = Showcase::from_buttons(vec![
            Button::new("Only", Rect::new(0.0, 0.0, 100.0, 100.0), plain(Color::RED)),
        ]);
        let mut frame = Frame::new(200, 200).unwrap();
        let mut fonts = FontBook::new();
        let mut ui = UiDrawer::new(frame.canvas(), &mut fonts);

        let input = UiContext::with_pointer(Point::new(10.0, 10.0));
        assert_eq!(showcase.draw(&mut ui, &input).unwrap(), None);
    }

    #[test]
    fn image_button_falls_back_to_gray() {
        let showcase = Showcase::new(None);
        let picture = &showcase.buttons()[2];

        assert_eq!(picture.name, "Image");
        assert!(picture.style.image.is_none());
        assert_eq!(picture.style.background, Some(Color::GRAY));
    }

    #[test]
    fn sample_layout() {
        let showcase = Showcase::new(None);
        let rects: Vec<Rect> = showcase.buttons().iter().map(|b| b.rect).collect();
        assert_eq!(rects, vec![
            Rect::new(50.0, 50.0, 200.0, 50.0),
            Rect::new(50.0, 150.0, 200.0, 50.0),
            Rect::new(50.0, 250.0, 200.0, 100.0),
        ]);
        assert_eq!(showcase.buttons()[0].style.hover_text.as_deref(), Some("Hover Text Buddy!"));
    }
}
