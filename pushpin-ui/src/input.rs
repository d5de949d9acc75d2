use crate::{Point, Rect};

pub struct UiContext {
    /// 当前鼠标位置，光标离开窗口时为 None
    pub pointer: Option<Point>,
    /// 鼠标左键是否刚刚按下 (本帧触发)
    pub pressed: bool,
}

impl UiContext {
    pub fn new() -> Self {
        Self {
            pointer: None,
            pressed: false,
        }
    }

    pub fn with_pointer(pointer: impl Into<Point>) -> Self {
        Self {
            pointer: Some(pointer.into()),
            pressed: false,
        }
    }

    /// 更新输入状态 (由 Renderer 调用)
    pub fn update(&mut self, pointer: Option<Point>, pressed: bool) {
        self.pointer = pointer;
        self.pressed = pressed;
    }

    pub fn is_hovering(&self, rect: Rect) -> bool {
        is_hovered(rect, self.pointer)
    }

    pub fn interact(&self, rect: Rect) -> Interaction {
        if !self.is_hovering(rect) {
            return Interaction::None;
        }
        if self.pressed {
            Interaction::Clicked
        } else {
            Interaction::Hovered
        }
    }
}

impl Default for UiContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Shared by hover resolution and click testing.
pub fn is_hovered(rect: Rect, pointer: Option<Point>) -> bool {
    pointer.is_some_and(|p| rect.contains_point(p))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Interaction {
    None,
    Hovered,
    Clicked, // 刚刚点击
}

impl Interaction {
    pub fn is_clicked(&self) -> bool {
        matches!(self, Interaction::Clicked)
    }

    pub fn is_hovered(&self) -> bool {
        !matches!(self, Interaction::None)
    }
}
