use tessera_engine::coords::Rect;
use tessera_engine::paint::Color;
use tessera_engine::render::{Backend, TextAlign};

use crate::item::{Drawable, ItemState};

/// A single line of text placed inside `rect`.
///
/// Labels ignore hover and press; a disabled label is drawn in its dim color.
#[derive(Debug, Clone)]
pub struct Label {
    text: String,
    rect: Rect,
    color: Color,
    disabled_color: Color,
    align: TextAlign,
}

impl Label {
    pub fn new(rect: Rect, text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            rect,
            color: Color::WHITE,
            disabled_color: Color::DARK_GRAY,
            align: TextAlign::default(),
        }
    }

    pub fn color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    pub fn disabled_color(mut self, color: Color) -> Self {
        self.disabled_color = color;
        self
    }

    pub fn align(mut self, align: TextAlign) -> Self {
        self.align = align;
        self
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }
}

impl Drawable for Label {
    fn draw(&self, backend: &mut dyn Backend, state: ItemState) {
        let color = match state {
            ItemState::Disabled => self.disabled_color,
            _ => self.color,
        };
        backend.draw_text(&self.text, self.rect, color, self.align);
    }

    fn bounds(&self) -> Rect {
        self.rect
    }
}
