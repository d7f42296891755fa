use tessera_engine::coords::{Edges, Rect};
use tessera_engine::paint::Color;
use tessera_engine::render::{Backend, TextAlign};

use crate::item::{Drawable, ItemState};
use crate::items::StateColors;

/// A background panel with a centred caption.
///
/// The background follows the item state. Pressed and hovered looks only appear when
/// something drives the state: the dispatcher for press/release, the caller for the rest.
///
/// # Example
/// ```rust,ignore
/// let save = pool.insert(
///     Button::new(Rect::new(8.0, 8.0, 96.0, 32.0), "Save")
///         .background(StateColors::uniform(Color::GREEN).pressed(Color::DARK_GRAY))
///         .border(Color::WHITE),
/// );
/// ```
#[derive(Debug, Clone)]
pub struct Button {
    rect: Rect,
    caption: String,
    background: StateColors,
    text: StateColors,
    border: Option<Color>,
    padding: Edges,
}

impl Button {
    pub const DEFAULT_BACKGROUND: StateColors = StateColors::new(
        Color::BLUE,
        Color::rgb(85, 85, 255),
        Color::DARK_GRAY,
        Color::BLACK,
    );

    pub fn new(rect: Rect, caption: impl Into<String>) -> Self {
        Self {
            rect,
            caption: caption.into(),
            background: Self::DEFAULT_BACKGROUND,
            text: StateColors::uniform(Color::WHITE).disabled(Color::DARK_GRAY),
            border: None,
            padding: Edges::symmetric(4.0, 0.0),
        }
    }

    pub fn background(mut self, colors: impl Into<StateColors>) -> Self {
        self.background = colors.into();
        self
    }

    pub fn text_color(mut self, colors: impl Into<StateColors>) -> Self {
        self.text = colors.into();
        self
    }

    pub fn border(mut self, color: Color) -> Self {
        self.border = Some(color);
        self
    }

    pub fn padding(mut self, edges: Edges) -> Self {
        self.padding = edges;
        self
    }

    pub fn caption(&self) -> &str {
        &self.caption
    }
}

impl Drawable for Button {
    fn draw(&self, backend: &mut dyn Backend, state: ItemState) {
        backend.fill_rect(self.rect, self.background.get(state));
        if let Some(border) = self.border {
            backend.draw_rect(self.rect, border);
        }
        let inner = self.rect.deflate(self.padding);
        backend.draw_text(&self.caption, inner, self.text.get(state), TextAlign::Center);
    }

    fn bounds(&self) -> Rect {
        self.rect
    }
}
