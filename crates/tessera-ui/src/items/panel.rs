use tessera_engine::coords::Rect;
use tessera_engine::render::Backend;

use crate::item::{Drawable, ItemState};
use crate::items::StateColors;

/// A filled rectangle with an optional outline.
///
/// # Example
/// ```rust,ignore
/// Panel::new(Rect::new(0.0, 0.0, 200.0, 100.0), Color::BLUE)
///     .outline(Color::WHITE)
/// ```
#[derive(Debug, Clone)]
pub struct Panel {
    rect: Rect,
    fill: StateColors,
    outline: Option<StateColors>,
}

impl Panel {
    pub fn new(rect: Rect, fill: impl Into<StateColors>) -> Self {
        Self { rect, fill: fill.into(), outline: None }
    }

    pub fn fill(mut self, fill: impl Into<StateColors>) -> Self {
        self.fill = fill.into();
        self
    }

    pub fn outline(mut self, outline: impl Into<StateColors>) -> Self {
        self.outline = Some(outline.into());
        self
    }

    #[inline]
    pub fn rect(&self) -> Rect {
        self.rect
    }
}

impl Drawable for Panel {
    fn draw(&self, backend: &mut dyn Backend, state: ItemState) {
        backend.fill_rect(self.rect, self.fill.get(state));
        if let Some(outline) = self.outline {
            backend.draw_rect(self.rect, outline.get(state));
        }
    }

    fn bounds(&self) -> Rect {
        self.rect
    }
}
