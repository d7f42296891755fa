use std::fmt;

use tessera_engine::coords::Rect;
use tessera_engine::render::Backend;

// ── ItemState ─────────────────────────────────────────────────────────────

/// Interaction state of an item.
///
/// Any state may follow any other. The dispatcher drives `Pressed` and `Normal` from
/// pointer input; `Hovered` and `Disabled` are set directly by whoever owns that policy.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash)]
pub enum ItemState {
    #[default]
    Normal,
    Hovered,
    Pressed,
    Disabled,
}

impl fmt::Display for ItemState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ItemState::Normal => "normal",
            ItemState::Hovered => "hovered",
            ItemState::Pressed => "pressed",
            ItemState::Disabled => "disabled",
        })
    }
}

// ── Drawable trait ────────────────────────────────────────────────────────

/// The capability every item kind implements to be scheduled by a view.
///
/// # Implementing a custom item
///
/// ```rust,ignore
/// use tessera_ui::prelude::*;
///
/// struct Dot { at: Vec2 }
///
/// impl Drawable for Dot {
///     fn draw(&self, backend: &mut dyn Backend, state: ItemState) {
///         let color = if state == ItemState::Pressed { Color::RED } else { Color::WHITE };
///         backend.draw_circle(self.at, 3.0, color, true);
///     }
///     fn bounds(&self) -> Rect {
///         Rect::from_center(self.at, Vec2::new(6.0, 6.0))
///     }
/// }
/// ```
pub trait Drawable: 'static {
    /// Draws the item for `state` through `backend`.
    ///
    /// Must only issue drawing calls; the backend is borrowed for the duration of the call.
    fn draw(&self, backend: &mut dyn Backend, state: ItemState);

    /// Area the item paints into, in logical pixels.
    fn bounds(&self) -> Rect;
}

// ── Item ──────────────────────────────────────────────────────────────────

/// A pool entry: a drawable plus its current interaction state.
pub struct Item {
    visual: Box<dyn Drawable>,
    state: ItemState,
}

impl Item {
    pub fn new<D: Drawable>(visual: D) -> Self {
        Self { visual: Box::new(visual), state: ItemState::Normal }
    }

    #[inline]
    pub fn state(&self) -> ItemState {
        self.state
    }

    /// Replaces the interaction state. Every transition is allowed.
    #[inline]
    pub fn set_state(&mut self, state: ItemState) {
        self.state = state;
    }

    /// Draws the item in its current state.
    #[inline]
    pub fn draw(&self, backend: &mut dyn Backend) {
        self.visual.draw(backend, self.state);
    }

    #[inline]
    pub fn bounds(&self) -> Rect {
        self.visual.bounds()
    }
}

impl fmt::Debug for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Item")
            .field("state", &self.state)
            .field("bounds", &self.bounds())
            .finish_non_exhaustive()
    }
}

impl<D: Drawable> From<D> for Item {
    fn from(d: D) -> Self {
        Self::new(d)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tessera_engine::paint::Color;
    use tessera_engine::render::backends::DisplayListBackend;
    use tessera_engine::scene::{DrawCmd, RectCmd};

    struct Swatch;

    impl Drawable for Swatch {
        fn draw(&self, backend: &mut dyn Backend, state: ItemState) {
            let color = match state {
                ItemState::Pressed => Color::RED,
                _ => Color::GRAY,
            };
            backend.fill_rect(self.bounds(), color);
        }

        fn bounds(&self) -> Rect {
            Rect::new(0.0, 0.0, 4.0, 4.0)
        }
    }

    #[test]
    fn new_items_start_normal() {
        assert_eq!(Item::new(Swatch).state(), ItemState::Normal);
    }

    #[test]
    fn any_state_reaches_any_state() {
        let mut item = Item::new(Swatch);
        let all = [ItemState::Normal, ItemState::Hovered, ItemState::Pressed, ItemState::Disabled];
        for from in all {
            for to in all {
                item.set_state(from);
                item.set_state(to);
                assert_eq!(item.state(), to);
            }
        }
    }

    #[test]
    fn draw_passes_current_state() {
        let mut item = Item::new(Swatch);
        item.set_state(ItemState::Pressed);
        let mut backend = DisplayListBackend::new();
        item.draw(&mut backend);
        assert_eq!(
            backend.draw_list().items(),
            &[DrawCmd::Rect(RectCmd { rect: Rect::new(0.0, 0.0, 4.0, 4.0), color: Color::RED, filled: true })]
        );
    }
}
