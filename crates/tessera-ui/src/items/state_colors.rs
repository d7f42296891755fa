use tessera_engine::paint::Color;

use crate::item::ItemState;

/// One color per interaction state.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct StateColors {
    pub normal: Color,
    pub hovered: Color,
    pub pressed: Color,
    pub disabled: Color,
}

impl StateColors {
    pub const fn new(normal: Color, hovered: Color, pressed: Color, disabled: Color) -> Self {
        Self { normal, hovered, pressed, disabled }
    }

    /// The same color in every state.
    pub const fn uniform(color: Color) -> Self {
        Self::new(color, color, color, color)
    }

    pub fn get(&self, state: ItemState) -> Color {
        match state {
            ItemState::Normal => self.normal,
            ItemState::Hovered => self.hovered,
            ItemState::Pressed => self.pressed,
            ItemState::Disabled => self.disabled,
        }
    }

    pub fn hovered(mut self, color: Color) -> Self {
        self.hovered = color;
        self
    }

    pub fn pressed(mut self, color: Color) -> Self {
        self.pressed = color;
        self
    }

    pub fn disabled(mut self, color: Color) -> Self {
        self.disabled = color;
        self
    }
}

impl From<Color> for StateColors {
    fn from(color: Color) -> Self {
        Self::uniform(color)
    }
}
