use crate::coords::Vec2;
use crate::paint::Color;
use crate::scene::{DrawCmd, DrawList};

/// Circle draw payload.
#[derive(Debug, Clone, PartialEq)]
pub struct CircleCmd {
    pub center: Vec2,
    pub radius: f32,
    pub color: Color,
    pub filled: bool,
}

impl DrawList {
    #[inline]
    pub fn push_circle(&mut self, center: Vec2, radius: f32, color: Color, filled: bool) {
        self.push(DrawCmd::Circle(CircleCmd { center, radius, color, filled }));
    }
}
