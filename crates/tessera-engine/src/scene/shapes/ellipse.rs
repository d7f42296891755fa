use crate::coords::Vec2;
use crate::paint::Color;
use crate::scene::{DrawCmd, DrawList};

/// Axis-aligned ellipse draw payload. `size` is the full width and height.
#[derive(Debug, Clone, PartialEq)]
pub struct EllipseCmd {
    pub center: Vec2,
    pub size: Vec2,
    pub color: Color,
    pub filled: bool,
}

impl DrawList {
    #[inline]
    pub fn push_ellipse(&mut self, center: Vec2, size: Vec2, color: Color, filled: bool) {
        self.push(DrawCmd::Ellipse(EllipseCmd { center, size, color, filled }));
    }
}
