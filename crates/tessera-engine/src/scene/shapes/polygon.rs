use crate::coords::Vec2;
use crate::paint::Color;
use crate::scene::{DrawCmd, DrawList};

/// Closed polygon draw payload. The last point connects back to the first.
#[derive(Debug, Clone, PartialEq)]
pub struct PolygonCmd {
    pub points: Vec<Vec2>,
    pub color: Color,
    pub filled: bool,
}

impl DrawList {
    pub fn push_polygon(&mut self, points: &[Vec2], color: Color, filled: bool) {
        self.push(DrawCmd::Polygon(PolygonCmd { points: points.to_vec(), color, filled }));
    }
}
