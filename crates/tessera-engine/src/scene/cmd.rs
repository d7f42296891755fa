use crate::scene::shapes::circle::CircleCmd;
use crate::scene::shapes::ellipse::EllipseCmd;
use crate::scene::shapes::line::LineCmd;
use crate::scene::shapes::polygon::PolygonCmd;
use crate::scene::shapes::rect::RectCmd;
use crate::scene::shapes::text::TextCmd;

/// Renderer-agnostic draw command, one variant per backend drawing operation.
///
/// Extending the scene:
/// - add a payload module under `scene::shapes::*` with its push helper
/// - add a variant here and in [`CmdKind`]
/// - add the matching method to `render::Backend`
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCmd {
    Rect(RectCmd),
    Line(LineCmd),
    Circle(CircleCmd),
    Ellipse(EllipseCmd),
    Polygon(PolygonCmd),
    Text(TextCmd),
}

/// Discriminant of a [`DrawCmd`], used to group commands into batches.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum CmdKind {
    Rect,
    Line,
    Circle,
    Ellipse,
    Polygon,
    Text,
}

impl DrawCmd {
    #[inline]
    pub fn kind(&self) -> CmdKind {
        match self {
            DrawCmd::Rect(_) => CmdKind::Rect,
            DrawCmd::Line(_) => CmdKind::Line,
            DrawCmd::Circle(_) => CmdKind::Circle,
            DrawCmd::Ellipse(_) => CmdKind::Ellipse,
            DrawCmd::Polygon(_) => CmdKind::Polygon,
            DrawCmd::Text(_) => CmdKind::Text,
        }
    }
}
