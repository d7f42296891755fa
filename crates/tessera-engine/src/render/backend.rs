use crate::coords::{Rect, Vec2};
use crate::paint::Color;

use super::{RenderMode, TextAlign};

/// Drawing surface contract implemented by every renderer.
///
/// Items draw through `&mut dyn Backend` and never see the concrete renderer.
///
/// Rules every implementation follows:
/// - drawing methods have no return value and may be called in any order
/// - degenerate input (empty rect, radius <= 0, fewer than two points, non-finite
///   coordinates, empty text) is a no-op, never a panic
/// - `initialize` never fails: an unsupported mode degrades to the backend's native mode
///
/// Nothing is batched or deferred by contract; a backend may still choose to record.
pub trait Backend {
    /// Short name used in log output.
    fn name(&self) -> &'static str {
        "backend"
    }

    /// Returns `true` if `mode` can be honoured without degrading.
    fn supports(&self, mode: RenderMode) -> bool;

    /// Configures the backend for `mode`, falling back silently when unsupported.
    fn initialize(&mut self, mode: RenderMode);

    fn fill_rect(&mut self, rect: Rect, color: Color);

    fn draw_rect(&mut self, rect: Rect, color: Color);

    fn draw_line(&mut self, start: Vec2, end: Vec2, color: Color);

    fn draw_circle(&mut self, center: Vec2, radius: f32, color: Color, filled: bool);

    /// `size` is the full width and height of the ellipse.
    fn draw_ellipse(&mut self, center: Vec2, size: Vec2, color: Color, filled: bool);

    /// Closed polygon; the last point connects back to the first.
    fn draw_polygon(&mut self, points: &[Vec2], color: Color, filled: bool);

    fn draw_text(&mut self, text: &str, bounds: Rect, color: Color, align: TextAlign);
}

impl<B: Backend + ?Sized> Backend for Box<B> {
    fn name(&self) -> &'static str {
        (**self).name()
    }

    fn supports(&self, mode: RenderMode) -> bool {
        (**self).supports(mode)
    }

    fn initialize(&mut self, mode: RenderMode) {
        (**self).initialize(mode)
    }

    fn fill_rect(&mut self, rect: Rect, color: Color) {
        (**self).fill_rect(rect, color)
    }

    fn draw_rect(&mut self, rect: Rect, color: Color) {
        (**self).draw_rect(rect, color)
    }

    fn draw_line(&mut self, start: Vec2, end: Vec2, color: Color) {
        (**self).draw_line(start, end, color)
    }

    fn draw_circle(&mut self, center: Vec2, radius: f32, color: Color, filled: bool) {
        (**self).draw_circle(center, radius, color, filled)
    }

    fn draw_ellipse(&mut self, center: Vec2, size: Vec2, color: Color, filled: bool) {
        (**self).draw_ellipse(center, size, color, filled)
    }

    fn draw_polygon(&mut self, points: &[Vec2], color: Color, filled: bool) {
        (**self).draw_polygon(points, color, filled)
    }

    fn draw_text(&mut self, text: &str, bounds: Rect, color: Color, align: TextAlign) {
        (**self).draw_text(text, bounds, color, align)
    }
}
