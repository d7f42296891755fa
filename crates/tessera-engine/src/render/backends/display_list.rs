use crate::coords::{Rect, Vec2};
use crate::paint::Color;
use crate::render::{Backend, RenderMode, TextAlign};
use crate::scene::DrawList;

/// Accelerated backend: records every call into a [`DrawList`] for a GPU consumer.
///
/// Calls are recorded verbatim, degenerate geometry included; culling is the consumer's
/// job. Because nothing is lost, the recorded list doubles as an exact call log.
#[derive(Debug, Default)]
pub struct DisplayListBackend {
    list: DrawList,
    requested: Option<RenderMode>,
}

impl DisplayListBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mode passed to the last `initialize` call, before any fallback.
    #[inline]
    pub fn requested_mode(&self) -> Option<RenderMode> {
        self.requested
    }

    /// Mode the backend renders in once initialized.
    #[inline]
    pub fn mode(&self) -> Option<RenderMode> {
        self.requested.map(|_| RenderMode::Accelerated)
    }

    #[inline]
    pub fn draw_list(&self) -> &DrawList {
        &self.list
    }

    /// Hands the recorded frame to the caller and starts a new one.
    pub fn take_list(&mut self) -> DrawList {
        std::mem::take(&mut self.list)
    }

    pub fn clear(&mut self) {
        self.list.clear();
    }
}

impl Backend for DisplayListBackend {
    fn name(&self) -> &'static str {
        "display-list"
    }

    fn supports(&self, mode: RenderMode) -> bool {
        mode == RenderMode::Accelerated
    }

    fn initialize(&mut self, mode: RenderMode) {
        if !self.supports(mode) {
            log::warn!("display list backend always records for accelerated mode (requested {mode})");
        }
        self.requested = Some(mode);
        self.list.clear();
    }

    fn fill_rect(&mut self, rect: Rect, color: Color) {
        self.list.push_fill_rect(rect, color);
    }

    fn draw_rect(&mut self, rect: Rect, color: Color) {
        self.list.push_stroke_rect(rect, color);
    }

    fn draw_line(&mut self, start: Vec2, end: Vec2, color: Color) {
        self.list.push_line(start, end, color);
    }

    fn draw_circle(&mut self, center: Vec2, radius: f32, color: Color, filled: bool) {
        self.list.push_circle(center, radius, color, filled);
    }

    fn draw_ellipse(&mut self, center: Vec2, size: Vec2, color: Color, filled: bool) {
        self.list.push_ellipse(center, size, color, filled);
    }

    fn draw_polygon(&mut self, points: &[Vec2], color: Color, filled: bool) {
        self.list.push_polygon(points, color, filled);
    }

    fn draw_text(&mut self, text: &str, bounds: Rect, color: Color, align: TextAlign) {
        self.list.push_text(text, bounds, color, align);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::{CmdKind, DrawCmd, TextCmd};

    #[test]
    fn records_calls_in_order() {
        let mut b = DisplayListBackend::new();
        b.initialize(RenderMode::Accelerated);
        b.fill_rect(Rect::new(0.0, 0.0, 1.0, 1.0), Color::RED);
        b.draw_text("ok", Rect::new(0.0, 0.0, 10.0, 10.0), Color::WHITE, TextAlign::Right);

        let kinds: Vec<_> = b.draw_list().items().iter().map(DrawCmd::kind).collect();
        assert_eq!(kinds, vec![CmdKind::Rect, CmdKind::Text]);
        assert_eq!(
            b.draw_list().items()[1],
            DrawCmd::Text(TextCmd {
                text: "ok".into(),
                bounds: Rect::new(0.0, 0.0, 10.0, 10.0),
                color: Color::WHITE,
                align: TextAlign::Right,
            })
        );
    }

    #[test]
    fn take_list_starts_a_new_frame() {
        let mut b = DisplayListBackend::new();
        b.draw_line(Vec2::zero(), Vec2::new(1.0, 0.0), Color::BLACK);
        let frame = b.take_list();
        assert_eq!(frame.len(), 1);
        assert!(b.draw_list().is_empty());
    }

    #[test]
    fn initialize_records_requested_mode() {
        let mut b = DisplayListBackend::new();
        assert_eq!(b.mode(), None);
        b.initialize(RenderMode::Text);
        assert_eq!(b.requested_mode(), Some(RenderMode::Text));
        assert_eq!(b.mode(), Some(RenderMode::Accelerated));
    }
}
