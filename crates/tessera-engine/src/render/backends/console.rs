use std::fmt;
use std::io::{self, Write};

use crate::coords::{Rect, Vec2};
use crate::paint::Color;
use crate::render::{Backend, RenderMode, TextAlign};

/// Console backend: describes every drawing call as one line of text.
///
/// Useful as a trace of what a view draws, and on targets where the only output is a
/// character stream. Accelerated mode is not available and degrades to text. If the sink
/// fails, the error is logged once and the backend goes quiet instead of failing the
/// render pass.
pub struct ConsoleBackend<W: Write> {
    out: W,
    mode: Option<RenderMode>,
    lines: usize,
    muted: bool,
}

impl ConsoleBackend<io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> ConsoleBackend<W> {
    pub fn new(out: W) -> Self {
        Self { out, mode: None, lines: 0, muted: false }
    }

    #[inline]
    pub fn mode(&self) -> Option<RenderMode> {
        self.mode
    }

    /// Number of lines successfully written.
    #[inline]
    pub fn lines_written(&self) -> usize {
        self.lines
    }

    /// True once a write error has silenced the backend.
    #[inline]
    pub fn is_muted(&self) -> bool {
        self.muted
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn emit(&mut self, args: fmt::Arguments<'_>) {
        if self.muted {
            return;
        }
        match writeln!(self.out, "{args}") {
            Ok(()) => self.lines += 1,
            Err(err) => {
                log::warn!("console backend output failed, muting: {err}");
                self.muted = true;
            }
        }
    }
}

struct R(Rect);

impl fmt::Display for R {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Rect { origin, size } = self.0;
        write!(f, "{},{} {}x{}", origin.x, origin.y, size.x, size.y)
    }
}

struct P(Vec2);

impl fmt::Display for P {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.0.x, self.0.y)
    }
}

fn fill_word(filled: bool) -> &'static str {
    if filled { "filled" } else { "outline" }
}

impl<W: Write> Backend for ConsoleBackend<W> {
    fn name(&self) -> &'static str {
        "console"
    }

    fn supports(&self, mode: RenderMode) -> bool {
        matches!(mode, RenderMode::Text | RenderMode::Indexed)
    }

    fn initialize(&mut self, mode: RenderMode) {
        let effective = if self.supports(mode) {
            mode
        } else {
            log::warn!("console backend cannot render in {mode} mode; falling back to text");
            RenderMode::Text
        };
        self.mode = Some(effective);
        self.emit(format_args!("initialize mode={effective} requested={mode}"));
    }

    fn fill_rect(&mut self, rect: Rect, color: Color) {
        self.emit(format_args!("fill_rect {} color={color}", R(rect)));
    }

    fn draw_rect(&mut self, rect: Rect, color: Color) {
        self.emit(format_args!("draw_rect {} color={color}", R(rect)));
    }

    fn draw_line(&mut self, start: Vec2, end: Vec2, color: Color) {
        self.emit(format_args!("draw_line {} -> {} color={color}", P(start), P(end)));
    }

    fn draw_circle(&mut self, center: Vec2, radius: f32, color: Color, filled: bool) {
        self.emit(format_args!(
            "draw_circle {} center={} radius={radius} color={color}",
            fill_word(filled),
            P(center)
        ));
    }

    fn draw_ellipse(&mut self, center: Vec2, size: Vec2, color: Color, filled: bool) {
        self.emit(format_args!(
            "draw_ellipse {} center={} size={}x{} color={color}",
            fill_word(filled),
            P(center),
            size.x,
            size.y
        ));
    }

    fn draw_polygon(&mut self, points: &[Vec2], color: Color, filled: bool) {
        let pts: Vec<String> = points.iter().map(|&p| P(p).to_string()).collect();
        self.emit(format_args!(
            "draw_polygon {} points={} [{}] color={color}",
            fill_word(filled),
            points.len(),
            pts.join(" ")
        ));
    }

    fn draw_text(&mut self, text: &str, bounds: Rect, color: Color, align: TextAlign) {
        self.emit(format_args!(
            "draw_text {text:?} bounds={} color={color} align={align:?}",
            R(bounds)
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn output(b: ConsoleBackend<Vec<u8>>) -> Vec<String> {
        String::from_utf8(b.into_inner())
            .unwrap()
            .lines()
            .map(str::to_string)
            .collect()
    }

    #[test]
    fn one_line_per_call() {
        let mut b = ConsoleBackend::new(Vec::new());
        b.initialize(RenderMode::Indexed);
        b.fill_rect(Rect::new(1.0, 2.0, 3.0, 4.0), Color::RED);
        b.draw_circle(Vec2::new(5.0, 5.0), 2.5, Color::WHITE, false);
        b.draw_text("hi", Rect::new(0.0, 0.0, 8.0, 8.0), Color::BLACK, TextAlign::Justified);
        assert_eq!(b.lines_written(), 4);

        let lines = output(b);
        assert_eq!(lines[0], "initialize mode=indexed requested=indexed");
        assert_eq!(lines[1], "fill_rect 1,2 3x4 color=#aa0000ff");
        assert_eq!(lines[2], "draw_circle outline center=(5,5) radius=2.5 color=#ffffffff");
        assert_eq!(lines[3], "draw_text \"hi\" bounds=0,0 8x8 color=#000000ff align=Justified");
    }

    #[test]
    fn accelerated_degrades_to_text() {
        let mut b = ConsoleBackend::new(Vec::new());
        assert!(!b.supports(RenderMode::Accelerated));
        b.initialize(RenderMode::Accelerated);
        assert_eq!(b.mode(), Some(RenderMode::Text));
        assert_eq!(output(b)[0], "initialize mode=text requested=accelerated");
    }

    #[test]
    fn degenerate_polygon_is_still_described() {
        let mut b = ConsoleBackend::new(Vec::new());
        b.draw_polygon(&[], Color::GREEN, true);
        assert_eq!(output(b)[0], "draw_polygon filled points=0 [] color=#00aa00ff");
    }

    struct Broken;

    impl Write for Broken {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn write_failure_mutes_instead_of_panicking() {
        let mut b = ConsoleBackend::new(Broken);
        b.initialize(RenderMode::Text);
        b.fill_rect(Rect::new(0.0, 0.0, 1.0, 1.0), Color::WHITE);
        assert!(b.is_muted());
        assert_eq!(b.lines_written(), 0);
    }
}
