use crate::coords::{Rect, Vec2};
use crate::paint::{nearest_index, Color};
use crate::render::raster::{self, DeviceMap, Plotter};
use crate::render::text_layout::layout_line;
use crate::render::{Backend, RenderMode, TextAlign};

/// Glyph used for filled areas.
pub const FILL_GLYPH: char = '█';
/// Glyph used for lines, curve outlines and polygon edges.
pub const LINE_GLYPH: char = '*';
const H_EDGE: char = '-';
const V_EDGE: char = '|';
const CORNER: char = '+';

/// Logical pixels covered by one character cell unless configured otherwise.
pub const DEFAULT_CELL_SIZE: Vec2 = Vec2::new(8.0, 16.0);

/// One character cell: a glyph and its palette index.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct Cell {
    pub glyph: char,
    pub color: u8,
}

impl Cell {
    pub const BLANK: Cell = Cell { glyph: ' ', color: 0 };
}

/// Character-cell rasterizer for [`RenderMode::Text`].
///
/// Shapes are mapped from logical pixels onto a `cols × rows` grid, one cell per
/// `cell_size` logical pixels. Colors are quantized to the 16-entry palette and kept per
/// cell. Fully transparent colors draw nothing.
#[derive(Debug, Clone)]
pub struct TextBackend {
    cols: usize,
    rows: usize,
    map: DeviceMap,
    cells: Vec<Cell>,
    mode: Option<RenderMode>,
}

impl TextBackend {
    pub fn new(cols: usize, rows: usize) -> Self {
        Self {
            cols,
            rows,
            map: DeviceMap::new(DEFAULT_CELL_SIZE),
            cells: vec![Cell::BLANK; cols * rows],
            mode: None,
        }
    }

    /// Grid large enough to show a `width × height` logical-pixel surface.
    pub fn for_surface(width: u32, height: u32) -> Self {
        let cols = (width as f32 / DEFAULT_CELL_SIZE.x).ceil() as usize;
        let rows = (height as f32 / DEFAULT_CELL_SIZE.y).ceil() as usize;
        Self::new(cols, rows)
    }

    /// Changes how many logical pixels one cell covers. Non-positive sizes are ignored.
    pub fn with_cell_size(mut self, cell_size: Vec2) -> Self {
        if cell_size.x > 0.0 && cell_size.y > 0.0 && cell_size.is_finite() {
            self.map = DeviceMap::new(cell_size);
        }
        self
    }

    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Mode the backend settled on in `initialize`, if it has been initialized.
    #[inline]
    pub fn mode(&self) -> Option<RenderMode> {
        self.mode
    }

    /// Resets every cell to blank.
    pub fn clear(&mut self) {
        self.cells.fill(Cell::BLANK);
    }

    pub fn cell(&self, col: usize, row: usize) -> Option<Cell> {
        if col < self.cols && row < self.rows {
            Some(self.cells[row * self.cols + col])
        } else {
            None
        }
    }

    /// Each row as a string with trailing blanks trimmed. Always `rows` entries long.
    pub fn lines(&self) -> Vec<String> {
        (0..self.rows)
            .map(|row| {
                let cells = &self.cells[row * self.cols..(row + 1) * self.cols];
                let line: String = cells.iter().map(|c| c.glyph).collect();
                line.trim_end().to_string()
            })
            .collect()
    }

    /// The whole grid, rows joined with newlines.
    pub fn render_to_string(&self) -> String {
        self.lines().join("\n")
    }

    fn brush(&mut self, glyph: char, color: Color) -> Brush<'_> {
        Brush {
            cells: &mut self.cells,
            cols: self.cols as i32,
            rows: self.rows as i32,
            cell: Cell { glyph, color: nearest_index(color) },
        }
    }
}

struct Brush<'a> {
    cells: &'a mut [Cell],
    cols: i32,
    rows: i32,
    cell: Cell,
}

impl Plotter for Brush<'_> {
    fn size(&self) -> (i32, i32) {
        (self.cols, self.rows)
    }

    fn plot(&mut self, x: i32, y: i32) {
        if x >= 0 && y >= 0 && x < self.cols && y < self.rows {
            self.cells[(y * self.cols + x) as usize] = self.cell;
        }
    }
}

impl Backend for TextBackend {
    fn name(&self) -> &'static str {
        "text"
    }

    fn supports(&self, mode: RenderMode) -> bool {
        mode == RenderMode::Text
    }

    fn initialize(&mut self, mode: RenderMode) {
        if !self.supports(mode) {
            log::warn!("text backend cannot render in {mode} mode; falling back to text");
        }
        self.mode = Some(RenderMode::Text);
        self.clear();
        log::debug!("text backend ready: {}x{} cells", self.cols, self.rows);
    }

    fn fill_rect(&mut self, rect: Rect, color: Color) {
        if color.is_transparent() {
            return;
        }
        if let Some((x0, y0, x1, y1)) = self.map.rect(rect) {
            raster::fill_rect(&mut self.brush(FILL_GLYPH, color), x0, y0, x1, y1);
        }
    }

    fn draw_rect(&mut self, rect: Rect, color: Color) {
        if color.is_transparent() {
            return;
        }
        let Some((x0, y0, x1, y1)) = self.map.rect(rect) else {
            return;
        };
        let (right, bottom) = (x1 - 1, y1 - 1);

        let mut brush = self.brush(H_EDGE, color);
        brush.span(x0, right, y0);
        brush.span(x0, right, bottom);

        brush.cell.glyph = V_EDGE;
        for y in y0.max(0)..=bottom.min(brush.rows - 1) {
            brush.plot(x0, y);
            brush.plot(right, y);
        }

        brush.cell.glyph = CORNER;
        for (x, y) in [(x0, y0), (right, y0), (x0, bottom), (right, bottom)] {
            brush.plot(x, y);
        }
    }

    fn draw_line(&mut self, start: Vec2, end: Vec2, color: Color) {
        if color.is_transparent() || !start.is_finite() || !end.is_finite() {
            return;
        }
        let (a, b) = (self.map.point(start), self.map.point(end));
        raster::segment(&mut self.brush(LINE_GLYPH, color), a, b);
    }

    fn draw_circle(&mut self, center: Vec2, radius: f32, color: Color, filled: bool) {
        self.draw_ellipse(center, Vec2::new(radius * 2.0, radius * 2.0), color, filled);
    }

    fn draw_ellipse(&mut self, center: Vec2, size: Vec2, color: Color, filled: bool) {
        if color.is_transparent() || !center.is_finite() {
            return;
        }
        let (cx, cy) = self.map.point(center);
        let rx = size.x / 2.0 / self.map.unit.x;
        let ry = size.y / 2.0 / self.map.unit.y;
        let glyph = if filled { FILL_GLYPH } else { LINE_GLYPH };
        raster::ellipse(&mut self.brush(glyph, color), cx, cy, rx, ry, filled);
    }

    fn draw_polygon(&mut self, points: &[Vec2], color: Color, filled: bool) {
        if color.is_transparent() {
            return;
        }
        let map = self.map;
        let device: Vec<(f32, f32)> = points.iter().map(|&p| map.point(p)).collect();
        let glyph = if filled && points.len() >= 3 { FILL_GLYPH } else { LINE_GLYPH };
        raster::polygon(&mut self.brush(glyph, color), &device, filled);
    }

    fn draw_text(&mut self, text: &str, bounds: Rect, color: Color, align: TextAlign) {
        if text.is_empty() || color.is_transparent() {
            return;
        }
        let Some((x0, y0, x1, y1)) = self.map.rect(bounds) else {
            return;
        };
        let row = y0 + (y1 - y0 - 1) / 2;
        let width = (x1 - x0).max(0) as usize;

        let mut brush = self.brush(' ', color);
        for (offset, glyph) in layout_line(text, width, align) {
            brush.cell.glyph = glyph;
            brush.plot(x0 + offset as i32, row);
        }
    }
}
