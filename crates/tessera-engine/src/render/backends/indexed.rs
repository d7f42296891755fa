use bytemuck::{Pod, Zeroable};

use crate::coords::{Rect, Vec2};
use crate::paint::{nearest_index, palette, Color};
use crate::render::raster::{self, DeviceMap, Plotter};
use crate::render::text_layout::layout_line;
use crate::render::{Backend, RenderMode, TextAlign};

/// Greeked glyph cell: every visible character becomes a solid block of this size.
const GLYPH_W: i32 = 5;
const GLYPH_H: i32 = 7;
const GLYPH_ADVANCE: i32 = GLYPH_W + 1;

/// One RGBA pixel, laid out for direct upload or blitting.
#[repr(C)]
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Pod, Zeroable)]
pub struct Rgba8 {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl From<Color> for Rgba8 {
    fn from(c: Color) -> Self {
        Self { r: c.r, g: c.g, b: c.b, a: c.a }
    }
}

/// 16-color indexed framebuffer for [`RenderMode::Indexed`].
///
/// One logical pixel maps to one framebuffer pixel. Every color is quantized to the
/// nearest palette entry; fully transparent colors draw nothing. There is no font
/// rasterizer, so text is drawn greeked: one solid block per visible character.
#[derive(Debug, Clone)]
pub struct IndexedBackend {
    width: usize,
    height: usize,
    pixels: Vec<u8>,
    background: u8,
    mode: Option<RenderMode>,
}

impl IndexedBackend {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            pixels: vec![0; width * height],
            background: 0,
            mode: None,
        }
    }

    /// Palette index used by `clear` and by `initialize`.
    pub fn with_background(mut self, index: u8) -> Self {
        self.background = index % palette::PALETTE_LEN as u8;
        self
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    #[inline]
    pub fn mode(&self) -> Option<RenderMode> {
        self.mode
    }

    /// Fills the framebuffer with the background index.
    pub fn clear(&mut self) {
        self.pixels.fill(self.background);
    }

    /// Palette index at `(x, y)`.
    pub fn pixel(&self, x: usize, y: usize) -> Option<u8> {
        if x < self.width && y < self.height {
            Some(self.pixels[y * self.width + x])
        } else {
            None
        }
    }

    /// Raw palette indices, row-major.
    #[inline]
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    /// Resolves every index through the palette.
    pub fn to_rgba(&self) -> Vec<Rgba8> {
        self.pixels.iter().map(|&i| Rgba8::from(palette::color_at(i))).collect()
    }

    /// Byte view of an RGBA buffer, e.g. for writing an image file or a texture upload.
    pub fn rgba_bytes(pixels: &[Rgba8]) -> &[u8] {
        bytemuck::cast_slice(pixels)
    }

    fn pen(&mut self, color: Color) -> Pen<'_> {
        Pen {
            pixels: &mut self.pixels,
            width: self.width as i32,
            height: self.height as i32,
            index: nearest_index(color),
        }
    }
}

struct Pen<'a> {
    pixels: &'a mut [u8],
    width: i32,
    height: i32,
    index: u8,
}

impl Plotter for Pen<'_> {
    fn size(&self) -> (i32, i32) {
        (self.width, self.height)
    }

    fn plot(&mut self, x: i32, y: i32) {
        if x >= 0 && y >= 0 && x < self.width && y < self.height {
            self.pixels[(y * self.width + x) as usize] = self.index;
        }
    }
}

impl Backend for IndexedBackend {
    fn name(&self) -> &'static str {
        "indexed"
    }

    fn supports(&self, mode: RenderMode) -> bool {
        mode == RenderMode::Indexed
    }

    fn initialize(&mut self, mode: RenderMode) {
        if !self.supports(mode) {
            log::warn!("indexed backend cannot render in {mode} mode; falling back to indexed");
        }
        self.mode = Some(RenderMode::Indexed);
        self.clear();
        log::debug!("indexed backend ready: {}x{} pixels", self.width, self.height);
    }

    fn fill_rect(&mut self, rect: Rect, color: Color) {
        if color.is_transparent() {
            return;
        }
        if let Some((x0, y0, x1, y1)) = DeviceMap::IDENTITY.rect(rect) {
            raster::fill_rect(&mut self.pen(color), x0, y0, x1, y1);
        }
    }

    fn draw_rect(&mut self, rect: Rect, color: Color) {
        if color.is_transparent() {
            return;
        }
        if let Some((x0, y0, x1, y1)) = DeviceMap::IDENTITY.rect(rect) {
            raster::stroke_rect(&mut self.pen(color), x0, y0, x1, y1);
        }
    }

    fn draw_line(&mut self, start: Vec2, end: Vec2, color: Color) {
        if color.is_transparent() || !start.is_finite() || !end.is_finite() {
            return;
        }
        let map = DeviceMap::IDENTITY;
        raster::segment(&mut self.pen(color), map.point(start), map.point(end));
    }

    fn draw_circle(&mut self, center: Vec2, radius: f32, color: Color, filled: bool) {
        self.draw_ellipse(center, Vec2::new(radius * 2.0, radius * 2.0), color, filled);
    }

    fn draw_ellipse(&mut self, center: Vec2, size: Vec2, color: Color, filled: bool) {
        if color.is_transparent() || !center.is_finite() {
            return;
        }
        let (cx, cy) = DeviceMap::IDENTITY.point(center);
        raster::ellipse(&mut self.pen(color), cx, cy, size.x / 2.0, size.y / 2.0, filled);
    }

    fn draw_polygon(&mut self, points: &[Vec2], color: Color, filled: bool) {
        if color.is_transparent() {
            return;
        }
        let device: Vec<(f32, f32)> = points.iter().map(|&p| DeviceMap::IDENTITY.point(p)).collect();
        raster::polygon(&mut self.pen(color), &device, filled);
    }

    fn draw_text(&mut self, text: &str, bounds: Rect, color: Color, align: TextAlign) {
        if text.is_empty() || color.is_transparent() {
            return;
        }
        let Some((x0, y0, x1, y1)) = DeviceMap::IDENTITY.rect(bounds) else {
            return;
        };
        // The last glyph needs no trailing gap.
        let slots = ((x1 - x0 + 1) / GLYPH_ADVANCE).max(0) as usize;
        let top = y0 + ((y1 - y0 - GLYPH_H) / 2).max(0);

        let mut pen = self.pen(color);
        for (slot, _) in layout_line(text, slots, align) {
            let gx = x0 + slot as i32 * GLYPH_ADVANCE;
            raster::fill_rect(&mut pen, gx, top, gx + GLYPH_W, top + GLYPH_H);
        }
    }
}
