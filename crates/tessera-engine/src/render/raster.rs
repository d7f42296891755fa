//! Integer rasterization shared by the software backends.
//!
//! All routines work in device units (pixels or character cells) and hand every covered
//! unit to a [`Plotter`]. Loops are clipped to the plotter's size, so callers may pass
//! shapes that are partly or wholly off-surface. Geometry stays in floating point until
//! it has been clipped, so far-away points keep their true position.

use crate::coords::{Rect, Vec2};

/// Rect corners are clamped to this magnitude before conversion to integer units.
const DEVICE_LIMIT: f32 = 32_767.0;

/// Receives covered device units.
pub trait Plotter {
    /// Surface size in device units as `(width, height)`.
    fn size(&self) -> (i32, i32);

    /// Marks one unit. Out-of-bounds coordinates must be ignored.
    fn plot(&mut self, x: i32, y: i32);

    /// Marks the inclusive run `x0..=x1` on row `y`.
    fn span(&mut self, x0: i32, x1: i32, y: i32) {
        let (w, h) = self.size();
        if y < 0 || y >= h {
            return;
        }
        for x in x0.max(0)..=x1.min(w - 1) {
            self.plot(x, y);
        }
    }
}

/// Maps logical pixels onto device units of `unit` logical pixels each.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct DeviceMap {
    pub unit: Vec2,
}

impl DeviceMap {
    /// One logical pixel per device unit.
    pub const IDENTITY: DeviceMap = DeviceMap { unit: Vec2::new(1.0, 1.0) };

    #[inline]
    pub const fn new(unit: Vec2) -> Self {
        Self { unit }
    }

    /// Continuous device position of `p`. Not clamped.
    #[inline]
    pub fn point(self, p: Vec2) -> (f32, f32) {
        (p.x / self.unit.x, p.y / self.unit.y)
    }

    /// Half-open device range `[x0, x1) × [y0, y1)` touched by `r`, or `None` for empty input.
    ///
    /// An axis-aligned range survives clamping unchanged on-surface, so its corners are
    /// clamped here.
    pub fn rect(self, r: Rect) -> Option<(i32, i32, i32, i32)> {
        if r.is_empty() || !r.is_finite() {
            return None;
        }
        let clamp = |(x, y): (f32, f32)| {
            (x.clamp(-DEVICE_LIMIT, DEVICE_LIMIT), y.clamp(-DEVICE_LIMIT, DEVICE_LIMIT))
        };
        let (x0, y0) = clamp(self.point(r.min()));
        let (x1, y1) = clamp(self.point(r.max()));
        Some((x0.floor() as i32, y0.floor() as i32, x1.ceil() as i32, y1.ceil() as i32))
    }
}

/// Bresenham line including both endpoints.
pub fn line<P: Plotter + ?Sized>(p: &mut P, x0: i32, y0: i32, x1: i32, y1: i32) {
    let dx = (x1 - x0).abs();
    let dy = -(y1 - y0).abs();
    let sx = if x0 < x1 { 1 } else { -1 };
    let sy = if y0 < y1 { 1 } else { -1 };
    let mut err = dx + dy;
    let (mut x, mut y) = (x0, y0);

    loop {
        p.plot(x, y);
        if x == x1 && y == y1 {
            break;
        }
        let e2 = 2 * err;
        if e2 >= dy {
            err += dy;
            x += sx;
        }
        if e2 <= dx {
            err += dx;
            y += sy;
        }
    }
}

/// Line between two continuous device positions, clipped to the plotter before it is
/// stepped. Non-finite endpoints draw nothing.
pub fn segment<P: Plotter + ?Sized>(p: &mut P, a: (f32, f32), b: (f32, f32)) {
    if !(a.0.is_finite() && a.1.is_finite() && b.0.is_finite() && b.1.is_finite()) {
        return;
    }
    let (w, h) = p.size();
    // One unit of margin so clipped ends still floor onto the edge units.
    let window = (-1.0, -1.0, w as f64 + 1.0, h as f64 + 1.0);
    if let Some(((x0, y0), (x1, y1))) = clip_segment(a, b, window) {
        line(p, x0.floor() as i32, y0.floor() as i32, x1.floor() as i32, y1.floor() as i32);
    }
}

/// Liang–Barsky clip of `a → b` against `(xmin, ymin, xmax, ymax)`.
fn clip_segment(
    a: (f32, f32),
    b: (f32, f32),
    (xmin, ymin, xmax, ymax): (f64, f64, f64, f64),
) -> Option<((f64, f64), (f64, f64))> {
    let (x0, y0) = (a.0 as f64, a.1 as f64);
    let (dx, dy) = (b.0 as f64 - x0, b.1 as f64 - y0);
    let (mut t0, mut t1) = (0.0_f64, 1.0_f64);

    for (p, q) in [(-dx, x0 - xmin), (dx, xmax - x0), (-dy, y0 - ymin), (dy, ymax - y0)] {
        if p == 0.0 {
            if q < 0.0 {
                return None;
            }
            continue;
        }
        let r = q / p;
        if p < 0.0 {
            if r > t1 {
                return None;
            }
            t0 = t0.max(r);
        } else {
            if r < t0 {
                return None;
            }
            t1 = t1.min(r);
        }
    }

    Some(((x0 + t0 * dx, y0 + t0 * dy), (x0 + t1 * dx, y0 + t1 * dy)))
}

/// Fills the half-open range `[x0, x1) × [y0, y1)`.
pub fn fill_rect<P: Plotter + ?Sized>(p: &mut P, x0: i32, y0: i32, x1: i32, y1: i32) {
    if x1 <= x0 {
        return;
    }
    let (_, h) = p.size();
    for y in y0.max(0)..y1.min(h) {
        p.span(x0, x1 - 1, y);
    }
}

/// Outlines the half-open range `[x0, x1) × [y0, y1)` with one-unit edges.
pub fn stroke_rect<P: Plotter + ?Sized>(p: &mut P, x0: i32, y0: i32, x1: i32, y1: i32) {
    if x1 <= x0 || y1 <= y0 {
        return;
    }
    let (right, bottom) = (x1 - 1, y1 - 1);
    p.span(x0, right, y0);
    p.span(x0, right, bottom);
    let (_, h) = p.size();
    for y in y0.max(0)..=bottom.min(h - 1) {
        p.plot(x0, y);
        p.plot(right, y);
    }
}

/// Axis-aligned ellipse centred on `(cx, cy)` with radii `rx`, `ry`, sampled at unit centres.
///
/// Ellipses too small to cover any unit centre still mark the unit under their centre.
/// Non-positive or non-finite radii draw nothing.
pub fn ellipse<P: Plotter + ?Sized>(p: &mut P, cx: f32, cy: f32, rx: f32, ry: f32, filled: bool) {
    if !(rx > 0.0 && ry > 0.0 && rx.is_finite() && ry.is_finite() && cx.is_finite() && cy.is_finite()) {
        return;
    }
    let (w, h) = p.size();
    let mut covered = false;

    let row0 = ((cy - ry).floor() as i32).max(0);
    let row1 = ((cy + ry).ceil() as i32).min(h - 1);
    for y in row0..=row1 {
        let t = (y as f32 + 0.5 - cy) / ry;
        if t.abs() > 1.0 {
            continue;
        }
        let half = rx * (1.0 - t * t).sqrt();
        let xa = (cx - half - 0.5).ceil() as i32;
        let xb = (cx + half - 0.5).floor() as i32;
        if xa > xb {
            continue;
        }
        covered = true;
        if filled {
            p.span(xa, xb, y);
        } else {
            p.plot(xa, y);
            p.plot(xb, y);
        }
    }

    // Columns close the gaps a row-only outline leaves near the top and bottom.
    if !filled {
        let col0 = ((cx - rx).floor() as i32).max(0);
        let col1 = ((cx + rx).ceil() as i32).min(w - 1);
        for x in col0..=col1 {
            let t = (x as f32 + 0.5 - cx) / rx;
            if t.abs() > 1.0 {
                continue;
            }
            let half = ry * (1.0 - t * t).sqrt();
            let ya = (cy - half - 0.5).ceil() as i32;
            let yb = (cy + half - 0.5).floor() as i32;
            if ya > yb {
                continue;
            }
            covered = true;
            p.plot(x, ya);
            p.plot(x, yb);
        }
    }

    if !covered {
        p.plot(cx.floor() as i32, cy.floor() as i32);
    }
}

/// Closed polygon through `points` (device coordinates).
///
/// Filling uses the even-odd rule on unit centres. Fewer than three points fall back to
/// an outline; fewer than two draw nothing.
pub fn polygon<P: Plotter + ?Sized>(p: &mut P, points: &[(f32, f32)], filled: bool) {
    if points.len() < 2 || points.iter().any(|(x, y)| !x.is_finite() || !y.is_finite()) {
        return;
    }

    if !filled || points.len() < 3 {
        for (i, &a) in points.iter().enumerate() {
            segment(p, a, points[(i + 1) % points.len()]);
        }
        return;
    }

    let min_y = points.iter().map(|pt| pt.1).fold(f32::INFINITY, f32::min);
    let max_y = points.iter().map(|pt| pt.1).fold(f32::NEG_INFINITY, f32::max);
    let (_, h) = p.size();

    let mut crossings = Vec::with_capacity(points.len());
    for y in (min_y.floor() as i32).max(0)..(max_y.ceil() as i32).min(h) {
        let sy = y as f32 + 0.5;

        crossings.clear();
        for (i, &(x1, y1)) in points.iter().enumerate() {
            let (x2, y2) = points[(i + 1) % points.len()];
            if (y1 <= sy && sy < y2) || (y2 <= sy && sy < y1) {
                let (x1, y1, x2, y2) = (x1 as f64, y1 as f64, x2 as f64, y2 as f64);
                crossings.push(x1 + (sy as f64 - y1) * (x2 - x1) / (y2 - y1));
            }
        }
        crossings.sort_by(|a, b| a.total_cmp(b));

        for pair in crossings.chunks_exact(2) {
            let xa = (pair[0] - 0.5).ceil() as i32;
            let xb = (pair[1] - 0.5).floor() as i32;
            if xa <= xb {
                p.span(xa, xb, y);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Boolean grid that records every plotted unit.
    struct Grid {
        w: i32,
        h: i32,
        on: Vec<bool>,
    }

    impl Grid {
        fn new(w: i32, h: i32) -> Self {
            Self { w, h, on: vec![false; (w * h) as usize] }
        }

        fn get(&self, x: i32, y: i32) -> bool {
            self.on[(y * self.w + x) as usize]
        }

        fn count(&self) -> usize {
            self.on.iter().filter(|&&b| b).count()
        }
    }

    impl Plotter for Grid {
        fn size(&self) -> (i32, i32) {
            (self.w, self.h)
        }

        fn plot(&mut self, x: i32, y: i32) {
            if x >= 0 && y >= 0 && x < self.w && y < self.h {
                self.on[(y * self.w + x) as usize] = true;
            }
        }
    }

    // ── device map ────────────────────────────────────────────────────────

    #[test]
    fn device_map_rect_covers_partial_cells() {
        let map = DeviceMap::new(Vec2::new(8.0, 16.0));
        assert_eq!(map.rect(Rect::new(3.0, 0.0, 2.0, 16.0)), Some((0, 0, 1, 1)));
        assert_eq!(map.rect(Rect::new(0.0, 0.0, 80.0, 32.0)), Some((0, 0, 10, 2)));
        assert_eq!(map.rect(Rect::new(0.0, 0.0, 0.0, 32.0)), None);
    }

    // ── lines ─────────────────────────────────────────────────────────────

    #[test]
    fn line_includes_both_endpoints() {
        let mut g = Grid::new(10, 10);
        line(&mut g, 1, 1, 7, 4);
        assert!(g.get(1, 1));
        assert!(g.get(7, 4));
        assert_eq!(g.count(), 7);
    }

    #[test]
    fn line_single_point() {
        let mut g = Grid::new(4, 4);
        line(&mut g, 2, 2, 2, 2);
        assert_eq!(g.count(), 1);
    }

    #[test]
    fn segment_keeps_slope_of_far_endpoint() {
        let mut g = Grid::new(100, 100);
        segment(&mut g, (0.0, 0.0), (1.0e6, 1.0e5));
        assert!(g.get(0, 0));
        assert!(g.get(50, 5));
        assert!(!g.get(50, 50));
        assert!(g.get(99, 9) || g.get(99, 10));
    }

    #[test]
    fn segment_wholly_off_surface_draws_nothing() {
        let mut g = Grid::new(10, 10);
        segment(&mut g, (-50.0, 20.0), (50.0, 30.0));
        segment(&mut g, (f32::NAN, 0.0), (5.0, 5.0));
        assert_eq!(g.count(), 0);
    }

    #[test]
    fn segment_crossing_surface_matches_on_surface_line() {
        let mut a = Grid::new(10, 10);
        segment(&mut a, (-100.0, 4.5), (100.0, 4.5));
        let mut b = Grid::new(10, 10);
        line(&mut b, 0, 4, 9, 4);
        assert_eq!(a.on, b.on);
    }

    // ── rects ─────────────────────────────────────────────────────────────

    #[test]
    fn fill_rect_is_half_open_and_clipped() {
        let mut g = Grid::new(5, 5);
        fill_rect(&mut g, -2, 3, 2, 9);
        assert_eq!(g.count(), 4);
        assert!(g.get(0, 3) && g.get(1, 4));
    }

    #[test]
    fn stroke_rect_leaves_interior_empty() {
        let mut g = Grid::new(6, 6);
        stroke_rect(&mut g, 0, 0, 4, 4);
        assert_eq!(g.count(), 12);
        assert!(!g.get(1, 1));
        assert!(g.get(3, 3));
    }

    // ── ellipses ──────────────────────────────────────────────────────────

    #[test]
    fn filled_circle_is_symmetric() {
        let mut g = Grid::new(20, 20);
        ellipse(&mut g, 10.0, 10.0, 4.0, 4.0, true);
        for y in 0..20 {
            for x in 0..20 {
                assert_eq!(g.get(x, y), g.get(19 - x, y), "mirror x at {x},{y}");
                assert_eq!(g.get(x, y), g.get(x, 19 - y), "mirror y at {x},{y}");
            }
        }
        assert!(g.get(10, 10));
        assert!(!g.get(10, 15));
    }

    #[test]
    fn outline_circle_has_hollow_centre() {
        let mut g = Grid::new(20, 20);
        ellipse(&mut g, 10.0, 10.0, 5.0, 5.0, false);
        assert!(!g.get(10, 10));
        assert!(g.count() > 0);
    }

    #[test]
    fn zero_radius_draws_nothing() {
        let mut g = Grid::new(8, 8);
        ellipse(&mut g, 4.0, 4.0, 0.0, 3.0, true);
        ellipse(&mut g, 4.0, 4.0, f32::NAN, 3.0, false);
        assert_eq!(g.count(), 0);
    }

    #[test]
    fn far_centre_keeps_its_position() {
        let mut g = Grid::new(100, 100);
        ellipse(&mut g, 100_000.0, 50.0, 99_990.0, 99_990.0, true);
        assert!(!g.get(2, 50));
        assert!(!g.get(9, 50));
        assert!(g.get(10, 50));
        assert!(g.get(99, 50));
    }

    #[test]
    fn tiny_ellipse_marks_centre_unit() {
        let mut g = Grid::new(8, 8);
        ellipse(&mut g, 4.2, 4.2, 0.1, 0.1, true);
        assert_eq!(g.count(), 1);
        assert!(g.get(4, 4));
    }

    // ── polygons ──────────────────────────────────────────────────────────

    #[test]
    fn filled_square_polygon_matches_fill_rect() {
        let mut a = Grid::new(10, 10);
        polygon(&mut a, &[(2.0, 2.0), (6.0, 2.0), (6.0, 6.0), (2.0, 6.0)], true);
        let mut b = Grid::new(10, 10);
        fill_rect(&mut b, 2, 2, 6, 6);
        assert_eq!(a.on, b.on);
    }

    #[test]
    fn far_vertex_keeps_edge_slope() {
        // Region above the edge y = x / 10.
        let mut g = Grid::new(100, 100);
        polygon(&mut g, &[(0.0, 0.0), (1.0e6, 1.0e5), (0.0, 1.0e5)], true);
        assert!(g.get(50, 20));
        assert!(g.get(20, 2));
        assert!(!g.get(50, 2));
    }

    #[test]
    fn degenerate_polygons() {
        let mut g = Grid::new(10, 10);
        polygon(&mut g, &[(1.0, 1.0)], true);
        assert_eq!(g.count(), 0);

        polygon(&mut g, &[(1.0, 1.0), (5.0, 1.0)], true);
        assert_eq!(g.count(), 5);
    }
}
