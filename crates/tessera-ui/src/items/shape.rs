use tessera_engine::coords::{Rect, Vec2};
use tessera_engine::render::Backend;

use crate::item::{Drawable, ItemState};
use crate::items::StateColors;

/// Geometry a [`Shape`] draws.
#[derive(Debug, Clone, PartialEq)]
pub enum Geometry {
    Line { start: Vec2, end: Vec2 },
    Circle { center: Vec2, radius: f32 },
    /// `size` is the full width and height of the bounding box.
    Ellipse { center: Vec2, size: Vec2 },
    Polygon(Vec<Vec2>),
}

impl Geometry {
    /// Axis-aligned box around the geometry. Empty for degenerate input.
    pub fn bounds(&self) -> Rect {
        match self {
            Geometry::Line { start, end } => span(&[*start, *end]),
            Geometry::Circle { center, radius } => {
                let d = radius.max(0.0) * 2.0;
                Rect::from_center(*center, Vec2::new(d, d))
            }
            Geometry::Ellipse { center, size } => {
                Rect::from_center(*center, Vec2::new(size.x.max(0.0), size.y.max(0.0)))
            }
            Geometry::Polygon(points) => span(points),
        }
    }
}

fn span(points: &[Vec2]) -> Rect {
    let mut it = points.iter().copied().filter(|p| p.is_finite());
    let Some(first) = it.next() else {
        return Rect::default();
    };
    let (min, max) = it.fold((first, first), |(lo, hi), p| {
        (Vec2::new(lo.x.min(p.x), lo.y.min(p.y)), Vec2::new(hi.x.max(p.x), hi.y.max(p.y)))
    });
    Rect::from_origin_size(min, max - min)
}

/// A line, circle, ellipse or polygon.
///
/// Lines ignore the fill flag.
#[derive(Debug, Clone)]
pub struct Shape {
    geometry: Geometry,
    colors: StateColors,
    filled: bool,
}

impl Shape {
    pub fn new(geometry: Geometry, colors: impl Into<StateColors>) -> Self {
        Self { geometry, colors: colors.into(), filled: false }
    }

    pub fn line(start: Vec2, end: Vec2, colors: impl Into<StateColors>) -> Self {
        Self::new(Geometry::Line { start, end }, colors)
    }

    pub fn circle(center: Vec2, radius: f32, colors: impl Into<StateColors>) -> Self {
        Self::new(Geometry::Circle { center, radius }, colors)
    }

    pub fn ellipse(center: Vec2, size: Vec2, colors: impl Into<StateColors>) -> Self {
        Self::new(Geometry::Ellipse { center, size }, colors)
    }

    pub fn polygon(points: impl Into<Vec<Vec2>>, colors: impl Into<StateColors>) -> Self {
        Self::new(Geometry::Polygon(points.into()), colors)
    }

    pub fn filled(mut self, filled: bool) -> Self {
        self.filled = filled;
        self
    }

    pub fn geometry(&self) -> &Geometry {
        &self.geometry
    }
}

impl Drawable for Shape {
    fn draw(&self, backend: &mut dyn Backend, state: ItemState) {
        let color = self.colors.get(state);
        match &self.geometry {
            Geometry::Line { start, end } => backend.draw_line(*start, *end, color),
            Geometry::Circle { center, radius } => {
                backend.draw_circle(*center, *radius, color, self.filled)
            }
            Geometry::Ellipse { center, size } => {
                backend.draw_ellipse(*center, *size, color, self.filled)
            }
            Geometry::Polygon(points) => backend.draw_polygon(points, color, self.filled),
        }
    }

    fn bounds(&self) -> Rect {
        self.geometry.bounds()
    }
}
