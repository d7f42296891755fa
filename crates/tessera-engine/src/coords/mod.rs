//! Geometry value types shared by backends and items.
//!
//! Canonical space:
//! - logical pixels
//! - origin top-left
//! - +X right, +Y down
//!
//! Software backends map logical pixels onto their own device grid (pixels or character cells).

mod edges;
mod rect;
mod vec2;

pub use edges::Edges;
pub use rect::Rect;
pub use vec2::Vec2;
