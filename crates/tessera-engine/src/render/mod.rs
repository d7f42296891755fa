//! Rendering subsystem.
//!
//! [`Backend`] is the drawing contract items render through. Concrete renderers live in
//! [`backends`]; the software ones share the integer rasterizer in [`raster`].
//!
//! Convention:
//! - geometry arrives in logical pixels (top-left origin, +Y down)
//! - each backend maps logical pixels onto its own device units

mod backend;
mod mode;

pub mod backends;
pub mod raster;
pub mod text_layout;

pub use backend::Backend;
pub use mode::{ParseRenderModeError, RenderMode, TextAlign};
