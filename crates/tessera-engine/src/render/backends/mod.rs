//! Concrete backends.
//!
//! - [`ConsoleBackend`]: one descriptive line per call (text / indexed)
//! - [`TextBackend`]: character-cell grid (text)
//! - [`IndexedBackend`]: 16-color pixel framebuffer (indexed)
//! - [`DisplayListBackend`]: recorded draw stream for a GPU consumer (accelerated)

mod console;
mod display_list;
mod indexed;
mod text;

pub use console::ConsoleBackend;
pub use display_list::DisplayListBackend;
pub use indexed::{IndexedBackend, Rgba8};
pub use text::{Cell, TextBackend, DEFAULT_CELL_SIZE, FILL_GLYPH, LINE_GLYPH};
