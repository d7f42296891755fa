//! Color model shared between items and backends.
//!
//! Scope:
//! - straight-alpha 8-bit color (`Color`)
//! - the fixed 16-entry palette used by the indexed and text backends

pub mod color;
pub mod palette;

pub use color::Color;
pub use palette::{nearest_index, PALETTE, PALETTE_LEN};
