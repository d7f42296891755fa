//! Tessera engine crate.
//!
//! Renderer-facing half of the toolkit: geometry and color value types, input vocabulary,
//! event timestamps, the recorded draw stream, and the [`render::Backend`] contract with
//! its concrete backends. UI policy (items, views, dispatch) lives in `tessera-ui`.

pub mod coords;
pub mod input;
pub mod logging;
pub mod paint;
pub mod render;
pub mod scene;
pub mod time;
