//! Built-in item kinds.
//!
//! Each implements [`Drawable`](crate::item::Drawable) and picks its colors from the
//! item's current state through [`StateColors`].

pub mod button;
pub mod label;
pub mod panel;
pub mod shape;
pub mod state_colors;

pub use button::Button;
pub use label::Label;
pub use panel::Panel;
pub use shape::{Geometry, Shape};
pub use state_colors::StateColors;
