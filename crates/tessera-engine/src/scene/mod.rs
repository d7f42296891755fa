//! Scene (draw stream) types.
//!
//! Responsibilities:
//! - store renderer-agnostic draw commands in submission order
//! - group commands into same-kind batches for consumers that switch pipelines per kind
//! - keep shape payloads isolated per shape file under `scene::shapes`

mod cmd;
mod list;

pub mod shapes;

pub use cmd::{CmdKind, DrawCmd};
pub use list::{Batches, DrawList};
pub use shapes::circle::CircleCmd;
pub use shapes::ellipse::EllipseCmd;
pub use shapes::line::LineCmd;
pub use shapes::polygon::PolygonCmd;
pub use shapes::rect::RectCmd;
pub use shapes::text::TextCmd;
