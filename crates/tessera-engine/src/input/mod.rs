//! Input vocabulary.
//!
//! Device-level types only (keys, buttons, modifiers, device classes). The event records
//! built from them, and the dispatcher that routes them, live in `tessera-ui`.

mod types;

pub use types::{DeviceKind, Key, KeyState, Modifiers, MouseButton};
