//! Time subsystem.
//!
//! Supplies event timestamps to input producers without coupling them to a runtime.
//! Intended usage:
//! - one `EventClock` per input source
//! - stamp each event with `clock.now()` as it is built

mod event_clock;

pub use event_clock::{EventClock, Timestamp};
