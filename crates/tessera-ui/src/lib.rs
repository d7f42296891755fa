//! Tessera UI: drawable items, views and event dispatch on top of `tessera-engine`.
//!
//! # Quick start
//!
//! ```rust,ignore
//! use tessera_ui::prelude::*;
//!
//! let mut pool = ItemPool::new();
//! let ok = pool.insert(Button::new(Rect::new(16.0, 16.0, 96.0, 32.0), "OK"));
//!
//! let config = ViewConfig::from_env()?;
//! let mut view = View::from_config(TextBackend::for_surface(config.width, config.height), &config);
//! view.add_item(ok);
//!
//! let mut dispatcher = Dispatcher::new();
//! dispatcher.register_listener(ok, |event, _ctx| println!("ok got {}", event.kind()));
//!
//! dispatcher.queue_event(Event::pointer_down(Vec2::new(20.0, 20.0), MouseButton::Left));
//! dispatcher.dispatch_events(&mut pool);
//! view.render(&pool);
//! println!("{}", view.backend().render_to_string());
//! ```
//!
//! # Extending with custom items
//!
//! Implement [`Drawable`](item::Drawable) for any type and insert it into an
//! [`ItemPool`](pool::ItemPool):
//!
//! ```rust,ignore
//! use tessera_ui::prelude::*;
//!
//! pub struct Marker { at: Vec2 }
//!
//! impl Drawable for Marker {
//!     fn draw(&self, backend: &mut dyn Backend, state: ItemState) {
//!         let color = if state == ItemState::Pressed { Color::YELLOW } else { Color::GRAY };
//!         backend.draw_line(self.at - Vec2::new(4.0, 0.0), self.at + Vec2::new(4.0, 0.0), color);
//!     }
//!     fn bounds(&self) -> Rect {
//!         Rect::from_center(self.at, Vec2::new(8.0, 1.0))
//!     }
//! }
//! ```

pub mod config;
pub mod dispatch;
pub mod event;
pub mod item;
pub mod items;
pub mod pool;
pub mod view;

pub use config::ViewConfig;
pub use dispatch::Dispatcher;
pub use view::View;

/// Everything needed to build a scene and drive it with input.
pub mod prelude {
    pub use crate::config::{ConfigError, ViewConfig, DEFAULT_HEIGHT, DEFAULT_WIDTH};
    pub use crate::dispatch::{DispatchCtx, Dispatcher, Interest, ListenerId};
    pub use crate::event::{
        Event, EventKind, EventPayload, KeyEvent, PointerEvent, PointerPhase, TouchEvent, TouchPhase,
    };
    pub use crate::item::{Drawable, Item, ItemState};
    pub use crate::items::{Button, Geometry, Label, Panel, Shape, StateColors};
    pub use crate::pool::{ItemId, ItemPool};
    pub use crate::view::{View, ViewError};

    // Engine primitives every item and input source needs.
    pub use tessera_engine::coords::{Edges, Rect, Vec2};
    pub use tessera_engine::input::{DeviceKind, Key, KeyState, Modifiers, MouseButton};
    pub use tessera_engine::paint::Color;
    pub use tessera_engine::render::backends::{
        ConsoleBackend, DisplayListBackend, IndexedBackend, TextBackend,
    };
    pub use tessera_engine::render::{Backend, RenderMode, TextAlign};
    pub use tessera_engine::time::{EventClock, Timestamp};
}
