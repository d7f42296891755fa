use std::fmt;

use tessera_engine::coords::Vec2;
use tessera_engine::input::{DeviceKind, Key, KeyState, Modifiers, MouseButton};
use tessera_engine::time::Timestamp;

use crate::pool::ItemId;

// ── Payloads ──────────────────────────────────────────────────────────────

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum PointerPhase {
    Down,
    Up,
    Move,
}

/// Mouse button or pointer motion at `position`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct PointerEvent {
    pub phase: PointerPhase,
    pub position: Vec2,
    pub button: MouseButton,
    pub modifiers: Modifiers,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct KeyEvent {
    pub key: Key,
    pub state: KeyState,
    pub modifiers: Modifiers,
    /// `true` when generated by key auto-repeat.
    pub repeat: bool,
}

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum TouchPhase {
    Start,
    Move,
    End,
}

/// One contact point on a touch surface. `id` is stable for the contact's lifetime.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct TouchEvent {
    pub phase: TouchPhase,
    pub id: u64,
    pub position: Vec2,
}

/// What happened. The event's kind is always derived from this.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum EventPayload {
    Pointer(PointerEvent),
    Key(KeyEvent),
    Touch(TouchEvent),
}

impl EventPayload {
    /// Device class that usually produces this payload.
    pub fn default_device(&self) -> DeviceKind {
        match self {
            EventPayload::Pointer(_) => DeviceKind::Mouse,
            EventPayload::Key(_) => DeviceKind::Keyboard,
            EventPayload::Touch(_) => DeviceKind::Touchpad,
        }
    }
}

// ── EventKind ─────────────────────────────────────────────────────────────

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum EventKind {
    PointerDown,
    PointerUp,
    PointerMove,
    KeyDown,
    KeyUp,
    TouchStart,
    TouchMove,
    TouchEnd,
}

impl EventKind {
    pub fn is_pointer(self) -> bool {
        matches!(self, EventKind::PointerDown | EventKind::PointerUp | EventKind::PointerMove)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            EventKind::PointerDown => "pointer-down",
            EventKind::PointerUp => "pointer-up",
            EventKind::PointerMove => "pointer-move",
            EventKind::KeyDown => "key-down",
            EventKind::KeyUp => "key-up",
            EventKind::TouchStart => "touch-start",
            EventKind::TouchMove => "touch-move",
            EventKind::TouchEnd => "touch-end",
        }
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── Event ─────────────────────────────────────────────────────────────────

/// An input record routed by the dispatcher.
///
/// Built with one of the constructors and refined with the `with_*` builders:
///
/// ```rust,ignore
/// let ev = Event::pointer_down(Vec2::new(12.0, 8.0), MouseButton::Left)
///     .with_timestamp(clock.now())
///     .with_target(ok_button);
/// assert_eq!(ev.kind(), EventKind::PointerDown);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Event {
    pub timestamp: Timestamp,
    pub device: DeviceKind,
    /// Logical target, consulted by targeted listeners only.
    pub target: Option<ItemId>,
    pub payload: EventPayload,
}

impl Event {
    /// Wraps `payload` with a zero timestamp, no target and the payload's usual device.
    pub fn new(payload: EventPayload) -> Self {
        Self { timestamp: Timestamp::ZERO, device: payload.default_device(), target: None, payload }
    }

    pub fn pointer_down(position: Vec2, button: MouseButton) -> Self {
        Self::pointer(PointerPhase::Down, position, button)
    }

    pub fn pointer_up(position: Vec2, button: MouseButton) -> Self {
        Self::pointer(PointerPhase::Up, position, button)
    }

    pub fn pointer_move(position: Vec2) -> Self {
        Self::pointer(PointerPhase::Move, position, MouseButton::Left)
    }

    fn pointer(phase: PointerPhase, position: Vec2, button: MouseButton) -> Self {
        Self::new(EventPayload::Pointer(PointerEvent {
            phase,
            position,
            button,
            modifiers: Modifiers::NONE,
        }))
    }

    pub fn key_down(key: Key) -> Self {
        Self::key(key, KeyState::Pressed)
    }

    pub fn key_up(key: Key) -> Self {
        Self::key(key, KeyState::Released)
    }

    fn key(key: Key, state: KeyState) -> Self {
        Self::new(EventPayload::Key(KeyEvent { key, state, modifiers: Modifiers::NONE, repeat: false }))
    }

    pub fn touch(phase: TouchPhase, id: u64, position: Vec2) -> Self {
        Self::new(EventPayload::Touch(TouchEvent { phase, id, position }))
    }

    pub fn with_timestamp(mut self, timestamp: Timestamp) -> Self {
        self.timestamp = timestamp;
        self
    }

    /// Sets modifiers on pointer and key payloads. Touch payloads carry none.
    pub fn with_modifiers(mut self, modifiers: Modifiers) -> Self {
        match &mut self.payload {
            EventPayload::Pointer(p) => p.modifiers = modifiers,
            EventPayload::Key(k) => k.modifiers = modifiers,
            EventPayload::Touch(_) => {}
        }
        self
    }

    pub fn with_target(mut self, target: ItemId) -> Self {
        self.target = Some(target);
        self
    }

    pub fn with_device(mut self, device: DeviceKind) -> Self {
        self.device = device;
        self
    }

    /// Marks a key event as auto-repeated. No effect on other payloads.
    pub fn with_repeat(mut self, repeat: bool) -> Self {
        if let EventPayload::Key(k) = &mut self.payload {
            k.repeat = repeat;
        }
        self
    }

    pub fn kind(&self) -> EventKind {
        match self.payload {
            EventPayload::Pointer(p) => match p.phase {
                PointerPhase::Down => EventKind::PointerDown,
                PointerPhase::Up => EventKind::PointerUp,
                PointerPhase::Move => EventKind::PointerMove,
            },
            EventPayload::Key(k) => match k.state {
                KeyState::Pressed => EventKind::KeyDown,
                KeyState::Released => EventKind::KeyUp,
            },
            EventPayload::Touch(t) => match t.phase {
                TouchPhase::Start => EventKind::TouchStart,
                TouchPhase::Move => EventKind::TouchMove,
                TouchPhase::End => EventKind::TouchEnd,
            },
        }
    }

    pub fn as_pointer(&self) -> Option<&PointerEvent> {
        match &self.payload {
            EventPayload::Pointer(p) => Some(p),
            _ => None,
        }
    }

    pub fn as_key(&self) -> Option<&KeyEvent> {
        match &self.payload {
            EventPayload::Key(k) => Some(k),
            _ => None,
        }
    }

    pub fn as_touch(&self) -> Option<&TouchEvent> {
        match &self.payload {
            EventPayload::Touch(t) => Some(t),
            _ => None,
        }
    }

    /// Screen position for pointer and touch events.
    pub fn position(&self) -> Option<Vec2> {
        match self.payload {
            EventPayload::Pointer(p) => Some(p.position),
            EventPayload::Touch(t) => Some(t.position),
            EventPayload::Key(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_follows_payload() {
        let at = Vec2::new(1.0, 2.0);
        assert_eq!(Event::pointer_down(at, MouseButton::Left).kind(), EventKind::PointerDown);
        assert_eq!(Event::pointer_up(at, MouseButton::Right).kind(), EventKind::PointerUp);
        assert_eq!(Event::pointer_move(at).kind(), EventKind::PointerMove);
        assert_eq!(Event::key_down(Key::Enter).kind(), EventKind::KeyDown);
        assert_eq!(Event::key_up(Key::Char('a')).kind(), EventKind::KeyUp);
        assert_eq!(Event::touch(TouchPhase::Start, 1, at).kind(), EventKind::TouchStart);
        assert_eq!(Event::touch(TouchPhase::Move, 1, at).kind(), EventKind::TouchMove);
        assert_eq!(Event::touch(TouchPhase::End, 1, at).kind(), EventKind::TouchEnd);
    }

    #[test]
    fn default_device_and_timestamp() {
        let ev = Event::key_down(Key::Tab);
        assert_eq!(ev.device, DeviceKind::Keyboard);
        assert_eq!(ev.timestamp, Timestamp::ZERO);
        assert_eq!(ev.target, None);

        assert_eq!(Event::pointer_move(Vec2::zero()).device, DeviceKind::Mouse);
        assert_eq!(Event::touch(TouchPhase::End, 0, Vec2::zero()).device, DeviceKind::Touchpad);
    }

    #[test]
    fn builders_refine_the_record() {
        let ev = Event::pointer_down(Vec2::new(5.0, 5.0), MouseButton::from_index(0))
            .with_timestamp(Timestamp::from_micros(1_500))
            .with_modifiers(Modifiers::SHIFT)
            .with_device(DeviceKind::Touchpad);

        assert_eq!(ev.timestamp.as_micros(), 1_500);
        assert_eq!(ev.device, DeviceKind::Touchpad);
        let p = ev.as_pointer().expect("pointer payload");
        assert_eq!(p.button, MouseButton::Left);
        assert!(p.modifiers.shift);
        assert_eq!(ev.position(), Some(Vec2::new(5.0, 5.0)));
    }

    #[test]
    fn modifiers_and_repeat_ignore_unrelated_payloads() {
        let touch = Event::touch(TouchPhase::Start, 7, Vec2::zero()).with_modifiers(Modifiers::CTRL);
        assert_eq!(touch.as_touch().map(|t| t.id), Some(7));

        let key = Event::key_down(Key::Char('x')).with_modifiers(Modifiers::CTRL).with_repeat(true);
        let k = key.as_key().expect("key payload");
        assert!(k.modifiers.ctrl);
        assert!(k.repeat);
        assert_eq!(key.position(), None);
        assert!(key.as_pointer().is_none());
    }

    #[test]
    fn touch_is_not_pointer_class() {
        assert!(EventKind::PointerMove.is_pointer());
        assert!(!EventKind::TouchStart.is_pointer());
        assert_eq!(EventKind::PointerDown.to_string(), "pointer-down");
    }
}
