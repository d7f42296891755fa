//! Event queue and listener fan-out.
//!
//! Events are queued FIFO and delivered on [`Dispatcher::dispatch_events`]. Each event is
//! offered to every interested listener in registration order before the next event is
//! taken. After a listener's callback returns, its item receives the fixed pointer policy:
//!
//! - pointer down → [`ItemState::Pressed`]
//! - pointer up → [`ItemState::Normal`]
//! - anything else leaves the state alone
//!
//! There is no hit-testing. A broadcast listener's item is pressed by every pointer-down,
//! wherever it lands. Use [`Interest::Targeted`] to receive only events aimed at the item.

use std::collections::VecDeque;
use std::fmt;

use crate::event::{Event, EventPayload, PointerPhase};
use crate::item::ItemState;
use crate::pool::{ItemId, ItemPool};

/// Handle returned by registration, used to unregister.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct ListenerId(u64);

impl fmt::Display for ListenerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "listener#{}", self.0)
    }
}

/// Which events a listener receives.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub enum Interest {
    /// Every dispatched event.
    #[default]
    Broadcast,
    /// Only events whose `target` is the listener's item.
    Targeted,
}

type Callback = Box<dyn FnMut(&Event, &mut DispatchCtx<'_>)>;

struct Listener {
    id: ListenerId,
    item: ItemId,
    interest: Interest,
    callback: Callback,
}

impl Listener {
    fn wants(&self, event: &Event) -> bool {
        match self.interest {
            Interest::Broadcast => true,
            Interest::Targeted => event.target == Some(self.item),
        }
    }
}

// ── DispatchCtx ───────────────────────────────────────────────────────────

/// What a callback may touch while an event is being delivered.
pub struct DispatchCtx<'a> {
    queue: &'a mut VecDeque<Event>,
    items: &'a mut ItemPool,
    listener: ListenerId,
    target: ItemId,
}

impl DispatchCtx<'_> {
    /// Appends an event to the tail. It is delivered later in the same drain.
    pub fn queue_event(&mut self, event: Event) {
        self.queue.push_back(event);
    }

    /// The registration being called.
    #[inline]
    pub fn listener(&self) -> ListenerId {
        self.listener
    }

    /// The item this listener was registered for.
    #[inline]
    pub fn target(&self) -> ItemId {
        self.target
    }

    pub fn items(&mut self) -> &mut ItemPool {
        self.items
    }
}

// ── Dispatcher ────────────────────────────────────────────────────────────

#[derive(Default)]
pub struct Dispatcher {
    queue: VecDeque<Event>,
    listeners: Vec<Listener>,
    next_id: u64,
}

impl Dispatcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Takes ownership of `event` and appends it to the queue.
    pub fn queue_event(&mut self, event: Event) {
        log::trace!("queued {} (pending {})", event.kind(), self.queue.len() + 1);
        self.queue.push_back(event);
    }

    /// Registers a broadcast listener for `item`. The same item may be registered any
    /// number of times; each registration is called separately.
    pub fn register_listener<F>(&mut self, item: ItemId, callback: F) -> ListenerId
    where
        F: FnMut(&Event, &mut DispatchCtx<'_>) + 'static,
    {
        self.register_listener_with(item, Interest::Broadcast, callback)
    }

    pub fn register_listener_with<F>(&mut self, item: ItemId, interest: Interest, callback: F) -> ListenerId
    where
        F: FnMut(&Event, &mut DispatchCtx<'_>) + 'static,
    {
        let id = ListenerId(self.next_id);
        self.next_id += 1;
        log::debug!("registered {id} on {item} ({interest:?})");
        self.listeners.push(Listener { id, item, interest, callback: Box::new(callback) });
        id
    }

    /// Returns `false` if `id` was never registered or is already gone.
    pub fn unregister_listener(&mut self, id: ListenerId) -> bool {
        match self.listeners.iter().position(|l| l.id == id) {
            Some(index) => {
                self.listeners.remove(index);
                log::debug!("unregistered {id}");
                true
            }
            None => false,
        }
    }

    /// Drains the queue, including events queued by callbacks during the drain.
    ///
    /// Returns the number of events dispatched.
    pub fn dispatch_events(&mut self, items: &mut ItemPool) -> usize {
        self.prune(items);

        let mut dispatched = 0;
        while let Some(event) = self.queue.pop_front() {
            log::trace!("dispatching {} to {} listeners", event.kind(), self.listeners.len());

            for listener in &mut self.listeners {
                if !listener.wants(&event) {
                    continue;
                }
                // Removed by an earlier callback in this drain.
                if !items.contains(listener.item) {
                    continue;
                }

                let mut ctx = DispatchCtx {
                    queue: &mut self.queue,
                    items: &mut *items,
                    listener: listener.id,
                    target: listener.item,
                };
                (listener.callback)(&event, &mut ctx);

                if let Some(state) = pointer_transition(&event) {
                    items.set_state(listener.item, state);
                }
            }
            dispatched += 1;
        }

        if dispatched > 0 {
            log::debug!("dispatched {dispatched} events");
        }
        dispatched
    }

    /// Drops listeners whose item no longer exists. Returns how many were dropped.
    pub fn prune(&mut self, items: &ItemPool) -> usize {
        let before = self.listeners.len();
        self.listeners.retain(|l| items.contains(l.item));
        let pruned = before - self.listeners.len();
        if pruned > 0 {
            log::debug!("pruned {pruned} stale listeners");
        }
        pruned
    }

    /// Discards queued events without delivering them.
    pub fn clear_queue(&mut self) {
        self.queue.clear();
    }

    #[inline]
    pub fn pending(&self) -> usize {
        self.queue.len()
    }

    #[inline]
    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    #[inline]
    pub fn is_idle(&self) -> bool {
        self.queue.is_empty()
    }
}

impl fmt::Debug for Dispatcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Dispatcher")
            .field("pending", &self.queue.len())
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

fn pointer_transition(event: &Event) -> Option<ItemState> {
    match event.payload {
        EventPayload::Pointer(p) => match p.phase {
            PointerPhase::Down => Some(ItemState::Pressed),
            PointerPhase::Up => Some(ItemState::Normal),
            PointerPhase::Move => None,
        },
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use tessera_engine::coords::{Rect, Vec2};
    use tessera_engine::input::{DeviceKind, Key, MouseButton};
    use tessera_engine::render::Backend;

    use super::*;
    use crate::event::{EventKind, TouchPhase};
    use crate::item::Drawable;

    struct Blank;

    impl Drawable for Blank {
        fn draw(&self, _backend: &mut dyn Backend, _state: ItemState) {}

        fn bounds(&self) -> Rect {
            Rect::default()
        }
    }

    type Log = Rc<RefCell<Vec<(&'static str, EventKind)>>>;

    fn recorder(log: &Log, tag: &'static str) -> impl FnMut(&Event, &mut DispatchCtx<'_>) + 'static {
        let log = Rc::clone(log);
        move |ev, _ctx| log.borrow_mut().push((tag, ev.kind()))
    }

    fn down() -> Event {
        Event::pointer_down(Vec2::new(10.0, 10.0), MouseButton::from_index(0))
    }

    fn up() -> Event {
        Event::pointer_up(Vec2::new(10.0, 10.0), MouseButton::Left)
    }

    // ── delivery ──────────────────────────────────────────────────────────

    #[test]
    fn pointer_down_presses_item_and_calls_back_once() {
        let mut items = ItemPool::new();
        let a = items.insert(Blank);
        let log = Log::default();
        let devices = Rc::new(RefCell::new(Vec::new()));
        let mut d = Dispatcher::new();
        d.register_listener(a, recorder(&log, "a"));
        let seen = Rc::clone(&devices);
        d.register_listener(a, move |ev, _ctx| seen.borrow_mut().push(ev.device));

        d.queue_event(down());
        assert_eq!(d.dispatch_events(&mut items), 1);

        assert_eq!(items.state(a), Some(ItemState::Pressed));
        assert_eq!(*log.borrow(), vec![("a", EventKind::PointerDown)]);
        assert_eq!(*devices.borrow(), vec![DeviceKind::Mouse]);
        assert!(d.is_idle());
    }

    #[test]
    fn every_listener_once_in_registration_order() {
        let mut items = ItemPool::new();
        let a = items.insert(Blank);
        let b = items.insert(Blank);
        let log = Log::default();
        let mut d = Dispatcher::new();
        d.register_listener(b, recorder(&log, "b"));
        d.register_listener(a, recorder(&log, "a"));
        d.register_listener(b, recorder(&log, "b2"));

        d.queue_event(Event::key_down(Key::Space));
        d.dispatch_events(&mut items);

        let tags: Vec<_> = log.borrow().iter().map(|(t, _)| *t).collect();
        assert_eq!(tags, vec!["b", "a", "b2"]);
    }

    #[test]
    fn events_are_fifo_and_fully_fanned_out() {
        let mut items = ItemPool::new();
        let a = items.insert(Blank);
        let log = Log::default();
        let mut d = Dispatcher::new();
        d.register_listener(a, recorder(&log, "1"));
        d.register_listener(a, recorder(&log, "2"));

        d.queue_event(down());
        d.queue_event(Event::pointer_move(Vec2::zero()));
        d.queue_event(up());
        assert_eq!(d.pending(), 3);
        assert_eq!(d.dispatch_events(&mut items), 3);

        assert_eq!(
            *log.borrow(),
            vec![
                ("1", EventKind::PointerDown),
                ("2", EventKind::PointerDown),
                ("1", EventKind::PointerMove),
                ("2", EventKind::PointerMove),
                ("1", EventKind::PointerUp),
                ("2", EventKind::PointerUp),
            ]
        );
    }

    #[test]
    fn same_item_on_two_listeners() {
        let mut items = ItemPool::new();
        let a = items.insert(Blank);
        let log = Log::default();
        let mut d = Dispatcher::new();
        d.register_listener(a, recorder(&log, "first"));
        d.register_listener(a, recorder(&log, "second"));

        d.queue_event(down());
        d.dispatch_events(&mut items);

        let tags: Vec<_> = log.borrow().iter().map(|(t, _)| *t).collect();
        assert_eq!(tags, vec!["first", "second"]);
        assert_eq!(items.state(a), Some(ItemState::Pressed));
    }

    #[test]
    fn empty_queue_dispatches_nothing() {
        let mut items = ItemPool::new();
        let mut d = Dispatcher::new();
        assert_eq!(d.dispatch_events(&mut items), 0);
    }

    // ── state policy ──────────────────────────────────────────────────────

    #[test]
    fn up_returns_to_normal_from_any_state() {
        for prior in [ItemState::Normal, ItemState::Hovered, ItemState::Pressed, ItemState::Disabled] {
            let mut items = ItemPool::new();
            let a = items.insert(Blank);
            items.set_state(a, prior);
            let mut d = Dispatcher::new();
            d.register_listener(a, |_, _| {});

            d.queue_event(down());
            d.dispatch_events(&mut items);
            assert_eq!(items.state(a), Some(ItemState::Pressed));

            d.queue_event(up());
            d.dispatch_events(&mut items);
            assert_eq!(items.state(a), Some(ItemState::Normal));
        }
    }

    #[test]
    fn move_key_and_touch_leave_state_alone() {
        let mut items = ItemPool::new();
        let a = items.insert(Blank);
        items.set_state(a, ItemState::Hovered);
        let mut d = Dispatcher::new();
        d.register_listener(a, |_, _| {});

        d.queue_event(Event::pointer_move(Vec2::new(3.0, 3.0)));
        d.queue_event(Event::key_down(Key::Enter));
        d.queue_event(Event::touch(TouchPhase::Start, 1, Vec2::zero()));
        d.queue_event(Event::touch(TouchPhase::End, 1, Vec2::zero()));
        d.dispatch_events(&mut items);

        assert_eq!(items.state(a), Some(ItemState::Hovered));
    }

    #[test]
    fn state_is_applied_after_each_callback() {
        let mut items = ItemPool::new();
        let a = items.insert(Blank);
        let seen = Rc::new(RefCell::new(Vec::new()));
        let mut d = Dispatcher::new();
        for _ in 0..2 {
            let seen = Rc::clone(&seen);
            d.register_listener(a, move |_, ctx| {
                let target = ctx.target();
                seen.borrow_mut().push(ctx.items().state(target));
            });
        }

        d.queue_event(down());
        d.dispatch_events(&mut items);

        // The second callback observes the transition made after the first.
        assert_eq!(*seen.borrow(), vec![Some(ItemState::Normal), Some(ItemState::Pressed)]);
    }

    #[test]
    fn callback_can_set_other_states() {
        let mut items = ItemPool::new();
        let a = items.insert(Blank);
        let mut d = Dispatcher::new();
        d.register_listener(a, |ev, ctx| {
            if ev.kind() == EventKind::PointerMove {
                let target = ctx.target();
                ctx.items().set_state(target, ItemState::Hovered);
            }
        });

        d.queue_event(Event::pointer_move(Vec2::zero()));
        d.dispatch_events(&mut items);
        assert_eq!(items.state(a), Some(ItemState::Hovered));
    }

    // ── re-entrancy ───────────────────────────────────────────────────────

    #[test]
    fn events_queued_by_callbacks_run_in_the_same_drain() {
        let mut items = ItemPool::new();
        let a = items.insert(Blank);
        let log = Log::default();
        let mut d = Dispatcher::new();
        d.register_listener(a, |ev, ctx| {
            if ev.kind() == EventKind::PointerDown {
                ctx.queue_event(Event::pointer_up(Vec2::zero(), MouseButton::Left));
            }
        });
        d.register_listener(a, recorder(&log, "watch"));

        d.queue_event(down());
        d.queue_event(Event::key_down(Key::Escape));
        assert_eq!(d.dispatch_events(&mut items), 3);

        let kinds: Vec<_> = log.borrow().iter().map(|(_, k)| *k).collect();
        assert_eq!(kinds, vec![EventKind::PointerDown, EventKind::KeyDown, EventKind::PointerUp]);
        assert_eq!(items.state(a), Some(ItemState::Normal));
        assert!(d.is_idle());
    }

    // ── registration ──────────────────────────────────────────────────────

    #[test]
    fn unregistered_listener_is_not_called() {
        let mut items = ItemPool::new();
        let a = items.insert(Blank);
        let log = Log::default();
        let mut d = Dispatcher::new();
        let first = d.register_listener(a, recorder(&log, "first"));
        d.register_listener(a, recorder(&log, "second"));

        assert!(d.unregister_listener(first));
        assert!(!d.unregister_listener(first));
        assert_eq!(d.listener_count(), 1);

        d.queue_event(Event::key_up(Key::Tab));
        d.dispatch_events(&mut items);
        let tags: Vec<_> = log.borrow().iter().map(|(t, _)| *t).collect();
        assert_eq!(tags, vec!["second"]);
    }

    #[test]
    fn targeted_listener_only_sees_its_events() {
        let mut items = ItemPool::new();
        let a = items.insert(Blank);
        let b = items.insert(Blank);
        let log = Log::default();
        let mut d = Dispatcher::new();
        d.register_listener_with(a, Interest::Targeted, recorder(&log, "a"));
        d.register_listener_with(b, Interest::Targeted, recorder(&log, "b"));

        d.queue_event(down().with_target(b));
        d.queue_event(Event::key_down(Key::Enter));
        d.dispatch_events(&mut items);

        assert_eq!(*log.borrow(), vec![("b", EventKind::PointerDown)]);
        assert_eq!(items.state(a), Some(ItemState::Normal));
        assert_eq!(items.state(b), Some(ItemState::Pressed));
    }

    #[test]
    fn listener_ids_are_distinct() {
        let mut items = ItemPool::new();
        let a = items.insert(Blank);
        let mut d = Dispatcher::new();
        let x = d.register_listener(a, |_, _| {});
        let y = d.register_listener(a, |_, _| {});
        assert_ne!(x, y);
    }

    #[test]
    fn ctx_reports_listener_and_target() {
        let mut items = ItemPool::new();
        let a = items.insert(Blank);
        let seen = Rc::new(RefCell::new(None));
        let mut d = Dispatcher::new();
        let sink = Rc::clone(&seen);
        let id = d.register_listener(a, move |_, ctx| {
            *sink.borrow_mut() = Some((ctx.listener(), ctx.target()));
        });

        d.queue_event(Event::key_down(Key::Home));
        d.dispatch_events(&mut items);
        assert_eq!(*seen.borrow(), Some((id, a)));
    }

    // ── stale items ───────────────────────────────────────────────────────

    #[test]
    fn listeners_for_removed_items_are_pruned() {
        let mut items = ItemPool::new();
        let a = items.insert(Blank);
        let b = items.insert(Blank);
        let log = Log::default();
        let mut d = Dispatcher::new();
        d.register_listener(a, recorder(&log, "a"));
        d.register_listener(b, recorder(&log, "b"));

        items.remove(a);
        d.queue_event(down());
        d.dispatch_events(&mut items);

        assert_eq!(d.listener_count(), 1);
        let tags: Vec<_> = log.borrow().iter().map(|(t, _)| *t).collect();
        assert_eq!(tags, vec!["b"]);
    }

    #[test]
    fn item_removed_mid_drain_is_skipped() {
        let mut items = ItemPool::new();
        let a = items.insert(Blank);
        let b = items.insert(Blank);
        let log = Log::default();
        let mut d = Dispatcher::new();
        d.register_listener(a, move |_, ctx| {
            ctx.items().remove(b);
        });
        d.register_listener(b, recorder(&log, "b"));

        d.queue_event(down());
        d.dispatch_events(&mut items);

        assert!(log.borrow().is_empty());
        assert_eq!(d.prune(&items), 1);
    }

    #[test]
    fn clear_queue_drops_pending_events() {
        let mut items = ItemPool::new();
        let a = items.insert(Blank);
        let mut d = Dispatcher::new();
        d.register_listener(a, |_, _| {});
        d.queue_event(down());
        d.clear_queue();
        assert_eq!(d.pending(), 0);
        assert_eq!(d.dispatch_events(&mut items), 0);
        assert_eq!(items.state(a), Some(ItemState::Normal));
    }
}
