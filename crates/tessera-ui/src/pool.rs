//! Owned storage for items.
//!
//! Views and the dispatcher never hold items directly. They hold [`ItemId`] handles into
//! an [`ItemPool`]. Removing an item bumps its slot's generation, so every outstanding
//! handle to it goes stale: lookups return `None` instead of reaching a recycled slot.

use std::fmt;

use crate::item::{Drawable, Item, ItemState};

/// Handle to an item in an [`ItemPool`].
///
/// Equality is handle identity: same slot, same generation.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct ItemId {
    index: u32,
    generation: u32,
}

impl ItemId {
    #[inline]
    pub fn index(self) -> u32 {
        self.index
    }

    #[inline]
    pub fn generation(self) -> u32 {
        self.generation
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "item#{}v{}", self.index, self.generation)
    }
}

struct Slot {
    generation: u32,
    item: Option<Item>,
}

/// Generational arena that owns every item in a scene.
#[derive(Default)]
pub struct ItemPool {
    slots: Vec<Slot>,
    free: Vec<u32>,
    len: usize,
}

/// Index for a slot appended after `len` existing ones, if it fits in a handle.
fn next_slot_index(len: usize) -> Option<u32> {
    u32::try_from(len).ok().filter(|&index| index < u32::MAX)
}

impl ItemPool {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores `visual` as a new item in the `Normal` state.
    ///
    /// Panics under the same condition as [`insert_item`](Self::insert_item).
    pub fn insert<D: Drawable>(&mut self, visual: D) -> ItemId {
        self.insert_item(Item::new(visual))
    }

    /// Stores an already-built item, keeping its state.
    ///
    /// # Panics
    ///
    /// Panics if the pool would need more than `u32::MAX` slots. Removed slots are reused
    /// first, so only that many items alive at once can trigger it.
    pub fn insert_item(&mut self, item: Item) -> ItemId {
        self.len += 1;
        if let Some(index) = self.free.pop() {
            let slot = &mut self.slots[index as usize];
            slot.item = Some(item);
            return ItemId { index, generation: slot.generation };
        }

        let Some(index) = next_slot_index(self.slots.len()) else {
            panic!("item pool exceeded u32::MAX slots");
        };
        self.slots.push(Slot { generation: 0, item: Some(item) });
        ItemId { index, generation: 0 }
    }

    /// Removes and returns the item. Outstanding handles to it go stale.
    pub fn remove(&mut self, id: ItemId) -> Option<Item> {
        let slot = self.slots.get_mut(id.index as usize)?;
        if slot.generation != id.generation {
            return None;
        }
        let item = slot.item.take()?;
        // A slot whose generation would wrap is retired instead of recycled.
        match slot.generation.checked_add(1) {
            Some(next) => {
                slot.generation = next;
                self.free.push(id.index);
            }
            None => log::debug!("retiring item slot {} after generation wrap", id.index),
        }
        self.len -= 1;
        Some(item)
    }

    pub fn get(&self, id: ItemId) -> Option<&Item> {
        self.slots
            .get(id.index as usize)
            .filter(|slot| slot.generation == id.generation)
            .and_then(|slot| slot.item.as_ref())
    }

    pub fn get_mut(&mut self, id: ItemId) -> Option<&mut Item> {
        self.slots
            .get_mut(id.index as usize)
            .filter(|slot| slot.generation == id.generation)
            .and_then(|slot| slot.item.as_mut())
    }

    #[inline]
    pub fn contains(&self, id: ItemId) -> bool {
        self.get(id).is_some()
    }

    pub fn state(&self, id: ItemId) -> Option<ItemState> {
        self.get(id).map(Item::state)
    }

    /// Sets the item's state. Returns `false` for stale handles.
    pub fn set_state(&mut self, id: ItemId, state: ItemState) -> bool {
        match self.get_mut(id) {
            Some(item) => {
                item.set_state(state);
                true
            }
            None => false,
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Live items in slot order.
    pub fn iter(&self) -> impl Iterator<Item = (ItemId, &Item)> {
        self.slots.iter().enumerate().filter_map(|(index, slot)| {
            slot.item.as_ref().map(|item| {
                (ItemId { index: index as u32, generation: slot.generation }, item)
            })
        })
    }
}

impl fmt::Debug for ItemPool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}
