use crate::core::BodyHandle;
use crate::error::PhysicsError;
use crate::Result;

/// One slot of the arena: a generation counter plus the occupant, if any
#[derive(Debug)]
struct Slot<T> {
    generation: u32,
    entry: Option<T>,
}

/// A growable arena of bodies addressed by generation-tagged handles
///
/// All bodies of a world live in one arena and are destroyed en masse when
/// the world is torn down on a level transition. Removal bumps the slot's
/// generation, so stale handles fail lookups instead of resolving to a
/// later occupant of the same slot. Iteration visits slots in index order,
/// which is insertion order until a freed slot is reused.
#[derive(Debug)]
pub struct BodyArena<T> {
    slots: Vec<Slot<T>>,
    free: Vec<u32>,
    len: usize,
}

impl<T> BodyArena<T> {
    /// Creates a new empty arena
    pub fn new() -> Self {
        Self {
            slots: Vec::new(),
            free: Vec::new(),
            len: 0,
        }
    }

    /// Adds an item to the arena and returns its handle
    pub fn add(&mut self, item: T) -> BodyHandle {
        self.len += 1;
        if let Some(index) = self.free.pop() {
            let slot = &mut self.slots[index as usize];
            slot.entry = Some(item);
            BodyHandle {
                index,
                generation: slot.generation,
            }
        } else {
            let index = self.slots.len() as u32;
            self.slots.push(Slot {
                generation: 0,
                entry: Some(item),
            });
            BodyHandle {
                index,
                generation: 0,
            }
        }
    }

    /// Gets a reference to an item by its handle
    pub fn get(&self, handle: BodyHandle) -> Option<&T> {
        self.slots
            .get(handle.index as usize)
            .filter(|slot| slot.generation == handle.generation)
            .and_then(|slot| slot.entry.as_ref())
    }

    /// Gets a mutable reference to an item by its handle
    pub fn get_mut(&mut self, handle: BodyHandle) -> Option<&mut T> {
        self.slots
            .get_mut(handle.index as usize)
            .filter(|slot| slot.generation == handle.generation)
            .and_then(|slot| slot.entry.as_mut())
    }

    /// Returns whether the arena holds a live item for the handle
    pub fn contains(&self, handle: BodyHandle) -> bool {
        self.get(handle).is_some()
    }

    /// Removes an item from the arena, invalidating its handle
    pub fn remove(&mut self, handle: BodyHandle) -> Option<T> {
        let slot = self
            .slots
            .get_mut(handle.index as usize)
            .filter(|slot| slot.generation == handle.generation)?;
        let item = slot.entry.take()?;
        slot.generation = slot.generation.wrapping_add(1);
        self.free.push(handle.index);
        self.len -= 1;
        Some(item)
    }

    /// Returns the number of items in the arena
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns whether the arena is empty
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Clears all items from the arena, invalidating every handle
    pub fn clear(&mut self) {
        for (index, slot) in self.slots.iter_mut().enumerate() {
            if slot.entry.take().is_some() {
                slot.generation = slot.generation.wrapping_add(1);
                self.free.push(index as u32);
            }
        }
        self.len = 0;
    }

    /// Returns an iterator over all items in slot order
    pub fn iter(&self) -> impl Iterator<Item = (BodyHandle, &T)> {
        self.slots.iter().enumerate().filter_map(|(index, slot)| {
            slot.entry.as_ref().map(|item| {
                (
                    BodyHandle {
                        index: index as u32,
                        generation: slot.generation,
                    },
                    item,
                )
            })
        })
    }

    /// Returns a mutable iterator over all items in slot order
    pub fn iter_mut(&mut self) -> impl Iterator<Item = (BodyHandle, &mut T)> {
        self.slots
            .iter_mut()
            .enumerate()
            .filter_map(|(index, slot)| {
                let generation = slot.generation;
                slot.entry.as_mut().map(|item| {
                    (
                        BodyHandle {
                            index: index as u32,
                            generation,
                        },
                        item,
                    )
                })
            })
    }

    /// Returns the handles of all live items in slot order
    pub fn handles(&self) -> Vec<BodyHandle> {
        self.iter().map(|(handle, _)| handle).collect()
    }
}

impl<T> Default for BodyArena<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> BodyArena<T> {
    /// Gets a body by its handle, returning an error if not found
    pub fn get_body(&self, handle: BodyHandle) -> Result<&T> {
        self.get(handle).ok_or_else(|| {
            PhysicsError::ResourceNotFound(format!("Body with handle {:?} not found", handle))
        })
    }

    /// Gets a mutable reference to a body by its handle, returning an error if not found
    pub fn get_body_mut(&mut self, handle: BodyHandle) -> Result<&mut T> {
        self.get_mut(handle).ok_or_else(|| {
            PhysicsError::ResourceNotFound(format!("Body with handle {:?} not found", handle))
        })
    }
}
