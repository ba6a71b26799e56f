//! Generational Arenas
//!
//! Each entity kind (platforms, power-ups, mobs) lives in its own owning
//! `Arena<T>`. Handles are generational indices: a slot's generation
//! increments when it is freed, so a stale handle to a removed entity can
//! never accidentally match whatever reuses the slot. This is what lets a
//! power-up hold a non-owning reference to its platform safely.

/// A reference into an [`Arena`].
///
/// Consists of an index (which slot) and a generation (which version of
/// that slot). Two handles with the same index but different generations
/// refer to different entities.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Handle {
    /// Index into the arena's slot array
    index: u32,
    /// Generation counter - increments when the slot is reused
    generation: u32,
}

impl Handle {
    fn new(index: u32, generation: u32) -> Self {
        Self { index, generation }
    }

    /// Get the slot index of this handle.
    pub fn index(&self) -> u32 {
        self.index
    }
}

struct Slot<T> {
    generation: u32,
    value: Option<T>,
}

/// An owning container for entities of one kind, addressed by [`Handle`].
///
/// Freed slots are reused (LIFO) with an incremented generation.
pub struct Arena<T> {
    slots: Vec<Slot<T>>,
    free: Vec<u32>,
    len: usize,
}

impl<T> Arena<T> {
    /// Create an empty arena.
    pub fn new() -> Self {
        Self {
            slots: Vec::new(),
            free: Vec::new(),
            len: 0,
        }
    }

    /// Insert a value, returning a handle to it.
    pub fn insert(&mut self, value: T) -> Handle {
        self.len += 1;

        if let Some(index) = self.free.pop() {
            // Reuse a freed slot - generation was bumped on removal
            let slot = &mut self.slots[index as usize];
            slot.value = Some(value);
            Handle::new(index, slot.generation)
        } else {
            let index = self.slots.len() as u32;
            self.slots.push(Slot {
                generation: 0,
                value: Some(value),
            });
            Handle::new(index, 0)
        }
    }

    /// Remove the value a handle points to, if it is still live.
    pub fn remove(&mut self, handle: Handle) -> Option<T> {
        let slot = self.slots.get_mut(handle.index as usize)?;
        if slot.generation != handle.generation || slot.value.is_none() {
            return None;
        }
        // Invalidate outstanding handles to this slot
        slot.generation += 1;
        self.free.push(handle.index);
        self.len -= 1;
        slot.value.take()
    }

    /// Check whether a handle still refers to a live value.
    pub fn contains(&self, handle: Handle) -> bool {
        self.slots
            .get(handle.index as usize)
            .map(|slot| slot.generation == handle.generation && slot.value.is_some())
            .unwrap_or(false)
    }

    /// Get a reference to the value behind a handle.
    pub fn get(&self, handle: Handle) -> Option<&T> {
        let slot = self.slots.get(handle.index as usize)?;
        if slot.generation != handle.generation {
            return None;
        }
        slot.value.as_ref()
    }

    /// Get a mutable reference to the value behind a handle.
    pub fn get_mut(&mut self, handle: Handle) -> Option<&mut T> {
        let slot = self.slots.get_mut(handle.index as usize)?;
        if slot.generation != handle.generation {
            return None;
        }
        slot.value.as_mut()
    }

    /// Number of live values.
    pub fn len(&self) -> usize {
        self.len
    }

    /// True when no values are live.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Iterate over all live (handle, value) pairs in slot order.
    pub fn iter(&self) -> impl Iterator<Item = (Handle, &T)> {
        self.slots.iter().enumerate().filter_map(|(idx, slot)| {
            slot.value
                .as_ref()
                .map(|v| (Handle::new(idx as u32, slot.generation), v))
        })
    }

    /// Iterate mutably over all live (handle, value) pairs in slot order.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = (Handle, &mut T)> {
        self.slots.iter_mut().enumerate().filter_map(|(idx, slot)| {
            let generation = slot.generation;
            slot.value
                .as_mut()
                .map(move |v| (Handle::new(idx as u32, generation), v))
        })
    }

    /// Keep only the values for which the predicate returns true.
    /// Removed slots are freed with bumped generations, same as `remove`.
    pub fn retain(&mut self, mut keep: impl FnMut(Handle, &mut T) -> bool) {
        for (idx, slot) in self.slots.iter_mut().enumerate() {
            let handle = Handle::new(idx as u32, slot.generation);
            if let Some(value) = slot.value.as_mut() {
                if !keep(handle, value) {
                    slot.value = None;
                    slot.generation += 1;
                    self.free.push(idx as u32);
                    self.len -= 1;
                }
            }
        }
    }

    /// Remove every value, invalidating all outstanding handles.
    pub fn clear(&mut self) {
        self.retain(|_, _| false);
    }
}

impl<T> Default for Arena<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_and_get() {
        let mut arena = Arena::new();
        let a = arena.insert("a");
        let b = arena.insert("b");

        assert_eq!(arena.len(), 2);
        assert_eq!(arena.get(a), Some(&"a"));
        assert_eq!(arena.get(b), Some(&"b"));
    }

    #[test]
    fn test_remove_invalidates_handle() {
        let mut arena = Arena::new();
        let a = arena.insert(1);

        assert_eq!(arena.remove(a), Some(1));
        assert!(!arena.contains(a));
        assert_eq!(arena.get(a), None);
        // Second remove is a no-op
        assert_eq!(arena.remove(a), None);
    }

    #[test]
    fn test_generation_prevents_reuse_collision() {
        let mut arena = Arena::new();
        let old = arena.insert(1);
        arena.remove(old);

        // Reuses the slot with a new generation
        let new = arena.insert(2);
        assert_eq!(new.index(), old.index());
        assert!(!arena.contains(old));
        assert_eq!(arena.get(new), Some(&2));
    }

    #[test]
    fn test_retain() {
        let mut arena = Arena::new();
        for n in 0..10 {
            arena.insert(n);
        }

        arena.retain(|_, n| *n % 2 == 0);
        assert_eq!(arena.len(), 5);
        assert!(arena.iter().all(|(_, n)| n % 2 == 0));
    }

    #[test]
    fn test_iteration_order() {
        let mut arena = Arena::new();
        arena.insert("first");
        arena.insert("second");

        let items: Vec<_> = arena.iter().map(|(_, v)| *v).collect();
        assert_eq!(items, vec!["first", "second"]);
    }
}
