use alloc::vec::Vec;

use super::handle::Handle;

/// Slot storage for tree nodes and values, addressed by [`Handle`].
///
/// Freed slots go on a free list and are reused by later allocations, so a
/// handle stays valid for exactly as long as its slot is occupied. Cloning
/// the arena clones the slot vector position for position, which means every
/// handle into the original is also a valid handle into the clone.
#[derive(Clone)]
pub(crate) struct Arena<T> {
    slots: Vec<Option<T>>,
    free: Vec<Handle>,
}

impl<T> Arena<T> {
    pub(crate) const fn new() -> Self {
        Self {
            slots: Vec::new(),
            free: Vec::new(),
        }
    }

    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: Vec::with_capacity(capacity),
            free: Vec::new(),
        }
    }

    pub(crate) fn capacity(&self) -> usize {
        self.slots.capacity()
    }

    pub(crate) const fn len(&self) -> usize {
        self.slots.len().saturating_sub(self.free.len())
    }

    pub(crate) const fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub(crate) fn alloc(&mut self, element: T) -> Handle {
        match self.free.pop() {
            // Reuse a freed slot, keeping the arena dense.
            Some(handle) => {
                self.slots[handle.to_index()] = Some(element);
                handle
            }
            None => {
                // Strict less-than: the slot pushed below must itself be
                // addressable, so the pre-push length is capped one early.
                assert!(
                    self.slots.len() < Handle::MAX,
                    "`Arena::alloc()` - arena is at maximum capacity ({})",
                    Handle::MAX
                );
                self.slots.push(Some(element));
                Handle::from_index(self.slots.len() - 1)
            }
        }
    }

    #[inline]
    pub(crate) fn get(&self, handle: Handle) -> &T {
        self.slots[handle.to_index()].as_ref().expect("`Arena::get()` - `handle` points at a freed slot!")
    }

    #[inline]
    pub(crate) fn get_mut(&mut self, handle: Handle) -> &mut T {
        self.slots[handle.to_index()].as_mut().expect("`Arena::get_mut()` - `handle` points at a freed slot!")
    }

    /// Raw pointer to the slot storage, for iterators that must hand out
    /// element references without reborrowing the whole arena each step.
    pub(crate) fn slots_ptr_mut(&mut self) -> *mut Option<T> {
        self.slots.as_mut_ptr()
    }

    pub(crate) fn take(&mut self, handle: Handle) -> T {
        let element =
            self.slots[handle.to_index()].take().expect("`Arena::take()` - `handle` points at a freed slot!");
        self.free.push(handle);
        element
    }

    pub(crate) fn clear(&mut self) {
        self.slots.clear();
        self.free.clear();
    }
}
