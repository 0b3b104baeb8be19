//! Growable slot array with an explicit doubling/halving resize policy.
//!
//! Both containers keep their live elements packed at the front of a store
//! whose logical capacity is managed here rather than left to `Vec`'s own
//! growth strategy:
//!
//! - grow: capacity doubles immediately before a push would overflow it
//! - shrink: after a removal leaves `len < capacity / 4`, capacity halves
//! - capacity never drops below [`MIN_CAPACITY`]

/// Smallest capacity a store will ever be resized to.
pub(crate) const MIN_CAPACITY: usize = 1;

/// Capacity after growing a full store of `capacity` slots.
#[inline]
pub(crate) fn grown(capacity: usize) -> usize {
    capacity.saturating_mul(2).max(MIN_CAPACITY)
}

/// Capacity a store should shrink to after a removal, if any.
#[inline]
pub(crate) fn shrunk(len: usize, capacity: usize) -> Option<usize> {
    // len < capacity / 4, without truncating the division
    if capacity > MIN_CAPACITY && len.saturating_mul(4) < capacity {
        Some((capacity / 2).max(MIN_CAPACITY))
    } else {
        None
    }
}

/// Live elements packed into `items[..len]`, with a tracked logical capacity.
///
/// The backing `Vec` is always allocated with at least `capacity` slots, so
/// pushes between resizes never reallocate.
pub(crate) struct Slots<T> {
    items: Vec<T>,
    capacity: usize,
}

impl<T> Slots<T> {
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(MIN_CAPACITY);
        Self {
            items: Vec::with_capacity(capacity),
            capacity,
        }
    }

    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub(crate) fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[inline]
    pub(crate) fn capacity(&self) -> usize {
        self.capacity
    }

    #[inline]
    pub(crate) fn as_slice(&self) -> &[T] {
        &self.items
    }

    #[inline]
    pub(crate) fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.items
    }

    /// Appends `value` at position `len`, growing first if the store is full.
    pub(crate) fn push(&mut self, value: T) {
        if self.items.len() == self.capacity {
            self.resize(grown(self.capacity));
        }
        self.items.push(value);
    }

    /// Removes the element at `index`, moving the last live element into its
    /// slot, then applies the shrink check.
    ///
    /// Returns `None` (and leaves the store untouched) if `index >= len`.
    pub(crate) fn swap_remove(&mut self, index: usize) -> Option<T> {
        if index >= self.items.len() {
            return None;
        }
        let value = self.items.swap_remove(index);
        if let Some(capacity) = shrunk(self.items.len(), self.capacity) {
            self.resize(capacity);
        }
        Some(value)
    }

    /// Drops every element and returns to the floor capacity.
    pub(crate) fn clear(&mut self) {
        self.items = Vec::with_capacity(MIN_CAPACITY);
        self.capacity = MIN_CAPACITY;
    }

    pub(crate) fn into_vec(self) -> Vec<T> {
        self.items
    }

    /// Moves the live prefix into a fresh allocation of `capacity` slots.
    fn resize(&mut self, capacity: usize) {
        debug_assert!(capacity >= self.items.len());
        log::trace!(
            "resizing {} store: {} -> {} slots ({} live)",
            core::any::type_name::<T>(),
            self.capacity,
            capacity,
            self.items.len()
        );

        let mut fresh = Vec::with_capacity(capacity);
        fresh.append(&mut self.items);
        self.items = fresh;
        self.capacity = capacity;
    }
}

impl<T: Clone> Clone for Slots<T> {
    fn clone(&self) -> Self {
        let mut items = Vec::with_capacity(self.capacity);
        items.extend_from_slice(&self.items);
        Self {
            items,
            capacity: self.capacity,
        }
    }
}

impl<T: core::fmt::Debug> core::fmt::Debug for Slots<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Slots")
            .field("len", &self.items.len())
            .field("capacity", &self.capacity)
            .field("items", &self.items)
            .finish()
    }
}
