//! Randomized queue - uniform-random removal and sampling.
//!
//! Elements are kept packed in a growable array with no ordering between
//! them. Removal picks a uniformly random live slot and fills the hole with
//! the last live element (swap-remove), so both `enqueue` and `dequeue` are
//! amortized O(1).
//!
//! The queue owns its random number generator. By default it is a
//! [`SmallRng`] seeded from the operating system; pass a seeded generator to
//! [`RandomizedQueue::with_rng`] for reproducible sequences.
//!
//! # Example
//!
//! ```
//! use nexus_containers::RandomizedQueue;
//! use rand::rngs::SmallRng;
//! use rand::SeedableRng;
//!
//! let rng = SmallRng::seed_from_u64(12345);
//! let mut queue = RandomizedQueue::with_rng(rng);
//!
//! queue.enqueue(1);
//! queue.enqueue(2);
//!
//! let sample = *queue.sample().unwrap();
//! assert!(sample == 1 || sample == 2);
//!
//! let a = queue.dequeue().unwrap();
//! let b = queue.dequeue().unwrap();
//! assert_eq!(a + b, 3);
//! assert!(queue.is_empty());
//! ```

use core::fmt;
use core::iter::FusedIterator;

use rand::rngs::SmallRng;
use rand::{Rng, RngCore, SeedableRng};

use crate::capacity::Slots;
use crate::error::Underflow;

/// A bag that hands out its elements in uniformly random order.
///
/// # Type Parameters
///
/// - `T`: Element type
/// - `R`: Random number generator, defaults to [`SmallRng`]
pub struct RandomizedQueue<T, R = SmallRng> {
    slots: Slots<T>,
    rng: R,
}

impl<T> RandomizedQueue<T> {
    /// Creates an empty queue with an entropy-seeded [`SmallRng`].
    pub fn new() -> Self {
        Self::with_rng(SmallRng::from_entropy())
    }

    /// Creates an empty queue with room for `capacity` elements and an
    /// entropy-seeded [`SmallRng`]. A capacity of 0 is raised to 1.
    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_capacity_and_rng(capacity, SmallRng::from_entropy())
    }
}

impl<T, R: Rng> RandomizedQueue<T, R> {
    /// Creates an empty queue drawing randomness from `rng`.
    pub fn with_rng(rng: R) -> Self {
        Self::with_capacity_and_rng(1, rng)
    }

    /// Creates an empty queue with room for `capacity` elements, drawing
    /// randomness from `rng`.
    pub fn with_capacity_and_rng(capacity: usize, rng: R) -> Self {
        Self {
            slots: Slots::with_capacity(capacity),
            rng,
        }
    }

    /// Returns the number of elements in the queue.
    #[inline]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Returns `true` if the queue is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Returns the current slot capacity.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.slots.capacity()
    }

    /// Adds `value`, growing storage first if it is full.
    #[inline]
    pub fn enqueue(&mut self, value: T) {
        self.slots.push(value);
    }

    /// Removes and returns a uniformly random element.
    ///
    /// The last live element moves into the vacated slot, then storage halves
    /// if it has dropped below a quarter full.
    ///
    /// # Errors
    ///
    /// Returns [`Underflow`] if the queue is empty. The queue is unchanged.
    pub fn dequeue(&mut self) -> Result<T, Underflow> {
        if self.slots.is_empty() {
            return Err(Underflow::new("dequeue"));
        }
        let index = self.rng.gen_range(0..self.slots.len());
        self.slots
            .swap_remove(index)
            .ok_or(Underflow::new("dequeue"))
    }

    /// Returns a uniformly random element without removing it.
    ///
    /// Only advances the generator; the contents are untouched.
    ///
    /// # Errors
    ///
    /// Returns [`Underflow`] if the queue is empty.
    pub fn sample(&mut self) -> Result<&T, Underflow> {
        let items = self.slots.as_slice();
        if items.is_empty() {
            return Err(Underflow::new("sample"));
        }
        Ok(&items[self.rng.gen_range(0..items.len())])
    }

    /// Like [`sample`](Self::sample), but draws from a caller-supplied
    /// generator so the queue can stay behind a shared reference.
    ///
    /// # Errors
    ///
    /// Returns [`Underflow`] if the queue is empty.
    pub fn sample_with<G: Rng>(&self, rng: &mut G) -> Result<&T, Underflow> {
        let items = self.slots.as_slice();
        if items.is_empty() {
            return Err(Underflow::new("sample"));
        }
        Ok(&items[rng.gen_range(0..items.len())])
    }

    /// Removes every element and returns storage to its minimum capacity.
    pub fn clear(&mut self) {
        self.slots.clear();
    }

    /// Returns a mutable reference to the generator.
    #[inline]
    pub fn rng_mut(&mut self) -> &mut R {
        &mut self.rng
    }
}

impl<T: Clone, R: Rng + SeedableRng> RandomizedQueue<T, R> {
    /// Returns an iterator over a snapshot of the queue in uniformly random
    /// order.
    ///
    /// The snapshot copies the elements now and gets its own generator,
    /// seeded from this queue's; draining it never touches this queue.
    ///
    /// ```
    /// use nexus_containers::RandomizedQueue;
    ///
    /// let mut queue: RandomizedQueue<u32> = (1..=4).collect();
    /// let mut seen: Vec<_> = queue.iter().collect();
    /// seen.sort_unstable();
    ///
    /// assert_eq!(seen, vec![1, 2, 3, 4]);
    /// assert_eq!(queue.len(), 4);
    /// ```
    pub fn iter(&mut self) -> IntoIter<T, R> {
        let rng = R::seed_from_u64(self.rng.next_u64());
        IntoIter {
            queue: RandomizedQueue {
                slots: self.slots.clone(),
                rng,
            },
        }
    }
}

// ============================================================================
// Trait impls
// ============================================================================

impl<T> Default for RandomizedQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone, R: Clone> Clone for RandomizedQueue<T, R> {
    /// Clones the elements and the generator state; the clone replays the
    /// same random sequence as `self`.
    fn clone(&self) -> Self {
        Self {
            slots: self.slots.clone(),
            rng: self.rng.clone(),
        }
    }
}

impl<T: fmt::Debug, R> fmt::Debug for RandomizedQueue<T, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RandomizedQueue")
            .field("slots", &self.slots)
            .finish_non_exhaustive()
    }
}

impl<T, R: Rng> Extend<T> for RandomizedQueue<T, R> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.enqueue(value);
        }
    }
}

impl<T> FromIterator<T> for RandomizedQueue<T> {
    /// Builds a queue by enqueueing each element in iteration order.
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut queue = Self::new();
        queue.extend(iter);
        queue
    }
}

impl<T> From<Vec<T>> for RandomizedQueue<T> {
    fn from(values: Vec<T>) -> Self {
        values.into_iter().collect()
    }
}

impl<T, const N: usize> From<[T; N]> for RandomizedQueue<T> {
    fn from(values: [T; N]) -> Self {
        values.into_iter().collect()
    }
}

impl<T, R: Rng> IntoIterator for RandomizedQueue<T, R> {
    type Item = T;
    type IntoIter = IntoIter<T, R>;

    /// Drains the queue in uniformly random order.
    fn into_iter(self) -> IntoIter<T, R> {
        IntoIter { queue: self }
    }
}

// ============================================================================
// Iterator
// ============================================================================

/// Owning iterator yielding a uniformly random permutation of its elements.
///
/// Created by [`RandomizedQueue::iter`] (over a snapshot) or by
/// [`IntoIterator`] (consuming the queue).
pub struct IntoIter<T, R> {
    queue: RandomizedQueue<T, R>,
}

impl<T, R: Rng> Iterator for IntoIter<T, R> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<T> {
        self.queue.dequeue().ok()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.queue.len();
        (len, Some(len))
    }
}

impl<T, R: Rng> ExactSizeIterator for IntoIter<T, R> {}

impl<T, R: Rng> FusedIterator for IntoIter<T, R> {}

impl<T: fmt::Debug, R> fmt::Debug for IntoIter<T, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("IntoIter").field(&self.queue).finish()
    }
}
