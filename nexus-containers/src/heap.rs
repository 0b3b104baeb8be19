//! Binary-heap priority queue over a growable slot array.
//!
//! One engine, [`PriorityQueue`], is parameterized by a [`HeapOrder`]. The
//! two standard orientations are type aliases:
//!
//! - [`MaxPriorityQueue`] - largest element on top (`max`, `del_max`)
//! - [`MinPriorityQueue`] - smallest element on top (`min`, `del_min`)
//!
//! # Layout
//!
//! Elements live in a 0-indexed array in heap order: the children of slot
//! `k` are `2k + 1` and `2k + 2`, its parent is `(k - 1) / 2`. Every slot is
//! no worse than its children under the queue's order. Storage grows by
//! doubling before an insert would overflow and halves once a removal leaves
//! it less than a quarter full.
//!
//! ```text
//!              [0] 9
//!            /       \
//!        [1] 7       [2] 8
//!        /   \       /
//!     [3] 3 [4] 5 [5] 1
//! ```
//!
//! # Example
//!
//! ```
//! use nexus_containers::MaxPriorityQueue;
//!
//! let mut pq: MaxPriorityQueue<u64> = MaxPriorityQueue::new();
//! pq.insert(1);
//! pq.insert(5);
//! pq.insert(2);
//!
//! assert_eq!(pq.max(), Ok(&5));
//! assert_eq!(pq.del_max(), Ok(5));
//! assert_eq!(pq.del_max(), Ok(2));
//! assert_eq!(pq.len(), 1);
//! ```

use core::fmt;
use core::iter::FusedIterator;

use crate::capacity::Slots;
use crate::error::Underflow;
use crate::order::{HeapOrder, MaxOrder, MinOrder};

/// Priority queue with the largest element on top.
pub type MaxPriorityQueue<T> = PriorityQueue<T, MaxOrder>;

/// Priority queue with the smallest element on top.
pub type MinPriorityQueue<T> = PriorityQueue<T, MinOrder>;

/// A binary-heap priority queue ordered by `O`.
///
/// `O` decides which element is "better" and therefore closer to the top.
/// Equal elements are never reordered deliberately, but no stability is
/// promised between them.
///
/// # Example
///
/// ```
/// use nexus_containers::MinPriorityQueue;
///
/// let mut pq: MinPriorityQueue<i32> = [4, 1, 3].into_iter().collect();
/// pq.insert(2);
///
/// // Snapshot iteration leaves the queue untouched.
/// let sorted: Vec<_> = pq.iter().collect();
/// assert_eq!(sorted, vec![1, 2, 3, 4]);
/// assert_eq!(pq.len(), 4);
///
/// assert_eq!(pq.del_min(), Ok(1));
/// ```
pub struct PriorityQueue<T, O = MaxOrder> {
    slots: Slots<T>,
    order: O,
}

impl<T, O: HeapOrder<T> + Default> PriorityQueue<T, O> {
    /// Creates an empty queue.
    pub fn new() -> Self {
        Self::with_capacity_and_order(1, O::default())
    }

    /// Creates an empty queue with room for `capacity` elements before the
    /// first resize. A capacity of 0 is raised to 1.
    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_capacity_and_order(capacity, O::default())
    }
}

impl<T, O: HeapOrder<T>> PriorityQueue<T, O> {
    /// Creates an empty queue ordered by `order`.
    pub fn with_order(order: O) -> Self {
        Self::with_capacity_and_order(1, order)
    }

    /// Creates an empty queue ordered by `order` with room for `capacity`
    /// elements.
    pub fn with_capacity_and_order(capacity: usize, order: O) -> Self {
        Self {
            slots: Slots::with_capacity(capacity),
            order,
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

    /// Returns the ordering in use.
    #[inline]
    pub fn order(&self) -> &O {
        &self.order
    }

    // ========================================================================
    // Insert
    // ========================================================================

    /// Inserts `value`, growing storage first if it is full.
    ///
    /// Amortized O(log n).
    pub fn insert(&mut self, value: T) {
        self.slots.push(value);
        self.swim(self.slots.len() - 1);
    }

    // ========================================================================
    // Top access
    // ========================================================================

    /// Returns the top element.
    ///
    /// # Errors
    ///
    /// Returns [`Underflow`] if the queue is empty.
    #[inline]
    pub fn top(&self) -> Result<&T, Underflow> {
        self.peek_or(Underflow::new("top"))
    }

    /// Removes and returns the top element.
    ///
    /// # Errors
    ///
    /// Returns [`Underflow`] if the queue is empty. The queue is unchanged.
    #[inline]
    pub fn extract_top(&mut self) -> Result<T, Underflow> {
        self.pop_or(Underflow::new("extract_top"))
    }

    /// Returns the top element, or `None` if the queue is empty.
    #[inline]
    pub fn peek(&self) -> Option<&T> {
        self.slots.as_slice().first()
    }

    /// Removes and returns the top element, or `None` if the queue is empty.
    pub fn pop(&mut self) -> Option<T> {
        // Root and last live slot trade places; the old last sinks from the root.
        let top = self.slots.swap_remove(0)?;
        self.sink(0);
        Some(top)
    }

    #[inline]
    fn peek_or(&self, err: Underflow) -> Result<&T, Underflow> {
        self.peek().ok_or(err)
    }

    #[inline]
    fn pop_or(&mut self, err: Underflow) -> Result<T, Underflow> {
        self.pop().ok_or(err)
    }

    // ========================================================================
    // Bulk operations
    // ========================================================================

    /// Removes every element and returns storage to its minimum capacity.
    pub fn clear(&mut self) {
        self.slots.clear();
    }

    /// Removes top elements while the predicate returns `true`.
    ///
    /// Elements are yielded top-first. Iteration stops at the first element
    /// the predicate rejects, which stays in the queue.
    ///
    /// # Example
    ///
    /// ```
    /// use nexus_containers::MinPriorityQueue;
    ///
    /// let mut deadlines: MinPriorityQueue<u64> = [30, 10, 50, 20].into_iter().collect();
    ///
    /// // Everything due at or before t = 25
    /// let due: Vec<_> = deadlines.drain_while(|&t| t <= 25).collect();
    /// assert_eq!(due, vec![10, 20]);
    /// assert_eq!(deadlines.min(), Ok(&30));
    /// ```
    #[inline]
    pub fn drain_while<F>(&mut self, pred: F) -> DrainWhile<'_, T, O, F>
    where
        F: FnMut(&T) -> bool,
    {
        DrainWhile { queue: self, pred }
    }

    /// Consumes the queue, returning its elements top-first.
    pub fn into_sorted_vec(self) -> Vec<T> {
        self.into_iter().collect()
    }

    /// Consumes the queue, returning its elements in internal heap order.
    pub fn into_vec(self) -> Vec<T> {
        self.slots.into_vec()
    }

    // ========================================================================
    // Heap maintenance
    // ========================================================================

    /// Moves the element at `pos` up while it is better than its parent.
    fn swim(&mut self, mut pos: usize) {
        let items = self.slots.as_mut_slice();
        while pos > 0 {
            let parent = (pos - 1) / 2;
            if !self.order.is_better(&items[pos], &items[parent]) {
                break;
            }
            items.swap(pos, parent);
            pos = parent;
        }
    }

    /// Moves the element at `pos` down while some child is better than it.
    fn sink(&mut self, mut pos: usize) {
        let items = self.slots.as_mut_slice();
        let len = items.len();
        loop {
            let left = 2 * pos + 1;
            if left >= len {
                break;
            }
            let right = left + 1;

            // Right child only when strictly better than the left.
            let better = if right < len && self.order.is_better(&items[right], &items[left]) {
                right
            } else {
                left
            };

            if !self.order.is_better(&items[better], &items[pos]) {
                break;
            }
            items.swap(pos, better);
            pos = better;
        }
    }

    /// Verifies the heap property over every parent/child pair.
    #[cfg(test)]
    fn is_heap(&self) -> bool {
        let items = self.slots.as_slice();
        (1..items.len()).all(|k| !self.order.is_better(&items[k], &items[(k - 1) / 2]))
    }
}

impl<T: Clone, O: HeapOrder<T> + Clone> PriorityQueue<T, O> {
    /// Returns an iterator over a snapshot of the queue, top-first.
    ///
    /// The snapshot is an independent copy taken now; draining it never
    /// touches this queue, and each call starts from a fresh copy.
    pub fn iter(&self) -> IntoIter<T, O> {
        self.clone().into_iter()
    }
}

// ============================================================================
// Orientation-specific accessors
// ============================================================================

impl<T: Ord> PriorityQueue<T, MaxOrder> {
    /// Returns the largest element.
    ///
    /// # Errors
    ///
    /// Returns [`Underflow`] if the queue is empty.
    #[inline]
    pub fn max(&self) -> Result<&T, Underflow> {
        self.peek_or(Underflow::new("max"))
    }

    /// Removes and returns the largest element.
    ///
    /// # Errors
    ///
    /// Returns [`Underflow`] if the queue is empty. The queue is unchanged.
    #[inline]
    pub fn del_max(&mut self) -> Result<T, Underflow> {
        self.pop_or(Underflow::new("del_max"))
    }
}

impl<T: Ord> PriorityQueue<T, MinOrder> {
    /// Returns the smallest element.
    ///
    /// # Errors
    ///
    /// Returns [`Underflow`] if the queue is empty.
    #[inline]
    pub fn min(&self) -> Result<&T, Underflow> {
        self.peek_or(Underflow::new("min"))
    }

    /// Removes and returns the smallest element.
    ///
    /// # Errors
    ///
    /// Returns [`Underflow`] if the queue is empty. The queue is unchanged.
    #[inline]
    pub fn del_min(&mut self) -> Result<T, Underflow> {
        self.pop_or(Underflow::new("del_min"))
    }
}

// ============================================================================
// Trait impls
// ============================================================================

impl<T, O: HeapOrder<T> + Default> Default for PriorityQueue<T, O> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone, O: Clone> Clone for PriorityQueue<T, O> {
    fn clone(&self) -> Self {
        Self {
            slots: self.slots.clone(),
            order: self.order.clone(),
        }
    }
}

impl<T: fmt::Debug, O: fmt::Debug> fmt::Debug for PriorityQueue<T, O> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PriorityQueue")
            .field("order", &self.order)
            .field("slots", &self.slots)
            .finish()
    }
}

impl<T, O: HeapOrder<T>> Extend<T> for PriorityQueue<T, O> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.insert(value);
        }
    }
}

impl<T, O: HeapOrder<T> + Default> FromIterator<T> for PriorityQueue<T, O> {
    /// Builds a queue by inserting each element in iteration order.
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut queue = Self::new();
        queue.extend(iter);
        queue
    }
}

impl<T, O: HeapOrder<T> + Default> From<Vec<T>> for PriorityQueue<T, O> {
    fn from(values: Vec<T>) -> Self {
        values.into_iter().collect()
    }
}

impl<T, O: HeapOrder<T> + Default, const N: usize> From<[T; N]> for PriorityQueue<T, O> {
    fn from(values: [T; N]) -> Self {
        values.into_iter().collect()
    }
}

impl<T, O: HeapOrder<T>> IntoIterator for PriorityQueue<T, O> {
    type Item = T;
    type IntoIter = IntoIter<T, O>;

    /// Drains the queue top-first.
    fn into_iter(self) -> IntoIter<T, O> {
        IntoIter { queue: self }
    }
}

// ============================================================================
// Iterators
// ============================================================================

/// Owning iterator that yields elements top-first.
///
/// Created by [`PriorityQueue::iter`] (over a snapshot) or by
/// [`IntoIterator`] (consuming the queue).
pub struct IntoIter<T, O> {
    queue: PriorityQueue<T, O>,
}

impl<T, O: HeapOrder<T>> Iterator for IntoIter<T, O> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<T> {
        self.queue.pop()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.queue.len();
        (len, Some(len))
    }
}

impl<T, O: HeapOrder<T>> ExactSizeIterator for IntoIter<T, O> {}

impl<T, O: HeapOrder<T>> FusedIterator for IntoIter<T, O> {}

impl<T: fmt::Debug, O: fmt::Debug> fmt::Debug for IntoIter<T, O> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("IntoIter").field(&self.queue).finish()
    }
}

/// An iterator that removes top elements while a predicate holds.
///
/// Created by [`PriorityQueue::drain_while`].
pub struct DrainWhile<'a, T, O, F>
where
    F: FnMut(&T) -> bool,
{
    queue: &'a mut PriorityQueue<T, O>,
    pred: F,
}

impl<T, O: HeapOrder<T>, F> Iterator for DrainWhile<'_, T, O, F>
where
    F: FnMut(&T) -> bool,
{
    type Item = T;

    fn next(&mut self) -> Option<T> {
        let top = self.queue.peek()?;
        if (self.pred)(top) {
            self.queue.pop()
        } else {
            None
        }
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, Some(self.queue.len()))
    }
}
