//! Heap orderings.
//!
//! A [`PriorityQueue`](crate::PriorityQueue) is generic over a [`HeapOrder`],
//! the single comparison its swim and sink loops consult. The crate ships
//! [`MaxOrder`] and [`MinOrder`]; any other total order can be supplied by
//! implementing the trait or wrapping a closure in [`OrderFn`].

/// Decides which of two elements belongs closer to the top of a heap.
///
/// # Contract
///
/// `is_better` must be a strict order consistent with some total order on
/// `T`: irreflexive (`is_better(a, a)` is `false`), asymmetric, and
/// transitive. Equal elements compare `false` in both directions so the heap
/// never swaps them needlessly.
///
/// # Example
///
/// ```
/// use nexus_containers::{HeapOrder, PriorityQueue};
///
/// /// Shortest string first.
/// #[derive(Default)]
/// struct Shortest;
///
/// impl HeapOrder<String> for Shortest {
///     fn is_better(&self, a: &String, b: &String) -> bool {
///         a.len() < b.len()
///     }
/// }
///
/// let mut pq: PriorityQueue<String, Shortest> = PriorityQueue::new();
/// pq.insert("three".into());
/// pq.insert("a".into());
/// pq.insert("to".into());
/// assert_eq!(pq.extract_top().unwrap(), "a");
/// ```
pub trait HeapOrder<T: ?Sized> {
    /// Returns `true` if `a` should sit above `b` in the heap.
    fn is_better(&self, a: &T, b: &T) -> bool;
}

/// Largest element on top.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct MaxOrder;

impl<T: Ord + ?Sized> HeapOrder<T> for MaxOrder {
    #[inline]
    fn is_better(&self, a: &T, b: &T) -> bool {
        a > b
    }
}

/// Smallest element on top.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct MinOrder;

impl<T: Ord + ?Sized> HeapOrder<T> for MinOrder {
    #[inline]
    fn is_better(&self, a: &T, b: &T) -> bool {
        a < b
    }
}

/// Adapts a `Fn(&T, &T) -> bool` "is better" closure into a [`HeapOrder`].
///
/// ```
/// use nexus_containers::{OrderFn, PriorityQueue};
///
/// // Max-heap on the second tuple field.
/// let order = OrderFn(|a: &(u32, u32), b: &(u32, u32)| a.1 > b.1);
/// let mut pq = PriorityQueue::with_order(order);
/// pq.insert((1, 10));
/// pq.insert((2, 30));
/// pq.insert((3, 20));
/// assert_eq!(pq.top().unwrap(), &(2, 30));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct OrderFn<F>(pub F);

impl<T: ?Sized, F> HeapOrder<T> for OrderFn<F>
where
    F: Fn(&T, &T) -> bool,
{
    #[inline]
    fn is_better(&self, a: &T, b: &T) -> bool {
        (self.0)(a, b)
    }
}
