// nexus-containers/src/error.rs

//! Error types for container operations.

use core::fmt;

/// A read or removal was attempted on an empty container.
///
/// Returned by the priority queue top accessors (`max`, `min`, `del_max`,
/// `del_min`, `top`, `extract_top`) and by the randomized queue's `dequeue`
/// and `sample`. The container is never modified when this is returned.
///
/// # Example
///
/// ```
/// use nexus_containers::{MaxPriorityQueue, Underflow};
///
/// let mut pq: MaxPriorityQueue<u64> = MaxPriorityQueue::new();
/// let err = pq.del_max().unwrap_err();
/// assert_eq!(err.op(), "del_max");
/// assert_eq!(err.to_string(), "del_max: container is empty");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Underflow {
    op: &'static str,
}

impl Underflow {
    #[inline]
    pub(crate) const fn new(op: &'static str) -> Self {
        Self { op }
    }

    /// Name of the operation that found the container empty.
    #[inline]
    pub const fn op(&self) -> &'static str {
        self.op
    }
}

impl fmt::Display for Underflow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: container is empty", self.op)
    }
}

impl std::error::Error for Underflow {}
