//! Growable priority queues and a randomized queue.
//!
//! This crate provides two in-memory containers intended as building blocks
//! inside a larger, caller-owned process:
//!
//! | Structure | Use Case | Key Operations |
//! |-----------|----------|----------------|
//! | [`MaxPriorityQueue`] | Largest-first scheduling | O(log n) insert / `del_max`, O(1) `max` |
//! | [`MinPriorityQueue`] | Deadlines, timers | O(log n) insert / `del_min`, O(1) `min` |
//! | [`RandomizedQueue`] | Shuffled work, sampling | O(1) amortized enqueue / `dequeue` / `sample` |
//!
//! Both priority queues are the same binary-heap engine, [`PriorityQueue`],
//! instantiated with a different [`HeapOrder`]. Supply your own order to get
//! any other orientation.
//!
//! # Quick Start
//!
//! ```
//! use nexus_containers::{MaxPriorityQueue, MinPriorityQueue, RandomizedQueue};
//!
//! let mut max: MaxPriorityQueue<u64> = [1, 5, 2, 3].into();
//! assert_eq!(max.del_max(), Ok(5));
//! assert_eq!(max.del_max(), Ok(3));
//!
//! let mut min: MinPriorityQueue<u64> = [1, 5, 2, 3].into();
//! assert_eq!(min.del_min(), Ok(1));
//! assert_eq!(min.del_min(), Ok(2));
//!
//! let mut bag: RandomizedQueue<u64> = [1, 4, 2, 3].into();
//! assert_eq!(bag.len(), 4);
//! let drawn = bag.dequeue().unwrap();
//! assert!((1..=4).contains(&drawn));
//! ```
//!
//! # Storage Policy
//!
//! Both containers keep live elements packed in a single array whose
//! capacity doubles just before an insert would overflow it and halves when
//! a removal leaves it less than a quarter full. Capacity never drops below
//! one slot. Resizes are reported at `trace` level through the [`log`]
//! facade.
//!
//! # Errors
//!
//! Reading or removing from an empty container returns [`Underflow`] and
//! leaves the container untouched. Nothing else can fail: elements are
//! plain values (never null) and construction takes any `IntoIterator`.
//!
//! # Iteration
//!
//! `iter()` on either container drains an independent snapshot taken at the
//! call, so the live container is never modified or borrowed by the
//! iterator. Consuming a container with `into_iter()` drains it directly.
//!
//! # Thread Safety
//!
//! Containers are plain single-owner values. They are `Send`/`Sync`
//! whenever their element (and generator) types are; concurrent mutation
//! needs external synchronization.

#![warn(missing_docs)]

mod capacity;
pub mod error;
pub mod heap;
pub mod order;
pub mod randomized;

pub use error::Underflow;
pub use heap::{MaxPriorityQueue, MinPriorityQueue, PriorityQueue};
pub use order::{HeapOrder, MaxOrder, MinOrder, OrderFn};
pub use randomized::RandomizedQueue;
