//! A double-ended queue backed by a doubly-linked list of heap nodes.
//!
//! [`Deque`] supports *O*(1) pushes and pops at both ends, deep copies through
//! [`Clone`], and an *O*(1) [`splice`](Deque::splice) that moves the whole
//! contents of one deque onto the back of another without touching the
//! elements.
//!
//! ```
//! use linked_deque::{deque, Deque};
//!
//! let mut queue: Deque<u32> = deque![2, 3];
//! queue.push_front(1);
//! queue.push_back(4);
//!
//! assert_eq!(queue.pop_front(), Some(1));
//! assert_eq!(queue.back(), Some(&4));
//! assert_eq!(queue.len(), 3);
//! ```
//!
//! Reading or popping an empty deque returns `None`. Node allocation failure
//! aborts in the plain push methods and is reported as an [`AllocError`] by
//! [`Deque::try_push_front`] and [`Deque::try_push_back`].

mod deque;
mod error;
mod macros;

pub use deque::Deque;
pub use error::AllocError;
