// Purpose: Double-ended queue built on a doubly-linked chain of individually allocated nodes.

use std::{
    alloc::{self, Layout},
    fmt::{self, Debug},
    hash::{Hash, Hasher},
    marker::PhantomData,
    mem,
    ptr::NonNull,
};

use tracing::trace;

use crate::error::AllocError;

// =====================
// Struct Definitions
// =====================

type Link<T> = Option<NonNull<Node<T>>>;

// The chain is owned front to back: every node is reachable from `head`
// through `next`. `prev` is only a back-reference and never frees anything.
struct Node<T> {
    value: T,
    prev: Link<T>,
    next: Link<T>,
}

/// A double-ended queue backed by a doubly-linked list.
///
/// Pushing and popping at either end is *O*(1), and [`splice`](Deque::splice)
/// moves the whole contents of another deque onto the back in *O*(1) by
/// relinking nodes rather than moving elements.
///
/// Accessing or popping from an empty deque is not an error: [`front`],
/// [`back`], [`pop_front`] and [`pop_back`] return `None` instead.
///
/// [`front`]: Deque::front
/// [`back`]: Deque::back
/// [`pop_front`]: Deque::pop_front
/// [`pop_back`]: Deque::pop_back
pub struct Deque<T> {
    head: Link<T>,
    tail: Link<T>,
    len: usize,
    _marker: PhantomData<Box<Node<T>>>,
}

/// Borrowing walk over the chain, head to tail.
struct Values<'a, T> {
    next: Link<T>,
    remaining: usize,
    _marker: PhantomData<&'a Node<T>>,
}

// =====================
// Inherent impl blocks
// =====================

impl<T> Node<T> {
    fn layout() -> Layout {
        Layout::new::<Node<T>>()
    }

    /// Allocates a detached node, handing `value` back if the allocator refuses.
    fn try_alloc(value: T) -> Result<NonNull<Node<T>>, AllocError<T>> {
        let layout = Self::layout();

        // A node always carries two links, so the layout is never zero-sized.
        let raw = unsafe { alloc::alloc(layout) } as *mut Node<T>;

        match NonNull::new(raw) {
            Some(ptr) => {
                unsafe {
                    ptr.as_ptr().write(Node {
                        value,
                        prev: None,
                        next: None,
                    });
                }
                Ok(ptr)
            }
            None => Err(AllocError::new(value, layout)),
        }
    }

    fn alloc(value: T) -> NonNull<Node<T>> {
        Self::try_alloc(value).unwrap_or_else(|err| alloc::handle_alloc_error(err.layout()))
    }

    /// Frees a node and moves its value out.
    ///
    /// # Safety
    /// `ptr` must come from [`Node::alloc`] / [`Node::try_alloc`], must already be
    /// unlinked from any deque, and must not be used again.
    unsafe fn into_value(ptr: NonNull<Node<T>>) -> T {
        // The allocation used `Layout::new::<Node<T>>()` with the global
        // allocator, which is exactly what `Box` expects.
        let node = unsafe { Box::from_raw(ptr.as_ptr()) };
        node.value
    }
}

impl<T> Deque<T> {
    /// Creates an empty deque. Does not allocate.
    pub const fn new() -> Self {
        Self {
            head: None,
            tail: None,
            len: 0,
            _marker: PhantomData,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn front(&self) -> Option<&T> {
        self.head.map(|node| unsafe { &(*node.as_ptr()).value })
    }

    pub fn front_mut(&mut self) -> Option<&mut T> {
        self.head.map(|node| unsafe { &mut (*node.as_ptr()).value })
    }

    pub fn back(&self) -> Option<&T> {
        self.tail.map(|node| unsafe { &(*node.as_ptr()).value })
    }

    pub fn back_mut(&mut self) -> Option<&mut T> {
        self.tail.map(|node| unsafe { &mut (*node.as_ptr()).value })
    }

    /// Inserts `value` before the current front.
    ///
    /// Aborts through [`handle_alloc_error`](alloc::handle_alloc_error) if the
    /// node cannot be allocated; use [`try_push_front`](Deque::try_push_front)
    /// to get the failure back instead.
    pub fn push_front(&mut self, value: T) {
        self.link_front(Node::alloc(value));
    }

    /// Inserts `value` after the current back.
    pub fn push_back(&mut self, value: T) {
        self.link_back(Node::alloc(value));
    }

    /// Like [`push_front`](Deque::push_front), but reports allocation failure.
    ///
    /// # Errors
    /// Returns [`AllocError`] holding `value` if the node could not be
    /// allocated. The deque is unchanged in that case.
    pub fn try_push_front(&mut self, value: T) -> Result<(), AllocError<T>> {
        let node = Node::try_alloc(value)?;
        self.link_front(node);
        Ok(())
    }

    /// Like [`push_back`](Deque::push_back), but reports allocation failure.
    ///
    /// # Errors
    /// Returns [`AllocError`] holding `value` if the node could not be
    /// allocated. The deque is unchanged in that case.
    pub fn try_push_back(&mut self, value: T) -> Result<(), AllocError<T>> {
        let node = Node::try_alloc(value)?;
        self.link_back(node);
        Ok(())
    }

    /// Removes the first element and returns it, or `None` if the deque is empty.
    pub fn pop_front(&mut self) -> Option<T> {
        let head = self.head?;

        unsafe {
            self.head = (*head.as_ptr()).next;
            match self.head {
                Some(new_head) => (*new_head.as_ptr()).prev = None,
                None => self.tail = None,
            }
        }
        self.len -= 1;

        Some(unsafe { Node::into_value(head) })
    }

    /// Removes the last element and returns it, or `None` if the deque is empty.
    pub fn pop_back(&mut self) -> Option<T> {
        let tail = self.tail?;

        unsafe {
            self.tail = (*tail.as_ptr()).prev;
            match self.tail {
                Some(new_tail) => (*new_tail.as_ptr()).next = None,
                None => self.head = None,
            }
        }
        self.len -= 1;

        Some(unsafe { Node::into_value(tail) })
    }

    /// Drops every element. A no-op on an empty deque.
    pub fn clear(&mut self) {
        let released = self.release();
        if released != 0 {
            trace!(released, "clear");
        }
    }

    /// Moves every element of `other` onto the back of `self`, keeping their
    /// order, and leaves `other` empty.
    ///
    /// No element is moved or cloned; the two chains are relinked in *O*(1).
    ///
    /// ```
    /// use linked_deque::deque;
    ///
    /// let mut a = deque![1, 2, 3];
    /// let mut b = deque![4, 5];
    /// a.splice(&mut b);
    ///
    /// assert_eq!(a, [1, 2, 3, 4, 5]);
    /// assert!(b.is_empty());
    /// ```
    pub fn splice(&mut self, other: &mut Deque<T>) {
        let Some(other_head) = other.head.take() else {
            trace!(len = self.len, "splice: source empty");
            return;
        };
        let other_tail = other.tail.take();
        let moved = mem::take(&mut other.len);

        match self.tail {
            None => {
                self.head = Some(other_head);
                self.tail = other_tail;
                self.len = moved;
                trace!(moved, "splice: adopted source chain");
            }
            Some(tail) => {
                unsafe {
                    (*tail.as_ptr()).next = Some(other_head);
                    (*other_head.as_ptr()).prev = Some(tail);
                }
                self.tail = other_tail;
                self.len += moved;
                trace!(moved, len = self.len, "splice: relinked onto tail");
            }
        }
    }

    pub fn contains(&self, value: &T) -> bool
    where
        T: PartialEq,
    {
        self.values().any(|v| v == value)
    }

    /// Copies the elements, front to back, into a `Vec`.
    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.values().cloned().collect()
    }

    fn link_front(&mut self, node: NonNull<Node<T>>) {
        unsafe {
            (*node.as_ptr()).prev = None;
            (*node.as_ptr()).next = self.head;
            match self.head {
                Some(head) => (*head.as_ptr()).prev = Some(node),
                None => self.tail = Some(node),
            }
        }
        self.head = Some(node);
        self.len += 1;
    }

    fn link_back(&mut self, node: NonNull<Node<T>>) {
        unsafe {
            (*node.as_ptr()).next = None;
            (*node.as_ptr()).prev = self.tail;
            match self.tail {
                Some(tail) => (*tail.as_ptr()).next = Some(node),
                None => self.head = Some(node),
            }
        }
        self.tail = Some(node);
        self.len += 1;
    }

    // Detaches the whole chain first, so a panicking element destructor can at
    // worst leak the rest of the chain, never free a node twice.
    fn release(&mut self) -> usize {
        let released = mem::take(&mut self.len);
        let mut cursor = self.head.take();
        self.tail = None;

        while let Some(node) = cursor {
            unsafe {
                cursor = (*node.as_ptr()).next;
                drop(Node::into_value(node));
            }
        }
        released
    }

    fn values(&self) -> Values<'_, T> {
        Values {
            next: self.head,
            remaining: self.len,
            _marker: PhantomData,
        }
    }
}

// =====================
// Trait Implementations
// =====================

impl<'a, T> Iterator for Values<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.next.map(|node| unsafe {
            let node = &*node.as_ptr();
            self.next = node.next;
            self.remaining -= 1;
            &node.value
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> Drop for Deque<T> {
    fn drop(&mut self) {
        self.release();
    }
}

impl<T> Default for Deque<T> {
    fn default() -> Self {
        Self::new()
    }
}

// Nodes are uniquely owned by one deque, so thread-safety follows `T`.
unsafe impl<T: Send> Send for Deque<T> {}
unsafe impl<T: Sync> Sync for Deque<T> {}

impl<T: Clone> Clone for Deque<T> {
    fn clone(&self) -> Self {
        self.values().cloned().collect()
    }

    /// Releases the current chain, then deep-copies `source` into `self`.
    fn clone_from(&mut self, source: &Self) {
        let released = self.release();
        self.extend(source.values().cloned());
        trace!(released, copied = self.len, "clone_from");
    }
}

impl<T> Extend<T> for Deque<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.push_back(value);
        }
    }
}

impl<'a, T: Copy + 'a> Extend<&'a T> for Deque<T> {
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        for value in iter {
            self.push_back(*value);
        }
    }
}

impl<T> FromIterator<T> for Deque<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut deque = Deque::new();
        deque.extend(iter);
        deque
    }
}

impl<T, const N: usize> From<[T; N]> for Deque<T> {
    fn from(values: [T; N]) -> Self {
        values.into_iter().collect()
    }
}

impl<T> From<Vec<T>> for Deque<T> {
    fn from(values: Vec<T>) -> Self {
        values.into_iter().collect()
    }
}

impl<T: PartialEq> PartialEq for Deque<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.values().eq(other.values())
    }
}

impl<T: Eq> Eq for Deque<T> {}

impl<T: PartialEq> PartialEq<[T]> for Deque<T> {
    fn eq(&self, other: &[T]) -> bool {
        self.len == other.len() && self.values().eq(other.iter())
    }
}

impl<T: PartialEq, const N: usize> PartialEq<[T; N]> for Deque<T> {
    fn eq(&self, other: &[T; N]) -> bool {
        *self == other[..]
    }
}

impl<T: PartialEq> PartialEq<Vec<T>> for Deque<T> {
    fn eq(&self, other: &Vec<T>) -> bool {
        *self == other[..]
    }
}

impl<T: Hash> Hash for Deque<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.len.hash(state);
        for value in self.values() {
            value.hash(state);
        }
    }
}

impl<T: Debug> Debug for Deque<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.values()).finish()
    }
}

// =====================
// Tests
// =====================
