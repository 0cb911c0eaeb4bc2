/// Builds a [`Deque`](crate::Deque) from a list of elements, front to back.
///
/// ```
/// use linked_deque::deque;
///
/// let numbers = deque![1, 2, 3];
/// assert_eq!(numbers.front(), Some(&1));
///
/// let empty: linked_deque::Deque<u8> = deque![];
/// assert!(empty.is_empty());
/// ```
#[macro_export]
macro_rules! deque {
    () => {
        $crate::Deque::new()
    };
    ($($value:expr),+ $(,)?) => {
        $crate::Deque::from([$($value),+])
    };
}
