use std::{
    alloc::Layout,
    fmt::{self, Debug, Display, Formatter},
};

/// Returned by the fallible push methods when a node could not be allocated.
///
/// The value that was being inserted is handed back untouched, and the deque
/// is left exactly as it was before the call.
pub struct AllocError<T> {
    value: T,
    layout: Layout,
}

impl<T> AllocError<T> {
    pub(crate) fn new(value: T, layout: Layout) -> Self {
        Self { value, layout }
    }

    /// The layout of the node allocation that failed.
    pub fn layout(&self) -> Layout {
        self.layout
    }

    /// Takes back the value that could not be inserted.
    pub fn into_inner(self) -> T {
        self.value
    }
}

// Hide the contained element
impl<T> Debug for AllocError<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("AllocError")
            .field("layout", &self.layout)
            .finish_non_exhaustive()
    }
}

impl<T> Display for AllocError<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "failed to allocate a deque node ({} bytes, align {})",
            self.layout.size(),
            self.layout.align()
        )
    }
}

impl<T> std::error::Error for AllocError<T> {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_hands_value_back() {
        let layout = Layout::from_size_align(24, 8).unwrap();
        let err = AllocError::new(String::from("kept"), layout);

        assert_eq!(err.layout(), layout);
        assert_eq!(err.to_string(), "failed to allocate a deque node (24 bytes, align 8)");
        assert_eq!(format!("{err:?}"), format!("AllocError {{ layout: {layout:?}, .. }}"));
        assert_eq!(err.into_inner(), "kept");
    }
}
