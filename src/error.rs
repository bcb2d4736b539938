use core::fmt;

/// Misuse of a [`ChunkedDeque`](crate::ChunkedDeque) detected by one of its unchecked
/// operations.
///
/// Unchecked operations panic with this error's message. Emptiness has non-panicking
/// counterparts (`try_pop_front`, `try_pop_back`, `front`, `back`); index misuse does not.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DequeError {
    /// The deque holds no element.
    Empty,
    /// `index` is outside `[0, len)`.
    OutOfRange {
        /// The offending index.
        index: usize,
        /// Length of the deque at the time of the call.
        len: usize,
    },
}

impl DequeError {
    #[cold]
    #[track_caller]
    pub(crate) fn raise(self) -> ! {
        panic!("{}", self)
    }
}

impl fmt::Display for DequeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DequeError::Empty => f.write_str("deque is empty"),
            DequeError::OutOfRange { index, len } => {
                write!(f, "index out of range: {} (len is {})", index, len)
            }
        }
    }
}

impl std::error::Error for DequeError {}
