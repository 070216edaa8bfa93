use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortError {
    /// `arr[index]` and `arr[index + 1]` have no defined order (e.g. a NaN).
    IncomparableElements { index: usize },
}

impl fmt::Display for SortError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortError::IncomparableElements { index } => write!(
                f,
                "Incomparable elements at positions {} and {}",
                index,
                index + 1
            ),
        }
    }
}

impl std::error::Error for SortError {}
