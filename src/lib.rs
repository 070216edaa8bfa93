pub mod error;
pub mod sorting;

pub use error::SortError;
