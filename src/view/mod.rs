//! Pure derivations rendered by the interface from the current result list.

mod stats;
mod table;

pub use stats::{split_width, Stats};
pub use table::{result_rows, ResultRow};
