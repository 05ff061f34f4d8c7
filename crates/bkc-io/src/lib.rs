//! CSV/text I/O for the balanced-clustering engine: point-matrix
//! ingestion, assignment/center output, and the append-only run
//! summary. None of this is part of the core algorithm; it exists so
//! the CLI driver has something to read and write.

mod assignments;
mod centers;
pub mod error;
mod matrix;
mod summary;

pub use assignments::write_assignments;
pub use centers::write_centers;
pub use error::{IoError, IoResult};
pub use matrix::read_points;
pub use summary::{SummaryRecord, append_summary};
