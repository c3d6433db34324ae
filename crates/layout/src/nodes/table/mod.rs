//! Rows of text cells, and the streaming row that refills itself from a
//! data source.

mod row;
mod streaming;

pub use row::TableRow;
pub use streaming::{DataSource, StreamingRow};

/// One row of field values, mapped onto cells in order.
pub type Record = Vec<String>;
