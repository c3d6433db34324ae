use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum LayoutError {
    #[error("Invariant violation: {0}")]
    InvariantViolation(String),
    #[error("Record mismatch: row has {expected} cells, record has {got} fields.")]
    RecordMismatch { expected: usize, got: usize },
    #[error("Canvas reported unusable text metrics ({0:.2} x {1:.2}).")]
    InvalidMetrics(f32, f32),
}

pub mod config;
pub mod interface;
pub mod node_kind;
pub mod nodes;
pub mod painting;
pub mod style;
pub mod text;

// Re-exports for convenience within the layout crate
pub use self::config::LayoutConfig;
pub use self::interface::{Canvas, LayoutNode, RenderOutcome, RenderStatus};
pub use self::node_kind::NodeKind;
pub use self::nodes::{
    DataSource, HorizontalNode, Record, RenderNode, StreamingRow, TableRow, TextNode,
    VerticalNode,
};
pub use self::style::{BoxModel, ComputedStyle};
pub use self::text::TextReader;

pub use quire_types::geometry::{Line, Region, Size};

#[cfg(test)]
mod table_test;
#[cfg(test)]
mod test_utils;
