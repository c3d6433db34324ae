pub mod edges;
pub mod geometry;
pub mod style;

pub use edges::EdgeSizes;
pub use geometry::{Line, Region, Size};
pub use style::{Alignment, BorderSegment, Borders, Stroke, StyleRef, TextStyle};
