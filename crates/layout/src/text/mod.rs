//! Line breaking for monospaced text.

mod reader;

pub use reader::TextReader;
