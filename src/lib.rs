//! Page-by-page printing of resumable layout trees.
//!
//! The layout engine lives in `quire-layout`; this crate adds the page
//! driver, page configuration, a JSON document format and a character-grid
//! host that renders pages to plain text.

pub mod config;
pub mod document;
pub mod driver;
pub mod error;
pub mod grid;

pub use config::{PageSettings, PageSize, PrintConfig};
pub use document::Document;
pub use driver::{PageBoundary, PageDriver, PageStatus, PrintSurface};
pub use error::PrintError;
pub use grid::{GridCanvas, GridSurface};

pub use quire_layout as layout;
pub use quire_types as types;
