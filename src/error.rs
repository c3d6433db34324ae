use quire_layout::LayoutError;
use quire_types::Region;
use thiserror::Error;

/// Everything that can stop a print job.
///
/// None of these are retried: pages already handed to the surface stay
/// valid, the remaining pages are abandoned.
#[derive(Error, Debug)]
pub enum PrintError {
    #[error(
        "Content does not fit on page {page}: nothing could be placed in a {}x{} region.",
        .region.width,
        .region.height
    )]
    SizeExceeded { page: usize, region: Region },

    #[error("Layout failed: {0}")]
    Layout(#[from] LayoutError),

    #[error("Configuration error: {0}")]
    Config(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Document is invalid: {0}")]
    Document(String),
}
