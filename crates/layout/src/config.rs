use quire_types::{Stroke, TextStyle};
use serde::{Deserialize, Serialize};

/// Defaults threaded into node construction.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// Font and brush given to text nodes that don't name their own.
    pub text: TextStyle,
    /// Pen used for borders switched on without an explicit stroke.
    pub border: Stroke,
}
