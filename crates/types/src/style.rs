//! Style references and box decorations.
//!
//! Fonts, brushes and pens are owned by the host. The engine only carries
//! opaque names for them and hands them back to the canvas unexamined.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Horizontal placement of content narrower than its allotted width.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "kebab-case")]
pub enum Alignment {
    #[default]
    Left,
    Right,
    Center,
}

/// An opaque reference to a host-side font, brush or pen.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(transparent)]
pub struct StyleRef(String);

impl StyleRef {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn name(&self) -> &str {
        &self.0
    }
}

impl Default for StyleRef {
    fn default() -> Self {
        Self("default".to_string())
    }
}

impl fmt::Display for StyleRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for StyleRef {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

/// Font and brush used to draw a run of text.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(default)]
pub struct TextStyle {
    pub font: StyleRef,
    pub brush: StyleRef,
}

impl TextStyle {
    pub fn new(font: impl Into<StyleRef>, brush: impl Into<StyleRef>) -> Self {
        Self {
            font: font.into(),
            brush: brush.into(),
        }
    }
}

/// A pen for drawing lines.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(default)]
pub struct Stroke {
    pub pen: StyleRef,
    pub width: i32,
}

impl Default for Stroke {
    fn default() -> Self {
        Self {
            pen: StyleRef::default(),
            width: 1,
        }
    }
}

/// One side of a border.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(default)]
pub struct BorderSegment {
    pub show: bool,
    pub stroke: Stroke,
}

impl BorderSegment {
    pub fn visible(stroke: Stroke) -> Self {
        Self { show: true, stroke }
    }

    pub fn hidden() -> Self {
        Self::default()
    }

    /// A segment is drawn only when it is shown and has a positive width.
    pub fn is_visible(&self) -> bool {
        self.show && self.stroke.width > 0
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(default)]
pub struct Borders {
    pub top: BorderSegment,
    pub left: BorderSegment,
    pub right: BorderSegment,
    pub bottom: BorderSegment,
}

impl Borders {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn all(stroke: Stroke) -> Self {
        Self {
            top: BorderSegment::visible(stroke.clone()),
            left: BorderSegment::visible(stroke.clone()),
            right: BorderSegment::visible(stroke.clone()),
            bottom: BorderSegment::visible(stroke),
        }
    }

    pub fn any_visible(&self) -> bool {
        [&self.top, &self.left, &self.right, &self.bottom]
            .iter()
            .any(|s| s.is_visible())
    }
}
