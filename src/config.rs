//! Physical page configuration.

use crate::driver::PageBoundary;
use crate::error::PrintError;
use quire_layout::LayoutConfig;
use quire_types::geometry::{self, Region};
use quire_types::EdgeSizes;
use serde::de::{self, Deserializer};
use serde::ser::{SerializeMap, Serializer};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Physical page dimensions in output units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PageSize {
    #[default]
    A4,
    Letter,
    Legal,
    Custom { width: i32, height: i32 },
}

impl PageSize {
    pub fn dimensions(&self) -> (i32, i32) {
        match self {
            PageSize::A4 => (595, 842),
            PageSize::Letter => (612, 792),
            PageSize::Legal => (612, 1008),
            PageSize::Custom { width, height } => (*width, *height),
        }
    }

    /// Parse a page size name (e.g., "A4", "Letter", "Legal")
    fn parse(s: &str) -> Result<Self, String> {
        match s.to_lowercase().as_str() {
            "a4" => Ok(PageSize::A4),
            "letter" => Ok(PageSize::Letter),
            "legal" => Ok(PageSize::Legal),
            _ => Err(format!("Unknown page size: {}", s)),
        }
    }
}

impl Serialize for PageSize {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            PageSize::A4 => serializer.serialize_str("A4"),
            PageSize::Letter => serializer.serialize_str("Letter"),
            PageSize::Legal => serializer.serialize_str("Legal"),
            PageSize::Custom { width, height } => {
                let mut map = serializer.serialize_map(Some(2))?;
                map.serialize_entry("width", width)?;
                map.serialize_entry("height", height)?;
                map.end()
            }
        }
    }
}

impl<'de> Deserialize<'de> for PageSize {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum PageSizeDef {
            Str(String),
            Map { width: i32, height: i32 },
        }

        match PageSizeDef::deserialize(deserializer)? {
            PageSizeDef::Str(s) => Self::parse(&s).map_err(de::Error::custom),
            PageSizeDef::Map { width, height } if width > 0 && height > 0 => {
                Ok(PageSize::Custom { width, height })
            }
            PageSizeDef::Map { width, height } => Err(de::Error::custom(format!(
                "Page dimensions must be positive, got {}x{}",
                width, height
            ))),
        }
    }
}

/// Page size and printable area.
///
/// A non-zero `gutter` is added to the left margin of even pages and the
/// right margin of odd pages (page indices start at 0).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageSettings {
    pub size: PageSize,
    pub margins: EdgeSizes,
    pub gutter: i32,
}

impl PageSettings {
    pub fn new(size: PageSize, margins: EdgeSizes) -> Self {
        Self {
            size,
            margins,
            gutter: 0,
        }
    }

    pub fn with_gutter(mut self, gutter: i32) -> Self {
        self.gutter = gutter;
        self
    }

    /// Margins in effect on the given page.
    pub fn margins_for(&self, page_index: usize) -> EdgeSizes {
        let mut margins = self.margins;
        if page_index % 2 == 0 {
            margins.left += self.gutter;
        } else {
            margins.right += self.gutter;
        }
        margins
    }
}

impl PageBoundary for PageSettings {
    fn content_region(&self, page_index: usize) -> Region {
        let (width, height) = self.size.dimensions();
        geometry::inset(
            Region::new(0, 0, width, height),
            &self.margins_for(page_index),
        )
    }
}

/// Everything a print job is configured with.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PrintConfig {
    pub page: PageSettings,
    pub layout: LayoutConfig,
}

impl PrintConfig {
    pub fn from_json(json: &str) -> Result<Self, PrintError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, PrintError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }
}
