use quire_types::geometry::{self, Region};
use quire_types::{Alignment, Borders, EdgeSizes};

// Grouped Style Structures

/// Spacing and configured extent of a node.
///
/// A width or height of `0` means "intrinsic": the node takes whatever the
/// region it is offered allows.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct BoxModel {
    pub margin: EdgeSizes,
    pub padding: EdgeSizes,
    pub width: i32,
    pub height: i32,
}

/// Everything a node carries besides its content.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct ComputedStyle {
    pub box_model: BoxModel,
    pub border: Borders,
    pub alignment: Alignment,
}

impl ComputedStyle {
    pub fn margin_x(&self) -> i32 {
        self.box_model.margin.horizontal()
    }

    pub fn margin_y(&self) -> i32 {
        self.box_model.margin.vertical()
    }

    pub fn padding_x(&self) -> i32 {
        self.box_model.padding.horizontal()
    }

    pub fn padding_y(&self) -> i32 {
        self.box_model.padding.vertical()
    }

    /// Horizontal space taken by margin and padding together.
    pub fn band_x(&self) -> i32 {
        self.margin_x() + self.padding_x()
    }

    /// Vertical space taken by margin and padding together. A render that
    /// placed no content still reports this much height.
    pub fn band_y(&self) -> i32 {
        self.margin_y() + self.padding_y()
    }

    /// `region` narrowed to the configured width, if one is set and smaller.
    pub fn sized_region(&self, region: Region) -> Region {
        match self.box_model.width {
            width if width > 0 && width < region.width => region.with_width(width),
            _ => region,
        }
    }

    /// Region inset by padding only; borders are drawn around it.
    pub fn padded_region(&self, region: Region) -> Region {
        geometry::inset(region, &self.box_model.padding)
    }

    /// Region left for content: inset by padding, then by margin.
    pub fn content_region(&self, region: Region) -> Region {
        geometry::inset(self.padded_region(region), &self.box_model.margin)
    }

    /// The rectangle the borders enclose once `consumed_height` units of the
    /// offered `region` (band included) have been used.
    pub fn border_box(&self, region: Region, consumed_height: i32) -> Region {
        self.padded_region(region)
            .with_height(consumed_height - self.padding_y())
    }
}
