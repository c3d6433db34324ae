//! Primitives for position, size and spacing, plus the pure box-model math
//! used by every node.

use crate::edges::EdgeSizes;
use crate::style::{Alignment, Borders, Stroke};

/// An axis-aligned rectangle in output units.
///
/// Regions are passed by value into render calls. Mutated copies describe
/// the space still available; the caller's rectangle is never touched.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Region {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Region {
    pub fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn left(&self) -> i32 {
        self.x
    }

    pub fn top(&self) -> i32 {
        self.y
    }

    pub fn right(&self) -> i32 {
        self.x + self.width
    }

    pub fn bottom(&self) -> i32 {
        self.y + self.height
    }

    /// Horizontal midpoint, rounded toward zero.
    pub fn center_x(&self) -> i32 {
        (self.left() + self.right()) / 2
    }

    pub fn is_empty(&self) -> bool {
        self.width <= 0 || self.height <= 0
    }

    /// Moves the top edge down by `dy`, shrinking the height by the same amount.
    pub fn consume_top(&mut self, dy: i32) {
        self.y += dy;
        self.height -= dy;
    }

    /// A copy of this region with the given width, keeping the origin.
    pub fn with_width(self, width: i32) -> Self {
        Self { width, ..self }
    }

    /// A copy of this region with the given height, keeping the origin.
    pub fn with_height(self, height: i32) -> Self {
        Self { height, ..self }
    }
}

/// A measured extent, as reported by a canvas.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub fn zero() -> Self {
        Self {
            width: 0.0,
            height: 0.0,
        }
    }
}

/// A straight line segment between two points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Line {
    pub x1: i32,
    pub y1: i32,
    pub x2: i32,
    pub y2: i32,
}

impl Line {
    pub fn new(x1: i32, y1: i32, x2: i32, y2: i32) -> Self {
        Self { x1, y1, x2, y2 }
    }
}

/// Shrinks `region` by `edges` on all four sides.
///
/// Margin and padding are the same thing from a mathematical point of view,
/// so insetting by one and then the other is additive.
pub fn inset(region: Region, edges: &EdgeSizes) -> Region {
    Region {
        x: region.x + edges.left,
        y: region.y + edges.top,
        width: region.width - edges.horizontal(),
        height: region.height - edges.vertical(),
    }
}

/// The x coordinate at which content of `content_width` starts inside `region`.
pub fn align_offset(content_width: f32, region: Region, alignment: Alignment) -> f32 {
    match alignment {
        Alignment::Left => region.left() as f32,
        Alignment::Right => region.right() as f32 - content_width,
        Alignment::Center => region.center_x() as f32 - content_width / 2.0,
    }
}

/// Shifts and shrinks `region` horizontally so that content `owned_width`
/// wide sits at `alignment` inside it.
///
/// Content wider than the region is left where it is.
pub fn align_region(region: Region, owned_width: i32, alignment: Alignment) -> Region {
    let diff = (region.width - owned_width).max(0);
    let shift = match alignment {
        Alignment::Left => 0,
        Alignment::Right => diff,
        Alignment::Center => diff / 2,
    };
    Region {
        x: region.x + shift,
        width: region.width - shift,
        ..region
    }
}

/// Line coordinates for each visible border segment of `rect`.
///
/// Lines run along the outermost units of the rectangle, so a border drawn
/// on a character grid stays inside the box it belongs to.
pub fn border_lines<'b>(rect: Region, borders: &'b Borders) -> Vec<(&'b Stroke, Line)> {
    let mut lines = Vec::new();
    if rect.is_empty() {
        return lines;
    }

    let left = rect.left();
    let top = rect.top();
    let right = rect.right() - 1;
    let bottom = rect.bottom() - 1;

    if borders.top.is_visible() {
        lines.push((&borders.top.stroke, Line::new(left, top, right, top)));
    }
    if borders.bottom.is_visible() {
        lines.push((&borders.bottom.stroke, Line::new(left, bottom, right, bottom)));
    }
    if borders.left.is_visible() {
        lines.push((&borders.left.stroke, Line::new(left, top, left, bottom)));
    }
    if borders.right.is_visible() {
        lines.push((&borders.right.stroke, Line::new(right, top, right, bottom)));
    }
    lines
}
