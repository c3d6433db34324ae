use crate::Canvas;
use crate::style::ComputedStyle;
use quire_types::geometry::{self, Region};

/// Draws the visible border segments of a finished node.
///
/// `region` is the region the node was offered and `consumed_height` the
/// height it reported, band included. Nothing is drawn for nodes without
/// visible borders.
pub fn paint_borders(
    canvas: &mut dyn Canvas,
    style: &ComputedStyle,
    region: Region,
    consumed_height: i32,
) {
    if !style.border.any_visible() {
        return;
    }

    let rect = style.border_box(region, consumed_height);
    for (stroke, line) in geometry::border_lines(rect, &style.border) {
        canvas.draw_line(stroke, line);
    }
}
