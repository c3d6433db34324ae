use super::RenderNode;
use crate::LayoutError;
use crate::interface::{Canvas, LayoutNode, RenderOutcome, RenderStatus};
use crate::node_kind::NodeKind;
use crate::painting::box_painter::paint_borders;
use crate::style::ComputedStyle;
use quire_types::geometry::Region;

/// Stacks children top to bottom.
///
/// `cursor` is the index of the first child that has not reported `Done`.
/// It only moves forward, so a child is never emitted twice and never
/// skipped.
#[derive(Debug, Default)]
pub struct VerticalNode {
    children: Vec<RenderNode>,
    cursor: usize,
    status: RenderStatus,
    style: ComputedStyle,
}

impl VerticalNode {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_style(style: ComputedStyle) -> Self {
        Self {
            style,
            ..Default::default()
        }
    }

    pub fn from_children(children: Vec<RenderNode>) -> Self {
        Self {
            children,
            ..Default::default()
        }
    }

    /// Appends a child and returns its index. A finished node becomes
    /// incomplete again, so the new child is rendered on the next call.
    pub fn add_child(&mut self, child: impl Into<RenderNode>) -> usize {
        self.children.push(child.into());
        if self.status == RenderStatus::Done {
            self.status = RenderStatus::Incomplete;
        }
        self.children.len() - 1
    }

    pub fn with_child(mut self, child: impl Into<RenderNode>) -> Self {
        self.add_child(child);
        self
    }

    /// Removes every child and forgets all progress.
    pub fn clear_children(&mut self) {
        self.children.clear();
        self.cursor = 0;
        self.status = RenderStatus::NotStarted;
    }

    pub fn children(&self) -> &[RenderNode] {
        &self.children
    }

    pub fn child_mut(&mut self, index: usize) -> Option<&mut RenderNode> {
        self.children.get_mut(index)
    }

    pub fn len(&self) -> usize {
        self.children.len()
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// Index of the next child to render.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn status(&self) -> RenderStatus {
        self.status
    }
}

impl LayoutNode for VerticalNode {
    fn style(&self) -> &ComputedStyle {
        &self.style
    }

    fn style_mut(&mut self) -> &mut ComputedStyle {
        &mut self.style
    }

    // Only the pending child matters: later children cannot be reached
    // until it finishes.
    fn can_begin_render(&self, canvas: &dyn Canvas, region: Region) -> bool {
        match self.children.get(self.cursor) {
            Some(child) => child.can_begin_render(canvas, self.style.content_region(region)),
            None => true,
        }
    }

    fn render(
        &mut self,
        canvas: &mut dyn Canvas,
        region: Region,
    ) -> Result<RenderOutcome, LayoutError> {
        if self.status == RenderStatus::Done {
            return Ok(RenderOutcome::done(region.with_height(0)));
        }

        let content = self.style.content_region(region);
        let mut available = content;
        let mut status = RenderStatus::Done;

        while let Some(child) = self.children.get_mut(self.cursor) {
            let outcome = child.render(canvas, available)?;
            available.consume_top(outcome.height());

            match outcome.status {
                RenderStatus::Done => {
                    log::trace!(
                        "Vertical child {} ({}) done",
                        self.cursor,
                        NodeKind::of(child).as_str()
                    );
                    self.cursor += 1;
                }
                RenderStatus::Incomplete => {
                    status = RenderStatus::Incomplete;
                    break;
                }
                RenderStatus::NotStarted => {
                    return Err(LayoutError::InvariantViolation(format!(
                        "child {} ({}) returned from render without starting",
                        self.cursor,
                        NodeKind::of(child).as_str()
                    )));
                }
            }
        }

        let consumed_height = (content.height - available.height) + self.style.band_y();
        let consumed = Region {
            width: region.width,
            height: consumed_height,
            ..region
        };

        if status == RenderStatus::Done {
            paint_borders(canvas, &self.style, region, consumed_height);
        }
        self.status = status;

        Ok(RenderOutcome::with_status(status, consumed))
    }
}
