use super::RenderNode;
use crate::LayoutError;
use crate::interface::{Canvas, LayoutNode, RenderOutcome, RenderStatus};
use crate::painting::box_painter::paint_borders;
use crate::style::ComputedStyle;
use quire_types::geometry::{self, Region};

/// Children paired with the outcome of their latest render.
///
/// The two vectors are only ever changed together.
#[derive(Debug)]
struct Cells<N> {
    nodes: Vec<N>,
    outcomes: Vec<RenderOutcome>,
}

impl<N> Cells<N> {
    fn push(&mut self, node: N) -> usize {
        self.nodes.push(node);
        self.outcomes.push(RenderOutcome::not_started());
        self.nodes.len() - 1
    }

    fn clear(&mut self) {
        self.nodes.clear();
        self.outcomes.clear();
    }

    fn reset_outcomes(&mut self) {
        self.outcomes.fill(RenderOutcome::not_started());
    }

    fn node_mut(&mut self, index: usize) -> Option<&mut N> {
        self.nodes.get_mut(index)
    }

    fn rewind_node(&mut self, index: usize) -> Option<&mut N> {
        let node = self.nodes.get_mut(index)?;
        self.outcomes[index] = RenderOutcome::not_started();
        Some(node)
    }

    fn check(&self) -> Result<(), LayoutError> {
        if self.nodes.len() != self.outcomes.len() {
            return Err(LayoutError::InvariantViolation(format!(
                "row holds {} children but {} stored outcomes",
                self.nodes.len(),
                self.outcomes.len()
            )));
        }
        Ok(())
    }
}

/// Lays children out left to right, each in a column of its configured
/// width.
///
/// Unlike [`super::VerticalNode`], every child keeps its own progress: a
/// cell whose text wraps further than its neighbours keeps rendering on
/// the next page while the finished ones are skipped.
#[derive(Debug)]
pub struct HorizontalNode<N: LayoutNode = RenderNode> {
    cells: Cells<N>,
    style: ComputedStyle,
}

impl<N: LayoutNode> Default for HorizontalNode<N> {
    fn default() -> Self {
        Self {
            cells: Cells {
                nodes: Vec::new(),
                outcomes: Vec::new(),
            },
            style: ComputedStyle::default(),
        }
    }
}

impl<N: LayoutNode> HorizontalNode<N> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_style(style: ComputedStyle) -> Self {
        Self {
            style,
            ..Default::default()
        }
    }

    /// Appends a child and returns its index.
    pub fn add_child(&mut self, child: impl Into<N>) -> usize {
        self.cells.push(child.into())
    }

    pub fn with_child(mut self, child: impl Into<N>) -> Self {
        self.add_child(child);
        self
    }

    /// Removes every child together with its stored outcome.
    pub fn clear_children(&mut self) {
        self.cells.clear();
    }

    /// Forgets every child's stored outcome so the row renders from scratch.
    pub fn reset_progress(&mut self) {
        self.cells.reset_outcomes();
    }

    pub fn len(&self) -> usize {
        self.cells.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.nodes.is_empty()
    }

    pub fn child(&self, index: usize) -> Option<&N> {
        self.cells.nodes.get(index)
    }

    /// Mutable access to a child. Its stored outcome is kept.
    pub fn child_mut(&mut self, index: usize) -> Option<&mut N> {
        self.cells.node_mut(index)
    }

    /// Mutable access to a child whose stored outcome is reset, so the child
    /// is rendered again on the next pass.
    pub fn rewind_child(&mut self, index: usize) -> Option<&mut N> {
        self.cells.rewind_node(index)
    }

    pub fn outcomes(&self) -> &[RenderOutcome] {
        &self.cells.outcomes
    }

    pub fn is_done(&self) -> bool {
        self.cells.outcomes.iter().all(RenderOutcome::is_done)
    }

    /// Sum of the children's configured widths.
    pub fn content_width(&self) -> i32 {
        self.cells.nodes.iter().map(|n| n.width()).sum()
    }

    /// The content region with this row's alignment applied.
    fn columns_region(&self, region: Region) -> Region {
        geometry::align_region(
            self.style.content_region(region),
            self.content_width(),
            self.style.alignment,
        )
    }

    /// Checks each child in its column. Finished children are left out
    /// unless `include_done` is set.
    pub(crate) fn can_begin(
        &self,
        canvas: &dyn Canvas,
        region: Region,
        include_done: bool,
    ) -> bool {
        let columns = self.columns_region(region);
        let mut x = columns.x;

        for (node, outcome) in self.cells.nodes.iter().zip(&self.cells.outcomes) {
            let width = node.width();
            if include_done || !outcome.is_done() {
                let column = Region {
                    x,
                    width,
                    ..columns
                };
                if !node.can_begin_render(canvas, column) {
                    return false;
                }
            }
            x += width;
        }
        true
    }
}

impl<N: LayoutNode> LayoutNode for HorizontalNode<N> {
    fn style(&self) -> &ComputedStyle {
        &self.style
    }

    fn style_mut(&mut self) -> &mut ComputedStyle {
        &mut self.style
    }

    fn width(&self) -> i32 {
        match self.style.box_model.width {
            0 => self.content_width() + self.style.band_x(),
            configured => configured,
        }
    }

    fn can_begin_render(&self, canvas: &dyn Canvas, region: Region) -> bool {
        self.can_begin(canvas, region, false)
    }

    fn render(
        &mut self,
        canvas: &mut dyn Canvas,
        region: Region,
    ) -> Result<RenderOutcome, LayoutError> {
        self.cells.check()?;

        let columns = self.columns_region(region);
        let content_width = self.content_width();
        let mut x = columns.x;
        let mut max_height = 0;

        let cells = &mut self.cells;
        let pairs = cells.nodes.iter_mut().zip(cells.outcomes.iter_mut());
        for (index, (node, stored)) in pairs.enumerate() {
            let width = node.width();
            if !stored.is_done() {
                let column = Region {
                    x,
                    width,
                    ..columns
                };
                let outcome = node.render(canvas, column)?;
                if outcome.status == RenderStatus::NotStarted {
                    return Err(LayoutError::InvariantViolation(format!(
                        "cell {} returned from render without starting",
                        index
                    )));
                }
                max_height = max_height.max(outcome.height());
                *stored = outcome;
            }
            x += width;
        }

        let status = if cells.outcomes.iter().any(RenderOutcome::is_incomplete) {
            RenderStatus::Incomplete
        } else {
            RenderStatus::Done
        };

        let consumed = Region {
            x: region.x,
            y: region.y,
            width: content_width + self.style.band_x(),
            height: max_height + self.style.band_y(),
        };

        if status == RenderStatus::Done {
            paint_borders(canvas, &self.style, region, consumed.height);
        }

        Ok(RenderOutcome::with_status(status, consumed))
    }
}
