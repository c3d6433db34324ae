//! Drives a node tree across physical pages.

use crate::error::PrintError;
use quire_layout::{Canvas, LayoutNode, RenderNode, VerticalNode};
use quire_types::Region;

/// Supplies the printable region of each physical page.
pub trait PageBoundary {
    fn content_region(&self, page_index: usize) -> Region;
}

/// A host that accepts pages one after another.
pub trait PrintSurface {
    /// Starts page `index` and returns the region content may use.
    fn begin_page(&mut self, index: usize) -> Result<Region, PrintError>;

    /// The canvas for the page currently open.
    fn canvas(&mut self) -> &mut dyn Canvas;

    /// Closes page `index`. `more` tells whether another page follows.
    fn end_page(&mut self, index: usize, more: bool) -> Result<(), PrintError>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageStatus {
    /// Content remains; render another page.
    MorePages,
    Finished,
}

/// Owns the root of a document and lays it out one page per call.
///
/// All resume state lives in the node tree; the driver only counts pages
/// and refuses to produce pages on which nothing could be placed.
#[derive(Debug, Default)]
pub struct PageDriver {
    root: VerticalNode,
    pages_rendered: usize,
}

impl PageDriver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_root(root: VerticalNode) -> Self {
        Self {
            root,
            pages_rendered: 0,
        }
    }

    /// Appends a top-level node below everything added so far.
    pub fn add_row(&mut self, node: impl Into<RenderNode>) -> usize {
        self.root.add_child(node)
    }

    pub fn root(&self) -> &VerticalNode {
        &self.root
    }

    pub fn root_mut(&mut self) -> &mut VerticalNode {
        &mut self.root
    }

    pub fn into_root(self) -> VerticalNode {
        self.root
    }

    pub fn pages_rendered(&self) -> usize {
        self.pages_rendered
    }

    /// Lays out one page into `region`.
    pub fn render_page(
        &mut self,
        canvas: &mut dyn Canvas,
        region: Region,
    ) -> Result<PageStatus, PrintError> {
        let page = self.pages_rendered;

        if !self.root.can_begin_render(&*canvas, region) {
            return Err(PrintError::SizeExceeded { page, region });
        }

        let outcome = self.root.render(canvas, region)?;
        self.pages_rendered += 1;

        if outcome.is_incomplete() && outcome.height() == self.root.style().band_y() {
            return Err(PrintError::SizeExceeded { page, region });
        }

        log::debug!(
            "Page {} used {} of {} units ({:?})",
            page,
            outcome.height(),
            region.height,
            outcome.status
        );

        Ok(if outcome.is_incomplete() {
            PageStatus::MorePages
        } else {
            PageStatus::Finished
        })
    }

    /// Renders pages onto `surface` until the document is finished and
    /// returns how many pages were produced.
    pub fn print(&mut self, surface: &mut dyn PrintSurface) -> Result<usize, PrintError> {
        let mut pages = 0;
        loop {
            let index = self.pages_rendered;
            let region = surface.begin_page(index)?;
            let status = self.render_page(surface.canvas(), region)?;
            let more = status == PageStatus::MorePages;
            surface.end_page(index, more)?;
            pages += 1;
            if !more {
                break;
            }
        }
        log::info!("Printed {} pages", pages);
        Ok(pages)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::GridCanvas;
    use quire_layout::TextNode;
    use quire_types::EdgeSizes;

    #[test]
    fn page_count_follows_content() {
        let mut driver = PageDriver::new();
        driver.add_row(TextNode::new("one\ntwo\nthree\nfour\nfive"));

        let mut canvas = GridCanvas::new(10, 2);
        let region = Region::new(0, 0, 10, 2);
        assert_eq!(driver.render_page(&mut canvas, region).unwrap(), PageStatus::MorePages);
        assert_eq!(driver.render_page(&mut canvas, region).unwrap(), PageStatus::MorePages);
        assert_eq!(driver.render_page(&mut canvas, region).unwrap(), PageStatus::Finished);
        assert_eq!(driver.pages_rendered(), 3);
    }

    #[test]
    fn region_too_small_for_first_line_fails() {
        let mut driver = PageDriver::new();
        driver.add_row(TextNode::new("text"));

        let mut canvas = GridCanvas::new(10, 5);
        let result = driver.render_page(&mut canvas, Region::new(0, 0, 0, 5));
        assert!(matches!(result, Err(PrintError::SizeExceeded { page: 0, .. })));
    }

    #[test]
    fn pending_child_that_cannot_fit_fails_on_next_page() {
        let mut driver = PageDriver::new();
        driver.add_row(TextNode::new("a\nb"));
        driver.add_row(TextNode::new("c").with_margin(EdgeSizes::y(2)));
        driver.root_mut().style_mut().box_model.padding = EdgeSizes::y(1);

        let mut canvas = GridCanvas::new(10, 4);
        let region = Region::new(0, 0, 10, 4);
        assert_eq!(driver.render_page(&mut canvas, region).unwrap(), PageStatus::MorePages);

        let result = driver.render_page(&mut canvas, region);
        assert!(matches!(result, Err(PrintError::SizeExceeded { page: 1, .. })));
    }

    #[test]
    fn page_without_progress_fails() {
        let mut driver = PageDriver::new();
        // The empty first child lets the page begin; the second has no
        // room for a single character.
        driver.add_row(TextNode::new(""));
        driver.add_row(TextNode::new("c").with_margin(EdgeSizes::x(20)));

        let mut canvas = GridCanvas::new(10, 4);
        let result = driver.render_page(&mut canvas, Region::new(0, 0, 10, 4));
        assert!(matches!(result, Err(PrintError::SizeExceeded { page: 0, .. })));
    }
}
