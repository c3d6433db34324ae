pub mod horizontal;
pub mod table;
pub mod text;
pub mod vertical;

pub use horizontal::HorizontalNode;
pub use table::{DataSource, Record, StreamingRow, TableRow};
pub use text::TextNode;
pub use vertical::VerticalNode;

use crate::LayoutError;
use crate::interface::{Canvas, LayoutNode, RenderOutcome};
use crate::node_kind::NodeKind;
use crate::style::ComputedStyle;
use quire_types::geometry::Region;

/// The closed set of nodes a layout tree is built from.
#[derive(Debug)]
pub enum RenderNode {
    Text(TextNode),
    Vertical(VerticalNode),
    Horizontal(HorizontalNode),
    Row(TableRow),
    StreamingRow(StreamingRow),
}

impl RenderNode {
    pub fn kind(&self) -> NodeKind {
        NodeKind::of(self)
    }

    fn inner(&self) -> &dyn LayoutNode {
        match self {
            RenderNode::Text(n) => n,
            RenderNode::Vertical(n) => n,
            RenderNode::Horizontal(n) => n,
            RenderNode::Row(n) => n,
            RenderNode::StreamingRow(n) => n,
        }
    }

    fn inner_mut(&mut self) -> &mut dyn LayoutNode {
        match self {
            RenderNode::Text(n) => n,
            RenderNode::Vertical(n) => n,
            RenderNode::Horizontal(n) => n,
            RenderNode::Row(n) => n,
            RenderNode::StreamingRow(n) => n,
        }
    }
}

impl LayoutNode for RenderNode {
    fn can_begin_render(&self, canvas: &dyn Canvas, region: Region) -> bool {
        self.inner().can_begin_render(canvas, region)
    }

    fn render(
        &mut self,
        canvas: &mut dyn Canvas,
        region: Region,
    ) -> Result<RenderOutcome, LayoutError> {
        self.inner_mut().render(canvas, region)
    }

    fn style(&self) -> &ComputedStyle {
        self.inner().style()
    }

    fn style_mut(&mut self) -> &mut ComputedStyle {
        self.inner_mut().style_mut()
    }

    fn width(&self) -> i32 {
        self.inner().width()
    }

    fn height(&self) -> i32 {
        self.inner().height()
    }
}

impl From<TextNode> for RenderNode {
    fn from(node: TextNode) -> Self {
        RenderNode::Text(node)
    }
}

impl From<VerticalNode> for RenderNode {
    fn from(node: VerticalNode) -> Self {
        RenderNode::Vertical(node)
    }
}

impl From<HorizontalNode> for RenderNode {
    fn from(node: HorizontalNode) -> Self {
        RenderNode::Horizontal(node)
    }
}

impl From<TableRow> for RenderNode {
    fn from(node: TableRow) -> Self {
        RenderNode::Row(node)
    }
}

impl From<StreamingRow> for RenderNode {
    fn from(node: StreamingRow) -> Self {
        RenderNode::StreamingRow(node)
    }
}
