use crate::nodes::RenderNode;

/// The specific type of a render node, for logging and error messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    Text,
    Vertical,
    Horizontal,
    Row,
    StreamingRow,
}

impl NodeKind {
    pub fn of(node: &RenderNode) -> Self {
        match node {
            RenderNode::Text(_) => NodeKind::Text,
            RenderNode::Vertical(_) => NodeKind::Vertical,
            RenderNode::Horizontal(_) => NodeKind::Horizontal,
            RenderNode::Row(_) => NodeKind::Row,
            RenderNode::StreamingRow(_) => NodeKind::StreamingRow,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            NodeKind::Text => "Text",
            NodeKind::Vertical => "Vertical",
            NodeKind::Horizontal => "Horizontal",
            NodeKind::Row => "Row",
            NodeKind::StreamingRow => "StreamingRow",
        }
    }
}
