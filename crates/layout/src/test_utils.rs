use crate::interface::Canvas;
use crate::nodes::TextNode;
use quire_types::{Line, Size, Stroke, TextStyle};

/// A draw call captured by [`RecordingCanvas`].
#[derive(Debug, Clone, PartialEq)]
pub enum DrawOp {
    Text { text: String, x: f32, y: f32 },
    Line(Line),
}

/// A canvas with fixed monospace metrics that records every draw call.
pub struct RecordingCanvas {
    pub char_width: f32,
    pub line_height: f32,
    pub ops: Vec<DrawOp>,
}

impl RecordingCanvas {
    /// One unit per character, ten units per line.
    pub fn new() -> Self {
        Self::with_metrics(1.0, 10.0)
    }

    pub fn with_metrics(char_width: f32, line_height: f32) -> Self {
        Self {
            char_width,
            line_height,
            ops: Vec::new(),
        }
    }

    pub fn texts(&self) -> Vec<&str> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                DrawOp::Text { text, .. } => Some(text.as_str()),
                DrawOp::Line(_) => None,
            })
            .collect()
    }

    /// Drawn text with its position.
    pub fn placed_texts(&self) -> Vec<(&str, f32, f32)> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                DrawOp::Text { text, x, y } => Some((text.as_str(), *x, *y)),
                DrawOp::Line(_) => None,
            })
            .collect()
    }

    pub fn lines(&self) -> Vec<Line> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                DrawOp::Line(line) => Some(*line),
                DrawOp::Text { .. } => None,
            })
            .collect()
    }

    pub fn clear(&mut self) {
        self.ops.clear();
    }
}

impl Canvas for RecordingCanvas {
    fn measure_text(&self, text: &str, _style: &TextStyle) -> Size {
        Size::new(text.chars().count() as f32 * self.char_width, self.line_height)
    }

    fn draw_text(&mut self, text: &str, _style: &TextStyle, x: f32, y: f32) {
        self.ops.push(DrawOp::Text {
            text: text.to_string(),
            x,
            y,
        });
    }

    fn draw_line(&mut self, _stroke: &Stroke, line: Line) {
        self.ops.push(DrawOp::Line(line));
    }
}

/// A text node with a configured width, as used for table cells.
pub fn cell(text: &str, width: i32) -> TextNode {
    TextNode::new(text).with_width(width)
}
