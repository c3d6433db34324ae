//! A JSON description of a document, and its conversion into a node tree.
//!
//! ```json
//! {
//!   "page": { "size": { "width": 40, "height": 12 }, "margins": "1 2" },
//!   "content": [
//!     { "type": "Text", "text": "Inventory", "style": { "alignment": "center" } },
//!     { "type": "Table",
//!       "columns": [ { "header": "Item", "width": 20 }, { "header": "Qty", "width": 6 } ],
//!       "records": [ ["bolts", "12"], ["nuts", "40"] ] }
//!   ]
//! }
//! ```

use crate::config::PageSettings;
use crate::driver::PageDriver;
use crate::error::PrintError;
use quire_layout::{
    ComputedStyle, HorizontalNode, LayoutConfig, LayoutNode, Record, RenderNode, StreamingRow,
    TableRow, TextNode, VerticalNode,
};
use quire_types::{Alignment, Borders, EdgeSizes, StyleRef, TextStyle};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Deserialize, Serialize, Debug, Default, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    #[serde(default)]
    pub page: PageSettings,
    #[serde(default)]
    pub layout: LayoutConfig,
    #[serde(default)]
    pub content: Vec<DocNode>,
}

#[derive(Deserialize, Serialize, Debug, Clone)]
#[serde(tag = "type")]
#[serde(rename_all = "PascalCase")]
pub enum DocNode {
    Text(DocText),
    Vertical(DocContainer),
    Row(DocContainer),
    Table(DocTable),
}

/// Box decorations and text style shared by every node type.
#[derive(Deserialize, Serialize, Debug, Default, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct DocStyle {
    pub margin: EdgeSizes,
    pub padding: EdgeSizes,
    /// Shorthand for a border on all four sides, drawn with the default pen.
    pub border: bool,
    pub borders: Option<Borders>,
    pub alignment: Alignment,
    pub width: i32,
    pub height: i32,
    pub font: Option<String>,
    pub brush: Option<String>,
}

#[derive(Deserialize, Serialize, Debug, Default, Clone)]
#[serde(rename_all = "camelCase")]
pub struct DocText {
    pub text: String,
    #[serde(default)]
    pub style: DocStyle,
}

#[derive(Deserialize, Serialize, Debug, Default, Clone)]
#[serde(rename_all = "camelCase")]
pub struct DocContainer {
    #[serde(default)]
    pub style: DocStyle,
    #[serde(default)]
    pub children: Vec<DocNode>,
}

#[derive(Deserialize, Serialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct DocColumn {
    #[serde(default)]
    pub header: Option<String>,
    pub width: i32,
    #[serde(default)]
    pub alignment: Alignment,
}

#[derive(Deserialize, Serialize, Debug, Default, Clone)]
#[serde(rename_all = "camelCase")]
pub struct DocTable {
    #[serde(default)]
    pub style: DocStyle,
    pub columns: Vec<DocColumn>,
    #[serde(default)]
    pub records: Vec<Record>,
    /// Draw a box around the header and around every record, one unit clear
    /// of the cells.
    #[serde(default)]
    pub row_borders: bool,
}

impl Document {
    pub fn from_json(json: &str) -> Result<Self, PrintError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, PrintError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Builds the node tree, one top-level row per content entry.
    pub fn build(&self) -> Result<PageDriver, PrintError> {
        let builder = TreeBuilder {
            config: &self.layout,
        };
        let mut driver = PageDriver::new();
        for node in &self.content {
            driver.add_row(builder.node(node)?);
        }
        Ok(driver)
    }
}

struct TreeBuilder<'a> {
    config: &'a LayoutConfig,
}

impl TreeBuilder<'_> {
    fn node(&self, node: &DocNode) -> Result<RenderNode, PrintError> {
        Ok(match node {
            DocNode::Text(text) => self.text(text).into(),
            DocNode::Vertical(container) => {
                let mut vertical = VerticalNode::with_style(self.style(&container.style));
                for child in &container.children {
                    vertical.add_child(self.node(child)?);
                }
                vertical.into()
            }
            DocNode::Row(container) => {
                let mut row: HorizontalNode =
                    HorizontalNode::with_style(self.style(&container.style));
                for (index, child) in container.children.iter().enumerate() {
                    let child = self.node(child)?;
                    if child.width() <= 0 {
                        return Err(PrintError::Document(format!(
                            "row child {} ({}) needs a width",
                            index,
                            child.kind().as_str()
                        )));
                    }
                    row.add_child(child);
                }
                row.into()
            }
            DocNode::Table(table) => self.table(table)?.into(),
        })
    }

    fn text(&self, text: &DocText) -> TextNode {
        let mut node = TextNode::new(text.text.as_str())
            .with_text_style(self.text_style(&text.style));
        *node.style_mut() = self.style(&text.style);
        node
    }

    fn table(&self, table: &DocTable) -> Result<VerticalNode, PrintError> {
        if table.columns.is_empty() {
            return Err(PrintError::Document("table has no columns".to_string()));
        }
        if let Some(column) = table.columns.iter().position(|c| c.width <= 0) {
            return Err(PrintError::Document(format!(
                "table column {} needs a positive width",
                column
            )));
        }
        if let Some(record) = table
            .records
            .iter()
            .position(|r| r.len() > table.columns.len())
        {
            return Err(PrintError::Document(format!(
                "table record {} has {} fields for {} columns",
                record,
                table.records[record].len(),
                table.columns.len()
            )));
        }

        let text_style = self.text_style(&table.style);
        let mut row_style = ComputedStyle::default();
        if table.row_borders {
            row_style.border = Borders::all(self.config.border.clone());
            row_style.box_model.margin = EdgeSizes::all(1);
        }
        let columns = |texts: &mut dyn Iterator<Item = &str>| {
            let mut row = TableRow::with_style(row_style.clone());
            for (column, text) in table.columns.iter().zip(texts) {
                row.add_text_cell(text, text_style.clone(), column.alignment, column.width);
            }
            row
        };

        let mut node = VerticalNode::with_style(self.style(&table.style));
        if table.columns.iter().any(|c| c.header.is_some()) {
            let mut headers = table
                .columns
                .iter()
                .map(|c| c.header.as_deref().unwrap_or_default());
            node.add_child(columns(&mut headers));
        }

        let mut blanks = std::iter::repeat("");
        let body = columns(&mut blanks);
        node.add_child(StreamingRow::new(body, table.records.clone().into_iter()));
        Ok(node)
    }

    fn style(&self, style: &DocStyle) -> ComputedStyle {
        let border = match (&style.borders, style.border) {
            (Some(borders), _) => borders.clone(),
            (None, true) => Borders::all(self.config.border.clone()),
            (None, false) => Borders::none(),
        };
        let mut computed = ComputedStyle {
            border,
            alignment: style.alignment,
            ..Default::default()
        };
        computed.box_model.margin = style.margin;
        computed.box_model.padding = style.padding;
        computed.box_model.width = style.width;
        computed.box_model.height = style.height;
        computed
    }

    fn text_style(&self, style: &DocStyle) -> TextStyle {
        let mut text_style = self.config.text.clone();
        if let Some(font) = &style.font {
            text_style.font = StyleRef::new(font.as_str());
        }
        if let Some(brush) = &style.brush {
            text_style.brush = StyleRef::new(brush.as_str());
        }
        text_style
    }
}
