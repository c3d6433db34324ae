use super::Record;
use crate::LayoutError;
use crate::interface::LayoutNode;
use crate::nodes::{HorizontalNode, TextNode};
use quire_types::{Alignment, TextStyle};

/// A row of text cells.
pub type TableRow = HorizontalNode<TextNode>;

impl HorizontalNode<TextNode> {
    /// A row holding one cell.
    pub fn single_cell(text: impl Into<String>, width: i32) -> Self {
        Self::new().with_child(TextNode::new(text).with_width(width))
    }

    /// Appends a text cell and returns its index.
    pub fn add_text_cell(
        &mut self,
        text: impl Into<String>,
        text_style: TextStyle,
        alignment: Alignment,
        width: i32,
    ) -> usize {
        self.add_child(
            TextNode::new(text)
                .with_text_style(text_style)
                .with_alignment(alignment)
                .with_width(width),
        )
    }

    /// Replaces a cell's text and rewinds it. Returns `false` when there is
    /// no such cell.
    pub fn set_cell_text(&mut self, index: usize, text: impl Into<String>) -> bool {
        match self.rewind_child(index) {
            Some(cell) => {
                cell.set_text(text);
                true
            }
            None => false,
        }
    }

    /// Sets cell widths in order. Extra widths are ignored; cells past the
    /// end of `widths` keep theirs.
    pub fn set_widths(&mut self, widths: &[i32]) {
        for (index, width) in widths.iter().enumerate() {
            if let Some(cell) = self.child_mut(index) {
                cell.set_width(*width);
            }
        }
    }

    /// Mutable access to a cell. Its progress is kept; use
    /// [`HorizontalNode::rewind_child`] to render it again.
    pub fn cell_mut(&mut self, index: usize) -> Option<&mut TextNode> {
        self.child_mut(index)
    }

    pub fn clear_cells(&mut self) {
        self.clear_children();
    }

    /// Column widths currently configured, in cell order.
    pub fn widths(&self) -> Vec<i32> {
        (0..self.len())
            .filter_map(|i| self.child(i).map(|c| c.width()))
            .collect()
    }

    /// Loads a record into the cells, one field per cell, and rewinds the
    /// row.
    ///
    /// Cells without a field are blanked. A record with more fields than
    /// there are cells is rejected and leaves the row untouched.
    pub fn fill_from_record(&mut self, record: Record) -> Result<(), LayoutError> {
        let expected = self.len();
        if record.len() > expected {
            return Err(LayoutError::RecordMismatch {
                expected,
                got: record.len(),
            });
        }
        if record.len() < expected {
            log::warn!(
                "Record has {} fields for {} cells; blanking the rest",
                record.len(),
                expected
            );
        }

        let mut fields = record.into_iter();
        for index in 0..expected {
            self.set_cell_text(index, fields.next().unwrap_or_default());
        }
        self.reset_progress();
        Ok(())
    }
}
