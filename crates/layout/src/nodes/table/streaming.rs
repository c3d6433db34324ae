use super::{Record, TableRow};
use crate::LayoutError;
use crate::interface::{Canvas, LayoutNode, RenderOutcome, RenderStatus};
use crate::style::ComputedStyle;
use quire_types::geometry::Region;
use std::fmt;

/// Supplies the records a [`StreamingRow`] lays out, one at a time.
pub trait DataSource {
    fn next_record(&mut self) -> Option<Record>;
}

impl<I> DataSource for I
where
    I: Iterator<Item = Record>,
{
    fn next_record(&mut self) -> Option<Record> {
        self.next()
    }
}

/// A row that is refilled from a [`DataSource`] after each record finishes,
/// so a table body of any length is laid out by a single node.
///
/// Once the source runs dry the row reports `Done` and stays done.
pub struct StreamingRow {
    row: TableRow,
    source: Box<dyn DataSource>,
    records: usize,
    exhausted: bool,
}

impl fmt::Debug for StreamingRow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StreamingRow")
            .field("row", &self.row)
            .field("records", &self.records)
            .field("exhausted", &self.exhausted)
            .finish_non_exhaustive()
    }
}

impl StreamingRow {
    /// `row` provides the cells, their widths and styles; its current text
    /// is replaced by each record.
    pub fn new(row: TableRow, source: impl DataSource + 'static) -> Self {
        Self {
            row,
            source: Box::new(source),
            records: 0,
            exhausted: false,
        }
    }

    pub fn row(&self) -> &TableRow {
        &self.row
    }

    pub fn row_mut(&mut self) -> &mut TableRow {
        &mut self.row
    }

    /// Records pulled from the source so far.
    pub fn records(&self) -> usize {
        self.records
    }

    pub fn is_exhausted(&self) -> bool {
        self.exhausted
    }

    /// True while a record has been loaded but not fully emitted.
    fn mid_record(&self) -> bool {
        self.records > 0 && !self.row.is_done()
    }
}

impl LayoutNode for StreamingRow {
    fn style(&self) -> &ComputedStyle {
        self.row.style()
    }

    fn style_mut(&mut self) -> &mut ComputedStyle {
        self.row.style_mut()
    }

    fn width(&self) -> i32 {
        self.row.width()
    }

    // Between records every cell will be refilled, so none may be skipped.
    fn can_begin_render(&self, canvas: &dyn Canvas, region: Region) -> bool {
        if self.exhausted {
            return true;
        }
        self.row.can_begin(canvas, region, !self.mid_record())
    }

    fn render(
        &mut self,
        canvas: &mut dyn Canvas,
        region: Region,
    ) -> Result<RenderOutcome, LayoutError> {
        let mut available = region;

        loop {
            if self.exhausted {
                return Ok(RenderOutcome::done(Region {
                    height: region.height - available.height,
                    ..region
                }));
            }

            if !self.mid_record() {
                match self.source.next_record() {
                    Some(record) => {
                        self.row.fill_from_record(record)?;
                        self.records += 1;
                    }
                    None => {
                        log::debug!("Data source exhausted after {} records", self.records);
                        self.exhausted = true;
                        continue;
                    }
                }
            }

            let outcome = self.row.render(canvas, available)?;
            available.consume_top(outcome.height());

            if outcome.status == RenderStatus::Incomplete {
                log::trace!("Record {} continues on the next region", self.records);
                return Ok(RenderOutcome::incomplete(Region {
                    height: region.height - available.height,
                    ..region
                }));
            }
        }
    }
}
