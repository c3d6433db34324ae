use crate::config::LayoutConfig;
use crate::interface::{Canvas, LayoutNode, RenderOutcome, RenderStatus};
use crate::painting::box_painter::paint_borders;
use crate::style::ComputedStyle;
use crate::text::TextReader;
use crate::LayoutError;
use quire_types::geometry::{self, Region};
use quire_types::{Alignment, Borders, EdgeSizes, TextStyle};

/// Character measured to obtain the monospace cell size.
const REFERENCE_GLYPH: &str = "a";

/// A leaf that draws word-wrapped text, one line at a time, resuming where
/// the previous page stopped.
#[derive(Debug, Clone, Default)]
pub struct TextNode {
    reader: TextReader,
    text_style: TextStyle,
    style: ComputedStyle,
}

impl TextNode {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            reader: TextReader::new(text),
            ..Default::default()
        }
    }

    pub fn with_config(text: impl Into<String>, config: &LayoutConfig) -> Self {
        Self::new(text).with_text_style(config.text.clone())
    }

    pub fn with_text_style(mut self, text_style: TextStyle) -> Self {
        self.text_style = text_style;
        self
    }

    pub fn with_width(mut self, width: i32) -> Self {
        self.style.box_model.width = width;
        self
    }

    pub fn with_alignment(mut self, alignment: Alignment) -> Self {
        self.style.alignment = alignment;
        self
    }

    pub fn with_margin(mut self, margin: EdgeSizes) -> Self {
        self.style.box_model.margin = margin;
        self
    }

    pub fn with_padding(mut self, padding: EdgeSizes) -> Self {
        self.style.box_model.padding = padding;
        self
    }

    pub fn with_borders(mut self, borders: Borders) -> Self {
        self.style.border = borders;
        self
    }

    pub fn text(&self) -> &str {
        self.reader.get()
    }

    /// Replaces the text and rewinds to its start.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.reader.set(text);
    }

    pub fn set_text_with_alignment(&mut self, text: impl Into<String>, alignment: Alignment) {
        self.reader.set(text);
        self.style.alignment = alignment;
    }

    pub fn text_style(&self) -> &TextStyle {
        &self.text_style
    }

    pub fn set_text_style(&mut self, text_style: TextStyle) {
        self.text_style = text_style;
    }

    pub fn set_width(&mut self, width: i32) {
        self.style.box_model.width = width;
    }

    pub fn set_alignment(&mut self, alignment: Alignment) {
        self.style.alignment = alignment;
    }

    /// True once every line has been emitted.
    pub fn is_complete(&self) -> bool {
        self.reader.is_eof()
    }

    /// Character width and line height for this node's font.
    fn metrics(&self, canvas: &dyn Canvas) -> Result<(f32, f32), LayoutError> {
        let cell = canvas.measure_text(REFERENCE_GLYPH, &self.text_style);
        if cell.width <= 0.0 || cell.height <= 0.0 {
            return Err(LayoutError::InvalidMetrics(cell.width, cell.height));
        }
        Ok((cell.width, cell.height))
    }
}

impl LayoutNode for TextNode {
    fn style(&self) -> &ComputedStyle {
        &self.style
    }

    fn style_mut(&mut self) -> &mut ComputedStyle {
        &mut self.style
    }

    fn can_begin_render(&self, canvas: &dyn Canvas, region: Region) -> bool {
        let content = self.style.content_region(self.style.sized_region(region));
        let cell = canvas.measure_text(REFERENCE_GLYPH, &self.text_style);
        cell.height <= content.height as f32 && cell.width <= content.width as f32
    }

    fn render(
        &mut self,
        canvas: &mut dyn Canvas,
        region: Region,
    ) -> Result<RenderOutcome, LayoutError> {
        let (char_width, line_height) = self.metrics(&*canvas)?;
        let region = self.style.sized_region(region);
        let content = self.style.content_region(region);

        let max_chars = (content.width.max(0) as f32 / char_width).floor() as usize;
        let lines_available = (content.height.max(0) as f32 / line_height).floor() as usize;

        let mut y = content.y as f32;
        let mut lines_drawn = 0;
        if max_chars > 0 {
            while lines_drawn < lines_available && !self.reader.is_eof() {
                let line = self.reader.read(max_chars);
                let line_width = canvas.measure_text(line, &self.text_style).width;
                let x = geometry::align_offset(line_width, content, self.style.alignment);
                canvas.draw_text(line, &self.text_style, x, y);
                y += line_height;
                lines_drawn += 1;
            }
        }

        let used_height = (lines_drawn as f32 * line_height).ceil() as i32;
        let consumed = Region {
            x: region.x,
            y: region.y,
            width: (char_width * max_chars as f32).ceil() as i32 + self.style.band_x(),
            height: used_height + self.style.band_y(),
        };

        let status = if self.reader.is_eof() {
            paint_borders(canvas, &self.style, region, consumed.height);
            RenderStatus::Done
        } else {
            RenderStatus::Incomplete
        };

        log::trace!(
            "Text node drew {} of {} available lines ({:?})",
            lines_drawn,
            lines_available,
            status
        );

        Ok(RenderOutcome::with_status(status, consumed))
    }
}
