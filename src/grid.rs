//! A character-cell host: one output unit per character, one per line.
//!
//! Useful for terminals, plain-text reports and for asserting on layout
//! output in tests.

use crate::config::PageSettings;
use crate::driver::{PageBoundary, PrintSurface};
use crate::error::PrintError;
use itertools::Itertools;
use quire_layout::Canvas;
use quire_types::{Line, Region, Size, Stroke, TextStyle};
use std::fmt;
use std::io::Write;

/// Separates pages in plain-text output.
pub const PAGE_SEPARATOR: char = '\x0c';

/// A fixed-size grid of characters. Drawing outside it is clipped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridCanvas {
    width: usize,
    height: usize,
    cells: Vec<char>,
}

impl GridCanvas {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            cells: vec![' '; width * height],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn clear(&mut self) {
        self.cells.fill(' ');
    }

    pub fn get(&self, x: usize, y: usize) -> Option<char> {
        (x < self.width && y < self.height).then(|| self.cells[y * self.width + x])
    }

    /// Each row with trailing blanks removed.
    pub fn rows(&self) -> Vec<String> {
        self.cells
            .chunks(self.width.max(1))
            .take(self.height)
            .map(|row| row.iter().collect::<String>().trim_end().to_string())
            .collect()
    }

    fn put(&mut self, x: i32, y: i32, ch: char) {
        if x < 0 || y < 0 {
            return;
        }
        let (x, y) = (x as usize, y as usize);
        if x >= self.width || y >= self.height {
            return;
        }
        let cell = &mut self.cells[y * self.width + x];
        *cell = match (*cell, ch) {
            ('-', '|') | ('|', '-') | ('+', _) => '+',
            _ => ch,
        };
    }
}

impl Canvas for GridCanvas {
    fn measure_text(&self, text: &str, _style: &TextStyle) -> Size {
        Size::new(text.chars().count() as f32, 1.0)
    }

    fn draw_text(&mut self, text: &str, _style: &TextStyle, x: f32, y: f32) {
        let (x, y) = (x.floor() as i32, y.floor() as i32);
        for (offset, ch) in text.chars().enumerate() {
            self.put(x + offset as i32, y, ch);
        }
    }

    fn draw_line(&mut self, _stroke: &Stroke, line: Line) {
        if line.y1 == line.y2 {
            let (from, to) = (line.x1.min(line.x2), line.x1.max(line.x2));
            for x in from..=to {
                self.put(x, line.y1, '-');
            }
        } else if line.x1 == line.x2 {
            let (from, to) = (line.y1.min(line.y2), line.y1.max(line.y2));
            for y in from..=to {
                self.put(line.x1, y, '|');
            }
        } else {
            log::warn!("Grid canvas cannot draw diagonal line {:?}", line);
        }
    }
}

impl fmt::Display for GridCanvas {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.rows().iter().join("\n"))
    }
}

/// Collects each finished page of a print job as text.
#[derive(Debug)]
pub struct GridSurface {
    settings: PageSettings,
    canvas: GridCanvas,
    pages: Vec<String>,
}

impl GridSurface {
    pub fn new(settings: PageSettings) -> Self {
        Self {
            settings,
            canvas: GridCanvas::new(0, 0),
            pages: Vec::new(),
        }
    }

    pub fn settings(&self) -> &PageSettings {
        &self.settings
    }

    pub fn pages(&self) -> &[String] {
        &self.pages
    }

    pub fn into_pages(self) -> Vec<String> {
        self.pages
    }

    /// Writes every page, separated by form feeds.
    pub fn write_to(&self, writer: &mut impl Write) -> Result<(), PrintError> {
        let separator = format!("\n{}", PAGE_SEPARATOR);
        writeln!(writer, "{}", self.pages.iter().join(&separator))?;
        Ok(())
    }
}

impl PrintSurface for GridSurface {
    fn begin_page(&mut self, index: usize) -> Result<Region, PrintError> {
        let (width, height) = self.settings.size.dimensions();
        self.canvas = GridCanvas::new(width.max(0) as usize, height.max(0) as usize);
        log::debug!("Starting page {} ({}x{})", index, width, height);
        Ok(self.settings.content_region(index))
    }

    fn canvas(&mut self) -> &mut dyn Canvas {
        &mut self.canvas
    }

    fn end_page(&mut self, index: usize, more: bool) -> Result<(), PrintError> {
        log::trace!("Finished page {} (more: {})", index, more);
        self.pages.push(self.canvas.to_string());
        Ok(())
    }
}
