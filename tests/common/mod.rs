#[macro_use]
pub mod page_assertions;
pub mod fixtures;

use quire::{Document, GridSurface, PageDriver, PageSettings, PrintError};
use serde_json::Value;

pub type TestResult = Result<(), Box<dyn std::error::Error>>;

/// Pages of a finished print job, as plain text
pub struct PrintedPages {
    pub pages: Vec<String>,
}

impl PrintedPages {
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// Lines of one page, trailing blanks removed
    pub fn lines(&self, page: usize) -> Vec<&str> {
        self.pages[page].lines().collect()
    }

    /// Every page joined, for substring checks across page breaks
    pub fn text(&self) -> String {
        self.pages.join("\n")
    }
}

/// Print a JSON document onto grid pages
pub fn print_json(document: &Value) -> Result<PrintedPages, PrintError> {
    let json = serde_json::to_string(document)?;
    let document = Document::from_json(&json)?;
    let mut driver = document.build()?;
    print_driver(&mut driver, document.page.clone())
}

/// Print an already built driver onto grid pages
pub fn print_driver(
    driver: &mut PageDriver,
    settings: PageSettings,
) -> Result<PrintedPages, PrintError> {
    let mut surface = GridSurface::new(settings);
    let count = driver.print(&mut surface)?;
    let pages = surface.into_pages();
    assert_eq!(count, pages.len(), "driver and surface disagree on page count");
    Ok(PrintedPages { pages })
}
