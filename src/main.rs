use quire::{Document, GridSurface, PrintError};
use std::env;
use std::io;

/// Renders a JSON document to plain text, one form-feed separated page at a
/// time.
fn main() -> Result<(), PrintError> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    if args.len() != 2 {
        eprintln!("Lays out a JSON document onto text pages.");
        eprintln!();
        eprintln!("Usage: {} <path/to/document.json>", args[0]);
        std::process::exit(1);
    }

    let document = Document::from_path(&args[1])?;
    let mut driver = document.build()?;
    let mut surface = GridSurface::new(document.page.clone());

    let pages = driver.print(&mut surface)?;
    log::info!("Rendered {} pages from {}", pages, args[1]);

    surface.write_to(&mut io::stdout().lock())?;
    Ok(())
}
