use std::error::Error;
use std::path::Path;

use dashboard_wireframes::error::RenderError;
use dashboard_wireframes::generator::{self, DEFAULT_OUTPUT_DIR};

fn main() {
    if let Err(err) = run() {
        eprintln!("Error: {}", err);
        print_error_sources(&err);
        std::process::exit(1);
    }
}

fn run() -> Result<(), RenderError> {
    let figure = generator::generate(Path::new(DEFAULT_OUTPUT_DIR))?;
    println!("Saved: {}", figure.svg_path.display());
    println!("Saved: {}", figure.pdf_path.display());
    Ok(())
}

fn print_error_sources(mut error: &(dyn Error + 'static)) {
    while let Some(source) = error.source() {
        eprintln!("  caused by: {}", source);
        error = source;
    }
}
