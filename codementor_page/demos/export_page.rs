//! Write the landing page to disk.
//!
//! Run with: `cargo run -p codementor-page --example export_page`

use codementor_page::{render_landing_page, PageOptions};

fn main() -> std::io::Result<()> {
    let html = render_landing_page(&PageOptions::default());

    let output_dir = std::path::Path::new("landing-page");
    std::fs::create_dir_all(output_dir)?;
    let output_path = output_dir.join("index.html");
    std::fs::write(&output_path, &html)?;

    println!("Landing page written to: {}", output_path.display());
    println!("HTML size: {} bytes", html.len());
    Ok(())
}
