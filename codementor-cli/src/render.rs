//! `render` subcommand: write the page (or its manifest) out.

use std::fs;
use std::io::Write;
use std::path::Path;

use codementor_page::{manifest, render_landing_page, PageOptions};
use tracing::info;

use crate::args::OutputFormat;
use crate::error::{Result, SiteError};

/// Produce the page body in the requested format.
pub fn render_body(format: OutputFormat, options: &PageOptions) -> Result<String> {
    match format {
        OutputFormat::Html => Ok(render_landing_page(options)),
        OutputFormat::Json => {
            let mut json = serde_json::to_string_pretty(&manifest())?;
            json.push('\n');
            Ok(json)
        }
    }
}

/// Write `body` to `path`, creating parent directories as needed.
pub fn write_file(path: &Path, body: &str) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| SiteError::io(parent, e))?;
    }
    fs::write(path, body).map_err(|e| SiteError::io(path, e))?;
    info!("wrote {} ({} bytes)", path.display(), body.len());
    Ok(())
}

/// Write `body` to stdout.
pub fn write_stdout(body: &str) -> Result<()> {
    let mut stdout = std::io::stdout().lock();
    stdout
        .write_all(body.as_bytes())
        .and_then(|()| stdout.flush())
        .map_err(|e| SiteError::io("<stdout>", e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn renders_html_body() {
        let body = render_body(OutputFormat::Html, &PageOptions::default()).unwrap();
        assert!(body.starts_with("<!DOCTYPE html>"));
        assert!(body.contains("CodeMentor AI - 智能编程导师"));
    }

    #[test]
    fn renders_json_manifest() {
        let body = render_body(OutputFormat::Json, &PageOptions::default()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert_eq!(value["brand"], "CodeMentor AI");
        assert_eq!(value["features"].as_array().map(Vec::len), Some(6));
    }

    #[test]
    fn write_file_creates_parents() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("nested/dir/index.html");

        write_file(&path, "<p>hi</p>").unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "<p>hi</p>");
    }
}
