//! # codementor
//!
//! Command line front-end for the CodeMentor AI landing page.
//!
//! ## Usage
//!
//! ```bash
//! # Write dist/index.html
//! codementor render
//!
//! # JSON content manifest on stdout
//! codementor render --stdout --format json
//!
//! # Local preview on http://127.0.0.1:4173
//! codementor preview --open
//! ```

mod args;
mod config;
mod error;
mod preview;
mod render;

use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use codementor_page::render_landing_page;
use tracing::{debug, info};

use args::{Args, Command, OutputFormat, PreviewArgs, RenderArgs};
use config::SiteConfig;
use preview::PreviewPage;

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("[codementor] Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<()> {
    let args = Args::parse();

    // Logs go to stderr; stdout carries `render --stdout` output
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&args.log_level)),
        )
        .init();

    debug!("codementor v{}", env!("CARGO_PKG_VERSION"));

    let cwd = std::env::current_dir().context("cannot determine working directory")?;
    let config = SiteConfig::resolve(args.config.as_deref(), &cwd)?;

    match args.command {
        Command::Render(render_args) => run_render(&config, render_args),
        Command::Preview(preview_args) => run_preview(&config, preview_args),
    }
}

fn run_render(config: &SiteConfig, args: RenderArgs) -> Result<()> {
    let options = config.page_options(args.no_animations);
    let body = render::render_body(args.format, &options)?;

    if args.stdout {
        render::write_stdout(&body)?;
        return Ok(());
    }

    let out = args.out.unwrap_or_else(|| config.render.out.clone());
    render::write_file(&out, &body)
        .with_context(|| format!("rendering landing page to {}", out.display()))?;
    Ok(())
}

fn run_preview(config: &SiteConfig, args: PreviewArgs) -> Result<()> {
    let options = config.page_options(args.no_animations);
    let host = args.host.unwrap_or_else(|| config.preview.host.clone());
    let port = args.port.unwrap_or(config.preview.port);

    let page = PreviewPage::new(
        render_landing_page(&options),
        render::render_body(OutputFormat::Json, &options)?,
    );

    let listener = preview::bind(&host, port)?;
    let url = preview::base_url(&listener)?;
    info!("Preview ready at {url}/ (Ctrl+C to stop)");

    if args.open {
        preview::open_in_browser(&url);
    }

    preview::serve(listener, page);
    Ok(())
}
