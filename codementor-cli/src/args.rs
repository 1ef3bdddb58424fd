//! Command line arguments.

use std::path::PathBuf;

use clap::{Args as ClapArgs, Parser, Subcommand, ValueEnum};

/// Accepted `--log-level` values.
pub const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

#[derive(Parser, Debug)]
#[command(name = "codementor")]
#[command(about = "Render and preview the CodeMentor AI landing page")]
#[command(version)]
pub struct Args {
    /// Log level (trace, debug, info, warn, error); RUST_LOG takes precedence
    #[arg(
        long,
        default_value = "info",
        global = true,
        value_parser = LOG_LEVELS
    )]
    pub log_level: String,

    /// Config file (default: ./codementor.toml when present)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Render the landing page to a file or stdout
    Render(RenderArgs),
    /// Serve the rendered page on a local HTTP server
    Preview(PreviewArgs),
}

#[derive(ClapArgs, Debug)]
pub struct RenderArgs {
    /// Output file (default from config: dist/index.html)
    #[arg(short, long, conflicts_with = "stdout")]
    pub out: Option<PathBuf>,

    /// Write to stdout instead of a file
    #[arg(long)]
    pub stdout: bool,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Html)]
    pub format: OutputFormat,

    /// Render every element at rest, without entrance animations
    #[arg(long)]
    pub no_animations: bool,
}

#[derive(ClapArgs, Debug)]
pub struct PreviewArgs {
    /// Bind host (default from config: 127.0.0.1)
    #[arg(long)]
    pub host: Option<String>,

    /// Bind port, 0 for an ephemeral port (default from config: 4173)
    #[arg(short, long)]
    pub port: Option<u16>,

    /// Open the page in the default browser once the server is up
    #[arg(long)]
    pub open: bool,

    /// Render every element at rest, without entrance animations
    #[arg(long)]
    pub no_animations: bool,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    /// Complete HTML document
    Html,
    /// JSON content manifest
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Args::command().debug_assert();
    }

    #[test]
    fn parses_render_flags() {
        let args = Args::try_parse_from([
            "codementor",
            "--log-level",
            "debug",
            "render",
            "--stdout",
            "--format",
            "json",
        ])
        .unwrap();

        assert_eq!(args.log_level, "debug");
        let Command::Render(render) = args.command else {
            panic!("expected render");
        };
        assert!(render.stdout);
        assert_eq!(render.format, OutputFormat::Json);
        assert!(render.out.is_none());
    }

    #[test]
    fn rejects_unknown_log_level() {
        let err = Args::try_parse_from(["codementor", "--log-level", "loud", "render"])
            .unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::InvalidValue);

        let args = Args::try_parse_from(["codementor", "render"]).unwrap();
        assert_eq!(args.log_level, "info");
    }

    #[test]
    fn out_conflicts_with_stdout() {
        let result = Args::try_parse_from(["codementor", "render", "--stdout", "-o", "x.html"]);
        assert!(result.is_err());
    }

    #[test]
    fn parses_preview_port() {
        let args = Args::try_parse_from(["codementor", "preview", "-p", "0", "--no-animations"])
            .unwrap();
        let Command::Preview(preview) = args.command else {
            panic!("expected preview");
        };
        assert_eq!(preview.port, Some(0));
        assert!(preview.no_animations);
        assert!(preview.host.is_none());
    }
}
