//! End-to-End CLI Tests for codementor

use assert_cmd::Command;
use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use tempfile::TempDir;

/// Get a command pointing to the codementor binary, isolated in `dir`
fn codementor(dir: &TempDir) -> Command {
    let mut cmd = cargo_bin_cmd!("codementor");
    cmd.current_dir(dir.path()).env_remove("RUST_LOG");
    cmd
}

// ============================================
// Basic CLI Tests
// ============================================

mod cli_basics {
    use super::*;

    #[test]
    fn shows_help() {
        let dir = TempDir::new().unwrap();
        codementor(&dir)
            .arg("--help")
            .assert()
            .success()
            .stdout(predicate::str::contains("render"))
            .stdout(predicate::str::contains("preview"));
    }

    #[test]
    fn shows_version() {
        let dir = TempDir::new().unwrap();
        codementor(&dir)
            .arg("--version")
            .assert()
            .success()
            .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
    }

    #[test]
    fn requires_subcommand() {
        let dir = TempDir::new().unwrap();
        codementor(&dir).assert().failure();
    }

    #[test]
    fn rejects_unknown_log_level() {
        let dir = TempDir::new().unwrap();
        codementor(&dir)
            .args(["--log-level", "loud", "render", "--stdout"])
            .assert()
            .failure()
            .stdout(predicate::str::is_empty())
            .stderr(predicate::str::contains("loud"));
    }
}

// ============================================
// Render Tests
// ============================================

mod render {
    use super::*;

    #[test]
    fn renders_html_to_stdout() {
        let dir = TempDir::new().unwrap();
        codementor(&dir)
            .args(["render", "--stdout"])
            .assert()
            .success()
            .stdout(predicate::str::starts_with("<!DOCTYPE html>"))
            .stdout(predicate::str::contains("<title>CodeMentor AI - 智能编程导师</title>"))
            .stdout(predicate::str::contains("2024 CodeMentor AI"));
    }

    #[test]
    fn renders_manifest_json() {
        let dir = TempDir::new().unwrap();
        let output = codementor(&dir)
            .args(["render", "--stdout", "--format", "json"])
            .output()
            .unwrap();

        assert!(output.status.success());
        let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
        assert_eq!(value["features"].as_array().map(Vec::len), Some(6));
        assert_eq!(value["stats"][0]["value"], "10,000+");
    }

    #[test]
    fn writes_default_output_file() {
        let dir = TempDir::new().unwrap();
        codementor(&dir)
            .arg("render")
            .assert()
            .success()
            .stdout(predicate::str::is_empty());

        let html = std::fs::read_to_string(dir.path().join("dist/index.html")).unwrap();
        assert!(html.contains("智能编程导师"));
        assert!(html.contains("feature-card enter"));
    }

    #[test]
    fn writes_explicit_output_without_animations() {
        let dir = TempDir::new().unwrap();
        codementor(&dir)
            .args(["render", "-o", "site/home.html", "--no-animations"])
            .assert()
            .success();

        let html = std::fs::read_to_string(dir.path().join("site/home.html")).unwrap();
        assert!(!html.contains("animation-delay"));
        assert!(html.contains("免费注册"));
    }

    #[test]
    fn rerender_is_identical() {
        let dir = TempDir::new().unwrap();
        let first = codementor(&dir).args(["render", "--stdout"]).output().unwrap();
        let second = codementor(&dir).args(["render", "--stdout"]).output().unwrap();
        assert_eq!(first.stdout, second.stdout);
    }
}

// ============================================
// Config Tests
// ============================================

mod config {
    use super::*;

    #[test]
    fn picks_up_codementor_toml() {
        let dir = TempDir::new().unwrap();
        std::fs::write(
            dir.path().join("codementor.toml"),
            "[site]\nlang = \"zh-Hans\"\nanimations = false\n\n[render]\nout = \"public/index.html\"\n",
        )
        .unwrap();

        codementor(&dir).arg("render").assert().success();

        let html = std::fs::read_to_string(dir.path().join("public/index.html")).unwrap();
        assert!(html.contains("lang=\"zh-Hans\""));
        assert!(!html.contains("animation-delay"));
    }

    #[test]
    fn explicit_missing_config_fails() {
        let dir = TempDir::new().unwrap();
        codementor(&dir)
            .args(["--config", "missing.toml", "render", "--stdout"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("missing.toml"));
    }

    #[test]
    fn explicit_invalid_config_fails() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("bad.toml"), "[preview]\nport = \"x\"\n").unwrap();

        codementor(&dir)
            .args(["--config", "bad.toml", "render", "--stdout"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("invalid config"));
    }

    #[test]
    fn implicit_invalid_config_warns_and_renders() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("codementor.toml"), "[site\n").unwrap();

        codementor(&dir)
            .args(["render", "--stdout"])
            .assert()
            .success()
            .stdout(predicate::str::contains("lang=\"zh-CN\""))
            .stderr(predicate::str::contains("using defaults"));
    }
}
