//! End-to-end tests for the `e9th` binary.

use assert_cmd::Command;
use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use tempfile::TempDir;

fn e9th() -> Command {
    cargo_bin_cmd!("e9th")
}

mod cli_basics {
    use super::*;

    #[test]
    fn shows_help() {
        e9th()
            .arg("--help")
            .assert()
            .success()
            .stdout(predicate::str::contains("build"))
            .stdout(predicate::str::contains("check"))
            .stdout(predicate::str::contains("content"));
    }

    #[test]
    fn shows_version() {
        e9th()
            .arg("--version")
            .assert()
            .success()
            .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
    }

    #[test]
    fn rejects_unknown_subcommand() {
        e9th().arg("deploy").assert().failure();
    }
}

mod build {
    use super::*;

    #[test]
    fn writes_index_html() {
        let temp = TempDir::new().expect("temp dir");
        let out = temp.path().join("site");

        e9th()
            .current_dir(temp.path())
            .args(["build", "--out"])
            .arg(&out)
            .assert()
            .success()
            .stdout(predicate::str::contains("index.html"));

        let html = std::fs::read_to_string(out.join("index.html")).expect("index written");
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains(r#"id="tokenomics""#));
        assert!(html.contains(r#"data-viewport="desktop""#));
    }

    #[test]
    fn uses_config_file_from_working_dir() {
        let temp = TempDir::new().expect("temp dir");
        std::fs::write(
            temp.path().join("e9th.toml"),
            "[site]\ntitle = \"E9TH Staging\"\n\n[build]\nout_dir = \"public\"\nviewport_width = 400\n",
        )
        .expect("write config");

        e9th().current_dir(temp.path()).arg("build").assert().success();

        let html =
            std::fs::read_to_string(temp.path().join("public/index.html")).expect("index written");
        assert!(html.contains("<title>E9TH Staging</title>"));
        assert!(html.contains(r#"data-viewport="mobile""#));
    }

    #[test]
    fn viewport_flag_overrides_config() {
        let temp = TempDir::new().expect("temp dir");
        std::fs::write(
            temp.path().join("e9th.toml"),
            "[build]\nviewport_width = 400\n",
        )
        .expect("write config");

        e9th()
            .current_dir(temp.path())
            .args(["build", "--viewport-width", "1280"])
            .assert()
            .success();

        let html =
            std::fs::read_to_string(temp.path().join("dist/index.html")).expect("index written");
        assert!(html.contains(r#"data-viewport="desktop""#));
    }

    #[test]
    fn missing_explicit_config_fails() {
        let temp = TempDir::new().expect("temp dir");
        e9th()
            .current_dir(temp.path())
            .args(["build", "--config", "absent.toml"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("not found"));
    }

    #[test]
    fn malformed_config_fails() {
        let temp = TempDir::new().expect("temp dir");
        std::fs::write(temp.path().join("e9th.toml"), "[build\n").expect("write config");
        e9th()
            .current_dir(temp.path())
            .arg("build")
            .assert()
            .failure()
            .stderr(predicate::str::contains("failed to parse"));
    }
}

mod check {
    use super::*;

    #[test]
    fn shipped_content_passes() {
        let temp = TempDir::new().expect("temp dir");
        e9th()
            .current_dir(temp.path())
            .arg("check")
            .assert()
            .success()
            .stdout(predicate::str::contains("ok: 5 nav anchors resolve"))
            .stdout(predicate::str::contains("total 100%"));
    }
}

mod content {
    use super::*;

    #[test]
    fn prints_summary() {
        e9th()
            .arg("content")
            .assert()
            .success()
            .stdout(predicate::str::contains("#tokenomics"))
            .stdout(predicate::str::contains("Public Sale"))
            .stdout(predicate::str::contains("[current]"));
    }

    #[test]
    fn json_export_is_valid() {
        let output = e9th().args(["content", "--json"]).output().expect("run");
        assert!(output.status.success());

        let value: serde_json::Value = serde_json::from_slice(&output.stdout).expect("valid json");
        assert_eq!(value["brand"], "E9TH");
        assert_eq!(value["nav"].as_array().map(Vec::len), Some(5));
        assert_eq!(value["utilities"].as_array().map(Vec::len), Some(5));
        assert_eq!(value["roadmap"][0]["status"], "current");
        assert_eq!(value["allocations"][0]["accent"], "violet");

        let total: u64 = value["allocations"]
            .as_array()
            .expect("allocations array")
            .iter()
            .filter_map(|a| a["percentage"].as_u64())
            .sum();
        assert_eq!(total, 100);
    }
}
