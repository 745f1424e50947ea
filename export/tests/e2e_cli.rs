//! End-to-end tests for the static exporter binary.

use assert_cmd::Command;
use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use tempfile::TempDir;

fn exporter() -> Command {
    cargo_bin_cmd!("cyberfortify-export")
}

mod cli_basics {
    use super::*;

    #[test]
    fn shows_help() {
        exporter()
            .arg("--help")
            .assert()
            .success()
            .stdout(predicate::str::contains("--out-dir"))
            .stdout(predicate::str::contains("--stdout"));
    }

    #[test]
    fn shows_version() {
        exporter()
            .arg("--version")
            .assert()
            .success()
            .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
    }
}

mod export {
    use super::*;

    #[test]
    fn writes_default_location() {
        let temp = TempDir::new().expect("temp dir");

        exporter()
            .arg("--root")
            .arg(temp.path())
            .assert()
            .success();

        let html = std::fs::read_to_string(temp.path().join("dist/index.html"))
            .expect("index.html written");
        assert!(html.starts_with("<!DOCTYPE html>"));
        for anchor in ["services", "development", "trust", "contact"] {
            assert!(html.contains(&format!("id=\"{anchor}\"")), "{anchor}");
        }
    }

    #[test]
    fn cli_flags_override_config_file() {
        let temp = TempDir::new().expect("temp dir");
        let config_dir = temp.path().join(".cyberfortify");
        std::fs::create_dir_all(&config_dir).expect("config dir");
        std::fs::write(
            config_dir.join("export.toml"),
            "out_dir = \"public\"\ntitle = \"From Config\"\n",
        )
        .expect("write config");

        exporter()
            .arg("--root")
            .arg(temp.path())
            .args(["--file-name", "landing.html", "--title", "From Flag"])
            .assert()
            .success();

        let html = std::fs::read_to_string(temp.path().join("public/landing.html"))
            .expect("page written to configured dir");
        assert!(html.contains("<title>From Flag</title>"));
    }

    #[test]
    fn stdout_mode_prints_page_and_writes_nothing() {
        let temp = TempDir::new().expect("temp dir");

        exporter()
            .arg("--root")
            .arg(temp.path())
            .arg("--stdout")
            .assert()
            .success()
            .stdout(predicate::str::starts_with("<!DOCTYPE html>"))
            .stdout(predicate::str::contains(
                "href=\"mailto:cyberfortify.contact@gmail.com\"",
            ));

        assert!(!temp.path().join("dist").exists());
    }

    #[test]
    fn invalid_config_falls_back_to_defaults() {
        let temp = TempDir::new().expect("temp dir");
        let config_dir = temp.path().join(".cyberfortify");
        std::fs::create_dir_all(&config_dir).expect("config dir");
        std::fs::write(config_dir.join("export.toml"), "title = [").expect("write config");

        exporter()
            .arg("--root")
            .arg(temp.path())
            .assert()
            .success()
            .stderr(predicate::str::contains("invalid config"));

        assert!(temp.path().join("dist/index.html").exists());
    }

    #[test]
    fn unwritable_target_fails_with_context() {
        let temp = TempDir::new().expect("temp dir");
        std::fs::write(temp.path().join("dist"), "").expect("blocker file");

        exporter()
            .arg("--root")
            .arg(temp.path())
            .assert()
            .failure()
            .stderr(predicate::str::contains("[cyberfortify-export] Error:"))
            .stderr(predicate::str::contains("failed to create output directory"));
    }
}
