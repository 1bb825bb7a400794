use assert_cmd::Command;
use predicates::prelude::*;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

const FINISHED_LINE: &str = r#"
[[events]]
kind = "select"

[[events]]
kind = "click"
x = 0.0
y = 0.0

[[events]]
kind = "click"
x = 100.0
y = 0.0

[[events]]
kind = "click"
x = 100.0
y = 0.0
"#;

/// Command with an isolated, empty config home.
fn linescribe_cmd(config_home: &Path) -> Command {
    let mut cmd = Command::cargo_bin("linescribe").expect("binary exists");
    cmd.env("XDG_CONFIG_HOME", config_home);
    cmd
}

fn write_script(dir: &TempDir, contents: &str) -> PathBuf {
    let path = dir.path().join("script.toml");
    std::fs::write(&path, contents).unwrap();
    path
}

#[test]
fn help_prints_about() {
    let temp = TempDir::new().unwrap();
    linescribe_cmd(temp.path())
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Interactive polyline drawing and editing tool",
        ));
}

#[test]
fn no_script_prints_usage() {
    let temp = TempDir::new().unwrap();
    linescribe_cmd(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("linescribe --script <FILE>"));
}

#[test]
fn replay_prints_draw_commands() {
    let temp = TempDir::new().unwrap();
    let script = write_script(&temp, FINISHED_LINE);

    linescribe_cmd(temp.path())
        .arg("--script")
        .arg(&script)
        .assert()
        .success()
        .stdout(predicate::str::starts_with("clear\n"))
        .stdout(predicate::str::contains("line-style 2 #000000"))
        .stdout(predicate::str::contains("move-to (0, 0)"))
        .stdout(predicate::str::contains("line-to (100, 0)"))
        .stdout(predicate::str::contains("begin-fill #ff0000"));
}

#[test]
fn points_flag_lists_vertices_and_midpoints() {
    let temp = TempDir::new().unwrap();
    let script = write_script(&temp, FINISHED_LINE);

    linescribe_cmd(temp.path())
        .arg("--script")
        .arg(&script)
        .arg("--points")
        .assert()
        .success()
        .stdout(predicate::str::contains("points (modify mode):"))
        .stdout(predicate::str::contains("vertex   (0, 0)"))
        .stdout(predicate::str::contains("midpoint (50, 0)"))
        .stdout(predicate::str::contains("vertex   (100, 0)"));
}

#[test]
fn json_format_reports_mode_and_commands() {
    let temp = TempDir::new().unwrap();
    let script = write_script(&temp, FINISHED_LINE);

    linescribe_cmd(temp.path())
        .arg("--script")
        .arg(&script)
        .args(["--format", "json", "--points"])
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""mode": "modify""#))
        .stdout(predicate::str::contains(r#""remain_active": false"#))
        .stdout(predicate::str::contains(r#""op": "line-to""#))
        .stdout(predicate::str::contains(r#""points": ["#));
}

#[test]
fn invalid_script_fails() {
    let temp = TempDir::new().unwrap();
    let script = write_script(&temp, "[[events]]\nkind = \"scroll\"\n");

    linescribe_cmd(temp.path())
        .arg("--script")
        .arg(&script)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid event script"));
}

#[test]
fn missing_script_fails() {
    let temp = TempDir::new().unwrap();

    linescribe_cmd(temp.path())
        .arg("--script")
        .arg(temp.path().join("absent.toml"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read script"));
}

#[test]
fn config_home_colors_are_applied() {
    let temp = TempDir::new().unwrap();
    let config_dir = temp.path().join("linescribe");
    std::fs::create_dir_all(&config_dir).unwrap();
    std::fs::write(
        config_dir.join("config.toml"),
        "[colors]\nline = \"red\"\nmidpoint = [0, 0, 255]\n",
    )
    .unwrap();
    let script = write_script(&temp, FINISHED_LINE);

    linescribe_cmd(temp.path())
        .arg("--script")
        .arg(&script)
        .assert()
        .success()
        .stdout(predicate::str::contains("line-style 2 #ff0000"))
        .stdout(predicate::str::contains("begin-fill #0000ff"));
}

#[test]
fn explicit_config_path_overrides_default() {
    let temp = TempDir::new().unwrap();
    let config_path = temp.path().join("custom.toml");
    std::fs::write(&config_path, "[style]\nline_width = 4.0\n").unwrap();
    let script = write_script(&temp, FINISHED_LINE);

    linescribe_cmd(temp.path())
        .arg("--script")
        .arg(&script)
        .arg("--config")
        .arg(&config_path)
        .assert()
        .success()
        .stdout(predicate::str::contains("line-style 4 #000000"));
}

#[test]
fn init_config_refuses_to_overwrite() {
    let temp = TempDir::new().unwrap();

    linescribe_cmd(temp.path())
        .arg("--init-config")
        .assert()
        .success()
        .stdout(predicate::str::contains("Wrote"));
    assert!(temp.path().join("linescribe/config.toml").exists());

    linescribe_cmd(temp.path())
        .arg("--init-config")
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));
}
