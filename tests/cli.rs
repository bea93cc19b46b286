use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn polyscribe_cmd() -> Command {
    Command::cargo_bin("polyscribe").expect("binary exists")
}

const SQUARE: &str = "\
# open square
click 20 20
move 180 20
click 180 20
move 180 180
click 180 180
move 20 180
key Return
";

#[test]
fn polyscribe_help_prints_usage() {
    polyscribe_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Click-to-place polyline drawing for Wayland compositors",
        ));
}

#[test]
fn no_flags_prints_usage() {
    polyscribe_cmd()
        .env_remove("WAYLAND_DISPLAY")
        .assert()
        .success()
        .stdout(predicate::str::contains("--replay <SCRIPT> --output <PNG>"));
}

#[test]
fn active_mode_requires_wayland_env() {
    polyscribe_cmd()
        .env_remove("WAYLAND_DISPLAY")
        .arg("--active")
        .assert()
        .failure()
        .stderr(predicate::str::contains("WAYLAND_DISPLAY not set"));
}

#[test]
fn replay_requires_output() {
    polyscribe_cmd()
        .args(["--replay", "script.txt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "required arguments were not provided",
        ));
}

#[test]
fn replay_writes_png() {
    let temp = TempDir::new().unwrap();
    let script = temp.path().join("square.txt");
    let output = temp.path().join("square.png");
    std::fs::write(&script, SQUARE).unwrap();

    polyscribe_cmd()
        .env("XDG_CONFIG_HOME", temp.path())
        .arg("--replay")
        .arg(&script)
        .arg("--output")
        .arg(&output)
        .assert()
        .success()
        .stdout(predicate::str::contains("Rendered 1 polylines"));

    let bytes = std::fs::read(&output).unwrap();
    assert!(bytes.starts_with(b"\x89PNG"));
}

#[test]
fn replay_reports_bad_line() {
    let temp = TempDir::new().unwrap();
    let script = temp.path().join("bad.txt");
    std::fs::write(&script, "click 1 1\nmove 5\n").unwrap();

    polyscribe_cmd()
        .env("XDG_CONFIG_HOME", temp.path())
        .arg("--replay")
        .arg(&script)
        .arg("--output")
        .arg(temp.path().join("out.png"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("line 2"));
}

#[test]
fn explicit_config_must_exist() {
    let temp = TempDir::new().unwrap();
    let script = temp.path().join("square.txt");
    std::fs::write(&script, SQUARE).unwrap();

    polyscribe_cmd()
        .arg("--config")
        .arg(temp.path().join("missing.toml"))
        .arg("--replay")
        .arg(&script)
        .arg("--output")
        .arg(temp.path().join("out.png"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read config"));
}

#[test]
fn max_points_flag_limits_replay() {
    let temp = TempDir::new().unwrap();
    let script = temp.path().join("many.txt");
    let output = temp.path().join("many.png");
    std::fs::write(
        &script,
        "click 10 10\nclick 20 20\nclick 30 30\nclick 40 40\nkey Return\nclick 5 5\nkey Return\n",
    )
    .unwrap();

    polyscribe_cmd()
        .env("XDG_CONFIG_HOME", temp.path())
        .args(["--max-points", "2", "--replay"])
        .arg(&script)
        .arg("--output")
        .arg(&output)
        .assert()
        .success()
        .stdout(predicate::str::contains("Rendered 2 polylines"));
}

#[test]
fn dump_config_schema_prints_json() {
    Command::cargo_bin("dump_config_schema")
        .expect("binary exists")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"max_points\""));
}

#[test]
fn dump_config_schema_writes_to_path() {
    let temp = TempDir::new().expect("temp dir");
    let out = temp.path().join("schema.json");

    Command::cargo_bin("dump_config_schema")
        .expect("binary exists")
        .arg(&out)
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    let written = std::fs::read_to_string(&out).expect("schema written");
    assert!(written.contains("\"polyline\""));
}

#[test]
fn version_flag_prints_crate_version() {
    polyscribe_cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(concat!(
            "polyscribe ",
            env!("CARGO_PKG_VERSION")
        )));
}
