use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

fn py_version() -> Command {
    let mut cmd = Command::cargo_bin("py-version").unwrap();
    cmd.env_remove("RUST_LOG");
    cmd
}

fn write_file(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(&path, content).unwrap();
    path
}

#[test]
fn test_increment_major_end_to_end() {
    let temp_dir = TempDir::new().unwrap();
    let path = write_file(temp_dir.path(), "pyproject.toml", "name = \"x\"\nversion = \"1.0.0\"\n");

    py_version()
        .args(["increment", "major", "-f"])
        .arg(&path)
        .assert()
        .success()
        .stdout(format!("Updated {}: 1.0.0 → 2.0.0\n", path.display()));

    assert_eq!(fs::read_to_string(&path).unwrap(), "name = \"x\"\nversion = \"2.0.0\"\n");
}

#[test]
fn test_increment_with_amount_and_uppercase_component() {
    let temp_dir = TempDir::new().unwrap();
    let path = write_file(temp_dir.path(), "pyproject.toml", "version = '1.2.3'\n");

    py_version()
        .args(["increment", "MINOR", "--amount", "3", "-f"])
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("1.2.3 → 1.5.0"));

    assert_eq!(fs::read_to_string(&path).unwrap(), "version = '1.5.0'\n");
}

#[test]
fn test_decrement_clamps_at_zero() {
    let temp_dir = TempDir::new().unwrap();
    let path = write_file(temp_dir.path(), "pyproject.toml", "version = \"0.0.5\"\n");

    py_version()
        .args(["decrement", "patch", "--amount", "100", "-f"])
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("0.0.5 → 0.0.0"))
        .stderr(predicate::str::contains("clamped to 0"));

    assert_eq!(fs::read_to_string(&path).unwrap(), "version = \"0.0.0\"\n");
}

#[test]
fn test_set_minor() {
    let temp_dir = TempDir::new().unwrap();
    let path = write_file(temp_dir.path(), "pyproject.toml", "version = \"1.2.3\"\n");

    py_version()
        .args(["set", "minor", "7", "-f"])
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("1.2.3 → 1.7.3"));
}

#[test]
fn test_set_negative_value_is_rejected() {
    let temp_dir = TempDir::new().unwrap();
    let path = write_file(temp_dir.path(), "pyproject.toml", "version = \"1.2.3\"\n");

    py_version()
        .args(["set", "minor", "-1", "-f"])
        .arg(&path)
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("invalid value"));

    assert_eq!(fs::read_to_string(&path).unwrap(), "version = \"1.2.3\"\n");
}

#[test]
fn test_invalid_component_fails_before_touching_files() {
    let temp_dir = TempDir::new().unwrap();
    let missing = temp_dir.path().join("missing.toml");

    for args in [
        vec!["increment", "build"],
        vec!["decrement", "build"],
        vec!["set", "build", "1"],
    ] {
        py_version()
            .args(&args)
            .arg("-f")
            .arg(&missing)
            .assert()
            .failure()
            .code(1)
            .stderr(predicate::str::contains("invalid component: build"))
            .stderr(predicate::str::contains("not found").not());
    }
}

#[test]
fn test_show_leaves_file_untouched() {
    let temp_dir = TempDir::new().unwrap();
    let content = "[project]\nversion   =  \"2.0.0\"   \n";
    let path = write_file(temp_dir.path(), "pyproject.toml", content);

    py_version()
        .args(["show", "-f"])
        .arg(&path)
        .assert()
        .success()
        .stdout(format!("{}: 2.0.0\n", path.display()));

    assert_eq!(fs::read(&path).unwrap(), content.as_bytes());
}

#[test]
fn test_show_json() {
    let temp_dir = TempDir::new().unwrap();
    write_file(temp_dir.path(), "pyproject.toml", "version = \"3.1.4\"\n");

    py_version()
        .current_dir(temp_dir.path())
        .args(["show", "--json", "-f", "pyproject.toml"])
        .assert()
        .success()
        .stdout("{\"path\":\"pyproject.toml\",\"version\":\"3.1.4\"}\n");
}

#[test]
fn test_missing_marker_fails_and_keeps_content() {
    let temp_dir = TempDir::new().unwrap();
    let content = "[project]\nname = \"x\"\n";
    let path = write_file(temp_dir.path(), "pyproject.toml", content);

    for args in [vec!["increment", "patch"], vec!["decrement", "minor"], vec!["set", "major", "3"]] {
        py_version()
            .args(&args)
            .arg("-f")
            .arg(&path)
            .assert()
            .failure()
            .stderr(predicate::str::contains("version not found"));

        assert_eq!(fs::read_to_string(&path).unwrap(), content);
    }
}

#[test]
fn test_missing_file_is_reported() {
    let temp_dir = TempDir::new().unwrap();

    py_version()
        .current_dir(temp_dir.path())
        .args(["show", "-f", "nope.toml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("file not found: nope.toml"));
}

#[test]
fn test_defaults_to_pyproject_in_working_directory() {
    let temp_dir = TempDir::new().unwrap();
    write_file(temp_dir.path(), "pyproject.toml", "version = \"0.4.1\"\n");

    py_version()
        .current_dir(temp_dir.path())
        .arg("show")
        .assert()
        .success()
        .stdout(predicate::str::contains("pyproject.toml: 0.4.1"));
}

#[test]
fn test_no_default_file() {
    let temp_dir = TempDir::new().unwrap();

    py_version()
        .current_dir(temp_dir.path())
        .args(["increment", "patch"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("no pyproject.toml found in current directory"));
}

#[test]
fn test_multiple_files_are_processed_in_order() {
    let temp_dir = TempDir::new().unwrap();
    write_file(temp_dir.path(), "a.toml", "version = \"1.0.0\"\n");
    write_file(temp_dir.path(), "b.toml", "version = \"5.5.5\"\n");

    py_version()
        .current_dir(temp_dir.path())
        .args(["increment", "patch", "-f", "a.toml,b.toml"])
        .assert()
        .success()
        .stdout("Updated a.toml: 1.0.0 → 1.0.1\nUpdated b.toml: 5.5.5 → 5.5.6\n");
}

#[test]
fn test_first_failure_stops_remaining_files() {
    let temp_dir = TempDir::new().unwrap();
    write_file(temp_dir.path(), "a.toml", "name = \"a\"\n");
    let second = write_file(temp_dir.path(), "b.toml", "version = \"5.5.5\"\n");

    py_version()
        .current_dir(temp_dir.path())
        .args(["increment", "patch", "-f", "a.toml", "-f", "b.toml"])
        .assert()
        .failure()
        .stdout("");

    assert_eq!(fs::read_to_string(second).unwrap(), "version = \"5.5.5\"\n");
}

#[test]
fn test_glob_pattern_selects_files() {
    let temp_dir = TempDir::new().unwrap();
    write_file(temp_dir.path(), "packages/core/pyproject.toml", "version = \"1.0.0\"\n");
    write_file(temp_dir.path(), "packages/web/pyproject.toml", "version = \"1.0.0\"\n");

    py_version()
        .current_dir(temp_dir.path())
        .args(["set", "patch", "9", "-f", "packages/*/pyproject.toml"])
        .assert()
        .success()
        .stdout(predicate::str::contains("core").and(predicate::str::contains("web")));

    for pkg in ["core", "web"] {
        let path = temp_dir.path().join("packages").join(pkg).join("pyproject.toml");
        assert_eq!(fs::read_to_string(path).unwrap(), "version = \"1.0.9\"\n");
    }
}

#[test]
fn test_only_first_marker_is_rewritten_by_default() {
    let temp_dir = TempDir::new().unwrap();
    let path = write_file(
        temp_dir.path(),
        "pyproject.toml",
        "version = \"1.0.0\"\n[dep]\nversion = \"4.0.0\"\n",
    );

    py_version()
        .args(["increment", "minor", "-f"])
        .arg(&path)
        .assert()
        .success();

    assert_eq!(
        fs::read_to_string(&path).unwrap(),
        "version = \"1.1.0\"\n[dep]\nversion = \"4.0.0\"\n"
    );
}

#[test]
fn test_config_selects_files_and_replace_all() {
    let temp_dir = TempDir::new().unwrap();
    write_file(temp_dir.path(), "py-version.toml", "files = [\"setup.py\"]\nreplace = \"all\"\n");
    let path = write_file(
        temp_dir.path(),
        "setup.py",
        "setup(version='1.0.0')\n__version__ = \"0.9.0\"\nmeta = dict(version = \"0.9.0\")\n",
    );

    py_version()
        .current_dir(temp_dir.path())
        .args(["increment", "major"])
        .assert()
        .success()
        .stdout("Updated setup.py: 1.0.0 → 2.0.0\n");

    assert_eq!(
        fs::read_to_string(path).unwrap(),
        "setup(version='2.0.0')\n__version__ = \"0.9.0\"\nmeta = dict(version = \"2.0.0\")\n"
    );
}

#[test]
fn test_explicit_config_path_must_exist() {
    let temp_dir = TempDir::new().unwrap();
    write_file(temp_dir.path(), "pyproject.toml", "version = \"1.0.0\"\n");

    py_version()
        .current_dir(temp_dir.path())
        .args(["show", "--config", "custom.toml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("custom.toml"));
}

#[test]
fn test_verbose_logs_to_stderr_only() {
    let temp_dir = TempDir::new().unwrap();
    let path = write_file(temp_dir.path(), "pyproject.toml", "version = \"1.0.0\"\n");

    py_version()
        .args(["--verbose", "show", "-f"])
        .arg(&path)
        .assert()
        .success()
        .stdout(format!("{}: 1.0.0\n", path.display()))
        .stderr(predicate::str::contains("located version marker"));
}
