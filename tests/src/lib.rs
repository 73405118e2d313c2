//! Shared fixtures for the integration tests.

use std::fs;
use std::path::{Path, PathBuf};

pub const PYPROJECT: &str = r#"[build-system]
requires = ["setuptools>=61"]

[project]
name = "demo"
version = "1.4.2"
description = "A demo package"

[tool.bumpversion]
current_version = "1.4.2"
"#;

pub const POETRY_PYPROJECT: &str = r#"[tool.poetry]
name = "demo"
version = '0.9.12'

[tool.poetry.dependencies]
python = "^3.11"
"#;

/// Write `content` to `dir/name`, creating parent directories as needed
pub fn write_project_file(dir: &Path, name: &str, content: &str) -> std::io::Result<PathBuf> {
    let path = dir.join(name);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(&path, content)?;
    Ok(path)
}
