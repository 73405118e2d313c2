use serde::Serialize;
use std::path::Path;
use version::{Version, VersionFile};

use crate::cli::FileArgs;
use crate::error::Result;
use crate::targets;
use crate::ui;

#[derive(Serialize)]
struct ShowEntry<'a> {
    path: &'a Path,
    version: Version,
}

/// Executes the show command
pub fn execute(files: &FileArgs, config: Option<&Path>, json: bool) -> Result<()> {
    let targets = targets::resolve(&files.files, config)?;

    for path in &targets.files {
        let version = VersionFile::read(path)?.version()?;

        if json {
            let entry = ShowEntry { path, version };
            println!("{}", serde_json::to_string(&entry)?);
        } else {
            ui::version_line(path, &version);
        }
    }

    Ok(())
}
