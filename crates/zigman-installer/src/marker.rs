use std::fs;
use std::path::Path;

use anyhow::{anyhow, Context, Result};

pub const MARKER_FILE_NAME: &str = ".zig-version";

pub fn find_project_version(start: &Path) -> Result<Option<String>> {
    let mut current = Some(start);
    while let Some(dir) = current {
        let marker = dir.join(MARKER_FILE_NAME);
        if marker.is_file() {
            let raw = fs::read_to_string(&marker)
                .with_context(|| format!("failed to read version marker: {}", marker.display()))?;
            let token = raw.trim();
            if token.is_empty() {
                return Err(anyhow!("version marker is empty: {}", marker.display()));
            }
            return Ok(Some(token.to_string()));
        }
        current = dir.parent();
    }
    Ok(None)
}
