use anyhow::{anyhow, Context, Result};
use std::path::Path;
use std::process::Command;

/// Seam over the external archive utility so the install pipeline can run
/// against an in-memory fake in tests.
pub trait ArchiveTool {
    /// Entry paths as the archive records them, in archive order.
    fn list_entries(&self, archive: &Path) -> Result<Vec<String>>;

    /// Extracts the payload into `dest`, dropping the single top-level
    /// directory.
    fn extract_stripping_root(&self, archive: &Path, dest: &Path) -> Result<()>;
}

pub struct SystemArchiveTool;

impl ArchiveTool for SystemArchiveTool {
    fn list_entries(&self, archive: &Path) -> Result<Vec<String>> {
        let stdout = run_command_capture(
            Command::new("tar").arg("-tf").arg(archive),
            "failed to list archive entries",
        )?;
        let entries: Vec<String> = stdout
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(str::to_string)
            .collect();
        if entries.is_empty() {
            return Err(anyhow!("archive has no entries: {}", archive.display()));
        }
        Ok(entries)
    }

    fn extract_stripping_root(&self, archive: &Path, dest: &Path) -> Result<()> {
        run_command(
            Command::new("tar")
                .arg("-xf")
                .arg(archive)
                .arg("--strip-components=1")
                .arg("-C")
                .arg(dest),
            "failed to extract archive",
        )
    }
}

pub(crate) fn run_command(command: &mut Command, context_message: &str) -> Result<()> {
    run_command_capture(command, context_message).map(|_| ())
}

pub(crate) fn run_command_capture(command: &mut Command, context_message: &str) -> Result<String> {
    let output = command
        .output()
        .with_context(|| format!("{context_message}: command failed to start"))?;
    if output.status.success() {
        return Ok(String::from_utf8_lossy(&output.stdout).into_owned());
    }

    let stderr = String::from_utf8_lossy(&output.stderr);
    let stdout = String::from_utf8_lossy(&output.stdout);
    Err(anyhow!(
        "{context_message}: status={} stdout='{}' stderr='{}'",
        output.status,
        stdout.trim(),
        stderr.trim()
    ))
}
