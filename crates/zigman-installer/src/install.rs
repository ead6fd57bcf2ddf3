use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::thread;
use std::time::Duration;

use anyhow::{anyhow, Context, Result};

use crate::archive::ArchiveTool;
use crate::layout::HomeLayout;

pub const STAGING_SUFFIX: &str = ".installing";

const COMMIT_ATTEMPTS: u32 = 5;
const COMMIT_RETRY_DELAY: Duration = Duration::from_millis(300);

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InstallOutcome {
    Installed(String),
    AlreadyInstalled(String),
}

impl InstallOutcome {
    pub fn directory_name(&self) -> &str {
        match self {
            Self::Installed(name) | Self::AlreadyInstalled(name) => name,
        }
    }
}

pub fn install_archive(
    layout: &HomeLayout,
    tool: &dyn ArchiveTool,
    archive_path: &Path,
) -> Result<InstallOutcome> {
    install_archive_with(layout, tool, archive_path, commit_dir)
}

pub(crate) fn install_archive_with<CommitFn>(
    layout: &HomeLayout,
    tool: &dyn ArchiveTool,
    archive_path: &Path,
    mut commit: CommitFn,
) -> Result<InstallOutcome>
where
    CommitFn: FnMut(&Path, &Path) -> Result<()>,
{
    let entries = tool.list_entries(archive_path)?;
    let name = package_root_name(&entries)
        .with_context(|| format!("unusable archive layout: {}", archive_path.display()))?;

    let final_dir = layout.toolchain_dir(&name);
    if final_dir.exists() {
        fs::remove_file(archive_path).with_context(|| {
            format!(
                "failed to discard downloaded archive: {}",
                archive_path.display()
            )
        })?;
        return Ok(InstallOutcome::AlreadyInstalled(name));
    }

    fs::create_dir_all(layout.toolchains_dir()).with_context(|| {
        format!(
            "failed to create toolchain root: {}",
            layout.toolchains_dir().display()
        )
    })?;

    let staging_dir = staging_path(layout, &name);
    if staging_dir.exists() {
        fs::remove_dir_all(&staging_dir).with_context(|| {
            format!(
                "failed to clear stale staging directory: {}",
                staging_dir.display()
            )
        })?;
    }
    fs::create_dir_all(&staging_dir)
        .with_context(|| format!("failed to create {}", staging_dir.display()))?;

    tool.extract_stripping_root(archive_path, &staging_dir)?;

    commit(&staging_dir, &final_dir)?;

    fs::remove_file(archive_path).with_context(|| {
        format!(
            "failed to remove consumed archive: {}",
            archive_path.display()
        )
    })?;

    Ok(InstallOutcome::Installed(name))
}

pub(crate) fn staging_path(layout: &HomeLayout, name: &str) -> PathBuf {
    layout.toolchains_dir().join(format!("{name}{STAGING_SUFFIX}"))
}

pub(crate) fn package_root_name(entries: &[String]) -> Result<String> {
    let first = entries
        .first()
        .ok_or_else(|| anyhow!("archive listing is empty"))?;
    let root = first
        .split('/')
        .next()
        .filter(|component| !component.is_empty() && *component != ".")
        .ok_or_else(|| anyhow!("archive entry has no top-level directory: {first}"))?;
    Ok(root.to_string())
}

fn commit_dir(staging: &Path, final_dir: &Path) -> Result<()> {
    commit_dir_with(
        staging,
        final_dir,
        |src, dst| fs::rename(src, dst),
        thread::sleep,
    )
}

pub(crate) fn commit_dir_with<RenameFn, SleepFn>(
    staging: &Path,
    final_dir: &Path,
    mut rename: RenameFn,
    mut sleep: SleepFn,
) -> Result<()>
where
    RenameFn: FnMut(&Path, &Path) -> io::Result<()>,
    SleepFn: FnMut(Duration),
{
    let mut attempt = 1;
    loop {
        match rename(staging, final_dir) {
            Ok(()) => return Ok(()),
            Err(err)
                if err.kind() == io::ErrorKind::PermissionDenied && attempt < COMMIT_ATTEMPTS =>
            {
                log::warn!(
                    "rename of {} blocked (attempt {attempt} of {COMMIT_ATTEMPTS}), retrying: {err}",
                    staging.display()
                );
                sleep(COMMIT_RETRY_DELAY);
                attempt += 1;
            }
            Err(err) => {
                return Err(err).with_context(|| {
                    format!(
                        "failed to commit {} to {}",
                        staging.display(),
                        final_dir.display()
                    )
                });
            }
        }
    }
}
