use std::fs;
use std::io;
use std::path::Path;

use anyhow::{anyhow, Context, Result};

use crate::layout::HomeLayout;

pub fn activate(layout: &HomeLayout, dir_name: &str) -> Result<()> {
    let target = layout.toolchain_dir(dir_name);
    if !target.is_dir() {
        return Err(anyhow!(
            "toolchain directory does not exist: {}",
            target.display()
        ));
    }

    let link = layout.active_link_path();
    remove_link_if_exists(&link)?;
    create_dir_link(&target, &link)
}

pub fn deactivate(layout: &HomeLayout) -> Result<bool> {
    let link = layout.active_link_path();
    if fs::symlink_metadata(&link).is_err() {
        return Ok(false);
    }
    remove_link_if_exists(&link)?;
    Ok(true)
}

pub fn active_version(layout: &HomeLayout) -> Option<String> {
    let target = fs::read_link(layout.active_link_path()).ok()?;
    target
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
}

fn remove_link_if_exists(link: &Path) -> Result<()> {
    match fs::symlink_metadata(link) {
        Ok(metadata) => {
            // Junctions report as directories.
            let removed = if metadata.file_type().is_symlink() {
                fs::remove_file(link)
            } else {
                fs::remove_dir(link)
            };
            removed.with_context(|| format!("failed to remove active link: {}", link.display()))
        }
        Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(()),
        Err(err) => {
            Err(err).with_context(|| format!("failed to inspect active link: {}", link.display()))
        }
    }
}

#[cfg(unix)]
fn create_dir_link(target: &Path, link: &Path) -> Result<()> {
    std::os::unix::fs::symlink(target, link).with_context(|| {
        format!(
            "failed to create active link {} -> {}",
            link.display(),
            target.display()
        )
    })
}

#[cfg(windows)]
fn create_dir_link(target: &Path, link: &Path) -> Result<()> {
    // Directory symlinks require elevation on windows; junctions do not.
    let mut command = std::process::Command::new("cmd");
    command
        .arg("/C")
        .arg("mklink")
        .arg("/J")
        .arg(link)
        .arg(target);
    crate::archive::run_command(&mut command, "failed to create junction for active link")
}
