use std::fs;

use anyhow::{Context, Result};

use crate::activate::{active_version, deactivate};
use crate::aliases::remove_aliases_targeting;
use crate::layout::HomeLayout;
use crate::resolve::resolve_version;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UninstallOutcome {
    NotInstalled,
    Uninstalled {
        name: String,
        was_active: bool,
        removed_aliases: Vec<String>,
    },
}

pub fn uninstall_version(layout: &HomeLayout, token: &str) -> Result<UninstallOutcome> {
    let Some(name) = resolve_version(layout, token)? else {
        return Ok(UninstallOutcome::NotInstalled);
    };

    let was_active = active_version(layout).as_deref() == Some(name.as_str());
    if was_active {
        deactivate(layout)?;
    }

    let dir = layout.toolchain_dir(&name);
    fs::remove_dir_all(&dir)
        .with_context(|| format!("failed to remove toolchain directory: {}", dir.display()))?;

    let removed_aliases = remove_aliases_targeting(layout, &name)?;

    Ok(UninstallOutcome::Uninstalled {
        name,
        was_active,
        removed_aliases,
    })
}
