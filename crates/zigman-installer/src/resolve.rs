use std::fs;

use anyhow::{Context, Result};

use crate::aliases::read_aliases;
use crate::install::STAGING_SUFFIX;
use crate::layout::HomeLayout;

pub fn list_installed(layout: &HomeLayout) -> Result<Vec<String>> {
    let dir = layout.toolchains_dir();
    if !dir.exists() {
        return Ok(Vec::new());
    }

    let mut names = Vec::new();
    for entry in fs::read_dir(&dir)
        .with_context(|| format!("failed to read toolchain root: {}", dir.display()))?
    {
        let entry = entry?;
        if !entry.file_type()?.is_dir() {
            continue;
        }
        let file_name = entry.file_name();
        let Some(name) = file_name.to_str() else {
            continue;
        };
        if name.ends_with(STAGING_SUFFIX) {
            continue;
        }
        names.push(name.to_string());
    }

    names.sort();
    Ok(names)
}

pub fn resolve_version(layout: &HomeLayout, token: &str) -> Result<Option<String>> {
    let aliases = read_aliases(layout)?;
    let target = aliases
        .get(token)
        .cloned()
        .unwrap_or_else(|| token.to_string());

    let installed = list_installed(layout)?;
    let matches: Vec<&String> = installed
        .iter()
        .filter(|name| name.contains(&target))
        .collect();

    if matches.len() == 1 {
        return Ok(Some(matches[0].clone()));
    }
    if matches.iter().any(|name| **name == target) {
        return Ok(Some(target));
    }
    Ok(matches.first().map(|name| (*name).clone()))
}
