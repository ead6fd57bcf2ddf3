use std::collections::BTreeMap;
use std::fs;

use anyhow::{Context, Result};

use crate::layout::HomeLayout;

pub fn read_aliases(layout: &HomeLayout) -> Result<BTreeMap<String, String>> {
    let path = layout.aliases_path();
    if !path.exists() {
        return Ok(BTreeMap::new());
    }

    let raw = fs::read_to_string(&path)
        .with_context(|| format!("failed to read alias file: {}", path.display()))?;
    toml::from_str(&raw).with_context(|| format!("failed to parse alias file: {}", path.display()))
}

pub fn write_aliases(layout: &HomeLayout, aliases: &BTreeMap<String, String>) -> Result<()> {
    let path = layout.aliases_path();
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("failed to create {}", parent.display()))?;
    }

    let rendered = toml::to_string_pretty(aliases).context("failed to serialize alias table")?;
    fs::write(&path, rendered)
        .with_context(|| format!("failed to write alias file: {}", path.display()))
}

pub fn set_alias(layout: &HomeLayout, name: &str, dir_name: &str) -> Result<()> {
    let mut aliases = read_aliases(layout)?;
    aliases.insert(name.to_string(), dir_name.to_string());
    write_aliases(layout, &aliases)
}

pub fn remove_alias(layout: &HomeLayout, name: &str) -> Result<bool> {
    let mut aliases = read_aliases(layout)?;
    if aliases.remove(name).is_none() {
        return Ok(false);
    }
    write_aliases(layout, &aliases)?;
    Ok(true)
}

pub fn remove_aliases_targeting(layout: &HomeLayout, dir_name: &str) -> Result<Vec<String>> {
    let mut aliases = read_aliases(layout)?;
    let removed: Vec<String> = aliases
        .iter()
        .filter(|(_, target)| target.as_str() == dir_name)
        .map(|(name, _)| name.clone())
        .collect();
    if removed.is_empty() {
        return Ok(removed);
    }

    for name in &removed {
        aliases.remove(name);
    }
    write_aliases(layout, &aliases)?;
    Ok(removed)
}
