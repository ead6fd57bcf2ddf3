use std::collections::BTreeMap;

use zigman_core::ReleaseIndex;

pub fn format_installed_lines(installed: &[String], active: Option<&str>) -> Vec<String> {
    if installed.is_empty() {
        return vec!["no toolchains installed".to_string()];
    }

    installed
        .iter()
        .map(|name| {
            if Some(name.as_str()) == active {
                format!("* {name}")
            } else {
                format!("  {name}")
            }
        })
        .collect()
}

pub fn format_alias_lines(
    aliases: &BTreeMap<String, String>,
    installed: &[String],
) -> Vec<String> {
    if aliases.is_empty() {
        return vec!["no aliases defined".to_string()];
    }

    aliases
        .iter()
        .map(|(name, target)| {
            if installed.iter().any(|dir| dir == target) {
                format!("{name} -> {target}")
            } else {
                format!("{name} -> {target} (missing)")
            }
        })
        .collect()
}

pub fn format_remote_lines(index: &ReleaseIndex, platform_key: &str) -> Vec<String> {
    let mut lines = Vec::new();
    for (version, entry) in index.entries() {
        if entry.platform(platform_key).is_none() {
            continue;
        }
        match entry.resolved_version() {
            Some(resolved) => lines.push(format!("{version} ({resolved})")),
            None => lines.push(version.to_string()),
        }
    }

    if lines.is_empty() {
        lines.push(format!("no remote versions available for {platform_key}"));
    }
    lines
}
