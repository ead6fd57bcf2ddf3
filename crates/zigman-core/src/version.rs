use anyhow::{anyhow, Result};
use semver::Version;

pub fn is_dev_build(version: &str) -> bool {
    version.contains("-dev")
}

pub fn normalize_release(input: &str) -> Result<String> {
    let trimmed = input.trim();
    for end in (1..=trimmed.len()).rev() {
        if !trimmed.is_char_boundary(end) {
            continue;
        }
        let candidate = &trimmed[..end];
        if Version::parse(candidate).is_ok() {
            return Ok(candidate.to_string());
        }
    }
    Err(anyhow!(
        "'{input}' does not start with a valid MAJOR.MINOR.PATCH version"
    ))
}
