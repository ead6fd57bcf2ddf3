use anyhow::Result;

use crate::platform::Platform;
use crate::version::{is_dev_build, normalize_release};

pub const CANONICAL_DOWNLOAD_URL: &str = "https://ziglang.org/download";
pub const CANONICAL_BUILDS_URL: &str = "https://ziglang.org/builds";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageLocation {
    pub base_url: String,
    pub filenames: Vec<String>,
}

pub fn locate(version: &str, platform: &Platform) -> Result<PackageLocation> {
    if is_dev_build(version) {
        let version = version.trim();
        return Ok(PackageLocation {
            base_url: CANONICAL_BUILDS_URL.to_string(),
            filenames: candidate_filenames(platform, version),
        });
    }

    let version = normalize_release(version)?;
    Ok(PackageLocation {
        base_url: format!("{CANONICAL_DOWNLOAD_URL}/{version}"),
        filenames: candidate_filenames(platform, &version),
    })
}

fn candidate_filenames(platform: &Platform, version: &str) -> Vec<String> {
    let os = platform.os.as_str();
    let arch = platform.arch.as_str();
    let ext = platform.archive_ext();
    vec![
        format!("zig-{arch}-{os}-{version}.{ext}"),
        format!("zig-{os}-{arch}-{version}.{ext}"),
    ]
}
