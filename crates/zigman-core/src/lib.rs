mod index;
mod locate;
mod mirrors;
mod platform;
mod version;

pub use index::{PlatformArtifact, ReleaseEntry, ReleaseIndex, RELEASE_INDEX_URL};
pub use locate::{locate, PackageLocation, CANONICAL_BUILDS_URL, CANONICAL_DOWNLOAD_URL};
pub use mirrors::{parse_mirror_list, COMMUNITY_MIRRORS_URL};
pub use platform::{ArchTarget, OsTarget, Platform};
pub use version::{is_dev_build, normalize_release};

#[cfg(test)]
mod tests;
