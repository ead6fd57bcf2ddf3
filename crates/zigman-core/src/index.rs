use std::collections::BTreeMap;

use anyhow::Context;
use serde::Deserialize;

pub const RELEASE_INDEX_URL: &str = "https://ziglang.org/download/index.json";

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct PlatformArtifact {
    pub tarball: String,
    pub shasum: String,
    pub size: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ReleaseEntry {
    #[serde(flatten)]
    fields: BTreeMap<String, serde_json::Value>,
}

impl ReleaseEntry {
    pub fn date(&self) -> Option<&str> {
        self.fields.get("date").and_then(|value| value.as_str())
    }

    pub fn resolved_version(&self) -> Option<&str> {
        self.fields.get("version").and_then(|value| value.as_str())
    }

    pub fn platform(&self, key: &str) -> Option<PlatformArtifact> {
        let value = self.fields.get(key)?;
        serde_json::from_value(value.clone()).ok()
    }

    pub fn platforms(&self) -> BTreeMap<String, PlatformArtifact> {
        self.fields
            .iter()
            .filter_map(|(key, value)| {
                let artifact = serde_json::from_value(value.clone()).ok()?;
                Some((key.clone(), artifact))
            })
            .collect()
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ReleaseIndex(BTreeMap<String, ReleaseEntry>);

impl ReleaseIndex {
    pub fn from_json_str(input: &str) -> anyhow::Result<Self> {
        serde_json::from_str(input).context("failed to parse remote release index")
    }

    pub fn versions(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn entry(&self, version: &str) -> Option<&ReleaseEntry> {
        self.0.get(version)
    }

    pub fn entries(&self) -> impl Iterator<Item = (&str, &ReleaseEntry)> {
        self.0.iter().map(|(version, entry)| (version.as_str(), entry))
    }
}
