use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HomeLayout {
    prefix: PathBuf,
}

impl HomeLayout {
    pub fn new(prefix: impl Into<PathBuf>) -> Self {
        Self {
            prefix: prefix.into(),
        }
    }

    pub fn prefix(&self) -> &Path {
        &self.prefix
    }

    pub fn toolchains_dir(&self) -> PathBuf {
        self.prefix.join("toolchains")
    }

    pub fn toolchain_dir(&self, name: &str) -> PathBuf {
        self.toolchains_dir().join(name)
    }

    pub fn active_link_path(&self) -> PathBuf {
        self.prefix.join("active")
    }

    pub fn aliases_path(&self) -> PathBuf {
        self.prefix.join("aliases.toml")
    }

    pub fn downloads_dir(&self) -> PathBuf {
        self.prefix.join("downloads")
    }

    pub fn download_tmp_path(&self) -> PathBuf {
        self.downloads_dir().join("archive.part")
    }

    pub fn ensure_base_dirs(&self) -> Result<()> {
        for dir in [self.toolchains_dir(), self.downloads_dir()] {
            fs::create_dir_all(&dir)
                .with_context(|| format!("failed to create {}", dir.display()))?;
        }
        Ok(())
    }
}

pub fn default_user_prefix() -> Result<PathBuf> {
    if let Some(dir) = std::env::var_os("ZIGMAN_HOME") {
        return Ok(PathBuf::from(dir));
    }

    if cfg!(windows) {
        let app_data = std::env::var("LOCALAPPDATA")
            .context("LOCALAPPDATA is not set; cannot resolve Windows user prefix")?;
        return Ok(PathBuf::from(app_data).join("Zigman"));
    }

    let home = std::env::var("HOME").context("HOME is not set; cannot resolve user prefix")?;
    Ok(PathBuf::from(home).join(".zigman"))
}
