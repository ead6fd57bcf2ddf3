use anyhow::{anyhow, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OsTarget {
    Linux,
    Macos,
    Windows,
    Freebsd,
}

impl OsTarget {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Linux => "linux",
            Self::Macos => "macos",
            Self::Windows => "windows",
            Self::Freebsd => "freebsd",
        }
    }

    pub fn parse(input: &str) -> Option<Self> {
        match input.trim().to_ascii_lowercase().as_str() {
            "linux" => Some(Self::Linux),
            "macos" => Some(Self::Macos),
            "windows" => Some(Self::Windows),
            "freebsd" => Some(Self::Freebsd),
            _ => None,
        }
    }

    pub fn archive_ext(self) -> &'static str {
        match self {
            Self::Windows => "zip",
            _ => "tar.xz",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArchTarget {
    X86_64,
    Aarch64,
    X86,
    Riscv64,
}

impl ArchTarget {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::X86_64 => "x86_64",
            Self::Aarch64 => "aarch64",
            Self::X86 => "x86",
            Self::Riscv64 => "riscv64",
        }
    }

    pub fn parse(input: &str) -> Option<Self> {
        match input.trim().to_ascii_lowercase().as_str() {
            "x86_64" => Some(Self::X86_64),
            "aarch64" => Some(Self::Aarch64),
            "x86" => Some(Self::X86),
            "riscv64" => Some(Self::Riscv64),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Platform {
    pub os: OsTarget,
    pub arch: ArchTarget,
}

impl Platform {
    pub fn new(os: OsTarget, arch: ArchTarget) -> Self {
        Self { os, arch }
    }

    pub fn host() -> Result<Self> {
        let os = OsTarget::parse(std::env::consts::OS)
            .ok_or_else(|| anyhow!("unsupported operating system: {}", std::env::consts::OS))?;
        let arch = ArchTarget::parse(std::env::consts::ARCH)
            .ok_or_else(|| anyhow!("unsupported cpu architecture: {}", std::env::consts::ARCH))?;
        Ok(Self { os, arch })
    }

    pub fn index_key(&self) -> String {
        format!("{}-{}", self.arch.as_str(), self.os.as_str())
    }

    pub fn archive_ext(&self) -> &'static str {
        self.os.archive_ext()
    }
}
