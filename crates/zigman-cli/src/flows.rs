use std::env;
use std::fs;

use anyhow::{anyhow, Context, Result};
use zigman_core::{locate, Platform};
use zigman_fetch::{
    download_first_available, fetch_mirror_bases, fetch_release_index, HttpClient,
};
use zigman_installer::{
    activate, active_version, deactivate, find_project_version, install_archive, list_installed,
    read_aliases, remove_alias, resolve_version, set_alias, uninstall_version, HomeLayout,
    InstallOutcome, SystemArchiveTool, UninstallOutcome, MARKER_FILE_NAME,
};

use crate::render;

pub fn run_install(layout: &HomeLayout, version: &str, alias: Option<&str>) -> Result<()> {
    let platform = Platform::host()?;
    let location = locate(version, &platform)?;

    layout.ensure_base_dirs()?;

    let client = HttpClient::new()?;
    let mut bases = fetch_mirror_bases(&client);
    log::debug!(
        "trying {} mirror(s) before the canonical source {}",
        bases.len(),
        location.base_url
    );
    bases.push(location.base_url.clone());

    let archive = layout.download_tmp_path();
    let result = download_first_available(&client, &bases, &location.filenames, &archive)
        .and_then(|url| {
            println!("downloaded {url}");
            install_archive(layout, &SystemArchiveTool, &archive)
        });
    let outcome = match result {
        Ok(outcome) => outcome,
        Err(err) => {
            let _ = fs::remove_file(&archive);
            return Err(err);
        }
    };

    match &outcome {
        InstallOutcome::Installed(name) => println!("installed {name}"),
        InstallOutcome::AlreadyInstalled(name) => println!("{name} is already installed"),
    }

    if let Some(alias_name) = alias {
        set_alias(layout, alias_name, outcome.directory_name())?;
        println!("alias {alias_name} -> {}", outcome.directory_name());
    }
    Ok(())
}

pub fn run_use(layout: &HomeLayout, version: Option<&str>) -> Result<()> {
    let token = match version {
        Some(version) => version.to_string(),
        None => {
            let cwd = env::current_dir().context("failed to determine current directory")?;
            find_project_version(&cwd)?.ok_or_else(|| {
                anyhow!(
                    "no version given and no {MARKER_FILE_NAME} marker found here or in any parent directory"
                )
            })?
        }
    };

    let Some(name) = resolve_version(layout, &token)? else {
        return Err(anyhow!(
            "no installed toolchain matches '{token}'; run 'zigman install {token}' first"
        ));
    };
    activate(layout, &name)?;
    println!("now using {name}");
    Ok(())
}

pub fn run_deactivate(layout: &HomeLayout) -> Result<()> {
    if deactivate(layout)? {
        println!("deactivated");
    } else {
        println!("no toolchain was active");
    }
    Ok(())
}

pub fn run_current(layout: &HomeLayout) -> Result<()> {
    match active_version(layout) {
        Some(name) => println!("{name}"),
        None => println!("no active toolchain"),
    }
    Ok(())
}

pub fn run_uninstall(layout: &HomeLayout, version: &str) -> Result<()> {
    match uninstall_version(layout, version)? {
        UninstallOutcome::NotInstalled => {
            Err(anyhow!("no installed toolchain matches '{version}'"))
        }
        UninstallOutcome::Uninstalled {
            name,
            was_active,
            removed_aliases,
        } => {
            if was_active {
                println!("deactivated {name}");
            }
            println!("uninstalled {name}");
            for alias in removed_aliases {
                println!("removed alias {alias}");
            }
            Ok(())
        }
    }
}

pub fn run_alias(layout: &HomeLayout, name: &str, version: &str) -> Result<()> {
    let aliases = read_aliases(layout)?;
    if let Some(existing) = aliases.get(name) {
        return Err(anyhow!(
            "alias '{name}' already points to {existing}; run 'zigman unalias {name}' first"
        ));
    }

    let Some(target) = resolve_version(layout, version)? else {
        return Err(anyhow!("no installed toolchain matches '{version}'"));
    };
    set_alias(layout, name, &target)?;
    println!("alias {name} -> {target}");
    Ok(())
}

pub fn run_unalias(layout: &HomeLayout, name: &str) -> Result<()> {
    if !remove_alias(layout, name)? {
        return Err(anyhow!("no such alias: {name}"));
    }
    println!("removed alias {name}");
    Ok(())
}

pub fn run_aliases(layout: &HomeLayout) -> Result<()> {
    let aliases = read_aliases(layout)?;
    let installed = list_installed(layout)?;
    for line in render::format_alias_lines(&aliases, &installed) {
        println!("{line}");
    }
    Ok(())
}

pub fn run_list(layout: &HomeLayout) -> Result<()> {
    let installed = list_installed(layout)?;
    let active = active_version(layout);
    for line in render::format_installed_lines(&installed, active.as_deref()) {
        println!("{line}");
    }
    Ok(())
}

pub fn run_list_remote() -> Result<()> {
    let platform = Platform::host()?;
    let client = HttpClient::new()?;
    let index = fetch_release_index(&client)?;
    for line in render::format_remote_lines(&index, &platform.index_key()) {
        println!("{line}");
    }
    Ok(())
}

pub fn run_env(layout: &HomeLayout) -> Result<()> {
    let active = layout.active_link_path();
    if cfg!(windows) {
        println!("set PATH={};%PATH%", active.display());
    } else {
        println!("export PATH=\"{}:$PATH\"", active.display());
    }
    Ok(())
}
