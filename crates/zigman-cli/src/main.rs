mod flows;
mod render;

use std::path::PathBuf;

use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;
use simplelog::{ColorChoice, Config, LevelFilter, TermLogger, TerminalMode};
use zigman_installer::{default_user_prefix, HomeLayout};

#[derive(Parser, Debug)]
#[command(name = "zigman")]
#[command(about = "Side-by-side Zig toolchain manager", long_about = None)]
struct Cli {
    /// Override the zigman home directory (default: ~/.zigman).
    #[arg(long, global = true)]
    home: Option<PathBuf>,
    /// Show debug diagnostics (mirror probes, retry details).
    #[arg(long, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Download and install a toolchain build.
    Install {
        version: String,
        /// Also bind this alias to the installed build.
        #[arg(long)]
        alias: Option<String>,
    },
    /// Activate an installed build; without an argument, use the nearest
    /// .zig-version marker.
    Use { version: Option<String> },
    /// Remove the active link without uninstalling anything.
    Deactivate,
    /// Show the active build.
    Current,
    /// Remove an installed build and every alias pointing to it.
    Uninstall { version: String },
    /// Bind a name to an installed build.
    Alias { name: String, version: String },
    /// Remove an alias.
    Unalias { name: String },
    /// List defined aliases.
    Aliases,
    /// List installed builds.
    List,
    /// List versions published in the remote index for this platform.
    ListRemote,
    /// Print the PATH snippet for shell startup files.
    Env,
    /// Generate shell completions.
    Completions { shell: Shell },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let prefix = match &cli.home {
        Some(path) => path.clone(),
        None => default_user_prefix()?,
    };
    let layout = HomeLayout::new(prefix);

    match cli.command {
        Commands::Install { version, alias } => {
            flows::run_install(&layout, &version, alias.as_deref())
        }
        Commands::Use { version } => flows::run_use(&layout, version.as_deref()),
        Commands::Deactivate => flows::run_deactivate(&layout),
        Commands::Current => flows::run_current(&layout),
        Commands::Uninstall { version } => flows::run_uninstall(&layout, &version),
        Commands::Alias { name, version } => flows::run_alias(&layout, &name, &version),
        Commands::Unalias { name } => flows::run_unalias(&layout, &name),
        Commands::Aliases => flows::run_aliases(&layout),
        Commands::List => flows::run_list(&layout),
        Commands::ListRemote => flows::run_list_remote(),
        Commands::Env => flows::run_env(&layout),
        Commands::Completions { shell } => {
            clap_complete::generate(shell, &mut Cli::command(), "zigman", &mut std::io::stdout());
            Ok(())
        }
    }
}

fn init_logging(verbose: bool) {
    let level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };
    let _ = TermLogger::init(
        level,
        Config::default(),
        TerminalMode::Stderr,
        ColorChoice::Never,
    );
}

#[cfg(test)]
mod tests;
