mod activate;
mod aliases;
mod archive;
mod install;
mod layout;
mod marker;
mod resolve;
mod uninstall;

pub use activate::{activate, active_version, deactivate};
pub use aliases::{
    read_aliases, remove_alias, remove_aliases_targeting, set_alias, write_aliases,
};
pub use archive::{ArchiveTool, SystemArchiveTool};
pub use install::{install_archive, InstallOutcome, STAGING_SUFFIX};
pub use layout::{default_user_prefix, HomeLayout};
pub use marker::{find_project_version, MARKER_FILE_NAME};
pub use resolve::{list_installed, resolve_version};
pub use uninstall::{uninstall_version, UninstallOutcome};
