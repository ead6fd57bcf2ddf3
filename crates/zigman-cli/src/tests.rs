use std::collections::BTreeMap;

use clap::CommandFactory;
use zigman_core::ReleaseIndex;

use crate::render::{format_alias_lines, format_installed_lines, format_remote_lines};
use crate::Cli;

#[test]
fn cli_definition_is_consistent() {
    Cli::command().debug_assert();
}

#[test]
fn installed_list_marks_the_active_build() {
    let installed = vec![
        "zig-linux-x86_64-0.12.1".to_string(),
        "zig-linux-x86_64-0.13.0".to_string(),
    ];
    assert_eq!(
        format_installed_lines(&installed, Some("zig-linux-x86_64-0.13.0")),
        vec![
            "  zig-linux-x86_64-0.12.1".to_string(),
            "* zig-linux-x86_64-0.13.0".to_string(),
        ]
    );
}

#[test]
fn empty_installed_list_reports_itself() {
    assert_eq!(
        format_installed_lines(&[], None),
        vec!["no toolchains installed".to_string()]
    );
}

#[test]
fn alias_list_flags_dangling_targets() {
    let mut aliases = BTreeMap::new();
    aliases.insert(
        "stable".to_string(),
        "zig-linux-x86_64-0.13.0".to_string(),
    );
    aliases.insert("old".to_string(), "zig-linux-x86_64-0.9.1".to_string());
    let installed = vec!["zig-linux-x86_64-0.13.0".to_string()];

    assert_eq!(
        format_alias_lines(&aliases, &installed),
        vec![
            "old -> zig-linux-x86_64-0.9.1 (missing)".to_string(),
            "stable -> zig-linux-x86_64-0.13.0".to_string(),
        ]
    );
}

#[test]
fn remote_list_is_filtered_by_platform_key() {
    let index = ReleaseIndex::from_json_str(
        r#"
        {
          "master": {
            "version": "0.14.0-dev.2577+271452d22",
            "x86_64-linux": { "tarball": "t", "shasum": "s", "size": "1" }
          },
          "0.13.0": {
            "x86_64-linux": { "tarball": "t", "shasum": "s", "size": "1" }
          },
          "0.5.0": {
            "x86_64-freebsd": { "tarball": "t", "shasum": "s", "size": "1" }
          }
        }
        "#,
    )
    .expect("must parse");

    assert_eq!(
        format_remote_lines(&index, "x86_64-linux"),
        vec![
            "0.13.0".to_string(),
            "master (0.14.0-dev.2577+271452d22)".to_string(),
        ]
    );
    assert_eq!(
        format_remote_lines(&index, "aarch64-macos"),
        vec!["no remote versions available for aarch64-macos".to_string()]
    );
}
