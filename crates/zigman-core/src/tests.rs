use super::*;

#[test]
fn os_target_round_trip() {
    for os in [
        OsTarget::Linux,
        OsTarget::Macos,
        OsTarget::Windows,
        OsTarget::Freebsd,
    ] {
        assert_eq!(OsTarget::parse(os.as_str()), Some(os));
    }
    assert_eq!(OsTarget::parse("beos"), None);
}

#[test]
fn arch_target_round_trip() {
    for arch in [
        ArchTarget::X86_64,
        ArchTarget::Aarch64,
        ArchTarget::X86,
        ArchTarget::Riscv64,
    ] {
        assert_eq!(ArchTarget::parse(arch.as_str()), Some(arch));
    }
    assert_eq!(ArchTarget::parse("mips"), None);
}

#[test]
fn index_key_is_arch_then_os() {
    let platform = Platform::new(OsTarget::Linux, ArchTarget::Aarch64);
    assert_eq!(platform.index_key(), "aarch64-linux");
}

#[test]
fn archive_extension_per_os() {
    assert_eq!(
        Platform::new(OsTarget::Windows, ArchTarget::X86_64).archive_ext(),
        "zip"
    );
    assert_eq!(
        Platform::new(OsTarget::Linux, ArchTarget::X86_64).archive_ext(),
        "tar.xz"
    );
    assert_eq!(
        Platform::new(OsTarget::Macos, ArchTarget::Aarch64).archive_ext(),
        "tar.xz"
    );
}

#[test]
fn classify_dev_builds() {
    assert!(is_dev_build("0.14.0-dev.2577+271452d22"));
    assert!(!is_dev_build("0.13.0"));
}

#[test]
fn normalize_plain_release() {
    assert_eq!(normalize_release("0.13.0").expect("must parse"), "0.13.0");
}

#[test]
fn normalize_strips_trailing_whitespace() {
    assert_eq!(normalize_release("0.13.0\n").expect("must parse"), "0.13.0");
    assert_eq!(normalize_release("  0.13.0  ").expect("must parse"), "0.13.0");
}

#[test]
fn normalize_takes_longest_valid_prefix() {
    assert_eq!(
        normalize_release("0.14.0-dev.2577+271452d22").expect("must parse"),
        "0.14.0-dev.2577+271452d22"
    );
    assert_eq!(
        normalize_release("0.14.0-dev.2577+271452d22 (downloaded)").expect("must parse"),
        "0.14.0-dev.2577+271452d22"
    );
}

#[test]
fn normalize_rejects_non_versions() {
    assert!(normalize_release("latest").is_err());
    assert!(normalize_release("").is_err());
}

#[test]
fn locate_release() {
    let platform = Platform::new(OsTarget::Linux, ArchTarget::X86_64);
    let location = locate("0.13.0", &platform).expect("must locate");
    assert_eq!(location.base_url, "https://ziglang.org/download/0.13.0");
    assert_eq!(
        location.filenames,
        vec![
            "zig-x86_64-linux-0.13.0.tar.xz".to_string(),
            "zig-linux-x86_64-0.13.0.tar.xz".to_string(),
        ]
    );
}

#[test]
fn locate_release_normalizes_decorated_input() {
    let platform = Platform::new(OsTarget::Linux, ArchTarget::X86_64);
    let location = locate("0.13.0\n", &platform).expect("must locate");
    assert_eq!(location.base_url, "https://ziglang.org/download/0.13.0");
}

#[test]
fn locate_dev_build_uses_builds_endpoint() {
    let platform = Platform::new(OsTarget::Windows, ArchTarget::Aarch64);
    let location = locate("0.14.0-dev.2577+271452d22", &platform).expect("must locate");
    assert_eq!(location.base_url, "https://ziglang.org/builds");
    assert_eq!(
        location.filenames,
        vec![
            "zig-aarch64-windows-0.14.0-dev.2577+271452d22.zip".to_string(),
            "zig-windows-aarch64-0.14.0-dev.2577+271452d22.zip".to_string(),
        ]
    );
}

#[test]
fn mirror_list_keeps_https_lines_only() {
    let raw = "https://mirror-one.example/zig/\n\
               # a comment\n\
               http://insecure.example/zig\n\
               \n\
               https://mirror-two.example/downloads\n\
               ftp://old.example/zig\n";
    assert_eq!(
        parse_mirror_list(raw),
        vec![
            "https://mirror-one.example/zig".to_string(),
            "https://mirror-two.example/downloads".to_string(),
        ]
    );
}

#[test]
fn mirror_list_trims_surrounding_whitespace() {
    assert_eq!(
        parse_mirror_list("  https://mirror.example  \n"),
        vec!["https://mirror.example".to_string()]
    );
}

const SAMPLE_INDEX: &str = r#"
{
  "master": {
    "version": "0.14.0-dev.2577+271452d22",
    "date": "2025-01-08",
    "x86_64-linux": {
      "tarball": "https://ziglang.org/builds/zig-linux-x86_64-0.14.0-dev.2577+271452d22.tar.xz",
      "shasum": "b22f7a2bda0d5a147d471b5b38a2dbd7acc0d153da218bf884ced867ebb1b124",
      "size": "49023512"
    }
  },
  "0.13.0": {
    "date": "2024-06-07",
    "notes": "https://ziglang.org/download/0.13.0/release-notes.html",
    "x86_64-linux": {
      "tarball": "https://ziglang.org/download/0.13.0/zig-linux-x86_64-0.13.0.tar.xz",
      "shasum": "d45312e61ebcc48032b77bc4cf7fd6915c11fa16e4aad116b66c9468211230ea",
      "size": "47082308"
    },
    "aarch64-macos": {
      "tarball": "https://ziglang.org/download/0.13.0/zig-macos-aarch64-0.13.0.tar.xz",
      "shasum": "46fae219656545dfaf4dce12fb4e8685cec5b51d721beee9389ab4194d43394c",
      "size": "44892040"
    }
  }
}
"#;

#[test]
fn parse_release_index() {
    let index = ReleaseIndex::from_json_str(SAMPLE_INDEX).expect("must parse");
    assert_eq!(index.versions().count(), 2);

    let release = index.entry("0.13.0").expect("entry must exist");
    assert_eq!(release.date(), Some("2024-06-07"));
    assert_eq!(release.resolved_version(), None);

    let platforms = release.platforms();
    assert_eq!(platforms.len(), 2);
    let artifact = release.platform("x86_64-linux").expect("platform present");
    assert_eq!(artifact.size, "47082308");
    assert!(artifact.tarball.ends_with("zig-linux-x86_64-0.13.0.tar.xz"));

    assert!(release.platform("notes").is_none());
    assert!(release.platform("date").is_none());
}

#[test]
fn rolling_entry_reports_resolved_version() {
    let index = ReleaseIndex::from_json_str(SAMPLE_INDEX).expect("must parse");
    let master = index.entry("master").expect("entry must exist");
    assert_eq!(master.resolved_version(), Some("0.14.0-dev.2577+271452d22"));
    assert!(master.platform("x86_64-linux").is_some());
}
