//! Command-line parsing as seen by the binary.

use std::path::PathBuf;

use folio::cli::{parse_args, CliCommand, USAGE};

fn args(list: &[&str]) -> impl Iterator<Item = String> {
    std::iter::once("folio".to_string())
        .chain(list.iter().map(|s| s.to_string()))
        .collect::<Vec<_>>()
        .into_iter()
}

#[test]
fn test_default_is_tui() {
    assert_eq!(parse_args(args(&[])), CliCommand::RunTui { folder: None });
}

#[test]
fn test_delete_accepts_url_or_id() {
    assert_eq!(
        parse_args(args(&["delete", "/api/image/12"])),
        CliCommand::Delete {
            target: "/api/image/12".to_string()
        }
    );
    assert_eq!(
        parse_args(args(&["delete", "12"])),
        CliCommand::Delete {
            target: "12".to_string()
        }
    );
}

#[test]
fn test_list_and_upload() {
    assert_eq!(
        parse_args(args(&["list", "about"])),
        CliCommand::List {
            folder: "about".to_string()
        }
    );
    assert_eq!(
        parse_args(args(&["upload", "carbuild", "./x.webp"])),
        CliCommand::Upload {
            folder: "carbuild".to_string(),
            files: vec![PathBuf::from("./x.webp")],
        }
    );
}

#[test]
fn test_usage_lists_every_command() {
    for command in ["login", "logout", "list", "upload", "delete", "--version"] {
        assert!(USAGE.contains(command), "usage is missing {}", command);
    }
}
