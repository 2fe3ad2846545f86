//! Command-line argument parsing for the folio CLI.
//!
//! `folio` with no arguments starts the TUI. Subcommands cover the account
//! and gallery admin actions that do not need a terminal UI.

use std::path::PathBuf;

/// Usage text printed by `folio help` and on invalid input.
pub const USAGE: &str = "\
Usage:
  folio [--folder <name>]           start the TUI
  folio login <email>               log in and cache the session
  folio logout                      forget the cached session
  folio list <folder>               list the images of a folder
  folio upload <folder> <files...>  upload images (admin)
  folio delete <url|id>             delete an image (admin)
  folio --version                   print the version";

/// Parsed CLI command to execute.
#[derive(Debug, Clone, PartialEq)]
pub enum CliCommand {
    /// Show version information
    Version,
    /// Show usage
    Help,
    /// Run the TUI application (default)
    RunTui { folder: Option<String> },
    Login { email: String },
    Logout,
    List { folder: String },
    Upload { folder: String, files: Vec<PathBuf> },
    /// Delete by listing URL or numeric id
    Delete { target: String },
    /// Arguments that do not form a command; holds the reason
    Invalid(String),
}

/// Parse command-line arguments and return the appropriate command.
///
/// The first item is the program name and is skipped.
///
/// # Examples
///
/// ```
/// use folio::cli::args::{parse_args, CliCommand};
///
/// let args = vec!["folio".to_string(), "--version".to_string()];
/// assert_eq!(parse_args(args.into_iter()), CliCommand::Version);
/// ```
pub fn parse_args<I>(args: I) -> CliCommand
where
    I: Iterator<Item = String>,
{
    let args: Vec<String> = args.skip(1).collect();
    let Some(first) = args.first() else {
        return CliCommand::RunTui { folder: None };
    };
    let rest = &args[1..];

    match first.as_str() {
        "--version" | "-V" => CliCommand::Version,
        "--help" | "-h" | "help" => CliCommand::Help,
        "--folder" | "-f" => match rest {
            [folder] => CliCommand::RunTui {
                folder: Some(folder.clone()),
            },
            _ => CliCommand::Invalid("--folder takes exactly one folder name".to_string()),
        },
        "login" => match rest {
            [email] => CliCommand::Login {
                email: email.clone(),
            },
            _ => CliCommand::Invalid("login takes an email address".to_string()),
        },
        "logout" => CliCommand::Logout,
        "list" => match rest {
            [folder] => CliCommand::List {
                folder: folder.clone(),
            },
            _ => CliCommand::Invalid("list takes a folder name".to_string()),
        },
        "upload" => match rest {
            [folder, files @ ..] if !files.is_empty() => CliCommand::Upload {
                folder: folder.clone(),
                files: files.iter().map(PathBuf::from).collect(),
            },
            _ => CliCommand::Invalid("upload takes a folder and at least one file".to_string()),
        },
        "delete" => match rest {
            [target] => CliCommand::Delete {
                target: target.clone(),
            },
            _ => CliCommand::Invalid("delete takes an image URL or id".to_string()),
        },
        other => CliCommand::Invalid(format!("unknown command {:?}", other)),
    }
}
