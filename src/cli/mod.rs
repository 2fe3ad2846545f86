//! CLI module for folio.
//!
//! The dispatcher runs before the TUI starts: a subcommand executes and the
//! process exits, while `RunTui` hands control back to `main`.
//!
//! ```ignore
//! use folio::cli::{parse_args, run_cli_command};
//!
//! let command = parse_args(std::env::args());
//! if let Some(result) = run_cli_command(&command, &config, http).await {
//!     return result;
//! }
//! // No CLI command, continue to TUI
//! ```

pub mod args;
pub mod commands;
pub mod version;

pub use args::{parse_args, CliCommand, USAGE};
pub use commands::CliContext;
pub use version::{handle_version_command, VERSION};

use std::sync::Arc;

use color_eyre::eyre::eyre;
use color_eyre::Result;

use crate::config::FolioConfig;
use crate::error::FolioError;
use crate::traits::HttpClient;

/// Run a CLI command if applicable.
///
/// Returns `None` for `RunTui`, otherwise the outcome of the command.
pub async fn run_cli_command(
    command: &CliCommand,
    config: &FolioConfig,
    http: Arc<dyn HttpClient>,
) -> Option<Result<()>> {
    if let Some(result) = run_local_command(command) {
        return Some(result);
    }
    let result = match command {
        CliCommand::RunTui { .. } => return None,
        _ => match CliContext::new(config, http) {
            Ok(ctx) => run_api_command(command, &ctx).await,
            Err(e) => Err(e.into()),
        },
    };
    Some(result)
}

/// Run the commands that need neither configuration nor the network.
///
/// Returns `None` for everything else.
pub fn run_local_command(command: &CliCommand) -> Option<Result<()>> {
    match command {
        CliCommand::Version => {
            handle_version_command();
            Some(Ok(()))
        }
        CliCommand::Help => {
            println!("{}", USAGE);
            Some(Ok(()))
        }
        CliCommand::Invalid(reason) => Some(Err(eyre!("{}\n\n{}", reason, USAGE))),
        _ => None,
    }
}

async fn run_api_command(command: &CliCommand, ctx: &CliContext) -> Result<()> {
    let outcome: std::result::Result<(), FolioError> = match command {
        CliCommand::Login { email } => {
            let password = rpassword::prompt_password("Password: ")?;
            commands::login(ctx, email, &password).await.map(|session| {
                let role = if session.is_admin() { " (admin)" } else { "" };
                println!("Logged in as {}{}", session.user.username, role);
            })
        }
        CliCommand::Logout => commands::logout(ctx).map(|()| println!("Logged out")),
        CliCommand::List { folder } => commands::list(ctx, folder).await.map(|lines| {
            if lines.is_empty() {
                println!("No images in '{}'", folder);
            }
            for line in lines {
                println!("{}", line);
            }
        }),
        CliCommand::Upload { folder, files } => commands::upload(ctx, folder, files)
            .await
            .map(|summary| {
                println!("Uploaded {} of {} file(s) to {}", summary.uploaded, files.len(), folder);
                for image in summary.images {
                    println!("  {}  {}", image.filename, ctx.gallery.resolve(&image.url));
                }
            }),
        CliCommand::Delete { target } => commands::delete(ctx, target)
            .await
            .map(|id| println!("Deleted image {}", id)),
        _ => Ok(()),
    };

    outcome.map_err(|e| {
        tracing::warn!(code = e.error_code(), error = %e, "command failed");
        eyre!(e.user_message())
    })
}
