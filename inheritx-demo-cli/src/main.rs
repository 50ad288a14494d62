//! InheritX Demo CLI
//!
//! Command-line interface for exercising the InheritX wallet connection,
//! admin login and plan listing flows without a browser. State lives in a
//! JSON file that mirrors the browser's `localStorage`.

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;
mod kit;
mod navigator;
mod ui;

#[derive(Parser)]
#[command(name = "inheritx-demo")]
#[command(about = "InheritX Demo CLI - wallet, admin and plan flows from the terminal", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Print state as JSON where supported
    #[arg(long, global = true)]
    json: bool,

    /// Custom storage directory (can also be set via INHERITX_DEMO_DIR env var)
    #[arg(long, global = true)]
    storage_dir: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// List inheritance plans
    Plans {
        /// Status tab (All, Active, Paused, Executed, Cancelled)
        #[arg(short, long, default_value = "All")]
        tab: String,

        /// Filter by name or description (case-insensitive)
        #[arg(short, long, default_value = "")]
        search: String,
    },

    /// Connect or inspect a Stellar wallet
    Wallet {
        #[command(subcommand)]
        action: WalletAction,
    },

    /// Admin login session
    Admin {
        #[command(subcommand)]
        action: AdminAction,
    },

    /// Open a page path, applying the admin guard
    Open {
        /// Path such as /admin or /admin/all-plans
        path: String,
    },
}

#[derive(Subcommand)]
enum WalletAction {
    /// List supported wallets
    List,

    /// Connect through a wallet
    Connect {
        /// Wallet id (freighter, albedo, xbull, rabet, lobstr)
        wallet: String,

        /// Account address to use instead of prompting
        #[arg(short, long)]
        address: Option<String>,
    },

    /// Show the connected wallet
    Status,

    /// Forget the connected wallet
    Disconnect,
}

#[derive(Subcommand)]
enum AdminAction {
    /// Log in as admin
    Login {
        /// Admin email (prompted if omitted)
        #[arg(short, long)]
        email: Option<String>,

        /// Password (prompted if omitted)
        #[arg(short, long)]
        password: Option<String>,
    },

    /// Log out
    Logout,

    /// Show the admin session
    Status,
}

/// Resolve the storage directory: flag, then `INHERITX_DEMO_DIR`, then the
/// platform data directory.
fn resolve_storage_dir(flag: Option<String>) -> PathBuf {
    if let Some(dir) = flag {
        return PathBuf::from(dir);
    }
    if let Some(dir) = std::env::var_os("INHERITX_DEMO_DIR") {
        return PathBuf::from(dir);
    }
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("inheritx-demo")
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing
    let filter = if cli.verbose {
        EnvFilter::new("inheritx_demo_cli=debug,inheritx_core=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let storage_dir = resolve_storage_dir(cli.storage_dir);
    tracing::debug!(dir = %storage_dir.display(), "using storage directory");

    // Dispatch commands
    match cli.command {
        Commands::Plans { tab, search } => {
            commands::plans::run(&tab, &search, cli.json)?;
        }
        Commands::Wallet { action } => match action {
            WalletAction::List => {
                commands::wallet::list();
            }
            WalletAction::Connect { wallet, address } => {
                commands::wallet::connect(&storage_dir, &wallet, address).await?;
            }
            WalletAction::Status => {
                commands::wallet::status(&storage_dir, cli.json)?;
            }
            WalletAction::Disconnect => {
                commands::wallet::disconnect(&storage_dir)?;
            }
        },
        Commands::Admin { action } => match action {
            AdminAction::Login { email, password } => {
                commands::admin::login(&storage_dir, email, password).await?;
            }
            AdminAction::Logout => {
                commands::admin::logout(&storage_dir)?;
            }
            AdminAction::Status => {
                commands::admin::status(&storage_dir, cli.json)?;
            }
        },
        Commands::Open { path } => {
            commands::admin::open(&storage_dir, &path)?;
        }
    }

    Ok(())
}
