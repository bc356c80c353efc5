//! Bookmarks CLI - migrations, accounts and tokens.
//!
//! # Usage
//!
//! ```bash
//! # Apply database migrations
//! bookmarks-cli migrate
//!
//! # Create a user
//! bookmarks-cli user create -e ann@example.com -p 'correct horse' --first-name Ann
//!
//! # Print an access token for that user
//! bookmarks-cli token issue -e ann@example.com -p 'correct horse'
//! ```
//!
//! All commands read `DATABASE_URL` (and `.env`). `token issue` also reads
//! `JWT_SECRET` and `JWT_EXPIRES_IN_SECS` exactly as the server does.

#![cfg_attr(not(test), forbid(unsafe_code))]

use clap::{Parser, Subcommand};
use secrecy::SecretString;

mod commands;

#[derive(Parser)]
#[command(name = "bookmarks-cli")]
#[command(author, version, about = "Bookmarks API CLI tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run database migrations
    Migrate,
    /// Manage users
    User {
        #[command(subcommand)]
        action: UserAction,
    },
    /// Issue access tokens
    Token {
        #[command(subcommand)]
        action: TokenAction,
    },
}

#[derive(Subcommand)]
enum UserAction {
    /// Create a new user
    Create {
        /// Email address
        #[arg(short, long)]
        email: String,

        /// Password (at least 8 characters)
        #[arg(short, long)]
        password: String,

        #[arg(long)]
        first_name: Option<String>,

        #[arg(long)]
        last_name: Option<String>,
    },
}

#[derive(Subcommand)]
enum TokenAction {
    /// Verify credentials and print a bearer token
    Issue {
        /// Email address
        #[arg(short, long)]
        email: String,

        /// Password
        #[arg(short, long)]
        password: String,
    },
}

#[tokio::main]
async fn main() {
    // Logs go to stderr so `token issue` output can be piped
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let cli = Cli::parse();

    let result: Result<(), Box<dyn std::error::Error>> = run(cli).await;

    if let Err(e) = result {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command {
        Commands::Migrate => commands::migrate::run().await?,
        Commands::User { action } => match action {
            UserAction::Create {
                email,
                password,
                first_name,
                last_name,
            } => {
                let password = SecretString::from(password);
                commands::user::create(&email, &password, first_name, last_name).await?;
            }
        },
        Commands::Token { action } => match action {
            TokenAction::Issue { email, password } => {
                let password = SecretString::from(password);
                commands::token::issue(&email, &password).await?;
            }
        },
    }
    Ok(())
}
