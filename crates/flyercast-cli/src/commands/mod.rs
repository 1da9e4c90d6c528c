//! CLI command definitions and dispatch.

pub mod auth;
pub mod company;
pub mod flyer;
pub mod review;

use clap::{Parser, Subcommand};

use flyercast_client::ApiClient;
use flyercast_core::AppResult;
use flyercast_core::config::AppConfig;
use flyercast_entity::session::Session;

use crate::output::OutputFormat;
use crate::store::SessionStore;

/// Flyercast — flyer distribution and review-request dashboard
#[derive(Debug, Parser)]
#[command(name = "flyercast", version, about, long_about = None)]
pub struct Cli {
    /// Configuration environment (reads config/<env>.toml as overlay)
    #[arg(short, long, default_value = "development")]
    pub env: String,

    /// Output format
    #[arg(short, long, value_enum, default_value = "table")]
    pub format: OutputFormat,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Sign in with an account email and password
    Login(auth::LoginArgs),
    /// Register a new company account
    Register(auth::RegisterArgs),
    /// Forget the stored session
    Logout,
    /// Show the active session
    Whoami,
    /// Company registry management
    Company(company::CompanyArgs),
    /// Flyer management, download, and sharing
    Flyer(flyer::FlyerArgs),
    /// Review-request customer management
    Review(review::ReviewArgs),
}

impl Cli {
    /// Execute the CLI command
    pub async fn execute(&self, config: &AppConfig) -> AppResult<()> {
        let store = SessionStore::default_location()?;
        match &self.command {
            Commands::Login(args) => auth::login(args, config, &store).await,
            Commands::Register(args) => auth::register(args, config, &store).await,
            Commands::Logout => auth::logout(&store),
            Commands::Whoami => auth::whoami(&store),
            Commands::Company(args) => company::execute(args, config, &store, self.format).await,
            Commands::Flyer(args) => flyer::execute(args, config, &store, self.format).await,
            Commands::Review(args) => review::execute(args, config, &store, self.format).await,
        }
    }
}

/// Helper: build an unauthenticated client from config.
pub fn anonymous_client(config: &AppConfig) -> AppResult<ApiClient> {
    ApiClient::new(&config.api)
}

/// Helper: load the stored session and build a client carrying it.
pub fn authed_client(config: &AppConfig, store: &SessionStore) -> AppResult<(ApiClient, Session)> {
    let session = store.require()?;
    let client = ApiClient::new(&config.api)?.with_token(session.token.clone());
    Ok((client, session))
}
