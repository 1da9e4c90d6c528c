//! Session commands: login, register, logout, whoami.

use clap::Args;
use validator::Validate;

use flyercast_core::{AppError, AppResult};
use flyercast_core::config::AppConfig;
use flyercast_entity::session::RegisterRequest;

use crate::output;
use crate::store::SessionStore;

use super::anonymous_client;

/// Arguments for `login`
#[derive(Debug, Args)]
pub struct LoginArgs {
    /// Account email address
    #[arg(short, long)]
    pub email: String,

    /// Account password (prompted when omitted)
    #[arg(short, long)]
    pub password: Option<String>,
}

/// Arguments for `register`
#[derive(Debug, Args)]
pub struct RegisterArgs {
    /// Name of the company to register
    #[arg(long)]
    pub company_name: String,

    /// Contact email address, used as the login
    #[arg(short, long)]
    pub email: String,

    /// Account password (prompted when omitted)
    #[arg(short, long)]
    pub password: Option<String>,
}

/// Sign in and persist the session.
pub async fn login(args: &LoginArgs, config: &AppConfig, store: &SessionStore) -> AppResult<()> {
    let password = read_password(args.password.as_deref())?;
    let client = anonymous_client(config)?;
    let session = client.login(&args.email, &password).await?;
    store.save(&session)?;
    output::print_success(&format!(
        "Signed in as {} ({})",
        session.email, session.role
    ));
    Ok(())
}

/// Register a company account and persist its session.
pub async fn register(
    args: &RegisterArgs,
    config: &AppConfig,
    store: &SessionStore,
) -> AppResult<()> {
    let password = read_password(args.password.as_deref())?;
    let profile = RegisterRequest {
        company_name: args.company_name.clone(),
        email: args.email.clone(),
        password,
    };
    profile
        .validate()
        .map_err(|e| AppError::validation(e.to_string()))?;

    let client = anonymous_client(config)?;
    let session = client.register(&profile).await?;
    store.save(&session)?;
    output::print_success(&format!(
        "Registered '{}' and signed in as {}",
        args.company_name, session.email
    ));
    Ok(())
}

/// Forget the stored session.
pub fn logout(store: &SessionStore) -> AppResult<()> {
    store.clear()?;
    output::print_success("Signed out");
    Ok(())
}

/// Show the active session.
pub fn whoami(store: &SessionStore) -> AppResult<()> {
    let session = store.require()?;
    output::print_kv("Email", &session.email);
    output::print_kv("Role", session.role.as_str());
    if let Some(company_id) = session.company_id {
        output::print_kv("Company", &company_id.to_string());
    }
    Ok(())
}

/// Use the provided password or prompt for one interactively.
fn read_password(provided: Option<&str>) -> AppResult<String> {
    match provided {
        Some(password) => Ok(password.to_string()),
        None => dialoguer::Password::new()
            .with_prompt("Password")
            .interact()
            .map_err(|e| AppError::validation(format!("Password prompt failed: {e}"))),
    }
}
