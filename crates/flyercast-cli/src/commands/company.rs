//! Company registry CLI commands.

use clap::{Args, Subcommand};
use serde::Serialize;
use tabled::Tabled;

use flyercast_core::AppResult;
use flyercast_core::config::AppConfig;
use flyercast_core::types::CompanyId;
use flyercast_entity::company::{Company, CreateCompany, UpdateCompany};

use crate::guard;
use crate::output::{self, OutputFormat};
use crate::store::SessionStore;

use super::authed_client;

/// Arguments for company commands
#[derive(Debug, Args)]
pub struct CompanyArgs {
    /// Company subcommand
    #[command(subcommand)]
    pub command: CompanyCommand,
}

/// Company subcommands
#[derive(Debug, Subcommand)]
pub enum CompanyCommand {
    /// List all companies (Admin)
    List,
    /// Show one company
    Get {
        /// Company ID (defaults to the session's own company)
        id: Option<CompanyId>,
    },
    /// Create a company record (Admin)
    Create {
        /// Display name
        #[arg(long)]
        name: String,
        /// Contact email address
        #[arg(long)]
        contact_email: String,
        /// Google Business Profile review URL
        #[arg(long)]
        review_link: Option<String>,
    },
    /// Update a company record
    Update {
        /// Company ID (defaults to the session's own company)
        #[arg(long)]
        id: Option<CompanyId>,
        /// New display name
        #[arg(long)]
        name: Option<String>,
        /// New contact email address
        #[arg(long)]
        contact_email: Option<String>,
    },
    /// Delete a company record (Admin)
    Delete {
        /// Company ID
        id: CompanyId,
    },
    /// Set the Google Business Profile review URL
    SetReviewLink {
        /// The review URL customers are sent to
        url: String,
        /// Company ID (defaults to the session's own company)
        #[arg(long)]
        company: Option<CompanyId>,
    },
}

/// Company display row for table output
#[derive(Debug, Serialize, Tabled)]
struct CompanyRow {
    /// Company ID
    id: String,
    /// Display name
    name: String,
    /// Contact email
    contact_email: String,
    /// GBP review link
    review_link: String,
}

impl From<&Company> for CompanyRow {
    fn from(company: &Company) -> Self {
        Self {
            id: company.id.to_string(),
            name: company.name.clone(),
            contact_email: company.contact_email.clone(),
            review_link: company.review_link_url.clone().unwrap_or_default(),
        }
    }
}

/// Execute company commands
pub async fn execute(
    args: &CompanyArgs,
    config: &AppConfig,
    store: &SessionStore,
    format: OutputFormat,
) -> AppResult<()> {
    let (client, session) = authed_client(config, store)?;

    match &args.command {
        CompanyCommand::List => {
            guard::require_admin(&session)?;
            let companies = client.list_companies().await?;
            let rows: Vec<CompanyRow> = companies.iter().map(CompanyRow::from).collect();
            output::print_list(&rows, format);
        }
        CompanyCommand::Get { id } => {
            let id = guard::resolve_company(&session, *id)?;
            let company = client.get_company(id).await?;
            output::print_item(&company, format);
        }
        CompanyCommand::Create {
            name,
            contact_email,
            review_link,
        } => {
            guard::require_admin(&session)?;
            let company = client
                .create_company(&CreateCompany {
                    name: name.clone(),
                    contact_email: contact_email.clone(),
                    review_link_url: review_link.clone(),
                })
                .await?;
            output::print_success(&format!("Company '{}' created ({})", company.name, company.id));
        }
        CompanyCommand::Update {
            id,
            name,
            contact_email,
        } => {
            let id = guard::resolve_company(&session, *id)?;
            let company = client
                .update_company(
                    id,
                    &UpdateCompany {
                        name: name.clone(),
                        contact_email: contact_email.clone(),
                        review_link_url: None,
                    },
                )
                .await?;
            output::print_success(&format!("Company '{}' updated", company.name));
        }
        CompanyCommand::Delete { id } => {
            guard::require_admin(&session)?;
            client.delete_company(*id).await?;
            output::print_success(&format!("Company {} deleted", id));
        }
        CompanyCommand::SetReviewLink { url, company } => {
            let id = guard::resolve_company(&session, *company)?;
            let company = client
                .update_company(
                    id,
                    &UpdateCompany {
                        name: None,
                        contact_email: None,
                        review_link_url: Some(url.clone()),
                    },
                )
                .await?;
            output::print_success(&format!("Review link set for '{}'", company.name));
        }
    }

    Ok(())
}
