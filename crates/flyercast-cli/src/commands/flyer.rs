//! Flyer CLI commands: month listing, upload, update, delete, download,
//! and the share pipeline.

use std::path::PathBuf;

use chrono::{Datelike, NaiveDate, Utc};
use clap::{Args, Subcommand};
use serde::Serialize;
use tabled::Tabled;

use flyercast_client::ApiClient;
use flyercast_core::config::AppConfig;
use flyercast_core::types::{CompanyId, FlyerId};
use flyercast_core::{AppError, AppResult};
use flyercast_entity::flyer::{Flyer, FlyerQuery, FlyerUpdate, FlyerUpload};
use flyercast_entity::session::Session;
use flyercast_share::{MediaReference, ShareOutcome, ShareResolver};

use crate::guard;
use crate::output::{self, OutputFormat};
use crate::store::SessionStore;

use super::authed_client;

/// Arguments for flyer commands
#[derive(Debug, Args)]
pub struct FlyerArgs {
    /// Flyer subcommand
    #[command(subcommand)]
    pub command: FlyerCommand,
}

/// Month selector shared by the flyer commands. Defaults to the current
/// month, matching the dashboard's initial view.
#[derive(Debug, Args)]
pub struct MonthArgs {
    /// Target year
    #[arg(long)]
    pub year: Option<i32>,

    /// Target month (1-12)
    #[arg(long)]
    pub month: Option<u32>,
}

impl MonthArgs {
    fn resolve(&self) -> (i32, u32) {
        let today = Utc::now().date_naive();
        (
            self.year.unwrap_or_else(|| today.year()),
            self.month.unwrap_or_else(|| today.month()),
        )
    }
}

/// Flyer subcommands
#[derive(Debug, Subcommand)]
pub enum FlyerCommand {
    /// List flyers for a month
    List {
        /// Restrict to one company (Admin may omit to see all)
        #[arg(long)]
        company: Option<CompanyId>,
        #[command(flatten)]
        month: MonthArgs,
    },
    /// Upload a new flyer image
    Upload {
        /// Flyer title
        #[arg(long)]
        title: String,
        /// Owning company (defaults to the session's own company)
        #[arg(long)]
        company: Option<CompanyId>,
        /// The month/date the flyer promotes (YYYY-MM-DD)
        #[arg(long)]
        for_date: NaiveDate,
        /// Path of the image file
        file: PathBuf,
    },
    /// Update a flyer; the image file is optional
    Update {
        /// Flyer ID
        id: FlyerId,
        /// New title
        #[arg(long)]
        title: Option<String>,
        /// New target date (YYYY-MM-DD)
        #[arg(long)]
        for_date: Option<NaiveDate>,
        /// Replacement image file
        #[arg(long)]
        file: Option<PathBuf>,
    },
    /// Delete a flyer
    Delete {
        /// Flyer ID
        id: FlyerId,
    },
    /// Download a flyer image
    Download {
        /// Flyer ID
        id: FlyerId,
        /// Restrict the lookup to one company
        #[arg(long)]
        company: Option<CompanyId>,
        #[command(flatten)]
        month: MonthArgs,
        /// Output path (defaults to the sanitized title in the
        /// configured download directory)
        #[arg(short, long)]
        out: Option<PathBuf>,
    },
    /// Share a flyer through the platform share surface
    Share {
        /// Flyer ID
        id: FlyerId,
        /// Restrict the lookup to one company
        #[arg(long)]
        company: Option<CompanyId>,
        #[command(flatten)]
        month: MonthArgs,
    },
}

/// Flyer display row for table output
#[derive(Debug, Serialize, Tabled)]
struct FlyerRow {
    /// Flyer ID
    id: String,
    /// Title
    title: String,
    /// Company
    company: String,
    /// Target date
    for_date: String,
    /// Uploaded at
    created_at: String,
}

impl From<&Flyer> for FlyerRow {
    fn from(flyer: &Flyer) -> Self {
        Self {
            id: flyer.id.to_string(),
            title: flyer.title.clone(),
            company: flyer.company_id.to_string(),
            for_date: flyer.for_date.to_string(),
            created_at: flyer.created_at.format("%Y-%m-%d %H:%M").to_string(),
        }
    }
}

/// Execute flyer commands
pub async fn execute(
    args: &FlyerArgs,
    config: &AppConfig,
    store: &SessionStore,
    format: OutputFormat,
) -> AppResult<()> {
    let (client, session) = authed_client(config, store)?;

    match &args.command {
        FlyerCommand::List { company, month } => {
            let flyers = list_month(&client, &session, *company, month).await?;
            let rows: Vec<FlyerRow> = flyers.iter().map(FlyerRow::from).collect();
            output::print_list(&rows, format);
        }
        FlyerCommand::Upload {
            title,
            company,
            for_date,
            file,
        } => {
            let company_id = guard::resolve_company(&session, *company)?;
            let flyer = client
                .upload_flyer(&FlyerUpload {
                    title: title.clone(),
                    company_id,
                    for_date: *for_date,
                    image_path: file.clone(),
                })
                .await?;
            output::print_success(&format!("Flyer '{}' uploaded ({})", flyer.title, flyer.id));
        }
        FlyerCommand::Update {
            id,
            title,
            for_date,
            file,
        } => {
            let flyer = client
                .update_flyer(
                    *id,
                    &FlyerUpdate {
                        title: title.clone(),
                        for_date: *for_date,
                        image_path: file.clone(),
                    },
                )
                .await?;
            output::print_success(&format!("Flyer '{}' updated", flyer.title));
        }
        FlyerCommand::Delete { id } => {
            client.delete_flyer(*id).await?;
            output::print_success(&format!("Flyer {} deleted", id));
        }
        FlyerCommand::Download {
            id,
            company,
            month,
            out,
        } => {
            let flyer = find_flyer(&client, &session, *id, *company, month).await?;
            let bytes = client.download_flyer(flyer.id).await?;
            let artifact = flyercast_share::artifact::Artifact::build(
                &flyer.title,
                flyer.image_url.as_deref(),
            );
            let path = match out {
                Some(path) => {
                    tokio::fs::write(path, &bytes).await?;
                    path.clone()
                }
                None => {
                    let sink =
                        flyercast_share::deliver::DownloadSink::new(config.share.download_dir.clone());
                    sink.deliver(&artifact, &bytes).await?
                }
            };
            output::print_success(&format!("Saved to {}", path.display()));
        }
        FlyerCommand::Share { id, company, month } => {
            let flyer = find_flyer(&client, &session, *id, *company, month).await?;
            let resolver = ShareResolver::for_client(&client, &config.share);
            let reference = MediaReference::for_flyer(&flyer);

            match resolver.resolve(&reference).await? {
                ShareOutcome::Shared => {
                    output::print_success(&format!("Shared '{}'", flyer.title));
                }
                ShareOutcome::Downloaded { path, instructions } => {
                    output::print_success(&format!("Saved to {}", path.display()));
                    if let Some(instructions) = instructions {
                        output::print_warning(&instructions);
                    }
                }
                // User dismissal closes the interaction without a word.
                ShareOutcome::Cancelled => {
                    tracing::debug!(flyer = %flyer.id, "Share cancelled by user");
                }
                ShareOutcome::Failed(err) => {
                    return Err(err.into());
                }
            }
        }
    }

    Ok(())
}

/// List the month's flyers with the session's company scoping applied.
async fn list_month(
    client: &ApiClient,
    session: &Session,
    company: Option<CompanyId>,
    month: &MonthArgs,
) -> AppResult<Vec<Flyer>> {
    let company_id = guard::resolve_company_filter(session, company)?;
    let (year, month) = month.resolve();
    let query = FlyerQuery::new(company_id, year, month)?;
    client.list_flyers(query).await
}

/// Find one flyer in the month listing, the way the dashboard acts on a
/// flyer from its loaded month view.
async fn find_flyer(
    client: &ApiClient,
    session: &Session,
    id: FlyerId,
    company: Option<CompanyId>,
    month: &MonthArgs,
) -> AppResult<Flyer> {
    let flyers = list_month(client, session, company, month).await?;
    flyers
        .into_iter()
        .find(|f| f.id == id)
        .ok_or_else(|| AppError::not_found(format!("Flyer {id} not found in the selected month")))
}
