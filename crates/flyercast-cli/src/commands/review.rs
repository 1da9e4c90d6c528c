//! Review-request customer CLI commands.

use clap::{Args, Subcommand};
use serde::Serialize;
use tabled::Tabled;
use validator::Validate;

use flyercast_core::config::AppConfig;
use flyercast_core::types::{CompanyId, CustomerId};
use flyercast_core::{AppError, AppResult};
use flyercast_entity::review::{CreateReviewCustomer, ReviewCustomer};

use crate::guard;
use crate::output::{self, OutputFormat};
use crate::store::SessionStore;

use super::authed_client;

/// Arguments for review commands
#[derive(Debug, Args)]
pub struct ReviewArgs {
    /// Review subcommand
    #[command(subcommand)]
    pub command: ReviewCommand,
}

/// Review subcommands
#[derive(Debug, Subcommand)]
pub enum ReviewCommand {
    /// Enroll a customer for Day-0/1/3 review requests
    Add {
        /// Customer display name
        #[arg(long)]
        name: String,
        /// WhatsApp phone number in international format
        #[arg(long)]
        phone: String,
        /// Company (defaults to the session's own company)
        #[arg(long)]
        company: Option<CompanyId>,
    },
    /// List a company's enrolled customers
    List {
        /// Company (defaults to the session's own company)
        #[arg(long)]
        company: Option<CompanyId>,
    },
    /// Show one customer
    Get {
        /// Customer ID
        id: CustomerId,
    },
    /// Stop further automated messages for a customer
    Deactivate {
        /// Customer ID
        id: CustomerId,
    },
}

/// Customer display row for table output
#[derive(Debug, Serialize, Tabled)]
struct CustomerRow {
    /// Customer ID
    id: String,
    /// Name
    name: String,
    /// Phone
    phone: String,
    /// Active
    active: String,
    /// Day 0
    day0: String,
    /// Day 1
    day1: String,
    /// Day 3
    day3: String,
}

fn sent(flag: bool) -> String {
    if flag { "sent".into() } else { "-".into() }
}

impl From<&ReviewCustomer> for CustomerRow {
    fn from(customer: &ReviewCustomer) -> Self {
        Self {
            id: customer.id.to_string(),
            name: customer.customer_name.clone(),
            phone: customer.phone_number.clone(),
            active: if customer.is_active {
                "yes".into()
            } else {
                "no".into()
            },
            day0: sent(customer.day0_sent),
            day1: sent(customer.day1_sent),
            day3: sent(customer.day3_sent),
        }
    }
}

/// Execute review commands
pub async fn execute(
    args: &ReviewArgs,
    config: &AppConfig,
    store: &SessionStore,
    format: OutputFormat,
) -> AppResult<()> {
    let (client, session) = authed_client(config, store)?;

    match &args.command {
        ReviewCommand::Add {
            name,
            phone,
            company,
        } => {
            let company_id = guard::resolve_company(&session, *company)?;

            // Review requests embed the GBP review link; refuse the
            // enrollment while it is missing.
            let company = client.get_company(company_id).await?;
            if !company.review_ready() {
                return Err(AppError::validation(
                    "The company has no GBP review link configured. \
                     Run `flyercast company set-review-link <url>` first",
                ));
            }

            let create = CreateReviewCustomer {
                customer_name: name.clone(),
                phone_number: phone.clone(),
                company_id,
            };
            create
                .validate()
                .map_err(|e| AppError::validation(e.to_string()))?;

            let customer = client.add_review_customer(&create).await?;
            output::print_success(&format!(
                "Customer '{}' enrolled ({})",
                customer.customer_name, customer.id
            ));
        }
        ReviewCommand::List { company } => {
            let company_id = guard::resolve_company(&session, *company)?;
            let customers = client.list_review_customers(company_id).await?;
            let rows: Vec<CustomerRow> = customers.iter().map(CustomerRow::from).collect();
            output::print_list(&rows, format);
        }
        ReviewCommand::Get { id } => {
            let customer = client.get_review_customer(*id).await?;
            output::print_item(&customer, format);
        }
        ReviewCommand::Deactivate { id } => {
            client.deactivate_review_customer(*id).await?;
            output::print_success(&format!(
                "Customer {} deactivated; no further messages will be sent",
                id
            ));
        }
    }

    Ok(())
}
