//! CLI command implementations.
//!
//! Each handler calls the service layer and renders the outcome as text. The
//! text is returned rather than printed so callers decide where it goes.

use common::{AppError, AppResult};
use domain::Customer;

use crate::cli::Commands;
use crate::infra::Database;
use crate::service::CustomerService;

/// Execute one command against the service.
pub async fn execute(
    command: Commands,
    service: &dyn CustomerService,
    database: &Database,
) -> AppResult<String> {
    match command {
        Commands::Create(args) => {
            let created = service.create_customer(args.into_customer()).await?;
            let id = created.require_id()?;
            Ok(format!("Customer created with ID: {id}"))
        }
        Commands::Update(args) => {
            let customer = args.fields.into_customer().with_id(args.id);
            service.update_customer(customer).await?;
            Ok("Customer updated.".to_string())
        }
        Commands::Get { id } => match service.get_by_id(id).await? {
            Some(customer) => Ok(render_details(&customer)),
            None => Ok("Customer not found.".to_string()),
        },
        Commands::List { json } => {
            let customers = service.list_all().await?;
            if json {
                serde_json::to_string_pretty(&customers)
                    .map_err(|e| AppError::internal(format!("failed to encode customers: {e}")))
            } else if customers.is_empty() {
                Ok("No customers registered.".to_string())
            } else {
                Ok(customers
                    .iter()
                    .map(Customer::summary_line)
                    .collect::<Vec<_>>()
                    .join("\n"))
            }
        }
        Commands::Delete { id, yes } => {
            if !yes {
                return Err(AppError::validation(format!(
                    "Refusing to delete customer {id} without --yes"
                )));
            }
            service.delete_by_id(id).await?;
            Ok("Customer deleted.".to_string())
        }
        Commands::Ping => {
            database.ping().await?;
            Ok("Database reachable.".to_string())
        }
    }
}

fn render_details(customer: &Customer) -> String {
    let id = customer.id.map(|id| id.to_string()).unwrap_or_default();
    format!(
        "ID:       {id}\nName:     {}\nDocument: {}\nEmail:    {}\nPhone:    {}",
        customer.name,
        customer.document.as_deref().unwrap_or(""),
        customer.email,
        customer.phone,
    )
}
