//! CLI argument definitions.
//!
//! Uses clap derive macros for type-safe argument parsing.

use clap::{Args, Parser, Subcommand};

use domain::{Customer, CustomerId};

/// Customer registry - create, inspect, update and delete customer records
#[derive(Parser, Debug)]
#[command(name = "customer-service")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Register a new customer
    Create(CustomerArgs),

    /// Overwrite every field of an existing customer
    Update(UpdateArgs),

    /// Show one customer
    Get {
        /// Customer ID
        id: CustomerId,
    },

    /// List all customers, newest first
    List {
        /// Print a JSON array instead of one line per customer
        #[arg(long)]
        json: bool,
    },

    /// Delete a customer
    Delete {
        /// Customer ID
        id: CustomerId,

        /// Confirm the deletion
        #[arg(short, long)]
        yes: bool,
    },

    /// Check database connectivity
    Ping,
}

/// Editable customer fields
#[derive(Args, Debug, Clone)]
pub struct CustomerArgs {
    /// Customer name
    #[arg(long)]
    pub name: String,

    /// Document id (blank means none)
    #[arg(long)]
    pub document: Option<String>,

    /// Email address
    #[arg(long, default_value = "")]
    pub email: String,

    /// Phone number
    #[arg(long, default_value = "")]
    pub phone: String,
}

impl CustomerArgs {
    /// Build an unsaved customer from the arguments
    pub fn into_customer(self) -> Customer {
        Customer::new(self.name, self.document, self.email, self.phone)
    }
}

/// Arguments for the update command
#[derive(Args, Debug, Clone)]
pub struct UpdateArgs {
    /// ID of the customer to overwrite
    #[arg(long)]
    pub id: CustomerId,

    #[command(flatten)]
    pub fields: CustomerArgs,
}
