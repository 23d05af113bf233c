//! CLI interface for Keygate

pub mod commands;
mod output;

pub use output::*;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "keygate")]
#[command(version)]
#[command(about = "Password login and JWT issuance for small services", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize a new keygate.toml configuration file
    Init,

    /// Hash a password for a [[users]] config entry
    Hash {
        /// Password to hash (prompts interactively when omitted)
        password: Option<String>,

        /// Bcrypt cost factor
        #[arg(short, long, default_value = "12")]
        cost: u32,
    },

    /// Authenticate a user and print an access token
    Issue {
        /// Email of the user to authenticate
        #[arg(short, long)]
        email: String,

        /// Password (prompts interactively when omitted)
        #[arg(short, long)]
        password: Option<String>,

        /// Override the configured token lifetime, in minutes
        #[arg(short, long)]
        ttl: Option<i64>,
    },

    /// Verify an access token and print the user it resolves to
    Verify {
        /// The token to verify
        token: String,

        /// Output format
        #[arg(short, long, default_value = "table")]
        format: OutputFormat,
    },

    /// List configured users
    Users {
        /// Output format
        #[arg(short, long, default_value = "table")]
        format: OutputFormat,
    },
}
