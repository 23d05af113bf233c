use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use keygate::cli::{commands, Cli, Commands};

fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "keygate=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Init => commands::init(),
        Commands::Hash { password, cost } => commands::hash(password, cost),
        Commands::Issue {
            email,
            password,
            ttl,
        } => commands::issue(&email, password, ttl),
        Commands::Verify { token, format } => commands::verify(&token, format),
        Commands::Users { format } => commands::users(format),
    }
}
