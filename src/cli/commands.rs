//! CLI command implementations

use anyhow::Result;
use std::fs;

use crate::auth::{TokenAuthority, UserInfo};
use crate::cli::{error, info, print_user_table, success, warn, OutputFormat};
use crate::config::{self, Config};
use crate::store::MemoryStore;

/// Initialize a new keygate.toml configuration file
pub fn init() -> Result<()> {
    let config_path = std::path::Path::new("keygate.toml");

    if config_path.exists() {
        warn("keygate.toml already exists");
        return Ok(());
    }

    let content = config::loader::default_config_content();
    fs::write(config_path, content)?;

    success("Created keygate.toml");
    info("Edit the configuration file, then run 'keygate issue --email <email>' to log in");

    Ok(())
}

/// Hash a password for a [[users]] config entry
pub fn hash(password: Option<String>, cost: u32) -> Result<()> {
    let password = match password {
        Some(password) => password,
        None => dialoguer::Password::new()
            .with_prompt("Password")
            .with_confirmation("Confirm password", "Passwords do not match")
            .interact()?,
    };

    let digest = bcrypt::hash(&password, cost)?;
    println!("{}", digest);

    Ok(())
}

/// Authenticate a user and print an access token
pub fn issue(email: &str, password: Option<String>, ttl: Option<i64>) -> Result<()> {
    let authority = load_authority()?;

    let password = match password {
        Some(password) => password,
        None => dialoguer::Password::new().with_prompt("Password").interact()?,
    };

    let user = match authority.authenticate(email, &password) {
        Ok(user) => user,
        Err(e) => {
            error(&format!("Login failed: {}", e));
            return Err(e.into());
        }
    };

    let token = match ttl {
        Some(minutes) => {
            authority.issue_token_with_ttl(&user.email, chrono::Duration::minutes(minutes))?
        }
        None => authority.issue_token(&user.email)?,
    };

    success(&format!("Issued token for {}", user.email));
    println!("{}", token);

    Ok(())
}

/// Verify an access token and print the user it resolves to
pub fn verify(token: &str, format: OutputFormat) -> Result<()> {
    let authority = load_authority()?;

    let user = match authority.verify_token(token) {
        Ok(user) => user,
        Err(e) => {
            error(&format!("Verification failed: {}", e));
            return Err(e.into());
        }
    };

    match format {
        OutputFormat::Table => {
            success(&format!("Token is valid for {}", user.email));
        }
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&UserInfo::from(user))?;
            println!("{}", json);
        }
    }

    Ok(())
}

/// List configured users
pub fn users(format: OutputFormat) -> Result<()> {
    let config = config::load_config()?;

    match format {
        OutputFormat::Table => {
            print_user_table(&config.users);
        }
        OutputFormat::Json => {
            let users: Vec<UserInfo> = config.users.into_iter().map(UserInfo::from).collect();
            let json = serde_json::to_string_pretty(&users)?;
            println!("{}", json);
        }
    }

    Ok(())
}

/// Build a token authority from the on-disk configuration
fn load_authority() -> Result<TokenAuthority<MemoryStore>> {
    let config: Config = config::load_config()?;
    let store = MemoryStore::from_records(config.users.clone());
    Ok(TokenAuthority::new(store, &config.auth))
}
