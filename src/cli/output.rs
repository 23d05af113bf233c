//! CLI output formatting utilities

use clap::ValueEnum;
use colored::Colorize;
use comfy_table::{presets::UTF8_FULL, Cell, Color, ContentArrangement, Table};

use crate::store::UserRecord;

/// Output format for listing commands
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Table,
    Json,
}

/// Print a success message
pub fn success(message: &str) {
    println!("{} {}", "✓".green(), message);
}

/// Print an error message
pub fn error(message: &str) {
    eprintln!("{} {}", "✗".red(), message);
}

/// Print a warning message
pub fn warn(message: &str) {
    println!("{} {}", "⚠".yellow(), message);
}

/// Print an info message
pub fn info(message: &str) {
    println!("{} {}", "ℹ".blue(), message);
}

/// Print a table of registered users
pub fn print_user_table(users: &[UserRecord]) {
    if users.is_empty() {
        info("No users configured. Add a [[users]] entry to keygate.toml");
        return;
    }

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec![
            Cell::new("Email").fg(Color::Cyan),
            Cell::new("Status").fg(Color::Cyan),
        ]);

    for user in users {
        let (status, color) = if user.disabled {
            ("disabled", Color::Red)
        } else {
            ("active", Color::Green)
        };
        table.add_row(vec![Cell::new(&user.email), Cell::new(status).fg(color)]);
    }

    println!("{}", table);
}
