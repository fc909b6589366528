//! CLI administration tool for pocket-services databases.
//!
//! Reads the SQLite files directly, without going through the HTTP API.
//!
//! # Usage
//!
//! ```bash
//! # Most visited short links
//! cargo run --bin admin -- --database-url sqlite://./data/urls.db links --limit 10
//!
//! # All to-do items
//! cargo run --bin admin -- --database-url sqlite://./data/todo.db items
//!
//! # Check a database and count its rows
//! cargo run --bin admin -- db check shortener
//!
//! # SQLite version and journal mode
//! cargo run --bin admin -- db info
//! ```
//!
//! # Environment Variables
//!
//! - `DATABASE_URL`: used when `--database-url` is not given
//!
//! The database file must already exist; this tool never creates one.

use pocket_services::domain::repositories::{LinkRepository, TodoRepository};
use pocket_services::infrastructure::database::{self, PoolSettings};
use pocket_services::infrastructure::persistence::{SqliteLinkRepository, SqliteTodoRepository};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use colored::*;
use sqlx::SqlitePool;
use std::sync::Arc;
use std::time::Duration;

/// CLI tool for inspecting pocket-services databases.
#[derive(Parser)]
#[command(name = "admin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// SQLite URL of the database to inspect (falls back to DATABASE_URL)
    #[arg(short, long, global = true)]
    database_url: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

/// Top-level command groups.
#[derive(Subcommand)]
enum Commands {
    /// List short links, most clicked first
    Links {
        /// Maximum number of links to show
        #[arg(short, long, default_value_t = 20)]
        limit: i64,
    },

    /// List all to-do items
    Items,

    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },
}

/// Database operation subcommands.
#[derive(Subcommand)]
enum DbAction {
    /// Check the connection and count rows of a service's table
    Check {
        #[arg(value_enum)]
        service: Target,
    },

    /// Show SQLite version and journal mode
    Info,
}

/// Which service's schema a database holds.
#[derive(Clone, Copy, ValueEnum)]
enum Target {
    Shortener,
    Todo,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let database_url = match cli.database_url {
        Some(url) => url,
        None => std::env::var("DATABASE_URL")
            .context("--database-url or DATABASE_URL must be set")?,
    };

    let pool = database::connect(&PoolSettings {
        database_url,
        max_connections: 1,
        busy_timeout: Duration::from_secs(5),
        create_if_missing: false,
    })
    .await?;

    match cli.command {
        Commands::Links { limit } => list_links(&pool, limit).await?,
        Commands::Items => list_items(&pool).await?,
        Commands::Db { action } => handle_db_action(action, &pool).await?,
    }

    pool.close().await;

    Ok(())
}

/// Prints the most clicked short links.
///
/// # Output Format
///
/// ```text
/// 🔗 Short Links
///
///   Code    Clicks  Created           Target
///   ──────────────────────────────────────────────────────────────
///   aB3xY9  42      2025-01-15 10:30  https://example.com/a/long/path
/// ```
async fn list_links(pool: &SqlitePool, limit: i64) -> Result<()> {
    println!("{}", "🔗 Short Links".bright_blue().bold());
    println!();

    let repo = SqliteLinkRepository::new(Arc::new(pool.clone()));

    let links = repo
        .list_most_clicked(limit)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to list links: {}", e))?;

    if links.is_empty() {
        println!("{}", "  No links found".yellow());
        return Ok(());
    }

    println!(
        "  {:<7} {:<7} {:<17} {}",
        "Code".bright_white().bold(),
        "Clicks".bright_white().bold(),
        "Created".bright_white().bold(),
        "Target".bright_white().bold()
    );
    println!("  {}", "─".repeat(75).bright_black());

    for link in &links {
        println!(
            "  {:<7} {:<7} {:<17} {}",
            link.short_code.cyan(),
            link.click_count.to_string().bright_green(),
            link.created_at
                .format("%Y-%m-%d %H:%M")
                .to_string()
                .bright_black(),
            link.target_url
        );
    }

    let total = repo
        .count()
        .await
        .map_err(|e| anyhow::anyhow!("Failed to count links: {}", e))?;

    println!();
    println!(
        "  Showing {} of {}",
        links.len().to_string().bright_white().bold(),
        total.to_string().bright_white().bold()
    );
    println!();

    Ok(())
}

/// Prints every to-do item with a completion marker.
async fn list_items(pool: &SqlitePool) -> Result<()> {
    println!("{}", "📋 To-do Items".bright_blue().bold());
    println!();

    let repo = SqliteTodoRepository::new(Arc::new(pool.clone()));

    let items = repo
        .list()
        .await
        .map_err(|e| anyhow::anyhow!("Failed to list items: {}", e))?;

    if items.is_empty() {
        println!("{}", "  No items found".yellow());
        return Ok(());
    }

    for item in &items {
        let marker = if item.completed {
            "[x]".green()
        } else {
            "[ ]".bright_black()
        };

        println!(
            "  {} {:<5} {}",
            marker,
            item.id.to_string().bright_black(),
            item.title.cyan()
        );

        if let Some(description) = &item.description {
            println!("          {}", description.bright_black());
        }
    }

    let done = items.iter().filter(|i| i.completed).count();

    println!();
    println!(
        "  Total: {}  Completed: {}",
        items.len().to_string().bright_white().bold(),
        done.to_string().bright_green().bold()
    );
    println!();

    Ok(())
}

/// Handles database diagnostic commands.
async fn handle_db_action(action: DbAction, pool: &SqlitePool) -> Result<()> {
    match action {
        DbAction::Check { service } => {
            println!("{}", "🔍 Checking database...".bright_blue());

            let arc_pool = Arc::new(pool.clone());
            let (table, rows) = match service {
                Target::Shortener => ("short_links", SqliteLinkRepository::new(arc_pool).count().await),
                Target::Todo => ("todo_items", SqliteTodoRepository::new(arc_pool).count().await),
            };
            let rows = rows.map_err(|e| anyhow::anyhow!("Failed to query {}: {}", table, e))?;

            println!("{}", "✅ Database connection OK".green().bold());
            println!("  {}: {} rows", table.cyan(), rows.to_string().bright_white());
        }
        DbAction::Info => {
            println!("{}", "ℹ️  Database Information".bright_blue().bold());
            println!();

            let version: String = sqlx::query_scalar("SELECT sqlite_version()")
                .fetch_one(pool)
                .await?;

            let journal_mode: String = sqlx::query_scalar("PRAGMA journal_mode")
                .fetch_one(pool)
                .await?;

            println!("  SQLite:       {}", version.bright_white());
            println!("  Journal mode: {}", journal_mode.bright_white());
            println!();
        }
    }

    Ok(())
}
