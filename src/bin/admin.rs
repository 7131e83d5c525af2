//! CLI administration tool for sakila-api.
//!
//! Runs storage diagnostics and the date-windowed reports from a terminal,
//! through the same services and validation as the HTTP API.
//!
//! # Usage
//!
//! ```bash
//! # Check storage connectivity
//! cargo run --bin admin -- db check
//!
//! # Apply pending migrations
//! cargo run --bin admin -- db migrate
//!
//! # Row counts
//! cargo run --bin admin -- stats
//!
//! # Reports
//! cargo run --bin admin -- report most-rented --from 2024-01-01 --to 2024-01-31 --limit 5
//! cargo run --bin admin -- report categories --from 2024-01-01 --to 2024-12-31
//! cargo run --bin admin -- report monthly --from 2024-01-01 --to 2024-12-31 --revenue
//! ```
//!
//! # Environment Variables
//!
//! Same as the server; see `sakila_api::config`.

use sakila_api::application::services::{FilmService, RentalService};
use sakila_api::config::{self, Config, StorageBackend};
use sakila_api::domain::entities::RentalFilter;
use sakila_api::infrastructure::persistence::Repositories;
use sakila_api::server;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;

/// CLI tool for inspecting the rental store.
#[derive(Parser)]
#[command(name = "admin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Top-level command groups.
#[derive(Subcommand)]
enum Commands {
    /// Show row counts
    Stats,

    /// Storage operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },

    /// Run a date-windowed report
    Report {
        #[command(subcommand)]
        report: ReportKind,
    },
}

/// Storage subcommands.
#[derive(Subcommand)]
enum DbAction {
    /// Check storage connectivity
    Check,

    /// Apply pending database migrations
    Migrate,
}

/// Report subcommands.
#[derive(Subcommand)]
enum ReportKind {
    /// Films with the most rentals in the window
    MostRented {
        #[command(flatten)]
        window: WindowArgs,

        /// Number of films (1 to 100)
        #[arg(short, long, default_value_t = 10, allow_negative_numbers = true)]
        limit: i32,
    },

    /// Categories with the most rentals in the window
    Categories {
        #[command(flatten)]
        window: WindowArgs,

        /// Number of categories
        #[arg(short, long, default_value_t = 10, allow_negative_numbers = true)]
        limit: i32,
    },

    /// Rentals per month in the window
    Monthly {
        #[command(flatten)]
        window: WindowArgs,

        /// Show payment totals instead of rental counts
        #[arg(short, long)]
        revenue: bool,
    },
}

#[derive(clap::Args)]
struct WindowArgs {
    /// First day, YYYY-MM-DD
    #[arg(long)]
    from: String,

    /// Last day, YYYY-MM-DD
    #[arg(long)]
    to: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = config::load_from_env().context("Invalid configuration")?;

    match cli.command {
        Commands::Db { action } => handle_db_action(action, &config).await?,
        Commands::Stats => {
            let repositories = server::build_repositories(&config, false).await?;
            handle_stats(&repositories).await?;
        }
        Commands::Report { report } => {
            let repositories = server::build_repositories(&config, false).await?;
            handle_report(report, repositories).await?;
        }
    }

    Ok(())
}

/// Handles storage diagnostic commands.
async fn handle_db_action(action: DbAction, config: &Config) -> Result<()> {
    match action {
        DbAction::Check => {
            println!("{}", "🔍 Checking storage connection...".bright_blue());

            let repositories = server::build_repositories(config, false).await?;
            repositories
                .health
                .ping()
                .await
                .map_err(|e| anyhow::anyhow!("Storage check failed: {}", e))?;

            println!(
                "{} ({})",
                "✅ Storage connection OK".green().bold(),
                repositories.health.backend().bright_white()
            );
        }
        DbAction::Migrate => {
            if config.storage_backend != StorageBackend::Postgres {
                anyhow::bail!("Migrations only apply to the postgres backend");
            }

            println!("{}", "🛠  Applying migrations...".bright_blue());

            let pool = server::connect(config).await?;
            sqlx::migrate!("./migrations")
                .run(&pool)
                .await
                .context("Failed to apply migrations")?;

            println!("{}", "✅ Migrations applied".green().bold());
        }
    }

    Ok(())
}

/// Displays row counts.
async fn handle_stats(repositories: &Repositories) -> Result<()> {
    println!("{}", "📊 Statistics".bright_blue().bold());
    println!();

    let (customers, films, rentals) = tokio::try_join!(
        repositories.customers.count(None),
        repositories.films.count(None),
        repositories.rentals.count(RentalFilter::default()),
    )
    .map_err(|e| anyhow::anyhow!("Failed to count rows: {}", e))?;

    println!(
        "  Customers: {}",
        customers.to_string().bright_green().bold()
    );
    println!("  Films:     {}", films.to_string().bright_green().bold());
    println!("  Rentals:   {}", rentals.to_string().bright_green().bold());
    println!();

    Ok(())
}

/// Runs one report and prints it as a table.
async fn handle_report(report: ReportKind, repositories: Repositories) -> Result<()> {
    let films = FilmService::new(repositories.films);
    let rentals = RentalService::new(repositories.rentals);

    match report {
        ReportKind::MostRented { window, limit } => {
            let rows = films
                .get_most_rented_films(limit, &window.from, &window.to)
                .await
                .map_err(|e| anyhow::anyhow!("{}", e))?;

            print_header("🎬 Most rented films", &window);
            println!(
                "  {:<6} {:<40} {:>8}",
                "ID".bright_white().bold(),
                "Title".bright_white().bold(),
                "Rentals".bright_white().bold()
            );
            println!("  {}", "─".repeat(56).bright_black());
            for row in &rows {
                println!(
                    "  {:<6} {:<40} {:>8}",
                    row.film_id.to_string().bright_black(),
                    row.title.cyan(),
                    row.rental_count
                );
            }
            print_footer(rows.len());
        }
        ReportKind::Categories { window, limit } => {
            let rows = films
                .get_most_watched_categories(limit, &window.from, &window.to)
                .await
                .map_err(|e| anyhow::anyhow!("{}", e))?;

            print_header("🏷  Most watched categories", &window);
            println!(
                "  {:<6} {:<24} {:>8}",
                "ID".bright_white().bold(),
                "Category".bright_white().bold(),
                "Rentals".bright_white().bold()
            );
            println!("  {}", "─".repeat(40).bright_black());
            for row in &rows {
                println!(
                    "  {:<6} {:<24} {:>8}",
                    row.category_id.to_string().bright_black(),
                    row.name.cyan(),
                    row.rental_count
                );
            }
            print_footer(rows.len());
        }
        ReportKind::Monthly {
            window,
            revenue: true,
        } => {
            let rows = rentals
                .get_monthly_rental_revenue(&window.from, &window.to)
                .await
                .map_err(|e| anyhow::anyhow!("{}", e))?;

            print_header("💰 Monthly revenue", &window);
            println!(
                "  {:<8} {:>12}",
                "Month".bright_white().bold(),
                "Amount".bright_white().bold()
            );
            println!("  {}", "─".repeat(21).bright_black());
            for row in &rows {
                println!(
                    "  {:<8} {:>12}",
                    row.month.format("%Y-%m").to_string().cyan(),
                    row.amount.to_string()
                );
            }
            print_footer(rows.len());
        }
        ReportKind::Monthly {
            window,
            revenue: false,
        } => {
            let rows = rentals
                .get_monthly_rentals_summary(&window.from, &window.to)
                .await
                .map_err(|e| anyhow::anyhow!("{}", e))?;

            print_header("📅 Monthly rentals", &window);
            println!(
                "  {:<8} {:>8} {:>8}",
                "Month".bright_white().bold(),
                "Rentals".bright_white().bold(),
                "Open".bright_white().bold()
            );
            println!("  {}", "─".repeat(26).bright_black());
            for row in &rows {
                println!(
                    "  {:<8} {:>8} {:>8}",
                    row.month.format("%Y-%m").to_string().cyan(),
                    row.rentals,
                    row.open_rentals
                );
            }
            print_footer(rows.len());
        }
    }

    Ok(())
}

fn print_header(title: &str, window: &WindowArgs) {
    println!("{}", title.bright_blue().bold());
    println!(
        "  {} {} → {}",
        "Window:".bright_black(),
        window.from.bright_white(),
        window.to.bright_white()
    );
    println!();
}

fn print_footer(rows: usize) {
    if rows == 0 {
        println!("{}", "  No rentals in this window".yellow());
    }
    println!();
    println!("  Rows: {}", rows.to_string().bright_white().bold());
    println!();
}
