//! CLI administration tool for salon-scheduler.
//!
//! Inspects tenant operating hours and database state without going through
//! the HTTP API.
//!
//! # Usage
//!
//! ```bash
//! # Show a tenant's weekly schedule
//! cargo run --bin admin -- hours list --tenant 1
//!
//! # Check whether an instant is bookable (defaults to now)
//! cargo run --bin admin -- hours check --tenant 1 --at 2026-01-03T10:00:00Z
//!
//! # Check database connection
//! cargo run --bin admin -- db check
//! ```
//!
//! # Environment Variables
//!
//! - `DATABASE_URL` (required): PostgreSQL connection string

use salon_scheduler::application::services::OperatingHoursValidator;
use salon_scheduler::domain::entities::{DayOfWeek, OperatingHour};
use salon_scheduler::error::AppError;
use salon_scheduler::infrastructure::persistence::PgOperatingHourRepository;
use salon_scheduler::utils::datetime::{self, format_time_utc};

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::Input;
use sqlx::PgPool;
use std::sync::Arc;

/// CLI tool for managing salon-scheduler.
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
    /// Inspect tenant operating hours
    Hours {
        #[command(subcommand)]
        action: HoursAction,
    },

    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },
}

/// Operating hours subcommands.
#[derive(Subcommand)]
enum HoursAction {
    /// Show the weekly schedule of a tenant
    List {
        /// Tenant ID (prompted if omitted)
        #[arg(short, long)]
        tenant: Option<i64>,
    },

    /// Check whether an instant is bookable
    Check {
        /// Tenant ID (prompted if omitted)
        #[arg(short, long)]
        tenant: Option<i64>,

        /// Instant to check, RFC 3339 (defaults to now)
        #[arg(short, long)]
        at: Option<DateTime<Utc>>,
    },
}

/// Database operation subcommands.
#[derive(Subcommand)]
enum DbAction {
    /// Check database connection
    Check,

    /// Show database info
    Info,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let database_url = std::env::var("DATABASE_URL").context("DATABASE_URL must be set")?;

    let pool = PgPool::connect(&database_url)
        .await
        .context("Failed to connect to database")?;

    match cli.command {
        Commands::Hours { action } => handle_hours_action(action, &pool).await?,
        Commands::Db { action } => handle_db_action(action, &pool).await?,
    }

    Ok(())
}

/// Dispatches operating hours commands.
async fn handle_hours_action(action: HoursAction, pool: &PgPool) -> Result<()> {
    let repo = Arc::new(PgOperatingHourRepository::new(Arc::new(pool.clone())));
    let validator = OperatingHoursValidator::new(repo);

    match action {
        HoursAction::List { tenant } => {
            let tenant_id = tenant_or_prompt(tenant)?;
            list_hours(&validator, tenant_id).await?;
        }
        HoursAction::Check { tenant, at } => {
            let tenant_id = tenant_or_prompt(tenant)?;
            check_hours(&validator, tenant_id, at.unwrap_or_else(datetime::now)).await?;
        }
    }

    Ok(())
}

fn tenant_or_prompt(tenant: Option<i64>) -> Result<i64> {
    match tenant {
        Some(id) => Ok(id),
        None => Ok(Input::new().with_prompt("Tenant ID").interact_text()?),
    }
}

/// Prints the seven-day schedule of a tenant.
///
/// # Output Format
///
/// ```text
/// 🕘 Operating Hours (tenant 1)
///
///   Day         Open     Close    Status
///   ──────────────────────────────────────────
///   MONDAY      09:00    18:00    OPEN
///   SUNDAY      -        -        NOT CONFIGURED
/// ```
async fn list_hours(validator: &OperatingHoursValidator, tenant_id: i64) -> Result<()> {
    println!(
        "{}",
        format!("🕘 Operating Hours (tenant {tenant_id})")
            .bright_blue()
            .bold()
    );
    println!();

    let schedule = validator
        .tenant_schedule(tenant_id)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to load operating hours: {}", e))?;

    println!(
        "  {:<11} {:<8} {:<8} {}",
        "Day".bright_white().bold(),
        "Open".bright_white().bold(),
        "Close".bright_white().bold(),
        "Status".bright_white().bold()
    );
    println!("  {}", "─".repeat(42).bright_black());

    for day in DayOfWeek::ALL {
        // First record per day is the one bookings are checked against.
        let hours: Option<&OperatingHour> = schedule.iter().find(|h| h.day == day);

        let (open, close, status) = match hours {
            Some(h) if h.is_closed => ("-".to_string(), "-".to_string(), "CLOSED".red()),
            Some(h) => (h.start_time.clone(), h.end_time.clone(), "OPEN".green()),
            None => ("-".to_string(), "-".to_string(), "NOT CONFIGURED".yellow()),
        };

        println!(
            "  {:<11} {:<8} {:<8} {}",
            day.as_str().cyan(),
            open,
            close,
            status
        );
    }

    println!();
    println!(
        "  {}",
        "Days without a record are treated as closed.".bright_black()
    );
    println!();

    Ok(())
}

/// Runs the booking check for one instant and prints the outcome.
async fn check_hours(
    validator: &OperatingHoursValidator,
    tenant_id: i64,
    at: DateTime<Utc>,
) -> Result<()> {
    println!("{}", "🔎 Availability Check".bright_blue().bold());
    println!();
    println!("  Tenant: {}", tenant_id.to_string().cyan());
    println!(
        "  At:     {} ({} {} UTC)",
        at.to_rfc3339().cyan(),
        DayOfWeek::from_instant(at),
        format_time_utc(at)
    );
    println!();

    match validator.assert_within_operating_hours(tenant_id, at).await {
        Ok(()) => println!("{}", "✅ Bookable".green().bold()),
        Err(AppError::OperatingHours(violation)) => {
            println!("{} {}", "❌".red(), violation.to_string().red().bold());
        }
        Err(e) => return Err(anyhow::anyhow!("Check failed: {}", e)),
    }
    println!();

    Ok(())
}

/// Dispatches database commands.
async fn handle_db_action(action: DbAction, pool: &PgPool) -> Result<()> {
    match action {
        DbAction::Check => {
            println!("{}", "🔌 Database Check".bright_blue().bold());
            println!();

            sqlx::query("SELECT 1")
                .execute(pool)
                .await
                .context("Database is not reachable")?;

            println!("{}", "✅ Connection OK".green().bold());
            println!();
        }
        DbAction::Info => {
            println!("{}", "📊 Database Info".bright_blue().bold());
            println!();

            let version: String = sqlx::query_scalar("SELECT version()")
                .fetch_one(pool)
                .await?;
            println!("  Version: {}", version.bright_black());
            println!();

            for table in ["tenants", "operating_hours", "appointments"] {
                let count: i64 = sqlx::query_scalar(&format!("SELECT COUNT(*) FROM {table}"))
                    .fetch_one(pool)
                    .await?;
                println!(
                    "  {:<16} {}",
                    table.cyan(),
                    count.to_string().bright_white().bold()
                );
            }
            println!();
        }
    }

    Ok(())
}
