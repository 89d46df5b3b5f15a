//! Campus CLI
//!
//! Command-line interface over the dashboard core:
//! - Validate a student record
//! - Print the dashboard summary
//! - Resolve a route path
//! - Generate a default config file

use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use campus::config::generate_default_config;
use campus::views::{AcademicsView, DashboardView, ProfileView, ScheduleTab};
use campus::{Config, Route, StudentRecord};

#[derive(Parser)]
#[command(name = "campus")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Student dashboard tooling")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Config file (default: user config dir, then ./campus.toml)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Student record TOML (default: the embedded record)
    #[arg(short, long, global = true)]
    pub record: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Load and validate a student record
    Check,

    /// Print the dashboard summary
    Summary {
        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Table)]
        format: OutputFormat,
    },

    /// Resolve a path to the page it selects
    Route {
        /// Path or fragment, e.g. "#/schedule"
        path: String,
    },

    /// Generate default config file
    Config {
        /// Output path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[derive(Clone, Copy, ValueEnum)]
pub enum OutputFormat {
    Table,
    Json,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => Config::load_with_env(path)
            .with_context(|| format!("loading config from {}", path.display()))?,
        None => Config::load_default(),
    };
    init_tracing(&config);

    match cli.command {
        Commands::Check => {
            let record = load_record(cli.record.as_ref())?;
            println!("Record OK");
            println!("  Student:   {}", record.profile.name);
            println!("  Semesters: {}", record.academics.len());
            println!("  Subjects:  {}", record.subjects.len());
            println!("  Events:    {}", record.events.len());
        }

        Commands::Summary { format } => {
            let record = load_record(cli.record.as_ref())?;
            let dashboard = DashboardView::build(&record, &config);

            match format {
                OutputFormat::Json => {
                    let body = serde_json::json!({
                        "dashboard": dashboard,
                        "academics": AcademicsView::build(&record, &config),
                        "profile": ProfileView::build(&record),
                    });
                    println!("{}", serde_json::to_string_pretty(&body)?);
                }
                OutputFormat::Table => print_summary(&record, &config, &dashboard),
            }
        }

        Commands::Route { path } => {
            let route = Route::resolve(&path);
            println!("{} -> {} ({})", path, route.label(), route.path());
        }

        Commands::Config { output } => {
            let content = generate_default_config();
            match output {
                Some(path) => {
                    std::fs::write(&path, content)
                        .with_context(|| format!("writing {}", path.display()))?;
                    println!("Config written to {:?}", path);
                }
                None => print!("{}", content),
            }
        }
    }

    Ok(())
}

fn init_tracing(config: &Config) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        tracing_subscriber::EnvFilter::new(format!("campus={}", config.logging.level))
    });

    // Logs go to stderr so summaries stay pipeable
    let registry = tracing_subscriber::registry().with(filter);
    if config.logging.format == "json" {
        registry
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    }
}

fn load_record(path: Option<&PathBuf>) -> anyhow::Result<StudentRecord> {
    match path {
        Some(path) => StudentRecord::load(path)
            .with_context(|| format!("loading record from {}", path.display())),
        None => StudentRecord::load_default().context("embedded record is invalid"),
    }
}

fn print_summary(record: &StudentRecord, config: &Config, dashboard: &DashboardView) {
    println!("{}", dashboard.name);
    println!("{}", dashboard.subtitle);
    println!();

    println!("{:<20} {:<12} {}", "Metric", "Value", "Tier");
    println!("{}", "-".repeat(44));
    for card in &dashboard.cards {
        println!("{:<20} {:<12} {}", card.title, card.value, card.tier);
    }
    println!();

    for ring in &dashboard.rings {
        println!("{}: {}%", ring.label, ring.value);
    }
    println!();

    println!("Subjects:");
    for row in AcademicsView::build(record, config).subjects {
        println!(
            "  {:<6} {:<28} {:>5} {:>8}  {}",
            row.code, row.name, row.attendance, row.internal_marks, row.status
        );
    }
    println!();

    println!("Upcoming:");
    if dashboard.upcoming.is_empty() {
        println!("  {}", ScheduleTab::All.empty_message());
    }
    for event in &dashboard.upcoming {
        println!(
            "  {:<7} {:<12} {}",
            event.kind.name(),
            event.short_date(),
            event.title
        );
    }
}
