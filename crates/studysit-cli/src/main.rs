use anyhow::{bail, Context, Result};
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use colored::*;
use serde_json::json;
use std::path::{Path, PathBuf};
use studysit_core::config::DEFAULT_CONFIG_FILE;
use studysit_core::newsletter::SUBSCRIBE_SUCCESS;
use studysit_core::{
    validate_newsletter_email, BookingSubmission, Catalog, CategoryFilter, FilterQuery,
    StudySitConfig, ValidationResult, Validator,
};
use tracing::info;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

const FORMATS: [&str; 2] = ["human", "json"];

#[derive(Parser)]
#[command(name = "studysit")]
#[command(about = "Booking validation and space search for StudySit", long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate a booking submission
    Validate {
        /// Path to a JSON or YAML submission
        path: PathBuf,

        /// Reference date (YYYY-MM-DD), defaults to the local date
        #[arg(long)]
        today: Option<NaiveDate>,

        /// Output format [default: from config, else human]
        #[arg(long, value_parser = FORMATS)]
        format: Option<String>,

        /// Path to config file
        #[arg(long)]
        config: Option<String>,
    },

    /// Search and filter a catalog of spaces
    Search {
        /// Path to a JSON or YAML catalog
        catalog: PathBuf,

        /// Case-insensitive text to look for in titles and descriptions
        #[arg(long, default_value = "")]
        term: String,

        /// Category to show, or "all"
        #[arg(long, default_value = "all")]
        category: CategoryFilter,

        /// Output format [default: from config, else human]
        #[arg(long, value_parser = FORMATS)]
        format: Option<String>,

        /// Path to config file
        #[arg(long)]
        config: Option<String>,
    },

    /// Check a newsletter signup address
    Subscribe {
        email: String,
    },

    /// List validation rules in check order
    Rules {
        /// Output format [default: from config, else human]
        #[arg(long, value_parser = FORMATS)]
        format: Option<String>,

        /// Path to config file
        #[arg(long)]
        config: Option<String>,
    },

    /// Write a default config file
    Init {
        /// Where to write the config
        #[arg(default_value = DEFAULT_CONFIG_FILE)]
        path: String,

        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "studysit=info,studysit_core=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let args = Args::parse();

    match args.command {
        Commands::Validate {
            path,
            today,
            format,
            config,
        } => validate_command(path, today, format, config),
        Commands::Search {
            catalog,
            term,
            category,
            format,
            config,
        } => search_command(catalog, term, category, format, config),
        Commands::Subscribe { email } => subscribe_command(&email),
        Commands::Rules { format, config } => rules_command(format, config),
        Commands::Init { path, force } => init_command(&path, force),
    }
}

/// Command-line format wins over the config; a bad config value is an error.
fn resolve_format(format: Option<String>, config: &StudySitConfig) -> Result<String> {
    let format = format.unwrap_or_else(|| config.output.format.clone());
    if !FORMATS.contains(&format.as_str()) {
        bail!(
            "Unknown output format '{}' (expected one of: {})",
            format,
            FORMATS.join(", ")
        );
    }
    Ok(format)
}

fn validate_command(
    path: PathBuf,
    today: Option<NaiveDate>,
    format: Option<String>,
    config_path: Option<String>,
) -> Result<()> {
    let config = StudySitConfig::load(config_path.as_deref())?;
    let format = resolve_format(format, &config)?;

    // The only place the wall clock is consulted.
    let today = today.unwrap_or_else(|| chrono::Local::now().date_naive());

    let submission = BookingSubmission::from_file(&path)
        .with_context(|| format!("Could not load booking from {}", path.display()))?;
    let validator = Validator::from_options(&config.validation);
    let result = validator.validate(&submission, today);

    info!(
        "Booking {} checked against {}: {}",
        path.display(),
        today,
        if result.valid { "valid" } else { "invalid" }
    );

    if format == "json" {
        output_validation_json(&submission, &result)?;
    } else {
        output_validation_human(&submission, &result);
    }

    if !result.valid {
        std::process::exit(1);
    }
    Ok(())
}

fn output_validation_human(submission: &BookingSubmission, result: &ValidationResult) {
    if result.valid {
        println!("{}", "✅ Booking accepted".green().bold());
        println!("{}", submission.confirmation());
        return;
    }

    for message in result.messages() {
        println!("{} {}", "[ERROR]".red().bold(), message);
    }
    let count = result.errors.len();
    println!(
        "\n{}",
        format!(
            "Found {} {}",
            count,
            if count == 1 { "problem" } else { "problems" }
        )
        .red()
    );
}

fn output_validation_json(
    submission: &BookingSubmission,
    result: &ValidationResult,
) -> Result<()> {
    let errors: Vec<_> = result
        .errors
        .iter()
        .map(|err| {
            json!({
                "code": err.code(),
                "message": err.to_string(),
            })
        })
        .collect();

    let confirmation = if result.valid {
        Some(submission.confirmation())
    } else {
        None
    };

    let output = json!({
        "valid": result.valid,
        "errors": errors,
        "confirmation": confirmation,
    });
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

fn search_command(
    catalog_path: PathBuf,
    term: String,
    category: CategoryFilter,
    format: Option<String>,
    config_path: Option<String>,
) -> Result<()> {
    let config = StudySitConfig::load(config_path.as_deref())?;
    let format = resolve_format(format, &config)?;
    let catalog = Catalog::from_file(&catalog_path)?;
    let query = FilterQuery::new(&term, category);
    let visible = catalog.visible(&query);

    if format == "json" {
        let output = json!({
            "query": {
                "term": query.search_term(),
                "category": query.category.as_str(),
            },
            "visible": catalog.filter(&query),
            "items": visible,
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    if let Some(name) = &catalog.name {
        println!("{}\n", name.bold());
    }
    for item in &visible {
        println!("{} [{}]", item.title.cyan().bold(), item.category);
        if !item.description.is_empty() {
            println!("  {}", item.description);
        }
    }

    let summary = format!("{} of {} spaces shown", visible.len(), catalog.items.len());
    if visible.is_empty() {
        println!("{}", "No spaces match this search.".yellow());
    } else {
        println!("\n{}", summary.green());
    }

    let categories = catalog.categories();
    if !categories.is_empty() {
        println!("Categories: all, {}", categories.join(", "));
    }
    Ok(())
}

fn subscribe_command(email: &str) -> Result<()> {
    match validate_newsletter_email(email) {
        Ok(()) => {
            println!("{}", SUBSCRIBE_SUCCESS.green());
            Ok(())
        }
        Err(err) => {
            eprintln!("{} {}", "[ERROR]".red().bold(), err);
            std::process::exit(1);
        }
    }
}

fn rules_command(format: Option<String>, config_path: Option<String>) -> Result<()> {
    let config = StudySitConfig::load(config_path.as_deref())?;
    let format = resolve_format(format, &config)?;
    let validator = Validator::from_options(&config.validation);
    let rules = validator.list_rules();

    if format == "json" {
        let rules_json: Vec<_> = rules
            .iter()
            .map(|(id, field)| json!({ "id": id, "field": field }))
            .collect();
        println!("{}", serde_json::to_string_pretty(&rules_json)?);
    } else {
        println!("Validation rules (in check order):\n");
        for (id, field) in &rules {
            println!("  {} [{}]", id, field);
        }
        println!("\nTotal: {} rules", rules.len());
    }
    Ok(())
}

fn init_command(path: &str, force: bool) -> Result<()> {
    if Path::new(path).exists() && !force {
        bail!("{} already exists (use --force to overwrite)", path);
    }
    StudySitConfig::default().save(path)?;
    println!("{} {}", "✅ Wrote default config to".green(), path);
    Ok(())
}
