//! Element Hiding CLI
//!
//! CLI tool for classifying element hiding filters and checking filter lists.

mod check;
mod report;

use clap::{Parser, Subcommand, ValueEnum};

use crate::check::run_check;
use crate::report::FilterReport;

#[derive(Parser)]
#[command(name = "eh-cli")]
#[command(about = "Element hiding filter parser and list checker")]
struct Cli {
    /// Output format
    #[arg(short, long, value_enum, global = true, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Verbose output (debug logging, rejected lines)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq)]
enum OutputFormat {
    Text,
    Json,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse filters given on the command line
    Parse {
        /// Filter lines
        #[arg(required = true)]
        filters: Vec<String>,

        /// Report whether each filter applies on this host
        #[arg(short, long)]
        domain: Option<String>,
    },

    /// Classify every line of one or more filter lists
    Check {
        /// Filter list files (stdin when omitted)
        #[arg(short, long)]
        input: Vec<String>,
    },
}

fn main() {
    let cli = Cli::parse();

    let mut logger = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));
    if cli.verbose {
        logger.filter_level(log::LevelFilter::Debug);
    }
    logger.init();

    let result = match cli.command {
        Commands::Parse { filters, domain } => cmd_parse(&filters, domain.as_deref(), cli.format),
        Commands::Check { input } => cmd_check(&input, cli.verbose, cli.format),
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn cmd_parse(filters: &[String], domain: Option<&str>, format: OutputFormat) -> Result<(), String> {
    let reports: Vec<FilterReport> = filters
        .iter()
        .map(|filter| FilterReport::build(filter, domain))
        .collect();

    match format {
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&reports)
                .map_err(|e| format!("Failed to serialize report: {}", e))?;
            println!("{}", json);
        }
        OutputFormat::Text => {
            for report in &reports {
                report.print_text();
            }
        }
    }

    Ok(())
}

fn cmd_check(inputs: &[String], verbose: bool, format: OutputFormat) -> Result<(), String> {
    let stats = run_check(inputs, verbose)?;

    match format {
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&stats)
                .map_err(|e| format!("Failed to serialize stats: {}", e))?;
            println!("{}", json);
        }
        OutputFormat::Text => {
            let source_count = inputs.len().max(1);
            println!("Checked {} filter list(s)", source_count);
            stats.print_text();
        }
    }

    Ok(())
}
