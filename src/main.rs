use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use depgen::{AppError, CheckOptions, CheckState, GenerateOptions, InitOptions};

#[derive(Parser)]
#[command(name = "depgen")]
#[command(version)]
#[command(
    about = "Generate build-system dependency configuration from a project manifest",
    long_about = None
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, Copy, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

#[derive(Subcommand)]
enum Commands {
    /// Write a starter depgen.yml manifest
    #[clap(visible_alias = "i")]
    Init {
        /// Project name (prompted for when omitted)
        #[arg(short, long)]
        name: Option<String>,
        /// Overwrite an existing manifest
        #[arg(long)]
        force: bool,
        /// Project root (defaults to the current directory)
        #[arg(long)]
        path: Option<PathBuf>,
    },
    /// Generate configuration artifacts for the declared dependencies
    #[clap(visible_alias = "g")]
    Gen {
        /// Project root (defaults to the current directory)
        #[arg(long)]
        path: Option<PathBuf>,
        /// Override the manifest build type
        #[arg(short, long)]
        build_type: Option<String>,
        /// Profile preset to activate
        #[arg(short, long)]
        profile: Option<String>,
        /// Force static linkage for a declared dependency (repeatable)
        #[arg(long = "force-static", value_name = "DEP")]
        force_static: Vec<String>,
    },
    /// Verify generated artifacts are present and up to date
    #[clap(visible_alias = "c")]
    Check {
        /// Project root (defaults to the current directory)
        #[arg(long)]
        path: Option<PathBuf>,
        /// Override the manifest build type
        #[arg(short, long)]
        build_type: Option<String>,
        /// Profile preset to activate
        #[arg(short, long)]
        profile: Option<String>,
        /// Output format
        #[arg(long, value_enum, default_value = "text")]
        format: OutputFormat,
    },
    /// List generator families and their availability
    #[clap(visible_alias = "ls")]
    List {
        /// Project root (defaults to the current directory)
        #[arg(long)]
        path: Option<PathBuf>,
        /// Output format
        #[arg(long, value_enum, default_value = "text")]
        format: OutputFormat,
    },
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Init { name, force, path } => {
            run_init(path, InitOptions { name, force })
        }
        Commands::Gen { path, build_type, profile, force_static } => {
            run_gen(path, GenerateOptions { build_type, profile, force_static })
        }
        Commands::Check { path, build_type, profile, format } => {
            run_check(path, CheckOptions { build_type, profile }, format)
        }
        Commands::List { path, format } => run_list(path, format),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run_init(path: Option<PathBuf>, options: InitOptions) -> Result<(), AppError> {
    let manifest_path = depgen::init(path.as_deref(), options)?;
    println!("✅ Wrote {}", manifest_path.display());
    Ok(())
}

fn run_gen(path: Option<PathBuf>, options: GenerateOptions) -> Result<(), AppError> {
    let report = depgen::generate(path.as_deref(), options)?;

    for outcome in report.completed() {
        println!("✅ {} ({}): {} files", outcome.family, outcome.label, outcome.files.len());
    }

    if report.has_failures() {
        eprintln!("{} task(s) failed:", report.failures().len());
        for failure in report.failures() {
            eprintln!("  ✗ {} ({}): {}", failure.family, failure.label, failure.error);
        }
        std::process::exit(1);
    }

    println!("Generated {} files", report.files_written());
    Ok(())
}

fn run_check(
    path: Option<PathBuf>,
    options: CheckOptions,
    format: OutputFormat,
) -> Result<(), AppError> {
    let report = depgen::check(path.as_deref(), options)?;

    match format {
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&report)
                .map_err(|e| AppError::config_error(format!("Failed to encode report: {}", e)))?;
            println!("{}", json);
        }
        OutputFormat::Text => {
            for entry in &report.entries {
                let mark = match entry.state {
                    CheckState::UpToDate => "✅",
                    CheckState::Stale => "✗ stale",
                    CheckState::Missing => "✗ missing",
                    CheckState::Orphaned => "? orphaned",
                };
                println!("{} {}", mark, entry.path);
            }
        }
    }

    if !report.is_clean() {
        std::process::exit(1);
    }
    Ok(())
}

fn run_list(path: Option<PathBuf>, format: OutputFormat) -> Result<(), AppError> {
    let infos = depgen::list_generators(path.as_deref())?;

    match format {
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&infos)
                .map_err(|e| AppError::config_error(format!("Failed to encode list: {}", e)))?;
            println!("{}", json);
        }
        OutputFormat::Text => {
            for info in infos {
                let availability = if info.available { "available" } else { "unavailable" };
                println!("{:<12} {:<10} {}", info.family, info.role, availability);
            }
        }
    }
    Ok(())
}
