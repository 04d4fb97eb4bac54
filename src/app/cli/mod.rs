//! CLI Adapter.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::EnvFilter;

use super::api::{self, ResolveFailure, ResolveOutcome, ResolveRequest};
use crate::domain::ParameterKey;

/// Environment variable holding the tracing filter.
const LOG_ENV: &str = "HISTORIC_PARAMS_LOG";

#[derive(Parser)]
#[command(name = "historic-params")]
#[command(version)]
#[command(
    about = "Resolve historic report macro parameters against a system-under-test catalog",
    long_about = None
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Resolve macro parameters and print the result
    #[clap(visible_alias = "r")]
    Resolve {
        /// YAML catalog of spaces, projects and pages
        #[arg(long)]
        catalog: PathBuf,
        /// Wiki space key
        #[arg(long)]
        space: String,
        /// Title of the page carrying the macro
        #[arg(long)]
        page: String,
        /// Execution identifier passed through to the report
        #[arg(long, default_value = "")]
        execution: String,
        /// Macro parameter as key=value (repeatable)
        #[arg(short = 'p', long = "param")]
        params: Vec<String>,
        /// Locale for generated headings (overrides the config file)
        #[arg(long)]
        locale: Option<String>,
        /// TOML file overriding message catalog entries
        #[arg(long)]
        messages: Option<PathBuf>,
        /// Configuration file (defaults to $HISTORIC_PARAMS_CONFIG)
        #[arg(long)]
        config: Option<PathBuf>,
        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
    /// List recognized macro parameter keys
    #[clap(visible_alias = "k")]
    Keys,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

/// Entry point for the CLI.
pub fn run() {
    init_tracing();
    let cli = Cli::parse();

    let result: Result<(), ResolveFailure> = match cli.command {
        Commands::Resolve {
            catalog,
            space,
            page,
            execution,
            params,
            locale,
            messages,
            config,
            format,
        } => {
            let request = ResolveRequest {
                catalog,
                space_key: space,
                page_title: page,
                execution_id: execution,
                parameters: params,
                locale,
                messages,
                config,
            };
            run_resolve(&request, format)
        }
        Commands::Keys => {
            run_keys();
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

fn run_resolve(request: &ResolveRequest, format: OutputFormat) -> Result<(), ResolveFailure> {
    let outcome = api::resolve(request)?;
    match format {
        OutputFormat::Json => {
            let json =
                serde_json::to_string_pretty(&outcome).map_err(crate::domain::AppError::from)?;
            println!("{json}");
        }
        OutputFormat::Text => print_text(&outcome),
    }
    Ok(())
}

fn print_text(outcome: &ResolveOutcome) {
    let params = &outcome.parameters;
    let sut = params.target_system();
    let rows: Vec<(&str, String)> = vec![
        ("space", params.space_key().to_string()),
        ("page", params.page().title.clone()),
        ("execution", params.execution_id().to_string()),
        ("sut", sut.name.clone()),
        ("sut project", sut.project.clone().unwrap_or_else(|| "-".to_string())),
        ("width", params.width().to_string()),
        ("height", params.height().to_string()),
        ("border", params.border().to_string()),
        ("children", params.children().to_string()),
        ("max result", params.max_result().to_string()),
        ("show ignored", params.show_ignored().to_string()),
        ("labels", params.labels().unwrap_or("-").to_string()),
        ("popup width", params.popup_width().to_string()),
        ("popup height", params.popup_height().to_string()),
        ("title", outcome.heading.title.clone()),
        ("subtitle", outcome.heading.sub_title.clone()),
        ("subtitle2", outcome.heading.sub_title2.clone()),
    ];
    for (label, value) in rows {
        println!("{:<13} {}", format!("{label}:"), value);
    }
}

fn run_keys() {
    for key in ParameterKey::ALL {
        println!("{:<12} {}", key.as_str(), key.description());
    }
}
