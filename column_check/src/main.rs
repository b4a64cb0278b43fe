use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, ValueEnum};
use column_check::config::CheckConfig;
use column_check::engine::CheckEngine;
use column_check::reporter;
use column_check::types::{CheckResult, NamingScheme};

/// Validate Doctrine entity column names against a naming scheme and SQL reserved keywords
#[derive(Parser)]
#[command(name = "column-check", author, version, about, long_about = None)]
struct Cli {
    /// Expect camelCase column names instead of underscore_case
    #[arg(short = 'c', long)]
    camel_case: bool,

    /// Glob patterns of entity files to check [default: src/Entity/*.php]
    #[arg(value_name = "FILES")]
    files: Vec<String>,

    /// Increase verbosity (-v files, -vv classes, -vvv properties)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Project root for configuration discovery and relative patterns
    #[arg(long, default_value = ".")]
    root: PathBuf,

    /// Maximum number of diagnostics to report (0 = unlimited)
    #[arg(long)]
    max_diagnostics: Option<usize>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
    Sarif,
}

impl Cli {
    /// Layer command-line flags over the file configuration.
    fn apply_to(&self, config: &mut CheckConfig) {
        if self.camel_case {
            config.naming = NamingScheme::Camel;
        }
        if !self.files.is_empty() {
            config.paths.clone_from(&self.files);
        }
        if let Some(max) = self.max_diagnostics {
            config.max_diagnostics = max;
        }
    }

    fn log_level(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // RUST_LOG overrides the -v derived level
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(cli.log_level()))
        .format_timestamp(None)
        .init();

    match run(&cli) {
        Ok(result) if result.passed => ExitCode::SUCCESS,
        Ok(_) => ExitCode::from(1),
        Err(message) => {
            eprintln!("error: {message}");
            ExitCode::from(2)
        }
    }
}

fn run(cli: &Cli) -> Result<CheckResult, String> {
    let mut config = CheckConfig::load_from_project(&cli.root).map_err(|e| e.to_string())?;
    cli.apply_to(&mut config);

    let result = CheckEngine::new(config)
        .check(&cli.root)
        .map_err(|e| e.to_string())?;

    for file in &result.unreadable_files {
        eprintln!("{}", reporter::unreadable_line(file));
    }

    match cli.format {
        OutputFormat::Text => print!("{}", reporter::to_text(&result)),
        OutputFormat::Json => println!("{}", reporter::to_json(&result)?),
        OutputFormat::Sarif => println!("{}", reporter::to_sarif(&result)?),
    }
    log::info!("{}", reporter::summary_line(&result));

    Ok(result)
}
