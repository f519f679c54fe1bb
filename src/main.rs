//! Codetrie - Main entrypoint.
//!
//! Command line front end for the course code codec. Logs go to stderr; reports
//! and listings go to stdout.

use std::path::PathBuf;
use std::process;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use codetrie_lib::codec::CodecPipeline;
use codetrie_lib::config::{CodetrieConfig, ConfigLoader, LogConfig, ENV_PREFIX};
use codetrie_lib::error::verification::VerificationError;
use codetrie_lib::error::{
    report_error, set_error_reporter, CodecError, CodecResult, ErrorContext,
    TracingErrorReporter,
};
use codetrie_lib::workspace::Workspace;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Command line arguments for codetrie.
#[derive(Parser, Debug)]
#[clap(name = "codetrie", version, author, about)]
struct Args {
    /// Path to configuration file
    #[clap(short, long, value_parser)]
    config: Option<PathBuf>,

    /// Command to execute
    #[clap(subcommand)]
    command: Command,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
enum Command {
    /// Create and verify the trie artifacts for a school
    CreateTrie {
        /// Name of the school directory
        school: String,
    },

    /// Re-verify a school's existing trie artifacts
    Verify {
        /// Name of the school directory
        school: String,
    },

    /// List all schools with a directory in the workspace
    ListSchools,

    /// Create the directory for a new school
    CreateSchool {
        /// Name of the school to create
        school: String,
    },

    /// Generate a default configuration file
    GenConfig {
        /// Path to output configuration file
        #[clap(short, long, value_parser)]
        output: PathBuf,
    },
}

impl Command {
    fn name(&self) -> &'static str {
        match self {
            Self::CreateTrie { .. } => "create-trie",
            Self::Verify { .. } => "verify",
            Self::ListSchools => "list-schools",
            Self::CreateSchool { .. } => "create-school",
            Self::GenConfig { .. } => "gen-config",
        }
    }
}

/// Initialize the logging system.
///
/// `RUST_LOG` wins over the configured level when set.
fn init_logging(config: &LogConfig) -> CodecResult<()> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.level));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_file(config.source_location)
        .with_line_number(config.source_location);

    let result = if config.json {
        tracing::subscriber::set_global_default(builder.json().finish())
    } else {
        tracing::subscriber::set_global_default(builder.pretty().finish())
    };
    result.map_err(|e| CodecError::Custom(format!("Failed to set global tracing subscriber: {e}")))
}

/// Prints the sizes behind a failed compression gate, then hands the error on.
fn print_gate_report(error: CodecError) -> CodecError {
    if let CodecError::Verification(VerificationError::CompressionGate { report }) = &error {
        println!("{report}");
    }
    error
}

fn execute(command: Command, config: &CodetrieConfig) -> CodecResult<()> {
    let workspace = Workspace::from_config(&config.workspace);
    let pipeline = CodecPipeline::new(config.codec.clone());

    match command {
        Command::CreateTrie { school } => {
            let dir = workspace.school_dir(&school)?;
            let summary = pipeline.run(&dir).map_err(print_gate_report)?;
            info!(school = %school, nodes = summary.node_count, "Trie created");
            println!("{summary}");
        }
        Command::Verify { school } => {
            let dir = workspace.school_dir(&school)?;
            let summary = pipeline.verify_school(&dir).map_err(print_gate_report)?;
            println!("{summary}");
        }
        Command::ListSchools => {
            let schools = workspace.list_schools()?;
            println!("{}", serde_json::to_string_pretty(&schools)?);
        }
        Command::CreateSchool { school } => {
            let dir = workspace.create_school(&school)?;
            println!(
                "Created {}; place the school's {} there",
                dir.display(),
                config.codec.codes_file
            );
        }
        Command::GenConfig { output } => {
            if let Some(parent) = output.parent() {
                std::fs::create_dir_all(parent)?;
            }
            let toml = toml::to_string_pretty(&CodetrieConfig::default())
                .map_err(|e| CodecError::Custom(format!("Failed to serialize config: {e}")))?;
            std::fs::write(&output, toml)?;
            info!("Default configuration written to {:?}", output);
        }
    }
    Ok(())
}

/// Main entry point for the application.
fn main() {
    let args = Args::parse();
    let component = args.command.name();

    let result = ConfigLoader::new(args.config.as_deref(), ENV_PREFIX)
        .load()
        .map_err(CodecError::from)
        .and_then(|config| {
            init_logging(&config.log)?;
            set_error_reporter(Arc::new(TracingErrorReporter));
            execute(args.command, &config)
        });

    if let Err(error) = result {
        report_error(ErrorContext::new(error, component));
        process::exit(1);
    }
}
