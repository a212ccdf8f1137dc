use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;

mod commands;

use commands::ParseOptions;

#[derive(Parser)]
#[command(
    name = "ohmydoc",
    about = "Validate, parse and render XML cover letters",
    version,
    author,
    long_about = None
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Path to an ohmydoc.yml settings file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Enable verbose output (use -vv for debug output)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Check that a document is well-formed and has every required section
    Validate {
        /// Document to check, or - for standard input
        file: String,

        /// Print the result as JSON instead of a diagnostic
        #[arg(long)]
        report: bool,
    },

    /// Extract a document's fields as JSON
    Parse {
        /// Document to parse, or - for standard input
        file: String,

        /// Print the success/data/error JSON shape, even on failure
        #[arg(long, conflicts_with = "summary")]
        report: bool,

        /// Print a human-readable summary instead of JSON
        #[arg(long)]
        summary: bool,
    },

    /// Render a document to HTML
    Render {
        /// Document to render, or - for standard input
        file: String,

        /// Template name (see `ohmydoc templates`)
        #[arg(short, long, env = "OHMYDOC_TEMPLATE")]
        template: Option<String>,

        /// Write HTML here instead of standard output
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// List the built-in templates
    Templates,

    /// Write a sample cover letter to start from
    Init {
        /// Where to write the sample document
        #[arg(default_value = "cover-letter.xml")]
        path: PathBuf,

        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Initialize logging based on verbose flag
    init_logging(cli.verbose);

    match run(cli) {
        Ok(code) => code,
        Err(error) => {
            eprintln!("Error: {error:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<ExitCode> {
    match cli.command {
        Commands::Validate { file, report } => commands::validate_command(&file, report),
        Commands::Parse {
            file,
            report,
            summary,
        } => commands::parse_command(&file, ParseOptions { report, summary }),
        Commands::Render {
            file,
            template,
            output,
        } => commands::render_command(&file, template, output, cli.config.as_deref()),
        Commands::Templates => {
            commands::templates_command();
            Ok(ExitCode::SUCCESS)
        }
        Commands::Init { path, force } => {
            commands::init_command(&path, force)?;
            Ok(ExitCode::SUCCESS)
        }
    }
}

fn init_logging(verbose: u8) {
    use tracing_subscriber::EnvFilter;

    let filter = match verbose {
        0 => EnvFilter::new("ohmydoc=warn"), // Default: warnings and errors only
        1 => EnvFilter::new("ohmydoc=info"), // -v: info messages
        _ => EnvFilter::new("ohmydoc=debug"), // -vv or more: full debug
    };

    // Logs go to stderr so stdout stays clean for JSON and HTML
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();
}
