use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod commands;

#[derive(Parser)]
#[command(name = "jobscope", version, about = "Job-search research tracker")]
pub(crate) struct Cli {
    /// Enable debug logging
    #[arg(long, short, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Energy profile management
    Profile {
        #[command(subcommand)]
        action: commands::profile::ProfileAction,
    },
    /// Classify tasks and inspect stored energy matrices
    Matrix {
        #[command(subcommand)]
        action: commands::matrix::MatrixAction,
    },
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: commands::config::ConfigAction,
    },
    /// Generate shell completion scripts
    Completions(commands::completions::Completions),
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("jobscope=debug,jobscope_core=debug")
    } else {
        EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("jobscope=warn,jobscope_core=warn"))
    };

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_target(false)
                .without_time()
                .with_writer(std::io::stderr),
        )
        .with(filter)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = match cli.command {
        Commands::Profile { action } => commands::profile::run(action),
        Commands::Matrix { action } => commands::matrix::run(action),
        Commands::Config { action } => commands::config::run(action),
        Commands::Completions(completions) => completions.run(),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
