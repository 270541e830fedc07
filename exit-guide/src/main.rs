use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Args, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use exit_guide::Error;
use exit_guide::engine::EngineConfig;
use exit_guide::pipeline;
use exit_guide::render::{SiteConfig, validate_site};
use exit_guide::web::{self, DEFAULT_PORT};

/// Build the metro exit guide from its CSV inputs.
#[derive(Parser)]
#[command(name = "exit-guide", version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Build the dataset and write the static site
    Build(Paths),
    /// Check a built site against its inputs
    Validate(Paths),
    /// Serve a built site on localhost
    Serve {
        #[command(flatten)]
        paths: Paths,
        #[arg(long, env = "EXIT_GUIDE_PORT", default_value_t = DEFAULT_PORT)]
        port: u16,
    },
}

#[derive(Args)]
struct Paths {
    /// Directory holding meta.csv, Doors.csv, Stations.csv, Exits.csv and Egresses.csv
    #[arg(long, env = "EXIT_GUIDE_INPUT", default_value = ".")]
    input: PathBuf,
    /// Output directory (defaults to <input>/docs)
    #[arg(long, env = "EXIT_GUIDE_OUT")]
    out: Option<PathBuf>,
}

impl Paths {
    fn site_config(&self) -> SiteConfig {
        let config = SiteConfig::new(&self.input);
        match &self.out {
            Some(out) => config.with_docs_dir(out),
            None => config,
        }
    }
}

async fn run(command: Command) -> Result<(), Error> {
    match command {
        Command::Build(paths) => {
            let site = paths.site_config();
            let output = pipeline::build(&site, &EngineConfig::default())?;
            println!(
                "Built {} stations into {} (cache version {})",
                output.dataset.stations.len(),
                site.docs_dir.display(),
                output.site.cache_version
            );
        }
        Command::Validate(paths) => {
            let report = validate_site(&paths.site_config())?;
            println!(
                "Validation passed: {} stations, checked {}",
                report.stations,
                report.checked.join(", ")
            );
        }
        Command::Serve { paths, port } => {
            web::serve(&paths.site_config().docs_dir, port).await?;
        }
    }
    Ok(())
}

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("exit_guide=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match run(cli.command).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
