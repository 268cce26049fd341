use std::io;
use std::path::PathBuf;
use std::process;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{error, Level};
use wifi_credentials::{generate, Paths};

/// Writes wifi_credentials.h from the WIFI_SSID and WIFI_PASSWORD entries in .env
#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// Project root holding the .env file
    #[arg(long, env = "PROJECT_DIR", default_value = ".", value_name = "DIR")]
    project_dir: PathBuf,

    /// Directory that receives wifi_credentials.h [default: <PROJECT_DIR>/src]
    #[arg(long, env = "PROJECT_SRC_DIR", value_name = "DIR")]
    src_dir: Option<PathBuf>,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

impl Cli {
    fn paths(&self) -> Paths {
        match &self.src_dir {
            Some(src_dir) => Paths::new(&self.project_dir, src_dir),
            None => Paths::from_project_dir(&self.project_dir),
        }
    }

    fn log_level(&self) -> Level {
        match self.verbose {
            0 => Level::INFO,
            1 => Level::DEBUG,
            _ => Level::TRACE,
        }
    }
}

fn run(cli: &Cli) -> Result<()> {
    let paths = cli.paths();
    generate(&paths)
        .with_context(|| format!("could not generate {}", paths.header_file().display()))?;
    Ok(())
}

fn main() {
    let cli = Cli::parse();
    tracing_subscriber::fmt()
        .with_max_level(cli.log_level())
        .with_writer(io::stderr)
        .with_target(false)
        .without_time()
        .init();

    if let Err(e) = run(&cli) {
        error!("{:#}", e);
        process::exit(1);
    }
}
