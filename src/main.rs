use std::io::Write;
use std::path::PathBuf;

use clap::{error::ErrorKind, Parser};
use junit_normalize::constants::{EXIT_SUCCESS, LOG_FILTER_ENV};
use junit_normalize::error::NormalizeError;
use junit_normalize::runner::run;

#[derive(Debug, Parser)]
#[command(
    version = std::env!("CARGO_PKG_VERSION"),
    name = "junit-normalize",
    about = "Rewrites a nested JUnit XML report into a flat <testsuites>/<testsuite>/<testcase> report"
)]
struct Cli {
    #[arg(required = true, help = "Path to the JUnit XML report to read.")]
    input: PathBuf,
    #[arg(required = true, help = "Path to write the normalized report to.")]
    output: PathBuf,
}

fn main() -> anyhow::Result<()> {
    setup_logger()?;
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            e.exit()
        }
        Err(e) => {
            log::debug!("Invalid arguments: {}", e);
            let program = std::env::args()
                .next()
                .unwrap_or_else(|| String::from("junit-normalize"));
            exit_with(NormalizeError::Usage { program })
        }
    };

    log::debug!(
        "Starting junit-normalize {} with {:?}",
        env!("CARGO_PKG_VERSION"),
        cli
    );
    match run(&cli.input, &cli.output) {
        Ok(_) => {
            println!("Transformed XML saved to: {}", cli.output.display());
            std::process::exit(EXIT_SUCCESS);
        }
        Err(e) => exit_with(e),
    }
}

fn exit_with(error: NormalizeError) -> ! {
    log::debug!("Error: {:?}", error);
    println!("{}", error);
    std::process::exit(error.exit_code());
}

fn setup_logger() -> anyhow::Result<()> {
    let mut builder = env_logger::Builder::new();
    builder
        .format(|buf, record| {
            writeln!(
                buf,
                "{} [{}] - {}",
                chrono::Local::now().format("%Y-%m-%dT%H:%M:%S"),
                record.level(),
                record.args()
            )
        })
        .filter(None, log::LevelFilter::Info);
    if let Ok(log) = std::env::var(LOG_FILTER_ENV) {
        builder.parse_filters(&log);
    }
    builder.try_init()?;
    Ok(())
}
