use std::fs::File;
use std::io::{self, BufReader};
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::Parser;
use tracing::info;

use gomod2rpmdeps::config::{Config, InputSource};
use gomod2rpmdeps::logging::{LogFormat, LogLevel, init_tracing};
use gomod2rpmdeps::report::{Reporter, collect};
use gomod2rpmdeps::source::{GoVendorSource, LineSource, ReaderSource};

#[derive(Parser)]
#[command(name = "gomod2rpmdeps")]
#[command(
    version,
    about = "Generate RPM bundled() Provides for the modules vendored by `go mod vendor`"
)]
struct Cli {
    /// Read vendoring output from a file ("-" for stdin) instead of running the Go toolchain
    #[arg(long, value_name = "PATH")]
    input: Option<PathBuf>,

    /// Run the vendoring command in this module directory
    #[arg(short = 'C', long, value_name = "DIR")]
    dir: Option<PathBuf>,

    /// Go toolchain executable
    #[arg(long, value_name = "CMD")]
    go: Option<String>,

    /// Namespace used in bundled(<LANG>(module))
    #[arg(long, value_name = "LANG")]
    lang: Option<String>,

    /// Configuration file (JSON)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    #[arg(long, value_enum, default_value_t = LogLevel::Warn)]
    log_level: LogLevel,

    #[arg(long, value_enum, default_value_t = LogFormat::Text)]
    log_format: LogFormat,

    /// Write logs to this file instead of stderr
    #[arg(long, value_name = "PATH")]
    log_file: Option<PathBuf>,
}

/// Merge command line flags into the loaded configuration.
fn resolve(cli: &Cli, config: Config) -> (Config, InputSource) {
    let config = config.with_overrides(cli.go.clone(), cli.lang.clone());
    (config, InputSource::from_arg(cli.input.as_deref()))
}

fn open_source(
    input: &InputSource,
    config: &Config,
    dir: Option<&Path>,
) -> anyhow::Result<Box<dyn LineSource>> {
    match input {
        InputSource::Stdin => Ok(Box::new(ReaderSource::new(io::stdin().lock()))),
        InputSource::File(path) => {
            let file = File::open(path)
                .with_context(|| format!("failed to open {}", path.display()))?;
            Ok(Box::new(ReaderSource::new(BufReader::new(file))))
        }
        InputSource::GoVendor => {
            let source = GoVendorSource::spawn(&config.go_command, &config.vendor_args, dir)?;
            Ok(Box::new(source))
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let _guard = init_tracing(cli.log_level, cli.log_format, cli.log_file.as_deref())?;

    let (config, input) = resolve(&cli, Config::load(cli.config.as_deref())?);

    let mut source = open_source(&input, &config, cli.dir.as_deref())?;
    let mut stderr = io::stderr();
    let mut modules =
        collect(source.as_mut(), &mut stderr).context("failed to collect vendored modules")?;
    info!("Collected {} vendored modules", modules.len());

    let reporter = Reporter::new(config.provides_lang);
    let summary = reporter
        .write_report(&mut modules, &mut io::stdout().lock(), &mut stderr)
        .context("failed to write Provides")?;
    info!(
        "Wrote {} versioned and {} unversioned Provides",
        summary.versioned, summary.unversioned
    );

    Ok(())
}
