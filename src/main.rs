use std::fs;
use std::io::{self, Write};
use std::path::Path;

use clap::Parser;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use puppet_check::EXIT_CONFIG_ERROR;
use puppet_check::checker::CheckerTable;
use puppet_check::cli::Cli;
use puppet_check::config::{Config, ConfigLoader, FileConfigLoader, validate_config};
use puppet_check::runner::{Runner, SMOKE_ERROR_HEADING};
use puppet_check::smoke::{OctocatalogDiff, SmokeCheck};

fn main() {
    let cli = Cli::parse();
    init_logging(cli.log_level());

    let exit_code = match run(&cli) {
        Ok(exit_code) => exit_code,
        Err(e) => {
            debug!(kind = e.error_type(), "run aborted");
            eprintln!("Error: {e}");
            EXIT_CONFIG_ERROR
        }
    };

    std::process::exit(exit_code);
}

fn init_logging(default_level: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn run(cli: &Cli) -> puppet_check::Result<i32> {
    // 1. Load configuration
    let mut config = load_config(cli.config.as_deref(), cli.no_config)?;

    // 2. Apply CLI argument overrides
    cli.apply_overrides(&mut config);
    validate_config(&config)?;
    debug!(?config, "effective configuration");

    // 3. Look for the smoke check tool once
    let smoke = if config.smoke.enabled {
        OctocatalogDiff::detect().map(|tool| Box::new(tool) as Box<dyn SmokeCheck>)
    } else {
        None
    };

    // 4. Run
    let runner = Runner::new(config, CheckerTable::default())
        .with_smoke(smoke)
        .with_color(cli.color.into())
        .with_quiet(cli.quiet);

    let mut report = Vec::new();
    let outcome = runner.run(&cli.paths, &mut report)?;
    info!(
        errors = outcome.results.errors().len(),
        warnings = outcome.results.warnings().len(),
        clean = outcome.results.clean().len(),
        ignored = outcome.results.ignored().len(),
        "check finished"
    );

    // 5. Write output
    write_output(cli.output.as_deref(), &report)?;
    if let Some(cause) = &outcome.smoke_error
        && runner.config().output_format.is_structured()
    {
        eprintln!("{SMOKE_ERROR_HEADING}\n{cause}");
    }

    Ok(outcome.exit_code)
}

fn load_config(config_path: Option<&Path>, no_config: bool) -> puppet_check::Result<Config> {
    if no_config {
        return Ok(Config::default());
    }

    let loader = FileConfigLoader::new();
    config_path.map_or_else(|| loader.load(), |path| loader.load_from_path(path))
}

fn write_output(output_path: Option<&Path>, content: &[u8]) -> puppet_check::Result<()> {
    if let Some(path) = output_path {
        fs::write(path, content)?;
    } else {
        let mut stdout = io::stdout().lock();
        stdout.write_all(content)?;
        stdout.flush()?;
    }
    Ok(())
}
