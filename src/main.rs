use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use std::process::ExitCode;
use std::sync::Arc;

use stepwise::api::HttpTransport;
use stepwise::config::Config;
use stepwise::logging;
use stepwise::steps::{CheckOutcome, NextOutcome, StepPage, StepStatus};
use stepwise::ui::{PrintNavigator, TerminalOutput};

/// Exit codes
const EXIT_SUCCESS: u8 = 0;
const EXIT_USER_ERROR: u8 = 1;
const EXIT_UNRECOVERABLE: u8 = 2;
const EXIT_REQUEST_FAILED: u8 = 3;
const EXIT_NOT_IMPLEMENTED: u8 = 4;
const EXIT_CONFIG_ERROR: u8 = 5;

#[derive(Parser, Debug)]
#[command(name = "stepwise")]
#[command(about = "Check and advance steps of multi-step learning modules")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Config file path
    #[arg(short, long, global = true)]
    config: Option<String>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    debug: bool,

    /// Step server base URL (overrides server.base_url)
    #[arg(long, global = true)]
    base_url: Option<String>,

    /// Session cookie as name=value (overrides session.cookie)
    #[arg(long, global = true)]
    cookie: Option<String>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Check the current step page
    Check {
        /// Step page path (defaults to server.page)
        #[arg(long)]
        page: Option<String>,
    },

    /// Advance a module to its next step
    Next {
        /// Module name (e.g., clone-commit-update-push)
        module: String,

        /// Step the module is currently on
        step: String,
    },

    /// Show the effective configuration
    Config {
        /// Write it to .stepwise/config.toml
        #[arg(long)]
        init: bool,

        /// Overwrite an existing config file
        #[arg(long, requires = "init")]
        force: bool,
    },
}

/// Exit code for a status shown in the check field
fn status_exit_code(status: &StepStatus) -> u8 {
    if status.is_good() {
        return EXIT_SUCCESS;
    }
    if status.is_retryable() {
        return EXIT_USER_ERROR;
    }

    match status {
        StepStatus::Unrecoverable => EXIT_UNRECOVERABLE,
        StepStatus::Error => EXIT_REQUEST_FAILED,
        StepStatus::NotImplemented => EXIT_NOT_IMPLEMENTED,
        _ => EXIT_SUCCESS,
    }
}

fn check_exit_code(outcome: &CheckOutcome) -> u8 {
    match outcome {
        CheckOutcome::Updated(response) => status_exit_code(&StepStatus::parse(&response.status)),
        CheckOutcome::Failed(_) => EXIT_REQUEST_FAILED,
    }
}

fn next_exit_code(outcome: &NextOutcome) -> u8 {
    match outcome {
        NextOutcome::Navigated(_) => EXIT_SUCCESS,
        NextOutcome::NotImplemented { .. } => EXIT_NOT_IMPLEMENTED,
        NextOutcome::Failed(_) => EXIT_REQUEST_FAILED,
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match Config::load(cli.config.as_deref()) {
        Ok(config) => config.with_overrides(cli.base_url.clone(), cli.cookie.clone()),
        Err(e) => {
            eprintln!("Error: {:#}", e);
            return ExitCode::from(EXIT_CONFIG_ERROR);
        }
    };

    let logging_handle = match logging::init_logging(&config, cli.debug) {
        Ok(handle) => handle,
        Err(e) => {
            eprintln!("Error: failed to initialize logging: {:#}", e);
            return ExitCode::from(EXIT_CONFIG_ERROR);
        }
    };
    if let Some(path) = &logging_handle.log_file_path {
        eprintln!("Logging to {}", path.display());
    }
    tracing::debug!(
        command = ?cli.command,
        base_url = %config.server.base_url,
        "Starting stepwise"
    );

    match run(cli.command, &config).await {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            tracing::error!(error = %e, "Command failed");
            eprintln!("Error: {:#}", e);
            ExitCode::from(EXIT_CONFIG_ERROR)
        }
    }
}

async fn run(command: Commands, config: &Config) -> Result<u8> {
    match command {
        Commands::Check { page } => cmd_check(config, page).await,
        Commands::Next { module, step } => cmd_next(config, &module, &step).await,
        Commands::Config { init, force } => cmd_config(config, init, force),
    }
}

/// Build the step page for `path`, printing results to the terminal
fn terminal_page(config: &Config, path: String) -> Result<StepPage> {
    let transport = HttpTransport::new(&config.server.base_url, config.session.cookie.as_deref())
        .context("Failed to create step server client")?;
    let navigator = page_navigator(&transport, &path)?;

    Ok(StepPage::new(
        Arc::new(transport),
        path,
        Arc::new(TerminalOutput),
        Arc::new(navigator),
    ))
}

/// Navigator resolving targets against the page at `path`, as a browser would
fn page_navigator(transport: &HttpTransport, path: &str) -> Result<PrintNavigator> {
    let page_url = transport
        .resolve(path)
        .with_context(|| format!("Invalid step page '{}'", path))?;
    Ok(PrintNavigator::new(page_url))
}

async fn cmd_check(config: &Config, page: Option<String>) -> Result<u8> {
    let path = page.unwrap_or_else(|| config.server.page.clone());
    let page = terminal_page(config, path)?;

    let outcome = page.check().await;
    if let CheckOutcome::Updated(response) = &outcome {
        tracing::info!(status = %StepStatus::parse(&response.status), "Step checked");
    }
    Ok(check_exit_code(&outcome))
}

async fn cmd_next(config: &Config, module: &str, step: &str) -> Result<u8> {
    let page = terminal_page(config, config.server.page.clone())?;

    let outcome = page.next(module, step).await;
    Ok(next_exit_code(&outcome))
}

fn cmd_config(config: &Config, init: bool, force: bool) -> Result<u8> {
    if !init {
        print!("{}", config.to_toml()?);
        return Ok(EXIT_SUCCESS);
    }

    let path = Config::project_config_path();
    if path.exists() && !force {
        bail!(
            "{} already exists (use --force to overwrite)",
            path.display()
        );
    }

    let path = config.save()?;
    println!("Wrote {}", path.display());
    Ok(EXIT_SUCCESS)
}
