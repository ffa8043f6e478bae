//! Application entry point and dispatch.

use std::io;
use std::sync::Arc;

use anyhow::{Context, Result};

use picalc_cli::output::{format_result, write_to_file};
use picalc_cli::presenter::CliResultPresenter;
use picalc_cli::progress::{stderr_is_interactive, ProgressBarObserver};
use picalc_core::observer::{LoggingObserver, NoOpObserver, ProgressObserver};
use picalc_core::progress::CancellationToken;
use picalc_core::{ComputeOptions, MemoCache};
use picalc_orchestration::interfaces::ResultPresenter;
use picalc_orchestration::orchestrator::run_computation;
use picalc_orchestration::stream::PiStream;

use crate::config::AppConfig;
use crate::errors;

/// Run the application.
pub fn run(config: &AppConfig) -> Result<()> {
    // Handle shell completion
    if let Some(shell) = config.completion {
        let mut cmd = <AppConfig as clap::CommandFactory>::command();
        picalc_cli::completion::generate_completion(&mut cmd, shell, &mut io::stdout());
        return Ok(());
    }

    if config.stream {
        return run_stream(config);
    }

    run_single(config)
}

fn compute_options(config: &AppConfig) -> ComputeOptions {
    ComputeOptions {
        threads: config.threads,
        use_memo: config.memo,
        timeout: config.timeout_duration(),
    }
}

fn run_single(config: &AppConfig) -> Result<()> {
    let digits = match config.precision {
        Some(digits) => digits,
        None => read_precision_from_stdin()?,
    };

    let opts = compute_options(config);
    let cache = config.memo.then(MemoCache::new);
    let cancel = CancellationToken::new();
    install_ctrlc_handler(&cancel);

    let observer = select_observer(config);
    let report = run_computation(&cancel, observer.as_ref(), digits, &opts, cache.as_ref());

    let presenter = CliResultPresenter::new(config.verbose, config.quiet);
    match &report.outcome {
        Ok(value) => {
            presenter.present_result(report.digits, value, report.duration);
            if let Some(path) = &config.output {
                write_to_file(path, value)
                    .with_context(|| format!("failed to write result to {path}"))?;
            }
            Ok(())
        }
        Err(error) => {
            presenter.present_error(error);
            std::process::exit(errors::exit_code(error));
        }
    }
}

fn run_stream(config: &AppConfig) -> Result<()> {
    let mut stream = PiStream::new(compute_options(config));
    if config.memo {
        stream = stream.with_cache(Arc::new(MemoCache::new()));
    }
    install_ctrlc_handler(&stream.cancellation_token());

    let presenter = CliResultPresenter::new(config.verbose, config.quiet);
    let mut emitted = 0u64;
    while let Some(result) = stream.next() {
        match result {
            Ok(value) => {
                if config.quiet {
                    println!("{}", value.to_digit_string());
                } else {
                    println!("{}: {}", value.digits(), format_result(&value, config.verbose));
                }
            }
            Err(error) => {
                presenter.present_error(&error);
                std::process::exit(errors::exit_code(&error));
            }
        }
        emitted += 1;
        if config.limit != 0 && emitted >= config.limit {
            break;
        }
    }
    Ok(())
}

/// Console harness: read one precision from standard input.
fn read_precision_from_stdin() -> Result<u64> {
    println!("Enter precision (significant digits):");
    let mut line = String::new();
    io::stdin()
        .read_line(&mut line)
        .context("failed to read precision from stdin")?;
    line.trim()
        .parse::<u64>()
        .context("precision must be a positive integer")
}

fn select_observer(config: &AppConfig) -> Box<dyn ProgressObserver> {
    if config.quiet {
        Box::new(NoOpObserver::new())
    } else if config.threads == 1 && stderr_is_interactive() {
        Box::new(ProgressBarObserver::new())
    } else {
        Box::new(LoggingObserver::new())
    }
}

fn install_ctrlc_handler(cancel: &CancellationToken) {
    let cancel = cancel.clone();
    if let Err(e) = ctrlc::set_handler(move || cancel.cancel()) {
        tracing::warn!(error = %e, "could not install Ctrl+C handler");
    }
}
