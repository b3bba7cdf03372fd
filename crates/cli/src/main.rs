use anyhow::{Context, Result};
use clap::Parser;
use script_encoder_cli::args::Args;
use script_encoder_cli::config::Config;
use script_encoder_cli::options::OutputFormat;
use script_encoder_cli::{logging, presentation};
use script_encoder_engine::stats::RunResult;
use script_encoder_engine::watch::{WatchEvent, watch_loop};
use std::process::ExitCode;

fn main() -> ExitCode {
    let args = Args::parse();
    logging::init(args.output.verbose, args.output.quiet);

    match execute(&args) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            log::error!("{e:#}");
            ExitCode::FAILURE
        }
    }
}

/// Returns `Ok(false)` when some files failed.
fn execute(args: &Args) -> Result<bool> {
    let config = Config::try_from(args)?;
    let format = args.output.format;

    if config.watch {
        watch_loop(&config, |event| {
            let result = match event {
                WatchEvent::Started => script_encoder_engine::run(&config),
                WatchEvent::Changed(paths) => script_encoder_engine::process_paths(&paths, &config),
            };
            match result {
                Ok(result) if result.reports.iter().any(|r| r.is_change()) || !result.errors.is_empty() => {
                    if let Err(e) = report(&result, format) {
                        log::error!("{e:#}");
                    }
                }
                Ok(_) => {}
                Err(e) => log::error!("Error in watch cycle: {e}"),
            }
        })
        .context("watch failed")?;
        return Ok(true);
    }

    let result = script_encoder_engine::run(&config).context("run failed")?;
    report(&result, format)?;
    Ok(result.errors.is_empty())
}

fn report(result: &RunResult, format: OutputFormat) -> Result<()> {
    for (path, err) in &result.errors {
        log::error!("Error processing {}: {err}", path.display());
    }
    presentation::print_results(result, format).context("failed to print results")
}
