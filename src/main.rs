//! Order Expiry CLI

use std::{
    io::{self, Write},
    process::ExitCode,
};

use jiff::{Zoned, civil::Date};
use rand::{SeedableRng, rngs::StdRng};
use thiserror::Error;
use tracing::error;

use order_expiry::{
    config::Config,
    expiry::LogDispatcher,
    logging,
    pipeline::{Pipeline, PipelineError},
    report::{DueOrdersReport, ReportError},
};

#[derive(Debug, Error)]
enum RunError {
    #[error(transparent)]
    Pipeline(#[from] PipelineError),

    #[error(transparent)]
    Report(#[from] ReportError),

    #[error("failed to write output: {0}")]
    Output(#[from] io::Error),
}

/// Order expiry entry point
pub fn main() -> ExitCode {
    let config = Config::load().unwrap_or_else(|error| error.exit());

    if let Err(error) = logging::init(&config.logging) {
        #[expect(
            clippy::print_stderr,
            reason = "logging not initialized, must use eprintln for setup errors"
        )]
        {
            eprintln!("{error}");
        }

        return ExitCode::FAILURE;
    }

    let today = Zoned::now().date();

    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    match run(&config, today, &mut rng) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            error!(%error, "order expiry run failed");

            ExitCode::FAILURE
        }
    }
}

fn run(config: &Config, today: Date, rng: &mut StdRng) -> Result<(), RunError> {
    let pipeline = Pipeline::new(config.pipeline_options());
    let mut dispatcher = LogDispatcher::new();

    let stdout = io::stdout();
    let mut handle = stdout.lock();

    if let Some(line) = pipeline.state().status_line() {
        writeln!(handle, "{line}")?;
    }

    let summary = pipeline.run(today, rng, &mut dispatcher)?;

    if config.show > 0 {
        DueOrdersReport::new(&summary.due_today, config.show).write_to(&mut handle)?;
    }

    writeln!(handle, "{}", summary.processed_line())?;

    Ok(())
}
