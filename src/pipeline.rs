//! Pipeline
//!
//! Runs a single expiry pass: make sure the order file exists (generating it if
//! not), load it, select the orders due today and dispatch them.

use std::{
    path::{Path, PathBuf},
    time::Instant,
};

use humanize_duration::{Truncate, prelude::DurationExt};
use jiff::civil::Date;
use rand::Rng;
use thiserror::Error;
use tracing::{debug, info};

use crate::{
    csv::{self, CsvError},
    expiry::{Dispatcher, due_today},
    generator::{self, DEFAULT_ORDER_COUNT, GenerateError},
    orders::Order,
};

/// File name used when no path is configured.
pub const DEFAULT_FILE_NAME: &str = "Orders.csv";

/// Pipeline Errors
#[derive(Debug, Error)]
pub enum PipelineError {
    /// Generating the order batch failed
    #[error(transparent)]
    Generate(#[from] GenerateError),

    /// Writing or reading the order file failed
    #[error(transparent)]
    Csv(#[from] CsvError),
}

/// Whether the order file is present at the start of a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataState {
    /// No order file yet; one must be generated and written first
    NeedsData,

    /// An order file exists and can be loaded directly
    HasData,
}

impl DataState {
    /// Determines the state for the order file at `path`.
    pub fn of(path: &Path) -> Self {
        if path.exists() {
            DataState::HasData
        } else {
            DataState::NeedsData
        }
    }

    /// Console line announcing what a run in this state will do first, if
    /// anything.
    pub fn status_line(self) -> Option<&'static str> {
        match self {
            DataState::NeedsData => Some("File does not exist. Generating and saving a new file."),
            DataState::HasData => None,
        }
    }
}

/// Settings for a pipeline run.
#[derive(Debug, Clone)]
pub struct PipelineOptions {
    /// Location of the order file
    pub path: PathBuf,

    /// Number of orders to generate when the file is absent
    pub order_count: u64,
}

impl Default for PipelineOptions {
    fn default() -> Self {
        Self {
            path: PathBuf::from(DEFAULT_FILE_NAME),
            order_count: DEFAULT_ORDER_COUNT,
        }
    }
}

/// Outcome of a pipeline run.
#[derive(Debug, Clone)]
pub struct RunSummary {
    /// Whether the order file was generated during this run
    pub generated: bool,

    /// Number of orders loaded from the file
    pub total_orders: usize,

    /// Orders due today, in file order
    pub due_today: Vec<Order>,
}

impl RunSummary {
    /// Number of orders due today.
    pub fn due_count(&self) -> usize {
        self.due_today.len()
    }

    /// Console line reporting the number of orders processed.
    pub fn processed_line(&self) -> String {
        format!("{} Orders processed for expiry", self.due_count())
    }
}

/// Expiry pipeline over a single order file.
#[derive(Debug, Clone, Default)]
pub struct Pipeline {
    options: PipelineOptions,
}

impl Pipeline {
    /// Creates a pipeline with the given options.
    pub fn new(options: PipelineOptions) -> Self {
        Self { options }
    }

    /// Options this pipeline runs with.
    pub fn options(&self) -> &PipelineOptions {
        &self.options
    }

    /// Current state of the configured order file.
    pub fn state(&self) -> DataState {
        DataState::of(&self.options.path)
    }

    /// Runs the pipeline for `today`.
    ///
    /// When the order file is absent, a batch is generated with `rng`, written,
    /// and then read back; only the orders read from disk are filtered. Each
    /// order due today is passed to `dispatcher`.
    ///
    /// # Errors
    ///
    /// Returns a [`PipelineError`] if generation fails or the order file cannot
    /// be written or read.
    pub fn run<R, D>(
        &self,
        today: Date,
        rng: &mut R,
        dispatcher: &mut D,
    ) -> Result<RunSummary, PipelineError>
    where
        R: Rng + ?Sized,
        D: Dispatcher + ?Sized,
    {
        let started = Instant::now();
        let path = self.options.path.as_path();
        let state = self.state();

        debug!(path = %path.display(), ?state, "resolved order file state");

        let generated = match state {
            DataState::NeedsData => {
                debug!(count = self.options.order_count, "generating order file");
                self.generate(today, rng)?;

                true
            }
            DataState::HasData => false,
        };

        let orders = csv::read_orders(path)?;
        let due: Vec<Order> = due_today(&orders, today).into_iter().cloned().collect();

        for order in &due {
            dispatcher.dispatch(order);
        }

        info!(
            total = orders.len(),
            due = due.len(),
            generated,
            elapsed = %started.elapsed().human(Truncate::Nano),
            "expiry run complete"
        );

        Ok(RunSummary {
            generated,
            total_orders: orders.len(),
            due_today: due,
        })
    }

    fn generate<R: Rng + ?Sized>(&self, today: Date, rng: &mut R) -> Result<(), PipelineError> {
        let orders = generator::generate(self.options.order_count, today, rng)?;

        debug!(orders = orders.len(), "generated orders");

        csv::write_orders(&self.options.path, &orders)?;

        Ok(())
    }
}
