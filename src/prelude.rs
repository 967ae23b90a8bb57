//! Order expiry prelude.
//!
//! Convenience exports for common library consumers.

pub use crate::{
    columns::{COLUMNS, Column, Field, FieldError, MissingField, OrderBuilder},
    config::{Config, LogFormat, LoggingConfig},
    csv::{CsvError, read_from, read_orders, write_orders, write_to},
    expiry::{Dispatcher, LogDispatcher, NoopDispatcher, due_today},
    generator::{DEFAULT_ORDER_COUNT, GenerateError, generate},
    orders::{Order, OrderStatus, UnknownStatus},
    pipeline::{DataState, Pipeline, PipelineError, PipelineOptions, RunSummary},
    report::{DueOrdersReport, ReportError},
};
