//! Order Expiry
//!
//! Order expiry is a single-pass batch utility: it keeps a delimited order file,
//! generating a synthetic one when none exists, and selects the orders that
//! fall due today.

pub mod columns;
pub mod config;
pub mod csv;
pub mod expiry;
pub mod generator;
pub mod logging;
pub mod orders;
pub mod pipeline;
pub mod prelude;
pub mod report;
