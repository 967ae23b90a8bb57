//! Report
//!
//! Console table of the orders selected for expiry.

use std::{fmt, io};

use tabled::{
    builder::Builder,
    settings::{
        Alignment, Color, Style,
        object::{Columns, Rows},
    },
};
use thiserror::Error;

use crate::{
    columns::COLUMNS,
    orders::{Order, OrderStatus},
};

/// Errors that can occur when writing a report.
#[derive(Debug, Error)]
pub enum ReportError {
    /// A field could not be formatted.
    #[error("failed to render field {label:?} of row {row_id}")]
    Render {
        /// Row id of the order
        row_id: u64,

        /// Header label of the field
        label: &'static str,

        /// Formatter error
        source: fmt::Error,
    },

    /// IO error
    #[error(transparent)]
    Io(#[from] io::Error),
}

/// Table of due orders, truncated to a row limit, followed by status totals.
#[derive(Debug, Clone, Copy)]
pub struct DueOrdersReport<'a> {
    orders: &'a [Order],
    limit: usize,
}

impl<'a> DueOrdersReport<'a> {
    /// Creates a report showing at most `limit` of `orders`.
    pub fn new(orders: &'a [Order], limit: usize) -> Self {
        Self { orders, limit }
    }

    /// Counts orders per status, in [`OrderStatus::ALL`] order.
    pub fn status_counts(&self) -> [(OrderStatus, usize); 4] {
        OrderStatus::ALL.map(|status| {
            let count = self
                .orders
                .iter()
                .filter(|order| order.status == status)
                .count();

            (status, count)
        })
    }

    /// Writes the report.
    ///
    /// # Errors
    ///
    /// Returns a [`ReportError`] if a field cannot be rendered or writing fails.
    pub fn write_to(&self, mut out: impl io::Write) -> Result<(), ReportError> {
        let mut builder = Builder::default();

        builder.push_record(COLUMNS.iter().map(|column| column.label));

        for order in self.orders.iter().take(self.limit) {
            builder.push_record(render_row(order)?);
        }

        let mut table = builder.build();

        table.with(Style::modern_rounded());
        table.modify(Rows::first(), Color::BOLD);
        table.modify(Columns::new(0..1), Alignment::right());
        table.modify(Columns::new(3..5), Alignment::right());

        writeln!(out, "\n{table}")?;

        let shown = self.orders.len().min(self.limit);

        writeln!(out, "Showing {shown} of {} due orders", self.orders.len())?;

        let totals = self
            .status_counts()
            .iter()
            .map(|(status, count)| format!("{status}: {count}"))
            .collect::<Vec<_>>()
            .join("  ");

        writeln!(out, "{totals}")?;

        Ok(())
    }
}

fn render_row(order: &Order) -> Result<Vec<String>, ReportError> {
    COLUMNS
        .iter()
        .map(|column| -> Result<String, ReportError> {
            let mut cell = String::new();

            (column.render)(order, &mut cell).map_err(|source| ReportError::Render {
                row_id: order.row_id,
                label: column.label,
                source,
            })?;

            Ok(cell)
        })
        .collect()
}
