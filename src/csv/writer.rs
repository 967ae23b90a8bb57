//! Order file writer

use std::{
    fs::File,
    io::{BufWriter, Write},
    path::Path,
};

use ::csv::{QuoteStyle, Terminator, WriterBuilder};
use smallvec::SmallVec;
use tracing::debug;

use crate::{
    columns::{COLUMNS, DELIMITER},
    csv::CsvError,
    orders::Order,
};

/// Writes `orders` to `path`, creating the file or replacing its contents.
///
/// # Errors
///
/// Returns [`CsvError::Io`] if the file cannot be created or written (missing
/// parent directory, permissions, full disk), or [`CsvError::Unrepresentable`]
/// if a field value cannot be stored without quoting.
pub fn write_orders(path: impl AsRef<Path>, orders: &[Order]) -> Result<(), CsvError> {
    let path = path.as_ref();
    let file = File::create(path)?;

    write_to(BufWriter::new(file), orders)?;

    debug!(path = %path.display(), orders = orders.len(), "wrote order file");

    Ok(())
}

/// Writes the header record and one record per order to `out`, then flushes it.
///
/// # Errors
///
/// Returns [`CsvError::Io`] if writing fails, [`CsvError::Render`] if a field
/// cannot be formatted, or [`CsvError::Unrepresentable`] if a rendered field
/// contains the delimiter or a line break.
pub fn write_to(out: impl Write, orders: &[Order]) -> Result<(), CsvError> {
    let mut writer = WriterBuilder::new()
        .delimiter(DELIMITER)
        .quote_style(QuoteStyle::Never)
        .terminator(Terminator::Any(b'\n'))
        .from_writer(out);

    writer.write_record(COLUMNS.iter().map(|column| column.label))?;

    let mut fields: SmallVec<[String; 8]> = COLUMNS.iter().map(|_| String::new()).collect();

    for order in orders {
        for (column, field) in COLUMNS.iter().zip(fields.iter_mut()) {
            field.clear();

            (column.render)(order, field).map_err(|source| CsvError::Render {
                row_id: order.row_id,
                label: column.label,
                source,
            })?;

            if field.bytes().any(|byte| matches!(byte, DELIMITER | b'\n' | b'\r')) {
                return Err(CsvError::Unrepresentable {
                    row_id: order.row_id,
                    label: column.label,
                });
            }
        }

        writer.write_record(&fields)?;
    }

    writer.flush()?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use jiff::civil::date;
    use testresult::TestResult;

    use super::*;
    use crate::orders::OrderStatus;

    fn order(row_id: u64) -> Order {
        Order::synthetic(
            row_id,
            date(2026, 10, 1).at(0, 0, 0, 0),
            date(2026, 10, 17).at(0, 0, 0, 0),
            OrderStatus::Completed,
        )
    }

    #[test]
    fn writes_header_then_one_line_per_order() -> TestResult {
        let mut out = Vec::new();

        write_to(&mut out, &[order(1), order(2)])?;

        let text = String::from_utf8(out)?;

        assert_eq!(
            text,
            "Row ID,Customer Name,Product Name,Quantity,Price,Order Date,Due Date,Status\n\
             1,Customer 1,Product 1,10,10.0,2026-10-01T00:00:00,2026-10-17T00:00:00,Completed\n\
             2,Customer 2,Product 2,20,20.0,2026-10-01T00:00:00,2026-10-17T00:00:00,Completed\n"
        );

        Ok(())
    }

    #[test]
    fn empty_batch_writes_only_header() -> TestResult {
        let mut out = Vec::new();

        write_to(&mut out, &[])?;

        assert_eq!(String::from_utf8(out)?.lines().count(), 1);

        Ok(())
    }

    #[test]
    fn rejects_delimiter_inside_field() {
        let mut bad = order(5);
        bad.customer_name = "Smith, Jane".to_string();

        let result = write_to(Vec::new(), &[bad]);

        assert!(matches!(
            result,
            Err(CsvError::Unrepresentable {
                row_id: 5,
                label: "Customer Name"
            })
        ));
    }

    #[test]
    fn rejects_line_break_inside_field() {
        let mut bad = order(6);
        bad.product_name = "Widget\nDeluxe".to_string();

        let result = write_to(Vec::new(), &[bad]);

        assert!(matches!(
            result,
            Err(CsvError::Unrepresentable {
                label: "Product Name",
                ..
            })
        ));
    }

    #[test]
    fn write_orders_replaces_existing_contents() -> TestResult {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("Orders.csv");

        std::fs::write(&path, "x".repeat(10_000))?;
        write_orders(&path, &[order(1)])?;

        let text = std::fs::read_to_string(&path)?;

        assert_eq!(text.lines().count(), 2);
        assert!(!text.contains('x'));

        Ok(())
    }

    #[test]
    fn write_orders_fails_without_parent_directory() -> TestResult {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("missing").join("Orders.csv");

        let result = write_orders(&path, &[order(1)]);

        assert!(matches!(result, Err(CsvError::Io(_))));

        Ok(())
    }
}
