//! Integration tests for writing and re-reading order files.

use std::fs;

use jiff::civil::{Date, date};
use rand::{SeedableRng, rngs::StdRng};
use rust_decimal::Decimal;
use testresult::TestResult;

use order_expiry::{
    csv::{CsvError, read_orders, write_orders},
    generator::generate,
    orders::{Order, OrderStatus},
};

const TODAY: Date = date(2026, 10, 17);

#[test]
fn generated_batch_survives_a_round_trip() -> TestResult {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("Orders.csv");
    let orders = generate(500, TODAY, &mut StdRng::seed_from_u64(11))?;

    write_orders(&path, &orders)?;

    assert_eq!(read_orders(&path)?, orders);

    Ok(())
}

#[test]
fn hand_built_orders_survive_a_round_trip() -> TestResult {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("Orders.csv");

    let orders = vec![
        Order::new(
            1,
            "Ada Lovelace",
            "Analytical Engine",
            1,
            Decimal::new(123_456, 2),
            date(2026, 9, 1).at(9, 30, 0, 0),
            date(2026, 10, 17).at(17, 45, 12, 0),
            OrderStatus::Processing,
        ),
        Order::new(
            2,
            "",
            "Spare Gear",
            0,
            Decimal::ZERO,
            date(2026, 10, 16).at(0, 0, 0, 0),
            date(2026, 10, 16).at(0, 0, 0, 0),
            OrderStatus::Cancelled,
        ),
    ];

    write_orders(&path, &orders)?;

    assert_eq!(read_orders(&path)?, orders);

    Ok(())
}

#[test]
fn file_starts_with_fixed_header() -> TestResult {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("Orders.csv");
    let orders = generate(3, TODAY, &mut StdRng::seed_from_u64(12))?;

    write_orders(&path, &orders)?;

    let text = fs::read_to_string(&path)?;

    assert_eq!(
        text.lines().next(),
        Some("Row ID,Customer Name,Product Name,Quantity,Price,Order Date,Due Date,Status")
    );
    assert_eq!(text.lines().count(), 4);

    Ok(())
}

#[test]
fn reordered_columns_read_back_identically() -> TestResult {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("Orders.csv");
    let orders = generate(20, TODAY, &mut StdRng::seed_from_u64(13))?;

    write_orders(&path, &orders)?;

    // Move the last column (Status) to the front of every line.
    let reordered: String = fs::read_to_string(&path)?
        .lines()
        .map(|line| match line.rsplit_once(',') {
            Some((rest, last)) => format!("{last},{rest}\n"),
            None => format!("{line}\n"),
        })
        .collect();

    fs::write(&path, reordered)?;

    assert_eq!(read_orders(&path)?, orders);

    Ok(())
}

#[test]
fn corrupted_row_reports_its_line() -> TestResult {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("Orders.csv");
    let orders = generate(5, TODAY, &mut StdRng::seed_from_u64(14))?;

    write_orders(&path, &orders)?;

    let corrupted = fs::read_to_string(&path)?.replacen(
        "Customer 3,Product 3,30,",
        "Customer 3,Product 3,thirty,",
        1,
    );

    fs::write(&path, corrupted)?;

    let result = read_orders(&path);

    assert!(matches!(
        result,
        Err(CsvError::InvalidField {
            line: 4,
            label: "Quantity",
            ..
        })
    ));

    Ok(())
}

#[test]
fn non_utf8_bytes_are_a_parse_error_not_io() -> TestResult {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("Orders.csv");
    let orders = generate(3, TODAY, &mut StdRng::seed_from_u64(15))?;

    write_orders(&path, &orders)?;

    let mut bytes = fs::read(&path)?;
    let at = bytes.len().saturating_sub(3);
    bytes.insert(at, 0xff);

    fs::write(&path, bytes)?;

    let result = read_orders(&path);

    assert!(matches!(result, Err(CsvError::Encoding { line: 4, .. })));
    assert!(result.is_err_and(|error| error.is_parse()));

    Ok(())
}
