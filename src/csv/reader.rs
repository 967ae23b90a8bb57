//! Order file reader

use std::{fs::File, io::Read, path::Path};

use ::csv::{ReaderBuilder, StringRecord, Trim};
use rustc_hash::FxHashMap;
use smallvec::SmallVec;
use tracing::debug;

use crate::{
    columns::{COLUMNS, Column, DELIMITER, MissingField, OrderBuilder},
    csv::CsvError,
    orders::Order,
};

/// Reads every order from the file at `path`, in file order.
///
/// # Errors
///
/// Returns [`CsvError::Io`] if the file cannot be opened or read, or one of the
/// parse variants of [`CsvError`] if its contents are malformed.
pub fn read_orders(path: impl AsRef<Path>) -> Result<Vec<Order>, CsvError> {
    let path = path.as_ref();
    let file = File::open(path)?;
    let orders = read_from(file)?;

    debug!(path = %path.display(), orders = orders.len(), "read order file");

    Ok(orders)
}

/// Reads orders from `input`.
///
/// Columns are located by header label, so their order in the input may differ
/// from [`COLUMNS`]; unrecognised columns are ignored and blank lines skipped.
///
/// # Errors
///
/// Returns [`CsvError::MissingHeader`] for empty input,
/// [`CsvError::MissingColumn`] if a label is absent from the header,
/// [`CsvError::FieldCount`] for a line with the wrong number of fields,
/// [`CsvError::Encoding`] for a line that is not UTF-8,
/// [`CsvError::InvalidField`] for a value of the wrong type, or
/// [`CsvError::Io`] if reading fails.
pub fn read_from(input: impl Read) -> Result<Vec<Order>, CsvError> {
    let mut reader = ReaderBuilder::new()
        .delimiter(DELIMITER)
        .quoting(false)
        .flexible(false)
        .trim(Trim::Headers)
        .from_reader(input);

    let layout = HeaderLayout::parse(reader.headers()?)?;

    let mut orders = Vec::new();
    let mut record = StringRecord::new();

    while reader.read_record(&mut record)? {
        orders.push(layout.parse_record(&record)?);
    }

    Ok(orders)
}

/// Position of each known column within a file's header.
#[derive(Debug)]
struct HeaderLayout {
    positions: SmallVec<[(&'static Column, usize); 8]>,
}

impl HeaderLayout {
    fn parse(header: &StringRecord) -> Result<Self, CsvError> {
        if header.is_empty() {
            return Err(CsvError::MissingHeader);
        }

        let mut labels: FxHashMap<&str, usize> = FxHashMap::default();

        for (idx, label) in header.iter().enumerate() {
            labels.entry(label).or_insert(idx);
        }

        let positions = COLUMNS
            .iter()
            .map(|column| {
                labels
                    .get(column.label)
                    .map(|idx| (column, *idx))
                    .ok_or(CsvError::MissingColumn(column.label))
            })
            .collect::<Result<_, _>>()?;

        Ok(Self { positions })
    }

    fn parse_record(&self, record: &StringRecord) -> Result<Order, CsvError> {
        let line = record.position().map_or(0, ::csv::Position::line);
        let mut builder = OrderBuilder::new();

        for (column, idx) in &self.positions {
            let value = record.get(*idx).unwrap_or_default();

            (column.parse)(&mut builder, value).map_err(|source| CsvError::InvalidField {
                line,
                label: column.label,
                value: value.to_string(),
                source,
            })?;
        }

        builder
            .build()
            .map_err(|MissingField(field)| CsvError::MissingColumn(field.label()))
    }
}
