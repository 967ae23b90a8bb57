//! CSV
//!
//! Order files are plain delimited text: one header record of column labels,
//! then one record per order with fields joined by [`DELIMITER`]. Records are
//! read and written with the [`csv`](::csv) crate with quoting switched off in
//! both directions, so a value containing the delimiter or a line break cannot
//! be stored. The writer refuses such values rather than emit a file that
//! would read back differently.
//!
//! [`DELIMITER`]: crate::columns::DELIMITER

use std::{fmt, io};

use ::csv::{ErrorKind, Position};
use thiserror::Error;

use crate::columns::FieldError;

mod reader;
mod writer;

pub use reader::{read_from, read_orders};
pub use writer::{write_orders, write_to};

/// CSV Errors
#[derive(Debug, Error)]
pub enum CsvError {
    /// IO error opening, reading or writing an order file
    #[error("order file IO error: {0}")]
    Io(#[from] io::Error),

    /// Formatting a field value failed
    #[error("failed to render field {label:?} of row {row_id}")]
    Render {
        /// Row id of the order being written
        row_id: u64,

        /// Header label of the field
        label: &'static str,

        /// Formatter error
        source: fmt::Error,
    },

    /// A field value contains the delimiter or a line break
    #[error("field {label:?} of row {row_id} contains a delimiter or line break")]
    Unrepresentable {
        /// Row id of the order being written
        row_id: u64,

        /// Header label of the field
        label: &'static str,
    },

    /// The file has no header line
    #[error("order file is empty; expected a header line")]
    MissingHeader,

    /// The header line lacks a required label
    #[error("header is missing column {0:?}")]
    MissingColumn(&'static str),

    /// A data line has a different number of fields than the header
    #[error("line {line}: expected {expected} fields, found {found}")]
    FieldCount {
        /// 1-based line number
        line: u64,

        /// Number of header columns
        expected: u64,

        /// Number of fields on the line
        found: u64,
    },

    /// A line is not valid UTF-8
    #[error("line {line}: {source}")]
    Encoding {
        /// 1-based line number
        line: u64,

        /// Decoding error
        source: ::csv::Utf8Error,
    },

    /// Any other malformed record reported by the CSV codec
    #[error("malformed order file: {0}")]
    Malformed(String),

    /// A field value could not be converted to its type
    #[error("line {line}: invalid value {value:?} for column {label:?}: {source}")]
    InvalidField {
        /// 1-based line number
        line: u64,

        /// Header label of the field
        label: &'static str,

        /// Raw field text
        value: String,

        /// Conversion error
        source: FieldError,
    },
}

impl From<::csv::Error> for CsvError {
    fn from(error: ::csv::Error) -> Self {
        match error.into_kind() {
            ErrorKind::Io(source) => CsvError::Io(source),
            ErrorKind::Utf8 { pos, err } => CsvError::Encoding {
                line: line_of(pos.as_ref()),
                source: err,
            },
            ErrorKind::UnequalLengths {
                pos,
                expected_len,
                len,
            } => CsvError::FieldCount {
                line: line_of(pos.as_ref()),
                expected: expected_len,
                found: len,
            },
            kind => CsvError::Malformed(format!("{kind:?}")),
        }
    }
}

/// 1-based line of a record position, or 0 when the codec reported none.
fn line_of(pos: Option<&Position>) -> u64 {
    pos.map_or(0, Position::line)
}

impl CsvError {
    /// Whether this error came from malformed file content rather than IO.
    pub fn is_parse(&self) -> bool {
        matches!(
            self,
            CsvError::MissingHeader
                | CsvError::MissingColumn(_)
                | CsvError::FieldCount { .. }
                | CsvError::Encoding { .. }
                | CsvError::Malformed(_)
                | CsvError::InvalidField { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn io_errors_are_not_parse_errors() {
        let error = CsvError::from(io::Error::from(io::ErrorKind::PermissionDenied));

        assert!(!error.is_parse());
    }

    #[test]
    fn header_errors_are_parse_errors() {
        assert!(CsvError::MissingHeader.is_parse());
        assert!(CsvError::MissingColumn("Status").is_parse());
    }

    #[test]
    fn field_count_message_names_line() {
        let error = CsvError::FieldCount {
            line: 4,
            expected: 8,
            found: 9,
        };

        assert_eq!(error.to_string(), "line 4: expected 8 fields, found 9");
    }

    #[test]
    fn codec_io_errors_stay_io_errors() {
        let source = ::csv::Error::from(io::Error::from(io::ErrorKind::UnexpectedEof));

        let error = CsvError::from(source);

        assert!(matches!(error, CsvError::Io(_)));
        assert!(!error.is_parse());
    }
}
