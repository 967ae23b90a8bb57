//! Columns
//!
//! The ordered table that maps each [`Order`] field to its header label and to
//! the functions that render and parse it. The CSV writer, the CSV reader and
//! the console report all consult [`COLUMNS`], so renaming or reordering a
//! column is a one-line change here.

use std::{
    fmt::{self, Write},
    num::{NonZeroU64, ParseIntError},
};

use jiff::civil::DateTime;
use rust_decimal::Decimal;
use thiserror::Error;

use crate::orders::{Order, OrderStatus, UnknownStatus};

/// Field delimiter used in order files.
pub const DELIMITER: u8 = b',';

/// Identifies a field of [`Order`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    /// [`Order::row_id`]
    RowId,

    /// [`Order::customer_name`]
    CustomerName,

    /// [`Order::product_name`]
    ProductName,

    /// [`Order::quantity`]
    Quantity,

    /// [`Order::price`]
    Price,

    /// [`Order::order_date`]
    OrderDate,

    /// [`Order::due_date`]
    DueDate,

    /// [`Order::status`]
    Status,
}

impl Field {
    /// Header label of this field's column in [`COLUMNS`].
    pub fn label(self) -> &'static str {
        column(self).map_or("", |column| column.label)
    }
}

/// Errors converting a single field value.
#[derive(Debug, Error)]
pub enum FieldError {
    /// Value is not a valid unsigned integer (or is zero where a row id is expected)
    #[error("invalid integer: {0}")]
    Integer(#[from] ParseIntError),

    /// Value is not a valid decimal
    #[error("invalid decimal: {0}")]
    Decimal(#[from] rust_decimal::Error),

    /// Value is not a valid date-time
    #[error("invalid date: {0}")]
    Date(#[from] jiff::Error),

    /// Value is not a known status
    #[error(transparent)]
    Status(#[from] UnknownStatus),
}

/// An [`OrderBuilder`] was finished before every field was set.
#[derive(Debug, Error)]
#[error("missing value for column {:?}", .0.label())]
pub struct MissingField(pub Field);

/// Renders one field of an order into the output buffer.
pub type RenderFn = fn(&Order, &mut String) -> fmt::Result;

/// Parses one field's text into the builder.
pub type ParseFn = fn(&mut OrderBuilder, &str) -> Result<(), FieldError>;

/// One entry of the field table.
#[derive(Debug, Clone, Copy)]
pub struct Column {
    /// Field this column carries
    pub field: Field,

    /// Header label used in order files
    pub label: &'static str,

    /// Renderer
    pub render: RenderFn,

    /// Parser
    pub parse: ParseFn,
}

/// Field table, in file column order.
pub static COLUMNS: [Column; 8] = [
    Column {
        field: Field::RowId,
        label: "Row ID",
        render: render_row_id,
        parse: parse_row_id,
    },
    Column {
        field: Field::CustomerName,
        label: "Customer Name",
        render: render_customer_name,
        parse: parse_customer_name,
    },
    Column {
        field: Field::ProductName,
        label: "Product Name",
        render: render_product_name,
        parse: parse_product_name,
    },
    Column {
        field: Field::Quantity,
        label: "Quantity",
        render: render_quantity,
        parse: parse_quantity,
    },
    Column {
        field: Field::Price,
        label: "Price",
        render: render_price,
        parse: parse_price,
    },
    Column {
        field: Field::OrderDate,
        label: "Order Date",
        render: render_order_date,
        parse: parse_order_date,
    },
    Column {
        field: Field::DueDate,
        label: "Due Date",
        render: render_due_date,
        parse: parse_due_date,
    },
    Column {
        field: Field::Status,
        label: "Status",
        render: render_status,
        parse: parse_status,
    },
];

/// Looks up the column for a field.
pub fn column(field: Field) -> Option<&'static Column> {
    COLUMNS.iter().find(|column| column.field == field)
}

/// Collects parsed field values until every field of an [`Order`] is known.
#[derive(Debug, Default)]
pub struct OrderBuilder {
    row_id: Option<u64>,
    customer_name: Option<String>,
    product_name: Option<String>,
    quantity: Option<u64>,
    price: Option<Decimal>,
    order_date: Option<DateTime>,
    due_date: Option<DateTime>,
    status: Option<OrderStatus>,
}

impl OrderBuilder {
    /// Creates an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds the order.
    ///
    /// # Errors
    ///
    /// Returns [`MissingField`] naming the first field that was never set.
    pub fn build(self) -> Result<Order, MissingField> {
        Ok(Order {
            row_id: self.row_id.ok_or(MissingField(Field::RowId))?,
            customer_name: self
                .customer_name
                .ok_or(MissingField(Field::CustomerName))?,
            product_name: self
                .product_name
                .ok_or(MissingField(Field::ProductName))?,
            quantity: self.quantity.ok_or(MissingField(Field::Quantity))?,
            price: self.price.ok_or(MissingField(Field::Price))?,
            order_date: self
                .order_date
                .ok_or(MissingField(Field::OrderDate))?,
            due_date: self.due_date.ok_or(MissingField(Field::DueDate))?,
            status: self.status.ok_or(MissingField(Field::Status))?,
        })
    }
}

fn render_row_id(order: &Order, out: &mut String) -> fmt::Result {
    write!(out, "{}", order.row_id)
}

fn render_customer_name(order: &Order, out: &mut String) -> fmt::Result {
    out.write_str(&order.customer_name)
}

fn render_product_name(order: &Order, out: &mut String) -> fmt::Result {
    out.write_str(&order.product_name)
}

fn render_quantity(order: &Order, out: &mut String) -> fmt::Result {
    write!(out, "{}", order.quantity)
}

fn render_price(order: &Order, out: &mut String) -> fmt::Result {
    write!(out, "{}", order.price)
}

fn render_order_date(order: &Order, out: &mut String) -> fmt::Result {
    write!(out, "{}", order.order_date)
}

fn render_due_date(order: &Order, out: &mut String) -> fmt::Result {
    write!(out, "{}", order.due_date)
}

fn render_status(order: &Order, out: &mut String) -> fmt::Result {
    out.write_str(order.status.as_str())
}

fn parse_row_id(builder: &mut OrderBuilder, value: &str) -> Result<(), FieldError> {
    builder.row_id = Some(value.parse::<NonZeroU64>()?.get());

    Ok(())
}

fn parse_customer_name(builder: &mut OrderBuilder, value: &str) -> Result<(), FieldError> {
    builder.customer_name = Some(value.to_string());

    Ok(())
}

fn parse_product_name(builder: &mut OrderBuilder, value: &str) -> Result<(), FieldError> {
    builder.product_name = Some(value.to_string());

    Ok(())
}

fn parse_quantity(builder: &mut OrderBuilder, value: &str) -> Result<(), FieldError> {
    builder.quantity = Some(value.parse()?);

    Ok(())
}

fn parse_price(builder: &mut OrderBuilder, value: &str) -> Result<(), FieldError> {
    builder.price = Some(value.parse()?);

    Ok(())
}

fn parse_order_date(builder: &mut OrderBuilder, value: &str) -> Result<(), FieldError> {
    builder.order_date = Some(value.parse()?);

    Ok(())
}

fn parse_due_date(builder: &mut OrderBuilder, value: &str) -> Result<(), FieldError> {
    builder.due_date = Some(value.parse()?);

    Ok(())
}

fn parse_status(builder: &mut OrderBuilder, value: &str) -> Result<(), FieldError> {
    builder.status = Some(value.parse()?);

    Ok(())
}
