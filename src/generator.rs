//! Generator
//!
//! Produces batches of synthetic orders relative to a given day.

use std::ops::Range;

use jiff::{
    ToSpan,
    civil::{Date, Time},
};
use rand::{Rng, distributions::Standard};
use thiserror::Error;

use crate::orders::Order;

/// Number of orders generated when no count is configured.
pub const DEFAULT_ORDER_COUNT: u64 = 1_000_000;

/// Range both day offsets are drawn from.
const OFFSET_DAYS: Range<i64> = 1..30;

/// Due offsets at or above this are dropped from the due date.
const DUE_OFFSET_CUTOFF: i64 = 15;

/// Generator Errors
#[derive(Debug, Error)]
pub enum GenerateError {
    /// A generated date fell outside the supported calendar range.
    #[error("generated date is out of range: {0}")]
    DateOutOfRange(#[from] jiff::Error),
}

/// Generates `count` synthetic orders with row ids `1..=count`.
///
/// For each order an order offset and a due offset are drawn from `1..30` days.
/// The order date is `today - order_offset`; the due date is the order date
/// plus the order offset, plus the due offset only when it is below 15. Every
/// due date therefore lands between `today` and `today + 14`.
///
/// # Errors
///
/// Returns [`GenerateError::DateOutOfRange`] if `today` is so close to the end
/// of the supported calendar that an offset overflows it.
pub fn generate<R: Rng + ?Sized>(
    count: u64,
    today: Date,
    rng: &mut R,
) -> Result<Vec<Order>, GenerateError> {
    let mut orders = Vec::with_capacity(usize::try_from(count).unwrap_or(0));

    for row_id in 1..=count {
        let order_offset = rng.gen_range(OFFSET_DAYS);
        let order_date = today.checked_sub(order_offset.days())?;

        let due_offset = rng.gen_range(OFFSET_DAYS);
        let extra_days = if due_offset < DUE_OFFSET_CUTOFF {
            due_offset
        } else {
            0
        };
        let due_date = order_date.checked_add((order_offset + extra_days).days())?;

        orders.push(Order::synthetic(
            row_id,
            order_date.to_datetime(Time::midnight()),
            due_date.to_datetime(Time::midnight()),
            rng.sample(Standard),
        ));
    }

    Ok(orders)
}
