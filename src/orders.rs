//! Orders

use std::{fmt, str::FromStr};

use jiff::civil::DateTime;
use rand::{
    Rng,
    distributions::{Distribution, Standard},
};
use rust_decimal::Decimal;
use thiserror::Error;

/// Lifecycle status of an order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OrderStatus {
    /// Awaiting processing
    Pending,

    /// Currently being processed
    Processing,

    /// Fulfilled
    Completed,

    /// Withdrawn before fulfilment
    Cancelled,
}

impl OrderStatus {
    /// Every status, in declaration order.
    pub const ALL: [OrderStatus; 4] = [
        OrderStatus::Pending,
        OrderStatus::Processing,
        OrderStatus::Completed,
        OrderStatus::Cancelled,
    ];

    /// Text used for this status in order files.
    pub fn as_str(self) -> &'static str {
        match self {
            OrderStatus::Pending => "Pending",
            OrderStatus::Processing => "Processing",
            OrderStatus::Completed => "Completed",
            OrderStatus::Cancelled => "Cancelled",
        }
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Text did not name a known order status.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown order status: {0:?}")]
pub struct UnknownStatus(pub String);

impl FromStr for OrderStatus {
    type Err = UnknownStatus;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        OrderStatus::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| UnknownStatus(s.to_string()))
    }
}

impl Distribution<OrderStatus> for Standard {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> OrderStatus {
        match rng.gen_range(0..4) {
            0 => OrderStatus::Pending,
            1 => OrderStatus::Processing,
            2 => OrderStatus::Completed,
            _ => OrderStatus::Cancelled,
        }
    }
}

/// A single purchase order line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Order {
    /// Sequential identifier, unique within a generated batch
    pub row_id: u64,

    /// Customer label
    pub customer_name: String,

    /// Product label
    pub product_name: String,

    /// Units ordered
    pub quantity: u64,

    /// Line price
    pub price: Decimal,

    /// When the order was placed
    pub order_date: DateTime,

    /// When the order expires
    pub due_date: DateTime,

    /// Current status
    pub status: OrderStatus,
}

impl Order {
    /// Creates an order from explicit field values.
    #[expect(
        clippy::too_many_arguments,
        reason = "one argument per order field keeps construction explicit"
    )]
    pub fn new(
        row_id: u64,
        customer_name: impl Into<String>,
        product_name: impl Into<String>,
        quantity: u64,
        price: Decimal,
        order_date: DateTime,
        due_date: DateTime,
        status: OrderStatus,
    ) -> Self {
        Self {
            row_id,
            customer_name: customer_name.into(),
            product_name: product_name.into(),
            quantity,
            price,
            order_date,
            due_date,
            status,
        }
    }

    /// Creates an order whose labels, quantity and price are derived from the row id.
    ///
    /// Price is `row_id * 10` carried at one decimal place, so row 3 is priced `30.0`.
    pub fn synthetic(
        row_id: u64,
        order_date: DateTime,
        due_date: DateTime,
        status: OrderStatus,
    ) -> Self {
        Self {
            row_id,
            customer_name: format!("Customer {row_id}"),
            product_name: format!("Product {row_id}"),
            quantity: row_id * 10,
            price: Decimal::from_i128_with_scale(i128::from(row_id) * 100, 1),
            order_date,
            due_date,
            status,
        }
    }
}

#[cfg(test)]
mod tests {
    use jiff::civil::date;
    use rand::{SeedableRng, rngs::StdRng};
    use rust_decimal::Decimal;
    use testresult::TestResult;

    use super::*;

    #[test]
    fn synthetic_order_derives_fields_from_row_id() {
        let day = date(2026, 10, 17).at(0, 0, 0, 0);
        let order = Order::synthetic(7, day, day, OrderStatus::Pending);

        assert_eq!(order.customer_name, "Customer 7");
        assert_eq!(order.product_name, "Product 7");
        assert_eq!(order.quantity, 70);
        assert_eq!(order.price, Decimal::from(70));
        assert_eq!(order.price.to_string(), "70.0");
    }

    #[test]
    fn status_parses_its_own_rendering() -> TestResult {
        for status in OrderStatus::ALL {
            assert_eq!(status.to_string().parse::<OrderStatus>()?, status);
        }

        Ok(())
    }

    #[test]
    fn status_rejects_unknown_text() {
        let result = "Shipped".parse::<OrderStatus>();

        assert_eq!(result, Err(UnknownStatus("Shipped".to_string())));
    }

    #[test]
    fn status_parsing_is_case_sensitive() {
        assert!("pending".parse::<OrderStatus>().is_err());
    }

    #[test]
    fn sampled_statuses_cover_every_variant() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut seen = [false; 4];

        for _ in 0..200 {
            let status: OrderStatus = rng.sample(Standard);

            if let Some(slot) = OrderStatus::ALL
                .iter()
                .position(|candidate| *candidate == status)
                .and_then(|idx| seen.get_mut(idx))
            {
                *slot = true;
            }
        }

        assert!(seen.iter().all(|hit| *hit));
    }
}
