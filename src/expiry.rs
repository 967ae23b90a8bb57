//! Expiry
//!
//! Selecting the orders that fall due on a given day, and handing them on to
//! whatever processes expiring orders.

use jiff::civil::Date;
use tracing::debug;

use crate::orders::Order;

/// Returns the orders whose due date falls on `today`, in their original order.
///
/// Only the calendar date of each due date is compared; its time of day is ignored.
pub fn due_today(orders: &[Order], today: Date) -> Vec<&Order> {
    orders
        .iter()
        .filter(|order| order.due_date.date() == today)
        .collect()
}

/// Receives each order selected for expiry processing.
///
/// Implementations typically enqueue the order for asynchronous work. The
/// pipeline calls [`Dispatcher::dispatch`] once per due order, in file order.
pub trait Dispatcher {
    /// Called for each due order.
    fn dispatch(&mut self, order: &Order);
}

/// Dispatcher that discards every order.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopDispatcher;

impl Dispatcher for NoopDispatcher {
    fn dispatch(&mut self, _order: &Order) {}
}

/// Dispatcher that records each order as a debug event.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogDispatcher {
    dispatched: usize,
}

impl LogDispatcher {
    /// Creates a new dispatcher.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of orders dispatched so far.
    pub fn dispatched(&self) -> usize {
        self.dispatched
    }
}

impl Dispatcher for LogDispatcher {
    fn dispatch(&mut self, order: &Order) {
        self.dispatched += 1;

        debug!(
            row_id = order.row_id,
            status = %order.status,
            due_date = %order.due_date,
            "dispatching order for expiry"
        );
    }
}

impl<F: FnMut(&Order)> Dispatcher for F {
    fn dispatch(&mut self, order: &Order) {
        self(order);
    }
}
