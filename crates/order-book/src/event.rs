//! Events recorded by the order book
//!
//! Every accepted command leaves a trace in the event log: acceptance,
//! executions, and cancellations (explicit or residual). Replaying the log
//! against a fresh book reproduces the same state.

use serde::{Deserialize, Serialize};

use crate::domain::Trade;

/// An entry in the book's event log
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum BookEvent {
    /// An order passed validation and was registered
    OrderAccepted {
        /// Order ID
        order_id: u64,
    },

    /// An order was cancelled, explicitly or as a market/IOC residual
    OrderCancelled {
        /// Order ID
        order_id: u64,
    },

    /// A trade was executed
    TradeExecuted {
        /// Trade details
        trade: Trade,
    },
}
