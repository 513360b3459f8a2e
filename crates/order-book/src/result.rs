//! Result types for book commands

use serde::{Deserialize, Serialize};

use crate::domain::{Order, Trade};

/// Outcome of a submit command
///
/// `order` is the post-disposition snapshot of the incoming order; `trades`
/// are the executions it produced, in creation order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubmitResult {
    /// Snapshot of the submitted order after matching and disposition
    pub order: Order,
    /// Trades generated by this submit
    pub trades: Vec<Trade>,
}

impl SubmitResult {
    /// Check if any trades were generated
    pub fn has_trades(&self) -> bool {
        !self.trades.is_empty()
    }

    /// Total quantity executed by this submit
    pub fn filled_quantity(&self) -> u64 {
        self.trades.iter().map(|t| t.quantity).sum()
    }
}
