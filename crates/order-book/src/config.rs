//! Book configuration
//!
//! Construction parameters for a book instance. All fields have defaults so
//! integrators can deserialize a partial configuration and rely on
//! [`BookConfig::validate`] before handing it to the book.

use serde::{Deserialize, Serialize};

use crate::error::{BookError, BookResult};

/// Minimum admissible limit price
pub const MIN_PRICE: f64 = 0.01;

/// Maximum order quantity accepted at the boundary
pub const MAX_ORDER_QUANTITY: u64 = 1_000_000;

pub fn default_symbol() -> String {
    "SIM".to_string()
}

pub fn default_tick_size() -> f64 {
    0.01
}

pub fn default_max_order_quantity() -> u64 {
    MAX_ORDER_QUANTITY
}

pub fn default_min_price() -> f64 {
    MIN_PRICE
}

/// Construction parameters for an [`OrderBook`](crate::OrderBook)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookConfig {
    /// Instrument symbol
    #[serde(default = "default_symbol")]
    pub symbol: String,

    /// Minimum quotable price increment; stored and validated positive,
    /// off-tick prices are still accepted at the boundary
    #[serde(default = "default_tick_size")]
    pub tick_size: f64,

    /// Upper bound on order quantity accepted at the boundary
    #[serde(default = "default_max_order_quantity")]
    pub max_order_quantity: u64,

    /// Minimum admissible limit price
    #[serde(default = "default_min_price")]
    pub min_price: f64,
}

impl Default for BookConfig {
    fn default() -> Self {
        Self {
            symbol: default_symbol(),
            tick_size: default_tick_size(),
            max_order_quantity: default_max_order_quantity(),
            min_price: default_min_price(),
        }
    }
}

impl BookConfig {
    /// Check the configuration for internal consistency
    pub fn validate(&self) -> BookResult<()> {
        if self.symbol.is_empty() {
            return Err(BookError::validation("symbol must not be empty"));
        }
        if self.tick_size <= 0.0 || !self.tick_size.is_finite() {
            return Err(BookError::validation(format!(
                "tick_size must be positive, got {}",
                self.tick_size
            )));
        }
        if self.max_order_quantity == 0 {
            return Err(BookError::validation("max_order_quantity must be positive"));
        }
        if self.min_price <= 0.0 || !self.min_price.is_finite() {
            return Err(BookError::validation(format!(
                "min_price must be positive, got {}",
                self.min_price
            )));
        }
        Ok(())
    }
}
