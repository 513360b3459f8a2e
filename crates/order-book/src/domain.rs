//! Domain types for the order book core
//!
//! This module defines the data model shared by the book, the matching
//! engine, and the query surface: sides, order types, order and trade
//! records, and the aggregated depth views.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ============================================================================
// Side
// ============================================================================

/// Order side (buy or sell)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    /// Buy order
    Buy,
    /// Sell order
    Sell,
}

impl Side {
    /// Returns the opposite side
    pub fn opposite(&self) -> Self {
        match self {
            Side::Buy => Side::Sell,
            Side::Sell => Side::Buy,
        }
    }

    /// Returns true if this is a buy order
    pub fn is_buy(&self) -> bool {
        matches!(self, Side::Buy)
    }

    /// Returns true if this is a sell order
    pub fn is_sell(&self) -> bool {
        matches!(self, Side::Sell)
    }
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Side::Buy => write!(f, "buy"),
            Side::Sell => write!(f, "sell"),
        }
    }
}

// ============================================================================
// Order Type
// ============================================================================

/// Order type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum OrderType {
    /// Limit order - execute at the limit price or better, rest the residual
    #[default]
    Limit,
    /// Market order - execute immediately at the best available prices,
    /// cancel the residual
    Market,
    /// Immediate-or-cancel - like a limit order, but the residual is
    /// cancelled instead of rested
    Ioc,
}

impl std::fmt::Display for OrderType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OrderType::Limit => write!(f, "limit"),
            OrderType::Market => write!(f, "market"),
            OrderType::Ioc => write!(f, "ioc"),
        }
    }
}

// ============================================================================
// Order Status
// ============================================================================

/// Order status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    /// Order is resting with no fills
    Open,
    /// Order is resting with at least one fill
    PartiallyFilled,
    /// Order was completely filled by matching
    Filled,
    /// Order was cancelled, either explicitly or as the residual of a
    /// market/IOC order
    Cancelled,
}

impl OrderStatus {
    /// Returns true for statuses that end the order's lifecycle
    pub fn is_terminal(&self) -> bool {
        matches!(self, OrderStatus::Filled | OrderStatus::Cancelled)
    }
}

impl std::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OrderStatus::Open => write!(f, "open"),
            OrderStatus::PartiallyFilled => write!(f, "partially_filled"),
            OrderStatus::Filled => write!(f, "filled"),
            OrderStatus::Cancelled => write!(f, "cancelled"),
        }
    }
}

// ============================================================================
// Order
// ============================================================================

/// An order known to the book
///
/// The registry owns the authoritative record; values handed back from
/// commands and queries are snapshots taken at return time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Order {
    /// Order ID, monotonically assigned from 1
    pub order_id: u64,
    /// Buy or sell
    pub side: Side,
    /// Limit price; ignored for market orders
    pub price: f64,
    /// Original quantity
    pub quantity: u64,
    /// Unfilled quantity
    pub remaining: u64,
    /// Limit, market, or IOC
    pub order_type: OrderType,
    /// Submission timestamp; metadata only, never a matching key
    pub timestamp: DateTime<Utc>,
    /// Lifecycle status
    pub status: OrderStatus,
}

impl Order {
    /// Create a new open order with nothing filled yet
    pub fn new(
        order_id: u64,
        side: Side,
        price: f64,
        quantity: u64,
        order_type: OrderType,
        timestamp: DateTime<Utc>,
    ) -> Self {
        Self {
            order_id,
            side,
            price,
            quantity,
            remaining: quantity,
            order_type,
            timestamp,
            status: OrderStatus::Open,
        }
    }

    /// Reduce the remaining quantity after a fill
    pub fn fill(&mut self, qty: u64) {
        self.remaining = self.remaining.saturating_sub(qty);
    }

    /// Check if the order has no quantity left
    pub fn is_filled(&self) -> bool {
        self.remaining == 0
    }

    /// Check if the order is still live (resting or pre-match)
    pub fn is_active(&self) -> bool {
        matches!(self.status, OrderStatus::Open | OrderStatus::PartiallyFilled)
    }

    /// Quantity executed so far
    pub fn filled_quantity(&self) -> u64 {
        self.quantity - self.remaining
    }
}

// ============================================================================
// Trade
// ============================================================================

/// A matched execution between two orders
///
/// Trades are immutable once created and appended to the trade log in
/// creation order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Trade {
    /// Trade ID, monotonically assigned from 1
    pub trade_id: u64,
    /// The buying order (aggressor or resting)
    pub buy_order_id: u64,
    /// The selling order (aggressor or resting)
    pub sell_order_id: u64,
    /// Execution price (always the resting level's price)
    pub price: f64,
    /// Executed quantity
    pub quantity: u64,
    /// The aggressor's timestamp
    pub timestamp: DateTime<Utc>,
}

// ============================================================================
// Depth
// ============================================================================

/// Aggregated view of one price level
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookLevel {
    /// Price
    pub price: f64,
    /// Total remaining quantity at this price
    pub quantity: u64,
    /// Number of active orders at this price
    pub order_count: usize,
}

/// Aggregated depth snapshot of both sides
///
/// Bid levels are ordered best-first (high to low), ask levels best-first
/// (low to high).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Depth {
    /// Bid price levels
    pub bids: Vec<BookLevel>,
    /// Ask price levels
    pub asks: Vec<BookLevel>,
}

// ============================================================================
// Tests
// ============================================================================
