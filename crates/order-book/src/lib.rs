//! Single-instrument limit order book with a matching engine
//!
//! This crate implements the core of a limit order book: an ordered stream
//! of submit and cancel commands goes in, deterministic trade executions and
//! a continuously queryable book state come out.
//!
//! # Features
//!
//! - Price-time priority matching (FIFO within a level)
//! - Limit, market, and immediate-or-cancel order types
//! - Per-order lifecycle tracking with a registry that outlives fills
//! - Aggregated depth, best-quote, and simulated-sweep VWAP queries
//! - Append-only trade and event logs
//!
//! # Architecture
//!
//! The book is single-threaded and synchronous: every command runs to
//! completion before any other operation observes state, and command
//! arrival order alone defines matching order. Concurrent use requires
//! external serialization.
//!
//! ## Core components
//!
//! - [`domain`] - core types ([`Order`], [`Trade`], [`Side`], depth views)
//! - [`book`] - price-indexed sides with FIFO id queues
//! - [`engine`] - the [`OrderBook`] command/query surface and matcher
//! - [`config`] - construction parameters with defaults and validation
//! - [`event`] / [`log`] - the in-memory event log
//!
//! # Example
//!
//! ```rust
//! use order_book::{OrderBook, OrderType, Side};
//!
//! let mut book = OrderBook::new("BTC-USD", 0.01).unwrap();
//!
//! book.submit_order(Side::Sell, 100.0, 10, OrderType::Limit).unwrap();
//! let result = book.submit_order(Side::Buy, 100.0, 4, OrderType::Limit).unwrap();
//!
//! assert_eq!(result.trades.len(), 1);
//! assert_eq!(book.best_ask(), Some(100.0));
//! ```

pub mod book;
pub mod config;
pub mod domain;
pub mod engine;
pub mod error;
pub mod event;
pub mod log;
pub mod result;

pub use book::BookSide;
pub use config::{BookConfig, MAX_ORDER_QUANTITY, MIN_PRICE};
pub use domain::{BookLevel, Depth, Order, OrderStatus, OrderType, Side, Trade};
pub use engine::OrderBook;
pub use error::{BookError, BookResult};
pub use event::BookEvent;
pub use log::EventLog;
pub use result::SubmitResult;
