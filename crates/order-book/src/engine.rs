//! Order book core and matching engine
//!
//! This module implements the deterministic price-time priority matching
//! algorithm and the synchronous command/query surface around it.

use std::collections::{HashMap, VecDeque};

use chrono::{DateTime, Utc};
use tracing::{debug, info};

use crate::book::BookSide;
use crate::config::BookConfig;
use crate::domain::{BookLevel, Depth, Order, OrderStatus, OrderType, Side, Trade};
use crate::error::{BookError, BookResult};
use crate::event::BookEvent;
use crate::log::EventLog;
use crate::result::SubmitResult;

/// A single-instrument limit order book
///
/// CRITICAL PROPERTIES:
/// 1. Deterministic (same command sequence, same outputs, always)
/// 2. Price-time priority (strictly enforced; time = insertion order)
/// 3. Synchronous - every command runs to completion before the next
/// 4. The registry owns every order ever accepted; side queues hold ids only
#[derive(Debug)]
pub struct OrderBook {
    config: BookConfig,
    /// Authoritative order records, retained for the book's lifetime
    orders: HashMap<u64, Order>,
    bids: BookSide,
    asks: BookSide,
    /// Append-only trade log
    trades: Vec<Trade>,
    events: EventLog,
    order_sequence: u64,
    trade_sequence: u64,
}

impl OrderBook {
    /// Create a book for `symbol` with the given tick size
    ///
    /// Fails with [`BookError::Validation`] when `tick_size` is not
    /// strictly positive.
    pub fn new(symbol: impl Into<String>, tick_size: f64) -> BookResult<Self> {
        Self::with_config(BookConfig {
            symbol: symbol.into(),
            tick_size,
            ..BookConfig::default()
        })
    }

    /// Create a book from a full configuration
    pub fn with_config(config: BookConfig) -> BookResult<Self> {
        config.validate()?;
        Ok(Self {
            config,
            orders: HashMap::new(),
            bids: BookSide::new(Side::Buy),
            asks: BookSide::new(Side::Sell),
            trades: Vec::new(),
            events: EventLog::new(),
            order_sequence: 0,
            trade_sequence: 0,
        })
    }

    /// Instrument symbol
    pub fn symbol(&self) -> &str {
        &self.config.symbol
    }

    /// Minimum quotable price increment
    pub fn tick_size(&self) -> f64 {
        self.config.tick_size
    }

    /// The configuration this book was built from
    pub fn config(&self) -> &BookConfig {
        &self.config
    }

    fn next_order_id(&mut self) -> u64 {
        self.order_sequence += 1;
        self.order_sequence
    }

    fn next_trade_id(&mut self) -> u64 {
        self.trade_sequence += 1;
        self.trade_sequence
    }

    fn side_mut(&mut self, side: Side) -> &mut BookSide {
        match side {
            Side::Buy => &mut self.bids,
            Side::Sell => &mut self.asks,
        }
    }

    // ========================================================================
    // Commands
    // ========================================================================

    /// Submit an order timestamped with the current wall clock
    ///
    /// See [`OrderBook::submit_order_at`].
    pub fn submit_order(
        &mut self,
        side: Side,
        price: f64,
        quantity: u64,
        order_type: OrderType,
    ) -> BookResult<SubmitResult> {
        self.submit_order_at(side, price, quantity, order_type, Utc::now())
    }

    /// Submit an order with a caller-supplied timestamp
    ///
    /// The flow is validate, allocate id, register, match, dispose the
    /// residual. A limit residual rests in the book; a market/IOC residual
    /// is cancelled. The timestamp is metadata recorded on the order and
    /// its trades - command arrival order alone decides priority.
    ///
    /// A rejected submit consumes no id and leaves no trace.
    pub fn submit_order_at(
        &mut self,
        side: Side,
        price: f64,
        quantity: u64,
        order_type: OrderType,
        timestamp: DateTime<Utc>,
    ) -> BookResult<SubmitResult> {
        self.validate_submit(price, quantity, order_type)?;

        let order_id = self.next_order_id();
        let mut order = Order::new(order_id, side, price, quantity, order_type, timestamp);
        self.orders.insert(order_id, order.clone());
        self.events.append(BookEvent::OrderAccepted { order_id });
        info!(
            order_id,
            side = ?side,
            price,
            quantity,
            order_type = ?order_type,
            "order accepted"
        );

        let trades = self.match_incoming(&mut order);

        if order.remaining > 0 {
            match order.order_type {
                OrderType::Limit => {
                    order.status = if order.remaining == order.quantity {
                        OrderStatus::Open
                    } else {
                        OrderStatus::PartiallyFilled
                    };
                    self.side_mut(order.side).insert(order.price, order_id);
                }
                OrderType::Market | OrderType::Ioc => {
                    order.status = OrderStatus::Cancelled;
                    self.events.append(BookEvent::OrderCancelled { order_id });
                    debug!(order_id, remaining = order.remaining, "residual cancelled");
                }
            }
        } else {
            order.status = OrderStatus::Filled;
        }

        self.orders.insert(order_id, order.clone());
        Ok(SubmitResult { order, trades })
    }

    /// Cancel a resting order
    ///
    /// Fails with [`BookError::NotFound`] for unknown ids and
    /// [`BookError::Validation`] for orders already in a terminal status.
    /// A rejected cancel does not alter the book.
    pub fn cancel_order(&mut self, order_id: u64) -> BookResult<Order> {
        let Some(order) = self.orders.get_mut(&order_id) else {
            return Err(BookError::not_found(order_id));
        };
        if order.status.is_terminal() {
            return Err(BookError::validation(format!(
                "Cannot cancel order {} in status {}",
                order_id, order.status
            )));
        }

        order.status = OrderStatus::Cancelled;
        let snapshot = order.clone();

        self.side_mut(snapshot.side).remove(snapshot.price, order_id);
        self.events.append(BookEvent::OrderCancelled { order_id });
        info!(order_id, "order cancelled");
        Ok(snapshot)
    }

    /// Look up an order by id
    pub fn get_order(&self, order_id: u64) -> BookResult<Order> {
        self.orders
            .get(&order_id)
            .cloned()
            .ok_or_else(|| BookError::not_found(order_id))
    }

    // ========================================================================
    // Matching
    // ========================================================================

    fn validate_submit(&self, price: f64, quantity: u64, order_type: OrderType) -> BookResult<()> {
        if quantity == 0 || quantity > self.config.max_order_quantity {
            return Err(BookError::validation(format!(
                "Quantity must be between 1 and {}, got {}",
                self.config.max_order_quantity, quantity
            )));
        }
        if order_type != OrderType::Market
            && (!price.is_finite() || price < self.config.min_price)
        {
            return Err(BookError::validation(format!(
                "Price must be at least {}, got {}",
                self.config.min_price, price
            )));
        }
        Ok(())
    }

    /// Walk the opposing side in priority order and fill against it
    ///
    /// The incoming order is matched as a local value; the caller writes it
    /// back to the registry after disposition. Fill data is collected first
    /// and the trades are created afterwards.
    fn match_incoming(&mut self, incoming: &mut Order) -> Vec<Trade> {
        let opposing = match incoming.side {
            Side::Buy => &mut self.asks,
            Side::Sell => &mut self.bids,
        };
        let orders = &mut self.orders;
        let mut fills: Vec<(u64, f64, u64)> = Vec::new();

        while incoming.remaining > 0 {
            let Some(level_price) = opposing.best_price() else {
                break;
            };

            // Price gate: market orders have none
            if incoming.order_type != OrderType::Market {
                let crosses = match incoming.side {
                    Side::Buy => level_price <= incoming.price,
                    Side::Sell => level_price >= incoming.price,
                };
                if !crosses {
                    break;
                }
            }

            let Some(queue) = opposing.queue_mut(level_price) else {
                break;
            };

            // FIFO within the level: always fill the front
            while incoming.remaining > 0 {
                let Some(&maker_id) = queue.front() else {
                    break;
                };
                let Some(maker) = orders.get_mut(&maker_id) else {
                    queue.pop_front();
                    continue;
                };

                let fill = incoming.remaining.min(maker.remaining);
                incoming.fill(fill);
                maker.fill(fill);
                maker.status = if maker.is_filled() {
                    OrderStatus::Filled
                } else {
                    OrderStatus::PartiallyFilled
                };
                incoming.status = if incoming.is_filled() {
                    OrderStatus::Filled
                } else {
                    OrderStatus::PartiallyFilled
                };
                fills.push((maker_id, level_price, fill));

                if maker.is_filled() {
                    queue.pop_front();
                }
            }

            opposing.remove_level_if_empty(level_price);
        }

        let mut trades = Vec::with_capacity(fills.len());
        for (maker_id, price, quantity) in fills {
            let trade_id = self.next_trade_id();
            let (buy_order_id, sell_order_id) = match incoming.side {
                Side::Buy => (incoming.order_id, maker_id),
                Side::Sell => (maker_id, incoming.order_id),
            };
            let trade = Trade {
                trade_id,
                buy_order_id,
                sell_order_id,
                price,
                quantity,
                timestamp: incoming.timestamp,
            };
            debug!(trade_id, buy_order_id, sell_order_id, price, quantity, "trade executed");
            self.trades.push(trade.clone());
            self.events.append(BookEvent::TradeExecuted {
                trade: trade.clone(),
            });
            trades.push(trade);
        }
        trades
    }

    // ========================================================================
    // Queries
    // ========================================================================

    /// Highest price with a resting bid
    pub fn best_bid(&self) -> Option<f64> {
        self.bids.best_price()
    }

    /// Lowest price with a resting ask
    pub fn best_ask(&self) -> Option<f64> {
        self.asks.best_price()
    }

    /// Mid-point of the best quotes; None unless both sides are populated
    pub fn midprice(&self) -> Option<f64> {
        Some((self.best_bid()? + self.best_ask()?) / 2.0)
    }

    /// Best ask minus best bid; None unless both sides are populated
    pub fn spread(&self) -> Option<f64> {
        Some(self.best_ask()? - self.best_bid()?)
    }

    /// Aggregated depth, at most `levels` levels per side
    pub fn depth(&self, levels: usize) -> Depth {
        Depth {
            bids: self.aggregate_side(&self.bids, levels),
            asks: self.aggregate_side(&self.asks, levels),
        }
    }

    /// Volume-weighted average price a market order of `quantity` on `side`
    /// would obtain sweeping the opposing aggregated depth
    ///
    /// Returns None when the opposing depth cannot cover the quantity.
    pub fn vwap(&self, side: Side, quantity: u64) -> Option<f64> {
        if quantity == 0 {
            return None;
        }
        let opposing = match side {
            Side::Buy => &self.asks,
            Side::Sell => &self.bids,
        };

        let mut need = quantity;
        let mut cost = 0.0;
        for (price, queue) in opposing.iter() {
            let (available, _) = self.aggregate_level(queue);
            let fill = need.min(available);
            cost += fill as f64 * price;
            need -= fill;
            if need == 0 {
                break;
            }
        }

        if need > 0 {
            return None;
        }
        Some(cost / quantity as f64)
    }

    /// Number of orders currently resting (open or partially filled)
    pub fn order_count(&self) -> usize {
        self.orders.values().filter(|o| o.is_active()).count()
    }

    /// Number of trades executed over the book's lifetime
    pub fn trade_count(&self) -> usize {
        self.trades.len()
    }

    /// The full trade log in execution order
    pub fn trades(&self) -> &[Trade] {
        &self.trades
    }

    /// The most recent `limit` trades in execution order
    pub fn recent_trades(&self, limit: usize) -> Vec<Trade> {
        let start = self.trades.len().saturating_sub(limit);
        self.trades[start..].to_vec()
    }

    /// The book's event log in append order
    pub fn events(&self) -> &[BookEvent] {
        self.events.entries()
    }

    fn aggregate_side(&self, side: &BookSide, levels: usize) -> Vec<BookLevel> {
        side.iter()
            .take(levels)
            .map(|(price, queue)| {
                let (quantity, order_count) = self.aggregate_level(queue);
                BookLevel {
                    price,
                    quantity,
                    order_count,
                }
            })
            .collect()
    }

    fn aggregate_level(&self, queue: &VecDeque<u64>) -> (u64, usize) {
        let mut quantity = 0;
        let mut order_count = 0;
        for id in queue {
            if let Some(order) = self.orders.get(id) {
                if order.remaining > 0 {
                    quantity += order.remaining;
                    order_count += 1;
                }
            }
        }
        (quantity, order_count)
    }
}

// ============================================================================
// Tests
// ============================================================================
