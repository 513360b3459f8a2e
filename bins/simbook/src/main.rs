//! SimBook demo binary
//!
//! Drives one book through a short scripted session - seed resting
//! liquidity, cross it with limit, market, and IOC orders, cancel a
//! leftover - and prints the resulting depth and trade log as JSON.
//! The core itself has no CLI surface; this binary is an integrator.

use anyhow::Result;
use clap::Parser;
use observability::{init_logging, LogFormat};
use order_book::{BookConfig, OrderBook, OrderType, Side};
use tracing::info;

#[derive(Parser, Debug)]
#[command(name = "simbook")]
#[command(about = "SimBook - a single-instrument limit order book simulator")]
#[command(version)]
struct Args {
    /// Instrument symbol
    #[arg(short, long, default_value = "SIM")]
    symbol: String,

    /// Minimum price increment
    #[arg(short, long, default_value_t = 0.01)]
    tick_size: f64,

    /// Depth levels to print
    #[arg(short, long, default_value_t = 5)]
    levels: usize,

    /// Log output format (pretty, json, compact)
    #[arg(long, default_value = "pretty")]
    log_format: LogFormat,
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging("simbook", args.log_format)?;

    let mut book = OrderBook::with_config(BookConfig {
        symbol: args.symbol,
        tick_size: args.tick_size,
        ..BookConfig::default()
    })?;
    info!(symbol = book.symbol(), "book created");

    // Resting liquidity on both sides
    for (side, price, quantity) in [
        (Side::Buy, 99.0, 20),
        (Side::Buy, 99.5, 10),
        (Side::Sell, 100.5, 10),
        (Side::Sell, 101.0, 25),
    ] {
        book.submit_order(side, price, quantity, OrderType::Limit)?;
    }

    // A crossing limit, a market sweep, and an IOC that leaves a residual
    book.submit_order(Side::Buy, 100.5, 6, OrderType::Limit)?;
    book.submit_order(Side::Buy, 0.0, 12, OrderType::Market)?;
    book.submit_order(Side::Sell, 99.5, 15, OrderType::Ioc)?;

    // Cancel the oldest resting bid
    book.cancel_order(1)?;

    println!("{}", serde_json::to_string_pretty(&book.depth(args.levels))?);
    println!("{}", serde_json::to_string_pretty(&book.recent_trades(10))?);

    if let Some(vwap) = book.vwap(Side::Buy, 10) {
        info!(vwap, "sweep cost for 10 units");
    }
    info!(
        orders = book.order_count(),
        trades = book.trade_count(),
        best_bid = ?book.best_bid(),
        best_ask = ?book.best_ask(),
        "session complete"
    );
    Ok(())
}
