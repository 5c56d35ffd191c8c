//! Trade Ledger Demo
//!
//! Run with: `RUST_LOG=debug cargo run --example trade_ledger`
//!
//! Drives the contract through every function against an in-memory ledger,
//! the way a peer would forward client transactions.

use tracing_subscriber::EnvFilter;
use trade_ledger::contract::TradeContract;
use trade_ledger::ledger::MemoryLedger;

#[tokio::main]
async fn main() -> trade_ledger::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    println!("=== Trade Ledger Demo ===\n");

    let ledger = MemoryLedger::new();
    let contract = TradeContract::new();

    let init = contract.init(&ledger);
    println!("init               -> status {}", init.status);

    let transactions: &[&[&str]] = &[
        &["initLedger"],
        &["queryTrade", "TRADE2"],
        &["createTrade", "TRADE5", "06.01.2017", "2.718", "", ""],
        &["changeTradeValues", "TRADE5", "2.719"],
        &["queryTrade", "TRADE5"],
        &["queryTrade", "TRADE404"],
        &["createTrade", "TRADE6", "07.01.2017"],
        &["deleteTrade", "TRADE0"],
        &["queryAllTrades"],
    ];

    for &args in transactions {
        let response = contract.invoke_args(&ledger, args).await;
        if response.is_ok() {
            println!("{:<18} -> ok {}", args[0], response.payload_str());
        } else {
            println!("{:<18} -> error: {}", args[0], response.message);
        }
    }

    // The typed entry point surfaces the error itself
    let listing = contract.query_all_trades(&ledger).await?;
    println!("\n{} bytes listed, {} keys stored", listing.len(), ledger.len());

    Ok(())
}
