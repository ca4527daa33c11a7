//! Terminal dashboard: index trend, watchlist overview and F&O option chain.
//!
//! # Usage
//!
//! ```sh
//! cargo run --bin nse-scope --features cli -- index --name "NIFTY BANK"
//! cargo run --bin nse-scope --features cli -- watchlist --symbols "RELIANCE, TCS, INFY"
//! cargo run --bin nse-scope --features cli -- chain --symbol NIFTY --strikes 5 --rate 0.065
//! ```
//!
//! Base URLs can be overridden with `NSE_SCOPE_NSE_URL` / `NSE_SCOPE_CHART_URL`.

use chrono::Local;
use clap::{Parser, Subcommand};

use nse_scope::chain::greeks::{RowGreeks, annotate_greeks};
use nse_scope::chain::select_atm_and_filter;
use nse_scope::constants::chain::{DEFAULT_STRIKE_STEP, DEFAULT_WINDOW_STRIKES};
use nse_scope::constants::{CHART_BASE_URL, INDICES, NSE_BASE_URL};
use nse_scope::error::{Result, ScopeError};
use nse_scope::indicators::{Crossover, IndicatorParams, RsiZone};
use nse_scope::source::MarketDataSource;
use nse_scope::types::chart::{Ticker, parse_watchlist};
use nse_scope::types::{ChartInterval, ChartRange};
use nse_scope::watchlist::load_watchlist;
use nse_scope::MarketClient;

#[derive(Parser)]
#[command(author, version, about)]
struct Cli {
    /// NSE base URL
    #[arg(long, env = "NSE_SCOPE_NSE_URL", default_value = NSE_BASE_URL)]
    nse_url: String,

    /// Chart API base URL
    #[arg(long, env = "NSE_SCOPE_CHART_URL", default_value = CHART_BASE_URL)]
    chart_url: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Recent closes of an index
    Index {
        /// Index display name (e.g. "NIFTY 50", "SENSEX")
        #[arg(long, default_value = "NIFTY 50")]
        name: String,

        #[arg(long, default_value = "3mo")]
        range: ChartRange,

        /// Number of most recent closes to print
        #[arg(long, default_value_t = 10)]
        last: usize,
    },

    /// Technical overview of NSE equities
    Watchlist {
        /// Comma-separated NSE symbols
        #[arg(long, default_value = "RELIANCE, TCS, INFY")]
        symbols: String,

        #[arg(long, default_value = "3mo")]
        range: ChartRange,

        #[arg(long, default_value = "1d")]
        interval: ChartInterval,
    },

    /// Option chain around the ATM strike
    Chain {
        /// F&O index symbol (e.g. NIFTY, BANKNIFTY)
        #[arg(long, default_value = "NIFTY")]
        symbol: String,

        /// Expiry (DD-Mon-YYYY); nearest when omitted
        #[arg(long)]
        expiry: Option<String>,

        /// Strikes on each side of ATM
        #[arg(long, default_value_t = DEFAULT_WINDOW_STRIKES, value_parser = clap::value_parser!(u32).range(1..=10))]
        strikes: u32,

        #[arg(long, default_value_t = DEFAULT_STRIKE_STEP)]
        step: f64,

        /// Risk-free rate; prints delta/gamma when given
        #[arg(long)]
        rate: Option<f64>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    let client = MarketClient::with_base_urls(&cli.nse_url, &cli.chart_url)?;

    match cli.command {
        Commands::Index { name, range, last } => index(&client, &name, range, last).await?,
        Commands::Watchlist {
            symbols,
            range,
            interval,
        } => watchlist(&client, &symbols, range, interval).await,
        Commands::Chain {
            symbol,
            expiry,
            strikes,
            step,
            rate,
        } => chain(&client, &symbol, expiry, strikes, step, rate).await?,
    }

    println!(
        "\nLast refreshed: {}",
        Local::now().format("%Y-%m-%d %H:%M:%S")
    );
    Ok(())
}

async fn index(client: &MarketClient, name: &str, range: ChartRange, last: usize) -> Result<()> {
    let ticker = Ticker::index(name).ok_or_else(|| {
        let known: Vec<&str> = INDICES.iter().map(|(n, _)| *n).collect();
        ScopeError::InputValidation(format!("unknown index {name:?}, expected one of {known:?}"))
    })?;
    let series = client
        .fetch_price_series(&ticker, range, ChartInterval::OneDay)
        .await?;

    println!("{name} ({ticker}) trend");
    let start = series.len().saturating_sub(last);
    for bar in &series[start..] {
        println!("  {}  ₹{:.2}", bar.timestamp.format("%Y-%m-%d"), bar.close);
    }
    Ok(())
}

async fn watchlist(client: &MarketClient, symbols: &str, range: ChartRange, interval: ChartInterval) {
    let tickers = parse_watchlist(symbols);
    let entries = load_watchlist(client, &tickers, range, interval, &IndicatorParams::default()).await;

    for entry in entries {
        println!("---\n{} – Technical Overview", entry.ticker);
        let snap = match entry.outcome {
            Ok(s) => s,
            Err(e) => {
                println!("  Error loading {}: {e}", entry.ticker);
                continue;
            }
        };
        println!(
            "  Price ₹{:.2}  High ₹{:.2}  Low ₹{:.2}  Volume {}",
            snap.close, snap.high, snap.low, snap.volume
        );
        match (snap.rsi, snap.rsi_zone) {
            (Some(rsi), Some(RsiZone::Overbought)) => println!("  RSI overbought: {rsi:.2}"),
            (Some(rsi), Some(RsiZone::Oversold)) => println!("  RSI oversold: {rsi:.2}"),
            (Some(rsi), _) => println!("  RSI {rsi:.2}"),
            (None, _) => println!("  RSI n/a (series too short)"),
        }
        let latest = snap.enriched.latest().indicators;
        if let (Some(hi), Some(lo)) = (latest.bollinger_high, latest.bollinger_low) {
            println!("  Bollinger ₹{lo:.2} – ₹{hi:.2}");
        }
        if let Some(c) = snap.crossover {
            println!("  MACD {} crossover on latest bar", crossover_label(c));
        } else if let Some((at, c)) = snap.last_crossover {
            println!("  Last MACD {} crossover {}", crossover_label(c), at.format("%Y-%m-%d"));
        }
    }
}

async fn chain(
    client: &MarketClient,
    symbol: &str,
    expiry: Option<String>,
    strikes: u32,
    step: f64,
    rate: Option<f64>,
) -> Result<()> {
    let expiry = match expiry {
        Some(e) => e,
        None => client
            .fetch_expiry_dates(symbol)
            .await?
            .into_iter()
            .next()
            .ok_or_else(|| ScopeError::InputValidation(format!("no expiries for {symbol}")))?,
    };
    let chain = client.fetch_option_chain(symbol, &expiry).await?;
    let spot = chain.underlying_value().unwrap_or(f64::NAN);
    let filtered = select_atm_and_filter(&chain, spot, strikes, step)?;

    let greeks: Vec<Option<RowGreeks>> = match rate {
        Some(r) => annotate_greeks(&filtered, chain.expiry(), spot, r, Local::now().date_naive())?
            .into_iter()
            .map(Some)
            .collect(),
        None => vec![None; filtered.rows.len()],
    };

    println!(
        "{symbol} {expiry}  spot {spot:.2}  ATM {}  (* ATM, ! IV > 30)",
        filtered.atm_strike
    );
    println!(
        "{:>10} {:>9} {:>7} {:>11} {:>10} | {:>9} {:>7} {:>11} {:>10}",
        "strike", "CE LTP", "CE IV", "CE OI", "CE chgOI", "PE LTP", "PE IV", "PE OI", "PE chgOI"
    );
    for (fr, g) in filtered.rows.iter().zip(greeks) {
        let fmt = |v: Option<f64>, p: usize| v.map_or_else(|| "-".to_owned(), |x| format!("{x:.p$}"));
        let call = fr.row.call.as_ref();
        let put = fr.row.put.as_ref();
        println!(
            "{}{:>9} {:>9} {:>6}{} {:>11} {:>10} | {:>9} {:>6}{} {:>11} {:>10}",
            if fr.is_atm { '*' } else { ' ' },
            fr.row.strike,
            fmt(call.and_then(|q| q.last_price), 2),
            fmt(call.and_then(|q| q.implied_volatility), 1),
            if fr.call_iv_elevated { '!' } else { ' ' },
            fmt(call.and_then(|q| q.open_interest), 0),
            fmt(call.and_then(|q| q.change_in_oi), 0),
            fmt(put.and_then(|q| q.last_price), 2),
            fmt(put.and_then(|q| q.implied_volatility), 1),
            if fr.put_iv_elevated { '!' } else { ' ' },
            fmt(put.and_then(|q| q.open_interest), 0),
            fmt(put.and_then(|q| q.change_in_oi), 0),
        );
        if let Some(g) = g {
            println!(
                "{:>10} Δ {} Γ {} | Δ {} Γ {}",
                "",
                fmt(g.call.map(|x| x.delta), 4),
                fmt(g.call.map(|x| x.gamma), 6),
                fmt(g.put.map(|x| x.delta), 4),
                fmt(g.put.map(|x| x.gamma), 6),
            );
        }
    }
    Ok(())
}

fn crossover_label(c: Crossover) -> &'static str {
    match c {
        Crossover::Bullish => "bullish",
        Crossover::Bearish => "bearish",
    }
}
