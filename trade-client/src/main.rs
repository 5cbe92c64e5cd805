//! CLI frontend for the mock trading service

use clap::{Parser, Subcommand};
use common::model::trade::TradeRequest;
use dotenv::dotenv;
use rust_decimal::Decimal;
use tracing::warn;
use tracing_subscriber::EnvFilter;

use trade_client::store::STORE_FILE;
use trade_client::{render, EndpointMap, Portfolio, PortfolioStore, TradingClient};

/// Trading client for the papertrade mock service
#[derive(Parser, Debug)]
#[clap(author, version, about)]
struct Args {
    /// Service base URL (falls back to PAPERTRADE_API, then localhost)
    #[clap(long)]
    api: Option<String>,

    /// Portfolio store file
    #[clap(long, default_value = STORE_FILE)]
    store: String,

    #[clap(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Fetch current quotes
    Check {
        /// Symbol to ask after
        symbol: Option<String>,
    },
    /// Buy shares
    Buy {
        symbol: String,
        quantity: u32,
        /// Execution price; the service picks one if omitted
        #[clap(long)]
        price: Option<Decimal>,
    },
    /// Sell shares
    Sell {
        symbol: String,
        quantity: u32,
        /// Execution price; the service picks one if omitted
        #[clap(long)]
        price: Option<Decimal>,
    },
    /// Show local holdings
    Portfolio,
}

#[tokio::main]
async fn main() {
    // Load environment variables
    dotenv().ok();

    let args = Args::parse();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let base = args
        .api
        .or_else(|| std::env::var("PAPERTRADE_API").ok())
        .unwrap_or_else(|| "http://127.0.0.1:8080".to_string());

    if let Err(e) = reqwest::Url::parse(&base) {
        let err = trade_client::Error::from(common::Error::ConfigurationError(format!(
            "invalid API base URL {}: {}",
            base, e
        )));
        fail(&err);
    }

    let client = TradingClient::new(EndpointMap::from_base(&base));
    let store = PortfolioStore::new(&args.store);
    let mut portfolio = store.load();

    match args.command {
        Command::Check { symbol } => {
            let symbol = symbol.map(|s| s.to_uppercase());
            match client.check_stock(symbol.as_deref()).await {
                Ok(quotes) => print!("{}", render::render_quotes(&quotes)),
                Err(e) => fail(&e),
            }
        }
        Command::Buy {
            symbol,
            quantity,
            price,
        } => {
            let request = TradeRequest {
                symbol: Some(symbol.to_uppercase()),
                quantity: Some(quantity),
                price,
                action: None,
            };
            match client.buy(&request).await {
                Ok(result) => {
                    portfolio.apply_buy(&result.symbol, result.quantity);
                    persist(&store, &portfolio);
                    print!("{}", render::render_result(&result));
                    print!("{}", render::render_portfolio(&portfolio));
                }
                Err(e) => fail(&e),
            }
        }
        Command::Sell {
            symbol,
            quantity,
            price,
        } => {
            let request = TradeRequest {
                symbol: Some(symbol.to_uppercase()),
                quantity: Some(quantity),
                price,
                action: None,
            };
            match client.sell(&request).await {
                Ok(result) => {
                    portfolio.apply_sell(&result.symbol, result.quantity);
                    persist(&store, &portfolio);
                    print!("{}", render::render_result(&result));
                    print!("{}", render::render_portfolio(&portfolio));
                }
                Err(e) => fail(&e),
            }
        }
        Command::Portfolio => {
            print!("{}", render::render_portfolio(&portfolio));
        }
    }
}

/// Mirror the portfolio to disk; a failed save loses only the local cache
fn persist(store: &PortfolioStore, portfolio: &Portfolio) {
    if let Err(e) = store.save(portfolio) {
        warn!("Failed to save portfolio to {}: {}", store.path().display(), e);
    }
}

fn fail(err: &trade_client::Error) -> ! {
    eprint!("{}", render::render_error(&err.to_string()));
    std::process::exit(1);
}
