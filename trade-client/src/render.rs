//! Plain-text rendering of service responses
//!
//! Pure functions from data to display text: the same value always
//! renders to the same string.

use common::model::quote::StockQuote;
use common::model::trade::TradeResult;

use crate::portfolio::Portfolio;

/// Render the quote table returned by a check call
pub fn render_quotes(quotes: &[StockQuote]) -> String {
    let mut out = String::from("Symbol     Price     Change     Volume\n");
    for quote in quotes {
        out.push_str(&format!(
            "{:<8} ${:>9} {:>8}% {:>10}\n",
            quote.symbol, quote.price, quote.change, quote.volume
        ));
    }
    out
}

/// Render a trade confirmation panel
pub fn render_result(result: &TradeResult) -> String {
    format!(
        "Order {id}\n  {message}\n  Symbol:     {symbol}\n  Quantity:   {quantity}\n  Price:      ${price}\n  Total cost: ${total}\n  Time:       {time}\n",
        id = result.id,
        message = result.message,
        symbol = result.symbol,
        quantity = result.quantity,
        price = result.price,
        total = result.total_cost,
        time = result.timestamp.to_rfc3339(),
    )
}

/// Render an error panel
pub fn render_error(message: &str) -> String {
    format!("Error: {}\n", message)
}

/// Render current local holdings
pub fn render_portfolio(portfolio: &Portfolio) -> String {
    if portfolio.is_empty() {
        return String::from("No holdings\n");
    }
    let mut out = String::from("Holdings:\n");
    for holding in portfolio.holdings() {
        out.push_str(&format!(
            "  {:<8} {:>6}\n",
            holding.symbol, holding.quantity
        ));
    }
    out
}
