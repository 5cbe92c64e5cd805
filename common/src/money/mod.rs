//! Decimal type utilities for money values

use rust_decimal::Decimal;
pub use rust_decimal_macros::dec;

/// Price type (per-share value)
pub type Price = Decimal;

/// Amount type (typically Price * share count)
pub type Amount = Decimal;

/// Precision helpers for common operations
pub mod precision {
    use super::*;

    /// Money precision (2 decimal places, i.e. cents)
    pub const MONEY_PRECISION: u32 = 2;

    /// Round a value to money precision and force a two-digit scale so it
    /// serializes as e.g. `"200.00"` rather than `"200"`.
    pub fn to_money(value: Decimal) -> Decimal {
        let mut money = value.round_dp(MONEY_PRECISION);
        money.rescale(MONEY_PRECISION);
        money
    }

    /// Total cost of a trade: price * quantity at money precision
    pub fn total_cost(price: Price, quantity: u32) -> Amount {
        to_money(price * Decimal::from(quantity))
    }
}
