//! Fixed symbol listing and synthesis bands
//!
//! Money bands are expressed in cents so draws land exactly on two decimal
//! places.

/// Synthesis bands for one symbol
#[derive(Debug, Clone, Copy)]
pub struct SymbolBand {
    /// Ticker symbol
    pub symbol: &'static str,
    /// Lower bound of the synthesized price, in cents
    pub price_floor_cents: i64,
    /// Width of the price band, in cents
    pub price_spread_cents: i64,
    /// Upper bound of |change|, in hundredths of a percentage point
    pub change_spread_cents: i64,
    /// Lower bound of the synthesized volume
    pub volume_floor: u64,
    /// Width of the volume band
    pub volume_spread: u64,
}

/// The symbols every check response covers
pub const LISTING: [SymbolBand; 5] = [
    SymbolBand {
        symbol: "GOOGL",
        price_floor_cents: 140_00,
        price_spread_cents: 30_00,
        change_spread_cents: 5_00,
        volume_floor: 800_000,
        volume_spread: 500_000,
    },
    SymbolBand {
        symbol: "AAPL",
        price_floor_cents: 170_00,
        price_spread_cents: 20_00,
        change_spread_cents: 4_00,
        volume_floor: 1_500_000,
        volume_spread: 1_000_000,
    },
    SymbolBand {
        symbol: "MSFT",
        price_floor_cents: 370_00,
        price_spread_cents: 25_00,
        change_spread_cents: 3_00,
        volume_floor: 1_200_000,
        volume_spread: 800_000,
    },
    SymbolBand {
        symbol: "TSLA",
        price_floor_cents: 240_00,
        price_spread_cents: 40_00,
        change_spread_cents: 6_00,
        volume_floor: 2_000_000,
        volume_spread: 1_500_000,
    },
    SymbolBand {
        symbol: "AMZN",
        price_floor_cents: 130_00,
        price_spread_cents: 20_00,
        change_spread_cents: 3_50,
        volume_floor: 900_000,
        volume_spread: 600_000,
    },
];

/// Band applied to any symbol outside the listing
pub const FALLBACK_BAND: SymbolBand = SymbolBand {
    symbol: "",
    price_floor_cents: 150_00,
    price_spread_cents: 50_00,
    change_spread_cents: 5_00,
    volume_floor: 100_000,
    volume_spread: 900_000,
};

/// Look up the band for a symbol, falling back for unlisted ones
pub fn band_for(symbol: &str) -> &'static SymbolBand {
    LISTING
        .iter()
        .find(|band| band.symbol == symbol)
        .unwrap_or(&FALLBACK_BAND)
}
