//! Deterministic sample universe for the screener.
//!
//! Generates a ~40-symbol OHLCV universe with a seeded random walk so the
//! three indicators spread across a realistic range. Uses a linear
//! congruential generator so the data is reproducible without pulling in
//! `rand`. 260 sessions per symbol — enough history for the 125-session
//! relative-force SMA.

use chrono::{Datelike, Duration, NaiveDate, Weekday};

use screenlab_core::domain::{Bar, Universe};

const SESSIONS: usize = 260;

/// (symbol, base price, daily drift, daily volatility, base volume)
const SYMBOLS: &[(&str, f64, f64, f64, u64)] = &[
    ("AAPL", 180.0, 0.0006, 0.013, 55_000_000),
    ("MSFT", 390.0, 0.0007, 0.012, 24_000_000),
    ("GOOGL", 140.0, 0.0005, 0.015, 28_000_000),
    ("AMZN", 155.0, 0.0008, 0.017, 40_000_000),
    ("NVDA", 480.0, 0.0015, 0.026, 45_000_000),
    ("META", 340.0, 0.0009, 0.019, 18_000_000),
    ("AVGO", 900.0, 0.0008, 0.016, 2_400_000),
    ("CRM", 250.0, 0.0004, 0.016, 5_600_000),
    ("ADBE", 560.0, 0.0002, 0.015, 2_800_000),
    ("ORCL", 110.0, 0.0004, 0.012, 8_500_000),
    ("JNJ", 160.0, -0.0001, 0.008, 7_200_000),
    ("UNH", 520.0, 0.0003, 0.011, 3_100_000),
    ("PFE", 30.0, -0.0006, 0.013, 38_000_000),
    ("ABBV", 150.0, 0.0002, 0.010, 6_000_000),
    ("MRK", 105.0, 0.0003, 0.009, 9_400_000),
    ("LLY", 580.0, 0.0012, 0.015, 2_700_000),
    ("TMO", 520.0, -0.0002, 0.012, 1_500_000),
    ("ABT", 105.0, 0.0001, 0.010, 5_300_000),
    ("JPM", 155.0, 0.0005, 0.011, 9_100_000),
    ("BAC", 31.0, 0.0001, 0.014, 42_000_000),
    ("WFC", 45.0, 0.0003, 0.013, 21_000_000),
    ("GS", 340.0, 0.0004, 0.013, 2_200_000),
    ("MS", 85.0, 0.0002, 0.013, 7_800_000),
    ("BLK", 700.0, 0.0004, 0.012, 600_000),
    ("SCHW", 62.0, -0.0003, 0.016, 8_900_000),
    ("AXP", 170.0, 0.0005, 0.012, 2_900_000),
    ("V", 250.0, 0.0005, 0.010, 6_300_000),
    ("XOM", 105.0, 0.0002, 0.012, 17_000_000),
    ("CVX", 150.0, -0.0001, 0.011, 8_200_000),
    ("COP", 115.0, 0.0003, 0.014, 6_100_000),
    ("SLB", 50.0, -0.0004, 0.017, 11_000_000),
    ("EOG", 125.0, 0.0002, 0.014, 3_400_000),
    ("WMT", 160.0, 0.0004, 0.008, 7_600_000),
    ("PG", 150.0, 0.0002, 0.007, 6_800_000),
    ("KO", 60.0, 0.0001, 0.007, 14_000_000),
    ("PEP", 170.0, -0.0001, 0.008, 4_900_000),
    ("COST", 560.0, 0.0007, 0.010, 1_900_000),
    ("HD", 330.0, 0.0003, 0.011, 3_400_000),
    ("MCD", 280.0, 0.0002, 0.008, 2_800_000),
    ("NKE", 105.0, -0.0005, 0.015, 7_400_000),
    ("SPY", 450.0, 0.0004, 0.008, 75_000_000),
    ("QQQ", 380.0, 0.0006, 0.011, 48_000_000),
    ("IWM", 185.0, 0.0001, 0.012, 29_000_000),
];

/// Build the full sample universe.
pub fn sample_universe() -> Universe {
    let mut universe = Universe::new();
    for (i, &(symbol, base_price, drift, volatility, base_volume)) in SYMBOLS.iter().enumerate() {
        let seed = 1_000 + i as u64 * 7_919;
        universe.insert(
            symbol,
            build_series(base_price, drift, volatility, base_volume, seed),
        );
    }
    universe
}

/// Random-walk OHLCV series over weekday sessions.
fn build_series(
    base_price: f64,
    drift: f64,
    volatility: f64,
    base_volume: u64,
    seed: u64,
) -> Vec<Bar> {
    let mut bars = Vec::with_capacity(SESSIONS);
    let mut rng_state = seed;
    let mut close = base_price;
    let mut date = NaiveDate::from_ymd_opt(2023, 1, 2).unwrap();

    for _ in 0..SESSIONS {
        while matches!(date.weekday(), Weekday::Sat | Weekday::Sun) {
            date += Duration::days(1);
        }

        let open = close;
        let daily_return = drift + volatility * next_unit(&mut rng_state);
        close = (open * (1.0 + daily_return)).max(base_price * 0.05);

        // Wicks extend past the open/close body by a fraction of the
        // day's volatility.
        let high = open.max(close) * (1.0 + 0.4 * volatility * next_unit(&mut rng_state).abs());
        let low = open.min(close) * (1.0 - 0.4 * volatility * next_unit(&mut rng_state).abs());

        let volume_swing = 1.0 + 0.5 * next_unit(&mut rng_state);
        let volume = ((base_volume as f64) * volume_swing).max(1.0) as u64;

        bars.push(Bar {
            date,
            open,
            high,
            low,
            close,
            volume,
        });
        date += Duration::days(1);
    }

    bars
}

/// Deterministic pseudo-random in [-1, 1]: LCG step, top bits scaled.
fn next_unit(state: &mut u64) -> f64 {
    *state = state
        .wrapping_mul(6364136223846793005)
        .wrapping_add(1442695040888963407);
    ((*state >> 33) as f64) / (u32::MAX as f64) * 2.0 - 1.0
}
