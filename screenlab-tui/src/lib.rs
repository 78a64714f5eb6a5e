//! Screenlab TUI — interactive terminal stock screener.
//!
//! Panels:
//! 1. Filters — add/remove histogram range filters, drag handles, type bounds
//! 2. Results — sortable table of tickers passing every active filter
//! 3. Help — keyboard shortcuts

pub mod app;
pub mod input;
pub mod sample_data;
pub mod theme;
pub mod ui;

pub use app::AppState;
pub use input::handle_key;
