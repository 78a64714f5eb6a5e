//! Screenlab Core — the screening engine behind the terminal UI.
//!
//! This crate contains everything that does not touch the terminal:
//! - Domain types (OHLCV bars, the ticker universe, indicator readings)
//! - The indicator engine (liquidity, relative force, relative force rating)
//! - The histogram range-filter state machine
//! - Filter conjunction and the sortable results-table model

pub mod domain;
pub mod indicators;
pub mod screen;
