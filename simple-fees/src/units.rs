//! Fee units.
//!
//! Schedules and results are in tinycents, a hundred-millionth of a US cent.
//! The conversions here are for display and approximate assertions; fees are
//! never computed in floating point.

pub const TINYCENTS_PER_CENT: u64 = 100_000_000;
pub const CENTS_PER_USD: u64 = 100;

pub fn tinycents_to_usd(tinycents: u64) -> f64 {
    tinycents as f64 / TINYCENTS_PER_CENT as f64 / CENTS_PER_USD as f64
}
