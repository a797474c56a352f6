//! Amount helpers.
//!
//! All internal amounts are integer satoshis. The bitcoin conversions
//! exist for the explorer boundary only, where APIs report fractional
//! BTC values.

/// Satoshis per whole bitcoin.
pub const SATOSHIS_PER_BITCOIN: u64 = 100_000_000;

/// Convert a fractional BTC amount to integer satoshis, rounding to the
/// nearest satoshi.
pub fn bitcoin_to_satoshis(amount: f64) -> u64 {
    (amount * SATOSHIS_PER_BITCOIN as f64).round() as u64
}

/// Convert integer satoshis to a fractional BTC amount.
pub fn satoshis_to_bitcoin(satoshis: u64) -> f64 {
    satoshis as f64 / SATOSHIS_PER_BITCOIN as f64
}

/// Split an amount into two halves: the floor half first, the remainder
/// second. The parts always sum back to the input.
pub fn halve_amount(amount: u64) -> (u64, u64) {
    let first = amount / 2;
    (first, amount - first)
}
