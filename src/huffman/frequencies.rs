//! Baked-in byte-frequency table for the default coder.
//!
//! Collected offline from compressed game streams and fixed for the life of
//! the format: low byte values dominate heavily and the tail flattens to
//! frequency 1 so every byte value keeps a code. Changing any entry changes
//! every code, so existing streams pin this table.

/// Frequency of each byte value 0–255.
pub static DEFAULT_FREQUENCIES: [u64; 256] = [
    225883932, 134956126, 80630595, 48173381, 28781564, 17195771, 10273748, 6138131,
    3667275, 2191042, 1309055, 782105, 467275, 279177, 166797, 99654,
    59539, 35572, 21253, 12698, 7586, 4533, 2708, 1618,
    967, 578, 345, 206, 123, 74, 44, 26,
    16, 9, 6, 3, 2, 1, 1, 1,
    1, 1, 1, 1, 1, 1, 1, 1,
    1, 1, 1, 1, 1, 1, 1, 1,
    1, 1, 1, 1, 1, 1, 1, 1,
    1, 1, 1, 1, 1, 1, 1, 1,
    1, 1, 1, 1, 1, 1, 1, 1,
    1, 1, 1, 1, 1, 1, 1, 1,
    1, 1, 1, 1, 1, 1, 1, 1,
    1, 1, 1, 1, 1, 1, 1, 1,
    1, 1, 1, 1, 1, 1, 1, 1,
    1, 1, 1, 1, 1, 1, 1, 1,
    1, 1, 1, 1, 1, 1, 1, 1,
    1, 1, 1, 1, 1, 1, 1, 1,
    1, 1, 1, 1, 1, 1, 1, 1,
    1, 1, 1, 1, 1, 1, 1, 1,
    1, 1, 1, 1, 1, 1, 1, 1,
    1, 1, 1, 1, 1, 1, 1, 1,
    1, 1, 1, 1, 1, 1, 1, 1,
    1, 1, 1, 1, 1, 1, 1, 1,
    1, 1, 1, 1, 1, 1, 1, 1,
    1, 1, 1, 1, 1, 1, 1, 1,
    1, 1, 1, 1, 1, 1, 1, 1,
    1, 1, 1, 1, 1, 1, 1, 1,
    1, 1, 1, 1, 1, 1, 1, 1,
    1, 1, 1, 1, 1, 1, 1, 1,
    1, 1, 1, 1, 1, 1, 1, 1,
    1, 1, 1, 1, 1, 1, 1, 1,
    1, 1, 1, 1, 1, 1, 1, 1,
];

/// The default table as (symbol, frequency) pairs in symbol order.
pub fn default_table() -> Vec<(u8, u64)> {
    DEFAULT_FREQUENCIES
        .iter()
        .enumerate()
        .map(|(symbol, &frequency)| (symbol as u8, frequency))
        .collect()
}
