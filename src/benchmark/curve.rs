//! Position-to-CTR benchmark curves.
//!
//! Industry-average click-through rate by ranking position, used as the
//! baseline every actual CTR is compared against. Two call sites read the
//! table through different position domains:
//!
//! - **Short range** (page diagnostics): clamps into 1–10, so every position
//!   past the first results page reads as position 10.
//! - **Extended range** (site health): clamps into 1–20 and applies
//!   deep-position floors beyond 20.
//!
//! The two disagree for positions 11 and deeper. Both are kept as separate
//! functions so callers state which domain they score against.

/// Expected CTR for ranks 1 through 20.
pub const CTR_TABLE: [f64; 20] = [
    0.319, 0.246, 0.186, 0.133, 0.095, 0.069, 0.051, 0.038, 0.029, 0.022, // 1-10
    0.017, 0.014, 0.012, 0.010, 0.009, 0.008, 0.007, 0.006, 0.005, 0.004, // 11-20
];

/// Returned for any rank past the end of the table.
pub const TABLE_FLOOR: f64 = 0.003;

/// Upper clamp for the page diagnostic domain.
pub const SHORT_RANGE_MAX: u32 = 10;
/// Upper clamp for the site health domain.
pub const EXTENDED_RANGE_MAX: u32 = 20;

/// Deep-position floors for the extended range: (exclusive lower bound, CTR),
/// checked deepest first.
const DEEP_FLOORS: [(f64, f64); 4] = [(100.0, 0.0001), (50.0, 0.0005), (30.0, 0.001), (20.0, 0.002)];

/// Table lookup by integer rank. Rank 0 reads as rank 1.
pub fn table_ctr(rank: u32) -> f64 {
    let idx = rank.max(1) as usize - 1;
    CTR_TABLE.get(idx).copied().unwrap_or(TABLE_FLOOR)
}

/// Round to the nearest rank and clamp into `1..=max`.
fn clamp_rank(position: f64, max: u32) -> u32 {
    if position.is_nan() {
        return max;
    }
    position.round().clamp(1.0, max as f64) as u32
}

/// Expected CTR in the page diagnostic domain (positions clamped to 1–10).
pub fn short_range_ctr(position: f64) -> f64 {
    table_ctr(clamp_rank(position, SHORT_RANGE_MAX))
}

/// Expected CTR in the site health domain (1–20 via the table, floors beyond).
pub fn extended_range_ctr(position: f64) -> f64 {
    for (bound, ctr) in DEEP_FLOORS {
        if position > bound {
            return ctr;
        }
    }
    table_ctr(clamp_rank(position, EXTENDED_RANGE_MAX))
}

#[cfg(test)]
#[path = "curve_test.rs"]
mod tests;
