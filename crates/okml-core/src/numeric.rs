//! Rounding helpers shared by scoring and KPI simulation

/// Round half away from zero to `decimals` places
#[inline]
pub(crate) fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}

/// Clamp to [0, 100] and round to one decimal
#[inline]
pub(crate) fn bounded_score(raw: f64) -> f64 {
    round_to(raw.clamp(0.0, 100.0), 1)
}
