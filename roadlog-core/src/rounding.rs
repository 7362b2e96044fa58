//! Half-to-even rounding helpers shared by the summarizer and the simulator.

/// Round `value` to `places` decimal places, ties to even.
pub(crate) fn round_to(value: f64, places: i32) -> f64 {
    let scale = 10_f64.powi(places);
    (value * scale).round_ties_even() / scale
}

/// Round a non-negative distance to whole miles, ties to even.
///
/// Negative and non-finite inputs collapse to zero.
#[expect(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    reason = "float-to-int casts saturate and the value is rounded and non-negative"
)]
pub(crate) fn round_miles(value: f64) -> u64 {
    if !value.is_finite() || value <= 0.0 {
        return 0;
    }
    value.round_ties_even() as u64
}
