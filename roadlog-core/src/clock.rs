//! 12-hour clock rendering for decimal hours.

const MINUTES_PER_DAY: i64 = 24 * 60;

/// Render decimal hours since midnight as `H:MM AM/PM`.
///
/// Minutes are rounded half-to-even; a rounded value of 60 carries into the
/// hour, and the hour wraps at midnight so `23.999` renders as `12:00 AM`.
/// Hour 0 renders as `12`. Non-finite input renders as midnight.
///
/// # Examples
/// ```
/// use roadlog_core::hours_to_hhmm;
///
/// assert_eq!(hours_to_hhmm(0.0), "12:00 AM");
/// assert_eq!(hours_to_hhmm(13.5), "1:30 PM");
/// assert_eq!(hours_to_hhmm(23.999), "12:00 AM");
/// ```
#[must_use]
pub fn hours_to_hhmm(hours: f64) -> String {
    let total = total_minutes(hours).rem_euclid(MINUTES_PER_DAY);
    let (hour, minute) = (total.div_euclid(60), total.rem_euclid(60));
    let period = if hour < 12 { "AM" } else { "PM" };
    let display_hour = match hour {
        0 => 12,
        13.. => hour - 12,
        _ => hour,
    };
    format!("{display_hour}:{minute:02} {period}")
}

#[expect(
    clippy::cast_possible_truncation,
    reason = "float-to-int casts saturate; both operands are already whole numbers"
)]
fn total_minutes(hours: f64) -> i64 {
    if !hours.is_finite() {
        return 0;
    }
    let whole = hours.trunc();
    let minutes = ((hours - whole) * 60.0).round_ties_even();
    (whole as i64) * 60 + minutes as i64
}
