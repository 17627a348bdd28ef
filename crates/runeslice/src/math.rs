/// Rounds `val` to `precision` decimal places.
///
/// `precision` may be negative to round to tens, hundreds and so on. With a
/// precision of zero halves round away from zero; otherwise halves round
/// towards positive infinity.
///
/// ```rust
/// use runeslice::round;
///
/// assert_eq!(round(2.5, 0), 3.0);
/// assert_eq!(round(-2.5, 0), -3.0);
/// assert_eq!(round(1.25, 1), 1.3);
/// assert_eq!(round(1260.0, -2), 1300.0);
/// ```
#[must_use]
pub fn round(val: f64, precision: i32) -> f64 {
    if precision == 0 {
        return val.round();
    }
    let p = 10_f64.powi(precision);
    if precision < 0 {
        (val * p + 0.5).floor() * 10_f64.powi(-precision)
    } else {
        (val * p + 0.5).floor() / p
    }
}

/// Returns `val` as a percentage of `total`, or `0.0` when `total` is zero.
///
/// ```rust
/// use runeslice::percent;
///
/// assert_eq!(percent(1, 4), 25.0);
/// assert_eq!(percent(3, 0), 0.0);
/// ```
#[must_use]
#[expect(clippy::cast_precision_loss)]
pub fn percent(val: i64, total: i64) -> f64 {
    if total == 0 {
        return 0.0;
    }
    (val as f64 / total as f64) * 100.0
}
