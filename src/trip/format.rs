//! Display rules shared by [`Duration`](super::Duration) and
//! [`Consumption`](super::Consumption).

/// Shown in place of a number whose magnitude is not finite.
pub const SENTINEL: &str = "TOO MUCH!";

/// Sign prefix for a displayed value.
///
/// Negative values always carry `-`. Non-negative values carry `+` only when
/// rendered as a delta against another car, zero included.
pub fn sign_prefix(negative: bool, as_delta: bool) -> &'static str {
    if negative {
        "-"
    } else if as_delta {
        "+"
    } else {
        ""
    }
}

/// Renders a non-negative finite value with exactly two decimals.
///
/// A value lying exactly halfway between two cents rounds up, which `{:.2}`
/// alone would send to the even cent. Only multiples of 1/8 with an odd
/// numerator can sit exactly halfway, and for those `value * 100` is exact.
pub fn two_decimals(value: f64) -> String {
    let eighths = value * 8.0;
    if eighths.fract() == 0.0 && eighths % 2.0 != 0.0 {
        return format!("{:.2}", (value * 100.0).ceil() / 100.0);
    }
    format!("{:.2}", value)
}
