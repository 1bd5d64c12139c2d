use super::format::{SENTINEL, sign_prefix};
use serde::Serialize;
use std::fmt;

const MINUTES_PER_HOUR: u64 = 60;

/// Hour counts from this value up are shown as unbounded, so that any two
/// finite totals can be subtracted without leaving `i64`.
const MAX_HOURS: u64 = 1 << 56;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Span {
    Finite { hours: u64, minutes: u32 },
    /// Infinite or undefined travel time, e.g. a speed of zero.
    Unbounded,
}

/// Signed elapsed time in whole hours and minutes.
///
/// The sign lives in its own flag so a zero delta can still render as
/// `+0min`. `minutes` is always in `0..60`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Duration {
    negative: bool,
    span: Span,
}

impl Duration {
    /// Builds a duration from a fractional minute count.
    ///
    /// The minute part is rounded to the nearest whole minute after splitting
    /// off the hours; a rounded value of 60 carries into the hour.
    pub fn from_minutes(total: f64) -> Self {
        let negative = total < 0.0;
        if !total.is_finite() {
            return Self::unbounded(negative);
        }

        let hours = total.abs() / MINUTES_PER_HOUR as f64;
        let whole_hours = hours.floor();
        if whole_hours >= MAX_HOURS as f64 {
            return Self::unbounded(negative);
        }
        let minutes = ((hours - whole_hours) * MINUTES_PER_HOUR as f64).round() as u64;

        let (hours, minutes) = if minutes == MINUTES_PER_HOUR {
            (whole_hours as u64 + 1, 0)
        } else {
            (whole_hours as u64, minutes)
        };

        Self {
            negative,
            span: Span::Finite {
                hours,
                minutes: minutes as u32,
            },
        }
    }

    fn unbounded(negative: bool) -> Self {
        Self {
            negative,
            span: Span::Unbounded,
        }
    }

    fn from_whole_minutes(total: i64) -> Self {
        let magnitude = total.unsigned_abs();
        if magnitude > i64::MAX as u64 {
            return Self::unbounded(total < 0);
        }
        Self {
            negative: total < 0,
            span: Span::Finite {
                hours: magnitude / MINUTES_PER_HOUR,
                minutes: (magnitude % MINUTES_PER_HOUR) as u32,
            },
        }
    }

    pub fn is_negative(&self) -> bool {
        self.negative
    }

    pub fn is_finite(&self) -> bool {
        matches!(self.span, Span::Finite { .. })
    }

    /// Whole hours, or `None` for an unbounded duration.
    pub fn hours(&self) -> Option<u64> {
        match self.span {
            Span::Finite { hours, .. } => Some(hours),
            Span::Unbounded => None,
        }
    }

    /// Remaining minutes in `0..60`, or `None` for an unbounded duration.
    pub fn minutes(&self) -> Option<u32> {
        match self.span {
            Span::Finite { minutes, .. } => Some(minutes),
            Span::Unbounded => None,
        }
    }

    /// Signed total of the rounded hours and minutes.
    pub fn total_minutes(&self) -> Option<i64> {
        match self.span {
            Span::Finite { hours, minutes } => {
                let total = hours
                    .checked_mul(MINUTES_PER_HOUR)?
                    .checked_add(u64::from(minutes))?;
                let total = i64::try_from(total).ok()?;
                Some(if self.negative { -total } else { total })
            }
            Span::Unbounded => None,
        }
    }

    /// Difference `self - other`, computed in total-minutes space.
    pub fn delta(&self, other: &Duration) -> Duration {
        match (self.total_minutes(), other.total_minutes()) {
            (Some(lhs), Some(rhs)) => match lhs.checked_sub(rhs) {
                Some(total) => Self::from_whole_minutes(total),
                None => Self::unbounded(lhs < rhs),
            },
            (None, Some(_)) => Self::unbounded(self.negative),
            (Some(_), None) => Self::unbounded(!other.negative),
            // inf - inf has no sign unless the operands disagree
            (None, None) => Self::unbounded(self.negative && !other.negative),
        }
    }

    /// Renders as `"{h}h, {m}min"`, dropping the hour segment when it is zero.
    pub fn format(&self, as_delta: bool) -> String {
        match self.span {
            Span::Unbounded => SENTINEL.to_string(),
            Span::Finite { hours, minutes } => {
                let mut out = String::from(sign_prefix(self.negative, as_delta));
                if hours > 0 {
                    out.push_str(&format!("{}h, ", hours));
                }
                out.push_str(&format!("{}min", minutes));
                out
            }
        }
    }
}

impl fmt::Display for Duration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format(false))
    }
}

impl Serialize for Duration {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.format(false))
    }
}

/// Travel time for `distance` at constant `speed`.
///
/// A zero speed is not rejected; it yields an unbounded duration.
pub fn compute_duration(distance: f64, speed: f64) -> Duration {
    Duration::from_minutes(distance / speed * MINUTES_PER_HOUR as f64)
}
