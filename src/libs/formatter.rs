//! Interval formatting utilities for user-friendly display.
//!
//! This module converts elapsed time, expressed as a millisecond count, into
//! the segmented form shown next to every recorded stamp and written into the
//! interval column of CSV exports.
//!
//! ## Format Specifications
//!
//! Output is a space separated list of unit segments, largest unit first:
//!
//! - `d` days, `h` hours, `m` minutes, `s` seconds, `ms` milliseconds
//! - Leading units that are zero are omitted
//! - Once a unit is rendered, every lower unit down to seconds follows it,
//!   zero or not (`1h 0m 0s`, never `1h`)
//! - Seconds are always present (`0s` for sub-second intervals)
//! - With milliseconds enabled the `ms` segment is always appended and the
//!   seconds are truncated; with milliseconds disabled the interval is
//!   rounded half-up to the nearest second first, carrying into higher units
//!
//! ### Examples
//! - 0 ms, with milliseconds → "0s 0ms"
//! - 3 661 000 ms, with milliseconds → "1h 1m 1s 0ms"
//! - 59 500 ms, without milliseconds → "1m 0s"
//! - 86 399 500 ms, without milliseconds → "1d 0h 0m 0s"
//!
//! ## Invalid Input
//!
//! A missing value (`None`) or a non-finite float formats as the empty
//! string. That is the "no previous stamp to compare against" case and is
//! never an error.
//!
//! ## Examples
//!
//! ```rust
//! use tapstamp::libs::formatter::{format_interval, IntervalFormatter};
//!
//! assert_eq!(format_interval(90_061_001, true), "1d 1h 1m 1s 1ms");
//! assert_eq!(format_interval(1_500, false), "2s");
//! assert_eq!(format_interval(None::<i64>, true), "");
//!
//! let formatter = IntervalFormatter::new(false);
//! assert_eq!(formatter.format(3_599_500), "1h 0m 0s");
//! ```

use chrono::TimeDelta;

pub const MS_PER_SECOND: u64 = 1000;
pub const MS_PER_MINUTE: u64 = 60 * MS_PER_SECOND;
pub const MS_PER_HOUR: u64 = 60 * MS_PER_MINUTE;
pub const MS_PER_DAY: u64 = 24 * MS_PER_HOUR;

/// Conversion into an optional millisecond count.
///
/// `None` marks an input the formatter must render as the empty string:
/// an absent value, or a float that is NaN or infinite.
pub trait IntoMillis {
    fn into_millis(self) -> Option<i64>;
}

impl IntoMillis for i64 {
    fn into_millis(self) -> Option<i64> {
        Some(self)
    }
}

impl IntoMillis for Option<i64> {
    fn into_millis(self) -> Option<i64> {
        self
    }
}

impl IntoMillis for f64 {
    fn into_millis(self) -> Option<i64> {
        // Fractional milliseconds are floored, saturating at the i64 range.
        self.is_finite().then(|| self.floor() as i64)
    }
}

impl IntoMillis for Option<f64> {
    fn into_millis(self) -> Option<i64> {
        self.and_then(IntoMillis::into_millis)
    }
}

impl IntoMillis for TimeDelta {
    fn into_millis(self) -> Option<i64> {
        Some(self.num_milliseconds())
    }
}

impl IntoMillis for Option<TimeDelta> {
    fn into_millis(self) -> Option<i64> {
        self.map(|delta| delta.num_milliseconds())
    }
}

/// Observer for the intermediate steps of interval formatting.
///
/// Formatting never depends on the observer; it only gets to look. The
/// default methods do nothing, so [`Silent`] is a zero-cost choice and a
/// custom observer only needs to override what it cares about.
pub trait FormatTrace {
    /// Called when the input is absent or not a number.
    fn rejected(&self) {}

    /// Called with the decomposed units before rendering.
    fn decomposed(&self, _total: i64, _parts: &IntervalParts) {}

    /// Called with the final rendered string.
    fn rendered(&self, _output: &str) {}
}

impl<T: FormatTrace + ?Sized> FormatTrace for &T {
    fn rejected(&self) {
        (**self).rejected()
    }

    fn decomposed(&self, total: i64, parts: &IntervalParts) {
        (**self).decomposed(total, parts)
    }

    fn rendered(&self, output: &str) {
        (**self).rendered(output)
    }
}

/// Observer that records nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct Silent;

impl FormatTrace for Silent {}

/// Observer that emits `tracing` events at trace level.
#[derive(Debug, Clone, Copy, Default)]
pub struct Traced;

impl FormatTrace for Traced {
    fn rejected(&self) {
        tracing::trace!("interval input is absent or not a number, rendering empty string");
    }

    fn decomposed(&self, total: i64, parts: &IntervalParts) {
        tracing::trace!(
            total,
            negative = parts.negative,
            days = parts.days,
            hours = parts.hours,
            minutes = parts.minutes,
            seconds = parts.seconds,
            millis = parts.millis,
            "interval decomposed"
        );
    }

    fn rendered(&self, output: &str) {
        tracing::trace!(output, "interval rendered");
    }
}

/// An interval split into its display units.
///
/// The split is greedy from days down to milliseconds. `millis` is always
/// zero when the parts were built with milliseconds excluded, because the
/// magnitude is rounded to whole seconds first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct IntervalParts {
    pub negative: bool,
    pub days: u64,
    pub hours: u64,
    pub minutes: u64,
    pub seconds: u64,
    pub millis: u64,
}

impl IntervalParts {
    /// Decomposes a signed millisecond count.
    ///
    /// The sign is kept aside and the magnitude is split. When
    /// `include_milliseconds` is false the magnitude is rounded half-up to
    /// whole seconds before the split, so 59 500 ms becomes one minute.
    pub fn from_millis(total: i64, include_milliseconds: bool) -> Self {
        let mut remainder = total.unsigned_abs();
        if !include_milliseconds {
            remainder = remainder.saturating_add(MS_PER_SECOND / 2) / MS_PER_SECOND * MS_PER_SECOND;
        }

        let days = remainder / MS_PER_DAY;
        remainder %= MS_PER_DAY;
        let hours = remainder / MS_PER_HOUR;
        remainder %= MS_PER_HOUR;
        let minutes = remainder / MS_PER_MINUTE;
        remainder %= MS_PER_MINUTE;
        let seconds = remainder / MS_PER_SECOND;
        let millis = remainder % MS_PER_SECOND;

        Self {
            negative: total < 0,
            days,
            hours,
            minutes,
            seconds,
            millis,
        }
    }

    /// Renders the parts following the unit-inclusion hierarchy.
    pub fn render(&self, include_milliseconds: bool) -> String {
        let mut segments: Vec<String> = Vec::with_capacity(5);

        let show_days = self.days > 0;
        let show_hours = show_days || self.hours > 0;
        let show_minutes = show_hours || self.minutes > 0;

        if show_days {
            segments.push(format!("{}d", self.days));
        }
        if show_hours {
            segments.push(format!("{}h", self.hours));
        }
        if show_minutes {
            segments.push(format!("{}m", self.minutes));
        }
        segments.push(format!("{}s", self.seconds));
        if include_milliseconds {
            segments.push(format!("{}ms", self.millis));
        }

        let joined = segments.join(" ");
        // A negative interval that rounds to nothing is still "0s".
        if self.negative && !self.is_zero() {
            format!("-{}", joined)
        } else {
            joined
        }
    }

    pub fn is_zero(&self) -> bool {
        self.days == 0 && self.hours == 0 && self.minutes == 0 && self.seconds == 0 && self.millis == 0
    }
}

/// Formats millisecond intervals into segmented strings.
///
/// The formatter is a plain value: it holds the milliseconds choice and an
/// observer, and carries no state between calls. Identical input always
/// produces identical output, from any thread.
///
/// # Examples
///
/// ```rust
/// use tapstamp::libs::formatter::{IntervalFormatter, Traced};
///
/// let formatter = IntervalFormatter::with_tracer(true, Traced);
/// assert_eq!(formatter.format(61_000), "1m 1s 0ms");
/// ```
#[derive(Debug, Clone, Copy)]
pub struct IntervalFormatter<T: FormatTrace = Silent> {
    include_milliseconds: bool,
    tracer: T,
}

impl IntervalFormatter<Silent> {
    pub fn new(include_milliseconds: bool) -> Self {
        Self {
            include_milliseconds,
            tracer: Silent,
        }
    }
}

impl Default for IntervalFormatter<Silent> {
    fn default() -> Self {
        Self::new(true)
    }
}

impl<T: FormatTrace> IntervalFormatter<T> {
    pub fn with_tracer(include_milliseconds: bool, tracer: T) -> Self {
        Self {
            include_milliseconds,
            tracer,
        }
    }

    pub fn include_milliseconds(&self) -> bool {
        self.include_milliseconds
    }

    /// Formats an interval, returning `""` for absent or NaN input.
    pub fn format(&self, total: impl IntoMillis) -> String {
        let Some(total) = total.into_millis() else {
            self.tracer.rejected();
            return String::new();
        };

        let parts = IntervalParts::from_millis(total, self.include_milliseconds);
        self.tracer.decomposed(total, &parts);

        let output = parts.render(self.include_milliseconds);
        self.tracer.rendered(&output);
        output
    }
}

/// Formats an interval with the silent observer.
///
/// # Arguments
///
/// * `total` - Milliseconds as `i64`, `f64`, `TimeDelta`, or an `Option` of those
/// * `include_milliseconds` - Append the `ms` segment instead of rounding to seconds
///
/// # Examples
///
/// ```rust
/// use tapstamp::libs::formatter::format_interval;
///
/// assert_eq!(format_interval(0, true), "0s 0ms");
/// assert_eq!(format_interval(0, false), "0s");
/// assert_eq!(format_interval(f64::NAN, true), "");
/// ```
pub fn format_interval(total: impl IntoMillis, include_milliseconds: bool) -> String {
    IntervalFormatter::new(include_milliseconds).format(total)
}
