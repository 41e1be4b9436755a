//! Timestamp formatting for display and export.
//!
//! Stamps are stored as UTC instants with millisecond precision and are
//! rendered in the local time zone in one of two styles:
//!
//! - **Display**: locale-aware, abbreviated month and 12-hour clock,
//!   e.g. `Jun 20, 2025, 2:03:05 PM (123ms)`. Locales without a day
//!   period marker borrow the English `AM`/`PM`.
//! - **Export**: fixed and sortable, e.g. `2025-06-20 14:03:05.123`
//!
//! Instants enter the crate as RFC 3339 strings and are validated once, in
//! [`Instant::from_str`]. The formatting functions take a validated
//! [`Instant`] and cannot fail.

use crate::{libs::messages::Message, msg_debug};
use chrono::{DateTime, Local, Locale, SecondsFormat, TimeZone, Timelike, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

const DISPLAY_PATTERN: &str = "%b %-d, %Y, %-I:%M:%S";
const EXPORT_PATTERN: &str = "%Y-%m-%d %H:%M:%S";
pub const DEFAULT_LOCALE: &str = "en_US";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum InstantError {
    #[error("'{0}' is not a valid ISO-8601 timestamp")]
    Invalid(String),
}

/// A point in time with millisecond resolution.
///
/// Sub-millisecond precision is dropped on construction so that an instant
/// always survives a round trip through its string form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Instant(DateTime<Utc>);

impl Instant {
    pub fn now() -> Self {
        Self::from_datetime(Utc::now())
    }

    pub fn from_datetime<Tz: TimeZone>(datetime: DateTime<Tz>) -> Self {
        let utc = datetime.with_timezone(&Utc);
        let millis = utc.timestamp_subsec_millis().min(999);
        Self(utc.with_nanosecond(millis * 1_000_000).unwrap_or(utc))
    }

    pub fn from_millis(millis: i64) -> Option<Self> {
        DateTime::from_timestamp_millis(millis).map(Self)
    }

    pub fn as_datetime(&self) -> &DateTime<Utc> {
        &self.0
    }

    pub fn timestamp_millis(&self) -> i64 {
        self.0.timestamp_millis()
    }

    pub fn millisecond(&self) -> u32 {
        self.0.timestamp_subsec_millis().min(999)
    }

    /// Milliseconds from `earlier` to `self`; negative if `earlier` is later.
    pub fn millis_since(&self, earlier: &Instant) -> i64 {
        self.timestamp_millis() - earlier.timestamp_millis()
    }
}

impl FromStr for Instant {
    type Err = InstantError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DateTime::parse_from_rfc3339(s.trim())
            .map(Self::from_datetime)
            .map_err(|_| InstantError::Invalid(s.to_string()))
    }
}

impl fmt::Display for Instant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0.to_rfc3339_opts(SecondsFormat::Millis, true))
    }
}

impl Serialize for Instant {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Instant {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

/// Per-call formatting choices.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormatOptions {
    pub include_milliseconds: bool,
    pub locale: String,
    pub export_mode: bool,
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self {
            include_milliseconds: true,
            locale: DEFAULT_LOCALE.to_string(),
            export_mode: false,
        }
    }
}

/// Resolves a locale tag to a chrono locale.
///
/// Accepts BCP 47 tags (`en-US`) and POSIX names (`en_US.UTF-8`,
/// `de_DE@euro`). Unknown tags fall back to `en_US`.
pub fn resolve_locale(tag: &str) -> Locale {
    let name = tag
        .split(['.', '@'])
        .next()
        .unwrap_or_default()
        .trim()
        .replace('-', "_");

    match Locale::try_from(name.as_str()) {
        Ok(locale) => locale,
        Err(_) => {
            msg_debug!(Message::UnknownLocale(tag.to_string(), DEFAULT_LOCALE.to_string()));
            Locale::en_US
        }
    }
}

/// Renders an instant for on-screen display in the given zone.
pub fn format_display_in<Tz>(instant: &Instant, tz: &Tz, include_milliseconds: bool, locale: &str) -> String
where
    Tz: TimeZone,
    Tz::Offset: fmt::Display,
{
    let local = instant.0.with_timezone(tz);
    let locale = resolve_locale(locale);
    let clock = local.format_localized(DISPLAY_PATTERN, locale).to_string();

    // Locales without a day period would make 2 AM and 2 PM identical.
    let period = local.format_localized("%p", locale).to_string();
    let period = match period.trim() {
        "" => local.format("%p").to_string(),
        marker => marker.to_string(),
    };

    let rendered = format!("{} {}", clock.trim(), period);
    if include_milliseconds {
        format!("{} ({:03}ms)", rendered, instant.millisecond())
    } else {
        rendered
    }
}

/// Renders an instant in the sortable export form in the given zone.
pub fn format_export_in<Tz>(instant: &Instant, tz: &Tz, include_milliseconds: bool) -> String
where
    Tz: TimeZone,
    Tz::Offset: fmt::Display,
{
    let rendered = instant.0.with_timezone(tz).format(EXPORT_PATTERN).to_string();
    if include_milliseconds {
        format!("{}.{:03}", rendered, instant.millisecond())
    } else {
        rendered
    }
}

/// Renders an instant for on-screen display in local time.
///
/// # Examples
///
/// ```rust,no_run
/// use tapstamp::libs::timestamp::{format_display, Instant};
///
/// let instant: Instant = "2025-06-20T14:03:05.123Z".parse().unwrap();
/// // e.g. "Jun 20, 2025, 2:03:05 PM (123ms)" on a UTC machine
/// println!("{}", format_display(&instant, true, "en-US"));
/// ```
pub fn format_display(instant: &Instant, include_milliseconds: bool, locale: &str) -> String {
    format_display_in(instant, &Local, include_milliseconds, locale)
}

/// Renders an instant as `YYYY-MM-DD HH:MM:SS[.sss]` in local time.
pub fn format_export(instant: &Instant, include_milliseconds: bool) -> String {
    format_export_in(instant, &Local, include_milliseconds)
}

/// Renders an instant according to `options`.
pub fn format_with(instant: &Instant, options: &FormatOptions) -> String {
    if options.export_mode {
        format_export(instant, options.include_milliseconds)
    } else {
        format_display(instant, options.include_milliseconds, &options.locale)
    }
}
