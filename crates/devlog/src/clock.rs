//! Clock and locale capabilities used to stamp new entries.
//!
//! Entry headers are display-only, so the exact text depends on the active
//! locale. What stays fixed is the shape: a short date, a space, then the
//! time with seconds.

use std::env;

use chrono::{DateTime, Local, Locale, TimeZone};
use log::debug;

/// Source of the current time.
pub trait Clock {
    /// Returns the current local date and time.
    fn now(&self) -> DateTime<Local>;
}

/// [`Clock`] backed by the system clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Local> {
        Local::now()
    }
}

/// [`Clock`] that always returns the same instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(DateTime<Local>);

impl FixedClock {
    /// Creates a clock frozen at `at`.
    pub fn new(at: DateTime<Local>) -> Self {
        Self(at)
    }

    /// Creates a clock frozen at the given local date and time.
    ///
    /// Returns `None` if the components do not name a valid, unambiguous
    /// local time.
    pub fn at(year: i32, month: u32, day: u32, hour: u32, min: u32, sec: u32) -> Option<Self> {
        Local
            .with_ymd_and_hms(year, month, day, hour, min, sec)
            .single()
            .map(Self)
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Local> {
        self.0
    }
}

/// Locale-aware formatting of entry timestamps.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimestampFormat {
    locale: Locale,
}

impl TimestampFormat {
    /// strftime pattern: localized short date, then localized time with seconds.
    const PATTERN: &'static str = "%x %X";

    /// Creates a format for the given locale.
    pub fn new(locale: Locale) -> Self {
        Self { locale }
    }

    /// Creates a format from a locale name such as `en_US` or `de_DE.UTF-8`.
    ///
    /// Returns `None` if the name does not match a known locale.
    pub fn from_name(name: &str) -> Option<Self> {
        locale_from_name(name).map(Self::new)
    }

    /// Resolves the locale from the process environment.
    ///
    /// `CI=true` forces the POSIX locale so that output is stable on build
    /// machines. Otherwise `LC_ALL`, `LC_TIME` and `LANG` are consulted in
    /// that order; anything unrecognised falls back to POSIX.
    pub fn from_env() -> Self {
        if env::var("CI").is_ok_and(|ci| ci == "true") {
            return Self::default();
        }

        let locale = ["LC_ALL", "LC_TIME", "LANG"]
            .into_iter()
            .filter_map(|var| env::var(var).ok())
            .find(|value| !value.is_empty())
            .and_then(|value| locale_from_name(&value));

        debug!(locale:? = locale; "Resolved timestamp locale");
        locale.map(Self::new).unwrap_or_default()
    }

    /// Returns the locale in use.
    pub fn locale(&self) -> Locale {
        self.locale
    }

    /// Formats `at` as an entry header timestamp.
    pub fn format<Tz>(&self, at: &DateTime<Tz>) -> String
    where
        Tz: TimeZone,
        Tz::Offset: std::fmt::Display,
    {
        at.format_localized(Self::PATTERN, self.locale).to_string()
    }
}

impl Default for TimestampFormat {
    fn default() -> Self {
        Self::new(Locale::POSIX)
    }
}

/// Maps a POSIX locale name (`ll_CC[.encoding][@modifier]`) to a [`Locale`].
fn locale_from_name(name: &str) -> Option<Locale> {
    let base = name
        .split(['.', '@'])
        .next()
        .unwrap_or_default()
        .replace('-', "_");
    match base.as_str() {
        "" => None,
        "C" | "POSIX" => Some(Locale::POSIX),
        other => Locale::try_from(other).ok(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn noon() -> FixedClock {
        FixedClock::at(2024, 3, 9, 14, 5, 7).expect("valid local time")
    }

    #[test]
    fn test_fixed_clock_is_stable() {
        let clock = noon();
        assert_eq!(clock.now(), clock.now());
    }

    #[test]
    fn test_posix_format_has_date_then_time_with_seconds() {
        let stamp = TimestampFormat::default().format(&noon().now());
        assert_eq!(stamp, "03/09/24 14:05:07");
    }

    #[test]
    fn test_us_locale_format() {
        let format = TimestampFormat::from_name("en_US.UTF-8").expect("known locale");
        let stamp = format.format(&noon().now());

        assert!(stamp.starts_with("03/09/2024"), "unexpected date: {stamp}");
        assert!(stamp.contains("02:05:07"), "missing seconds: {stamp}");
    }

    #[test]
    fn test_locale_name_parsing() {
        assert_eq!(locale_from_name("de_DE.UTF-8"), Some(Locale::de_DE));
        assert_eq!(locale_from_name("fr_FR@euro"), Some(Locale::fr_FR));
        assert_eq!(locale_from_name("en-GB"), Some(Locale::en_GB));
        assert_eq!(locale_from_name("C.UTF-8"), Some(Locale::POSIX));
        assert_eq!(locale_from_name("POSIX"), Some(Locale::POSIX));
        assert_eq!(locale_from_name(""), None);
        assert_eq!(locale_from_name("xx_NOPE"), None);
    }

    #[test]
    fn test_unknown_locale_name_is_rejected() {
        assert!(TimestampFormat::from_name("klingon").is_none());
    }
}
