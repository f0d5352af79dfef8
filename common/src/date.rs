//! Calendar date definitions.

use std::{cmp::Ordering, fmt, marker::PhantomData, str::FromStr};

use derive_more::{Debug, Display, Error};
use time::{format_description::BorrowedFormatItem, macros::format_description};

use crate::ErrorKind;

/// ISO 8601 calendar date format.
const FORMAT: &[BorrowedFormatItem<'static>] =
    format_description!("[year]-[month]-[day]");

/// Untyped calendar date.
pub type Date = DateOf;

/// Calendar date (no time component, no offset).
#[derive(Debug)]
pub struct DateOf<Of: ?Sized = ()> {
    /// Inner representation of the date.
    inner: time::Date,

    /// Type parameter describing the kind of date.
    #[debug(skip)]
    _of: PhantomData<Of>,
}

impl<Of: ?Sized> DateOf<Of> {
    /// Creates a new [`Date`] representing the current day in UTC.
    #[must_use]
    pub fn today() -> Self {
        Self {
            inner: time::OffsetDateTime::now_utc().date(),
            _of: PhantomData,
        }
    }

    /// Creates a new [`Date`] from the provided ISO 8601 string.
    ///
    /// A full date-time input is accepted too: everything starting from a `T`
    /// separator is dropped, keeping the calendar date only.
    ///
    /// # Errors
    ///
    /// If the string is not a valid ISO 8601 date.
    pub fn from_iso(input: &str) -> Result<Self, ParseError> {
        let date = input.split('T').next().unwrap_or(input);
        Ok(Self {
            inner: time::Date::parse(date, FORMAT).map_err(ParseError)?,
            _of: PhantomData,
        })
    }

    /// Coerces one kind of [`Date`] into another.
    #[must_use]
    pub fn coerce<NewOf: ?Sized>(self) -> DateOf<NewOf> {
        DateOf {
            inner: self.inner,
            _of: PhantomData,
        }
    }
}

impl<Of: ?Sized> fmt::Display for DateOf<Of> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.inner, f)
    }
}

impl<Of: ?Sized> FromStr for DateOf<Of> {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_iso(s)
    }
}

/// Error of parsing a [`Date`] from a string.
#[derive(Clone, Copy, Debug, Display, Error)]
#[display("invalid calendar date: {_0}")]
pub struct ParseError(time::error::Parse);

impl ParseError {
    /// Returns the [`ErrorKind`] of this [`ParseError`].
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        ErrorKind::Validation
    }
}

impl<Of: ?Sized> Copy for DateOf<Of> {}
impl<Of: ?Sized> Clone for DateOf<Of> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<Of: ?Sized> Eq for DateOf<Of> {}
impl<Of: ?Sized> PartialEq for DateOf<Of> {
    fn eq(&self, other: &Self) -> bool {
        self.inner == other.inner
    }
}

impl<Of: ?Sized> Ord for DateOf<Of> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.inner.cmp(&other.inner)
    }
}
impl<Of: ?Sized> PartialOrd for DateOf<Of> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<Of: ?Sized> From<DateOf<Of>> for time::Date {
    fn from(date: DateOf<Of>) -> Self {
        date.inner
    }
}

impl<Of: ?Sized> From<time::Date> for DateOf<Of> {
    fn from(inner: time::Date) -> Self {
        Self {
            inner,
            _of: PhantomData,
        }
    }
}

#[cfg(feature = "serde")]
mod serde {
    //! Module providing integration with [`serde`] crate.

    use serde::{de::Error as _, Deserialize, Deserializer, Serializer};

    use super::DateOf;

    impl<Of: ?Sized> serde::Serialize for DateOf<Of> {
        fn serialize<S: Serializer>(
            &self,
            serializer: S,
        ) -> Result<S::Ok, S::Error> {
            serializer.serialize_str(&self.to_string())
        }
    }

    impl<'de, Of: ?Sized> Deserialize<'de> for DateOf<Of> {
        fn deserialize<D: Deserializer<'de>>(
            deserializer: D,
        ) -> Result<Self, D::Error> {
            let s = String::deserialize(deserializer)?;
            Self::from_iso(&s).map_err(D::Error::custom)
        }
    }
}

/// Closed interval of [`Date`]s.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct DateRange {
    /// First [`Date`] of this [`DateRange`].
    pub start: Date,

    /// Last [`Date`] of this [`DateRange`].
    pub end: Date,
}

impl DateRange {
    /// Indicates whether the provided [`Date`] falls into this [`DateRange`].
    ///
    /// Both boundary days are part of the interval.
    #[must_use]
    pub fn contains<Of: ?Sized>(&self, date: DateOf<Of>) -> bool {
        let date = date.coerce();
        self.start <= date && date <= self.end
    }
}

impl FromStr for DateRange {
    type Err = RangeParseError;

    /// Parses a [`DateRange`] from a `start/end` token.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        use RangeParseError as E;

        let (start, end) = s.split_once('/').ok_or(E::MissingSeparator)?;
        Ok(Self {
            start: Date::from_iso(start).map_err(E::InvalidDate)?,
            end: Date::from_iso(end).map_err(E::InvalidDate)?,
        })
    }
}

/// Error of parsing a [`DateRange`] from a `start/end` token.
#[derive(Clone, Copy, Debug, Display, Error)]
pub enum RangeParseError {
    /// Token contains no `/` separator.
    #[display("date range token misses a `/` separator")]
    MissingSeparator,

    /// One of the interval boundaries is not a valid [`Date`].
    #[display("invalid date range boundary: {_0}")]
    InvalidDate(ParseError),
}

impl RangeParseError {
    /// Returns the [`ErrorKind`] of this [`RangeParseError`].
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        ErrorKind::Validation
    }
}

#[cfg(test)]
mod spec {
    use super::{Date, DateRange, RangeParseError};

    fn date(s: &str) -> Date {
        s.parse().unwrap()
    }

    #[test]
    fn parses_iso_date() {
        assert_eq!(date("2024-01-31").to_string(), "2024-01-31");
    }

    #[test]
    fn drops_time_component() {
        assert_eq!(date("2024-01-31T18:23:00Z"), date("2024-01-31"));
    }

    #[test]
    fn rejects_garbage() {
        assert!(Date::from_iso("31/01/2024").is_err());
        assert!(Date::from_iso("not-a-date").is_err());
        assert!(Date::from_iso("").is_err());
    }

    #[test]
    fn range_parses_start_end_token() {
        let range: DateRange = "2023-01-01/2023-01-31".parse().unwrap();
        assert_eq!(range.start, date("2023-01-01"));
        assert_eq!(range.end, date("2023-01-31"));
    }

    #[test]
    fn range_rejects_malformed_tokens() {
        assert!(matches!(
            "bad-token".parse::<DateRange>(),
            Err(RangeParseError::MissingSeparator),
        ));
        assert!(matches!(
            "2023-01-01/huh".parse::<DateRange>(),
            Err(RangeParseError::InvalidDate(_)),
        ));
    }

    #[test]
    fn range_is_closed_on_both_ends() {
        let range: DateRange = "2023-01-01/2023-01-31".parse().unwrap();

        assert!(range.contains(date("2023-01-01")));
        assert!(range.contains(date("2023-01-15")));
        assert!(range.contains(date("2023-01-31")));

        assert!(!range.contains(date("2022-12-31")));
        assert!(!range.contains(date("2023-02-01")));
    }
}
