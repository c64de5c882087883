//! Calendar-day primitives: the clock capability and lenient API dates.
//!
//! Price windows are compared at calendar-day granularity. Time of day never
//! participates, so everything here works in [`NaiveDate`].

use std::fmt;

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, Utc};
use serde::de::{self, Deserializer, IgnoredAny, MapAccess, SeqAccess, Visitor};
use serde::{Deserialize, Serialize, Serializer};

/// Source of "today" for price evaluation.
///
/// Injected wherever a reference date may be omitted so that evaluation is
/// deterministic under test.
pub trait Clock: Send + Sync {
    /// The current calendar date in the marketplace's timezone.
    fn today(&self) -> NaiveDate;
}

/// Wall clock observed at a fixed UTC offset.
#[derive(Debug, Clone, Copy)]
pub struct SystemClock {
    offset: FixedOffset,
}

impl SystemClock {
    #[must_use]
    pub const fn new(offset: FixedOffset) -> Self {
        Self { offset }
    }
}

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Utc::now().with_timezone(&self.offset).date_naive()
    }
}

/// Clock pinned to a single date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}

/// A calendar date as received from the listing API.
///
/// Backend records are not trusted to carry well-formed dates, so
/// deserialization never fails: an absent or null value is [`DateField::Unset`]
/// and anything unparseable is [`DateField::Malformed`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum DateField {
    #[default]
    Unset,
    Malformed,
    Date(NaiveDate),
}

impl DateField {
    /// Parse a date in any of the forms the API emits.
    ///
    /// Accepts `YYYY-MM-DD`, RFC 3339 timestamps, and naive
    /// `YYYY-MM-DDTHH:MM:SS[.fff]` timestamps. Timestamps keep the calendar
    /// date as written, ignoring time of day.
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        let raw = raw.trim();
        if raw.is_empty() {
            return Self::Unset;
        }
        if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
            return Self::Date(date);
        }
        if let Ok(stamp) = DateTime::parse_from_rfc3339(raw) {
            return Self::Date(stamp.date_naive());
        }
        for format in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"] {
            if let Ok(stamp) = NaiveDateTime::parse_from_str(raw, format) {
                return Self::Date(stamp.date());
            }
        }
        Self::Malformed
    }

    /// The parsed date, if there is one.
    #[must_use]
    pub const fn date(self) -> Option<NaiveDate> {
        match self {
            Self::Date(date) => Some(date),
            Self::Unset | Self::Malformed => None,
        }
    }
}

impl From<NaiveDate> for DateField {
    fn from(date: NaiveDate) -> Self {
        Self::Date(date)
    }
}

impl From<Option<NaiveDate>> for DateField {
    fn from(date: Option<NaiveDate>) -> Self {
        date.map_or(Self::Unset, Self::Date)
    }
}

/// True when `on` lies in `[start, end]`, both ends inclusive.
#[must_use]
pub fn within(on: NaiveDate, start: NaiveDate, end: NaiveDate) -> bool {
    start <= on && on <= end
}

impl Serialize for DateField {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Date(date) => serializer.collect_str(date),
            Self::Unset | Self::Malformed => serializer.serialize_none(),
        }
    }
}

impl<'de> Deserialize<'de> for DateField {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(DateFieldVisitor)
    }
}

struct DateFieldVisitor;

impl<'de> Visitor<'de> for DateFieldVisitor {
    type Value = DateField;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a calendar date or null")
    }

    fn visit_str<E: de::Error>(self, value: &str) -> Result<Self::Value, E> {
        Ok(DateField::parse(value))
    }

    fn visit_none<E: de::Error>(self) -> Result<Self::Value, E> {
        Ok(DateField::Unset)
    }

    fn visit_unit<E: de::Error>(self) -> Result<Self::Value, E> {
        Ok(DateField::Unset)
    }

    fn visit_some<D: Deserializer<'de>>(self, deserializer: D) -> Result<Self::Value, D::Error> {
        deserializer.deserialize_any(self)
    }

    fn visit_bool<E: de::Error>(self, _: bool) -> Result<Self::Value, E> {
        Ok(DateField::Malformed)
    }

    fn visit_i64<E: de::Error>(self, _: i64) -> Result<Self::Value, E> {
        Ok(DateField::Malformed)
    }

    fn visit_u64<E: de::Error>(self, _: u64) -> Result<Self::Value, E> {
        Ok(DateField::Malformed)
    }

    fn visit_f64<E: de::Error>(self, _: f64) -> Result<Self::Value, E> {
        Ok(DateField::Malformed)
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Self::Value, A::Error> {
        while seq.next_element::<IgnoredAny>()?.is_some() {}
        Ok(DateField::Malformed)
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
        while map.next_entry::<IgnoredAny, IgnoredAny>()?.is_some() {}
        Ok(DateField::Malformed)
    }
}

/// Deserializers for dates the caller must supply, such as a stay's check-in.
///
/// They accept the same forms as [`DateField::parse`] but reject anything
/// unparseable instead of degrading it.
pub mod required {
    use chrono::NaiveDate;
    use serde::de::{self, Deserializer};
    use serde::Deserialize;

    use super::DateField;

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveDate, D::Error> {
        let raw = String::deserialize(deserializer)?;
        match DateField::parse(&raw) {
            DateField::Date(date) => Ok(date),
            DateField::Unset | DateField::Malformed => Err(invalid(&raw)),
        }
    }

    /// Like [`deserialize`], but null or blank is `None`.
    pub fn deserialize_option<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<NaiveDate>, D::Error> {
        let Some(raw) = Option::<String>::deserialize(deserializer)? else {
            return Ok(None);
        };
        match DateField::parse(&raw) {
            DateField::Date(date) => Ok(Some(date)),
            DateField::Unset => Ok(None),
            DateField::Malformed => Err(invalid(&raw)),
        }
    }

    fn invalid<E: de::Error>(raw: &str) -> E {
        E::custom(format_args!("invalid calendar date `{raw}`"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testkit::domain::date;

    #[test]
    fn parses_plain_dates() {
        assert_eq!(DateField::parse("2025-06-01"), DateField::Date(date(2025, 6, 1)));
    }

    #[test]
    fn parses_timestamps_keeping_the_written_date() {
        assert_eq!(
            DateField::parse("2025-06-01T23:30:00+07:00"),
            DateField::Date(date(2025, 6, 1))
        );
        assert_eq!(
            DateField::parse("2025-06-01T00:00:00Z"),
            DateField::Date(date(2025, 6, 1))
        );
        assert_eq!(
            DateField::parse("2025-06-01T08:15:00"),
            DateField::Date(date(2025, 6, 1))
        );
        assert_eq!(
            DateField::parse("2025-06-01T08:15:00.123"),
            DateField::Date(date(2025, 6, 1))
        );
    }

    #[test]
    fn blank_is_unset_and_garbage_is_malformed() {
        assert_eq!(DateField::parse("  "), DateField::Unset);
        assert_eq!(DateField::parse("next tuesday"), DateField::Malformed);
        assert_eq!(DateField::parse("2025-02-30"), DateField::Malformed);
    }

    #[test]
    fn deserialization_never_fails() {
        #[derive(Deserialize)]
        struct Window {
            #[serde(default)]
            start: DateField,
            #[serde(default)]
            end: DateField,
        }

        let cases = [
            (r#"{}"#, DateField::Unset, DateField::Unset),
            (
                r#"{"start": null, "end": "2025-01-31"}"#,
                DateField::Unset,
                DateField::Date(date(2025, 1, 31)),
            ),
            (
                r#"{"start": 1735689600, "end": true}"#,
                DateField::Malformed,
                DateField::Malformed,
            ),
            (
                r#"{"start": {"y": 2025}, "end": [1, 2]}"#,
                DateField::Malformed,
                DateField::Malformed,
            ),
        ];

        for (json, start, end) in cases {
            let window: Window = serde_json::from_str(json).unwrap();
            assert_eq!(window.start, start, "start of {json}");
            assert_eq!(window.end, end, "end of {json}");
        }
    }

    #[test]
    fn serializes_dates_as_iso_strings() {
        let json = serde_json::to_string(&DateField::Date(date(2025, 6, 1))).unwrap();
        assert_eq!(json, r#""2025-06-01""#);
        assert_eq!(serde_json::to_string(&DateField::Malformed).unwrap(), "null");
    }

    #[test]
    fn within_is_inclusive_on_both_ends() {
        let (start, end) = (date(2025, 1, 1), date(2025, 1, 31));
        assert!(within(start, start, end));
        assert!(within(end, start, end));
        assert!(!within(date(2024, 12, 31), start, end));
        assert!(!within(date(2025, 2, 1), start, end));
        assert!(!within(date(2025, 1, 15), end, start));
    }

    #[test]
    fn fixed_clock_reports_its_date() {
        let clock = FixedClock(date(2025, 6, 1));
        assert_eq!(clock.today(), date(2025, 6, 1));
    }

    #[test]
    fn system_clock_tracks_offset() {
        let east = SystemClock::new(FixedOffset::east_opt(14 * 3600).unwrap());
        let west = SystemClock::new(FixedOffset::west_opt(12 * 3600).unwrap());
        let gap = east.today() - west.today();
        assert!((1..=2).contains(&gap.num_days()));
    }

    #[test]
    fn required_dates_accept_timestamps_and_reject_garbage() {
        #[derive(Debug, Deserialize)]
        struct Booking {
            #[serde(deserialize_with = "required::deserialize")]
            day: NaiveDate,
            #[serde(default, deserialize_with = "required::deserialize_option")]
            until: Option<NaiveDate>,
        }

        let booking: Booking =
            serde_json::from_str(r#"{"day": "2025-01-10T00:00:00Z", "until": ""}"#).unwrap();
        assert_eq!(booking.day, date(2025, 1, 10));
        assert_eq!(booking.until, None);

        let booking: Booking =
            serde_json::from_str(r#"{"day": "2025-01-10", "until": null}"#).unwrap();
        assert_eq!(booking.until, None);

        let booking: Booking = serde_json::from_str(r#"{"day": "2025-01-10"}"#).unwrap();
        assert_eq!(booking.until, None);

        let err = serde_json::from_str::<Booking>(r#"{"day": "soon"}"#).unwrap_err();
        assert!(err.to_string().contains("invalid calendar date `soon`"));
        assert!(serde_json::from_str::<Booking>(r#"{"day": ""}"#).is_err());
        assert!(
            serde_json::from_str::<Booking>(r#"{"day": "2025-01-10", "until": "2025-13-01"}"#)
                .is_err()
        );
    }
}
