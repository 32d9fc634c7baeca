use jiff::civil::{Date, DateTime, Time};
use jiff::tz::TimeZone;
use jiff::{Timestamp, Zoned};
use serde::{Deserialize, Serialize};

use crate::enum_display_fromstr;
use crate::error::NexEventError;

/// Kind of gathering an event is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventType {
    Conference,
    Hackathon,
}

enum_display_fromstr!(EventType, NexEventError::InvalidEventType, {
    Conference => "conference",
    Hackathon => "hackathon",
});

/// Location bucket used by the location filter.
///
/// Every event falls in exactly one: virtual events are `Virtual`, everything
/// else is `India` (the feed only covers in-person events held in India).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum LocationCategory {
    India,
    Virtual,
}

enum_display_fromstr!(LocationCategory, NexEventError::InvalidLocation, {
    India => "India",
    Virtual => "Virtual",
});

impl LocationCategory {
    pub const ALL: [LocationCategory; 2] = [LocationCategory::India, LocationCategory::Virtual];
}

/// A single conference or hackathon as served by the events API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub title: String,
    #[serde(rename = "type")]
    pub event_type: EventType,
    pub location: String,
    #[serde(default)]
    pub is_virtual: bool,
    /// Raw start date; usually `YYYY-MM-DD` but scraped entries may carry free text.
    pub start_date: String,
    #[serde(default)]
    pub submission_deadline: String,
    #[serde(default)]
    pub price: f64,
    #[serde(default)]
    pub currency: String,
    #[serde(default)]
    pub indexing: Vec<String>,
    #[serde(default)]
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
}

impl Event {
    pub fn location_category(&self) -> LocationCategory {
        if self.is_virtual {
            LocationCategory::Virtual
        } else {
            LocationCategory::India
        }
    }

    /// Start date as a civil datetime in UTC, if it parses.
    pub fn start(&self) -> Option<DateTime> {
        parse_event_date(&self.start_date)
    }

    /// Link to the event page, ignoring the `#` placeholder used for unknown links.
    pub fn external_link(&self) -> Option<&str> {
        self.link
            .as_deref()
            .map(str::trim)
            .filter(|l| !l.is_empty() && *l != "#")
    }
}

/// Parse an event date.
///
/// Accepts RFC 3339 timestamps (normalized to UTC), offset-free datetimes and
/// `YYYY-MM-DD` dates (taken as midnight UTC). Month and day may have one
/// digit, as in `2025-03-5`. Anything else is `None`.
pub fn parse_event_date(raw: &str) -> Option<DateTime> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    if let Ok(ts) = raw.parse::<Timestamp>() {
        let zoned: Zoned = ts.to_zoned(TimeZone::UTC);
        return Some(zoned.datetime());
    }
    if let Ok(dt) = raw.parse::<DateTime>() {
        return Some(dt);
    }
    raw.parse::<Date>()
        .ok()
        .or_else(|| parse_loose_date(raw))
        .map(|d| d.to_datetime(Time::midnight()))
}

/// `Y-M-D` with unpadded month or day.
fn parse_loose_date(raw: &str) -> Option<Date> {
    let mut parts = raw.split('-');
    let (year, month, day) = (parts.next()?, parts.next()?, parts.next()?);
    let digits = |s: &str, len: std::ops::RangeInclusive<usize>| {
        len.contains(&s.len()) && s.bytes().all(|b| b.is_ascii_digit())
    };
    let well_formed = digits(year, 4..=4) && digits(month, 1..=2) && digits(day, 1..=2);
    if parts.next().is_some() || !well_formed {
        return None;
    }
    Date::new(year.parse().ok()?, month.parse().ok()?, day.parse().ok()?).ok()
}
