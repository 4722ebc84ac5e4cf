//! Post records and the timestamp shown next to each one.

use chrono_tz::Tz;
use time::{
    Date, OffsetDateTime, PrimitiveDateTime,
    format_description::well_known::{Iso8601, Rfc3339},
};

use crate::util::timezone;

pub use postboard_api_types::{Post, PostCreateRequest};

/// en-US `toLocaleString()` layout: `5/1/2024, 9:05:09 AM`.
pub const POSTED_ON_FORMAT: &str = "%-m/%-d/%Y, %-I:%M:%S %p";
/// Shown when a post carries no usable timestamp.
pub const INVALID_DATE: &str = "Invalid Date";

/// A parsed `createdAt` value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CreatedAt {
    /// Carries an offset; denotes one instant.
    Instant(OffsetDateTime),
    /// No offset; read as wall-clock time in the display zone.
    WallClock(PrimitiveDateTime),
}

impl CreatedAt {
    pub fn localize(self, tz: Tz) -> Option<chrono::DateTime<Tz>> {
        match self {
            CreatedAt::Instant(instant) => timezone::localized_datetime(instant, tz),
            CreatedAt::WallClock(local) => timezone::wall_clock_datetime(local, tz),
        }
    }
}

pub fn parse_created_at(raw: &str) -> Option<CreatedAt> {
    let raw = raw.trim();
    if let Ok(instant) = OffsetDateTime::parse(raw, &Rfc3339) {
        return Some(CreatedAt::Instant(instant));
    }
    if let Ok(instant) = OffsetDateTime::parse(raw, &Iso8601::DEFAULT) {
        return Some(CreatedAt::Instant(instant));
    }
    if let Ok(local) = PrimitiveDateTime::parse(raw, &Iso8601::DEFAULT) {
        return Some(CreatedAt::WallClock(local));
    }
    // Date-only forms denote UTC midnight.
    Date::parse(raw, &Iso8601::DEFAULT)
        .ok()
        .map(|date| CreatedAt::Instant(date.midnight().assume_utc()))
}

/// Localized creation time of a post, or [`INVALID_DATE`].
pub fn format_posted_on(raw: Option<&str>, tz: Tz) -> String {
    raw.and_then(parse_created_at)
        .and_then(|created_at| created_at.localize(tz))
        .map_or_else(
            || INVALID_DATE.to_string(),
            |local| local.format(POSTED_ON_FORMAT).to_string(),
        )
}
