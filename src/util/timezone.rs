use chrono::{DateTime, NaiveDate, TimeDelta, TimeZone, Utc};
use chrono_tz::Tz;
use time::{OffsetDateTime, PrimitiveDateTime, UtcOffset};

/// Project an absolute instant into `tz`.
pub fn localized_datetime(time: OffsetDateTime, tz: Tz) -> Option<DateTime<Tz>> {
    let utc = time.to_offset(UtcOffset::UTC);
    let datetime_utc = DateTime::<Utc>::from_timestamp(utc.unix_timestamp(), utc.nanosecond())?;
    Some(tz.from_utc_datetime(&datetime_utc.naive_utc()))
}

/// Interpret an offset-less date-time as wall-clock time in `tz`.
///
/// Ambiguous times resolve to the earlier instant; times inside a DST gap are
/// pushed forward by an hour, the way browsers resolve them.
pub fn wall_clock_datetime(local: PrimitiveDateTime, tz: Tz) -> Option<DateTime<Tz>> {
    let date = NaiveDate::from_ymd_opt(
        local.year(),
        u32::from(u8::from(local.month())),
        u32::from(local.day()),
    )?;
    let naive = date.and_hms_nano_opt(
        u32::from(local.hour()),
        u32::from(local.minute()),
        u32::from(local.second()),
        local.nanosecond(),
    )?;

    tz.from_local_datetime(&naive).earliest().or_else(|| {
        let shifted = naive.checked_add_signed(TimeDelta::hours(1))?;
        tz.from_local_datetime(&shifted).earliest()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Timelike;
    use time::macros::datetime;

    #[test]
    fn instant_is_projected_into_zone() {
        let tz: Tz = "America/New_York".parse().expect("known zone");
        let local = localized_datetime(datetime!(2024-05-01 13:05:09 UTC), tz).expect("in range");
        assert_eq!(local.hour(), 9);
    }

    #[test]
    fn wall_clock_keeps_fields() {
        let tz: Tz = "Europe/Berlin".parse().expect("known zone");
        let local = wall_clock_datetime(datetime!(2024-05-01 09:30:00), tz).expect("in range");
        assert_eq!((local.hour(), local.minute()), (9, 30));
    }

    #[test]
    fn wall_clock_inside_dst_gap_moves_forward() {
        let tz: Tz = "Europe/Berlin".parse().expect("known zone");
        let local = wall_clock_datetime(datetime!(2024-03-31 02:30:00), tz).expect("resolved");
        assert_eq!((local.hour(), local.minute()), (3, 30));
    }
}
