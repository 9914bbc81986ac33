use time::format_description::well_known::Rfc3339;
use time::macros::format_description;
use time::{Date, OffsetDateTime, PrimitiveDateTime, Time, UtcOffset};
use vodca::{AsRefln, Fromln};

#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Fromln, AsRefln)]
pub struct PublishDate(Date);

impl PublishDate {
    pub fn new(date: impl Into<Date>) -> Self {
        Self(date.into())
    }

    /// Accepts a calendar date (`1965-01-01`) or an RFC 3339 timestamp,
    /// in which case the UTC date of that instant is kept.
    pub fn parse(input: &str) -> Result<Self, time::error::Parse> {
        let calendar = format_description!("[year]-[month]-[day]");
        match Date::parse(input, calendar) {
            Ok(date) => Ok(Self(date)),
            Err(_) => OffsetDateTime::parse(input, &Rfc3339)
                .map(|time| Self(time.to_offset(UtcOffset::UTC).date())),
        }
    }

    /// Midnight UTC of the date in RFC 3339, e.g. `2020-01-01T00:00:00Z`.
    pub fn to_rfc3339(&self) -> Result<String, time::error::Format> {
        PrimitiveDateTime::new(self.0, Time::MIDNIGHT)
            .assume_utc()
            .format(&Rfc3339)
    }
}

#[cfg(test)]
mod test {
    use super::PublishDate;
    use time::macros::date;

    #[test]
    fn parse_calendar_date() {
        let parsed = PublishDate::parse("1965-01-01").unwrap();
        assert_eq!(parsed, PublishDate::new(date!(1965 - 01 - 01)));
    }

    #[test]
    fn parse_timestamp_keeps_date() {
        let parsed = PublishDate::parse("2021-01-02T00:00:00Z").unwrap();
        assert_eq!(parsed, PublishDate::new(date!(2021 - 01 - 02)));
    }

    #[test]
    fn parse_timestamp_uses_utc_date() {
        let late = PublishDate::parse("1965-01-01T23:00:00-05:00").unwrap();
        assert_eq!(late, PublishDate::new(date!(1965 - 01 - 02)));
        let early = PublishDate::parse("1965-01-02T01:00:00+09:00").unwrap();
        assert_eq!(early, PublishDate::new(date!(1965 - 01 - 01)));
    }

    #[test]
    fn reject_garbage() {
        assert!(PublishDate::parse("yesterday").is_err());
    }

    #[test]
    fn format_as_midnight_utc() {
        let formatted = PublishDate::new(date!(2020 - 01 - 01)).to_rfc3339().unwrap();
        assert_eq!(formatted, "2020-01-01T00:00:00Z");
    }
}
