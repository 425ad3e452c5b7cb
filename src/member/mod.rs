use crate::tools::normalize;
use chrono::NaiveDate;
use derive_getters::Getters;
use serde::Deserialize;
use std::ops::Deref;

pub mod due_date;
pub mod error;
pub mod import_from_file;

pub const PAYMENT_DATE_COLUMN: &str = "fecha_pago";
const DEFAULT_NAME: &str = "Cliente";

/// A gym member, as listed in the members file.
/// Only the payment date is guaranteed, name and email may be missing.
#[derive(Debug, Getters, PartialEq, Eq, Clone)]
pub struct Member {
    payment_date: NaiveDate,
    name: Option<String>,
    email: Option<String>,
}

impl Member {
    pub fn new(payment_date: NaiveDate, name: Option<String>, email: Option<String>) -> Self {
        Self {
            payment_date,
            name,
            email,
        }
    }

    /// Name to greet the member with, stripped of any diacritics.
    pub fn display_name(&self) -> String {
        normalize(self.name.as_deref().unwrap_or(DEFAULT_NAME))
    }
}

/// Every member loaded from a members file.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct Members {
    members: Vec<Member>,
}

impl Deref for Members {
    type Target = Vec<Member>;

    fn deref(&self) -> &Self::Target {
        &self.members
    }
}

impl From<Vec<Member>> for Members {
    fn from(members: Vec<Member>) -> Self {
        Members { members }
    }
}

/// A raw line of the members file.
/// Columns other than the payment date are optional, and so is their content.
#[derive(Debug, Deserialize)]
struct MemberRow {
    #[serde(
        rename = "fecha_pago",
        default,
        deserialize_with = "date_format::deserialize_lenient"
    )]
    payment_date: Option<NaiveDate>,
    #[serde(
        rename = "nombre",
        default,
        deserialize_with = "optional_string_format::deserialize"
    )]
    name: Option<String>,
    #[serde(default, deserialize_with = "optional_string_format::deserialize")]
    email: Option<String>,
}

impl MemberRow {
    /// Lines without a usable payment date are not members we can work with.
    fn into_member(self) -> Option<Member> {
        self.payment_date
            .map(|payment_date| Member::new(payment_date, self.name, self.email))
    }
}

mod date_format {
    use chrono::{DateTime, NaiveDate, NaiveDateTime};
    use serde::{Deserialize, Deserializer};

    /// Month comes before day when both are possible.
    const DATE_FORMATS: [&str; 8] = [
        "%Y-%m-%d", "%Y/%m/%d", "%Y.%m.%d", "%Y%m%d", "%m/%d/%Y", "%d/%m/%Y", "%d-%m-%Y",
        "%d.%m.%Y",
    ];
    const DATE_TIME_FORMATS: [&str; 6] = [
        "%Y-%m-%d %H:%M:%S",
        "%Y-%m-%dT%H:%M:%S",
        "%Y-%m-%d %H:%M:%S%.f",
        "%Y-%m-%dT%H:%M:%S%.f",
        "%Y-%m-%d %H:%M",
        "%Y-%m-%dT%H:%M",
    ];
    /// Timestamps carrying an offset keep the date as written, not the UTC one.
    const DATE_TIME_WITH_OFFSET_FORMATS: [&str; 2] =
        ["%Y-%m-%d %H:%M:%S%.f%:z", "%Y-%m-%d %H:%M:%S%.f%z"];

    /// Never fails: whatever can't be read as a date becomes [None].
    /// Reading an [Option] lets lines shorter than the header through.
    pub fn deserialize_lenient<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = Option::<String>::deserialize(deserializer)?;
        Ok(s.as_deref().and_then(parse_date))
    }

    pub fn parse_date(s: &str) -> Option<NaiveDate> {
        let s = s.trim();
        if s.is_empty() {
            return None;
        }

        DATE_FORMATS
            .iter()
            .find_map(|format| NaiveDate::parse_from_str(s, format).ok())
            .or_else(|| {
                DATE_TIME_FORMATS.iter().find_map(|format| {
                    NaiveDateTime::parse_from_str(s, format)
                        .ok()
                        .map(|date_time| date_time.date())
                })
            })
            .or_else(|| {
                DateTime::parse_from_rfc3339(s)
                    .ok()
                    .map(|date_time| date_time.date_naive())
            })
            .or_else(|| {
                DATE_TIME_WITH_OFFSET_FORMATS.iter().find_map(|format| {
                    DateTime::parse_from_str(s, format)
                        .ok()
                        .map(|date_time| date_time.date_naive())
                })
            })
    }
}

mod optional_string_format {
    use serde::{Deserialize, Deserializer};

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = Option::<String>::deserialize(deserializer)?;
        Ok(s.map(|s| s.trim().to_owned()).filter(|s| !s.is_empty()))
    }
}

#[cfg(test)]
pub mod tests {
    use crate::member::date_format::parse_date;
    use crate::member::Member;
    use chrono::NaiveDate;
    use parameterized::{ide, parameterized};

    ide!();

    fn date(year: i32, month: u32, day: u32) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(year, month, day)
    }

    #[parameterized(
        value = {
            "2025-03-01", "  2025-03-01 ", "2025/03/01", "2025.03.01",
            "03/01/2025", "25/03/2025", "25-03-2025", "25.03.2025",
            "2025-03-01 18:30:00", "2025-03-01T18:30:00", "2025-03-01 18:30:00.250", "2025-03-01 18:30",
            "2025-03-01T18:30:00.250", "2025-03-01T18:30", "20250301",
            "2025-03-01T10:00:00Z", "2025-03-01T23:30:00-05:00", "2025-03-01 10:00:00+02:00",
            "2025-03-01 23:30:00.5-0500",
        },
        expected_result = {
            date(2025, 3, 1), date(2025, 3, 1), date(2025, 3, 1), date(2025, 3, 1),
            date(2025, 3, 1), date(2025, 3, 25), date(2025, 3, 25), date(2025, 3, 25),
            date(2025, 3, 1), date(2025, 3, 1), date(2025, 3, 1), date(2025, 3, 1),
            date(2025, 3, 1), date(2025, 3, 1), date(2025, 3, 1),
            date(2025, 3, 1), date(2025, 3, 1), date(2025, 3, 1),
            date(2025, 3, 1),
        }
    )]
    fn should_parse_date(value: &str, expected_result: Option<NaiveDate>) {
        assert_eq!(expected_result, parse_date(value));
    }

    #[parameterized(
        value = {"", "   ", "not a date", "2025-02-30", "32/13/2025", "nan", "2025", "20251301", "2025-03-01T25:00"}
    )]
    fn should_not_parse_date(value: &str) {
        assert_eq!(None, parse_date(value));
    }

    #[parameterized(
        name = {Some("José Pérez".to_owned()), Some("Ana".to_owned()), None},
        expected_result = {"Jose Perez", "Ana", "Cliente"}
    )]
    fn should_get_display_name(name: Option<String>, expected_result: &str) {
        let member = Member::new(date(2025, 3, 1).unwrap(), name, None);
        assert_eq!(expected_result, member.display_name());
    }
}
