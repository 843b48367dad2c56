//! Calendar month value used to position and label aggregates

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// English three-letter month abbreviations, January first
pub const MONTH_ABBREVIATIONS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Abbreviation for a 1-based month number
pub fn month_abbreviation(month: u32) -> Option<&'static str> {
    month
        .checked_sub(1)
        .and_then(|i| MONTH_ABBREVIATIONS.get(i as usize))
        .copied()
}

/// Years a `YearMonth` can hold
const YEAR_RANGE: std::ops::RangeInclusive<i32> = 1..=9999;

/// A calendar month (year 1..=9999, month number 1..=12)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawYearMonth")]
pub struct YearMonth {
    year: i32,
    month: u32,
}

#[derive(Deserialize)]
struct RawYearMonth {
    year: i32,
    month: u32,
}

impl TryFrom<RawYearMonth> for YearMonth {
    type Error = String;

    fn try_from(raw: RawYearMonth) -> Result<Self, Self::Error> {
        YearMonth::new(raw.year, raw.month).ok_or_else(|| {
            format!(
                "expected year within 1..=9999 and month within 1..=12, got {}-{}",
                raw.year, raw.month
            )
        })
    }
}

impl YearMonth {
    /// Returns `None` when `year` is outside 1..=9999 or `month` outside 1..=12
    pub fn new(year: i32, month: u32) -> Option<Self> {
        if YEAR_RANGE.contains(&year) && (1..=12).contains(&month) {
            Some(Self { year, month })
        } else {
            None
        }
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    /// Months elapsed since year 0, January
    pub fn ordinal(&self) -> i64 {
        self.year as i64 * 12 + (self.month as i64 - 1)
    }

    fn from_ordinal(ordinal: i64) -> Option<Self> {
        let year = i32::try_from(ordinal.div_euclid(12)).ok()?;
        Self::new(year, ordinal.rem_euclid(12) as u32 + 1)
    }

    /// Shift by `months` (negative moves backwards). `None` when the result
    /// leaves the supported year range.
    pub fn add_months(&self, months: i64) -> Option<Self> {
        self.ordinal()
            .checked_add(months)
            .and_then(Self::from_ordinal)
    }

    /// Signed number of months from `earlier` to `self`
    pub fn months_since(&self, earlier: &YearMonth) -> i64 {
        self.ordinal() - earlier.ordinal()
    }

    pub fn abbreviation(&self) -> &'static str {
        MONTH_ABBREVIATIONS[(self.month - 1) as usize]
    }

    pub fn first_day(&self) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, self.month, 1)
    }
}

impl fmt::Display for YearMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_out_of_range_month() {
        assert!(YearMonth::new(2024, 0).is_none());
        assert!(YearMonth::new(2024, 13).is_none());
        assert!(YearMonth::new(2024, 12).is_some());
    }

    #[test]
    fn test_add_months_crosses_year_boundary() {
        let nov = YearMonth::new(2023, 11).unwrap();
        assert_eq!(nov.add_months(2), YearMonth::new(2024, 1));
        assert_eq!(nov.add_months(-11), YearMonth::new(2022, 12));
        assert_eq!(nov.add_months(14), YearMonth::new(2025, 1));
    }

    #[test]
    fn test_rejects_out_of_range_year() {
        assert!(YearMonth::new(0, 6).is_none());
        assert!(YearMonth::new(10_000, 1).is_none());
        assert!(YearMonth::new(i32::MAX, 12).is_none());
        assert!(YearMonth::new(9999, 12).is_some());
    }

    #[test]
    fn test_add_months_stops_at_year_range() {
        let last = YearMonth::new(9999, 12).unwrap();
        assert_eq!(last.add_months(1), None);
        assert_eq!(last.add_months(i64::MAX), None);
        let first = YearMonth::new(1, 1).unwrap();
        assert_eq!(first.add_months(-1), None);
        assert_eq!(first.add_months(11), YearMonth::new(1, 12));
    }

    #[test]
    fn test_months_since() {
        let a = YearMonth::new(2022, 6).unwrap();
        let b = YearMonth::new(2024, 3).unwrap();
        assert_eq!(b.months_since(&a), 21);
        assert_eq!(a.months_since(&b), -21);
    }

    #[test]
    fn test_abbreviation_and_display() {
        let ym = YearMonth::new(2024, 9).unwrap();
        assert_eq!(ym.abbreviation(), "Sep");
        assert_eq!(ym.to_string(), "2024-09");
        assert_eq!(month_abbreviation(1), Some("Jan"));
        assert_eq!(month_abbreviation(0), None);
    }

    #[test]
    fn test_first_day() {
        let ym = YearMonth::new(2024, 2).unwrap();
        assert_eq!(ym.first_day(), NaiveDate::from_ymd_opt(2024, 2, 1));
        assert!(YearMonth::new(9999, 12).unwrap().first_day().is_some());
    }

    #[test]
    fn test_deserialize_validates_month() {
        let ok: YearMonth = serde_json::from_str(r#"{"year":2024,"month":5}"#).unwrap();
        assert_eq!(ok.month(), 5);
        let bad = serde_json::from_str::<YearMonth>(r#"{"year":2024,"month":13}"#);
        assert!(bad.is_err());
        let far = serde_json::from_str::<YearMonth>(r#"{"year":2147483647,"month":12}"#);
        assert!(far.is_err());
    }
}
