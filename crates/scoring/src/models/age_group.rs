use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// Whole years between `dob` and `as_of`, counting a year only once the
/// birthday has been reached.
pub fn calculate_age(dob: NaiveDate, as_of: NaiveDate) -> i32 {
    let mut age = as_of.year() - dob.year();
    if (as_of.month(), as_of.day()) < (dob.month(), dob.day()) {
        age -= 1;
    }
    age
}

/// Five-year age brackets used to select scoring charts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum AgeGroup {
    #[serde(rename = "<25")]
    Under25,
    #[serde(rename = "25-29")]
    Age25To29,
    #[serde(rename = "30-34")]
    Age30To34,
    #[serde(rename = "35-39")]
    Age35To39,
    #[serde(rename = "40-44")]
    Age40To44,
    #[serde(rename = "45-49")]
    Age45To49,
    #[serde(rename = "50-54")]
    Age50To54,
    #[serde(rename = "55-59")]
    Age55To59,
    #[serde(rename = "60+")]
    Age60Plus,
}

impl AgeGroup {
    pub const ALL: [AgeGroup; 9] = [
        Self::Under25,
        Self::Age25To29,
        Self::Age30To34,
        Self::Age35To39,
        Self::Age40To44,
        Self::Age45To49,
        Self::Age50To54,
        Self::Age55To59,
        Self::Age60Plus,
    ];

    pub fn from_age(age: i32) -> Self {
        match age {
            i32::MIN..25 => Self::Under25,
            25..30 => Self::Age25To29,
            30..35 => Self::Age30To34,
            35..40 => Self::Age35To39,
            40..45 => Self::Age40To44,
            45..50 => Self::Age45To49,
            50..55 => Self::Age50To54,
            55..60 => Self::Age55To59,
            60.. => Self::Age60Plus,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Under25 => "<25",
            Self::Age25To29 => "25-29",
            Self::Age30To34 => "30-34",
            Self::Age35To39 => "35-39",
            Self::Age40To44 => "40-44",
            Self::Age45To49 => "45-49",
            Self::Age50To54 => "50-54",
            Self::Age55To59 => "55-59",
            Self::Age60Plus => "60+",
        }
    }
}

impl std::fmt::Display for AgeGroup {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_age_before_and_after_birthday() {
        let dob = date(1998, 6, 15);
        assert_eq!(calculate_age(dob, date(2025, 6, 14)), 26);
        assert_eq!(calculate_age(dob, date(2025, 6, 15)), 27);
        assert_eq!(calculate_age(dob, date(2025, 12, 31)), 27);
    }

    #[test]
    fn test_age_leap_day_birthday() {
        let dob = date(2000, 2, 29);
        assert_eq!(calculate_age(dob, date(2025, 2, 28)), 24);
        assert_eq!(calculate_age(dob, date(2025, 3, 1)), 25);
        assert_eq!(calculate_age(dob, date(2028, 2, 29)), 28);
    }

    #[test]
    fn test_age_group_boundaries_lower_inclusive() {
        assert_eq!(AgeGroup::from_age(17), AgeGroup::Under25);
        assert_eq!(AgeGroup::from_age(24), AgeGroup::Under25);
        assert_eq!(AgeGroup::from_age(25), AgeGroup::Age25To29);
        assert_eq!(AgeGroup::from_age(29), AgeGroup::Age25To29);
        assert_eq!(AgeGroup::from_age(30), AgeGroup::Age30To34);
        assert_eq!(AgeGroup::from_age(44), AgeGroup::Age40To44);
        assert_eq!(AgeGroup::from_age(55), AgeGroup::Age55To59);
        assert_eq!(AgeGroup::from_age(59), AgeGroup::Age55To59);
        assert_eq!(AgeGroup::from_age(60), AgeGroup::Age60Plus);
        assert_eq!(AgeGroup::from_age(87), AgeGroup::Age60Plus);
    }

    #[test]
    fn test_negative_age_is_youngest_bracket() {
        assert_eq!(AgeGroup::from_age(-1), AgeGroup::Under25);
    }

    #[test]
    fn test_brackets_are_ordered() {
        for pair in AgeGroup::ALL.windows(2) {
            assert!(pair[0] < pair[1]);
        }
    }
}
