use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{AgeGroup, Gender, calculate_age};

/// Profile data carried by a D-code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Demographics {
    pub date_of_birth: NaiveDate,
    pub gender: Gender,
}

impl Demographics {
    pub fn new(date_of_birth: NaiveDate, gender: Gender) -> Self {
        Self {
            date_of_birth,
            gender,
        }
    }

    pub fn age_on(&self, date: NaiveDate) -> i32 {
        calculate_age(self.date_of_birth, date)
    }

    /// Chart bracket that applies to an assessment taken on `date`
    pub fn age_group_on(&self, date: NaiveDate) -> AgeGroup {
        AgeGroup::from_age(self.age_on(date))
    }
}
