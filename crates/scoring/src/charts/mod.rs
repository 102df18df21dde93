//! Scoring charts.
//!
//! One chart exists for every (gender, age bracket, exercise) combination of
//! the age/gender-specific exercises; body composition uses a single
//! universal waist-to-height chart. Each chart lists rows from the best
//! performance to the worst, so the first row always carries the maximum
//! points for the component.

mod female;
mod male;

use rust_decimal::Decimal;

use crate::models::{AgeGroup, Exercise, Gender};

/// Revision of the chart data, embedded in every S-code.
///
/// 0 = provisional September 2025 charts.
pub const CHART_VERSION: u8 = 0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoreRow {
    pub threshold: Decimal,
    pub points: Decimal,
}

const fn row(threshold: u32, points_tenths: u32) -> ScoreRow {
    ScoreRow {
        threshold: Decimal::from_parts(threshold, 0, 0, false, 0),
        points: Decimal::from_parts(points_tenths, 0, 0, false, 1),
    }
}

const fn ratio_row(threshold_hundredths: u32, points_tenths: u32) -> ScoreRow {
    ScoreRow {
        threshold: Decimal::from_parts(threshold_hundredths, 0, 0, false, 2),
        points: Decimal::from_parts(points_tenths, 0, 0, false, 1),
    }
}

/// A chart slot: either rows to score against or an explicit gap.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Chart {
    Table(&'static [ScoreRow]),
    NotApplicable,
}

impl Chart {
    /// Rows of a usable chart; `None` for gaps and empty tables
    pub fn rows(&self) -> Option<&'static [ScoreRow]> {
        match self {
            Self::Table(rows) if !rows.is_empty() => Some(rows),
            _ => None,
        }
    }
}

/// All age/gender-specific charts for one bracket.
#[derive(Debug, Clone, Copy)]
pub struct BracketCharts {
    pub run_2mile: Chart,
    pub hamr: Chart,
    pub walk_2km: Chart,
    pub pushups: Chart,
    pub hand_release_pushups: Chart,
    pub situps: Chart,
    pub cross_leg_reverse_crunch: Chart,
    pub plank: Chart,
}

impl BracketCharts {
    pub fn get(&self, exercise: Exercise) -> Chart {
        match exercise {
            Exercise::Run2Mile => self.run_2mile,
            Exercise::Hamr => self.hamr,
            Exercise::Walk2Km => self.walk_2km,
            Exercise::Pushups => self.pushups,
            Exercise::HandReleasePushups => self.hand_release_pushups,
            Exercise::Situps => self.situps,
            Exercise::CrossLegReverseCrunch => self.cross_leg_reverse_crunch,
            Exercise::Plank => self.plank,
            Exercise::WaistToHeight => Chart::Table(WAIST_TO_HEIGHT),
        }
    }
}

/// Where the engine finds its charts.
pub trait ChartSource {
    fn chart(&self, exercise: Exercise, gender: Gender, age_group: AgeGroup) -> Chart;
}

/// The charts compiled into this crate.
#[derive(Debug, Clone, Copy, Default)]
pub struct StandardCharts;

impl StandardCharts {
    pub fn bracket(gender: Gender, age_group: AgeGroup) -> &'static BracketCharts {
        match (gender, age_group) {
            (Gender::Male, AgeGroup::Under25) => &male::AGE_U25,
            (Gender::Male, AgeGroup::Age25To29) => &male::AGE_25_29,
            (Gender::Male, AgeGroup::Age30To34) => &male::AGE_30_34,
            (Gender::Male, AgeGroup::Age35To39) => &male::AGE_35_39,
            (Gender::Male, AgeGroup::Age40To44) => &male::AGE_40_44,
            (Gender::Male, AgeGroup::Age45To49) => &male::AGE_45_49,
            (Gender::Male, AgeGroup::Age50To54) => &male::AGE_50_54,
            (Gender::Male, AgeGroup::Age55To59) => &male::AGE_55_59,
            (Gender::Male, AgeGroup::Age60Plus) => &male::AGE_60_PLUS,
            (Gender::Female, AgeGroup::Under25) => &female::AGE_U25,
            (Gender::Female, AgeGroup::Age25To29) => &female::AGE_25_29,
            (Gender::Female, AgeGroup::Age30To34) => &female::AGE_30_34,
            (Gender::Female, AgeGroup::Age35To39) => &female::AGE_35_39,
            (Gender::Female, AgeGroup::Age40To44) => &female::AGE_40_44,
            (Gender::Female, AgeGroup::Age45To49) => &female::AGE_45_49,
            (Gender::Female, AgeGroup::Age50To54) => &female::AGE_50_54,
            (Gender::Female, AgeGroup::Age55To59) => &female::AGE_55_59,
            (Gender::Female, AgeGroup::Age60Plus) => &female::AGE_60_PLUS,
        }
    }
}

impl ChartSource for StandardCharts {
    fn chart(&self, exercise: Exercise, gender: Gender, age_group: AgeGroup) -> Chart {
        Self::bracket(gender, age_group).get(exercise)
    }
}

/// Waist-to-height ratio chart, shared by every gender and age bracket.
/// The 50% body composition minimum sits at 0.53.
pub const WAIST_TO_HEIGHT: &[ScoreRow] = &[
    ratio_row(43, 200), ratio_row(44, 190), ratio_row(45, 180), ratio_row(46, 170),
    ratio_row(47, 160), ratio_row(48, 150), ratio_row(49, 140), ratio_row(50, 130),
    ratio_row(51, 120), ratio_row(52, 110), ratio_row(53, 100), ratio_row(54, 90),
    ratio_row(55, 80), ratio_row(56, 70), ratio_row(57, 60),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_constructors() {
        let r = row(805, 500);
        assert_eq!(r.threshold, Decimal::from(805));
        assert_eq!(r.points, Decimal::new(500, 1));
        assert_eq!(r.points.to_string(), "50.0");

        let r = ratio_row(46, 170);
        assert_eq!(r.threshold, Decimal::new(46, 2));
        assert_eq!(r.points, Decimal::from(17));
    }

    #[test]
    fn test_gap_has_no_rows() {
        assert!(Chart::NotApplicable.rows().is_none());
        assert!(Chart::Table(&[]).rows().is_none());
        assert!(Chart::Table(WAIST_TO_HEIGHT).rows().is_some());
    }

    #[test]
    fn test_waist_to_height_is_universal() {
        let male = StandardCharts.chart(Exercise::WaistToHeight, Gender::Male, AgeGroup::Under25);
        let female =
            StandardCharts.chart(Exercise::WaistToHeight, Gender::Female, AgeGroup::Age60Plus);
        assert_eq!(male, female);
        assert_eq!(male.rows().unwrap()[0].points, Decimal::from(20));
    }

    #[test]
    fn test_brackets_differ_by_gender() {
        let male = StandardCharts.chart(Exercise::Run2Mile, Gender::Male, AgeGroup::Age25To29);
        let female =
            StandardCharts.chart(Exercise::Run2Mile, Gender::Female, AgeGroup::Age25To29);
        assert_ne!(male, female);
    }
}
