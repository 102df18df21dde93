use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::Component;

/// Composite percentage needed to pass, before component minimums apply
pub const PASSING_COMPOSITE: Decimal = Decimal::from_parts(75, 0, 0, false, 0);

/// Inclusive calendar window during which results are informational only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiagnosticWindow {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DiagnosticWindow {
    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start && date <= self.end
    }
}

impl Default for DiagnosticWindow {
    fn default() -> Self {
        // 2026-03-01 ..= 2026-08-31
        Self {
            start: NaiveDate::from_ymd_opt(2026, 3, 1).unwrap_or(NaiveDate::MIN),
            end: NaiveDate::from_ymd_opt(2026, 8, 31).unwrap_or(NaiveDate::MIN),
        }
    }
}

/// Pass lines and calendar rules applied on top of the scoring charts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoringPolicy {
    pub passing_composite: Decimal,
    pub cardio_minimum: Decimal,
    pub strength_minimum: Decimal,
    pub core_minimum: Decimal,
    pub body_composition_minimum: Decimal,
    pub diagnostic_window: DiagnosticWindow,
}

impl ScoringPolicy {
    /// Minimum percentage a tested component must reach on its own
    pub fn minimum_for(&self, component: Component) -> Decimal {
        match component {
            Component::Cardio => self.cardio_minimum,
            Component::Strength => self.strength_minimum,
            Component::Core => self.core_minimum,
            Component::BodyComposition => self.body_composition_minimum,
        }
    }

    pub fn is_diagnostic_period(&self, date: NaiveDate) -> bool {
        self.diagnostic_window.contains(date)
    }
}

impl Default for ScoringPolicy {
    fn default() -> Self {
        Self {
            passing_composite: PASSING_COMPOSITE,
            cardio_minimum: Decimal::from(60),
            strength_minimum: Decimal::from(60),
            core_minimum: Decimal::from(60),
            body_composition_minimum: Decimal::from(50),
            diagnostic_window: DiagnosticWindow::default(),
        }
    }
}

/// Checks `date` against the default diagnostic window.
pub fn is_diagnostic_period(date: NaiveDate) -> bool {
    DiagnosticWindow::default().contains(date)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_diagnostic_window_inclusive() {
        assert!(!is_diagnostic_period(date(2026, 2, 28)));
        assert!(is_diagnostic_period(date(2026, 3, 1)));
        assert!(is_diagnostic_period(date(2026, 6, 15)));
        assert!(is_diagnostic_period(date(2026, 8, 31)));
        assert!(!is_diagnostic_period(date(2026, 9, 1)));
    }

    #[test]
    fn test_default_minimums() {
        let policy = ScoringPolicy::default();
        assert_eq!(policy.minimum_for(Component::Cardio), Decimal::from(60));
        assert_eq!(policy.minimum_for(Component::Strength), Decimal::from(60));
        assert_eq!(policy.minimum_for(Component::Core), Decimal::from(60));
        assert_eq!(
            policy.minimum_for(Component::BodyComposition),
            Decimal::from(50)
        );
        assert_eq!(policy.passing_composite, Decimal::from(75));
    }

    #[test]
    fn test_custom_window() {
        let policy = ScoringPolicy {
            diagnostic_window: DiagnosticWindow {
                start: date(2027, 1, 1),
                end: date(2027, 1, 31),
            },
            ..ScoringPolicy::default()
        };
        assert!(policy.is_diagnostic_period(date(2027, 1, 31)));
        assert!(!policy.is_diagnostic_period(date(2026, 6, 1)));
    }
}
