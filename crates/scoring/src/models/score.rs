use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{AgeGroup, Component};

/// Points awarded for a raw value by a single chart lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreLookup {
    pub points: Decimal,
    pub max_points: Decimal,
    pub percentage: Decimal,
}

/// Scored state of one component. Derived on demand, never stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComponentScoreResult {
    pub component: Component,
    pub tested: bool,
    pub exempt: bool,
    pub points: Option<Decimal>,
    pub max_points: Decimal,
    pub percentage: Option<Decimal>,
    /// Minimum percentage this component had to reach, when it was scored
    #[serde(skip_serializing_if = "Option::is_none")]
    pub minimum: Option<Decimal>,
    pub pass: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ComponentScoreResult {
    pub fn exempt(component: Component) -> Self {
        Self {
            component,
            tested: false,
            exempt: true,
            points: Some(Decimal::ZERO),
            max_points: Decimal::ZERO,
            percentage: None,
            minimum: None,
            pass: Some(true),
            error: None,
        }
    }

    pub fn not_tested(component: Component) -> Self {
        Self {
            component,
            tested: false,
            exempt: false,
            points: None,
            max_points: component.weight(),
            percentage: None,
            minimum: None,
            pass: None,
            error: None,
        }
    }

    /// A tested component whose value could not be scored counts as a fail.
    pub fn lookup_failed(component: Component) -> Self {
        Self {
            component,
            tested: true,
            exempt: false,
            points: Some(Decimal::ZERO),
            max_points: component.weight(),
            percentage: Some(Decimal::ZERO),
            minimum: None,
            pass: Some(false),
            error: Some("lookup failed".to_string()),
        }
    }

    /// Neither tested nor exempt
    pub fn is_absent(&self) -> bool {
        !self.exempt && (!self.tested || self.points.is_none())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CompositeScoreResult {
    /// 0-100 with one decimal; `None` until every component is tested or exempt
    pub composite: Option<Decimal>,
    pub pass: Option<bool>,
    pub total_earned: Decimal,
    pub total_possible: Decimal,
    pub partial_assessment: bool,
    pub all_exempt: bool,
    /// Whether the unrounded composite cleared the passing line
    pub composite_pass: Option<bool>,
    pub all_components_pass: bool,
    pub tested_components: Vec<Component>,
    pub exempt_components: Vec<Component>,
    pub failed_components: Vec<Component>,
}

/// Full rescoring of one assessment against a profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssessmentScore {
    pub age: i32,
    pub age_group: AgeGroup,
    /// Taken during the non-scored diagnostic window
    pub diagnostic: bool,
    pub cardio: ComponentScoreResult,
    pub strength: ComponentScoreResult,
    pub core: ComponentScoreResult,
    pub body_composition: ComponentScoreResult,
    pub composite: CompositeScoreResult,
}

impl AssessmentScore {
    pub fn components(&self) -> [&ComponentScoreResult; 4] {
        [
            &self.cardio,
            &self.strength,
            &self.core,
            &self.body_composition,
        ]
    }
}
