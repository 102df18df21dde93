use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{Result, ScoringError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Gender {
    #[serde(rename = "M")]
    Male,
    #[serde(rename = "F")]
    Female,
}

impl Gender {
    /// Single-character discriminant used in codes and storage
    pub fn code(&self) -> char {
        match self {
            Self::Male => 'M',
            Self::Female => 'F',
        }
    }

    pub fn from_code(code: char) -> Option<Self> {
        match code {
            'M' => Some(Self::Male),
            'F' => Some(Self::Female),
            _ => None,
        }
    }
}

impl std::str::FromStr for Gender {
    type Err = ScoringError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_uppercase().as_str() {
            "M" | "MALE" | "MEN" => Ok(Self::Male),
            "F" | "FEMALE" | "WOMEN" => Ok(Self::Female),
            _ => Err(ScoringError::UnknownGender(s.to_string())),
        }
    }
}

impl std::fmt::Display for Gender {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// The four evaluation categories of an assessment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Component {
    Cardio,
    Strength,
    Core,
    BodyComposition,
}

impl Component {
    /// Order in which components appear in results and codes
    pub const ALL: [Component; 4] = [
        Self::Cardio,
        Self::Strength,
        Self::Core,
        Self::BodyComposition,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Cardio => "cardio",
            Self::Strength => "strength",
            Self::Core => "core",
            Self::BodyComposition => "body_composition",
        }
    }

    /// Points this component contributes to a full composite (50-15-15-20 model)
    pub fn weight(&self) -> Decimal {
        match self {
            Self::Cardio => Decimal::from(50),
            Self::Strength => Decimal::from(15),
            Self::Core => Decimal::from(15),
            Self::BodyComposition => Decimal::from(20),
        }
    }
}

impl std::str::FromStr for Component {
    type Err = ScoringError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().replace('-', "_").as_str() {
            "cardio" => Ok(Self::Cardio),
            "strength" => Ok(Self::Strength),
            "core" => Ok(Self::Core),
            "body_composition" | "bodycomp" | "body_comp" => Ok(Self::BodyComposition),
            _ => Err(ScoringError::UnknownComponent(s.to_string())),
        }
    }
}

impl std::fmt::Display for Component {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Which direction of raw value earns more points.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Polarity {
    /// Times and ratios: a smaller value is a better performance
    LowerIsBetter,
    /// Reps, shuttles and hold times: a larger value is a better performance
    HigherIsBetter,
}

/// Every test instrument across all components.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Exercise {
    #[serde(rename = "2mile_run")]
    Run2Mile,
    #[serde(rename = "hamr")]
    Hamr,
    #[serde(rename = "2km_walk")]
    Walk2Km,
    #[serde(rename = "pushups")]
    Pushups,
    #[serde(rename = "hrpu")]
    HandReleasePushups,
    #[serde(rename = "situps")]
    Situps,
    #[serde(rename = "clrc")]
    CrossLegReverseCrunch,
    #[serde(rename = "plank")]
    Plank,
    #[serde(rename = "whtr")]
    WaistToHeight,
}

impl Exercise {
    pub const ALL: [Exercise; 9] = [
        Self::Run2Mile,
        Self::Hamr,
        Self::Walk2Km,
        Self::Pushups,
        Self::HandReleasePushups,
        Self::Situps,
        Self::CrossLegReverseCrunch,
        Self::Plank,
        Self::WaistToHeight,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Run2Mile => "2mile_run",
            Self::Hamr => "hamr",
            Self::Walk2Km => "2km_walk",
            Self::Pushups => "pushups",
            Self::HandReleasePushups => "hrpu",
            Self::Situps => "situps",
            Self::CrossLegReverseCrunch => "clrc",
            Self::Plank => "plank",
            Self::WaistToHeight => "whtr",
        }
    }

    pub fn component(&self) -> Component {
        match self {
            Self::Run2Mile | Self::Hamr | Self::Walk2Km => Component::Cardio,
            Self::Pushups | Self::HandReleasePushups => Component::Strength,
            Self::Situps | Self::CrossLegReverseCrunch | Self::Plank => Component::Core,
            Self::WaistToHeight => Component::BodyComposition,
        }
    }

    pub fn polarity(&self) -> Polarity {
        match self {
            Self::Run2Mile | Self::Walk2Km | Self::WaistToHeight => Polarity::LowerIsBetter,
            Self::Hamr
            | Self::Pushups
            | Self::HandReleasePushups
            | Self::Situps
            | Self::CrossLegReverseCrunch
            | Self::Plank => Polarity::HigherIsBetter,
        }
    }
}

impl std::str::FromStr for Exercise {
    type Err = ScoringError;

    fn from_str(s: &str) -> Result<Self> {
        let normalized = s.trim().to_lowercase();
        Self::ALL
            .iter()
            .copied()
            .find(|e| e.as_str() == normalized)
            .ok_or_else(|| ScoringError::UnknownExercise(s.to_string()))
    }
}

impl std::fmt::Display for Exercise {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// An exercise enum scoped to a single component.
///
/// Codes are single characters, unique within a component only; the same
/// letter can mean different exercises in different components.
pub trait ComponentExercise: Copy + Into<Exercise> {
    const COMPONENT: Component;

    /// Exercise assumed when a code is not recognised
    const FALLBACK: Self;

    fn code(self) -> char;

    fn from_code(code: char) -> Option<Self>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CardioExercise {
    #[serde(rename = "2mile_run")]
    Run2Mile,
    #[serde(rename = "hamr")]
    Hamr,
    #[serde(rename = "2km_walk")]
    Walk2Km,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StrengthExercise {
    #[serde(rename = "pushups")]
    Pushups,
    #[serde(rename = "hrpu")]
    HandReleasePushups,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CoreExercise {
    #[serde(rename = "situps")]
    Situps,
    #[serde(rename = "clrc")]
    CrossLegReverseCrunch,
    #[serde(rename = "plank")]
    Plank,
}

impl From<CardioExercise> for Exercise {
    fn from(value: CardioExercise) -> Self {
        match value {
            CardioExercise::Run2Mile => Self::Run2Mile,
            CardioExercise::Hamr => Self::Hamr,
            CardioExercise::Walk2Km => Self::Walk2Km,
        }
    }
}

impl From<StrengthExercise> for Exercise {
    fn from(value: StrengthExercise) -> Self {
        match value {
            StrengthExercise::Pushups => Self::Pushups,
            StrengthExercise::HandReleasePushups => Self::HandReleasePushups,
        }
    }
}

impl From<CoreExercise> for Exercise {
    fn from(value: CoreExercise) -> Self {
        match value {
            CoreExercise::Situps => Self::Situps,
            CoreExercise::CrossLegReverseCrunch => Self::CrossLegReverseCrunch,
            CoreExercise::Plank => Self::Plank,
        }
    }
}

impl TryFrom<Exercise> for CardioExercise {
    type Error = ScoringError;

    fn try_from(value: Exercise) -> Result<Self> {
        match value {
            Exercise::Run2Mile => Ok(Self::Run2Mile),
            Exercise::Hamr => Ok(Self::Hamr),
            Exercise::Walk2Km => Ok(Self::Walk2Km),
            other => Err(wrong_component(other, Component::Cardio)),
        }
    }
}

impl TryFrom<Exercise> for StrengthExercise {
    type Error = ScoringError;

    fn try_from(value: Exercise) -> Result<Self> {
        match value {
            Exercise::Pushups => Ok(Self::Pushups),
            Exercise::HandReleasePushups => Ok(Self::HandReleasePushups),
            other => Err(wrong_component(other, Component::Strength)),
        }
    }
}

impl TryFrom<Exercise> for CoreExercise {
    type Error = ScoringError;

    fn try_from(value: Exercise) -> Result<Self> {
        match value {
            Exercise::Situps => Ok(Self::Situps),
            Exercise::CrossLegReverseCrunch => Ok(Self::CrossLegReverseCrunch),
            Exercise::Plank => Ok(Self::Plank),
            other => Err(wrong_component(other, Component::Core)),
        }
    }
}

fn wrong_component(exercise: Exercise, component: Component) -> ScoringError {
    ScoringError::WrongComponent {
        exercise: exercise.as_str(),
        component: component.as_str(),
    }
}

impl ComponentExercise for CardioExercise {
    const COMPONENT: Component = Component::Cardio;
    const FALLBACK: Self = Self::Run2Mile;

    fn code(self) -> char {
        match self {
            Self::Run2Mile => 'R',
            Self::Hamr => 'H',
            Self::Walk2Km => 'W',
        }
    }

    fn from_code(code: char) -> Option<Self> {
        match code {
            'R' => Some(Self::Run2Mile),
            'H' => Some(Self::Hamr),
            'W' => Some(Self::Walk2Km),
            _ => None,
        }
    }
}

impl ComponentExercise for StrengthExercise {
    const COMPONENT: Component = Component::Strength;
    const FALLBACK: Self = Self::Pushups;

    fn code(self) -> char {
        match self {
            Self::Pushups => 'P',
            Self::HandReleasePushups => 'H',
        }
    }

    fn from_code(code: char) -> Option<Self> {
        match code {
            'P' => Some(Self::Pushups),
            'H' => Some(Self::HandReleasePushups),
            _ => None,
        }
    }
}

impl ComponentExercise for CoreExercise {
    const COMPONENT: Component = Component::Core;
    const FALLBACK: Self = Self::Situps;

    fn code(self) -> char {
        match self {
            Self::Situps => 'S',
            Self::CrossLegReverseCrunch => 'C',
            Self::Plank => 'L',
        }
    }

    fn from_code(code: char) -> Option<Self> {
        match code {
            'S' => Some(Self::Situps),
            'C' => Some(Self::CrossLegReverseCrunch),
            'L' => Some(Self::Plank),
            _ => None,
        }
    }
}
