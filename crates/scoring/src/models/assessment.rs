use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{CardioExercise, CoreExercise, StrengthExercise};

/// Result for one component slot of a self-check.
///
/// When `exempt` is set the raw value carries no meaning and is dropped by
/// the S-code encoder. A non-exempt input without a value has not been
/// tested yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComponentInput<E> {
    pub exercise: E,
    pub raw_value: Option<Decimal>,
    pub exempt: bool,
}

impl<E> ComponentInput<E> {
    pub fn tested(exercise: E, raw_value: impl Into<Decimal>) -> Self {
        Self {
            exercise,
            raw_value: Some(raw_value.into()),
            exempt: false,
        }
    }

    pub fn exempt(exercise: E) -> Self {
        Self {
            exercise,
            raw_value: None,
            exempt: true,
        }
    }

    /// Exercise chosen but no result entered yet
    pub fn pending(exercise: E) -> Self {
        Self {
            exercise,
            raw_value: None,
            exempt: false,
        }
    }
}

/// Body composition keeps both measurements; the waist-to-height ratio is
/// derived from them when scoring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BodyCompositionInput {
    pub height_inches: Option<Decimal>,
    pub waist_inches: Option<Decimal>,
    pub exempt: bool,
}

impl BodyCompositionInput {
    pub fn measured(height_inches: Decimal, waist_inches: Decimal) -> Self {
        Self {
            height_inches: Some(height_inches),
            waist_inches: Some(waist_inches),
            exempt: false,
        }
    }

    pub fn exempt() -> Self {
        Self {
            height_inches: None,
            waist_inches: None,
            exempt: true,
        }
    }
}

/// One self-check. A `None` slot was not attempted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Assessment {
    pub date: NaiveDate,
    pub cardio: Option<ComponentInput<CardioExercise>>,
    pub strength: Option<ComponentInput<StrengthExercise>>,
    pub core: Option<ComponentInput<CoreExercise>>,
    pub body_composition: Option<BodyCompositionInput>,
}

impl Assessment {
    pub fn new(date: NaiveDate) -> Self {
        Self {
            date,
            cardio: None,
            strength: None,
            core: None,
            body_composition: None,
        }
    }

    pub fn with_cardio(mut self, input: ComponentInput<CardioExercise>) -> Self {
        self.cardio = Some(input);
        self
    }

    pub fn with_strength(mut self, input: ComponentInput<StrengthExercise>) -> Self {
        self.strength = Some(input);
        self
    }

    pub fn with_core(mut self, input: ComponentInput<CoreExercise>) -> Self {
        self.core = Some(input);
        self
    }

    pub fn with_body_composition(mut self, input: BodyCompositionInput) -> Self {
        self.body_composition = Some(input);
        self
    }
}
