//! Raw form input as typed by the user, validated before conversion.
//!
//! Numbers that cannot be read become "not tested" rather than zero; only
//! values that are readable but out of range fail validation.

use std::str::FromStr;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use scoring::{
    Assessment, BodyCompositionInput, Component, ComponentExercise, ComponentInput, Demographics,
    Exercise, Gender, parse_count, parse_inches, parse_time,
};
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use crate::error::{Result, TrackerError};

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Profile tab input
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct ProfileForm {
    #[validate(custom(function = "validate_date"))]
    pub date_of_birth: String,

    #[validate(custom(function = "validate_gender"))]
    pub gender: String,
}

impl ProfileForm {
    pub fn to_demographics(&self) -> Result<Demographics> {
        self.validate()?;
        Ok(Demographics::new(
            parse_date(&self.date_of_birth).ok_or_else(|| invalid_date_error("date_of_birth"))?,
            Gender::from_str(&self.gender).map_err(|_| invalid_gender_error())?,
        ))
    }
}

/// Self-check tab input. A component is attempted when its exercise is set.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct SelfCheckForm {
    #[validate(custom(function = "validate_date"))]
    pub date: String,

    #[validate(custom(function = "validate_cardio_exercise"))]
    pub cardio_exercise: Option<String>,
    pub cardio_value: Option<String>,
    #[serde(default)]
    pub cardio_exempt: bool,

    #[validate(custom(function = "validate_strength_exercise"))]
    pub strength_exercise: Option<String>,
    pub strength_value: Option<String>,
    #[serde(default)]
    pub strength_exempt: bool,

    #[validate(custom(function = "validate_core_exercise"))]
    pub core_exercise: Option<String>,
    pub core_value: Option<String>,
    #[serde(default)]
    pub core_exempt: bool,

    #[validate(custom(function = "validate_height"))]
    pub height_inches: Option<String>,
    #[validate(custom(function = "validate_waist"))]
    pub waist_inches: Option<String>,
    #[serde(default)]
    pub body_composition_exempt: bool,
}

impl SelfCheckForm {
    pub fn to_assessment(&self) -> Result<Assessment> {
        self.validate()?;

        let date = parse_date(&self.date).ok_or_else(|| invalid_date_error("date"))?;

        Ok(Assessment {
            date,
            cardio: component(
                self.cardio_exercise.as_deref(),
                self.cardio_value.as_deref(),
                self.cardio_exempt,
            ),
            strength: component(
                self.strength_exercise.as_deref(),
                self.strength_value.as_deref(),
                self.strength_exempt,
            ),
            core: component(
                self.core_exercise.as_deref(),
                self.core_value.as_deref(),
                self.core_exempt,
            ),
            body_composition: self.body_composition(),
        })
    }

    fn body_composition(&self) -> Option<BodyCompositionInput> {
        if self.body_composition_exempt {
            return Some(BodyCompositionInput::exempt());
        }

        let height = non_empty(self.height_inches.as_deref());
        let waist = non_empty(self.waist_inches.as_deref());
        if height.is_none() && waist.is_none() {
            return None;
        }

        Some(BodyCompositionInput {
            height_inches: height.and_then(parse_inches),
            waist_inches: waist.and_then(parse_inches),
            exempt: false,
        })
    }
}

fn non_empty(text: Option<&str>) -> Option<&str> {
    text.map(str::trim).filter(|t| !t.is_empty())
}

fn parse_date(text: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(text.trim(), DATE_FORMAT).ok()
}

/// Reads a raw value in the unit the exercise is entered in.
fn parse_raw(exercise: Exercise, text: &str) -> Option<Decimal> {
    let value = match exercise {
        Exercise::Run2Mile | Exercise::Walk2Km | Exercise::Plank => parse_time(text),
        _ => parse_count(text),
    };
    value.map(Decimal::from)
}

fn component<E>(exercise: Option<&str>, value: Option<&str>, exempt: bool) -> Option<ComponentInput<E>>
where
    E: ComponentExercise + TryFrom<Exercise>,
{
    let exercise = non_empty(exercise)?;
    let exercise = Exercise::from_str(exercise)
        .ok()
        .and_then(|e| E::try_from(e).ok())?;

    if exempt {
        return Some(ComponentInput::exempt(exercise));
    }

    let raw_value = non_empty(value).and_then(|text| parse_raw(exercise.into(), text));
    Some(ComponentInput {
        exercise,
        raw_value,
        exempt: false,
    })
}

fn invalid_date_error(field: &'static str) -> TrackerError {
    let mut errors = validator::ValidationErrors::new();
    errors.add(field, ValidationError::new("invalid_date"));
    errors.into()
}

fn invalid_gender_error() -> TrackerError {
    let mut errors = validator::ValidationErrors::new();
    errors.add("gender", ValidationError::new("invalid_gender"));
    errors.into()
}

// Validation helpers

fn validate_date(date: &str) -> std::result::Result<(), ValidationError> {
    match parse_date(date) {
        Some(_) => Ok(()),
        None => Err(ValidationError::new("invalid_date")),
    }
}

fn validate_gender(gender: &str) -> std::result::Result<(), ValidationError> {
    Gender::from_str(gender)
        .map(|_| ())
        .map_err(|_| ValidationError::new("invalid_gender"))
}

fn validate_exercise(id: &str, component: Component) -> std::result::Result<(), ValidationError> {
    if id.trim().is_empty() {
        return Ok(());
    }
    match Exercise::from_str(id) {
        Ok(exercise) if exercise.component() == component => Ok(()),
        _ => Err(ValidationError::new("unknown_exercise")),
    }
}

fn validate_cardio_exercise(id: &str) -> std::result::Result<(), ValidationError> {
    validate_exercise(id, Component::Cardio)
}

fn validate_strength_exercise(id: &str) -> std::result::Result<(), ValidationError> {
    validate_exercise(id, Component::Strength)
}

fn validate_core_exercise(id: &str) -> std::result::Result<(), ValidationError> {
    validate_exercise(id, Component::Core)
}

/// Readable measurements must fall within `min..=max` inches.
fn validate_inches(
    text: &str,
    min: i64,
    max: i64,
    code: &'static str,
) -> std::result::Result<(), ValidationError> {
    match parse_inches(text) {
        Some(inches) if inches < Decimal::from(min) || inches > Decimal::from(max) => {
            Err(ValidationError::new(code))
        }
        _ => Ok(()),
    }
}

fn validate_height(text: &str) -> std::result::Result<(), ValidationError> {
    validate_inches(text, 48, 96, "height_out_of_range")
}

fn validate_waist(text: &str) -> std::result::Result<(), ValidationError> {
    validate_inches(text, 20, 70, "waist_out_of_range")
}

#[cfg(test)]
mod tests {
    use super::*;
    use scoring::{CardioExercise, CoreExercise, StrengthExercise};

    fn form(date: &str) -> SelfCheckForm {
        SelfCheckForm {
            date: date.to_string(),
            ..SelfCheckForm::default()
        }
    }

    fn some(text: &str) -> Option<String> {
        Some(text.to_string())
    }

    #[test]
    fn test_profile_form() {
        let form = ProfileForm {
            date_of_birth: "1998-01-10".to_string(),
            gender: "male".to_string(),
        };
        let demographics = form.to_demographics().unwrap();
        assert_eq!(
            demographics.date_of_birth,
            NaiveDate::from_ymd_opt(1998, 1, 10).unwrap()
        );
        assert_eq!(demographics.gender, Gender::Male);
    }

    #[test]
    fn test_profile_form_rejects_bad_fields() {
        let form = ProfileForm {
            date_of_birth: "10/01/1998".to_string(),
            gender: "X".to_string(),
        };
        let Err(TrackerError::Validation(errors)) = form.to_demographics() else {
            panic!("expected validation errors");
        };
        let fields = errors.field_errors();
        assert!(fields.contains_key("date_of_birth"));
        assert!(fields.contains_key("gender"));
    }

    #[test]
    fn test_self_check_form() {
        let form = SelfCheckForm {
            cardio_exercise: some("2mile_run"),
            cardio_value: some("13:25"),
            strength_exercise: some("hrpu"),
            strength_value: some("30"),
            core_exercise: some("plank"),
            core_value: some("2:05"),
            height_inches: some("70"),
            waist_inches: some("32.5"),
            ..form("2025-10-01")
        };

        let assessment = form.to_assessment().unwrap();
        assert_eq!(
            assessment.cardio,
            Some(ComponentInput::tested(CardioExercise::Run2Mile, 805))
        );
        assert_eq!(
            assessment.strength,
            Some(ComponentInput::tested(StrengthExercise::HandReleasePushups, 30))
        );
        assert_eq!(
            assessment.core,
            Some(ComponentInput::tested(CoreExercise::Plank, 125))
        );
        assert_eq!(
            assessment.body_composition,
            Some(BodyCompositionInput::measured(
                Decimal::from(70),
                Decimal::new(325, 1)
            ))
        );
    }

    #[test]
    fn test_unreadable_values_are_not_tested() {
        let form = SelfCheckForm {
            cardio_exercise: some("hamr"),
            cardio_value: some("lots"),
            strength_exercise: some("pushups"),
            strength_value: some(""),
            height_inches: some("tall"),
            ..form("2025-10-01")
        };

        let assessment = form.to_assessment().unwrap();
        assert_eq!(
            assessment.cardio,
            Some(ComponentInput::pending(CardioExercise::Hamr))
        );
        assert_eq!(
            assessment.strength,
            Some(ComponentInput::pending(StrengthExercise::Pushups))
        );
        assert_eq!(assessment.core, None);
        let body = assessment.body_composition.unwrap();
        assert_eq!(body.height_inches, None);
        assert_eq!(body.waist_inches, None);
    }

    #[test]
    fn test_zero_reps_is_a_result() {
        let form = SelfCheckForm {
            strength_exercise: some("pushups"),
            strength_value: some("0"),
            ..form("2025-10-01")
        };
        let assessment = form.to_assessment().unwrap();
        assert_eq!(
            assessment.strength,
            Some(ComponentInput::tested(StrengthExercise::Pushups, 0))
        );
    }

    #[test]
    fn test_exempt_components() {
        let form = SelfCheckForm {
            cardio_exercise: some("2km_walk"),
            cardio_value: some("17:00"),
            cardio_exempt: true,
            height_inches: some("70"),
            body_composition_exempt: true,
            ..form("2025-10-01")
        };
        let assessment = form.to_assessment().unwrap();
        assert_eq!(
            assessment.cardio,
            Some(ComponentInput::exempt(CardioExercise::Walk2Km))
        );
        assert_eq!(
            assessment.body_composition,
            Some(BodyCompositionInput::exempt())
        );
    }

    #[test]
    fn test_exercise_must_match_component() {
        let form = SelfCheckForm {
            cardio_exercise: some("pushups"),
            core_exercise: some("burpees"),
            ..form("2025-10-01")
        };
        let Err(TrackerError::Validation(errors)) = form.to_assessment() else {
            panic!("expected validation errors");
        };
        let fields = errors.field_errors();
        assert!(fields.contains_key("cardio_exercise"));
        assert!(fields.contains_key("core_exercise"));
    }

    #[test]
    fn test_measurement_ranges() {
        let ok = SelfCheckForm {
            height_inches: some("48"),
            waist_inches: some("70"),
            ..form("2025-10-01")
        };
        assert!(ok.validate().is_ok());

        let bad = SelfCheckForm {
            height_inches: some("47.9"),
            waist_inches: some("70.1"),
            ..form("2025-10-01")
        };
        let errors = bad.validate().unwrap_err();
        let fields = errors.field_errors();
        assert!(fields.contains_key("height_inches"));
        assert!(fields.contains_key("waist_inches"));
    }

    #[test]
    fn test_bad_date() {
        assert!(matches!(
            form("yesterday").to_assessment(),
            Err(TrackerError::Validation(_))
        ));
    }
}
