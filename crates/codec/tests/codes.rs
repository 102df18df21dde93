mod common;

use chrono::NaiveDate;
use codec::{
    CodecError, date_from_days, decode_d_code, decode_s_code, encode_d_code, encode_s_code,
    is_valid_s_code,
};
use common::{date, init_tracing};
use proptest::prelude::*;
use rust_decimal::Decimal;
use scoring::{
    Assessment, BodyCompositionInput, CardioExercise, ComponentExercise, ComponentInput,
    CoreExercise, Demographics, Gender, StrengthExercise, score_assessment,
};

#[test]
fn test_self_check_survives_the_code() {
    init_tracing();
    let profile = Demographics::new(date(1998, 1, 10), Gender::Male);
    let assessment = Assessment::new(date(2025, 10, 1))
        .with_cardio(ComponentInput::tested(CardioExercise::Run2Mile, 805))
        .with_strength(ComponentInput::tested(StrengthExercise::Pushups, 45))
        .with_core(ComponentInput::tested(CoreExercise::Situps, 45))
        .with_body_composition(BodyCompositionInput::measured(
            Decimal::from(70),
            Decimal::new(325, 1),
        ));

    let d_code = encode_d_code(&profile).unwrap();
    let s_code = encode_s_code(&assessment).unwrap();

    let profile_back = decode_d_code(&d_code).unwrap();
    let decoded = decode_s_code(&s_code).unwrap();

    assert_eq!(profile_back, profile);
    assert_eq!(decoded.assessment, assessment);
    assert_eq!(decoded.chart_version, 0);
    assert!(!decoded.diagnostic);

    let score = score_assessment(&decoded.assessment, &profile_back);
    assert_eq!(score.composite.composite, Some(Decimal::new(904, 1)));
    assert_eq!(score.composite.pass, Some(true));
}

#[test]
fn test_codes_are_not_interchangeable() {
    let profile = Demographics::new(date(1990, 2, 3), Gender::Female);
    let d_code = encode_d_code(&profile).unwrap();
    let s_code = encode_s_code(&Assessment::new(date(2025, 1, 1))).unwrap();

    assert!(matches!(decode_s_code(&d_code), Err(CodecError::InvalidCode(_))));
    assert!(matches!(decode_d_code(&s_code), Err(CodecError::InvalidCode(_))));
}

#[test]
fn test_newer_prefix_asks_for_update() {
    let code = encode_s_code(&Assessment::new(date(2025, 1, 1)))
        .unwrap()
        .replacen("S2-", "S3-", 1);
    let err = decode_s_code(&code).unwrap_err();
    assert!(matches!(err, CodecError::UnsupportedVersion { .. }));
    assert!(err.to_string().contains("update"));
}

fn component<E>(exercises: Vec<E>) -> impl Strategy<Value = Option<ComponentInput<E>>>
where
    E: ComponentExercise + std::fmt::Debug + 'static,
{
    prop::option::of(
        (prop::sample::select(exercises), 0u32..3000, 0u8..3).prop_map(|(exercise, value, kind)| {
            match kind {
                0 => ComponentInput::tested(exercise, value),
                1 => ComponentInput::exempt(exercise),
                _ => ComponentInput::pending(exercise),
            }
        }),
    )
}

fn body_composition() -> impl Strategy<Value = Option<BodyCompositionInput>> {
    prop_oneof![
        Just(None),
        Just(Some(BodyCompositionInput::exempt())),
        (480i64..=960, 200i64..=700).prop_map(|(height, waist)| {
            Some(BodyCompositionInput::measured(
                Decimal::new(height, 1),
                Decimal::new(waist, 1),
            ))
        }),
    ]
}

fn day(offset: i64) -> NaiveDate {
    date_from_days(offset).unwrap()
}

/// A component with neither a value nor an exemption travels as absent.
fn without_pending<E: ComponentExercise>(
    input: Option<ComponentInput<E>>,
) -> Option<ComponentInput<E>> {
    input.filter(|input| input.exempt || input.raw_value.is_some())
}

prop_compose! {
    fn assessment()(
        offset in 0i64..60_000,
        cardio in component(vec![CardioExercise::Run2Mile, CardioExercise::Hamr, CardioExercise::Walk2Km]),
        strength in component(vec![StrengthExercise::Pushups, StrengthExercise::HandReleasePushups]),
        core in component(vec![CoreExercise::Situps, CoreExercise::CrossLegReverseCrunch, CoreExercise::Plank]),
        body_composition in body_composition(),
    ) -> Assessment {
        Assessment { date: day(offset), cardio, strength, core, body_composition }
    }
}

prop_compose! {
    fn demographics()(offset in -40_000i64..=80_000, male in any::<bool>()) -> Demographics {
        let gender = if male { Gender::Male } else { Gender::Female };
        Demographics::new(day(offset), gender)
    }
}

proptest! {
    #[test]
    fn prop_s_code_round_trip(assessment in assessment()) {
        let code = encode_s_code(&assessment).unwrap();
        let decoded = decode_s_code(&code).unwrap();
        let expected = Assessment {
            cardio: without_pending(assessment.cardio),
            strength: without_pending(assessment.strength),
            core: without_pending(assessment.core),
            ..assessment
        };
        prop_assert_eq!(decoded.assessment, expected);
    }

    #[test]
    fn prop_d_code_round_trip(profile in demographics()) {
        let code = encode_d_code(&profile).unwrap();
        prop_assert_eq!(decode_d_code(&code).unwrap(), profile);
    }

    /// Rescoring a decoded code gives the same result as scoring the original.
    #[test]
    fn prop_rescore_matches(assessment in assessment(), profile in demographics()) {
        let decoded = decode_s_code(&encode_s_code(&assessment).unwrap()).unwrap();
        prop_assert_eq!(
            score_assessment(&decoded.assessment, &profile),
            score_assessment(&assessment, &profile)
        );
    }

    /// Replacing any one character after the prefix never yields a valid code.
    #[test]
    fn prop_single_character_tamper_detected(
        assessment in assessment(),
        position in any::<prop::sample::Index>(),
        replacement in prop::sample::select(
            "ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789-_".chars().collect::<Vec<_>>()
        ),
    ) {
        let code = encode_s_code(&assessment).unwrap();
        let (prefix, body) = code.split_at(3);
        let mut chars: Vec<char> = body.chars().collect();
        let index = position.index(chars.len());
        prop_assume!(chars[index] != replacement);
        chars[index] = replacement;

        let tampered = format!("{}{}", prefix, chars.into_iter().collect::<String>());
        prop_assert!(!is_valid_s_code(&tampered));
    }
}
