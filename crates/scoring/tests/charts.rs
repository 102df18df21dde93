use proptest::prelude::*;
use rust_decimal::Decimal;
use scoring::{
    AgeGroup, ChartSource, Exercise, Gender, Polarity, ScoringEngine, StandardCharts,
};

const GENDERS: [Gender; 2] = [Gender::Male, Gender::Female];

#[test]
fn test_every_combination_has_a_chart() {
    for gender in GENDERS {
        for age_group in AgeGroup::ALL {
            for exercise in Exercise::ALL {
                let chart = StandardCharts.chart(exercise, gender, age_group);
                assert!(
                    chart.rows().is_some(),
                    "missing chart for {exercise} {gender} {age_group}"
                );
            }
        }
    }
}

#[test]
fn test_charts_are_strictly_ordered() {
    for gender in GENDERS {
        for age_group in AgeGroup::ALL {
            for exercise in Exercise::ALL {
                let rows = StandardCharts
                    .chart(exercise, gender, age_group)
                    .rows()
                    .unwrap();

                assert_eq!(
                    rows[0].points,
                    exercise.component().weight(),
                    "{exercise} {gender} {age_group}: first row must carry the component weight"
                );

                for pair in rows.windows(2) {
                    assert!(
                        pair[1].points < pair[0].points,
                        "{exercise} {gender} {age_group}: points must descend"
                    );
                    match exercise.polarity() {
                        Polarity::LowerIsBetter => assert!(
                            pair[1].threshold > pair[0].threshold,
                            "{exercise} {gender} {age_group}: thresholds must ascend"
                        ),
                        Polarity::HigherIsBetter => assert!(
                            pair[1].threshold < pair[0].threshold,
                            "{exercise} {gender} {age_group}: thresholds must descend"
                        ),
                    }
                }
            }
        }
    }
}

#[test]
fn test_every_chart_has_a_passing_row() {
    let engine = ScoringEngine::standard();
    for gender in GENDERS {
        for age_group in AgeGroup::ALL {
            for exercise in Exercise::ALL {
                let component = exercise.component();
                let minimum = engine.policy().minimum_for(component);
                let rows = StandardCharts
                    .chart(exercise, gender, age_group)
                    .rows()
                    .unwrap();
                assert!(
                    rows.iter()
                        .any(|row| row.points * Decimal::ONE_HUNDRED / component.weight()
                            == minimum),
                    "{exercise} {gender} {age_group}: no row at the component minimum"
                );
            }
        }
    }
}

#[test]
fn test_older_brackets_are_not_harder() {
    // The same raw result never earns fewer points in an older bracket
    let engine = ScoringEngine::standard();
    for gender in GENDERS {
        for exercise in Exercise::ALL {
            let rows = StandardCharts
                .chart(exercise, gender, AgeGroup::Under25)
                .rows()
                .unwrap();
            for row in rows {
                let mut previous = Decimal::ZERO;
                for age_group in AgeGroup::ALL {
                    let points = engine
                        .lookup_score(exercise, Some(row.threshold), gender, age_group)
                        .unwrap()
                        .points;
                    assert!(points >= previous, "{exercise} {gender} {age_group}");
                    previous = points;
                }
            }
        }
    }
}

fn any_gender() -> impl Strategy<Value = Gender> {
    prop_oneof![Just(Gender::Male), Just(Gender::Female)]
}

fn any_age_group() -> impl Strategy<Value = AgeGroup> {
    (0..AgeGroup::ALL.len()).prop_map(|i| AgeGroup::ALL[i])
}

fn any_exercise() -> impl Strategy<Value = Exercise> {
    (0..Exercise::ALL.len()).prop_map(|i| Exercise::ALL[i])
}

/// Raw values in a range wide enough to cover every chart, including
/// values off both ends.
fn raw_value(exercise: Exercise) -> BoxedStrategy<Decimal> {
    match exercise {
        Exercise::WaistToHeight => (20u32..90).prop_map(|h| Decimal::new(h.into(), 2)).boxed(),
        Exercise::Run2Mile | Exercise::Walk2Km => {
            (300u32..2400).prop_map(Decimal::from).boxed()
        }
        _ => (0u32..300).prop_map(Decimal::from).boxed(),
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(512))]

    /// Better raw performance never yields fewer points than worse performance.
    #[test]
    fn prop_lookup_is_monotonic(
        (exercise, a, b) in any_exercise().prop_flat_map(|e| (Just(e), raw_value(e), raw_value(e))),
        gender in any_gender(),
        age_group in any_age_group(),
    ) {
        let (better, worse) = match exercise.polarity() {
            Polarity::LowerIsBetter => (a.min(b), a.max(b)),
            Polarity::HigherIsBetter => (a.max(b), a.min(b)),
        };

        let better_points = scoring::lookup_score(exercise, Some(better), gender, age_group)
            .unwrap()
            .points;
        let worse_points = scoring::lookup_score(exercise, Some(worse), gender, age_group)
            .unwrap()
            .points;

        prop_assert!(better_points >= worse_points);
    }

    /// Lookups always land within the chart's point range.
    #[test]
    fn prop_lookup_within_bounds(
        (exercise, raw) in any_exercise().prop_flat_map(|e| (Just(e), raw_value(e))),
        gender in any_gender(),
        age_group in any_age_group(),
    ) {
        let lookup = scoring::lookup_score(exercise, Some(raw), gender, age_group).unwrap();
        let rows = StandardCharts.chart(exercise, gender, age_group).rows().unwrap();

        prop_assert!(lookup.points <= lookup.max_points);
        prop_assert!(lookup.points >= rows[rows.len() - 1].points);
        prop_assert!(lookup.percentage <= Decimal::ONE_HUNDRED);
        prop_assert!(lookup.percentage > Decimal::ZERO);
    }
}
