use rust_decimal::{Decimal, RoundingStrategy};
use tracing::{debug, warn};

use crate::charts::{ChartSource, StandardCharts};
use crate::measure::calculate_whtr;
use crate::models::{
    AgeGroup, Assessment, AssessmentScore, BodyCompositionInput, Component, ComponentExercise,
    ComponentInput, ComponentScoreResult, CompositeScoreResult, Demographics, Exercise, Gender,
    Polarity, ScoreLookup,
};
use crate::policy::ScoringPolicy;

/// Anything that can be scored as one component.
pub trait Scorable {
    fn component(&self) -> Component;
    fn exercise(&self) -> Exercise;
    /// Value to look up in the chart; `None` when nothing was measured
    fn raw_value(&self) -> Option<Decimal>;
    fn is_exempt(&self) -> bool;
}

impl<E: ComponentExercise> Scorable for ComponentInput<E> {
    fn component(&self) -> Component {
        E::COMPONENT
    }

    fn exercise(&self) -> Exercise {
        self.exercise.into()
    }

    fn raw_value(&self) -> Option<Decimal> {
        self.raw_value
    }

    fn is_exempt(&self) -> bool {
        self.exempt
    }
}

impl Scorable for BodyCompositionInput {
    fn component(&self) -> Component {
        Component::BodyComposition
    }

    fn exercise(&self) -> Exercise {
        Exercise::WaistToHeight
    }

    fn raw_value(&self) -> Option<Decimal> {
        calculate_whtr(self.waist_inches?, self.height_inches?)
    }

    fn is_exempt(&self) -> bool {
        self.exempt
    }
}

/// Scores raw results against a chart source under a scoring policy.
#[derive(Debug, Clone, Default)]
pub struct ScoringEngine<S = StandardCharts> {
    charts: S,
    policy: ScoringPolicy,
}

impl ScoringEngine<StandardCharts> {
    pub fn standard() -> Self {
        Self::default()
    }

    pub fn with_policy(policy: ScoringPolicy) -> Self {
        Self::new(StandardCharts, policy)
    }
}

impl<S: ChartSource> ScoringEngine<S> {
    pub fn new(charts: S, policy: ScoringPolicy) -> Self {
        Self { charts, policy }
    }

    pub fn policy(&self) -> &ScoringPolicy {
        &self.policy
    }

    /// Resolves a raw value to points.
    ///
    /// Returns `None` when there is no value or no usable chart for the
    /// combination. Values worse than the last row still earn that row's
    /// points.
    pub fn lookup_score(
        &self,
        exercise: Exercise,
        raw_value: Option<Decimal>,
        gender: Gender,
        age_group: AgeGroup,
    ) -> Option<ScoreLookup> {
        let raw = raw_value?;

        let Some(rows) = self.charts.chart(exercise, gender, age_group).rows() else {
            warn!(
                "No scoring chart for {} (gender: {}, age group: {})",
                exercise, gender, age_group
            );
            return None;
        };

        let max_points = rows[0].points;
        if max_points <= Decimal::ZERO {
            warn!(
                "Scoring chart for {} (gender: {}, age group: {}) has no points",
                exercise, gender, age_group
            );
            return None;
        }

        let matched = match exercise.polarity() {
            Polarity::LowerIsBetter => rows.iter().find(|row| raw <= row.threshold),
            Polarity::HigherIsBetter => rows.iter().find(|row| raw >= row.threshold),
        };
        let points = matched.or(rows.last()).map(|row| row.points)?;

        Some(ScoreLookup {
            points,
            max_points,
            percentage: points * Decimal::ONE_HUNDRED / max_points,
        })
    }

    pub fn calculate_component_score(
        &self,
        input: &impl Scorable,
        gender: Gender,
        age_group: AgeGroup,
    ) -> ComponentScoreResult {
        let component = input.component();

        if input.is_exempt() {
            return ComponentScoreResult::exempt(component);
        }

        let Some(raw) = input.raw_value() else {
            return ComponentScoreResult::not_tested(component);
        };

        let Some(lookup) = self.lookup_score(input.exercise(), Some(raw), gender, age_group) else {
            warn!(
                "Unable to score {} for {} {}; counting it as failed",
                input.exercise(),
                gender,
                age_group
            );
            return ComponentScoreResult::lookup_failed(component);
        };

        let minimum = self.policy.minimum_for(component);

        ComponentScoreResult {
            component,
            tested: true,
            exempt: false,
            points: Some(lookup.points),
            max_points: component.weight(),
            percentage: Some(lookup.percentage),
            minimum: Some(minimum),
            pass: Some(lookup.percentage >= minimum),
            error: None,
        }
    }

    /// Combines component results into the composite.
    ///
    /// The composite stays `None` while any component is neither tested nor
    /// exempt, and when every component is exempt. Exempt components add
    /// nothing to either total.
    pub fn calculate_composite_score(&self, results: &[ComponentScoreResult]) -> CompositeScoreResult {
        let mut composite = CompositeScoreResult {
            all_components_pass: true,
            ..CompositeScoreResult::default()
        };

        for result in results {
            if result.exempt {
                composite.exempt_components.push(result.component);
                continue;
            }

            let points = match result.points {
                Some(points) if result.tested => points,
                _ => continue,
            };

            composite.tested_components.push(result.component);
            composite.total_earned += points;
            composite.total_possible += result.max_points;

            if result.pass != Some(true) {
                composite.all_components_pass = false;
                composite.failed_components.push(result.component);
            }
        }

        let accounted = composite.tested_components.len() + composite.exempt_components.len();
        if accounted < results.len().max(Component::ALL.len()) {
            composite.partial_assessment = true;
            return composite;
        }

        if composite.total_possible.is_zero() {
            return CompositeScoreResult {
                all_exempt: true,
                all_components_pass: true,
                exempt_components: composite.exempt_components,
                ..CompositeScoreResult::default()
            };
        }

        let exact = composite.total_earned * Decimal::ONE_HUNDRED / composite.total_possible;
        let composite_pass = exact >= self.policy.passing_composite;

        composite.composite =
            Some(exact.round_dp_with_strategy(1, RoundingStrategy::MidpointAwayFromZero));
        composite.composite_pass = Some(composite_pass);
        composite.pass = Some(composite_pass && composite.all_components_pass);
        composite
    }

    /// Rescores a whole assessment for the given profile.
    pub fn score_assessment(
        &self,
        assessment: &Assessment,
        demographics: &Demographics,
    ) -> AssessmentScore {
        let age = demographics.age_on(assessment.date);
        let age_group = AgeGroup::from_age(age);
        let gender = demographics.gender;

        debug!(
            "Scoring assessment of {} (age {}, bracket {}, gender {})",
            assessment.date, age, age_group, gender
        );

        let cardio = self.score_slot(assessment.cardio.as_ref(), Component::Cardio, gender, age_group);
        let strength =
            self.score_slot(assessment.strength.as_ref(), Component::Strength, gender, age_group);
        let core = self.score_slot(assessment.core.as_ref(), Component::Core, gender, age_group);
        let body_composition = self.score_slot(
            assessment.body_composition.as_ref(),
            Component::BodyComposition,
            gender,
            age_group,
        );

        let composite = self.calculate_composite_score(&[
            cardio.clone(),
            strength.clone(),
            core.clone(),
            body_composition.clone(),
        ]);

        AssessmentScore {
            age,
            age_group,
            diagnostic: self.policy.is_diagnostic_period(assessment.date),
            cardio,
            strength,
            core,
            body_composition,
            composite,
        }
    }

    fn score_slot(
        &self,
        input: Option<&impl Scorable>,
        component: Component,
        gender: Gender,
        age_group: AgeGroup,
    ) -> ComponentScoreResult {
        match input {
            Some(input) => self.calculate_component_score(input, gender, age_group),
            None => ComponentScoreResult::not_tested(component),
        }
    }
}

pub fn lookup_score(
    exercise: Exercise,
    raw_value: Option<Decimal>,
    gender: Gender,
    age_group: AgeGroup,
) -> Option<ScoreLookup> {
    ScoringEngine::standard().lookup_score(exercise, raw_value, gender, age_group)
}

pub fn calculate_component_score(
    input: &impl Scorable,
    gender: Gender,
    age_group: AgeGroup,
) -> ComponentScoreResult {
    ScoringEngine::standard().calculate_component_score(input, gender, age_group)
}

pub fn calculate_composite_score(results: &[ComponentScoreResult]) -> CompositeScoreResult {
    ScoringEngine::standard().calculate_composite_score(results)
}

pub fn score_assessment(assessment: &Assessment, demographics: &Demographics) -> AssessmentScore {
    ScoringEngine::standard().score_assessment(assessment, demographics)
}
