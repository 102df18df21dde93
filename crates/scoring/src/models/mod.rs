pub mod age_group;
pub mod assessment;
pub mod demographics;
pub mod exercise;
pub mod score;

pub use age_group::{AgeGroup, calculate_age};
pub use assessment::{Assessment, BodyCompositionInput, ComponentInput};
pub use demographics::Demographics;
pub use exercise::{
    CardioExercise, Component, ComponentExercise, CoreExercise, Exercise, Gender, Polarity,
    StrengthExercise,
};
pub use score::{AssessmentScore, ComponentScoreResult, CompositeScoreResult, ScoreLookup};
