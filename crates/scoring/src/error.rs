use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ScoringError {
    #[error("Unknown gender: '{0}'. Must be 'M' or 'F'")]
    UnknownGender(String),

    #[error("Unknown exercise: '{0}'")]
    UnknownExercise(String),

    #[error("Exercise '{exercise}' does not belong to the {component} component")]
    WrongComponent {
        exercise: &'static str,
        component: &'static str,
    },

    #[error("Unknown component: '{0}'")]
    UnknownComponent(String),
}

pub type Result<T> = std::result::Result<T, ScoringError>;
