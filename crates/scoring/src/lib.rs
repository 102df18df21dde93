pub mod charts;
pub mod engine;
pub mod error;
pub mod measure;
pub mod models;
pub mod policy;

pub use charts::{CHART_VERSION, Chart, ChartSource, ScoreRow, StandardCharts};
pub use engine::{
    Scorable, ScoringEngine, calculate_component_score, calculate_composite_score, lookup_score,
    score_assessment,
};
pub use error::{Result, ScoringError};
pub use measure::{calculate_whtr, format_time, parse_count, parse_inches, parse_time};
pub use models::*;
pub use policy::{DiagnosticWindow, PASSING_COMPOSITE, ScoringPolicy, is_diagnostic_period};
