//! Application services - Use case implementations

pub mod break_planner;
mod break_service;

pub use break_planner::{
    Explanation, ExplanationStatus, Locale, NormalizeOptions, PhraseBook, ScoreWeights,
    ScoringPolicy, ThresholdTable, evaluate_hours, explain, plan_break,
};
pub use break_service::{BreakAdvice, BreakService};
