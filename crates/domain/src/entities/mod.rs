//! Domain entities

mod candidate;
mod forecast_entry;
mod recommendation;

pub use candidate::{Disqualification, HourlyCandidate, ScoredCandidate};
pub use forecast_entry::ForecastEntry;
pub use recommendation::{OutcomeKind, Recommendation};
