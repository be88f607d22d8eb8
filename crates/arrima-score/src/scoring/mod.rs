//! Arrima ranking score model.
//!
//! The rubric tables map each factor's options to points. The evaluation functions are pure:
//! they take an immutable [`ScoreState`] snapshot plus the spouse flag and return freshly
//! computed totals, tier, progress signal and feedback. [`ScoreSession`] is the caller-side
//! owner of the mutable copy and the HTTP router is one such caller.

pub mod domain;
pub mod evaluation;
pub mod router;
pub mod rubric;
pub mod session;

#[cfg(test)]
mod tests;

pub use domain::{Factor, FactorGroup, Language, ScoreState, ScoringError};
pub use evaluation::{
    aggregate, breakdown, classify, eligibility_threshold, progress, recommend, DerivedTotals,
    Feedback, GroupSubtotals, InvitationOutlook, Priority, ProgressSignal, Recommendation,
    RecommendationCategory, ScoreComponent, SectionBreakdown, Severity, Tier,
};
pub use router::scoring_router;
pub use rubric::{rubric_view, FactorRubricView, FactorTable, RubricOption, RubricView};
pub use session::{Notice, ScoreReport, ScoreSession};
