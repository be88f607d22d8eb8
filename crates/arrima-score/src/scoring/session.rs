use serde::Serialize;
use tracing::{debug, warn};

use super::domain::{Factor, ScoreState, ScoringError};
use super::evaluation::{
    aggregate, breakdown, classify, eligibility_threshold, progress, recommend, DerivedTotals,
    Feedback, ProgressSignal, SectionBreakdown, Tier,
};
use super::rubric::RUBRIC_VERSION;

/// Owner of the single mutable copy of the form state.
///
/// Every update swaps in a freshly validated [`ScoreState`]; a rejected update leaves the
/// previous state in place.
#[derive(Debug, Clone, Default)]
pub struct ScoreSession {
    state: ScoreState,
    has_spouse: bool,
    financial_autonomy_acknowledged: bool,
}

impl ScoreSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_state(state: ScoreState, has_spouse: bool) -> Self {
        Self {
            state,
            has_spouse,
            financial_autonomy_acknowledged: false,
        }
    }

    pub fn state(&self) -> &ScoreState {
        &self.state
    }

    pub fn has_spouse(&self) -> bool {
        self.has_spouse
    }

    pub fn set_factor(&mut self, factor: Factor, points: u16) -> Result<(), ScoringError> {
        match self.state.with_factor(factor, points) {
            Ok(next) => {
                debug!(%factor, points, "factor updated");
                self.state = next;
                Ok(())
            }
            Err(err) => {
                warn!(%factor, points, "rejected selection outside rubric");
                Err(err)
            }
        }
    }

    /// Select by rubric option key, returning the points applied.
    pub fn select_option(&mut self, factor: Factor, option_key: &str) -> Result<u16, ScoringError> {
        let next = self.state.with_option(factor, option_key).map_err(|err| {
            warn!(%factor, option_key, "rejected unknown rubric option");
            err
        })?;
        let points = next.points(factor);
        debug!(%factor, option_key, points, "option selected");
        self.state = next;
        Ok(points)
    }

    pub fn set_has_spouse(&mut self, has_spouse: bool) {
        self.has_spouse = has_spouse;
    }

    pub fn acknowledge_financial_autonomy(&mut self, acknowledged: bool) {
        self.financial_autonomy_acknowledged = acknowledged;
    }

    /// Restore every factor and flag to its default.
    pub fn reset(&mut self) {
        debug!("score session reset");
        *self = Self::default();
    }

    pub fn report(&self) -> ScoreReport {
        let totals = aggregate(&self.state);
        let tier = classify(totals.total, self.has_spouse);

        ScoreReport {
            rubric_version: RUBRIC_VERSION,
            has_spouse: self.has_spouse,
            factors: self.state.clone(),
            threshold: eligibility_threshold(self.has_spouse),
            eligible: tier.is_eligible(),
            tier,
            status: tier.status_message(),
            progress: progress(totals.total, self.has_spouse),
            breakdown: breakdown(&self.state),
            feedback: recommend(&self.state, &totals, self.has_spouse),
            notices: vec![Notice::financial_autonomy(
                self.financial_autonomy_acknowledged,
            )],
            totals,
        }
    }
}

/// Everything the presentation layer renders after a change.
#[derive(Debug, Clone, Serialize)]
pub struct ScoreReport {
    pub rubric_version: &'static str,
    pub has_spouse: bool,
    pub factors: ScoreState,
    pub totals: DerivedTotals,
    pub threshold: u32,
    pub eligible: bool,
    pub tier: Tier,
    pub status: &'static str,
    pub progress: ProgressSignal,
    pub breakdown: Vec<SectionBreakdown>,
    pub feedback: Feedback,
    pub notices: Vec<Notice>,
}

/// Unscored condition surfaced alongside the results.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notice {
    pub topic: &'static str,
    pub acknowledged: bool,
    pub detail: &'static str,
}

impl Notice {
    fn financial_autonomy(acknowledged: bool) -> Self {
        let detail = if acknowledged {
            "You confirmed that you understand the mandatory financial self-sufficiency \
             requirement."
        } else {
            "You have not confirmed the financial self-sufficiency requirement. Proof that you \
             can support yourself and your family for the first 3 months is MANDATORY for the \
             CSQ and permanent residence. It adds no ranking points."
        };

        Self {
            topic: "Financial self-sufficiency",
            acknowledged,
            detail,
        }
    }
}
