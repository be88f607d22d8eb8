mod progress;
mod rules;
mod tier;

pub use progress::{progress, ProgressSignal, PROGRESS_CEILING};
pub use rules::{
    recommend, Feedback, InvitationOutlook, Priority, Recommendation, RecommendationCategory,
};
pub use tier::{
    classify, eligibility_threshold, Severity, Tier, EXCELLENT_BREAKPOINT, GOOD_BREAKPOINT,
    SINGLE_THRESHOLD, SPOUSE_THRESHOLD,
};

use serde::{Deserialize, Serialize};

use super::domain::{Factor, FactorGroup, Language, ScoreState};
use super::rubric;

/// Values derived from a [`ScoreState`]; recomputed on every read.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DerivedTotals {
    pub total: u32,
    /// Total without the job offer points.
    pub base: u32,
    pub french: u32,
    pub english: u32,
    /// Share of factors holding a non-zero value, in `[0, 1]`.
    pub completion: f64,
    pub groups: GroupSubtotals,
}

impl DerivedTotals {
    pub fn completion_percentage(&self) -> f64 {
        self.completion * 100.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct GroupSubtotals {
    pub language: u32,
    pub human_capital: u32,
    pub local_ties: u32,
    pub spousal: u32,
    pub additional: u32,
}

impl GroupSubtotals {
    pub fn get(&self, group: FactorGroup) -> u32 {
        match group {
            FactorGroup::Language => self.language,
            FactorGroup::HumanCapital => self.human_capital,
            FactorGroup::LocalTies => self.local_ties,
            FactorGroup::Spousal => self.spousal,
            FactorGroup::Additional => self.additional,
        }
    }

    fn add(&mut self, group: FactorGroup, points: u32) {
        let slot = match group {
            FactorGroup::Language => &mut self.language,
            FactorGroup::HumanCapital => &mut self.human_capital,
            FactorGroup::LocalTies => &mut self.local_ties,
            FactorGroup::Spousal => &mut self.spousal,
            FactorGroup::Additional => &mut self.additional,
        };
        *slot += points;
    }
}

pub fn aggregate(state: &ScoreState) -> DerivedTotals {
    let mut total = 0u32;
    let mut french = 0u32;
    let mut english = 0u32;
    let mut answered = 0usize;
    let mut groups = GroupSubtotals::default();

    for (factor, points) in state.iter() {
        let points = u32::from(points);
        total += points;
        groups.add(factor.group(), points);

        match factor.language() {
            Some(Language::French) => french += points,
            Some(Language::English) => english += points,
            None => {}
        }

        if points > 0 {
            answered += 1;
        }
    }

    let base = total - u32::from(state.points(Factor::JobOffer));

    DerivedTotals {
        total,
        base,
        french,
        english,
        completion: answered as f64 / Factor::COUNT as f64,
        groups,
    }
}

/// Discrete contribution to the total, kept for transparent breakdowns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreComponent {
    pub factor: Factor,
    pub label: String,
    pub points: u16,
    /// Rubric option the points correspond to.
    pub selection: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionBreakdown {
    pub group: FactorGroup,
    pub label: String,
    pub subtotal: u32,
    pub components: Vec<ScoreComponent>,
}

/// Per-factor points grouped by section, in rubric order.
pub fn breakdown(state: &ScoreState) -> Vec<SectionBreakdown> {
    FactorGroup::ALL
        .into_iter()
        .map(|group| {
            let components: Vec<ScoreComponent> = group
                .factors()
                .map(|factor| {
                    let points = state.points(factor);
                    let selection = rubric::table(factor)
                        .option_for_points(points)
                        .map(|option| option.label)
                        .unwrap_or_default();
                    ScoreComponent {
                        factor,
                        label: factor.label().to_string(),
                        points,
                        selection: selection.to_string(),
                    }
                })
                .collect();

            SectionBreakdown {
                group,
                label: group.label().to_string(),
                subtotal: components
                    .iter()
                    .map(|component| u32::from(component.points))
                    .sum(),
                components,
            }
        })
        .collect()
}
