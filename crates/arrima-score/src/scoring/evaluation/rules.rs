use serde::{Deserialize, Serialize};

use super::super::domain::{Factor, ScoreState};
use super::tier::eligibility_threshold;
use super::DerivedTotals;

const FRENCH_TARGET: u32 = 200;
const AGE_TARGET: u16 = 100;
const EDUCATION_TARGET: u16 = 90;
const WORK_EXPERIENCE_TARGET: u16 = 80;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    High,
    Medium,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecommendationCategory {
    French,
    Age,
    Education,
    WorkExperience,
    QuebecConnection,
    JobOffer,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recommendation {
    pub category: RecommendationCategory,
    pub title: String,
    pub description: String,
    pub priority: Priority,
}

/// Likelihood of an invitation as described by the narrative.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InvitationOutlook {
    VeryHigh,
    High,
    Moderate,
    Low,
}

impl InvitationOutlook {
    pub const fn label(self) -> &'static str {
        match self {
            InvitationOutlook::VeryHigh => "VERY HIGH",
            InvitationOutlook::High => "HIGH",
            InvitationOutlook::Moderate => "MODERATE",
            InvitationOutlook::Low => "LOW",
        }
    }
}

/// Narrative interpretation and the recommendations that apply to a state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Feedback {
    /// `None` when the total is below the eligibility threshold.
    pub outlook: Option<InvitationOutlook>,
    pub narrative: String,
    pub recommendations: Vec<Recommendation>,
}

struct RuleContext<'a> {
    state: &'a ScoreState,
    totals: &'a DerivedTotals,
    has_spouse: bool,
    threshold: u32,
}

impl RuleContext<'_> {
    fn points(&self, factor: Factor) -> u16 {
        self.state.points(factor)
    }

    fn has_job_offer(&self) -> bool {
        self.points(Factor::JobOffer) > 0
    }
}

struct NarrativeRule {
    applies: fn(&RuleContext) -> bool,
    outlook: Option<InvitationOutlook>,
    render: fn(&RuleContext, Option<InvitationOutlook>) -> String,
}

// First match wins; the final rule always applies.
const NARRATIVE_RULES: &[NarrativeRule] = &[
    NarrativeRule {
        applies: below_threshold,
        outlook: None,
        render: ineligible_narrative,
    },
    NarrativeRule {
        applies: job_offer_at_least_800,
        outlook: Some(InvitationOutlook::VeryHigh),
        render: job_offer_narrative,
    },
    NarrativeRule {
        applies: job_offer_at_least_600,
        outlook: Some(InvitationOutlook::High),
        render: job_offer_narrative,
    },
    NarrativeRule {
        applies: with_job_offer,
        outlook: Some(InvitationOutlook::Moderate),
        render: job_offer_narrative,
    },
    NarrativeRule {
        applies: at_least_620,
        outlook: Some(InvitationOutlook::VeryHigh),
        render: general_draw_narrative,
    },
    NarrativeRule {
        applies: at_least_570,
        outlook: Some(InvitationOutlook::High),
        render: general_draw_narrative,
    },
    NarrativeRule {
        applies: at_least_400,
        outlook: Some(InvitationOutlook::Moderate),
        render: general_draw_narrative,
    },
    NarrativeRule {
        applies: always,
        outlook: Some(InvitationOutlook::Low),
        render: general_draw_narrative,
    },
];

fn below_threshold(ctx: &RuleContext) -> bool {
    ctx.totals.total < ctx.threshold
}

fn job_offer_at_least_800(ctx: &RuleContext) -> bool {
    ctx.has_job_offer() && ctx.totals.total >= 800
}

fn job_offer_at_least_600(ctx: &RuleContext) -> bool {
    ctx.has_job_offer() && ctx.totals.total >= 600
}

fn with_job_offer(ctx: &RuleContext) -> bool {
    ctx.has_job_offer()
}

fn at_least_620(ctx: &RuleContext) -> bool {
    ctx.totals.total >= 620
}

fn at_least_570(ctx: &RuleContext) -> bool {
    ctx.totals.total >= 570
}

fn at_least_400(ctx: &RuleContext) -> bool {
    ctx.totals.total >= 400
}

fn always(_: &RuleContext) -> bool {
    true
}

fn ineligible_narrative(ctx: &RuleContext, _: Option<InvitationOutlook>) -> String {
    let applicant = if ctx.has_spouse {
        "with spouse"
    } else {
        "single applicant"
    };
    let shortfall = ctx.threshold - ctx.totals.total;

    format!(
        "With a score of {} points, you do not reach the minimum of {} points required to \
         submit an Arrima profile ({applicant}); you are {shortfall} point{} short. Improving \
         your profile is essential before you can apply.",
        ctx.totals.total,
        ctx.threshold,
        if shortfall == 1 { "" } else { "s" }
    )
}

fn job_offer_narrative(ctx: &RuleContext, outlook: Option<InvitationOutlook>) -> String {
    let outlook = outlook.unwrap_or(InvitationOutlook::Moderate);
    let advice = match outlook {
        InvitationOutlook::VeryHigh => {
            "Candidates with a validated job offer are often prioritized, especially when the \
             offer is outside the Montreal metropolitan community. Make sure your offer is \
             validated by the MIFI."
        }
        InvitationOutlook::High => "Your job offer gives you a significant advantage.",
        InvitationOutlook::Moderate | InvitationOutlook::Low => {
            "While the job offer is an asset, improving other aspects of your profile would \
             help."
        }
    };

    format!(
        "With a validated job offer and a total score of {} points (base score without the \
         offer: {}), your chances of invitation are {}. {advice}",
        ctx.totals.total,
        ctx.totals.base,
        outlook.label()
    )
}

fn general_draw_narrative(ctx: &RuleContext, outlook: Option<InvitationOutlook>) -> String {
    let outlook = outlook.unwrap_or(InvitationOutlook::Low);
    let advice = match outlook {
        InvitationOutlook::VeryHigh => "Your profile is highly competitive for general draws.",
        InvitationOutlook::High => {
            "Your score falls within the range often observed in general draws."
        }
        InvitationOutlook::Moderate => {
            "Improving some aspects of your profile is recommended to raise your chances."
        }
        InvitationOutlook::Low => {
            "Significantly improving your profile before applying is important."
        }
    };

    format!(
        "With a score of {} points, your chances of invitation are {}. {advice}",
        ctx.totals.total,
        outlook.label()
    )
}

struct RecommendationRule {
    category: RecommendationCategory,
    priority: Priority,
    title: &'static str,
    description: &'static str,
    applies: fn(&RuleContext) -> bool,
}

// Evaluated independently in this order.
const RECOMMENDATION_RULES: &[RecommendationRule] = &[
    RecommendationRule {
        category: RecommendationCategory::French,
        priority: Priority::High,
        title: "Improve your French",
        description: "Your French score is low. Focus on improving your language skills, \
                      especially oral skills, which are worth the most points.",
        applies: french_below_target,
    },
    RecommendationRule {
        category: RecommendationCategory::Age,
        priority: Priority::Medium,
        title: "Age factor",
        description: "Age affects your score. If you are over 35, focus on other factors to \
                      compensate.",
        applies: age_below_target,
    },
    RecommendationRule {
        category: RecommendationCategory::Education,
        priority: Priority::Medium,
        title: "Education level",
        description: "Consider having your diploma recognized or pursuing further studies to \
                      increase your points.",
        applies: education_below_target,
    },
    RecommendationRule {
        category: RecommendationCategory::WorkExperience,
        priority: Priority::Medium,
        title: "Work experience",
        description: "Build more skilled work experience in your field before applying.",
        applies: work_experience_below_target,
    },
    RecommendationRule {
        category: RecommendationCategory::QuebecConnection,
        priority: Priority::High,
        title: "Connection to Quebec",
        description: "Consider earning a Quebec diploma or Quebec work experience for \
                      significant bonus points.",
        applies: no_quebec_connection,
    },
    RecommendationRule {
        category: RecommendationCategory::JobOffer,
        priority: Priority::High,
        title: "Job offer",
        description: "A job offer validated by the MIFI can considerably increase your \
                      chances, especially outside the Montreal region.",
        applies: without_job_offer,
    },
];

fn french_below_target(ctx: &RuleContext) -> bool {
    ctx.totals.french < FRENCH_TARGET
}

fn age_below_target(ctx: &RuleContext) -> bool {
    ctx.points(Factor::Age) < AGE_TARGET
}

fn education_below_target(ctx: &RuleContext) -> bool {
    ctx.points(Factor::Education) < EDUCATION_TARGET
}

fn work_experience_below_target(ctx: &RuleContext) -> bool {
    ctx.points(Factor::WorkExperience) < WORK_EXPERIENCE_TARGET
}

fn no_quebec_connection(ctx: &RuleContext) -> bool {
    ctx.points(Factor::QuebecDiploma) == 0 && ctx.points(Factor::QuebecWorkExperience) == 0
}

fn without_job_offer(ctx: &RuleContext) -> bool {
    !ctx.has_job_offer()
}

/// Derive the narrative and recommendation list. Pure; safe to call on every change.
pub fn recommend(state: &ScoreState, totals: &DerivedTotals, has_spouse: bool) -> Feedback {
    let ctx = RuleContext {
        state,
        totals,
        has_spouse,
        threshold: eligibility_threshold(has_spouse),
    };

    let (outlook, narrative) = NARRATIVE_RULES
        .iter()
        .find(|rule| (rule.applies)(&ctx))
        .map(|rule| (rule.outlook, (rule.render)(&ctx, rule.outlook)))
        .unwrap_or_else(|| (None, String::new()));

    let recommendations = RECOMMENDATION_RULES
        .iter()
        .filter(|rule| (rule.applies)(&ctx))
        .map(|rule| Recommendation {
            category: rule.category,
            title: rule.title.to_string(),
            description: rule.description.to_string(),
            priority: rule.priority,
        })
        .collect();

    Feedback {
        outlook,
        narrative,
        recommendations,
    }
}
