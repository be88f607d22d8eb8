//! End-to-end scenarios driven through the public scoring API, the way a form collaborator
//! would: apply one selection at a time, then recompute everything from the snapshot.

use arrima_score::scoring::{
    aggregate, classify, progress, recommend, rubric, Factor, InvitationOutlook, Priority,
    RecommendationCategory, ScoreSession, ScoreState, ScoringError, Severity, Tier,
};

fn apply(selections: &[(Factor, u16)]) -> ScoreState {
    selections
        .iter()
        .try_fold(ScoreState::new(), |state, (factor, points)| {
            state.with_factor(*factor, *points)
        })
        .expect("fixture selections are rubric values")
}

#[test]
fn strong_single_applicant_is_excellent() {
    let state = apply(&[
        (Factor::Age, 130),
        (Factor::Education, 130),
        (Factor::FieldOfStudy, 70),
        (Factor::WorkExperience, 100),
        (Factor::FrenchOralComprehension, 110),
        (Factor::FrenchOralProduction, 110),
        (Factor::FrenchWrittenComprehension, 30),
        (Factor::FrenchWrittenProduction, 30),
    ]);

    let totals = aggregate(&state);
    assert_eq!(totals.total, 710);
    assert_eq!(totals.french, 280);

    let tier = classify(totals.total, false);
    assert_eq!(tier, Tier::Excellent);
    assert!(tier.is_eligible());

    let feedback = recommend(&state, &totals, false);
    let categories: Vec<_> = feedback
        .recommendations
        .iter()
        .map(|recommendation| recommendation.category)
        .collect();
    assert_eq!(
        categories,
        vec![
            RecommendationCategory::QuebecConnection,
            RecommendationCategory::JobOffer
        ]
    );
}

#[test]
fn blank_form_is_ineligible_against_single_threshold() {
    let state = ScoreState::new();
    let totals = aggregate(&state);
    let feedback = recommend(&state, &totals, false);

    assert_eq!(totals.total, 0);
    assert_eq!(classify(totals.total, false), Tier::Ineligible);
    assert_eq!(feedback.outlook, None);
    assert!(feedback.narrative.contains("50 points"));

    let french = feedback
        .recommendations
        .iter()
        .find(|recommendation| recommendation.category == RecommendationCategory::French)
        .expect("french recommendation");
    assert_eq!(french.priority, Priority::High);
}

#[test]
fn remote_job_offer_alone_is_good_with_moderate_outlook() {
    let state = apply(&[(Factor::JobOffer, 380)]);
    let totals = aggregate(&state);

    assert_eq!(totals.total, 380);
    assert_eq!(totals.base, 0);
    assert_eq!(classify(totals.total, false), Tier::Good);

    let feedback = recommend(&state, &totals, false);
    assert_eq!(feedback.outlook, Some(InvitationOutlook::Moderate));
    assert!(feedback
        .recommendations
        .iter()
        .all(|recommendation| recommendation.category != RecommendationCategory::JobOffer));
    assert_eq!(feedback.recommendations.len(), 5);

    let signal = progress(totals.total, false);
    assert_eq!(signal.severity, Severity::Mid);
    assert_eq!(signal.message, Tier::Good.status_message());
}

#[test]
fn every_rubric_option_is_accepted_and_nothing_else() {
    for factor in Factor::ALL {
        let table = rubric::table(factor);
        for option in table.options() {
            let state = ScoreState::new()
                .with_factor(factor, option.points)
                .expect("rubric option accepted");
            assert_eq!(aggregate(&state).total, u32::from(option.points));
        }

        let beyond = table.max_points() + 1;
        assert_eq!(
            ScoreState::new().with_factor(factor, beyond),
            Err(ScoringError::InvalidSelection {
                factor,
                points: beyond
            })
        );
    }
}

#[test]
fn session_recomputes_after_each_change() {
    let mut session = ScoreSession::new();
    session.set_has_spouse(true);

    session
        .select_option(Factor::Age, "39")
        .expect("age option exists");
    let report = session.report();
    assert_eq!(report.totals.total, 52);
    assert_eq!(report.tier, Tier::Ineligible);

    session
        .select_option(Factor::SpouseEducation, "graduate")
        .expect("spouse education option exists");
    let report = session.report();
    assert_eq!(report.totals.total, 72);
    assert_eq!(report.tier, Tier::Minimal);
    assert_eq!(report.progress.color, "red");
}
