use super::common::*;
use crate::scoring::domain::{Factor, ScoringError};
use crate::scoring::evaluation::{InvitationOutlook, Tier};
use crate::scoring::session::ScoreSession;

#[test]
fn new_session_reports_ineligible_single_applicant() {
    let report = ScoreSession::new().report();

    assert!(!report.has_spouse);
    assert_eq!(report.threshold, 50);
    assert!(!report.eligible);
    assert_eq!(report.tier, Tier::Ineligible);
    assert_eq!(report.status, Tier::Ineligible.status_message());
    assert_eq!(report.totals.total, 0);
    assert_eq!(report.breakdown.len(), 5);
    assert_eq!(report.feedback.recommendations.len(), 6);
}

#[test]
fn rejected_selection_keeps_previous_state() {
    let mut session = ScoreSession::new();
    session
        .set_factor(Factor::Education, 110)
        .expect("master's degree is valid");

    let err = session
        .set_factor(Factor::Education, 100)
        .expect_err("100 is not an education value");

    assert_eq!(
        err,
        ScoringError::InvalidSelection {
            factor: Factor::Education,
            points: 100
        }
    );
    assert_eq!(session.state().points(Factor::Education), 110);
}

#[test]
fn select_option_applies_rubric_points() {
    let mut session = ScoreSession::new();

    let points = session
        .select_option(Factor::JobOffer, "outside_montreal")
        .expect("known option");
    assert_eq!(points, 380);

    let err = session
        .select_option(Factor::JobOffer, "remote")
        .expect_err("unknown option");
    assert!(matches!(err, ScoringError::UnknownOption { .. }));

    let report = session.report();
    assert_eq!(report.totals.total, 380);
    assert_eq!(report.totals.base, 0);
    assert_eq!(report.tier, Tier::Good);
    assert_eq!(report.feedback.outlook, Some(InvitationOutlook::Moderate));
}

#[test]
fn spouse_flag_changes_threshold_but_not_total() {
    let mut session = ScoreSession::from_state(state_with(&[(Factor::Age, 52)]), false);
    session
        .set_factor(Factor::SpouseAge, 20)
        .expect("valid spouse age");

    let single = session.report();
    assert_eq!(single.totals.total, 72);
    assert!(single.eligible);

    session.set_has_spouse(true);
    session
        .set_factor(Factor::SpouseAge, 0)
        .expect("valid spouse age");
    let with_spouse = session.report();
    assert_eq!(with_spouse.totals.total, 52);
    assert_eq!(with_spouse.threshold, 59);
    assert!(!with_spouse.eligible);
}

#[test]
fn financial_autonomy_notice_reflects_acknowledgement() {
    let mut session = ScoreSession::new();
    let notice = &session.report().notices[0];
    assert!(!notice.acknowledged);
    assert!(notice.detail.contains("MANDATORY"));

    session.acknowledge_financial_autonomy(true);
    let notice = &session.report().notices[0];
    assert!(notice.acknowledged);
    assert!(notice.detail.contains("confirmed"));
}

#[test]
fn reset_restores_defaults() {
    let mut session = ScoreSession::from_state(family_profile(), true);
    session.acknowledge_financial_autonomy(true);

    session.reset();

    assert!(!session.has_spouse());
    assert_eq!(session.report().totals.total, 0);
    assert!(!session.report().notices[0].acknowledged);
}

#[test]
fn report_serializes_factor_keys_in_camel_case() {
    let session = ScoreSession::from_state(strong_profile(), false);
    let value = serde_json::to_value(session.report()).expect("report serializes");

    assert_eq!(value["factors"]["frenchOralComprehension"], 110);
    assert_eq!(value["totals"]["total"], 710);
    assert_eq!(value["tier"], "excellent");
    assert_eq!(value["progress"]["severity"], "high");
    assert_eq!(value["feedback"]["outlook"], "very_high");
}
