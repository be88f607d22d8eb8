use crate::scoring::evaluation::{classify, eligibility_threshold, progress, Severity, Tier};

#[test]
fn single_applicant_threshold_is_fifty() {
    assert_eq!(eligibility_threshold(false), 50);
    assert_eq!(classify(49, false), Tier::Ineligible);
    assert_eq!(classify(50, false), Tier::Minimal);
}

#[test]
fn spouse_threshold_is_fifty_nine() {
    assert_eq!(eligibility_threshold(true), 59);
    assert_eq!(classify(58, true), Tier::Ineligible);
    assert_eq!(classify(59, true), Tier::Minimal);
}

#[test]
fn tier_breakpoints_are_closed_below() {
    assert_eq!(classify(299, false), Tier::Minimal);
    assert_eq!(classify(300, false), Tier::Good);
    assert_eq!(classify(599, false), Tier::Good);
    assert_eq!(classify(600, false), Tier::Excellent);
    assert_eq!(classify(600, true), Tier::Excellent);
}

#[test]
fn ineligible_is_not_eligible() {
    assert!(!Tier::Ineligible.is_eligible());
    assert!(Tier::Minimal.is_eligible());
    assert_eq!(
        Tier::Ineligible.status_message(),
        "Score too low to submit an Arrima profile"
    );
}

#[test]
fn classify_is_idempotent() {
    for total in [0, 58, 59, 300, 1200] {
        assert_eq!(classify(total, true), classify(total, true));
    }
}

#[test]
fn progress_ratio_is_capped_at_one() {
    let signal = progress(673, false);
    assert!((signal.ratio - 0.5).abs() < f64::EPSILON);

    let signal = progress(2000, false);
    assert_eq!(signal.ratio, 1.0);
    assert_eq!(progress(0, false).ratio, 0.0);
}

#[test]
fn progress_color_follows_shared_breakpoints() {
    assert_eq!(progress(299, false).severity, Severity::Low);
    assert_eq!(progress(299, false).color, "red");
    assert_eq!(progress(300, false).severity, Severity::Mid);
    assert_eq!(progress(300, false).color, "orange");
    assert_eq!(progress(600, false).severity, Severity::High);
    assert_eq!(progress(600, false).color, "green");
}

#[test]
fn progress_message_uses_spouse_threshold() {
    assert_eq!(progress(55, false).message, Tier::Minimal.status_message());
    assert_eq!(progress(55, true).message, Tier::Ineligible.status_message());
    assert_eq!(progress(450, true).message, Tier::Good.status_message());
    assert_eq!(
        progress(900, false).message,
        Tier::Excellent.status_message()
    );
}
