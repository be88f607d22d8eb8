use axum::response::Response;
use serde_json::Value;

use crate::scoring::domain::{Factor, ScoreState};

/// Build a state from `(factor, points)` pairs, panicking on values outside the rubric.
pub(super) fn state_with(selections: &[(Factor, u16)]) -> ScoreState {
    selections
        .iter()
        .fold(ScoreState::new(), |state, (factor, points)| {
            state
                .with_factor(*factor, *points)
                .unwrap_or_else(|err| panic!("fixture selection rejected: {err}"))
        })
}

/// Strong single applicant: 130 + 130 + 70 + 100 + 280 French = 710 points.
pub(super) fn strong_profile() -> ScoreState {
    state_with(&[
        (Factor::Age, 130),
        (Factor::Education, 130),
        (Factor::FieldOfStudy, 70),
        (Factor::WorkExperience, 100),
        (Factor::FrenchOralComprehension, 110),
        (Factor::FrenchOralProduction, 110),
        (Factor::FrenchWrittenComprehension, 30),
        (Factor::FrenchWrittenProduction, 30),
    ])
}

pub(super) fn job_offer_only() -> ScoreState {
    state_with(&[(Factor::JobOffer, 380)])
}

/// Fully populated profile with a spouse and a Montreal job offer.
pub(super) fn family_profile() -> ScoreState {
    state_with(&[
        (Factor::FrenchOralComprehension, 80),
        (Factor::FrenchOralProduction, 80),
        (Factor::FrenchWrittenComprehension, 20),
        (Factor::FrenchWrittenProduction, 20),
        (Factor::EnglishOralComprehension, 12),
        (Factor::EnglishOralProduction, 6),
        (Factor::EnglishWrittenComprehension, 12),
        (Factor::EnglishWrittenProduction, 6),
        (Factor::Age, 100),
        (Factor::Education, 90),
        (Factor::FieldOfStudy, 40),
        (Factor::WorkExperience, 60),
        (Factor::QuebecDiploma, 70),
        (Factor::QuebecWorkExperience, 70),
        (Factor::SpouseFrenchOral, 10),
        (Factor::SpouseAge, 20),
        (Factor::SpouseEducation, 10),
        (Factor::SpouseFieldOfStudy, 10),
        (Factor::JobOffer, 180),
        (Factor::Children, 55),
        (Factor::FamilyInQuebec, 20),
    ])
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
