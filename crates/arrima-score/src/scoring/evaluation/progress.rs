use serde::Serialize;

use super::tier::{classify, Severity};

/// Normalization ceiling for the visual fill; not an eligibility input.
pub const PROGRESS_CEILING: u32 = 1346;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProgressSignal {
    /// Fill ratio in `[0, 1]`.
    pub ratio: f64,
    pub severity: Severity,
    pub color: &'static str,
    pub message: &'static str,
}

/// Progress bar signal. The caption repeats the tier status line, which depends on the
/// spouse flag through the eligibility threshold.
pub fn progress(total: u32, has_spouse: bool) -> ProgressSignal {
    let ratio = (f64::from(total) / f64::from(PROGRESS_CEILING)).min(1.0);
    let severity = Severity::for_total(total);

    ProgressSignal {
        ratio,
        severity,
        color: severity.color(),
        message: classify(total, has_spouse).status_message(),
    }
}
