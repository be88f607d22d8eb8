use serde::{Deserialize, Serialize};

/// Minimum total for a single applicant to submit a profile.
pub const SINGLE_THRESHOLD: u32 = 50;
/// Minimum total when a spouse accompanies the applicant.
pub const SPOUSE_THRESHOLD: u32 = 59;
pub const GOOD_BREAKPOINT: u32 = 300;
pub const EXCELLENT_BREAKPOINT: u32 = 600;

pub const fn eligibility_threshold(has_spouse: bool) -> u32 {
    if has_spouse {
        SPOUSE_THRESHOLD
    } else {
        SINGLE_THRESHOLD
    }
}

/// Three-level signal shared by the tier classifier and the progress bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Low,
    Mid,
    High,
}

impl Severity {
    pub const fn for_total(total: u32) -> Self {
        if total < GOOD_BREAKPOINT {
            Severity::Low
        } else if total < EXCELLENT_BREAKPOINT {
            Severity::Mid
        } else {
            Severity::High
        }
    }

    pub const fn color(self) -> &'static str {
        match self {
            Severity::Low => "red",
            Severity::Mid => "orange",
            Severity::High => "green",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tier {
    Ineligible,
    Minimal,
    Good,
    Excellent,
}

impl Tier {
    pub const fn is_eligible(self) -> bool {
        !matches!(self, Tier::Ineligible)
    }

    pub const fn severity(self) -> Severity {
        match self {
            Tier::Ineligible | Tier::Minimal => Severity::Low,
            Tier::Good => Severity::Mid,
            Tier::Excellent => Severity::High,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Tier::Ineligible => "ineligible",
            Tier::Minimal => "minimal",
            Tier::Good => "good",
            Tier::Excellent => "excellent",
        }
    }

    pub const fn status_message(self) -> &'static str {
        match self {
            Tier::Ineligible => "Score too low to submit an Arrima profile",
            Tier::Minimal => "Minimum score reached, but improvements are needed",
            Tier::Good => "Good score! You are on the right track",
            Tier::Excellent => "Excellent score! Highly competitive profile",
        }
    }
}

pub fn classify(total: u32, has_spouse: bool) -> Tier {
    if total < eligibility_threshold(has_spouse) {
        return Tier::Ineligible;
    }

    match Severity::for_total(total) {
        Severity::Low => Tier::Minimal,
        Severity::Mid => Tier::Good,
        Severity::High => Tier::Excellent,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn severity_tracks_breakpoints() {
        assert_eq!(Severity::for_total(0), Severity::Low);
        assert_eq!(Severity::for_total(299), Severity::Low);
        assert_eq!(Severity::for_total(300), Severity::Mid);
        assert_eq!(Severity::for_total(600), Severity::High);
        assert_eq!(Severity::High.color(), "green");
    }

    #[test]
    fn tier_severity_agrees_with_total_severity_once_eligible() {
        for total in [50, 120, 299, 300, 450, 599, 600, 1346] {
            let tier = classify(total, false);
            assert_eq!(tier.severity(), Severity::for_total(total), "total {total}");
        }
    }
}
