//! Published point tables, one per scoring factor.
//!
//! These tables are the only place point values are defined. Every table lists a 0-point
//! option so the default state is always a valid selection.

use serde::Serialize;

use super::domain::{Factor, FactorGroup};

/// Identifier of the rubric edition encoded below.
pub const RUBRIC_VERSION: &str = "arrima-2025.1";

/// Selectable option within a factor table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RubricOption {
    pub key: &'static str,
    pub label: &'static str,
    pub points: u16,
}

const fn option(key: &'static str, label: &'static str, points: u16) -> RubricOption {
    RubricOption { key, label, points }
}

/// Closed set of options for one factor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FactorTable {
    options: &'static [RubricOption],
}

impl FactorTable {
    pub fn options(&self) -> &'static [RubricOption] {
        self.options
    }

    pub fn contains(&self, points: u16) -> bool {
        self.options.iter().any(|option| option.points == points)
    }

    pub fn option(&self, key: &str) -> Option<&'static RubricOption> {
        let key = key.trim();
        self.options
            .iter()
            .find(|option| option.key.eq_ignore_ascii_case(key))
    }

    /// Option carrying `points`; point values are unique within a table.
    pub fn option_for_points(&self, points: u16) -> Option<&'static RubricOption> {
        self.options.iter().find(|option| option.points == points)
    }

    pub fn max_points(&self) -> u16 {
        self.options
            .iter()
            .map(|option| option.points)
            .max()
            .unwrap_or_default()
    }
}

static FRENCH_ORAL: FactorTable = FactorTable {
    options: &[
        option("nclc_1_4", "NCLC 1-4", 0),
        option("nclc_5", "NCLC 5", 20),
        option("nclc_6", "NCLC 6", 40),
        option("nclc_7", "NCLC 7", 80),
        option("nclc_8", "NCLC 8", 90),
        option("nclc_9", "NCLC 9", 100),
        option("nclc_10_plus", "NCLC 10+", 110),
    ],
};

static FRENCH_WRITTEN: FactorTable = FactorTable {
    options: &[
        option("nclc_1_4", "NCLC 1-4", 0),
        option("nclc_5", "NCLC 5", 10),
        option("nclc_6", "NCLC 6", 20),
        option("nclc_7_plus", "NCLC 7+", 30),
    ],
};

static ENGLISH: FactorTable = FactorTable {
    options: &[
        option("clb_1_4", "CLB 1-4", 0),
        option("clb_5_8", "CLB 5-8", 6),
        option("clb_9_plus", "CLB 9+", 12),
    ],
};

static AGE: FactorTable = FactorTable {
    options: &[
        option("outside_range", "Under 18 or 43+", 0),
        option("18_30", "18-30 years", 130),
        option("31", "31 years", 124),
        option("32", "32 years", 118),
        option("33", "33 years", 112),
        option("34", "34 years", 106),
        option("35", "35 years", 100),
        option("36", "36 years", 88),
        option("37", "37 years", 76),
        option("38", "38 years", 64),
        option("39", "39 years", 52),
        option("40", "40 years", 40),
        option("41", "41 years", 26),
        option("42", "42 years", 13),
    ],
};

static EDUCATION: FactorTable = FactorTable {
    options: &[
        option("none", "None / secondary not completed", 0),
        option("secondary", "General or vocational secondary", 20),
        option("post_secondary_short", "Technical post-secondary (1-2 years)", 40),
        option("post_secondary_long", "Technical DEC / post-secondary (3 years)", 70),
        option("bachelor", "University first cycle (bachelor, 3+ years)", 90),
        option("master", "University second cycle (master)", 110),
        option("doctorate", "University third cycle (doctorate)", 130),
    ],
};

static FIELD_OF_STUDY: FactorTable = FactorTable {
    options: &[
        option("not_listed", "Not applicable / not listed", 0),
        option("general", "General field / low demand", 10),
        option("specialized", "IT, engineering, specialized management, finance", 40),
        option("priority", "Health, social services, teaching, education", 70),
    ],
};

static WORK_EXPERIENCE: FactorTable = FactorTable {
    options: &[
        option("under_6_months", "Less than 6 months", 0),
        option("6_11_months", "6-11 months", 20),
        option("12_23_months", "12-23 months", 40),
        option("24_35_months", "24-35 months", 60),
        option("36_47_months", "36-47 months", 80),
        option("48_plus_months", "48+ months", 100),
    ],
};

static QUEBEC_DIPLOMA: FactorTable = FactorTable {
    options: &[
        option("none", "No Quebec diploma", 0),
        option("vocational", "DEP (1800h+) / AEC / technical DEC", 70),
        option("university", "University degree (bachelor, master, doctorate)", 100),
    ],
};

static QUEBEC_WORK_EXPERIENCE: FactorTable = FactorTable {
    options: &[
        option("none", "No Quebec work experience", 0),
        option("6_11_months", "6-11 months of skilled work", 70),
        option("12_plus_months", "12+ months of skilled work", 110),
    ],
};

static SPOUSE_FRENCH_ORAL: FactorTable = FactorTable {
    options: &[
        option("nclc_1_4", "NCLC 1-4", 0),
        option("nclc_5_6", "NCLC 5-6", 10),
        option("nclc_7_plus", "NCLC 7+", 20),
    ],
};

static SPOUSE_AGE: FactorTable = FactorTable {
    options: &[
        option("18_35", "18-35 years", 20),
        option("36_40", "36-40 years", 10),
        option("41_plus", "41+ years", 0),
    ],
};

static SPOUSE_EDUCATION: FactorTable = FactorTable {
    options: &[
        option("none", "None / secondary not completed", 0),
        option("secondary", "Secondary", 5),
        option("post_secondary", "Post-secondary / DEC / bachelor", 10),
        option("graduate", "Graduate studies (master / doctorate)", 20),
    ],
};

static SPOUSE_FIELD_OF_STUDY: FactorTable = FactorTable {
    options: &[
        option("not_in_demand", "Field not in demand", 0),
        option("in_demand", "Field in demand", 10),
    ],
};

static JOB_OFFER: FactorTable = FactorTable {
    options: &[
        option("none", "No job offer", 0),
        option("inside_montreal", "Offer inside the Montreal metropolitan area", 180),
        option("outside_montreal", "Offer outside the Montreal metropolitan area", 380),
    ],
};

static CHILDREN: FactorTable = FactorTable {
    options: &[
        option("none", "No children", 0),
        option("one", "1 child", 30),
        option("two_plus", "2+ children", 55),
    ],
};

static FAMILY_IN_QUEBEC: FactorTable = FactorTable {
    options: &[option("no", "No", 0), option("yes", "Yes", 20)],
};

pub fn table(factor: Factor) -> &'static FactorTable {
    match factor {
        Factor::FrenchOralComprehension | Factor::FrenchOralProduction => &FRENCH_ORAL,
        Factor::FrenchWrittenComprehension | Factor::FrenchWrittenProduction => &FRENCH_WRITTEN,
        Factor::EnglishOralComprehension
        | Factor::EnglishOralProduction
        | Factor::EnglishWrittenComprehension
        | Factor::EnglishWrittenProduction => &ENGLISH,
        Factor::Age => &AGE,
        Factor::Education => &EDUCATION,
        Factor::FieldOfStudy => &FIELD_OF_STUDY,
        Factor::WorkExperience => &WORK_EXPERIENCE,
        Factor::QuebecDiploma => &QUEBEC_DIPLOMA,
        Factor::QuebecWorkExperience => &QUEBEC_WORK_EXPERIENCE,
        Factor::SpouseFrenchOral => &SPOUSE_FRENCH_ORAL,
        Factor::SpouseAge => &SPOUSE_AGE,
        Factor::SpouseEducation => &SPOUSE_EDUCATION,
        Factor::SpouseFieldOfStudy => &SPOUSE_FIELD_OF_STUDY,
        Factor::JobOffer => &JOB_OFFER,
        Factor::Children => &CHILDREN,
        Factor::FamilyInQuebec => &FAMILY_IN_QUEBEC,
    }
}

/// Serializable listing of one factor's table.
#[derive(Debug, Clone, Serialize)]
pub struct FactorRubricView {
    pub factor: Factor,
    pub label: &'static str,
    pub group: FactorGroup,
    pub group_label: &'static str,
    pub options: &'static [RubricOption],
}

impl FactorRubricView {
    pub fn for_factor(factor: Factor) -> Self {
        Self {
            factor,
            label: factor.label(),
            group: factor.group(),
            group_label: factor.group().label(),
            options: table(factor).options(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct RubricView {
    pub version: &'static str,
    pub factors: Vec<FactorRubricView>,
}

pub fn rubric_view() -> RubricView {
    RubricView {
        version: RUBRIC_VERSION,
        factors: Factor::ALL
            .into_iter()
            .map(FactorRubricView::for_factor)
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn every_table_lists_a_zero_option() {
        for factor in Factor::ALL {
            assert!(table(factor).contains(0), "{factor} is missing a 0 option");
        }
    }

    #[test]
    fn points_and_keys_are_unique_within_each_table() {
        for factor in Factor::ALL {
            let options = table(factor).options();
            let points: HashSet<u16> = options.iter().map(|option| option.points).collect();
            let keys: HashSet<&str> = options.iter().map(|option| option.key).collect();
            assert_eq!(points.len(), options.len(), "{factor} repeats a point value");
            assert_eq!(keys.len(), options.len(), "{factor} repeats an option key");
        }
    }

    #[test]
    fn age_table_matches_published_brackets() {
        let points: Vec<u16> = table(Factor::Age)
            .options()
            .iter()
            .map(|option| option.points)
            .collect();
        assert_eq!(
            points,
            vec![0, 130, 124, 118, 112, 106, 100, 88, 76, 64, 52, 40, 26, 13]
        );
    }

    #[test]
    fn option_lookup_is_case_insensitive() {
        let option = table(Factor::JobOffer)
            .option("OUTSIDE_MONTREAL")
            .expect("option exists");
        assert_eq!(option.points, 380);
        assert_eq!(table(Factor::JobOffer).max_points(), 380);
        assert_eq!(
            table(Factor::SpouseAge).option_for_points(10).map(|o| o.key),
            Some("36_40")
        );
    }

    #[test]
    fn rubric_view_covers_all_factors() {
        let view = rubric_view();
        assert_eq!(view.version, RUBRIC_VERSION);
        assert_eq!(view.factors.len(), Factor::COUNT);
        assert_eq!(view.factors[0].factor, Factor::FrenchOralComprehension);
        assert_eq!(view.factors[0].options.len(), 7);
    }
}
