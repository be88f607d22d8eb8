use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::rubric;

/// Independently scored attribute of the candidate or spouse profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Factor {
    FrenchOralComprehension,
    FrenchOralProduction,
    FrenchWrittenComprehension,
    FrenchWrittenProduction,
    EnglishOralComprehension,
    EnglishOralProduction,
    EnglishWrittenComprehension,
    EnglishWrittenProduction,
    Age,
    Education,
    FieldOfStudy,
    WorkExperience,
    QuebecDiploma,
    QuebecWorkExperience,
    SpouseFrenchOral,
    SpouseAge,
    SpouseEducation,
    SpouseFieldOfStudy,
    JobOffer,
    Children,
    FamilyInQuebec,
}

impl Factor {
    pub const COUNT: usize = 21;

    /// Every factor in rubric order.
    pub const ALL: [Factor; Factor::COUNT] = [
        Factor::FrenchOralComprehension,
        Factor::FrenchOralProduction,
        Factor::FrenchWrittenComprehension,
        Factor::FrenchWrittenProduction,
        Factor::EnglishOralComprehension,
        Factor::EnglishOralProduction,
        Factor::EnglishWrittenComprehension,
        Factor::EnglishWrittenProduction,
        Factor::Age,
        Factor::Education,
        Factor::FieldOfStudy,
        Factor::WorkExperience,
        Factor::QuebecDiploma,
        Factor::QuebecWorkExperience,
        Factor::SpouseFrenchOral,
        Factor::SpouseAge,
        Factor::SpouseEducation,
        Factor::SpouseFieldOfStudy,
        Factor::JobOffer,
        Factor::Children,
        Factor::FamilyInQuebec,
    ];

    /// Wire key, identical to the serde representation.
    pub const fn key(self) -> &'static str {
        match self {
            Factor::FrenchOralComprehension => "frenchOralComprehension",
            Factor::FrenchOralProduction => "frenchOralProduction",
            Factor::FrenchWrittenComprehension => "frenchWrittenComprehension",
            Factor::FrenchWrittenProduction => "frenchWrittenProduction",
            Factor::EnglishOralComprehension => "englishOralComprehension",
            Factor::EnglishOralProduction => "englishOralProduction",
            Factor::EnglishWrittenComprehension => "englishWrittenComprehension",
            Factor::EnglishWrittenProduction => "englishWrittenProduction",
            Factor::Age => "age",
            Factor::Education => "education",
            Factor::FieldOfStudy => "fieldOfStudy",
            Factor::WorkExperience => "workExperience",
            Factor::QuebecDiploma => "quebecDiploma",
            Factor::QuebecWorkExperience => "quebecWorkExperience",
            Factor::SpouseFrenchOral => "spouseFrenchOral",
            Factor::SpouseAge => "spouseAge",
            Factor::SpouseEducation => "spouseEducation",
            Factor::SpouseFieldOfStudy => "spouseFieldOfStudy",
            Factor::JobOffer => "jobOffer",
            Factor::Children => "children",
            Factor::FamilyInQuebec => "familyInQuebec",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Factor::FrenchOralComprehension => "French oral comprehension",
            Factor::FrenchOralProduction => "French oral production",
            Factor::FrenchWrittenComprehension => "French written comprehension",
            Factor::FrenchWrittenProduction => "French written production",
            Factor::EnglishOralComprehension => "English oral comprehension",
            Factor::EnglishOralProduction => "English oral production",
            Factor::EnglishWrittenComprehension => "English written comprehension",
            Factor::EnglishWrittenProduction => "English written production",
            Factor::Age => "Age",
            Factor::Education => "Education level",
            Factor::FieldOfStudy => "Field of study",
            Factor::WorkExperience => "Work experience",
            Factor::QuebecDiploma => "Quebec diploma",
            Factor::QuebecWorkExperience => "Quebec work experience",
            Factor::SpouseFrenchOral => "Spouse French oral skills",
            Factor::SpouseAge => "Spouse age",
            Factor::SpouseEducation => "Spouse education",
            Factor::SpouseFieldOfStudy => "Spouse field of study",
            Factor::JobOffer => "Validated job offer",
            Factor::Children => "Dependent children",
            Factor::FamilyInQuebec => "Close family in Quebec",
        }
    }

    pub const fn group(self) -> FactorGroup {
        match self {
            Factor::FrenchOralComprehension
            | Factor::FrenchOralProduction
            | Factor::FrenchWrittenComprehension
            | Factor::FrenchWrittenProduction
            | Factor::EnglishOralComprehension
            | Factor::EnglishOralProduction
            | Factor::EnglishWrittenComprehension
            | Factor::EnglishWrittenProduction => FactorGroup::Language,
            Factor::Age | Factor::Education | Factor::FieldOfStudy | Factor::WorkExperience => {
                FactorGroup::HumanCapital
            }
            Factor::QuebecDiploma | Factor::QuebecWorkExperience => FactorGroup::LocalTies,
            Factor::SpouseFrenchOral
            | Factor::SpouseAge
            | Factor::SpouseEducation
            | Factor::SpouseFieldOfStudy => FactorGroup::Spousal,
            Factor::JobOffer | Factor::Children | Factor::FamilyInQuebec => {
                FactorGroup::Additional
            }
        }
    }

    /// Official language measured by this factor, if it is one of the eight candidate skills.
    pub const fn language(self) -> Option<Language> {
        match self {
            Factor::FrenchOralComprehension
            | Factor::FrenchOralProduction
            | Factor::FrenchWrittenComprehension
            | Factor::FrenchWrittenProduction => Some(Language::French),
            Factor::EnglishOralComprehension
            | Factor::EnglishOralProduction
            | Factor::EnglishWrittenComprehension
            | Factor::EnglishWrittenProduction => Some(Language::English),
            _ => None,
        }
    }
}

impl fmt::Display for Factor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Factor {
    type Err = ScoringError;

    /// Accepts the camelCase wire key or its snake_case spelling.
    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let normalized: String = raw
            .trim()
            .chars()
            .filter(|ch| *ch != '_' && *ch != '-')
            .collect::<String>()
            .to_ascii_lowercase();

        Factor::ALL
            .into_iter()
            .find(|factor| factor.key().to_ascii_lowercase() == normalized)
            .ok_or_else(|| ScoringError::UnknownFactor(raw.trim().to_string()))
    }
}

/// Sections of the points breakdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FactorGroup {
    Language,
    HumanCapital,
    LocalTies,
    Spousal,
    Additional,
}

impl FactorGroup {
    pub const ALL: [FactorGroup; 5] = [
        FactorGroup::Language,
        FactorGroup::HumanCapital,
        FactorGroup::LocalTies,
        FactorGroup::Spousal,
        FactorGroup::Additional,
    ];

    pub const fn label(self) -> &'static str {
        match self {
            FactorGroup::Language => "Language skills",
            FactorGroup::HumanCapital => "Human capital",
            FactorGroup::LocalTies => "Quebec factors",
            FactorGroup::Spousal => "Spouse factors",
            FactorGroup::Additional => "Additional factors",
        }
    }

    pub fn factors(self) -> impl Iterator<Item = Factor> {
        Factor::ALL
            .into_iter()
            .filter(move |factor| factor.group() == self)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Language {
    French,
    English,
}

/// Selected points for every factor.
///
/// Each value is guaranteed to appear in the factor's rubric table. Unset factors hold 0,
/// which every table also lists, so an unanswered factor reads exactly like its
/// lowest-scoring answer. Updates return a new state rather than mutating in place.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(
    try_from = "BTreeMap<Factor, u16>",
    into = "BTreeMap<Factor, u16>"
)]
pub struct ScoreState {
    points: BTreeMap<Factor, u16>,
}

impl Default for ScoreState {
    fn default() -> Self {
        Self {
            points: Factor::ALL.into_iter().map(|factor| (factor, 0)).collect(),
        }
    }
}

impl ScoreState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn points(&self, factor: Factor) -> u16 {
        self.points.get(&factor).copied().unwrap_or_default()
    }

    /// Factor values in rubric order.
    pub fn iter(&self) -> impl Iterator<Item = (Factor, u16)> + '_ {
        self.points.iter().map(|(factor, points)| (*factor, *points))
    }

    /// Return a copy with `factor` set to `points`, rejecting values absent from its table.
    pub fn with_factor(&self, factor: Factor, points: u16) -> Result<Self, ScoringError> {
        if !rubric::table(factor).contains(points) {
            return Err(ScoringError::InvalidSelection { factor, points });
        }

        let mut next = self.clone();
        next.points.insert(factor, points);
        Ok(next)
    }

    /// Same as [`ScoreState::with_factor`] but selects by rubric option key.
    pub fn with_option(&self, factor: Factor, option_key: &str) -> Result<Self, ScoringError> {
        let option = rubric::table(factor).option(option_key).ok_or_else(|| {
            ScoringError::UnknownOption {
                factor,
                key: option_key.to_string(),
            }
        })?;
        self.with_factor(factor, option.points)
    }
}

impl TryFrom<BTreeMap<Factor, u16>> for ScoreState {
    type Error = ScoringError;

    /// Missing factors default to 0.
    fn try_from(selections: BTreeMap<Factor, u16>) -> Result<Self, Self::Error> {
        selections
            .into_iter()
            .try_fold(ScoreState::default(), |state, (factor, points)| {
                state.with_factor(factor, points)
            })
    }
}

impl From<ScoreState> for BTreeMap<Factor, u16> {
    fn from(state: ScoreState) -> Self {
        state.points
    }
}

/// Input validation failures raised at the assignment boundary.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ScoringError {
    #[error("{points} is not a rubric value for {factor}")]
    InvalidSelection { factor: Factor, points: u16 },
    #[error("'{key}' is not a rubric option for {factor}")]
    UnknownOption { factor: Factor, key: String },
    #[error("unknown factor '{0}'")]
    UnknownFactor(String),
}
