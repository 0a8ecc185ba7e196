//! Core data model types for studywise.
//!
//! Difficulty tiers, validated marks, and the analysis result returned to
//! callers.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::StudywiseError;

/// Label shown for anything that is not a tier level 1-4.
pub const UNKNOWN_LABEL: &str = "Unknown";

/// Ordinal difficulty scale, easiest first.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case", try_from = "String")]
pub enum DifficultyTier {
    Easy = 1,
    Moderate = 2,
    Hard = 3,
    VeryHard = 4,
}

impl DifficultyTier {
    /// All tiers in ascending difficulty.
    pub const ALL: [DifficultyTier; 4] = [
        DifficultyTier::Easy,
        DifficultyTier::Moderate,
        DifficultyTier::Hard,
        DifficultyTier::VeryHard,
    ];

    /// Numeric level, 1 (easy) through 4 (very hard).
    pub fn level(self) -> u8 {
        self as u8
    }

    /// Inverse of [`DifficultyTier::level`].
    pub fn from_level(level: i64) -> Option<Self> {
        match level {
            1 => Some(DifficultyTier::Easy),
            2 => Some(DifficultyTier::Moderate),
            3 => Some(DifficultyTier::Hard),
            4 => Some(DifficultyTier::VeryHard),
            _ => None,
        }
    }

    /// Display label.
    pub fn label(self) -> &'static str {
        difficulty_label(i64::from(self.level()))
    }
}

impl fmt::Display for DifficultyTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for DifficultyTier {
    type Err = StudywiseError;

    /// Accepts labels in any case and spacing ("Very Hard", "very_hard",
    /// "veryhard") as well as the numeric levels "1" to "4".
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .trim()
            .chars()
            .filter(|c| !matches!(c, ' ' | '_' | '-'))
            .collect::<String>()
            .to_lowercase();

        match normalized.as_str() {
            "easy" => Ok(DifficultyTier::Easy),
            "moderate" => Ok(DifficultyTier::Moderate),
            "hard" => Ok(DifficultyTier::Hard),
            "veryhard" => Ok(DifficultyTier::VeryHard),
            other => match other.parse::<i64>() {
                Ok(level) => {
                    DifficultyTier::from_level(level).ok_or(StudywiseError::InvalidLevel(level))
                }
                Err(_) => Err(StudywiseError::UnknownTier(s.trim().to_string())),
            },
        }
    }
}

impl TryFrom<String> for DifficultyTier {
    type Error = StudywiseError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

/// Map a numeric level to its display label.
///
/// Total over every integer: levels outside 1-4 (including 0, used for an
/// unclassified personal difficulty) map to `"Unknown"`.
pub fn difficulty_label(level: i64) -> &'static str {
    match level {
        1 => "Easy",
        2 => "Moderate",
        3 => "Hard",
        4 => "Very Hard",
        _ => UNKNOWN_LABEL,
    }
}

/// Difficulty derived from a student's own marks.
///
/// `Unknown` means there were no valid marks to classify. It is never
/// folded into the hardest tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "status", content = "tier", rename_all = "snake_case")]
pub enum PersonalDifficulty {
    Classified(DifficultyTier),
    Unknown,
}

impl PersonalDifficulty {
    /// Numeric level; `0` for `Unknown`.
    pub fn level(self) -> u8 {
        match self {
            PersonalDifficulty::Classified(tier) => tier.level(),
            PersonalDifficulty::Unknown => 0,
        }
    }

    pub fn tier(self) -> Option<DifficultyTier> {
        match self {
            PersonalDifficulty::Classified(tier) => Some(tier),
            PersonalDifficulty::Unknown => None,
        }
    }

    pub fn is_unknown(self) -> bool {
        matches!(self, PersonalDifficulty::Unknown)
    }

    pub fn label(self) -> &'static str {
        difficulty_label(i64::from(self.level()))
    }
}

impl fmt::Display for PersonalDifficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl From<DifficultyTier> for PersonalDifficulty {
    fn from(tier: DifficultyTier) -> Self {
        PersonalDifficulty::Classified(tier)
    }
}

/// A test mark known to lie in `0..=100`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(try_from = "u8", into = "u8")]
pub struct Mark(u8);

impl Mark {
    pub const MAX: u8 = 100;

    pub fn new(value: u8) -> Option<Self> {
        (value <= Self::MAX).then_some(Mark(value))
    }

    pub fn value(self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for Mark {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Mark::new(value).ok_or_else(|| format!("mark {value} is outside 0-100"))
    }
}

impl From<Mark> for u8 {
    fn from(mark: Mark) -> Self {
        mark.0
    }
}

impl fmt::Display for Mark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Everything the engine reports for one subject.
///
/// Built once per analysis request and never updated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubjectAnalysisResult {
    /// Subject name as supplied by the caller.
    pub subject: String,
    /// Topics the caller selected. Carried through, not scored.
    #[serde(default)]
    pub topics: Vec<String>,
    /// Marks that survived sanitization, in input order.
    #[serde(default)]
    pub valid_marks: Vec<Mark>,
    /// Mean of `valid_marks`, absent when there are none.
    #[serde(default)]
    pub mean: Option<f64>,
    /// Subject-intrinsic estimate from the configured estimator.
    pub predicted_difficulty: DifficultyTier,
    /// Classification from the caller's own marks.
    pub personal_difficulty: PersonalDifficulty,
    /// One-sentence summary naming both difficulties.
    pub narrative: String,
    pub recommendations: Vec<String>,
    pub strengths: Vec<String>,
    pub weaknesses: Vec<String>,
}

/// One subject to analyze: the caller's snapshot of its form input.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisRequest {
    /// Subject name. Empty is allowed and echoed as-is.
    pub subject: String,
    /// Raw mark entries, possibly malformed.
    #[serde(default)]
    pub marks: Vec<String>,
    /// Selected topics.
    #[serde(default)]
    pub topics: Vec<String>,
}

/// A named collection of analysis requests.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisBatch {
    /// Unique identifier for this batch.
    pub id: String,
    /// Human-readable name.
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub requests: Vec<AnalysisRequest>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tier_levels_and_labels() {
        assert_eq!(DifficultyTier::Easy.level(), 1);
        assert_eq!(DifficultyTier::VeryHard.level(), 4);
        assert_eq!(DifficultyTier::Moderate.to_string(), "Moderate");
        assert_eq!(DifficultyTier::VeryHard.to_string(), "Very Hard");
        for tier in DifficultyTier::ALL {
            assert_eq!(DifficultyTier::from_level(i64::from(tier.level())), Some(tier));
        }
    }

    #[test]
    fn label_mapping_is_total() {
        assert_eq!(difficulty_label(1), "Easy");
        assert_eq!(difficulty_label(3), "Hard");
        assert_eq!(difficulty_label(0), "Unknown");
        assert_eq!(difficulty_label(5), "Unknown");
        assert_eq!(difficulty_label(-1), "Unknown");
        assert_eq!(difficulty_label(i64::MAX), "Unknown");
    }

    #[test]
    fn tier_parse() {
        assert_eq!("easy".parse::<DifficultyTier>().unwrap(), DifficultyTier::Easy);
        assert_eq!(
            "Very Hard".parse::<DifficultyTier>().unwrap(),
            DifficultyTier::VeryHard
        );
        assert_eq!(
            "very_hard".parse::<DifficultyTier>().unwrap(),
            DifficultyTier::VeryHard
        );
        assert_eq!("3".parse::<DifficultyTier>().unwrap(), DifficultyTier::Hard);
        assert_eq!(
            "9".parse::<DifficultyTier>(),
            Err(StudywiseError::InvalidLevel(9))
        );
        assert_eq!(
            "brutal".parse::<DifficultyTier>(),
            Err(StudywiseError::UnknownTier("brutal".into()))
        );
    }

    #[test]
    fn personal_difficulty_unknown_is_level_zero() {
        assert_eq!(PersonalDifficulty::Unknown.level(), 0);
        assert_eq!(PersonalDifficulty::Unknown.label(), "Unknown");
        assert!(PersonalDifficulty::Unknown.tier().is_none());
        let hard = PersonalDifficulty::from(DifficultyTier::Hard);
        assert_eq!(hard.level(), 3);
        assert_eq!(hard.to_string(), "Hard");
    }

    #[test]
    fn personal_difficulty_json_shape() {
        let json = serde_json::to_string(&PersonalDifficulty::Classified(
            DifficultyTier::VeryHard,
        ))
        .unwrap();
        assert_eq!(json, r#"{"status":"classified","tier":"very_hard"}"#);
        let json = serde_json::to_string(&PersonalDifficulty::Unknown).unwrap();
        assert_eq!(json, r#"{"status":"unknown"}"#);
    }

    #[test]
    fn tier_deserializes_through_label_parser() {
        let tier: DifficultyTier = serde_json::from_str(r#""Very Hard""#).unwrap();
        assert_eq!(tier, DifficultyTier::VeryHard);
        let back: PersonalDifficulty =
            serde_json::from_str(r#"{"status":"classified","tier":"very_hard"}"#).unwrap();
        assert_eq!(back, PersonalDifficulty::Classified(DifficultyTier::VeryHard));

        let err = serde_json::from_str::<DifficultyTier>(r#""brutal""#).unwrap_err();
        assert!(err.to_string().contains("unknown difficulty tier: brutal"));
    }

    #[test]
    fn mark_bounds() {
        assert_eq!(Mark::new(0).map(Mark::value), Some(0));
        assert_eq!(Mark::new(100).map(Mark::value), Some(100));
        assert!(Mark::new(101).is_none());
        assert!(serde_json::from_str::<Mark>("101").is_err());
        assert_eq!(serde_json::from_str::<Mark>("42").unwrap().value(), 42);
    }
}
