//! Threshold rules that turn valid marks into a personal difficulty and a
//! strengths/weaknesses breakdown.

use serde::{Deserialize, Serialize};

use crate::marks::mean;
use crate::model::{DifficultyTier, Mark, PersonalDifficulty};

/// Lowest mean classified as easy.
pub const EASY_MIN_MEAN: f64 = 85.0;
/// Lowest mean classified as moderate.
pub const MODERATE_MIN_MEAN: f64 = 70.0;
/// Lowest mean classified as hard. Anything below is very hard.
pub const HARD_MIN_MEAN: f64 = 55.0;

/// Mean at or above which consistent high performance is reported.
pub const HIGH_PERFORMANCE_MEAN: f64 = 80.0;
/// Marks below this count as an inconsistent result.
pub const RELIABLE_MARK: u8 = 60;
/// Mean below which core concepts need work.
pub const WEAK_CORE_MEAN: f64 = 65.0;

pub const CONSISTENT_HIGH_PERFORMANCE: &str = "Consistent high performance";
pub const STRONG_FUNDAMENTALS: &str = "Strong grasp of fundamental concepts";
pub const RELIABLE_PERFORMANCE: &str = "Reliable performance across tests";
pub const INCONSISTENT_PERFORMANCE: &str = "Inconsistent performance in some tests";
pub const STRENGTHEN_CORE: &str = "Need to strengthen core concepts";
pub const EXTRA_PRACTICE: &str = "Consider additional practice and revision";

/// Classify a mean mark. Thresholds are checked from easiest down.
pub fn tier_for_mean(mean: f64) -> DifficultyTier {
    if mean >= EASY_MIN_MEAN {
        DifficultyTier::Easy
    } else if mean >= MODERATE_MIN_MEAN {
        DifficultyTier::Moderate
    } else if mean >= HARD_MIN_MEAN {
        DifficultyTier::Hard
    } else {
        DifficultyTier::VeryHard
    }
}

/// Personal difficulty from valid marks; `Unknown` when there are none.
pub fn classify_personal_difficulty(marks: &[Mark]) -> PersonalDifficulty {
    match mean(marks) {
        Some(avg) => PersonalDifficulty::Classified(tier_for_mean(avg)),
        None => PersonalDifficulty::Unknown,
    }
}

/// Qualitative performance notes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PerformanceProfile {
    pub strengths: Vec<String>,
    pub weaknesses: Vec<String>,
}

/// Apply the strengths/weaknesses rules.
///
/// Rules are independent and append in a fixed order, so any combination
/// may fire. No valid marks yields an empty profile.
pub fn analyze_performance(marks: &[Mark]) -> PerformanceProfile {
    let Some(avg) = mean(marks) else {
        return PerformanceProfile::default();
    };

    let mut profile = PerformanceProfile::default();

    if avg >= HIGH_PERFORMANCE_MEAN {
        profile.strengths.push(CONSISTENT_HIGH_PERFORMANCE.into());
        profile.strengths.push(STRONG_FUNDAMENTALS.into());
    }
    if marks.iter().all(|m| m.value() >= RELIABLE_MARK) {
        profile.strengths.push(RELIABLE_PERFORMANCE.into());
    }
    if marks.iter().any(|m| m.value() < RELIABLE_MARK) {
        profile.weaknesses.push(INCONSISTENT_PERFORMANCE.into());
    }
    if avg < WEAK_CORE_MEAN {
        profile.weaknesses.push(STRENGTHEN_CORE.into());
        profile.weaknesses.push(EXTRA_PRACTICE.into());
    }

    profile
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::marks::sanitize_marks;

    fn marks(raw: &[&str]) -> Vec<Mark> {
        sanitize_marks(raw)
    }

    #[test]
    fn tier_boundaries_are_inclusive() {
        assert_eq!(tier_for_mean(100.0), DifficultyTier::Easy);
        assert_eq!(tier_for_mean(85.0), DifficultyTier::Easy);
        assert_eq!(tier_for_mean(84.99), DifficultyTier::Moderate);
        assert_eq!(tier_for_mean(70.0), DifficultyTier::Moderate);
        assert_eq!(tier_for_mean(69.5), DifficultyTier::Hard);
        assert_eq!(tier_for_mean(55.0), DifficultyTier::Hard);
        assert_eq!(tier_for_mean(54.9), DifficultyTier::VeryHard);
        assert_eq!(tier_for_mean(0.0), DifficultyTier::VeryHard);
    }

    #[test]
    fn classify_from_marks() {
        assert_eq!(
            classify_personal_difficulty(&marks(&["80", "90"])),
            PersonalDifficulty::Classified(DifficultyTier::Easy)
        );
        assert_eq!(
            classify_personal_difficulty(&marks(&["70", "70"])),
            PersonalDifficulty::Classified(DifficultyTier::Moderate)
        );
        assert_eq!(
            classify_personal_difficulty(&marks(&["40", "55"])),
            PersonalDifficulty::Classified(DifficultyTier::VeryHard)
        );
    }

    #[test]
    fn classify_empty_is_unknown_not_very_hard() {
        assert_eq!(classify_personal_difficulty(&[]), PersonalDifficulty::Unknown);
    }

    #[test]
    fn zero_marks_are_classified() {
        assert_eq!(
            classify_personal_difficulty(&marks(&["0", "0"])),
            PersonalDifficulty::Classified(DifficultyTier::VeryHard)
        );
    }

    #[test]
    fn high_performer_profile() {
        let profile = analyze_performance(&marks(&["90", "85", "95"]));
        assert_eq!(
            profile.strengths,
            vec![
                CONSISTENT_HIGH_PERFORMANCE,
                STRONG_FUNDAMENTALS,
                RELIABLE_PERFORMANCE
            ]
        );
        assert!(profile.weaknesses.is_empty());
    }

    #[test]
    fn struggling_profile() {
        let profile = analyze_performance(&marks(&["40", "55"]));
        assert!(profile.strengths.is_empty());
        assert_eq!(
            profile.weaknesses,
            vec![INCONSISTENT_PERFORMANCE, STRENGTHEN_CORE, EXTRA_PRACTICE]
        );
    }

    #[test]
    fn mean_of_sixty_five_is_not_weak() {
        let profile = analyze_performance(&marks(&["60", "65", "70"]));
        assert_eq!(profile.strengths, vec![RELIABLE_PERFORMANCE]);
        assert!(profile.weaknesses.is_empty());
    }

    #[test]
    fn strong_mean_with_one_bad_test() {
        // mean 81.25: high performance, but one result below 60
        let profile = analyze_performance(&marks(&["100", "100", "100", "25"]));
        assert_eq!(
            profile.strengths,
            vec![CONSISTENT_HIGH_PERFORMANCE, STRONG_FUNDAMENTALS]
        );
        assert_eq!(profile.weaknesses, vec![INCONSISTENT_PERFORMANCE]);
    }

    #[test]
    fn empty_profile_for_no_marks() {
        assert_eq!(analyze_performance(&[]), PerformanceProfile::default());
    }
}
