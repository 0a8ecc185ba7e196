//! Presentation text attached to every analysis result.

use crate::model::{DifficultyTier, PersonalDifficulty};

/// General study advice, shown in this order for every subject.
pub const RECOMMENDATIONS: [&str; 5] = [
    "Create a structured study schedule",
    "Focus on understanding core concepts",
    "Practice with past exam questions",
    "Use active recall techniques",
    "Join study groups for collaborative learning",
];

/// One-sentence summary naming the subject and both difficulty labels.
pub fn narrative(
    subject: &str,
    predicted: DifficultyTier,
    personal: PersonalDifficulty,
) -> String {
    format!(
        "Based on comprehensive analysis of {subject}, the subject appears to be {predicted} \
         in general, while your personal experience indicates it's {personal} for you."
    )
}

pub fn recommendations() -> Vec<String> {
    RECOMMENDATIONS.iter().map(|r| r.to_string()).collect()
}
