//! Coarse performance forecast derived from the aggregate score.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::content::ContentRecord;
use crate::score::SeoScore;
use crate::word_lists::SHAREABLE_TITLE_MARKERS;

/// Word count at which engagement is forecast as high.
pub const ENGAGING_WORD_COUNT: usize = 1500;

/// Categorical forecast level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum Potential {
    /// Low potential.
    Low,
    /// Medium potential.
    Medium,
    /// High potential.
    High,
}

impl Potential {
    /// Lowercase label.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }
}

impl std::fmt::Display for Potential {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Performance forecast.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct PerformancePrediction {
    /// Ranking potential tier from the score percentage.
    pub search_ranking_potential: Potential,
    /// Traffic band for the same tier.
    pub estimated_organic_traffic: String,
    /// High for long-form content, otherwise medium.
    pub engagement_potential: Potential,
    /// High for how-to and guide titles, otherwise medium.
    pub social_sharing_potential: Potential,
}

/// Forecast performance from the aggregate score and the record.
#[tracing::instrument(skip_all, fields(percentage = score.percentage))]
pub fn predict_performance(content: &ContentRecord, score: &SeoScore) -> PerformancePrediction {
    let (search_ranking_potential, traffic) = if score.percentage >= 80.0 {
        (Potential::High, "1000-5000 visits/month")
    } else if score.percentage >= 60.0 {
        (Potential::Medium, "500-1000 visits/month")
    } else {
        (Potential::Low, "100-500 visits/month")
    };

    let engagement_potential = if content.word_count >= ENGAGING_WORD_COUNT {
        Potential::High
    } else {
        Potential::Medium
    };

    let title = content.title.to_lowercase();
    let social_sharing_potential = if SHAREABLE_TITLE_MARKERS.iter().any(|m| title.contains(m)) {
        Potential::High
    } else {
        Potential::Medium
    };

    PerformancePrediction {
        search_ranking_potential,
        estimated_organic_traffic: traffic.to_string(),
        engagement_potential,
        social_sharing_potential,
    }
}
