//! Link suggestions.
//!
//! Internal links are a fixed set of placements every post benefits from.
//! External links cite the statistics and experts gathered by research.
//! Neither looks at a real link graph.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::research::ResearchContext;

/// Most external links suggested per post.
pub const MAX_EXTERNAL_LINKS: usize = 5;

/// Characters of a statistic kept in its anchor text.
const STAT_ANCHOR_CHARS: usize = 50;

/// A suggested link to another page on the same site.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct InternalLink {
    /// Visible link text.
    pub anchor_text: String,
    /// Site-relative target path.
    pub suggested_link: String,
    /// Where in the post the link belongs.
    pub position: String,
    /// Why the link helps.
    pub reason: String,
}

/// A suggested citation of an outside source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ExternalLink {
    /// Visible link text.
    pub anchor_text: String,
    /// Placeholder target URL.
    pub suggested_link: String,
    /// Who is being cited.
    pub source: String,
    /// What the citation adds.
    pub purpose: String,
}

const INTERNAL: [(&str, &str, &str, &str); 3] = [
    (
        "comprehensive guide",
        "/related-topic-guide",
        "introduction",
        "Provides additional value to readers",
    ),
    (
        "best practices",
        "/best-practices-article",
        "main content",
        "Supports the main topic with detailed information",
    ),
    (
        "case studies",
        "/case-studies",
        "conclusion",
        "Offers proof of concept and real examples",
    ),
];

/// The standard internal link placements.
pub fn suggest_internal_links() -> Vec<InternalLink> {
    INTERNAL
        .iter()
        .map(|(anchor, link, position, reason)| InternalLink {
            anchor_text: (*anchor).to_string(),
            suggested_link: (*link).to_string(),
            position: (*position).to_string(),
            reason: (*reason).to_string(),
        })
        .collect()
}

/// Citations for research statistics, then experts, capped at
/// [`MAX_EXTERNAL_LINKS`].
#[tracing::instrument(skip_all, fields(
    statistics = research.statistics.len(),
    experts = research.expert_opinions.len(),
))]
pub fn suggest_external_links(research: &ResearchContext) -> Vec<ExternalLink> {
    let stats = research.statistics.iter().map(|stat| {
        let head: String = stat.stat.chars().take(STAT_ANCHOR_CHARS).collect();
        ExternalLink {
            anchor_text: format!("{head}..."),
            suggested_link: "https://source-link.com".to_string(),
            source: stat.source.clone(),
            purpose: "Citation for credibility".to_string(),
        }
    });

    let experts = research.expert_opinions.iter().map(|expert| ExternalLink {
        anchor_text: format!("{}, {}", expert.expert, expert.title),
        suggested_link: "https://expert-profile.com".to_string(),
        source: "Expert Profile".to_string(),
        purpose: "Authority and credibility".to_string(),
    });

    stats.chain(experts).take(MAX_EXTERNAL_LINKS).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::research::{ExpertOpinion, Statistic};

    #[test]
    fn three_internal_links() {
        let links = suggest_internal_links();
        assert_eq!(links.len(), 3);
        assert_eq!(links[0].suggested_link, "/related-topic-guide");
        assert_eq!(links[2].position, "conclusion");
    }

    #[test]
    fn no_research_no_external_links() {
        assert!(suggest_external_links(&ResearchContext::default()).is_empty());
    }

    #[test]
    fn statistics_come_before_experts() {
        let research = ResearchContext {
            statistics: vec![Statistic {
                stat: "s".repeat(80),
                source: "Industry Report 2024".into(),
            }],
            expert_opinions: vec![ExpertOpinion {
                expert: "Dr. Sarah Johnson".into(),
                title: "Research Director".into(),
            }],
            ..Default::default()
        };
        let links = suggest_external_links(&research);
        assert_eq!(links.len(), 2);
        assert_eq!(links[0].anchor_text, format!("{}...", "s".repeat(50)));
        assert_eq!(links[0].source, "Industry Report 2024");
        assert_eq!(links[1].anchor_text, "Dr. Sarah Johnson, Research Director");
        assert_eq!(links[1].source, "Expert Profile");
    }

    #[test]
    fn capped_at_five() {
        let research = ResearchContext {
            statistics: (0..4)
                .map(|i| Statistic {
                    stat: format!("stat {i}"),
                    source: "src".into(),
                })
                .collect(),
            expert_opinions: (0..4)
                .map(|i| ExpertOpinion {
                    expert: format!("expert {i}"),
                    title: "t".into(),
                })
                .collect(),
            ..Default::default()
        };
        let links = suggest_external_links(&research);
        assert_eq!(links.len(), MAX_EXTERNAL_LINKS);
        assert_eq!(links[4].anchor_text, "expert 0, t");
    }
}
