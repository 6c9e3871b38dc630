//! Research context supplied alongside the content.
//!
//! Only the parts the editor reads are modelled; any other fields in the
//! research payload are ignored on decode.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::{InputError, InputResult};
use crate::keywords::KeywordList;

/// A keyword suggested by research.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct KeywordSuggestion {
    /// The keyword or phrase.
    pub keyword: String,
    /// Relative search volume ("high", "medium", ...).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search_volume: Option<String>,
    /// Relative competition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub competition: Option<String>,
    /// Search intent ("informational", "tutorial", ...).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub intent: Option<String>,
}

/// A statistic with its attribution.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct Statistic {
    /// The statistic as prose.
    pub stat: String,
    /// Who published it.
    pub source: String,
}

/// An expert whose opinion was gathered.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct ExpertOpinion {
    /// Expert's name.
    pub expert: String,
    /// Expert's title or role.
    pub title: String,
}

/// Research output consumed by the editor.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct ResearchContext {
    /// Keyword suggestions, most important first.
    pub keywords: Vec<KeywordSuggestion>,
    /// Supporting statistics.
    pub statistics: Vec<Statistic>,
    /// Expert opinions.
    pub expert_opinions: Vec<ExpertOpinion>,
}

impl ResearchContext {
    /// Decode research output from JSON.
    pub fn from_json(json: &str) -> InputResult<Self> {
        serde_json::from_str(json).map_err(|source| InputError::Json {
            kind: "research",
            source,
        })
    }

    /// Suggested keywords in research order.
    pub fn keyword_list(&self) -> KeywordList {
        self.keywords.iter().map(|k| k.keyword.as_str()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_partial_research_and_ignores_extras() {
        let json = r#"{
            "topic": "Growth Hacking",
            "keywords": [
                {"keyword": "growth hacking", "search_volume": "high"},
                {"keyword": "growth hacking guide"}
            ],
            "statistics": [{"stat": "70% of startups", "source": "Report", "credibility": "high"}]
        }"#;
        let research = ResearchContext::from_json(json).unwrap();
        assert_eq!(research.keywords.len(), 2);
        assert_eq!(research.keywords[0].search_volume.as_deref(), Some("high"));
        assert_eq!(research.statistics[0].source, "Report");
        assert!(research.expert_opinions.is_empty());
    }

    #[test]
    fn keyword_list_preserves_order_and_skips_blank() {
        let research = ResearchContext {
            keywords: vec![
                KeywordSuggestion {
                    keyword: "first".into(),
                    ..Default::default()
                },
                KeywordSuggestion::default(),
                KeywordSuggestion {
                    keyword: "second".into(),
                    ..Default::default()
                },
            ],
            ..Default::default()
        };
        assert_eq!(research.keyword_list().as_slice(), ["first", "second"]);
    }

    #[test]
    fn invalid_json_errors() {
        let err = ResearchContext::from_json(r#"{"keywords": "growth"}"#).unwrap_err();
        assert!(err.to_string().starts_with("invalid research JSON"));
    }
}
