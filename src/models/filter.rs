// src/models/filter.rs
use crate::error::{DashboardError, Result};
use crate::models::review::Sentiment;
use serde::{Deserialize, Serialize};

/// Sentinel shown in both selects meaning "no constraint".
pub const ALL: &str = "All";

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
pub enum BranchFilter {
    #[default]
    All,
    Branch(String),
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SentimentFilter {
    #[default]
    All,
    Only(Sentiment),
}

/// The two sidebar selections. `All`/`All` keeps every review.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
pub struct FilterSelection {
    pub branch: BranchFilter,
    pub sentiment: SentimentFilter,
}

impl BranchFilter {
    /// Branch names are matched exactly, so the value is not trimmed.
    pub fn parse(value: &str) -> Self {
        if value.is_empty() || value == ALL {
            BranchFilter::All
        } else {
            BranchFilter::Branch(value.to_string())
        }
    }

    pub fn label(&self) -> &str {
        match self {
            BranchFilter::All => ALL,
            BranchFilter::Branch(name) => name,
        }
    }

    pub fn matches(&self, branch_name: &str) -> bool {
        match self {
            BranchFilter::All => true,
            BranchFilter::Branch(name) => name == branch_name,
        }
    }
}

impl SentimentFilter {
    /// Labels offered by the sentiment select, in display order.
    pub fn options() -> Vec<&'static str> {
        let mut options = vec![ALL];
        options.extend(Sentiment::ALL.iter().map(Sentiment::as_str));
        options
    }

    pub fn parse(value: &str) -> Result<Self> {
        let value = value.trim();
        if value.is_empty() || value == ALL {
            return Ok(SentimentFilter::All);
        }
        Sentiment::parse(value)
            .map(SentimentFilter::Only)
            .ok_or_else(|| DashboardError::InvalidFilter(format!("unknown sentiment `{value}`")))
    }

    pub fn label(&self) -> &'static str {
        match self {
            SentimentFilter::All => ALL,
            SentimentFilter::Only(sentiment) => sentiment.as_str(),
        }
    }

    pub fn matches(&self, sentiment: Sentiment) -> bool {
        match self {
            SentimentFilter::All => true,
            SentimentFilter::Only(wanted) => *wanted == sentiment,
        }
    }
}

impl FilterSelection {
    /// Builds a selection from raw query-string values; absent or empty means `All`.
    pub fn from_query(branch: Option<&str>, sentiment: Option<&str>) -> Result<Self> {
        Ok(Self {
            branch: branch.map(BranchFilter::parse).unwrap_or_default(),
            sentiment: match sentiment {
                Some(value) => SentimentFilter::parse(value)?,
                None => SentimentFilter::All,
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_and_sentinel_mean_all() {
        let selection = FilterSelection::from_query(Some(""), Some("All")).unwrap();
        assert_eq!(selection, FilterSelection::default());
        let selection = FilterSelection::from_query(None, None).unwrap();
        assert_eq!(selection, FilterSelection::default());
    }

    #[test]
    fn test_named_values_are_parsed() {
        let selection = FilterSelection::from_query(Some("Central"), Some("positive")).unwrap();
        assert_eq!(selection.branch, BranchFilter::Branch("Central".into()));
        assert_eq!(selection.sentiment, SentimentFilter::Only(Sentiment::Positive));
        assert_eq!(selection.branch.label(), "Central");
        assert_eq!(selection.sentiment.label(), "positive");
    }

    #[test]
    fn test_unknown_sentiment_is_rejected() {
        let err = FilterSelection::from_query(None, Some("neutral")).unwrap_err();
        assert!(matches!(err, DashboardError::InvalidFilter(_)));
    }

    #[test]
    fn test_padded_branch_names_survive_parsing() {
        let filter = BranchFilter::parse("Central ");
        assert_eq!(filter, BranchFilter::Branch("Central ".into()));
        assert!(filter.matches("Central "));
        assert!(!filter.matches("Central"));
    }

    #[test]
    fn test_branch_match_is_exact() {
        let filter = BranchFilter::parse("Central");
        assert!(filter.matches("Central"));
        assert!(!filter.matches("central"));
        assert!(!filter.matches("Central "));
    }

    #[test]
    fn test_sentiment_options_order() {
        assert_eq!(
            SentimentFilter::options(),
            vec!["All", "positive", "negative_or_neutral"]
        );
    }
}
