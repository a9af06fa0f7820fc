// src/models/review.rs
use serde::{Deserialize, Serialize};
use std::fmt;

/// Ratings at or above this value count as positive business sentiment.
pub const POSITIVE_RATING_THRESHOLD: i64 = 4;

/// Business sentiment derived from a review's numeric rating.
///
/// Variant order matches the alphabetical order of the labels, so sorted
/// collections list `negative_or_neutral` before `positive`.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum Sentiment {
    NegativeOrNeutral,
    Positive,
}

impl Sentiment {
    pub const ALL: [Sentiment; 2] = [Sentiment::Positive, Sentiment::NegativeOrNeutral];

    pub fn from_rating(rating: i64) -> Self {
        if rating >= POSITIVE_RATING_THRESHOLD {
            Sentiment::Positive
        } else {
            Sentiment::NegativeOrNeutral
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Sentiment::NegativeOrNeutral => "negative_or_neutral",
            Sentiment::Positive => "positive",
        }
    }

    pub fn parse(label: &str) -> Option<Self> {
        Sentiment::ALL.into_iter().find(|s| s.as_str() == label)
    }

    pub fn is_positive(&self) -> bool {
        matches!(self, Sentiment::Positive)
    }
}

impl fmt::Display for Sentiment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Review {
    pub review_id: String,
    pub rating: i64,
    pub review_text: String,
    pub branch_name: String,
    pub review_date: String, // kept exactly as written in the CSV
    pub sentiment: Sentiment, // derived from `rating`, never read from disk
}

impl Review {
    pub fn new(
        review_id: impl Into<String>,
        rating: i64,
        review_text: impl Into<String>,
        branch_name: impl Into<String>,
        review_date: impl Into<String>,
    ) -> Self {
        Self {
            review_id: review_id.into(),
            rating,
            review_text: review_text.into(),
            branch_name: branch_name.into(),
            review_date: review_date.into(),
            sentiment: Sentiment::from_rating(rating),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_threshold_boundaries() {
        for rating in -3..=10 {
            let sentiment = Sentiment::from_rating(rating);
            assert_eq!(sentiment == Sentiment::Positive, rating >= 4, "rating {rating}");
        }
    }

    #[test]
    fn test_labels_round_trip_through_parse() {
        for sentiment in Sentiment::ALL {
            assert_eq!(Sentiment::parse(sentiment.as_str()), Some(sentiment));
        }
        assert_eq!(Sentiment::parse("neutral"), None);
        assert_eq!(Sentiment::parse("Positive"), None);
    }

    #[test]
    fn test_new_review_derives_sentiment() {
        let review = Review::new("7", 2, "Cold coffee", "Central", "2024-01-03");
        assert_eq!(review.sentiment, Sentiment::NegativeOrNeutral);
        let review = Review::new("8", 4, "Nice", "Central", "2024-01-03");
        assert_eq!(review.sentiment, Sentiment::Positive);
    }
}
