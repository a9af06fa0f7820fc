use crate::models::filter::ALL;
use crate::models::review::{Review, Sentiment};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct SentimentCount {
    pub sentiment: Sentiment,
    pub count: usize,
}

/// Headline numbers for the currently filtered reviews.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Summary {
    pub total_reviews: usize,
    pub positive_pct: f64,
    pub sentiment_counts: Vec<SentimentCount>,
}

impl Summary {
    pub fn compute(reviews: &[&Review]) -> Self {
        Self {
            total_reviews: reviews.len(),
            positive_pct: positive_pct(reviews.iter().copied()),
            sentiment_counts: sentiment_counts(reviews.iter().copied()),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct PivotRow {
    pub branch: String,
    pub counts: Vec<usize>, // aligned with `SentimentPivot::columns`
}

impl PivotRow {
    pub fn total(&self) -> usize {
        self.counts.iter().sum()
    }
}

/// Branch × sentiment review counts.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
pub struct SentimentPivot {
    pub columns: Vec<Sentiment>,
    pub rows: Vec<PivotRow>,
}

impl SentimentPivot {
    pub fn count(&self, branch: &str, sentiment: Sentiment) -> Option<usize> {
        let column = self.columns.iter().position(|s| *s == sentiment)?;
        let row = self.rows.iter().find(|row| row.branch == branch)?;
        row.counts.get(column).copied()
    }
}

/// Share of positive reviews in percent; `0.0` for an empty set.
pub fn positive_pct<'a, I>(reviews: I) -> f64
where
    I: IntoIterator<Item = &'a Review>,
{
    let (total, positive) = reviews.into_iter().fold((0usize, 0usize), |(total, positive), r| {
        (total + 1, positive + usize::from(r.sentiment.is_positive()))
    });
    if total == 0 {
        return 0.0;
    }
    100.0 * positive as f64 / total as f64
}

/// Occurrences of each observed label, most frequent first. Ties keep label order.
pub fn sentiment_counts<'a, I>(reviews: I) -> Vec<SentimentCount>
where
    I: IntoIterator<Item = &'a Review>,
{
    let mut tally: BTreeMap<Sentiment, usize> = BTreeMap::new();
    for review in reviews {
        *tally.entry(review.sentiment).or_default() += 1;
    }
    let mut counts: Vec<SentimentCount> = tally
        .into_iter()
        .map(|(sentiment, count)| SentimentCount { sentiment, count })
        .collect();
    // sort_by is stable, so equal counts stay in label order
    counts.sort_by(|a, b| b.count.cmp(&a.count));
    counts
}

/// Cross-tabulates the given reviews by branch and sentiment.
///
/// Callers pass the full dataset here, not the filtered subset: the table is
/// meant to compare every branch side by side whatever the sidebar says.
/// Rows are sorted by branch name; only labels that occur become columns and
/// absent combinations are zero.
pub fn branch_sentiment_pivot(reviews: &[Review]) -> SentimentPivot {
    let mut cells: BTreeMap<&str, BTreeMap<Sentiment, usize>> = BTreeMap::new();
    let mut columns: BTreeSet<Sentiment> = BTreeSet::new();
    for review in reviews {
        columns.insert(review.sentiment);
        *cells
            .entry(review.branch_name.as_str())
            .or_default()
            .entry(review.sentiment)
            .or_default() += 1;
    }
    let columns: Vec<Sentiment> = columns.into_iter().collect();
    let rows = cells
        .into_iter()
        .map(|(branch, by_sentiment)| PivotRow {
            branch: branch.to_string(),
            counts: columns
                .iter()
                .map(|s| by_sentiment.get(s).copied().unwrap_or(0))
                .collect(),
        })
        .collect();
    SentimentPivot { columns, rows }
}

/// `All` followed by every distinct branch name, sorted.
pub fn branch_options(reviews: &[Review]) -> Vec<String> {
    let branches: BTreeSet<&str> = reviews.iter().map(|r| r.branch_name.as_str()).collect();
    std::iter::once(ALL)
        .chain(branches)
        .map(str::to_string)
        .collect()
}

/// Renders a percentage with one decimal, e.g. `66.7%`.
pub fn format_pct(value: f64) -> String {
    format!("{value:.1}%")
}
