//! Everything one page render needs, computed in a single pass over the
//! loaded data. The same value backs the HTML page and the JSON summary.
use crate::analytics::{
    agreement_pct, branch_options, branch_sentiment_pivot, filter_reviews, prediction_preview,
    PredictionPreview, SentimentPivot, Summary, ML_PREVIEW_ROWS,
};
use crate::models::filter::FilterSelection;
use crate::models::prediction::PredictionSource;
use crate::models::review::Review;
use serde::{Deserialize, Serialize};

/// Leading rows of the unfiltered dataset shown at the bottom of the page.
pub const DATASET_PREVIEW_ROWS: usize = 5;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub enum MlPanel {
    /// No predictions file; the page shows an advisory instead.
    Missing { expected_path: String },
    /// The file exists but does not match the prediction schema.
    Invalid { reason: String },
    Ready {
        agreement_pct: Option<f64>,
        evaluated: usize,
        preview: Vec<PredictionPreview>,
    },
}

impl From<&PredictionSource> for MlPanel {
    fn from(source: &PredictionSource) -> Self {
        match source {
            PredictionSource::Missing { expected_path } => MlPanel::Missing {
                expected_path: expected_path.clone(),
            },
            PredictionSource::Invalid { reason } => MlPanel::Invalid {
                reason: reason.clone(),
            },
            PredictionSource::Loaded(predictions) => MlPanel::Ready {
                agreement_pct: agreement_pct(predictions),
                evaluated: predictions.len(),
                preview: prediction_preview(predictions, ML_PREVIEW_ROWS),
            },
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct DashboardView {
    pub selection: FilterSelection,
    pub branch_options: Vec<String>,
    /// Metrics over the filtered reviews.
    pub summary: Summary,
    /// Always over the full dataset.
    pub pivot: SentimentPivot,
    pub ml_panel: MlPanel,
    pub preview: Vec<Review>,
}

pub fn build_dashboard(
    reviews: &[Review],
    predictions: &PredictionSource,
    selection: FilterSelection,
) -> DashboardView {
    let filtered = filter_reviews(reviews, &selection);
    DashboardView {
        branch_options: branch_options(reviews),
        summary: Summary::compute(&filtered),
        pivot: branch_sentiment_pivot(reviews),
        ml_panel: MlPanel::from(predictions),
        preview: reviews.iter().take(DATASET_PREVIEW_ROWS).cloned().collect(),
        selection,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::prediction::MlPrediction;
    use crate::models::review::Sentiment;

    fn reviews() -> Vec<Review> {
        (0..8)
            .map(|i| {
                let branch = if i % 2 == 0 { "Central" } else { "Harbor" };
                Review::new(format!("r{i}"), (i % 5) + 1, "text", branch, "2024-03-01")
            })
            .collect()
    }

    fn missing() -> PredictionSource {
        PredictionSource::Missing {
            expected_path: "outputs/ml_predictions.csv".into(),
        }
    }

    #[test]
    fn test_metrics_follow_filter_but_pivot_and_preview_do_not() {
        let reviews = reviews();
        let selection = FilterSelection::from_query(Some("Harbor"), Some("positive")).unwrap();
        let view = build_dashboard(&reviews, &missing(), selection.clone());

        assert_eq!(view.selection, selection);
        let expected = reviews
            .iter()
            .filter(|r| r.branch_name == "Harbor" && r.sentiment == Sentiment::Positive)
            .count();
        assert_eq!(view.summary.total_reviews, expected);
        assert_eq!(view.summary.positive_pct, 100.0);

        let pivot_total: usize = view.pivot.rows.iter().map(|r| r.total()).sum();
        assert_eq!(pivot_total, reviews.len());
        assert_eq!(view.preview.len(), DATASET_PREVIEW_ROWS);
        assert_eq!(view.preview[0].review_id, "r0");
        assert_eq!(view.branch_options, vec!["All", "Central", "Harbor"]);
    }

    #[test]
    fn test_missing_predictions_become_advisory() {
        let view = build_dashboard(&reviews(), &missing(), FilterSelection::default());
        assert_eq!(
            view.ml_panel,
            MlPanel::Missing {
                expected_path: "outputs/ml_predictions.csv".into()
            }
        );
    }

    #[test]
    fn test_loaded_predictions_report_agreement() {
        let predictions = PredictionSource::Loaded(
            [true, true, false, true]
                .into_iter()
                .map(|ml_correct| MlPrediction {
                    review_text: "x".into(),
                    true_sentiment: "positive".into(),
                    predicted_sentiment: "positive".into(),
                    ml_correct,
                })
                .collect(),
        );
        let view = build_dashboard(&reviews(), &predictions, FilterSelection::default());
        match view.ml_panel {
            MlPanel::Ready { agreement_pct, evaluated, preview } => {
                assert_eq!(agreement_pct, Some(75.0));
                assert_eq!(evaluated, 4);
                assert_eq!(preview.len(), 4);
            }
            other => panic!("unexpected panel {other:?}"),
        }
    }

    #[test]
    fn test_empty_dataset_renders_zeroes() {
        let view = build_dashboard(&[], &missing(), FilterSelection::default());
        assert_eq!(view.summary.total_reviews, 0);
        assert_eq!(view.summary.positive_pct, 0.0);
        assert!(view.pivot.rows.is_empty());
        assert!(view.preview.is_empty());
        assert_eq!(view.branch_options, vec!["All"]);
    }
}
