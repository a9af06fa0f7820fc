use crate::models::prediction::MlPrediction;
use serde::{Deserialize, Serialize};

/// Rows of the predictions file shown under the agreement metric.
pub const ML_PREVIEW_ROWS: usize = 10;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct PredictionPreview {
    pub review_text: String,
    pub true_sentiment: String,
    pub predicted_sentiment: String,
}

/// Percentage of predictions flagged correct, or `None` when there are no rows.
pub fn agreement_pct(predictions: &[MlPrediction]) -> Option<f64> {
    if predictions.is_empty() {
        return None;
    }
    let correct = predictions.iter().filter(|p| p.ml_correct).count();
    Some(100.0 * correct as f64 / predictions.len() as f64)
}

pub fn prediction_preview(predictions: &[MlPrediction], limit: usize) -> Vec<PredictionPreview> {
    predictions
        .iter()
        .take(limit)
        .map(|p| PredictionPreview {
            review_text: p.review_text.clone(),
            true_sentiment: p.true_sentiment.clone(),
            predicted_sentiment: p.predicted_sentiment.clone(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analytics::aggregate::format_pct;

    fn prediction(i: usize, ml_correct: bool) -> MlPrediction {
        MlPrediction {
            review_text: format!("review {i}"),
            true_sentiment: "positive".into(),
            predicted_sentiment: if ml_correct { "positive" } else { "negative_or_neutral" }.into(),
            ml_correct,
        }
    }

    #[test]
    fn test_agreement_three_of_four() {
        let predictions: Vec<MlPrediction> = [true, true, false, true]
            .into_iter()
            .enumerate()
            .map(|(i, ok)| prediction(i, ok))
            .collect();
        let pct = agreement_pct(&predictions).unwrap();
        assert_eq!(pct, 75.0);
        assert_eq!(format_pct(pct), "75.0%");
    }

    #[test]
    fn test_agreement_undefined_without_rows() {
        assert_eq!(agreement_pct(&[]), None);
    }

    #[test]
    fn test_preview_takes_leading_rows() {
        let predictions: Vec<MlPrediction> = (0..25).map(|i| prediction(i, i % 2 == 0)).collect();
        let preview = prediction_preview(&predictions, ML_PREVIEW_ROWS);
        assert_eq!(preview.len(), 10);
        assert_eq!(preview[0].review_text, "review 0");
        assert_eq!(preview[9].review_text, "review 9");
        assert_eq!(prediction_preview(&predictions[..3], ML_PREVIEW_ROWS).len(), 3);
    }
}
