// src/models/prediction.rs
use serde::{Deserialize, Serialize};

/// One row of the offline model's output file.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct MlPrediction {
    pub review_text: String,
    pub true_sentiment: String,
    pub predicted_sentiment: String,
    pub ml_correct: bool, // whether the model agreed with the rating-derived label
}

/// What was found at the predictions path for the current request.
#[derive(Debug, Clone, PartialEq)]
pub enum PredictionSource {
    Missing { expected_path: String },
    Invalid { reason: String },
    Loaded(Vec<MlPrediction>),
}
