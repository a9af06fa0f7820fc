//! CSV readers for the review dataset and the optional predictions file.
//!
//! Both files are checked against a fixed set of required columns before any
//! row is read, so a renamed column fails loudly instead of producing empty
//! metrics. Extra columns are ignored.
use crate::error::{DashboardError, Result};
use crate::models::prediction::{MlPrediction, PredictionSource};
use crate::models::review::Review;
use csv::{ReaderBuilder, StringRecord, Trim};
use leptos::logging::{error, log, warn};
use serde::Deserialize;
use std::fs::File;
use std::io::Read;
use std::path::Path;

pub const REVIEW_COLUMNS: [&str; 5] = [
    "review_id",
    "rating",
    "review_text",
    "branch_name",
    "review_date",
];

pub const PREDICTION_COLUMNS: [&str; 4] = [
    "review_text",
    "true_sentiment",
    "predicted_sentiment",
    "ml_correct",
];

#[derive(Debug, Deserialize)]
struct ReviewRow {
    review_id: String,
    rating: String,
    review_text: String,
    branch_name: String,
    review_date: String,
}

#[derive(Debug, Deserialize)]
struct PredictionRow {
    review_text: String,
    true_sentiment: String,
    predicted_sentiment: String,
    ml_correct: String,
}

pub fn load_reviews(path: &Path) -> Result<Vec<Review>> {
    let file = File::open(path).map_err(|e| DashboardError::unavailable(path, e))?;
    let reviews = read_reviews(file, path)?;
    log!("[LOADER] Loaded {} reviews from {}", reviews.len(), path.display());
    Ok(reviews)
}

/// Parses review rows from `input`; `source` only labels errors.
pub fn read_reviews<R: Read>(input: R, source: &Path) -> Result<Vec<Review>> {
    let mut reader = ReaderBuilder::new().trim(Trim::Headers).from_reader(input);
    let headers = reader
        .headers()
        .map_err(|e| csv_error(source, e))?
        .clone();
    require_columns(&headers, &REVIEW_COLUMNS, source)?;

    let mut reviews = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|e| csv_error(source, e))?;
        let line = line_of(&record);
        let row: ReviewRow = record
            .deserialize(Some(&headers))
            .map_err(|e| DashboardError::schema(source, format!("line {line}: {e}")))?;
        let rating = parse_rating(&row.rating).ok_or_else(|| {
            let message = if row.rating.trim().is_empty() {
                format!("line {line}: missing rating for review `{}`", row.review_id)
            } else {
                format!("line {line}: non-numeric rating `{}`", row.rating)
            };
            DashboardError::schema(source, message)
        })?;
        reviews.push(Review::new(
            row.review_id,
            rating,
            row.review_text,
            row.branch_name,
            row.review_date,
        ));
    }
    Ok(reviews)
}

/// Looks for the predictions file. A missing file is expected and only logged.
pub fn load_predictions(path: &Path) -> PredictionSource {
    if !path.exists() {
        warn!("[LOADER] No ML predictions at {}", path.display());
        return PredictionSource::Missing {
            expected_path: path.display().to_string(),
        };
    }
    let loaded = File::open(path)
        .map_err(|e| DashboardError::unavailable(path, e))
        .and_then(|file| read_predictions(file, path));
    match loaded {
        Ok(predictions) => {
            log!("[LOADER] Loaded {} ML predictions from {}", predictions.len(), path.display());
            PredictionSource::Loaded(predictions)
        }
        Err(err) => {
            error!("[LOADER] Ignoring ML predictions: {}", err);
            PredictionSource::Invalid {
                reason: err.to_string(),
            }
        }
    }
}

pub fn read_predictions<R: Read>(input: R, source: &Path) -> Result<Vec<MlPrediction>> {
    let mut reader = ReaderBuilder::new().trim(Trim::Headers).from_reader(input);
    let headers = reader
        .headers()
        .map_err(|e| csv_error(source, e))?
        .clone();
    require_columns(&headers, &PREDICTION_COLUMNS, source)?;

    let mut predictions = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|e| csv_error(source, e))?;
        let line = line_of(&record);
        let row: PredictionRow = record
            .deserialize(Some(&headers))
            .map_err(|e| DashboardError::schema(source, format!("line {line}: {e}")))?;
        let ml_correct = parse_flag(&row.ml_correct).ok_or_else(|| {
            DashboardError::schema(
                source,
                format!("line {line}: ml_correct must be a boolean, got `{}`", row.ml_correct),
            )
        })?;
        predictions.push(MlPrediction {
            review_text: row.review_text,
            true_sentiment: row.true_sentiment,
            predicted_sentiment: row.predicted_sentiment,
            ml_correct,
        });
    }
    Ok(predictions)
}

fn require_columns(headers: &StringRecord, required: &[&str], source: &Path) -> Result<()> {
    let missing: Vec<&str> = required
        .iter()
        .copied()
        .filter(|column| !headers.iter().any(|h| h == *column))
        .collect();
    if missing.is_empty() {
        Ok(())
    } else {
        Err(DashboardError::schema(
            source,
            format!("missing required columns: {}", missing.join(", ")),
        ))
    }
}

fn csv_error(source: &Path, err: csv::Error) -> DashboardError {
    if err.is_io_error() {
        DashboardError::unavailable(source, err)
    } else {
        DashboardError::schema(source, err.to_string())
    }
}

fn line_of(record: &StringRecord) -> u64 {
    record.position().map(|p| p.line()).unwrap_or_default()
}

/// Integral floats such as `4.0` are accepted; anything fractional is not a rating.
fn parse_rating(raw: &str) -> Option<i64> {
    let raw = raw.trim();
    if let Ok(rating) = raw.parse::<i64>() {
        return Some(rating);
    }
    let value = raw.parse::<f64>().ok()?;
    (value.is_finite() && value.fract() == 0.0).then_some(value as i64)
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "1.0" | "yes" => Some(true),
        "false" | "0" | "0.0" | "no" => Some(false),
        _ => None,
    }
}
