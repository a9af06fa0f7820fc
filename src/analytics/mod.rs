//! Pure computations over loaded reviews and predictions. Nothing here touches
//! the filesystem, so every build target gets the same numbers.
pub mod aggregate;
pub mod comparison;
pub mod filter;

pub use aggregate::{
    branch_options, branch_sentiment_pivot, format_pct, positive_pct, sentiment_counts, PivotRow,
    SentimentCount, SentimentPivot, Summary,
};
pub use comparison::{agreement_pct, prediction_preview, PredictionPreview, ML_PREVIEW_ROWS};
pub use filter::filter_reviews;
