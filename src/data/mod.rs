//! Server-side access to the CSV files behind the dashboard.
pub mod cache;
pub mod loader;

use crate::config::DashboardConfig;
use crate::dashboard::{build_dashboard, DashboardView};
use crate::error::Result;
use crate::models::filter::FilterSelection;
use crate::models::prediction::PredictionSource;
use crate::models::review::Review;
use cache::DatasetCache;
use std::path::PathBuf;
use std::sync::Arc;

/// Shared by every actix worker and provided to Leptos as context.
#[derive(Clone)]
pub struct DashboardState {
    reviews: Arc<DatasetCache>,
    predictions_path: Arc<PathBuf>,
}

impl DashboardState {
    pub fn new(config: &DashboardConfig) -> Self {
        Self {
            reviews: Arc::new(DatasetCache::new(&config.dataset_path)),
            predictions_path: Arc::new(config.predictions_path.clone()),
        }
    }

    pub async fn reviews(&self) -> Result<Arc<Vec<Review>>> {
        self.reviews.reviews().await
    }

    /// Re-read on every call; the file is small and optional.
    pub fn predictions(&self) -> PredictionSource {
        loader::load_predictions(&self.predictions_path)
    }

    pub async fn dashboard(&self, selection: FilterSelection) -> Result<DashboardView> {
        let reviews = self.reviews().await?;
        let predictions = self.predictions();
        Ok(build_dashboard(&reviews, &predictions, selection))
    }
}
