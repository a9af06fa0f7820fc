use crate::data::loader::load_reviews;
use crate::error::{DashboardError, Result};
use crate::models::review::Review;
use leptos::logging::log;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::SystemTime;
use tokio::sync::Mutex;

struct CachedReviews {
    modified: Option<SystemTime>,
    reviews: Arc<Vec<Review>>,
}

/// Read-through cache for the review dataset, keyed by the file's mtime.
///
/// When the platform cannot report modification times the first successful
/// load is kept until the process exits.
pub struct DatasetCache {
    path: PathBuf,
    entry: Mutex<Option<CachedReviews>>,
}

impl DatasetCache {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            entry: Mutex::new(None),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub async fn reviews(&self) -> Result<Arc<Vec<Review>>> {
        let metadata = std::fs::metadata(&self.path)
            .map_err(|e| DashboardError::unavailable(&self.path, e))?;
        let modified = metadata.modified().ok();

        let mut entry = self.entry.lock().await;
        if let Some(cached) = entry.as_ref() {
            if modified.is_none() || cached.modified == modified {
                return Ok(Arc::clone(&cached.reviews));
            }
            log!("[CACHE] {} changed on disk, reloading", self.path.display());
        }

        // Parsing runs on the blocking pool; holding the lock makes concurrent
        // requests wait for this load instead of starting their own.
        let path = self.path.clone();
        let reviews = tokio::task::spawn_blocking(move || load_reviews(&path))
            .await
            .map_err(|e| DashboardError::unavailable(&self.path, e))??;
        let reviews = Arc::new(reviews);
        *entry = Some(CachedReviews {
            modified,
            reviews: Arc::clone(&reviews),
        });
        Ok(reviews)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::{self, File};
    use std::time::Duration;

    const HEADER: &str = "review_id,rating,review_text,branch_name,review_date\n";

    fn write_dataset(path: &Path, rows: &str, modified: SystemTime) {
        fs::write(path, format!("{HEADER}{rows}")).unwrap();
        File::options()
            .write(true)
            .open(path)
            .unwrap()
            .set_modified(modified)
            .unwrap();
    }

    #[tokio::test]
    async fn test_unchanged_file_is_served_from_cache() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("reviews.csv");
        write_dataset(&path, "1,5,ok,Central,2024-01-01\n", SystemTime::now());

        let cache = DatasetCache::new(&path);
        let first = cache.reviews().await.unwrap();
        let second = cache.reviews().await.unwrap();
        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(first.len(), 1);
    }

    #[tokio::test]
    async fn test_changed_mtime_triggers_reload() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("reviews.csv");
        let start = SystemTime::now();
        write_dataset(&path, "1,5,ok,Central,2024-01-01\n", start);

        let cache = DatasetCache::new(&path);
        assert_eq!(cache.reviews().await.unwrap().len(), 1);

        write_dataset(
            &path,
            "1,5,ok,Central,2024-01-01\n2,1,bad,Harbor,2024-01-02\n",
            start + Duration::from_secs(60),
        );
        let reloaded = cache.reviews().await.unwrap();
        assert_eq!(reloaded.len(), 2);
        assert_eq!(reloaded[1].branch_name, "Harbor");
    }

    #[tokio::test]
    async fn test_concurrent_requests_share_one_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("reviews.csv");
        write_dataset(&path, "1,5,ok,Central,2024-01-01\n", SystemTime::now());

        let cache = DatasetCache::new(&path);
        let (first, second) = tokio::join!(cache.reviews(), cache.reviews());
        assert!(Arc::ptr_eq(&first.unwrap(), &second.unwrap()));
    }

    #[tokio::test]
    async fn test_missing_file_is_unavailable() {
        let dir = tempfile::tempdir().unwrap();
        let cache = DatasetCache::new(dir.path().join("missing.csv"));
        let err = cache.reviews().await.unwrap_err();
        assert!(matches!(err, DashboardError::DataUnavailable { .. }));
        assert_eq!(cache.path(), dir.path().join("missing.csv"));
    }
}
