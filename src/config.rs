use std::env;
use std::path::{Path, PathBuf};

pub const DATASET_ENV: &str = "CAFE_DASHBOARD_DATASET";
pub const PREDICTIONS_ENV: &str = "CAFE_DASHBOARD_PREDICTIONS";

const DEFAULT_DATASET: &str = "data/cafe_reviews_10000.csv";
const DEFAULT_PREDICTIONS: &str = "outputs/ml_predictions.csv";

/// Where the dashboard reads its CSV files from.
///
/// Server settings (address, site root) are not here; they come from Leptos'
/// own configuration in `Cargo.toml` and `LEPTOS_*` variables.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardConfig {
    pub dataset_path: PathBuf,
    pub predictions_path: PathBuf,
}

impl DashboardConfig {
    pub fn with_base_dir(base: &Path) -> Self {
        Self {
            dataset_path: base.join(DEFAULT_DATASET),
            predictions_path: base.join(DEFAULT_PREDICTIONS),
        }
    }

    /// The crate root: `data/` and `outputs/` sit next to `Cargo.toml`, so the
    /// server finds them whatever directory it is launched from.
    pub fn default_base_dir() -> &'static Path {
        Path::new(env!("CARGO_MANIFEST_DIR"))
    }

    /// Defaults under the crate root, each overridable by its env var.
    pub fn from_env() -> Self {
        Self::resolve(
            Self::default_base_dir(),
            env::var_os(DATASET_ENV).map(PathBuf::from),
            env::var_os(PREDICTIONS_ENV).map(PathBuf::from),
        )
    }

    fn resolve(base: &Path, dataset: Option<PathBuf>, predictions: Option<PathBuf>) -> Self {
        let defaults = Self::with_base_dir(base);
        Self {
            dataset_path: dataset.unwrap_or(defaults.dataset_path),
            predictions_path: predictions.unwrap_or(defaults.predictions_path),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_live_under_base() {
        let config = DashboardConfig::with_base_dir(Path::new("/srv/cafe"));
        assert_eq!(config.dataset_path, Path::new("/srv/cafe/data/cafe_reviews_10000.csv"));
        assert_eq!(config.predictions_path, Path::new("/srv/cafe/outputs/ml_predictions.csv"));
    }

    #[test]
    fn test_default_base_is_independent_of_working_directory() {
        let base = DashboardConfig::default_base_dir();
        assert!(base.is_absolute());
        assert!(base.join("Cargo.toml").exists());
        let config = DashboardConfig::resolve(base, None, None);
        assert_eq!(config.dataset_path, base.join("data/cafe_reviews_10000.csv"));
        assert_eq!(config.predictions_path, base.join("outputs/ml_predictions.csv"));
    }

    #[test]
    fn test_overrides_replace_single_paths() {
        let config = DashboardConfig::resolve(
            Path::new("/srv/cafe"),
            Some(PathBuf::from("/tmp/reviews.csv")),
            None,
        );
        assert_eq!(config.dataset_path, PathBuf::from("/tmp/reviews.csv"));
        assert_eq!(config.predictions_path, Path::new("/srv/cafe/outputs/ml_predictions.csv"));
    }
}
