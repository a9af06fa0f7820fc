pub mod callout;
pub mod dataset_preview;
pub mod filter_sidebar;
pub mod metric_card;
pub mod ml_comparison;
pub mod pivot_table;
pub mod sentiment_chart;
