pub mod filter;
pub mod prediction;
pub mod review;
