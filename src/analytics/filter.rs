use crate::models::filter::FilterSelection;
use crate::models::review::Review;

/// Keeps the reviews matching both selections, in their original order.
pub fn filter_reviews<'a>(reviews: &'a [Review], selection: &FilterSelection) -> Vec<&'a Review> {
    reviews
        .iter()
        .filter(|review| {
            selection.branch.matches(&review.branch_name)
                && selection.sentiment.matches(review.sentiment)
        })
        .collect()
}
