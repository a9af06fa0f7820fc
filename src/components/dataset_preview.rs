use crate::models::review::Review;
use leptos::*;

/// First rows of the raw dataset, unaffected by the filters.
#[component]
pub fn DatasetPreview(reviews: Vec<Review>) -> impl IntoView {
    view! {
        <table class="preview">
            <thead>
                <tr>
                    <th>{ "review_id" }</th>
                    <th>{ "rating" }</th>
                    <th>{ "review_text" }</th>
                    <th>{ "branch_name" }</th>
                    <th>{ "review_date" }</th>
                </tr>
            </thead>
            <tbody>
                {reviews.into_iter().map(|review| view! {
                    <tr>
                        <td>{ review.review_id }</td>
                        <td>{ review.rating }</td>
                        <td>{ review.review_text }</td>
                        <td>{ review.branch_name }</td>
                        <td>{ review.review_date }</td>
                    </tr>
                }).collect_view()}
            </tbody>
        </table>
    }
}
