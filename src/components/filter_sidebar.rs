/// Sidebar with the branch and sentiment selects.
/// Submitting the form rewrites the query string, which re-runs the dashboard resource.
use crate::models::filter::{FilterSelection, SentimentFilter};
use leptos::*;
use leptos_router::Form;

#[component]
pub fn FilterSidebar(branches: Vec<String>, selection: FilterSelection) -> impl IntoView {
    let mut branches = branches;
    let current_branch = selection.branch.label().to_string();
    let current_sentiment = selection.sentiment.label();
    // A branch from the URL that the dataset lacks still shows as the active choice.
    if !branches.contains(&current_branch) {
        branches.push(current_branch.clone());
    }

    view! {
        <aside class="sidebar">
            <h2>{ "Filters" }</h2>
            <Form method="GET" action="">
                <label for="branch">{ "Select Cafe Branch" }</label>
                <select id="branch" name="branch">
                    {branches.into_iter().map(|branch| {
                        let selected = branch == current_branch;
                        view! { <option value={branch.clone()} selected={selected}>{ branch }</option> }
                    }).collect_view()}
                </select>

                <label for="sentiment">{ "Select Sentiment" }</label>
                <select id="sentiment" name="sentiment">
                    {SentimentFilter::options().into_iter().map(|option| {
                        view! { <option value={option} selected={option == current_sentiment}>{ option }</option> }
                    }).collect_view()}
                </select>

                <button type="submit">{ "Apply filters" }</button>
            </Form>
        </aside>
    }
}
