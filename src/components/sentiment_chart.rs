use crate::analytics::SentimentCount;
use leptos::*;

/// Horizontal bar chart of label counts; bars are scaled to the largest count.
#[component]
pub fn SentimentChart(counts: Vec<SentimentCount>) -> impl IntoView {
    if counts.is_empty() {
        return view! { <p class="empty">{ "No reviews match the current filters." }</p> }.into_view();
    }
    let max = counts.iter().map(|c| c.count).max().unwrap_or(0).max(1);

    view! {
        <div class="bar-chart">
            {counts.into_iter().map(|entry| {
                let label = entry.sentiment.as_str();
                let width = 100.0 * entry.count as f64 / max as f64;
                view! {
                    <div class="bar-row">
                        <span class="bar-label">{ label }</span>
                        <div class="bar-track">
                            <div class={format!("bar bar-{label}")} style={format!("width: {width:.1}%")}></div>
                        </div>
                        <span class="bar-value">{ entry.count }</span>
                    </div>
                }
            }).collect_view()}
        </div>
    }
    .into_view()
}
