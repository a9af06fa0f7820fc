use leptos::*;

/// A single headline number with its label.
#[component]
pub fn MetricCard(
    #[prop(into)] label: String,
    #[prop(into)] value: String,
    #[prop(optional, into)] caption: Option<String>,
) -> impl IntoView {
    view! {
        <div class="metric">
            <span class="metric-label">{ label }</span>
            <span class="metric-value">{ value }</span>
            { caption.map(|caption| view! { <span class="metric-caption">{ caption }</span> }) }
        </div>
    }
}
