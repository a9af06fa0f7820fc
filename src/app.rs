/// Root of the dashboard UI.
/// The filter selection lives in the query string; every change re-runs the
/// `get_dashboard` server function and re-renders the page body.
use crate::analytics::format_pct;
use crate::api::get_dashboard;
use crate::components::callout::{Callout, CalloutKind};
use crate::components::dataset_preview::DatasetPreview;
use crate::components::filter_sidebar::FilterSidebar;
use crate::components::metric_card::MetricCard;
use crate::components::ml_comparison::MlComparison;
use crate::components::pivot_table::PivotTable;
use crate::components::sentiment_chart::SentimentChart;
use crate::dashboard::DashboardView;
use crate::models::filter::ALL;
use leptos::*;
use leptos_meta::*;
use leptos_router::*;

pub const INSIGHT: &str = "Insight: Customer dissatisfaction (negative or neutral sentiment) varies across cafe branches. \
    Branches with consistently lower positive sentiment may require improvements in service quality, \
    staff responsiveness, or menu offerings.";

#[derive(Params, PartialEq, Clone, Debug, Default)]
struct DashboardQuery {
    branch: Option<String>,
    sentiment: Option<String>,
}

impl DashboardQuery {
    fn labels(&self) -> (String, String) {
        (
            self.branch.clone().unwrap_or_else(|| ALL.to_string()),
            self.sentiment.clone().unwrap_or_else(|| ALL.to_string()),
        )
    }
}

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Stylesheet id="leptos" href="/pkg/cafe-sentiment-dashboard.css" />
        <Title text="Cafe Sentiment Dashboard" />
        <Router>
            <main>
                <Routes>
                    <Route path="" view=DashboardPage />
                </Routes>
            </main>
        </Router>
    }
}

#[component]
fn DashboardPage() -> impl IntoView {
    let query = use_query::<DashboardQuery>();
    let selection = move || {
        query.with(|q| {
            q.as_ref()
                .map(DashboardQuery::labels)
                .unwrap_or_else(|_| DashboardQuery::default().labels())
        })
    };
    let dashboard = create_resource(selection, |(branch, sentiment)| get_dashboard(branch, sentiment));

    view! {
        <PageHeader />
        <Suspense fallback=move || view! { <p class="loading">{ "Loading reviews..." }</p> }>
            {move || dashboard.get().map(|result| match result {
                Ok(data) => view! { <DashboardBody dashboard=data /> }.into_view(),
                Err(err) => view! { <DataUnavailablePanel message={err.to_string()} /> }.into_view(),
            })}
        </Suspense>
    }
}

#[component]
pub fn PageHeader() -> impl IntoView {
    view! {
        <header class="page-header">
            <h1>{ "☕ Cafe Sentiment Analysis Dashboard" }</h1>
            <p>{ "Business insights from customer reviews" }</p>
        </header>
    }
}

/// Shown instead of every section when the review dataset cannot be loaded.
#[component]
pub fn DataUnavailablePanel(#[prop(into)] message: String) -> impl IntoView {
    view! {
        <section class="content">
            <h2>{ "Data unavailable" }</h2>
            <Callout kind=CalloutKind::Error text=message />
        </section>
    }
}

/// Sidebar plus every section, in page order. Must be rendered inside a `Router`
/// because the sidebar submits through `leptos_router::Form`.
#[component]
pub fn DashboardBody(dashboard: DashboardView) -> impl IntoView {
    let DashboardView {
        selection,
        branch_options,
        summary,
        pivot,
        ml_panel,
        preview,
    } = dashboard;

    view! {
        <div class="layout">
            <FilterSidebar branches=branch_options selection=selection />
            <section class="content">
                <h2>{ "📊 Key Metrics" }</h2>
                <div class="metrics">
                    <MetricCard label="Total Reviews" value={summary.total_reviews.to_string()} />
                    <MetricCard label="Positive Reviews (%)" value={format_pct(summary.positive_pct)} />
                </div>

                <h2>{ "Sentiment Distribution" }</h2>
                <SentimentChart counts=summary.sentiment_counts />

                <h2>{ "Branch-wise Sentiment Comparison" }</h2>
                <PivotTable pivot=pivot />

                <Callout kind=CalloutKind::Info text=INSIGHT />

                <h2>{ "🤖 ML vs Business Sentiment (Comparison)" }</h2>
                <MlComparison panel=ml_panel />

                <h2>{ "Dataset Preview" }</h2>
                <DatasetPreview reviews=preview />
            </section>
        </div>
    }
}
