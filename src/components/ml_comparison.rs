use crate::analytics::{format_pct, PredictionPreview};
use crate::components::callout::{Callout, CalloutKind};
use crate::components::metric_card::MetricCard;
use crate::dashboard::MlPanel;
use leptos::*;

pub const ML_NOTE: &str = "The ML model is used as a comparative tool. \
    Lower agreement highlights the limitations of text-only sentiment models \
    and reinforces why ratings are more reliable for business decisions.";

/// Agreement between the offline model and the rating-derived labels.
/// Purely informational; it never feeds back into the filters or metrics.
#[component]
pub fn MlComparison(panel: MlPanel) -> impl IntoView {
    match panel {
        MlPanel::Missing { expected_path } => view! {
            <Callout
                kind=CalloutKind::Warning
                text={format!("ML results not found. Run the ML notebook to generate `{expected_path}`.")}
            />
        }
        .into_view(),
        MlPanel::Invalid { reason } => view! {
            <Callout kind=CalloutKind::Error text={format!("ML results could not be read. {reason}")} />
        }
        .into_view(),
        MlPanel::Ready { agreement_pct, evaluated, preview } => {
            let agreement = agreement_pct.map(format_pct).unwrap_or_else(|| "n/a".to_string());
            view! {
                <MetricCard
                    label="ML Agreement with Rating-Based Sentiment"
                    value=agreement
                    caption={format!("across {evaluated} predictions")}
                />
                <Callout kind=CalloutKind::Info text=ML_NOTE />
                <PredictionTable rows=preview />
            }
            .into_view()
        }
    }
}

#[component]
fn PredictionTable(rows: Vec<PredictionPreview>) -> impl IntoView {
    view! {
        <table class="predictions">
            <thead>
                <tr>
                    <th>{ "review_text" }</th>
                    <th>{ "true_sentiment" }</th>
                    <th>{ "predicted_sentiment" }</th>
                </tr>
            </thead>
            <tbody>
                {rows.into_iter().map(|row| view! {
                    <tr>
                        <td>{ row.review_text }</td>
                        <td>{ row.true_sentiment }</td>
                        <td>{ row.predicted_sentiment }</td>
                    </tr>
                }).collect_view()}
            </tbody>
        </table>
    }
}
