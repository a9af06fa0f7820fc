use crate::analytics::SentimentPivot;
use leptos::*;

#[component]
pub fn PivotTable(pivot: SentimentPivot) -> impl IntoView {
    let SentimentPivot { columns, rows } = pivot;

    view! {
        <table class="pivot">
            <thead>
                <tr>
                    <th>{ "branch_name" }</th>
                    {columns.iter().map(|sentiment| view! { <th>{ sentiment.as_str() }</th> }).collect_view()}
                </tr>
            </thead>
            <tbody>
                {rows.into_iter().map(|row| view! {
                    <tr>
                        <th scope="row">{ row.branch }</th>
                        {row.counts.into_iter().map(|count| view! { <td>{ count }</td> }).collect_view()}
                    </tr>
                }).collect_view()}
            </tbody>
        </table>
    }
}
