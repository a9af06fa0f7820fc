use crate::dashboard::DashboardView;
use leptos::*;

#[cfg(feature = "ssr")]
use crate::data::DashboardState;
#[cfg(feature = "ssr")]
use crate::error::DashboardError;
#[cfg(feature = "ssr")]
use crate::models::filter::FilterSelection;
#[cfg(feature = "ssr")]
use actix_web::{web, HttpResponse};
#[cfg(feature = "ssr")]
use leptos::logging::{error, log};
#[cfg(feature = "ssr")]
use serde::Deserialize;

/// Runs the whole pipeline for one page render. Called directly during SSR and
/// over HTTP by the hydrated page.
#[server(GetDashboard, "/api")]
pub async fn get_dashboard(branch: String, sentiment: String) -> Result<DashboardView, ServerFnError> {
    let state = use_context::<DashboardState>()
        .ok_or_else(|| server_error("dashboard state was not provided"))?;
    let selection =
        FilterSelection::from_query(Some(&branch), Some(&sentiment)).map_err(server_error)?;
    state.dashboard(selection).await.map_err(|err| {
        error!("[SERVER] Dashboard render failed: {}", err);
        server_error(err)
    })
}

#[cfg(feature = "ssr")]
fn server_error(err: impl ToString) -> ServerFnError {
    ServerFnError::new(err)
}

#[cfg(feature = "ssr")]
#[derive(Debug, Deserialize)]
pub struct SummaryQuery {
    pub branch: Option<String>,
    pub sentiment: Option<String>,
}

/// `GET /api/summary`: the page's numbers as JSON.
#[cfg(feature = "ssr")]
pub async fn get_summary(
    state: web::Data<DashboardState>,
    query: web::Query<SummaryQuery>,
) -> HttpResponse {
    log!(
        "[API] Summary request - branch: {:?}, sentiment: {:?}",
        query.branch,
        query.sentiment
    );
    let selection =
        match FilterSelection::from_query(query.branch.as_deref(), query.sentiment.as_deref()) {
            Ok(selection) => selection,
            Err(err) => return HttpResponse::BadRequest().body(err.to_string()),
        };

    match state.dashboard(selection).await {
        Ok(view) => {
            log!("[API] Returning summary over {} reviews", view.summary.total_reviews);
            HttpResponse::Ok().json(view)
        }
        Err(err @ DashboardError::InvalidFilter(_)) => HttpResponse::BadRequest().body(err.to_string()),
        Err(err) => {
            error!("[API ERROR] Failed to build summary: {}", err);
            HttpResponse::ServiceUnavailable().body(err.to_string())
        }
    }
}
