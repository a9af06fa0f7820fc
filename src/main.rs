#[cfg(feature = "ssr")]
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    use actix_files::Files;
    use actix_web::{web, App, HttpServer};
    use cafe_sentiment_dashboard::api::get_summary;
    use cafe_sentiment_dashboard::app::App as DashboardApp;
    use cafe_sentiment_dashboard::config::DashboardConfig;
    use cafe_sentiment_dashboard::data::DashboardState;
    use leptos::logging::{error, log};
    use leptos::*;
    use leptos_actix::{generate_route_list, LeptosRoutes};
    use std::io;

    let config = DashboardConfig::from_env();
    log!("[SERVER] Reviews: {}", config.dataset_path.display());
    log!("[SERVER] ML predictions: {}", config.predictions_path.display());
    let state = DashboardState::new(&config);

    // The dataset is required; refuse to start without it.
    match state.reviews().await {
        Ok(reviews) => log!("[SERVER] {} reviews ready", reviews.len()),
        Err(err) => {
            error!("[SERVER] {}", err);
            return Err(io::Error::new(io::ErrorKind::NotFound, err.to_string()));
        }
    }

    // Load configuration
    let conf = get_configuration(None)
        .await
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e.to_string()))?;
    let addr = conf.leptos_options.site_addr;

    // Generate the list of routes in the Leptos App
    let routes = generate_route_list(DashboardApp);
    log!("listening on http://{}", &addr);

    HttpServer::new(move || {
        let leptos_options = &conf.leptos_options;
        let site_root = &leptos_options.site_root;
        let fn_state = state.clone();
        let route_state = state.clone();

        App::new()
            .app_data(web::Data::new(state.clone()))
            // Register custom API routes BEFORE Leptos server functions
            .route("/api/summary", web::get().to(get_summary))
            .route(
                "/api/{tail:.*}",
                leptos_actix::handle_server_fns_with_context(move || provide_context(fn_state.clone())),
            )
            // Serve JS/WASM/CSS from `pkg`
            .service(Files::new("/pkg", format!("{site_root}/pkg")))
            .leptos_routes_with_context(
                leptos_options.to_owned(),
                routes.to_owned(),
                move || provide_context(route_state.clone()),
                DashboardApp,
            )
            .app_data(web::Data::new(leptos_options.to_owned()))
    })
    .bind(&addr)?
    .run()
    .await
}

#[cfg(not(any(feature = "ssr", feature = "csr")))]
pub fn main() {
    // no client-side main function
    // see lib.rs for hydration function instead
}

#[cfg(all(not(feature = "ssr"), feature = "csr"))]
pub fn main() {
    // a client-side main function is required for using `trunk serve`
    // to run: `trunk serve --open --features csr`
    use cafe_sentiment_dashboard::app::*;

    console_error_panic_hook::set_once();

    leptos::mount_to_body(App);
}
