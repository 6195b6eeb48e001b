#![recursion_limit = "512"]

//! Server library module.
//!
//! Router assembly lives here so the binary and the integration tests build
//! the exact same application.

use axum::extract::FromRef;
use axum::{
    Router,
    body::Body,
    extract::State,
    http::{Request, StatusCode},
    response::{Html, IntoResponse, Response},
    routing::get,
};
use leptos::context::provide_context;
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list, handle_server_fns_with_context};
use planner::components::App;
use planner::planner_client::PlannerClient;
use std::sync::Arc;
use tower_http::services::ServeDir;

#[derive(Clone)]
pub struct AppState {
    pub leptos_options: LeptosOptions,
    pub planner: Arc<PlannerClient>,
}

impl FromRef<AppState> for LeptosOptions {
    fn from_ref(state: &AppState) -> Self {
        state.leptos_options.clone()
    }
}

impl AppState {
    pub fn new(planner: PlannerClient, site_root: &str) -> Self {
        let leptos_options = LeptosOptions::builder()
            .output_name("frontend")
            .site_pkg_dir("pkg")
            .site_root(site_root)
            .build();

        Self {
            leptos_options,
            planner: Arc::new(planner),
        }
    }

    fn provide(&self) {
        provide_context(self.planner.clone());
    }
}

pub fn shell(options: LeptosOptions) -> impl IntoView {
    use leptos::hydration::{AutoReload, HydrationScripts};
    use leptos_meta::MetaTags;
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <link rel="stylesheet" href="/pkg/frontend.css"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Pages, server functions under `/api`, and the compiled frontend under `/pkg`.
pub fn build_router(state: AppState) -> Router {
    let routes = generate_route_list(App);
    let pkg_dir = format!("{}/pkg", state.leptos_options.site_root);

    Router::new()
        .route(
            "/api/{*fn_name}",
            get(server_fn_handler).post(server_fn_handler),
        )
        .leptos_routes_with_context(
            &state,
            routes,
            {
                let state = state.clone();
                move || state.provide()
            },
            {
                let options = state.leptos_options.clone();
                move || shell(options.clone())
            },
        )
        .fallback(file_and_error_handler)
        .nest_service("/pkg", ServeDir::new(pkg_dir))
        .with_state(state)
}

async fn server_fn_handler(State(state): State<AppState>, req: Request<Body>) -> impl IntoResponse {
    handle_server_fns_with_context(move || state.provide(), req).await
}

async fn file_and_error_handler(State(state): State<AppState>, req: Request<Body>) -> Response {
    if req.uri().path().starts_with("/pkg") {
        return (StatusCode::NOT_FOUND, Html("<h1>404 Not Found</h1>")).into_response();
    }

    let options = state.leptos_options.clone();
    let handler = leptos_axum::render_app_to_stream_with_context(
        move || state.provide(),
        move || shell(options.clone()),
    );
    handler(req).await.into_response()
}
