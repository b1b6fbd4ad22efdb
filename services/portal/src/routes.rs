//! HTTP routing: service endpoints, Leptos SSR and path normalization

use std::sync::Arc;

use axum::extract::Request;
use axum::middleware::{self, Next};
use axum::response::{IntoResponse, Redirect, Response};
use axum::routing::get;
use axum::Router;
use leptos::prelude::{provide_context, LeptosOptions};
use leptos_axum::{file_and_error_handler_with_context, generate_route_list, LeptosRoutes};
use portal_app::{shell, App, SiteSettings};
use tower_http::trace::TraceLayer;

use crate::config::Config;
use crate::env::EnvSource;
use crate::{crawler, diagnostics, sitemap};

/// State shared by the non-Leptos handlers
#[derive(Clone)]
pub struct PortalState {
    pub config: Arc<Config>,
    pub env: Arc<dyn EnvSource>,
}

impl PortalState {
    pub fn new(config: Config, env: Arc<dyn EnvSource>) -> Self {
        Self {
            config: Arc::new(config),
            env,
        }
    }
}

/// Crawler directives, sitemap, health and (when enabled) diagnostics
pub fn api_router(state: PortalState) -> Router {
    let mut router: Router<PortalState> = Router::new()
        .route("/robots.txt", get(crawler::robots_handler))
        .route("/sitemap.xml", get(sitemap::sitemap_handler))
        .route("/health", get(health_handler));

    if state.config.diagnostics.enabled {
        router = router.route("/api/debug-env", get(diagnostics::debug_env_handler));
    }

    router.with_state(state)
}

/// Server-rendered pages plus static assets and the 404 page
pub fn site_router(leptos_options: LeptosOptions, settings: SiteSettings) -> Router {
    let routes = generate_route_list(App);
    let context = move || provide_context(settings.clone());

    Router::new()
        .leptos_routes_with_context(&leptos_options, routes, context.clone(), {
            let leptos_options = leptos_options.clone();
            move || shell(leptos_options.clone())
        })
        .fallback(file_and_error_handler_with_context(context, shell))
        .with_state(leptos_options)
}

/// Complete application: both routers behind path normalization and tracing
pub fn build_app(state: PortalState, leptos_options: LeptosOptions) -> Router {
    let settings = state.config.site_settings();
    with_middleware(api_router(state).merge(site_router(leptos_options, settings)))
}

/// Apply the middleware stack shared by every route
pub fn with_middleware(router: Router) -> Router {
    router
        .layer(middleware::from_fn(redirect_trailing_slash))
        .layer(TraceLayer::new_for_http())
}

/// Permanently redirect `/path/` to `/path`, keeping the query string.
pub async fn redirect_trailing_slash(request: Request, next: Next) -> Response {
    let path = request.uri().path();
    if path.len() > 1 && path.ends_with('/') {
        // Collapse leading slashes so `//host/` cannot become a
        // protocol-relative redirect.
        let target = format!("/{}", path.trim_matches('/'));
        let location = match request.uri().query() {
            Some(query) => format!("{}?{}", target, query),
            None => target,
        };
        tracing::debug!("Redirecting {} to {}", request.uri(), location);
        return Redirect::permanent(&location).into_response();
    }
    next.run(request).await
}

async fn health_handler() -> impl IntoResponse {
    "OK"
}
