//! Crawler directives served as `/robots.txt`

use axum::extract::State;
use axum::http::header;
use axum::response::IntoResponse;

use crate::routes::PortalState;

/// Path prefixes crawlers must stay out of
pub const DISALLOWED_PREFIXES: [&str; 4] = ["/api/", "/portal/", "/admin/", "/pkg/"];

/// Absolute sitemap location for a site origin
pub fn sitemap_url(base_url: &str) -> String {
    format!("{}/sitemap.xml", base_url.trim_end_matches('/'))
}

/// Render the robots.txt body. Depends only on the configured origin.
pub fn render_robots(base_url: &str) -> String {
    let mut body = String::from("User-agent: *\nAllow: /\n");
    for prefix in DISALLOWED_PREFIXES {
        body.push_str("Disallow: ");
        body.push_str(prefix);
        body.push('\n');
    }
    body.push('\n');
    body.push_str("Sitemap: ");
    body.push_str(&sitemap_url(base_url));
    body.push('\n');
    body
}

pub(crate) async fn robots_handler(State(state): State<PortalState>) -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
        render_robots(&state.config.site.base_url),
    )
}
