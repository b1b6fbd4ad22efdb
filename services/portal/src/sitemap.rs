//! XML sitemap generated from the app's SEO records

use axum::extract::State;
use axum::http::header;
use axum::response::IntoResponse;
use portal_app::seo::{self, PageMeta};

use crate::routes::PortalState;

/// Render a sitemap for `pages` under `base_url`
pub fn render_sitemap<'a>(
    base_url: &str,
    pages: impl IntoIterator<Item = &'a PageMeta>,
) -> String {
    let base = base_url.trim_end_matches('/');
    let mut xml = String::from(
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n\
         <urlset xmlns=\"http://www.sitemaps.org/schemas/sitemap/0.9\">\n",
    );
    for page in pages {
        xml.push_str(&format!(
            "  <url>\n    <loc>{}{}</loc>\n    <changefreq>{}</changefreq>\n    <priority>{:.1}</priority>\n  </url>\n",
            escape_xml(base),
            escape_xml(page.path),
            page.change_frequency,
            page.priority
        ));
    }
    xml.push_str("</urlset>\n");
    xml
}

fn escape_xml(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}

pub(crate) async fn sitemap_handler(State(state): State<PortalState>) -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "application/xml; charset=utf-8")],
        render_sitemap(&state.config.site.base_url, seo::indexable_pages()),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lists_indexable_pages_only() {
        let xml = render_sitemap("https://smile.test", seo::indexable_pages());
        assert!(xml.contains("<loc>https://smile.test/</loc>"));
        assert!(xml.contains("<loc>https://smile.test/pricing</loc>"));
        assert!(!xml.contains("/portal/"));
        assert_eq!(xml.matches("<url>").count(), seo::indexable_pages().count());
    }

    #[test]
    fn formats_priority_and_frequency() {
        let xml = render_sitemap("https://smile.test/", [&seo::HOME]);
        assert!(xml.contains("<priority>1.0</priority>"));
        assert!(xml.contains("<changefreq>weekly</changefreq>"));
        assert!(xml.contains("<loc>https://smile.test/</loc>"));
    }

    #[test]
    fn escapes_origin() {
        let xml = render_sitemap("https://smile.test/?a=1&b=2", [&seo::FAQ]);
        assert!(xml.contains("&amp;"));
        assert!(!xml.contains("a=1&b"));
    }

    #[test]
    fn empty_sitemap_is_well_formed() {
        let xml = render_sitemap("https://smile.test", []);
        assert!(xml.starts_with("<?xml"));
        assert!(xml.trim_end().ends_with("</urlset>"));
    }
}
