//! Shared request and response steps

use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Request};
use cucumber::{given, then, when};
use portal::routes::{api_router, with_middleware, PortalState};
use tower::ServiceExt;

use crate::world::PortalWorld;

#[given(expr = "the site base URL is {string}")]
fn site_base_url(world: &mut PortalWorld, base_url: String) {
    world.config.site.base_url = base_url;
}

#[when(expr = "{string} is requested")]
async fn request_path(world: &mut PortalWorld, uri: String) {
    let state = PortalState::new(world.config.clone(), Arc::new(world.env.clone()));
    let app = with_middleware(api_router(state));
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();

    world.response_status = Some(response.status().as_u16());
    world.response_location = response
        .headers()
        .get(header::LOCATION)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    world.response_body = Some(String::from_utf8(body.to_vec()).unwrap());
}

#[then(expr = "the response status should be {int}")]
fn response_status(world: &mut PortalWorld, status: u16) {
    assert_eq!(world.response_status, Some(status));
}

#[then(expr = "the response should redirect to {string}")]
fn response_redirect(world: &mut PortalWorld, location: String) {
    assert_eq!(world.response_location.as_deref(), Some(location.as_str()));
}

#[then(expr = "the response should contain {string}")]
fn response_contains(world: &mut PortalWorld, expected: String) {
    let body = world.response_body.as_ref().expect("no response body");
    assert!(
        body.contains(&expected),
        "Expected response to contain '{}', but it didn't.\nResponse body:\n{}",
        expected,
        body
    );
}

#[then(expr = "the response should not contain {string}")]
fn response_not_contains(world: &mut PortalWorld, unexpected: String) {
    let body = world.response_body.as_ref().expect("no response body");
    assert!(
        !body.contains(&unexpected),
        "Expected response not to contain '{}'.\nResponse body:\n{}",
        unexpected,
        body
    );
}
