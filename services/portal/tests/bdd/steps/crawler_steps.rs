//! BDD step definitions for crawler directives

use cucumber::then;
use portal::crawler::DISALLOWED_PREFIXES;

use crate::world::PortalWorld;

#[then("every private prefix should be disallowed")]
fn every_prefix_disallowed(world: &mut PortalWorld) {
    let body = world.response_body.as_ref().expect("no response body");
    for prefix in DISALLOWED_PREFIXES {
        let line = format!("Disallow: {}", prefix);
        assert!(
            body.lines().any(|l| l == line),
            "missing '{}' in:\n{}",
            line,
            body
        );
    }
}
