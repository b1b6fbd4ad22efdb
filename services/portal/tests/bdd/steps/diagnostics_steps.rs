//! BDD step definitions for the diagnostics endpoint

use cucumber::{given, then};
use portal::config::DiagnosticKey;

use crate::world::PortalWorld;

#[given("the diagnostics endpoint is enabled")]
fn diagnostics_enabled(world: &mut PortalWorld) {
    world.config.diagnostics.enabled = true;
}

#[given("the diagnostics endpoint is disabled")]
fn diagnostics_disabled(world: &mut PortalWorld) {
    world.config.diagnostics.enabled = false;
}

#[given(expr = "{string} is reported as a public variable")]
fn public_variable(world: &mut PortalWorld, name: String) {
    world.config.diagnostics.keys.push(DiagnosticKey::public(&name));
}

#[given(expr = "{string} is reported as a secret variable")]
fn secret_variable(world: &mut PortalWorld, name: String) {
    world.config.diagnostics.keys.push(DiagnosticKey::secret(&name));
}

#[given(expr = "the environment variable {string} is {string}")]
fn environment_variable(world: &mut PortalWorld, name: String, value: String) {
    world.env = world.env.clone().with(&name, &value);
}

#[then(expr = "the reported value of {string} should be {string}")]
fn reported_value(world: &mut PortalWorld, name: String, expected: String) {
    let body = world.response_body.as_ref().expect("no response body");
    let json: serde_json::Value = serde_json::from_str(body).expect("response is not JSON");
    assert_eq!(
        json["environment"][name.as_str()],
        serde_json::Value::String(expected),
        "body: {}",
        body
    );
}
