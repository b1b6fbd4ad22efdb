//! Environment introspection endpoint
//!
//! Reports which configuration variables the process can see. Secret values
//! are never echoed; only their presence is. The route is disabled by
//! default and must not be exposed on a public deployment.

use std::collections::BTreeMap;

use axum::extract::State;
use axum::response::IntoResponse;
use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use crate::config::{DiagnosticKey, Visibility};
use crate::env::EnvSource;
use crate::routes::PortalState;

/// Reported for variables that are absent or empty
pub const NOT_SET: &str = "NOT SET";

/// Reported instead of the value of a secret variable that is present
pub const REDACTED: &str = "***SET***";

pub const WARNING: &str =
    "Diagnostic endpoint: exposes configuration state. Disable it outside of debugging.";

/// Body of `GET /api/debug-env`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiagnosticReport {
    pub timestamp: String,
    pub environment: BTreeMap<String, String>,
    pub warning: String,
}

/// Value to report for a single key
pub fn describe(key: &DiagnosticKey, env: &dyn EnvSource) -> String {
    match env.var(&key.name) {
        Some(value) if !value.is_empty() => match key.visibility {
            Visibility::Public => value,
            Visibility::Secret => REDACTED.to_string(),
        },
        _ => NOT_SET.to_string(),
    }
}

/// Build the report for `keys` as of `now`
pub fn build_report(
    keys: &[DiagnosticKey],
    env: &dyn EnvSource,
    now: DateTime<Utc>,
) -> DiagnosticReport {
    let environment = keys
        .iter()
        .map(|key| (key.name.clone(), describe(key, env)))
        .collect();

    DiagnosticReport {
        timestamp: now.to_rfc3339_opts(SecondsFormat::Millis, true),
        environment,
        warning: WARNING.to_string(),
    }
}

pub(crate) async fn debug_env_handler(State(state): State<PortalState>) -> impl IntoResponse {
    tracing::debug!("Diagnostic environment report requested");
    let report = build_report(
        &state.config.diagnostics.keys,
        state.env.as_ref(),
        Utc::now(),
    );
    axum::Json(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::{MapEnv, MockEnvSource};
    use chrono::TimeZone;

    fn fixed_now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 3, 14, 9, 26, 53).unwrap()
    }

    #[test]
    fn absent_key_is_not_set() {
        let env = MapEnv::new();
        assert_eq!(describe(&DiagnosticKey::public("DB_HOST"), &env), NOT_SET);
        assert_eq!(describe(&DiagnosticKey::secret("DB_PASSWORD"), &env), NOT_SET);
    }

    #[test]
    fn empty_value_is_not_set() {
        let env = MapEnv::new().with("DB_PASSWORD", "");
        assert_eq!(describe(&DiagnosticKey::secret("DB_PASSWORD"), &env), NOT_SET);
    }

    #[test]
    fn secret_is_redacted() {
        let env = MapEnv::new().with("DB_PASSWORD", "hunter2");
        let value = describe(&DiagnosticKey::secret("DB_PASSWORD"), &env);
        assert_eq!(value, REDACTED);
        assert!(!value.contains("hunter2"));
    }

    #[test]
    fn public_value_is_literal() {
        let env = MapEnv::new().with("DB_HOST", "db.internal");
        assert_eq!(
            describe(&DiagnosticKey::public("DB_HOST"), &env),
            "db.internal"
        );
    }

    #[test]
    fn report_reads_each_key_once() {
        let mut env = MockEnvSource::new();
        env.expect_var()
            .withf(|key| key == "DB_HOST")
            .times(1)
            .returning(|_| Some("db.internal".to_string()));
        env.expect_var()
            .withf(|key| key == "DB_PASSWORD")
            .times(1)
            .returning(|_| None);

        let keys = vec![
            DiagnosticKey::public("DB_HOST"),
            DiagnosticKey::secret("DB_PASSWORD"),
        ];
        let report = build_report(&keys, &env, fixed_now());

        assert_eq!(report.environment["DB_HOST"], "db.internal");
        assert_eq!(report.environment["DB_PASSWORD"], NOT_SET);
    }

    #[test]
    fn report_shape() {
        let report = build_report(&[], &MapEnv::new(), fixed_now());
        assert_eq!(report.timestamp, "2026-03-14T09:26:53.000Z");
        assert!(report.environment.is_empty());
        assert_eq!(report.warning, WARNING);

        let json = serde_json::to_value(&report).unwrap();
        assert!(json["timestamp"].is_string());
        assert!(json["environment"].is_object());
        assert!(json["warning"].is_string());
    }
}
