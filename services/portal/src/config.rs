//! Configuration types for the portal server

use portal_app::{IdentitySettings, SiteSettings};
use serde::{Deserialize, Serialize};
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::Path;

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub site: SiteConfig,
    #[serde(default)]
    pub identity: IdentitySettings,
    #[serde(default)]
    pub diagnostics: DiagnosticsConfig,
}

impl Config {
    /// Settings handed to the Leptos app as context
    pub fn site_settings(&self) -> SiteSettings {
        SiteSettings {
            name: self.site.name.clone(),
            base_url: self.site.base_url.clone(),
            phone: self.site.phone.clone(),
            identity: self.identity.clone(),
        }
    }
}

/// HTTP listener configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_bind_address")]
    pub bind_address: IpAddr,
    #[serde(default = "default_port")]
    pub port: u16,
}

impl ServerConfig {
    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.bind_address, self.port)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_address: default_bind_address(),
            port: default_port(),
        }
    }
}

/// Public identity of the site
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteConfig {
    #[serde(default = "default_site_name")]
    pub name: String,
    /// Absolute origin used for canonical links, robots.txt and the sitemap
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_phone")]
    pub phone: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        let site = SiteSettings::default();
        Self {
            name: site.name,
            base_url: site.base_url,
            phone: site.phone,
        }
    }
}

/// Whether a reported variable may be shown verbatim
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Visibility {
    Public,
    Secret,
}

/// An environment variable reported by the diagnostics endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiagnosticKey {
    pub name: String,
    #[serde(default = "default_visibility")]
    pub visibility: Visibility,
}

impl DiagnosticKey {
    pub fn public(name: &str) -> Self {
        Self {
            name: name.to_string(),
            visibility: Visibility::Public,
        }
    }

    pub fn secret(name: &str) -> Self {
        Self {
            name: name.to_string(),
            visibility: Visibility::Secret,
        }
    }
}

/// Environment introspection endpoint configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiagnosticsConfig {
    /// Route `/api/debug-env`. Off unless explicitly enabled.
    #[serde(default)]
    pub enabled: bool,
    #[serde(default = "default_diagnostic_keys")]
    pub keys: Vec<DiagnosticKey>,
}

impl Default for DiagnosticsConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            keys: default_diagnostic_keys(),
        }
    }
}

fn default_bind_address() -> IpAddr {
    IpAddr::V4(Ipv4Addr::UNSPECIFIED)
}

fn default_port() -> u16 {
    3000
}

fn default_site_name() -> String {
    SiteSettings::default().name
}

fn default_base_url() -> String {
    SiteSettings::default().base_url
}

fn default_phone() -> String {
    SiteSettings::default().phone
}

fn default_visibility() -> Visibility {
    Visibility::Secret
}

fn default_diagnostic_keys() -> Vec<DiagnosticKey> {
    vec![
        DiagnosticKey::public("APP_ENV"),
        DiagnosticKey::public("DB_HOST"),
        DiagnosticKey::public("DB_PORT"),
        DiagnosticKey::public("DB_NAME"),
        DiagnosticKey::public("DB_USER"),
        DiagnosticKey::secret("DB_PASSWORD"),
        DiagnosticKey::secret("DATABASE_URL"),
    ]
}

/// Load configuration from a JSON file
pub fn load_config(path: &Path) -> crate::Result<Config> {
    let content = std::fs::read_to_string(path).map_err(|e| {
        crate::PortalError::Config(format!("Failed to read config file {:?}: {}", path, e))
    })?;
    let config: Config = serde_json::from_str(&content)?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_full_config() {
        let json = r#"{
            "server": {
                "bind_address": "127.0.0.1",
                "port": 8080
            },
            "site": {
                "name": "Smile Co",
                "base_url": "https://smile.test",
                "phone": "+1-555-0100"
            },
            "identity": {
                "script_url": "https://id.smile.test/widget.js",
                "publishable_key": "pk_live_abc",
                "sign_in_path": "/portal/sign-in",
                "after_sign_in_path": "/portal/home"
            },
            "diagnostics": {
                "enabled": true,
                "keys": [
                    {"name": "DB_HOST", "visibility": "public"},
                    {"name": "DB_PASSWORD", "visibility": "secret"}
                ]
            }
        }"#;

        let config: Config = serde_json::from_str(json).unwrap();

        assert_eq!(config.server.socket_addr().to_string(), "127.0.0.1:8080");
        assert_eq!(config.site.name, "Smile Co");
        assert_eq!(config.site.base_url, "https://smile.test");
        assert_eq!(config.identity.publishable_key, "pk_live_abc");
        assert_eq!(config.identity.after_sign_in_path, "/portal/home");
        assert!(config.diagnostics.enabled);
        assert_eq!(
            config.diagnostics.keys,
            vec![
                DiagnosticKey::public("DB_HOST"),
                DiagnosticKey::secret("DB_PASSWORD")
            ]
        );
    }

    #[test]
    fn parse_minimal_config() {
        let config: Config = serde_json::from_str("{}").unwrap();

        assert_eq!(config.server.port, 3000);
        assert_eq!(config.server.bind_address, IpAddr::V4(Ipv4Addr::UNSPECIFIED));
        assert_eq!(config.site.base_url, "https://www.example-aligners.com");
        assert!(!config.diagnostics.enabled);
        assert_eq!(config.diagnostics.keys.len(), 7);
    }

    #[test]
    fn diagnostic_key_defaults_to_secret() {
        let json = r#"{"diagnostics": {"keys": [{"name": "API_TOKEN"}]}}"#;
        let config: Config = serde_json::from_str(json).unwrap();
        assert_eq!(config.diagnostics.keys[0].visibility, Visibility::Secret);
    }

    #[test]
    fn default_keys_hide_credentials() {
        let keys = DiagnosticsConfig::default().keys;
        for name in ["DB_PASSWORD", "DATABASE_URL"] {
            let key = keys.iter().find(|k| k.name == name).unwrap();
            assert_eq!(key.visibility, Visibility::Secret, "{name}");
        }
    }

    #[test]
    fn site_settings_carry_identity() {
        let mut config = Config::default();
        config.site.name = "Smile Co".to_string();
        config.identity.publishable_key = "pk_test".to_string();

        let settings = config.site_settings();
        assert_eq!(settings.name, "Smile Co");
        assert_eq!(settings.identity.publishable_key, "pk_test");
    }

    #[test]
    fn load_config_missing_file() {
        let result = load_config(Path::new("/nonexistent/config.json"));
        assert!(result.is_err());
        let err = result.unwrap_err();
        assert!(err.to_string().contains("Failed to read config file"));
    }

    #[test]
    fn load_config_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let config_path = dir.path().join("config.json");
        std::fs::write(&config_path, r#"{"server": {"port": 9000}}"#).unwrap();

        let config = load_config(&config_path).unwrap();
        assert_eq!(config.server.port, 9000);
    }

    #[test]
    fn load_config_invalid_json() {
        let dir = tempfile::tempdir().unwrap();
        let config_path = dir.path().join("config.json");
        std::fs::write(&config_path, "not json").unwrap();

        let result = load_config(&config_path);
        assert!(result.is_err());
    }
}
