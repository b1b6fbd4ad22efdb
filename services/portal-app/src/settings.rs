//! Site-wide settings shared between the SSR server and the hydrated client
//!
//! The server provides these as Leptos context from its config file. The
//! shell also serializes them into a `<meta>` tag so the client can recover
//! the same values before hydrating.

use leptos::prelude::*;
use serde::{Deserialize, Serialize};

/// `name` of the `<meta>` element carrying serialized settings
pub const SETTINGS_META: &str = "portal-settings";

/// Hosted identity provider widget settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdentitySettings {
    /// Script that renders the provider's sign-in widget
    #[serde(default = "default_script_url")]
    pub script_url: String,
    /// Public key the widget identifies the site with. Not a secret.
    #[serde(default)]
    pub publishable_key: String,
    #[serde(default = "default_sign_in_path")]
    pub sign_in_path: String,
    #[serde(default = "default_after_sign_in_path")]
    pub after_sign_in_path: String,
}

impl Default for IdentitySettings {
    fn default() -> Self {
        Self {
            script_url: default_script_url(),
            publishable_key: String::new(),
            sign_in_path: default_sign_in_path(),
            after_sign_in_path: default_after_sign_in_path(),
        }
    }
}

/// Branding and addressing for the public site
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteSettings {
    #[serde(default = "default_site_name")]
    pub name: String,
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_phone")]
    pub phone: String,
    #[serde(default)]
    pub identity: IdentitySettings,
}

impl Default for SiteSettings {
    fn default() -> Self {
        Self {
            name: default_site_name(),
            base_url: default_base_url(),
            phone: default_phone(),
            identity: IdentitySettings::default(),
        }
    }
}

impl SiteSettings {
    /// Absolute URL for a site path
    pub fn canonical_url(&self, path: &str) -> String {
        let base = self.base_url.trim_end_matches('/');
        let path = path.trim_start_matches('/');
        format!("{}/{}", base, path)
    }

    pub fn to_meta_content(&self) -> String {
        serde_json::to_string(self).unwrap_or_default()
    }

    pub fn from_meta_content(content: &str) -> Option<Self> {
        serde_json::from_str(content).ok()
    }

    /// Read the settings the server shell embedded in the document
    #[cfg(feature = "hydrate")]
    pub fn from_document() -> Self {
        web_sys::window()
            .and_then(|window| window.document())
            .and_then(|document| {
                document
                    .query_selector(&format!("meta[name=\"{}\"]", SETTINGS_META))
                    .ok()
                    .flatten()
            })
            .and_then(|element| element.get_attribute("content"))
            .and_then(|content| Self::from_meta_content(&content))
            .unwrap_or_default()
    }
}

/// Settings from context, or the defaults when nothing was provided
pub fn use_site_settings() -> SiteSettings {
    use_context::<SiteSettings>().unwrap_or_default()
}

fn default_site_name() -> String {
    "Aligner Studio".to_string()
}

fn default_base_url() -> String {
    "https://www.example-aligners.com".to_string()
}

fn default_phone() -> String {
    "+1-800-555-0142".to_string()
}

fn default_script_url() -> String {
    "https://identity.example-aligners.com/widget/v1/sign-in.js".to_string()
}

fn default_sign_in_path() -> String {
    "/portal/sign-in".to_string()
}

fn default_after_sign_in_path() -> String {
    "/portal".to_string()
}
