use std::env;

use crate::common::ConfigError;
use crate::services::{GatewayConfig, IdentityConfig};

/// Everything the site reads from the environment, resolved once at startup.
///
/// All values have working defaults so a bare `cargo run` serves the seeded
/// site; deployments override via `.env` (see `.env.example`).
#[derive(Debug, Clone)]
pub struct SiteConfig {
    pub bind_addr: String,
    /// Absolute origin used for canonical links, metadata and the payment
    /// gateway's callback URLs. No trailing slash.
    pub public_base_url: String,
    pub catalog_path: String,
    /// Image CDN origin for faculty/course photos. No trailing slash.
    pub media_base_url: String,
    pub identity: IdentityConfig,
    pub gateway: GatewayConfig,
}

const DEFAULT_BASE_URL: &str = "http://localhost:8080";

impl SiteConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        let public_base_url = match optional("PUBLIC_BASE_URL")? {
            Some(url) => validate_origin("PUBLIC_BASE_URL", url)?,
            None => {
                log::info!("PUBLIC_BASE_URL not set, using {DEFAULT_BASE_URL}");
                DEFAULT_BASE_URL.to_string()
            }
        };

        let media_base_url = match optional("MEDIA_BASE_URL")? {
            Some(url) => validate_origin("MEDIA_BASE_URL", url)?,
            None => "https://ik.imagekit.io/uttoron".to_string(),
        };

        Ok(Self {
            bind_addr: optional("BIND_ADDR")?.unwrap_or_else(|| "0.0.0.0:8080".to_string()),
            public_base_url,
            catalog_path: optional("CATALOG_PATH")?
                .unwrap_or_else(|| "data/catalog.json".to_string()),
            media_base_url,
            identity: IdentityConfig {
                api_key: optional("IDENTITY_API_KEY")?.unwrap_or_default(),
                project_id: optional("IDENTITY_PROJECT_ID")?.unwrap_or_default(),
                sender_id: optional("IDENTITY_SENDER_ID")?.unwrap_or_default(),
                app_id: optional("IDENTITY_APP_ID")?.unwrap_or_default(),
            },
            gateway: GatewayConfig {
                checkout_url: optional("CHECKOUT_URL")?
                    .unwrap_or_else(|| "https://sandbox.pay.example/checkout".to_string()),
                store_id: optional("CHECKOUT_STORE_ID")?
                    .unwrap_or_else(|| "uttoron-test".to_string()),
            },
        })
    }

    /// Absolute URL for a site path, e.g. `site_url("/payment/success")`.
    pub fn site_url(&self, path: &str) -> String {
        debug_assert!(path.starts_with('/'));
        format!("{}{}", self.public_base_url, path)
    }

    /// Absolute URL for an image reference from the feed. References that are
    /// already absolute pass through untouched.
    pub fn media_url(&self, reference: &str) -> String {
        if reference.starts_with("http://") || reference.starts_with("https://") {
            return reference.to_string();
        }
        let reference = reference.trim_start_matches('/');
        format!("{}/{}", self.media_base_url, reference)
    }
}

fn optional(key: &'static str) -> Result<Option<String>, ConfigError> {
    match env::var(key) {
        Ok(value) => {
            let value = value.trim().to_string();
            Ok(if value.is_empty() { None } else { Some(value) })
        }
        Err(env::VarError::NotPresent) => Ok(None),
        Err(env::VarError::NotUnicode(_)) => Err(ConfigError::NotUnicode(key)),
    }
}

fn validate_origin(key: &'static str, url: String) -> Result<String, ConfigError> {
    if !(url.starts_with("http://") || url.starts_with("https://")) {
        return Err(ConfigError::Invalid {
            key,
            reason: format!("expected an http(s) origin, got {url:?}"),
        });
    }
    Ok(url.trim_end_matches('/').to_string())
}
