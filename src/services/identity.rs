use serde_json::json;

/// Public project configuration for the hosted identity provider. These are
/// browser-visible values, not secrets, but the api key still stays out of
/// logs.
#[derive(Clone)]
pub struct IdentityConfig {
    pub api_key: String,
    pub project_id: String,
    pub sender_id: String,
    pub app_id: String,
}

/// Handle to the external identity provider.
///
/// Constructed exactly once in `main` and handed to handlers through
/// `AppState`; nothing else may build one, so there is no module-level
/// singleton to initialize twice. The client does no credential handling;
/// it only surfaces the project configuration the provider's browser SDK
/// boots from.
#[derive(Clone)]
pub struct IdentityClient {
    config: IdentityConfig,
}

impl IdentityClient {
    pub fn new(config: IdentityConfig) -> Self {
        Self { config }
    }

    /// The provider is optional in development; pages simply omit the
    /// sign-in affordances when it is not set up.
    pub fn is_configured(&self) -> bool {
        !self.config.api_key.is_empty()
            && !self.config.project_id.is_empty()
            && !self.config.app_id.is_empty()
    }

    pub fn project_id(&self) -> &str {
        &self.config.project_id
    }

    /// JSON blob embedded in the page for the provider's SDK, using the key
    /// names its loader expects.
    pub fn web_config_json(&self) -> String {
        json!({
            "apiKey": self.config.api_key,
            "projectId": self.config.project_id,
            "messagingSenderId": self.config.sender_id,
            "appId": self.config.app_id,
        })
        .to_string()
    }
}

impl std::fmt::Debug for IdentityClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("IdentityClient")
            .field("api_key", &"[redacted]")
            .field("project_id", &self.config.project_id)
            .field("sender_id", &self.config.sender_id)
            .field("app_id", &self.config.app_id)
            .finish()
    }
}

impl std::fmt::Debug for IdentityConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("IdentityConfig")
            .field("api_key", &"[redacted]")
            .field("project_id", &self.project_id)
            .field("sender_id", &self.sender_id)
            .field("app_id", &self.app_id)
            .finish()
    }
}
