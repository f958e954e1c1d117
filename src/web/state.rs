use std::sync::Arc;

use crate::catalog::Catalog;
use crate::config::SiteConfig;
use crate::services::{IdentityClient, PaymentGateway};

use crate::web::security::RateLimiter;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<SiteConfig>,
    pub catalog: Arc<Catalog>,
    pub identity: Arc<IdentityClient>,
    pub gateway: Arc<PaymentGateway>,
    pub rate_limiter: Arc<RateLimiter>,
}

impl AppState {
    /// Wires the service clients off the resolved configuration. The identity
    /// client and gateway are built here and nowhere else.
    pub fn build(config: SiteConfig, catalog: Catalog) -> Self {
        let identity = IdentityClient::new(config.identity.clone());
        let gateway = PaymentGateway::new(config.gateway.clone());

        Self {
            config: Arc::new(config),
            catalog: Arc::new(catalog),
            identity: Arc::new(identity),
            gateway: Arc::new(gateway),
            rate_limiter: Arc::new(RateLimiter::new()),
        }
    }
}
