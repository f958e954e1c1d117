use urlencoding::encode;

use crate::models::Course;

#[derive(Debug, Clone)]
pub struct GatewayConfig {
    /// Hosted checkout endpoint the visitor is redirected to.
    pub checkout_url: String,
    pub store_id: String,
}

/// Link builder for the external payment gateway's hosted checkout.
///
/// Enrollment is entirely redirect-based: we send the visitor to the
/// gateway with our callback URLs, and the gateway sends them back to
/// `/payment/success`, `/payment/fail` or `/payment/cancel` with its own
/// transaction id. Nothing is verified server-side here.
#[derive(Debug, Clone)]
pub struct PaymentGateway {
    config: GatewayConfig,
}

/// Absolute callback URLs the gateway redirects back to.
#[derive(Debug, Clone)]
pub struct CheckoutCallbacks {
    pub success_url: String,
    pub fail_url: String,
    pub cancel_url: String,
}

impl PaymentGateway {
    pub fn new(config: GatewayConfig) -> Self {
        Self { config }
    }

    pub fn checkout_url(&self, course: &Course, callbacks: &CheckoutCallbacks) -> String {
        format!(
            "{}?store_id={}&item_id={}&item_name={}&amount={}&currency=BDT\
             &success_url={}&fail_url={}&cancel_url={}",
            self.config.checkout_url,
            encode(&self.config.store_id),
            encode(&course.id),
            encode(&course.title),
            course.price.unwrap_or(0),
            encode(&callbacks.success_url),
            encode(&callbacks.fail_url),
            encode(&callbacks.cancel_url),
        )
    }
}
