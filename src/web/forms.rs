use serde::Deserialize;

#[derive(Deserialize)]
pub struct SearchQuery {
    pub q: Option<String>,
}

/// Redirect parameters as the payment gateway appends them. `tranId` keeps
/// the gateway's camelCase spelling on the wire.
#[derive(Deserialize)]
pub struct PaymentRedirectQuery {
    #[serde(rename = "tranId")]
    pub tran_id: Option<String>,
    pub reason: Option<String>,
}
