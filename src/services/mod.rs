pub mod identity;
pub mod payments;

pub use identity::{IdentityClient, IdentityConfig};
pub use payments::{CheckoutCallbacks, GatewayConfig, PaymentGateway};
