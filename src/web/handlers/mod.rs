pub mod courses;
pub mod pages;
pub mod payment;
pub mod stats;

use actix_web::{web, HttpResponse};

use crate::web::helpers::render_not_found;
use crate::web::state::AppState;

pub fn configure(cfg: &mut web::ServiceConfig) {
    pages::configure(cfg);
    courses::configure(cfg);
    stats::configure(cfg);
    payment::configure(cfg);
}

/// Fallback for unknown routes; wired as the app's default service.
pub async fn not_found(state: web::Data<AppState>) -> HttpResponse {
    render_not_found(&state)
}
