use actix_web::{get, web, HttpResponse, Responder};

use crate::models::PaymentNotice;
use crate::services::CheckoutCallbacks;

use crate::web::forms::PaymentRedirectQuery;
use crate::web::helpers::{render, render_not_found, shell};
use crate::web::state::AppState;
use crate::web::templates::{PaymentFailTemplate, PaymentSuccessTemplate};

/// Hands the visitor off to the gateway's hosted checkout. The gateway owns
/// everything from here until it redirects back to one of the callback
/// routes below.
#[get("/enroll/{course_id}")]
pub async fn enroll(state: web::Data<AppState>, path: web::Path<String>) -> impl Responder {
    let course_id = path.into_inner();
    let course = match state.catalog.course(&course_id) {
        Some(course) => course,
        None => return render_not_found(&state),
    };

    let callbacks = CheckoutCallbacks {
        success_url: state.config.site_url("/payment/success"),
        fail_url: state.config.site_url("/payment/fail"),
        cancel_url: state.config.site_url("/payment/cancel"),
    };
    let checkout = state.gateway.checkout_url(course, &callbacks);

    log::info!("Enroll hand-off for course {course_id}");

    HttpResponse::SeeOther()
        .insert_header(("Location", checkout))
        .finish()
}

#[get("/payment/success")]
pub async fn payment_success(
    state: web::Data<AppState>,
    query: web::Query<PaymentRedirectQuery>,
) -> impl Responder {
    let query = query.into_inner();

    render(PaymentSuccessTemplate {
        shell: shell(&state, "Payment Successful", "/payment/success"),
        tran_id: query.tran_id.filter(|t| !t.is_empty()),
    })
}

/// Failure callback. The gateway's `reason` text is displayed verbatim and
/// decides only which headline the visitor sees; nothing here is verified
/// against the gateway, and nothing beyond display depends on it.
#[get("/payment/fail")]
pub async fn payment_fail(
    state: web::Data<AppState>,
    query: web::Query<PaymentRedirectQuery>,
) -> impl Responder {
    let query = query.into_inner();
    let notice = PaymentNotice::from_redirect(query.tran_id, query.reason);

    log::info!(
        "Payment {} redirect (tranId present: {})",
        notice.outcome,
        notice.tran_id.is_some()
    );

    render(PaymentFailTemplate {
        shell: shell(&state, "Payment Failed", "/payment/fail"),
        notice,
    })
}

/// Cancel callback. Some gateway configurations redirect here without any
/// reason text, so one is supplied that the classifier recognizes.
#[get("/payment/cancel")]
pub async fn payment_cancel(
    state: web::Data<AppState>,
    query: web::Query<PaymentRedirectQuery>,
) -> impl Responder {
    let query = query.into_inner();
    let reason = query
        .reason
        .filter(|r| !r.is_empty())
        .unwrap_or_else(|| "The payment was cancelled.".to_string());
    let notice = PaymentNotice::from_redirect(query.tran_id, Some(reason));

    render(PaymentFailTemplate {
        shell: shell(&state, "Payment Cancelled", "/payment/cancel"),
        notice,
    })
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(enroll)
        .service(payment_success)
        .service(payment_fail)
        .service(payment_cancel);
}
