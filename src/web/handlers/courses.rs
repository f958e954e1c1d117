use std::time::Duration;

use actix_web::{get, web, HttpRequest, HttpResponse, Responder};

use crate::web::forms::SearchQuery;
use crate::web::helpers::{client_ip, course_card, is_htmx, render, shell};
use crate::web::state::AppState;
use crate::web::templates::{CourseResultsTemplate, CoursesTemplate};

#[get("/courses")]
pub async fn courses_page(
    state: web::Data<AppState>,
    query: web::Query<SearchQuery>,
) -> impl Responder {
    // The query is echoed back into the input exactly as typed; only the
    // filter lowercases its own copy.
    let q = query.q.clone().unwrap_or_default();
    let results = state
        .catalog
        .search(&q)
        .iter()
        .map(|c| course_card(&state, c))
        .collect();

    render(CoursesTemplate {
        shell: shell(&state, "All Courses", "/courses"),
        query: q,
        results,
    })
}

/// Live-search partial, requested on every keystroke. Swaps the results
/// grid only; the surrounding page is untouched. A direct visit lands on
/// the full catalog page instead of a bare fragment.
#[get("/fragments/courses")]
pub async fn search_fragment(
    state: web::Data<AppState>,
    req: HttpRequest,
    query: web::Query<SearchQuery>,
) -> impl Responder {
    let q = query.q.clone().unwrap_or_default();

    if !is_htmx(&req) {
        let target = format!("/courses?q={}", urlencoding::encode(&q));
        return HttpResponse::SeeOther()
            .insert_header(("Location", target))
            .finish();
    }

    // Generous, but a held-down key in an open tab should not own a worker.
    if !state.rate_limiter.check_rate_limit(
        &format!("search:{}", client_ip(&req)),
        120,
        Duration::from_secs(60),
    ) {
        return HttpResponse::TooManyRequests()
            .content_type("text/html; charset=utf-8")
            .body("<p class=\"empty-state\">Searching too fast. Give it a second.</p>");
    }

    let results = state
        .catalog
        .search(&q)
        .iter()
        .map(|c| course_card(&state, c))
        .collect();

    render(CourseResultsTemplate { query: q, results })
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(courses_page).service(search_fragment);
}
