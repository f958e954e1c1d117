use actix_web::{HttpRequest, HttpResponse};
use askama::Template;

use crate::models::{Course, FacultyMember};

use crate::web::state::AppState;
use crate::web::templates::{CourseCard, FacultyCard, NotFoundTemplate, Shell};

pub fn is_htmx(req: &HttpRequest) -> bool {
    req.headers()
        .get("HX-Request")
        .and_then(|v| v.to_str().ok())
        .is_some_and(|s| s.eq_ignore_ascii_case("true"))
}

pub fn render<T: Template>(t: T) -> HttpResponse {
    match t.render() {
        Ok(body) => HttpResponse::Ok()
            .content_type("text/html; charset=utf-8")
            .body(body),
        Err(e) => HttpResponse::InternalServerError()
            .content_type("text/plain; charset=utf-8")
            .body(format!("Template error: {e}")),
    }
}

/// Full 404 page, shared by the default service and handlers that miss a
/// lookup (unknown course id).
pub fn render_not_found(state: &AppState) -> HttpResponse {
    let template = NotFoundTemplate {
        shell: shell(state, "Page Not Found", "/"),
    };
    match template.render() {
        Ok(body) => HttpResponse::NotFound()
            .content_type("text/html; charset=utf-8")
            .body(body),
        Err(e) => HttpResponse::InternalServerError()
            .content_type("text/plain; charset=utf-8")
            .body(format!("Template error: {e}")),
    }
}

/// Shell fields for a page at `path`. The canonical URL honors the
/// `PUBLIC_BASE_URL` override.
pub fn shell(state: &AppState, title: &str, path: &str) -> Shell {
    Shell {
        title: format!("{title} | Uttoron Academy"),
        canonical: state.config.site_url(path),
        identity_enabled: state.identity.is_configured(),
        identity_config: state.identity.web_config_json(),
    }
}

pub fn course_card(state: &AppState, course: &Course) -> CourseCard {
    CourseCard {
        id: course.id.clone(),
        title: course.title.clone(),
        summary: course.summary.clone(),
        price_label: course.price_label(),
        image: course
            .image
            .as_deref()
            .map(|reference| state.config.media_url(reference)),
        enroll_href: format!("/enroll/{}", urlencoding::encode(&course.id)),
    }
}

pub fn faculty_card(state: &AppState, member: &FacultyMember) -> FacultyCard {
    FacultyCard {
        name: member.name.clone(),
        photo: member
            .photo
            .as_deref()
            .map(|reference| state.config.media_url(reference)),
    }
}

pub fn client_ip(req: &HttpRequest) -> String {
    req.connection_info()
        .realip_remote_addr()
        .unwrap_or("unknown")
        .to_string()
}
