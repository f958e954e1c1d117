use askama::Template;

use crate::counters::RampFrame;
use crate::models::{PaymentNotice, VideoLink};

/// Fields the base layout needs on every page: document title, canonical
/// URL, and the identity-provider bootstrap embedded in the shell.
pub struct Shell {
    pub title: String,
    pub canonical: String,
    pub identity_enabled: bool,
    pub identity_config: String,
}

/// A course resolved for display: media reference absolutized, price
/// formatted, enroll link built.
pub struct CourseCard {
    pub id: String,
    pub title: String,
    pub summary: String,
    pub price_label: String,
    pub image: Option<String>,
    pub enroll_href: String,
}

pub struct FacultyCard {
    pub name: String,
    pub photo: Option<String>,
}

pub struct FaqItem {
    pub question: &'static str,
    pub answer: &'static str,
}

#[derive(Template)]
#[template(path = "home.html")]
pub struct HomeTemplate {
    pub shell: Shell,
    pub popular: Vec<CourseCard>,
    pub faculty: Vec<FacultyCard>,
    pub videos: Vec<VideoLink>,
    pub faqs: Vec<FaqItem>,
    pub stats_students: String,
    pub stats_courses: String,
    pub stats_exams: String,
    pub stats_next: Option<u32>,
}

#[derive(Template)]
#[template(path = "courses.html")]
pub struct CoursesTemplate {
    pub shell: Shell,
    pub query: String,
    pub results: Vec<CourseCard>,
}

#[derive(Template)]
#[template(path = "fragments/course_results.html")]
pub struct CourseResultsTemplate {
    pub query: String,
    pub results: Vec<CourseCard>,
}

#[derive(Template)]
#[template(path = "fragments/stats_frame.html")]
pub struct StatsFrameTemplate {
    pub stats_students: String,
    pub stats_courses: String,
    pub stats_exams: String,
    pub stats_next: Option<u32>,
}

impl StatsFrameTemplate {
    pub fn from_frame(frame: RampFrame) -> Self {
        let next = frame.phase.next_step();
        Self {
            stats_students: frame.students,
            stats_courses: frame.courses,
            stats_exams: frame.exams,
            stats_next: next,
        }
    }
}

#[derive(Template)]
#[template(path = "payment_success.html")]
pub struct PaymentSuccessTemplate {
    pub shell: Shell,
    pub tran_id: Option<String>,
}

#[derive(Template)]
#[template(path = "payment_fail.html")]
pub struct PaymentFailTemplate {
    pub shell: Shell,
    pub notice: PaymentNotice,
}

#[derive(Template)]
#[template(path = "privacy.html")]
pub struct PrivacyTemplate {
    pub shell: Shell,
}

#[derive(Template)]
#[template(path = "refund.html")]
pub struct RefundTemplate {
    pub shell: Shell,
}

#[derive(Template)]
#[template(path = "contact.html")]
pub struct ContactTemplate {
    pub shell: Shell,
}

#[derive(Template)]
#[template(path = "not_found.html")]
pub struct NotFoundTemplate {
    pub shell: Shell,
}
