use actix_web::{get, web, Responder};

use crate::counters::CounterRamp;

use crate::web::helpers::{course_card, faculty_card, render, shell};
use crate::web::state::AppState;
use crate::web::templates::{
    ContactTemplate, FaqItem, HomeTemplate, PrivacyTemplate, RefundTemplate, StatsFrameTemplate,
};

#[get("/")]
pub async fn home(state: web::Data<AppState>) -> impl Responder {
    let popular = state
        .catalog
        .popular()
        .iter()
        .map(|c| course_card(&state, c))
        .collect();
    let faculty = state
        .catalog
        .faculty
        .iter()
        .map(|m| faculty_card(&state, m))
        .collect();

    // The counters paint at rest. The viewport trigger on the stats section
    // requests step 1; handing the initial frame a next-step here would
    // start the ramp before the section is ever seen.
    let ramp = CounterRamp::new(state.catalog.stats);
    let idle = StatsFrameTemplate::from_frame(ramp.frame(0));

    render(HomeTemplate {
        shell: shell(&state, "Learn Without Limits", "/"),
        popular,
        faculty,
        videos: state.catalog.videos.clone(),
        faqs: default_faqs(),
        stats_students: idle.stats_students,
        stats_courses: idle.stats_courses,
        stats_exams: idle.stats_exams,
        stats_next: None,
    })
}

#[get("/privacy")]
pub async fn privacy(state: web::Data<AppState>) -> impl Responder {
    render(PrivacyTemplate {
        shell: shell(&state, "Privacy Policy", "/privacy"),
    })
}

#[get("/refund")]
pub async fn refund(state: web::Data<AppState>) -> impl Responder {
    render(RefundTemplate {
        shell: shell(&state, "Refund Policy", "/refund"),
    })
}

#[get("/contact")]
pub async fn contact(state: web::Data<AppState>) -> impl Responder {
    render(ContactTemplate {
        shell: shell(&state, "Contact Us", "/contact"),
    })
}

fn default_faqs() -> Vec<FaqItem> {
    vec![
        FaqItem {
            question: "How do I enroll in a course?",
            answer: "Pick a course and hit Enroll. You will be taken to our payment \
                     partner's secure checkout; once the payment completes you are \
                     brought straight back here.",
        },
        FaqItem {
            question: "My payment failed but money was deducted. What now?",
            answer: "Failed or cancelled payments are reversed automatically by the \
                     gateway, usually within a few hours. If the refund has not \
                     arrived within three working days, reach us through the contact \
                     page with your transaction ID.",
        },
        FaqItem {
            question: "Can I watch classes later?",
            answer: "Yes. Every live class is recorded and published on our Facebook \
                     page. The latest recordings are listed right on this site.",
        },
        FaqItem {
            question: "Do you offer refunds?",
            answer: "Course fees are refundable within the window described in our \
                     refund policy. See the Refund Policy page for the details.",
        },
    ]
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(home)
        .service(privacy)
        .service(refund)
        .service(contact);
}
