use actix_web::{get, web, Responder};

use crate::counters::CounterRamp;

use crate::web::helpers::render;
use crate::web::state::AppState;
use crate::web::templates::StatsFrameTemplate;

/// One frame of the counter ramp. The home page requests step 1 when the
/// stats section first scrolls into view; each response schedules the next
/// step itself until the ramp is done, after which no further trigger is
/// emitted. Steps past the end render the terminal frame, so a replayed or
/// hand-edited request cannot restart the animation.
#[get("/fragments/stats/{step}")]
pub async fn stats_frame(state: web::Data<AppState>, path: web::Path<u32>) -> impl Responder {
    let step = path.into_inner();
    let ramp = CounterRamp::new(state.catalog.stats);

    render(StatsFrameTemplate::from_frame(ramp.frame(step)))
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(stats_frame);
}
