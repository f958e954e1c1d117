use serde::{Deserialize, Serialize};

/// Headline totals animated on the home page.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StatTargets {
    pub students: u64,
    pub courses: u64,
    pub exams: u64,
}
