use std::fs;

use serde::Deserialize;

use crate::common::CatalogError;
use crate::models::{Course, FacultyMember, StatTargets, VideoLink};

/// Most courses shown in the "popular" strip on the home page.
pub const MAX_POPULAR: usize = 4;

/// The feed's `courses` value, as the upstream exporter has actually shipped
/// it over time: a bare array, an object wrapping the array under `courses`
/// or `data`, or something else entirely. Shape sniffing lives here and
/// nowhere else; the rest of the crate only ever sees `Vec<Course>`.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum CourseListPayload {
    List(Vec<Course>),
    Wrapped { courses: Vec<Course> },
    Data { data: Vec<Course> },
    Other(serde_json::Value),
}

impl CourseListPayload {
    pub fn into_courses(self) -> Vec<Course> {
        match self {
            Self::List(courses) => courses,
            Self::Wrapped { courses } => courses,
            Self::Data { data } => data,
            Self::Other(_) => Vec::new(),
        }
    }
}

/// Raw deserialization target for the feed file. Every section is optional so
/// a partial export still serves a page with empty states.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct CatalogFeed {
    pub courses: Option<CourseListPayload>,
    pub faculty: Vec<FacultyMember>,
    pub videos: Vec<VideoLink>,
    pub stats: StatTargets,
}

/// In-memory course catalog, loaded once at startup from the JSON feed the
/// data pipeline drops next to the binary. Read-only for the process
/// lifetime; shared across workers behind an `Arc`.
#[derive(Debug, Clone)]
pub struct Catalog {
    pub courses: Vec<Course>,
    pub faculty: Vec<FacultyMember>,
    pub videos: Vec<VideoLink>,
    pub stats: StatTargets,
}

impl Catalog {
    pub fn load(path: &str) -> Result<Self, CatalogError> {
        let raw = fs::read_to_string(path).map_err(|source| CatalogError::Read {
            path: path.to_string(),
            source,
        })?;

        let feed: CatalogFeed =
            serde_json::from_str(&raw).map_err(|source| CatalogError::Parse {
                path: path.to_string(),
                source,
            })?;

        Ok(Self::from_feed(feed))
    }

    pub fn from_feed(feed: CatalogFeed) -> Self {
        Self {
            courses: feed
                .courses
                .map(CourseListPayload::into_courses)
                .unwrap_or_default(),
            faculty: feed.faculty,
            videos: feed.videos,
            stats: feed.stats,
        }
    }

    /// Empty catalog; pages render their empty states.
    pub fn empty() -> Self {
        Self::from_feed(CatalogFeed::default())
    }

    pub fn popular(&self) -> &[Course] {
        &self.courses[..self.courses.len().min(MAX_POPULAR)]
    }

    pub fn course(&self, id: &str) -> Option<&Course> {
        self.courses.iter().find(|c| c.id == id)
    }

    /// Case-insensitive substring filter on the title. The query is used as
    /// typed; an empty query matches everything.
    pub fn search(&self, query: &str) -> Vec<Course> {
        let needle = query.to_lowercase();
        self.courses
            .iter()
            .filter(|c| c.title.to_lowercase().contains(&needle))
            .cloned()
            .collect()
    }
}
