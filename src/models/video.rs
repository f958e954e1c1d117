use serde::{Deserialize, Serialize};

/// A recorded class published on the academy's Facebook page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VideoLink {
    pub title: String,
    pub url: String,
}
