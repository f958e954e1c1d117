use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FacultyMember {
    pub name: String,
    /// Image reference on the media CDN.
    #[serde(default)]
    pub photo: Option<String>,
}
