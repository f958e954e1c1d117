use serde::{Deserialize, Serialize};

/// A course as the feed delivers it. Only `id` and `title` are load bearing;
/// the remaining fields are display-only and tolerated when absent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Course {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub summary: String,
    /// Price in whole BDT. `None` renders as "Free".
    #[serde(default)]
    pub price: Option<u32>,
    /// Image reference, resolved against the media CDN at render time.
    #[serde(default)]
    pub image: Option<String>,
}

impl Course {
    pub fn price_label(&self) -> String {
        match self.price {
            Some(taka) => format!("৳{taka}"),
            None => "Free".to_string(),
        }
    }
}
