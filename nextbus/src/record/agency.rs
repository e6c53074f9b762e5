use serde::{Deserialize, Serialize};
use serde_with::{serde_as, DefaultOnNull};
use std::fmt::Display;

/// a transit agency served by the feed
#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Agency {
    #[serde_as(as = "DefaultOnNull")]
    pub tag: String,
    #[serde_as(as = "DefaultOnNull")]
    pub title: String,
    #[serde_as(as = "DefaultOnNull")]
    pub region_title: String,
    #[serde_as(as = "DefaultOnNull")]
    pub short_title: String,
}

impl Display for Agency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "\n\t Agency: {} - Tag: {}\n\t Region: {} Short: {}",
            self.title, self.tag, self.region_title, self.short_title
        )
    }
}
