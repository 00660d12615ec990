use serde::{Deserialize, Serialize};

/// A meme template: a pre-made image usable as a meme base.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TemplateRecord {
    pub name: String,
    pub url: String,
    pub category: String,
}
