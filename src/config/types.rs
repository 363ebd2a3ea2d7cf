use serde::{Deserialize, Serialize};

use crate::config::defaults;

/// Options controlling table of contents generation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TocConfig {
    /// Marker class of the element scanned for headings
    #[serde(default = "defaults::default_article_selector")]
    pub article_selector: String,

    /// Marker class of the element that receives the generated list
    #[serde(default = "defaults::default_toc_selector")]
    pub toc_selector: String,

    /// Minimum heading level to include (h1 = 1, h2 = 2, etc.)
    #[serde(default = "defaults::default_min_level")]
    pub min_level: usize,

    /// Maximum heading level to include
    #[serde(default = "defaults::default_max_level")]
    pub max_level: usize,

    /// CSS class applied to the generated top-level list
    #[serde(default = "defaults::default_list_class")]
    pub list_class: String,
}

impl Default for TocConfig {
    fn default() -> Self {
        TocConfig {
            article_selector: defaults::default_article_selector(),
            toc_selector: defaults::default_toc_selector(),
            min_level: defaults::default_min_level(),
            max_level: defaults::default_max_level(),
            list_class: defaults::default_list_class(),
        }
    }
}
