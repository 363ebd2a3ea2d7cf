/// Default marker class for the element scanned for headings
pub fn default_article_selector() -> String {
    "article".to_string()
}

/// Default marker class for the element receiving the generated list
pub fn default_toc_selector() -> String {
    "table-of-contents".to_string()
}

/// Default minimum heading level
pub fn default_min_level() -> usize {
    1
}

/// Default maximum heading level
pub fn default_max_level() -> usize {
    6
}

/// Default class for the generated top-level list
pub fn default_list_class() -> String {
    "toc".to_string()
}
