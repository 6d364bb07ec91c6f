//! Embedded stylesheets.

use std::collections::HashMap;
use std::sync::OnceLock;

static CSS_CACHE: OnceLock<HashMap<&'static str, &'static str>> = OnceLock::new();

pub struct CssLoader;

impl CssLoader {
    fn cache() -> &'static HashMap<&'static str, &'static str> {
        CSS_CACHE.get_or_init(|| {
            let styles: [(&'static str, &'static str); 2] = [
                (
                    "main",
                    include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/assets/styles/main.css")),
                ),
                (
                    "toast",
                    include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/assets/styles/toast.css")),
                ),
            ];
            styles.into_iter().collect()
        })
    }

    #[inline]
    pub fn get(style_name: &str) -> Option<&'static str> {
        Self::cache().get(style_name).copied()
    }

    /// Combines multiple styles into a single string. Unknown names are skipped.
    pub fn combine(styles: &[&str]) -> String {
        styles
            .iter()
            .filter_map(|&name| Self::get(name))
            .collect::<Vec<_>>()
            .join("\n")
    }

    pub fn all() -> String {
        Self::combine(&["main", "toast"])
    }
}
