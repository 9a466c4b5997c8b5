// Export the scraper, merge and output modules
pub mod merge;
pub mod output;
pub mod scraper;

// Re-export tests for integration testing
#[cfg(test)]
pub mod tests;

// Re-export key types and functions for easier access
pub use crate::merge::{merge_icons, merge_path_keys, resolve_merge_path};
pub use crate::output::to_json_pretty;
pub use crate::scraper::{
    default_urls, extract_icons, fetch_html, scrape_icons, IconRecord, BASE_URL,
};
