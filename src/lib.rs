//! staffsite: content query core for a staffing-agency marketing site
//!
//! Loads blog content (markdown posts plus YAML registries of categories,
//! authors, and internal links) into an immutable in-memory store at startup
//! and exposes deterministic query operations over it: slug lookup, category
//! filtering, pagination, and related-link matching. A thin JSON API and a
//! sitemap generator sit on top for the presentation layer.

pub mod commands;
pub mod config;
pub mod content;
pub mod links;
pub mod query;
pub mod seo;
pub mod server;
pub mod store;

use anyhow::Result;
use std::path::Path;

/// The main site handle: configuration plus resolved directories
#[derive(Clone)]
pub struct Site {
    /// Site configuration
    pub config: config::SiteConfig,
    /// Base directory
    pub base_dir: std::path::PathBuf,
    /// Content directory (posts + YAML registries)
    pub content_dir: std::path::PathBuf,
}

impl Site {
    /// Create a new site instance from a directory
    pub fn new<P: AsRef<Path>>(base_dir: P) -> Result<Self> {
        let base_dir = base_dir.as_ref().to_path_buf();
        let config_path = base_dir.join("site.yml");

        let config = if config_path.exists() {
            config::SiteConfig::load(&config_path)?
        } else {
            config::SiteConfig::default()
        };

        let content_dir = base_dir.join(&config.content_dir);

        Ok(Self {
            config,
            base_dir,
            content_dir,
        })
    }

    /// Load all content into an immutable store.
    ///
    /// This is the only I/O on the content path; everything downstream is a
    /// pure computation over the returned store.
    pub fn load(&self) -> Result<store::ContentStore> {
        let loader = content::ContentLoader::new(self);
        let posts = loader.load_posts()?;
        let categories = loader.load_categories()?;
        let authors = loader.load_authors()?;
        let links = loader.load_links()?;
        let store = store::ContentStore::build(posts, categories, authors, links)?;
        Ok(store)
    }
}
