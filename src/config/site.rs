//! Site configuration (site.yml)

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Main site configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    // Site
    pub title: String,
    pub description: String,
    pub author: String,

    // URL
    pub url: String,

    // Directory
    pub content_dir: String,

    // Pagination
    pub per_page: usize,

    // Related-links block size
    pub related_max: usize,

    // Date format used for the human-readable published date
    pub date_format: String,

    // Organization details for JSON-LD
    pub organization: OrganizationConfig,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: "Staffsite".to_string(),
            description: String::new(),
            author: String::new(),

            url: "http://example.com".to_string(),

            content_dir: "content".to_string(),

            per_page: 9,
            related_max: 3,

            date_format: "%B %-d, %Y".to_string(),

            organization: OrganizationConfig::default(),
        }
    }
}

impl SiteConfig {
    /// Load configuration from a file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        let config: SiteConfig = serde_yaml::from_str(&content)?;
        Ok(config)
    }
}

/// Organization block rendered into the site-wide JSON-LD object
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OrganizationConfig {
    pub name: String,
    pub logo: String,
    pub email: String,
}

impl Default for OrganizationConfig {
    fn default() -> Self {
        Self {
            name: String::new(),
            logo: String::new(),
            email: String::new(),
        }
    }
}
