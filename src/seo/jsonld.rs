//! JSON-LD structured-data objects
//!
//! Built as plain `serde_json` values; the presentation layer serializes them
//! into `<script type="application/ld+json">` blocks.

use serde_json::{json, Value};

use crate::config::SiteConfig;
use crate::content::{Author, Post};

/// Site-wide Organization object
pub fn organization(config: &SiteConfig) -> Value {
    let base_url = config.url.trim_end_matches('/');
    json!({
        "@context": "https://schema.org",
        "@type": "Organization",
        "name": config.organization.name,
        "url": format!("{}/", base_url),
        "logo": config.organization.logo,
        "email": config.organization.email,
    })
}

/// BlogPosting object for a single post
pub fn blog_posting(config: &SiteConfig, post: &Post, author: &Author) -> Value {
    let base_url = config.url.trim_end_matches('/');
    let date_modified = post.updated_at.unwrap_or(post.published_at);

    json!({
        "@context": "https://schema.org",
        "@type": "BlogPosting",
        "headline": post.title,
        "description": post.excerpt,
        "url": format!("{}{}", base_url, post.path()),
        "datePublished": post.published_at.to_rfc3339(),
        "dateModified": date_modified.to_rfc3339(),
        "image": post.cover.url,
        "author": {
            "@type": "Person",
            "name": author.name,
            "jobTitle": author.role,
        },
        "publisher": {
            "@type": "Organization",
            "name": config.organization.name,
        },
    })
}
