//! Content loader - loads posts and YAML registries from the content directory
//!
//! Runs once at process start; everything it returns is immutable afterwards.

use anyhow::{Context, Result};
use chrono::Local;
use std::fs;
use std::path::Path;
use walkdir::WalkDir;

use super::{markdown, Author, Category, FrontMatter, Post};
use crate::links::InternalLink;
use crate::Site;

/// Loads content from the content directory
pub struct ContentLoader<'a> {
    site: &'a Site,
}

impl<'a> ContentLoader<'a> {
    /// Create a new content loader
    pub fn new(site: &'a Site) -> Self {
        Self { site }
    }

    /// Load all posts from content/posts
    pub fn load_posts(&self) -> Result<Vec<Post>> {
        let posts_dir = self.site.content_dir.join("posts");
        if !posts_dir.exists() {
            return Ok(Vec::new());
        }

        let mut posts = Vec::new();

        for entry in WalkDir::new(&posts_dir)
            .follow_links(true)
            .into_iter()
            .filter_map(|e| e.ok())
        {
            let path = entry.path();
            if path.is_file() && is_markdown_file(path) {
                match self.load_post(path) {
                    Ok(post) => posts.push(post),
                    Err(e) => {
                        tracing::warn!("Failed to load post {:?}: {}", path, e);
                    }
                }
            }
        }

        Ok(posts)
    }

    /// Load a single post from a file
    fn load_post(&self, path: &Path) -> Result<Post> {
        let content = fs::read_to_string(path)?;
        let (fm, body) = FrontMatter::parse(&content)?;

        // Fall back to the file modification time when no date is given
        let metadata = fs::metadata(path)?;
        let file_modified = metadata
            .modified()
            .ok()
            .map(|t| chrono::DateTime::<Local>::from(t));

        let published_at = fm
            .parse_date()
            .unwrap_or_else(|| file_modified.unwrap_or_else(Local::now));
        let updated_at = fm.parse_updated();

        let title = fm.title.clone().unwrap_or_else(|| {
            path.file_stem()
                .and_then(|s| s.to_str())
                .unwrap_or("Untitled")
                .to_string()
        });

        // Slug comes from front-matter when present, otherwise the filename
        let slug = fm.slug.clone().unwrap_or_else(|| {
            let stem = path
                .file_stem()
                .and_then(|s| s.to_str())
                .unwrap_or("untitled");
            slug::slugify(stem)
        });

        let (excerpt_md, full_md) = markdown::split_excerpt(body);
        let content_html = markdown::render_markdown(&full_md);
        let excerpt = fm.excerpt.clone().or(excerpt_md).unwrap_or_default();

        let reading_time = markdown::reading_time(&content_html);

        Ok(Post {
            id: slug.clone(),
            slug,
            title,
            excerpt,
            content: content_html,
            raw: body.to_string(),
            category: fm.category.clone().unwrap_or_default(),
            author: fm.author.clone().unwrap_or_default(),
            tags: fm.tags.clone(),
            published_at,
            updated_at,
            reading_time,
            featured: fm.featured,
            cover: fm.cover.clone().unwrap_or_default(),
        })
    }

    /// Load the category registry from content/categories.yml
    pub fn load_categories(&self) -> Result<Vec<Category>> {
        self.load_registry("categories.yml")
    }

    /// Load the author registry from content/authors.yml
    pub fn load_authors(&self) -> Result<Vec<Author>> {
        self.load_registry("authors.yml")
    }

    /// Load the internal-link registry from content/links.yml
    pub fn load_links(&self) -> Result<Vec<InternalLink>> {
        self.load_registry("links.yml")
    }

    /// Load a YAML registry file, returning an empty list when it is absent
    fn load_registry<T: serde::de::DeserializeOwned>(&self, name: &str) -> Result<Vec<T>> {
        let path = self.site.content_dir.join(name);
        if !path.exists() {
            return Ok(Vec::new());
        }

        let content =
            fs::read_to_string(&path).with_context(|| format!("Failed to read {:?}", path))?;
        let items: Vec<T> =
            serde_yaml::from_str(&content).with_context(|| format!("Failed to parse {:?}", path))?;
        Ok(items)
    }
}

/// Check if a file is a markdown file
fn is_markdown_file(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| e == "md" || e == "markdown")
        .unwrap_or(false)
}
