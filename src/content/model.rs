//! Post, Category and Author models

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

/// A blog post
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Post {
    /// Stable identifier
    pub id: String,

    /// Slug (URL-friendly name, unique among posts)
    pub slug: String,

    /// Post title
    pub title: String,

    /// Short summary shown on listing cards
    pub excerpt: String,

    /// Rendered HTML content
    pub content: String,

    /// Raw markdown content
    pub raw: String,

    /// Slug of the category this post belongs to
    pub category: String,

    /// Slug of the post author
    pub author: String,

    /// Post tags
    pub tags: Vec<String>,

    /// Publication date
    pub published_at: DateTime<Local>,

    /// Last updated date
    pub updated_at: Option<DateTime<Local>>,

    /// Estimated reading time in minutes (always >= 1)
    pub reading_time: usize,

    /// Whether the post is pinned to featured slots
    pub featured: bool,

    /// Cover image
    pub cover: CoverImage,
}

impl Post {
    /// Human-readable publication date, e.g. "January 15, 2026"
    pub fn formatted_date(&self, format: &str) -> String {
        self.published_at.format(format).to_string()
    }

    /// Canonical path of this post on the site
    pub fn path(&self) -> String {
        format!("/blog/{}/", self.slug)
    }
}

/// Cover image with alt text
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CoverImage {
    pub url: String,
    #[serde(default)]
    pub alt: String,
}

/// A named grouping of posts used for filtering and navigation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Category {
    pub id: String,
    pub slug: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub color: CategoryColor,
    /// Number of posts referencing this category (derived at load time)
    #[serde(default)]
    pub count: usize,
}

/// Closed set of UI color tokens a category can carry.
///
/// Unknown values fail deserialization rather than leaking arbitrary strings
/// into the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CategoryColor {
    Blue,
    Green,
    Purple,
    Orange,
    Teal,
    #[default]
    Slate,
}

impl CategoryColor {
    /// CSS class token for this color
    pub fn css_token(&self) -> &'static str {
        match self {
            CategoryColor::Blue => "badge-blue",
            CategoryColor::Green => "badge-green",
            CategoryColor::Purple => "badge-purple",
            CategoryColor::Orange => "badge-orange",
            CategoryColor::Teal => "badge-teal",
            CategoryColor::Slate => "badge-slate",
        }
    }
}

/// A post author
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Author {
    pub id: String,
    pub slug: String,
    pub name: String,
    #[serde(default)]
    pub role: String,
    #[serde(default)]
    pub bio: String,
    #[serde(default)]
    pub avatar: String,
    #[serde(default)]
    pub social: SocialLinks,
}

/// Optional social profiles for an author
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SocialLinks {
    pub email: Option<String>,
    pub linkedin: Option<String>,
    pub twitter: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_color_parses_known_tokens() {
        let color: CategoryColor = serde_yaml::from_str("green").unwrap();
        assert_eq!(color, CategoryColor::Green);
        assert_eq!(color.css_token(), "badge-green");
    }

    #[test]
    fn test_category_color_rejects_unknown_token() {
        let result: Result<CategoryColor, _> = serde_yaml::from_str("chartreuse");
        assert!(result.is_err());
    }

    #[test]
    fn test_category_color_default() {
        assert_eq!(CategoryColor::default(), CategoryColor::Slate);
    }

    #[test]
    fn test_post_path() {
        let yaml = r#"
id: p1
slug: hire-a-va
title: Hire a VA
excerpt: ""
content: ""
raw: ""
category: guides
author: jane
tags: []
published_at: 2026-01-15T10:00:00+00:00
updated_at: null
reading_time: 4
featured: false
cover:
  url: /img/cover.jpg
  alt: cover
"#;
        let post: Post = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(post.path(), "/blog/hire-a-va/");
    }
}
