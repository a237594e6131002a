//! Immutable in-memory content store
//!
//! Built once at startup from loader output. Construction validates the
//! referential invariants of the content set; after that every accessor is a
//! pure read over immutable data, safe to share across request handlers.

use indexmap::IndexMap;
use thiserror::Error;

use crate::content::{Author, Category, Post};
use crate::links::{InternalLink, PageType, RelatedContentMatcher};

/// Errors raised while building or querying the content store
#[derive(Debug, Error)]
pub enum ContentError {
    #[error("no post found for slug '{slug}'")]
    NotFound { slug: String },

    #[error("duplicate {kind} slug '{slug}'")]
    DuplicateSlug { kind: &'static str, slug: String },

    #[error("post '{post}' references unknown category '{category}'")]
    UnknownCategory { post: String, category: String },

    #[error("post '{post}' references unknown author '{author}'")]
    UnknownAuthor { post: String, author: String },
}

/// Read-only lookup over the loaded content set
#[derive(Debug)]
pub struct ContentStore {
    /// Posts in reverse-chronological order (most recent first)
    posts: Vec<Post>,
    /// Categories keyed by slug, declaration order preserved
    categories: IndexMap<String, Category>,
    /// Authors keyed by slug
    authors: IndexMap<String, Author>,
    /// Internal-link registry in declaration order
    links: Vec<InternalLink>,
}

impl ContentStore {
    /// Build the store, validating slug uniqueness and reference integrity
    pub fn build(
        mut posts: Vec<Post>,
        categories: Vec<Category>,
        authors: Vec<Author>,
        links: Vec<InternalLink>,
    ) -> Result<Self, ContentError> {
        let mut category_map: IndexMap<String, Category> = IndexMap::new();
        for category in categories {
            if category_map.contains_key(&category.slug) {
                return Err(ContentError::DuplicateSlug {
                    kind: "category",
                    slug: category.slug,
                });
            }
            category_map.insert(category.slug.clone(), category);
        }

        let mut author_map: IndexMap<String, Author> = IndexMap::new();
        for author in authors {
            if author_map.contains_key(&author.slug) {
                return Err(ContentError::DuplicateSlug {
                    kind: "author",
                    slug: author.slug,
                });
            }
            author_map.insert(author.slug.clone(), author);
        }

        let mut seen = std::collections::HashSet::new();
        for post in &posts {
            if !seen.insert(post.slug.clone()) {
                return Err(ContentError::DuplicateSlug {
                    kind: "post",
                    slug: post.slug.clone(),
                });
            }
            if !category_map.contains_key(&post.category) {
                return Err(ContentError::UnknownCategory {
                    post: post.slug.clone(),
                    category: post.category.clone(),
                });
            }
            if !author_map.contains_key(&post.author) {
                return Err(ContentError::UnknownAuthor {
                    post: post.slug.clone(),
                    author: post.author.clone(),
                });
            }
        }

        // Most recent first; stable so same-day posts keep load order
        posts.sort_by(|a, b| b.published_at.cmp(&a.published_at));

        // Derive category counts
        for post in &posts {
            if let Some(category) = category_map.get_mut(&post.category) {
                category.count += 1;
            }
        }

        Ok(Self {
            posts,
            categories: category_map,
            authors: author_map,
            links,
        })
    }

    /// Look up a post by slug
    pub fn get_by_slug(&self, slug: &str) -> Result<&Post, ContentError> {
        self.posts
            .iter()
            .find(|p| p.slug == slug)
            .ok_or_else(|| ContentError::NotFound {
                slug: slug.to_string(),
            })
    }

    /// All posts, most recently published first
    pub fn posts(&self) -> &[Post] {
        &self.posts
    }

    /// Featured posts, in the same reverse-chronological order
    pub fn featured(&self) -> Vec<&Post> {
        self.posts.iter().filter(|p| p.featured).collect()
    }

    /// All categories in declaration order, counts populated
    pub fn categories(&self) -> impl Iterator<Item = &Category> {
        self.categories.values()
    }

    /// Look up a category by slug
    pub fn category_by_slug(&self, slug: &str) -> Option<&Category> {
        self.categories.get(slug)
    }

    /// Look up an author by slug
    pub fn author_by_slug(&self, slug: &str) -> Option<&Author> {
        self.authors.get(slug)
    }

    /// The internal-link registry
    pub fn links(&self) -> &[InternalLink] {
        &self.links
    }

    /// Related internal links for a page, at most `max_results` entries
    pub fn related(
        &self,
        page_type: PageType,
        page_slug: &str,
        max_results: usize,
    ) -> Vec<&InternalLink> {
        RelatedContentMatcher::new(&self.links).related(page_type, page_slug, max_results)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::{CategoryColor, CoverImage, SocialLinks};
    use chrono::{Local, TimeZone};

    fn post(slug: &str, category: &str, author: &str, day: u32) -> Post {
        Post {
            id: slug.to_string(),
            slug: slug.to_string(),
            title: slug.to_string(),
            excerpt: String::new(),
            content: String::new(),
            raw: String::new(),
            category: category.to_string(),
            author: author.to_string(),
            tags: Vec::new(),
            published_at: Local.with_ymd_and_hms(2026, 1, day, 12, 0, 0).unwrap(),
            updated_at: None,
            reading_time: 1,
            featured: false,
            cover: CoverImage::default(),
        }
    }

    fn category(slug: &str) -> Category {
        Category {
            id: slug.to_string(),
            slug: slug.to_string(),
            name: slug.to_string(),
            description: String::new(),
            color: CategoryColor::default(),
            count: 0,
        }
    }

    fn author(slug: &str) -> Author {
        Author {
            id: slug.to_string(),
            slug: slug.to_string(),
            name: slug.to_string(),
            role: String::new(),
            bio: String::new(),
            avatar: String::new(),
            social: SocialLinks::default(),
        }
    }

    fn store() -> ContentStore {
        ContentStore::build(
            vec![
                post("older", "guides", "jane", 5),
                post("newest", "guides", "jane", 20),
                post("middle", "marketing", "jane", 12),
            ],
            vec![category("guides"), category("marketing")],
            vec![author("jane")],
            Vec::new(),
        )
        .unwrap()
    }

    #[test]
    fn test_posts_are_reverse_chronological() {
        let store = store();
        let slugs: Vec<&str> = store.posts().iter().map(|p| p.slug.as_str()).collect();
        assert_eq!(slugs, vec!["newest", "middle", "older"]);
    }

    #[test]
    fn test_get_by_slug() {
        let store = store();
        assert_eq!(store.get_by_slug("middle").unwrap().category, "marketing");
    }

    #[test]
    fn test_get_by_slug_not_found() {
        let store = store();
        let err = store.get_by_slug("missing").unwrap_err();
        assert!(matches!(err, ContentError::NotFound { .. }));
    }

    #[test]
    fn test_category_counts_derived() {
        let store = store();
        assert_eq!(store.category_by_slug("guides").unwrap().count, 2);
        assert_eq!(store.category_by_slug("marketing").unwrap().count, 1);
    }

    #[test]
    fn test_categories_keep_declaration_order() {
        let store = store();
        let slugs: Vec<&str> = store.categories().map(|c| c.slug.as_str()).collect();
        assert_eq!(slugs, vec!["guides", "marketing"]);
    }

    #[test]
    fn test_duplicate_post_slug_rejected() {
        let err = ContentStore::build(
            vec![post("dup", "guides", "jane", 1), post("dup", "guides", "jane", 2)],
            vec![category("guides")],
            vec![author("jane")],
            Vec::new(),
        )
        .unwrap_err();
        assert!(matches!(
            err,
            ContentError::DuplicateSlug { kind: "post", .. }
        ));
    }

    #[test]
    fn test_unknown_category_rejected() {
        let err = ContentStore::build(
            vec![post("p", "nope", "jane", 1)],
            vec![category("guides")],
            vec![author("jane")],
            Vec::new(),
        )
        .unwrap_err();
        assert!(matches!(err, ContentError::UnknownCategory { .. }));
    }

    #[test]
    fn test_unknown_author_rejected() {
        let err = ContentStore::build(
            vec![post("p", "guides", "ghost", 1)],
            vec![category("guides")],
            vec![author("jane")],
            Vec::new(),
        )
        .unwrap_err();
        assert!(matches!(err, ContentError::UnknownAuthor { .. }));
    }

    #[test]
    fn test_featured_filter() {
        let mut featured = post("pinned", "guides", "jane", 15);
        featured.featured = true;
        let store = ContentStore::build(
            vec![featured, post("plain", "guides", "jane", 10)],
            vec![category("guides"), category("marketing")],
            vec![author("jane")],
            Vec::new(),
        )
        .unwrap();
        let slugs: Vec<&str> = store.featured().iter().map(|p| p.slug.as_str()).collect();
        assert_eq!(slugs, vec!["pinned"]);
    }
}
