//! Internal links and related-content matching
//!
//! Every indexable page on the site declares an [`InternalLink`] entry in
//! `content/links.yml`. Related-content blocks are filled from that registry:
//! for a given page we take the links of adjacent page types, rank them by
//! keyword overlap with the page's own entry, and return a bounded list.

use serde::{Deserialize, Serialize};

/// The kind of page an internal link points at
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PageType {
    Service,
    Location,
    Industry,
    Blog,
}

impl PageType {
    /// Page types whose links are candidates for a related-content block on
    /// a page of this type. Service pages cross-link to locations and
    /// industries and vice versa; blog posts link to other posts and to the
    /// commercial pages.
    pub fn adjacent(&self) -> &'static [PageType] {
        match self {
            PageType::Service => &[PageType::Location, PageType::Industry],
            PageType::Location => &[PageType::Service],
            PageType::Industry => &[PageType::Service],
            PageType::Blog => &[PageType::Blog, PageType::Service],
        }
    }
}

/// A cross-reference between pages on the site
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InternalLink {
    pub href: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub keywords: Vec<String>,
    pub page_type: PageType,
}

impl InternalLink {
    /// Slug of the page this link points at: the last non-empty path segment
    pub fn slug(&self) -> &str {
        self.href
            .trim_end_matches('/')
            .rsplit('/')
            .next()
            .unwrap_or("")
    }
}

/// Ranked related-link lookup over the full link registry
pub struct RelatedContentMatcher<'a> {
    links: &'a [InternalLink],
}

impl<'a> RelatedContentMatcher<'a> {
    pub fn new(links: &'a [InternalLink]) -> Self {
        Self { links }
    }

    /// Related links for the given page, at most `max_results` entries.
    ///
    /// Candidates are the links of adjacent page types, ranked by the number
    /// of keywords shared with the page's own link entry. The sort is stable,
    /// so ties keep registry declaration order and identical inputs always
    /// produce identical output. Zero-score candidates stay eligible so a
    /// thin pool still fills the block. The page itself is never returned.
    pub fn related(
        &self,
        page_type: PageType,
        page_slug: &str,
        max_results: usize,
    ) -> Vec<&'a InternalLink> {
        let own_keywords: &[String] = self
            .links
            .iter()
            .find(|l| l.page_type == page_type && l.slug() == page_slug)
            .map(|l| l.keywords.as_slice())
            .unwrap_or(&[]);

        let adjacent = page_type.adjacent();

        let mut candidates: Vec<(usize, &InternalLink)> = self
            .links
            .iter()
            .filter(|l| adjacent.contains(&l.page_type))
            .filter(|l| !(l.page_type == page_type && l.slug() == page_slug))
            .map(|l| (shared_keywords(own_keywords, &l.keywords), l))
            .collect();

        // Stable sort: ties stay in declaration order
        candidates.sort_by(|a, b| b.0.cmp(&a.0));
        candidates.truncate(max_results);
        candidates.into_iter().map(|(_, l)| l).collect()
    }
}

/// Number of keywords the two lists have in common
fn shared_keywords(a: &[String], b: &[String]) -> usize {
    b.iter().filter(|k| a.contains(k)).count()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn link(href: &str, page_type: PageType, keywords: &[&str]) -> InternalLink {
        InternalLink {
            href: href.to_string(),
            title: href.to_string(),
            description: String::new(),
            keywords: keywords.iter().map(|s| s.to_string()).collect(),
            page_type,
        }
    }

    fn registry() -> Vec<InternalLink> {
        vec![
            link(
                "/services/admin-support/",
                PageType::Service,
                &["admin", "scheduling", "inbox"],
            ),
            link(
                "/services/bookkeeping/",
                PageType::Service,
                &["bookkeeping", "invoicing"],
            ),
            link(
                "/services/marketing-support/",
                PageType::Service,
                &["marketing", "social-media"],
            ),
            link(
                "/locations/austin/",
                PageType::Location,
                &["admin", "scheduling"],
            ),
            link(
                "/industries/real-estate/",
                PageType::Industry,
                &["admin", "listings"],
            ),
            link("/blog/inbox-zero/", PageType::Blog, &["inbox", "admin"]),
        ]
    }

    #[test]
    fn test_slug_from_href() {
        let l = link("/locations/austin/", PageType::Location, &[]);
        assert_eq!(l.slug(), "austin");
        let l = link("/services/bookkeeping", PageType::Service, &[]);
        assert_eq!(l.slug(), "bookkeeping");
    }

    #[test]
    fn test_location_page_gets_service_links_ranked_by_overlap() {
        let links = registry();
        let matcher = RelatedContentMatcher::new(&links);

        let related = matcher.related(PageType::Location, "austin", 3);
        assert_eq!(related.len(), 3);
        // admin-support shares "admin" and "scheduling" with austin
        assert_eq!(related[0].href, "/services/admin-support/");
        // the zero-score services follow in declaration order
        assert_eq!(related[1].href, "/services/bookkeeping/");
        assert_eq!(related[2].href, "/services/marketing-support/");
    }

    #[test]
    fn test_never_includes_self() {
        let links = registry();
        let matcher = RelatedContentMatcher::new(&links);

        // Blog pages are adjacent to other blog pages, so the post's own
        // entry is in the candidate pool and must be filtered out
        let related = matcher.related(PageType::Blog, "inbox-zero", 10);
        assert!(!related.is_empty());
        assert!(related.iter().all(|l| l.href != "/blog/inbox-zero/"));
    }

    #[test]
    fn test_respects_max_results() {
        let links = registry();
        let matcher = RelatedContentMatcher::new(&links);

        let related = matcher.related(PageType::Location, "austin", 1);
        assert_eq!(related.len(), 1);

        let related = matcher.related(PageType::Location, "austin", 0);
        assert!(related.is_empty());
    }

    #[test]
    fn test_zero_score_candidates_fill_thin_pools() {
        let links = registry();
        let matcher = RelatedContentMatcher::new(&links);

        // bookkeeping shares no keywords with austin but is still returned
        let related = matcher.related(PageType::Location, "austin", 3);
        assert!(related.iter().any(|l| l.href == "/services/bookkeeping/"));
    }

    #[test]
    fn test_unknown_page_has_empty_implied_keywords() {
        let links = registry();
        let matcher = RelatedContentMatcher::new(&links);

        // No entry for this slug: every candidate scores zero and the pool
        // is returned in declaration order
        let related = matcher.related(PageType::Location, "nowhere", 2);
        assert_eq!(related.len(), 2);
        assert_eq!(related[0].href, "/services/admin-support/");
        assert_eq!(related[1].href, "/services/bookkeeping/");
    }

    #[test]
    fn test_deterministic_for_identical_inputs() {
        let links = registry();
        let matcher = RelatedContentMatcher::new(&links);

        let a: Vec<String> = matcher
            .related(PageType::Blog, "inbox-zero", 4)
            .iter()
            .map(|l| l.href.clone())
            .collect();
        let b: Vec<String> = matcher
            .related(PageType::Blog, "inbox-zero", 4)
            .iter()
            .map(|l| l.href.clone())
            .collect();
        assert_eq!(a, b);
    }
}
