//! Validate the content set
//!
//! Loads everything and reports the first invariant violation: duplicate
//! slugs, posts pointing at unknown categories or authors, and link-registry
//! entries with empty keyword lists (legal, but worth flagging since they
//! only ever rank as fallback fill).

use anyhow::Result;

use crate::content::ContentLoader;
use crate::store::ContentStore;
use crate::Site;

/// Load content and report problems; non-zero exit on invariant violations
pub fn run(site: &Site) -> Result<()> {
    let loader = ContentLoader::new(site);
    let posts = loader.load_posts()?;
    let categories = loader.load_categories()?;
    let authors = loader.load_authors()?;
    let links = loader.load_links()?;

    println!(
        "Loaded {} posts, {} categories, {} authors, {} links",
        posts.len(),
        categories.len(),
        authors.len(),
        links.len()
    );

    let store = ContentStore::build(posts, categories, authors, links)
        .map_err(|e| anyhow::anyhow!("content check failed: {}", e))?;

    for link in store.links() {
        if link.keywords.is_empty() {
            println!("warning: link '{}' has no keywords", link.href);
        }
    }

    println!("Content OK");
    Ok(())
}
