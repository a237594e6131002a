//! List site content

use anyhow::Result;

use crate::Site;

/// List site content by type
pub fn run(site: &Site, content_type: &str) -> Result<()> {
    let store = site.load()?;

    match content_type {
        "post" | "posts" => {
            println!("Posts ({}):", store.posts().len());
            for post in store.posts() {
                println!(
                    "  {} - {} [{}] ({} min read)",
                    post.published_at.format("%Y-%m-%d"),
                    post.title,
                    post.category,
                    post.reading_time
                );
            }
        }
        "category" | "categories" => {
            let categories: Vec<_> = store.categories().collect();
            println!("Categories ({}):", categories.len());
            for category in categories {
                println!("  {} ({})", category.name, category.count);
            }
        }
        "author" | "authors" => {
            let authors: Vec<_> = store
                .posts()
                .iter()
                .map(|p| p.author.clone())
                .collect::<std::collections::BTreeSet<_>>()
                .into_iter()
                .collect();
            println!("Authors ({}):", authors.len());
            for slug in authors {
                if let Some(author) = store.author_by_slug(&slug) {
                    println!("  {} - {}", author.name, author.role);
                }
            }
        }
        "link" | "links" => {
            println!("Internal links ({}):", store.links().len());
            for link in store.links() {
                println!("  {:?} {} -> {}", link.page_type, link.title, link.href);
            }
        }
        _ => {
            println!("Unknown type: {}", content_type);
            println!("Available types: posts, categories, authors, links");
        }
    }

    Ok(())
}
