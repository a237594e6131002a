//! Sitemap generation
//!
//! Produces one `<url>` entry per canonical page: the static routes, every
//! entry in the internal-link registry, and every blog post. Post entries
//! carry `<lastmod>` from the updated date, falling back to the publish date.

use crate::config::SiteConfig;
use crate::store::ContentStore;

/// Routes that exist regardless of content
const STATIC_ROUTES: &[&str] = &["/", "/blog/", "/contact/", "/schedule/"];

/// Generate the sitemap XML document
pub fn generate_sitemap(config: &SiteConfig, store: &ContentStore) -> String {
    let base_url = config.url.trim_end_matches('/');

    let mut xml = String::new();
    xml.push_str(r#"<?xml version="1.0" encoding="UTF-8"?>"#);
    xml.push('\n');
    xml.push_str(r#"<urlset xmlns="http://www.sitemaps.org/schemas/sitemap/0.9">"#);
    xml.push('\n');

    for route in STATIC_ROUTES {
        push_url(&mut xml, &format!("{}{}", base_url, route), None);
    }

    for link in store.links() {
        // Blog links are covered by the post entries below
        if link.page_type == crate::links::PageType::Blog {
            continue;
        }
        push_url(&mut xml, &format!("{}{}", base_url, link.href), None);
    }

    for post in store.posts() {
        let lastmod = post.updated_at.unwrap_or(post.published_at);
        push_url(
            &mut xml,
            &format!("{}{}", base_url, post.path()),
            Some(lastmod.format("%Y-%m-%d").to_string()),
        );
    }

    xml.push_str("</urlset>\n");
    xml
}

fn push_url(xml: &mut String, loc: &str, lastmod: Option<String>) {
    xml.push_str("  <url>\n");
    xml.push_str(&format!("    <loc>{}</loc>\n", escape_xml(loc)));
    if let Some(lastmod) = lastmod {
        xml.push_str(&format!("    <lastmod>{}</lastmod>\n", lastmod));
    }
    xml.push_str("  </url>\n");
}

/// Escape XML special characters
fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}
