//! SEO outputs: sitemap XML and JSON-LD structured data

mod jsonld;
mod sitemap;

pub use jsonld::{blog_posting, organization};
pub use sitemap::generate_sitemap;
