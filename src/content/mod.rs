//! Content module - data model, front-matter parsing and loading

mod frontmatter;
mod loader;
mod markdown;
mod model;

pub use frontmatter::FrontMatter;
pub use loader::ContentLoader;
pub use markdown::{reading_time, render_markdown, split_excerpt};
pub use model::{Author, Category, CategoryColor, CoverImage, Post, SocialLinks};
