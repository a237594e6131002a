//! Query operations over the content store
//!
//! Pure functions: no I/O, no hidden state, identical inputs always yield
//! identical output.

mod filter;
mod paginate;

pub use filter::{filter_by_category, parse_category_param, parse_page_param, ALL_CATEGORIES};
pub use paginate::{paginate, Page};
