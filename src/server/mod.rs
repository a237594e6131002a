//! JSON API server for the presentation layer
//!
//! The store is built once at startup and shared immutably across handlers;
//! every request is a pure read, so there is no locking discipline to follow.

use anyhow::Result;
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use crate::config::SiteConfig;
use crate::content::{Author, Category, Post};
use crate::links::{InternalLink, PageType};
use crate::query;
use crate::seo;
use crate::store::ContentStore;
use crate::Site;

/// Shared server state
struct ServerState {
    config: SiteConfig,
    store: ContentStore,
}

/// Start the API server
pub async fn start(site: &Site, ip: &str, port: u16) -> Result<()> {
    let store = site.load()?;
    tracing::info!(
        "Loaded {} posts, {} links",
        store.posts().len(),
        store.links().len()
    );

    let state = Arc::new(ServerState {
        config: site.config.clone(),
        store,
    });

    let app = Router::new()
        .route("/api/posts", get(list_posts))
        .route("/api/posts/:slug", get(get_post))
        .route("/api/categories", get(list_categories))
        .route("/api/related", get(get_related))
        .route("/sitemap.xml", get(get_sitemap))
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    // Handle "localhost" specially
    let bind_ip = if ip == "localhost" { "127.0.0.1" } else { ip };
    let addr: SocketAddr = format!("{}:{}", bind_ip, port).parse()?;

    println!("API server running at http://{}:{}", ip, port);
    println!("Press Ctrl+C to stop.");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Post fields exposed on listing endpoints
#[derive(Serialize)]
struct PostSummary {
    slug: String,
    title: String,
    excerpt: String,
    category: String,
    author: String,
    tags: Vec<String>,
    published_at: String,
    date: String,
    reading_time: usize,
    featured: bool,
    cover: crate::content::CoverImage,
    path: String,
}

impl PostSummary {
    fn from_post(post: &Post, config: &SiteConfig) -> Self {
        Self {
            slug: post.slug.clone(),
            title: post.title.clone(),
            excerpt: post.excerpt.clone(),
            category: post.category.clone(),
            author: post.author.clone(),
            tags: post.tags.clone(),
            published_at: post.published_at.to_rfc3339(),
            date: post.formatted_date(&config.date_format),
            reading_time: post.reading_time,
            featured: post.featured,
            cover: post.cover.clone(),
            path: post.path(),
        }
    }
}

/// Paginated blog listing response
#[derive(Serialize)]
struct PostListResponse {
    posts: Vec<PostSummary>,
    current_page: usize,
    total_pages: usize,
    total_posts: usize,
    has_next_page: bool,
    has_prev_page: bool,
    category: String,
    categories: Vec<Category>,
}

/// GET /api/posts?category=&page=
async fn list_posts(
    State(state): State<Arc<ServerState>>,
    Query(params): Query<HashMap<String, String>>,
) -> Json<PostListResponse> {
    let category = query::parse_category_param(params.get("category").map(String::as_str));
    let page_num = query::parse_page_param(params.get("page").map(String::as_str));

    let filtered = query::filter_by_category(state.store.posts(), &category);
    let page = query::paginate(&filtered, page_num, state.config.per_page);

    Json(PostListResponse {
        posts: page
            .posts
            .iter()
            .map(|p| PostSummary::from_post(p, &state.config))
            .collect(),
        current_page: page.current_page,
        total_pages: page.total_pages,
        total_posts: page.total_posts,
        has_next_page: page.has_next_page,
        has_prev_page: page.has_prev_page,
        category,
        categories: state.store.categories().cloned().collect(),
    })
}

/// Full post response, including rendered content and structured data
#[derive(Serialize)]
struct PostResponse {
    #[serde(flatten)]
    summary: PostSummary,
    content: String,
    author_profile: Option<Author>,
    json_ld: serde_json::Value,
    related: Vec<InternalLink>,
}

/// GET /api/posts/:slug
async fn get_post(
    State(state): State<Arc<ServerState>>,
    Path(slug): Path<String>,
) -> Response {
    let post = match state.store.get_by_slug(&slug) {
        Ok(post) => post,
        Err(e) => {
            return (StatusCode::NOT_FOUND, e.to_string()).into_response();
        }
    };

    let author_profile = state.store.author_by_slug(&post.author).cloned();
    let json_ld = match &author_profile {
        Some(author) => seo::blog_posting(&state.config, post, author),
        None => serde_json::Value::Null,
    };
    let related = state
        .store
        .related(PageType::Blog, &post.slug, state.config.related_max)
        .into_iter()
        .cloned()
        .collect();

    Json(PostResponse {
        summary: PostSummary::from_post(post, &state.config),
        content: post.content.clone(),
        author_profile,
        json_ld,
        related,
    })
    .into_response()
}

/// GET /api/categories
async fn list_categories(State(state): State<Arc<ServerState>>) -> Json<Vec<Category>> {
    Json(state.store.categories().cloned().collect())
}

#[derive(Deserialize)]
struct RelatedParams {
    #[serde(rename = "type")]
    page_type: PageType,
    slug: String,
    max: Option<usize>,
}

/// GET /api/related?type=&slug=&max=
async fn get_related(
    State(state): State<Arc<ServerState>>,
    Query(params): Query<RelatedParams>,
) -> Json<Vec<InternalLink>> {
    let max = params.max.unwrap_or(state.config.related_max);
    let related = state
        .store
        .related(params.page_type, &params.slug, max)
        .into_iter()
        .cloned()
        .collect();
    Json(related)
}

/// GET /sitemap.xml
async fn get_sitemap(State(state): State<Arc<ServerState>>) -> Response {
    let xml = seo::generate_sitemap(&state.config, &state.store);
    ([("content-type", "application/xml")], xml).into_response()
}
