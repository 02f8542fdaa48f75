//! HTTP API for the Vibes node.

use crate::error::{Error, Result};
use crate::extract::{ApiJson, ApiPath, ApiQuery};
use crate::feed::{Feed, FeedQuery};
use crate::models::{now_millis, Category, Product, ProductView, Profile, UpvoteOutcome};
use crate::node::NodeState;
use axum::{
    extract::State,
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tokio::sync::RwLock;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use vibes_milestones::{compute_badge_tier, compute_milestone_progress, BadgeTier, MilestoneProgress};

type AppState = Arc<RwLock<NodeState>>;

/// Build the API router.
pub fn build_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // Health (at root and under /api/v1 for compatibility)
        .route("/health", get(health))
        .route("/api/v1/health", get(health))
        .route("/ready", get(ready))
        // Milestone engine
        .route("/api/v1/milestones/:count", get(get_milestone))
        .route("/api/v1/badges/:count", get(get_badge))
        // Products and feeds
        .route("/api/v1/products", get(list_products).post(create_product))
        .route("/api/v1/products/:id", get(get_product).delete(delete_product))
        .route("/api/v1/products/:id/upvote", post(toggle_upvote))
        .route("/api/v1/products/:id/upvote/:user_id", get(get_upvote_status))
        // Categories
        .route("/api/v1/categories", get(list_categories))
        .route("/api/v1/categories/:id/products", get(list_category_products))
        // Profiles
        .route("/api/v1/profiles/:id", get(get_profile).put(put_profile))
        .route("/api/v1/profiles/:id/products", get(list_maker_products))
        .route("/api/v1/profiles/:id/upvotes", get(list_upvoted_products))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

// --- Health endpoints ---

async fn health() -> &'static str {
    "OK"
}

async fn ready() -> &'static str {
    "OK"
}

// --- Milestone endpoints ---

async fn get_milestone(ApiPath(count): ApiPath<i64>) -> Result<Json<MilestoneProgress>> {
    let progress = compute_milestone_progress(count).inspect_err(|e| {
        tracing::warn!("Rejected milestone request: {}", e);
    })?;
    Ok(Json(progress))
}

async fn get_badge(ApiPath(count): ApiPath<i64>) -> Result<Json<Option<BadgeTier>>> {
    let badge = compute_badge_tier(count).inspect_err(|e| {
        tracing::warn!("Rejected badge request: {}", e);
    })?;
    Ok(Json(badge))
}

// --- Product endpoints ---

fn views(products: Vec<Product>) -> Vec<ProductView> {
    products.into_iter().map(ProductView::from).collect()
}

async fn list_products(
    State(state): State<AppState>,
    ApiQuery(query): ApiQuery<FeedQuery>,
) -> Result<Json<Vec<ProductView>>> {
    let state = state.read().await;
    let products = state.storage.list_products()?;
    Ok(Json(views(query.apply(products, now_millis()))))
}

#[derive(Debug, Deserialize)]
struct CreateProductRequest {
    name: String,
    tagline: String,
    category_id: String,
    maker_id: String,
    description: Option<String>,
    website_url: Option<String>,
    thumbnail_url: Option<String>,
    tags: Option<Vec<String>>,
}

fn require(field: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        tracing::warn!("Rejected request: empty {}", field);
        return Err(Error::InvalidInput(format!("{} must not be empty", field)));
    }
    Ok(())
}

async fn create_product(
    State(state): State<AppState>,
    ApiJson(req): ApiJson<CreateProductRequest>,
) -> Result<(StatusCode, Json<ProductView>)> {
    require("name", &req.name)?;
    require("tagline", &req.tagline)?;
    require("category_id", &req.category_id)?;
    require("maker_id", &req.maker_id)?;

    let state = state.write().await;
    if state.storage.get_category(&req.category_id)?.is_none() {
        return Err(Error::InvalidInput(format!(
            "unknown category: {}",
            req.category_id
        )));
    }

    let mut product = Product::new(
        req.name.trim().to_string(),
        req.tagline.trim().to_string(),
        req.category_id,
        req.maker_id,
        now_millis(),
    );
    product.description = req.description;
    product.website_url = req.website_url;
    product.thumbnail_url = req.thumbnail_url;
    product.tags = req.tags.unwrap_or_default();

    // Same maker, name and millisecond: a duplicate submission
    state.storage.insert_product(&product)?;
    tracing::debug!("Created product {} ({})", product.id, product.name);

    Ok((StatusCode::CREATED, Json(ProductView::from(product))))
}

async fn get_product(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<String>,
) -> Result<Json<ProductView>> {
    let state = state.read().await;
    match state.storage.get_product(&id)? {
        Some(product) => Ok(Json(ProductView::from(product))),
        None => Err(Error::NotFound(format!("product {}", id))),
    }
}

async fn delete_product(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<String>,
) -> Result<StatusCode> {
    let state = state.write().await;
    if state.storage.delete_product(&id)? {
        tracing::debug!("Deleted product {}", id);
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(Error::NotFound(format!("product {}", id)))
    }
}

// --- Upvote endpoints ---

#[derive(Debug, Deserialize)]
struct UpvoteRequest {
    user_id: String,
}

async fn toggle_upvote(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<String>,
    ApiJson(req): ApiJson<UpvoteRequest>,
) -> Result<Json<UpvoteOutcome>> {
    require("user_id", &req.user_id)?;

    // Write lock serializes read-modify-write of the tally
    let state = state.write().await;
    let outcome = state.storage.toggle_upvote(&id, &req.user_id)?;
    tracing::debug!(
        "Upvote toggle on {} by {}: upvoted={} count={}",
        id,
        req.user_id,
        outcome.upvoted,
        outcome.upvote_count
    );
    Ok(Json(outcome))
}

#[derive(Debug, Serialize)]
struct UpvoteStatus {
    upvoted: bool,
}

async fn get_upvote_status(
    State(state): State<AppState>,
    ApiPath((id, user_id)): ApiPath<(String, String)>,
) -> Result<Json<UpvoteStatus>> {
    let state = state.read().await;
    let upvoted = state.storage.has_upvoted(&id, &user_id)?;
    Ok(Json(UpvoteStatus { upvoted }))
}

// --- Category endpoints ---

async fn list_categories(State(state): State<AppState>) -> Result<Json<Vec<Category>>> {
    let state = state.read().await;
    Ok(Json(state.storage.list_categories()?))
}

async fn list_category_products(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<String>,
) -> Result<Json<Vec<ProductView>>> {
    let state = state.read().await;
    if state.storage.get_category(&id)?.is_none() {
        return Err(Error::NotFound(format!("category {}", id)));
    }
    let products = state.storage.list_products()?;
    Ok(Json(views(FeedQuery::category(id).apply(products, now_millis()))))
}

// --- Profile endpoints ---

async fn get_profile(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<String>,
) -> Result<Json<Profile>> {
    let state = state.read().await;
    match state.storage.get_profile(&id)? {
        Some(profile) => Ok(Json(profile)),
        None => Err(Error::NotFound(format!("profile {}", id))),
    }
}

#[derive(Debug, Deserialize)]
struct ProfileRequest {
    username: String,
    display_name: Option<String>,
    bio: Option<String>,
    avatar_url: Option<String>,
    website_url: Option<String>,
}

async fn put_profile(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<String>,
    ApiJson(req): ApiJson<ProfileRequest>,
) -> Result<Json<Profile>> {
    require("username", &req.username)?;
    let username = req.username.trim().to_string();

    let state = state.write().await;
    if let Some(holder) = state.storage.find_profile_by_username(&username)? {
        if holder.id != id {
            return Err(Error::InvalidInput(format!("username taken: {}", username)));
        }
    }

    let created_at = state
        .storage
        .get_profile(&id)?
        .map(|existing| existing.created_at)
        .unwrap_or_else(now_millis);

    let profile = Profile {
        id,
        username,
        display_name: req.display_name,
        bio: req.bio,
        avatar_url: req.avatar_url,
        website_url: req.website_url,
        created_at,
    };
    state.storage.put_profile(&profile)?;
    tracing::debug!("Saved profile {} (@{})", profile.id, profile.username);

    Ok(Json(profile))
}

async fn list_maker_products(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<String>,
) -> Result<Json<Vec<ProductView>>> {
    let state = state.read().await;
    let products = state.storage.list_products_by_maker(&id)?;
    let query = FeedQuery {
        feed: Feed::New,
        ..FeedQuery::default()
    };
    Ok(Json(views(query.apply(products, now_millis()))))
}

async fn list_upvoted_products(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<String>,
) -> Result<Json<Vec<ProductView>>> {
    let state = state.read().await;
    Ok(Json(views(state.storage.list_upvoted_by(&id)?)))
}
