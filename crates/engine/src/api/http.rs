//! HTTP routes.

use std::str::FromStr;
use std::sync::Arc;

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use questkeep_domain::{
    DomainError, Item, ItemId, ItemType, Player, Quest, QuestId, QuestStatus,
};

use crate::app::App;
use crate::use_cases::auth::AuthError;
use crate::use_cases::catalog::CatalogError;
use crate::use_cases::inventory::{InventoryError, ItemUsage};
use crate::use_cases::profile::{PlayerProfile, ProfileError};
use crate::use_cases::quests::{AcceptedQuest, QuestCompletion, QuestError};

use super::auth::AuthPlayer;

/// Create all HTTP routes.
pub fn routes() -> Router<Arc<App>> {
    Router::new()
        .route("/", get(health))
        .route("/api/health", get(health))
        .route("/api/auth/register", post(register))
        .route("/api/auth/login", post(login))
        .route("/api/items", get(list_items))
        .route("/api/items/{id}", get(get_item))
        .route("/api/items/type/{item_type}", get(list_items_by_type))
        .route("/api/quests", get(list_quests))
        .route("/api/quests/{id}", get(get_quest))
        .route("/api/quests/status/{status}", get(list_quests_by_status))
        .route("/api/player/profile", get(get_profile))
        .route("/api/player/accept-quest/{quest_id}", post(accept_quest))
        .route("/api/player/use-item/{item_id}", post(use_item))
        .route("/api/player/complete-quest/{quest_id}", post(complete_quest))
        .route("/api/player/abandon-quest/{quest_id}", post(abandon_quest))
}

async fn health() -> &'static str {
    "OK"
}

// =============================================================================
// Auth
// =============================================================================

#[derive(Deserialize)]
struct RegisterBody {
    name: String,
    email: String,
    password: String,
}

#[derive(Deserialize)]
struct LoginBody {
    email: String,
    password: String,
}

#[derive(Serialize)]
struct AuthResponse {
    token: String,
    player: Player,
}

async fn register(
    State(app): State<Arc<App>>,
    Json(body): Json<RegisterBody>,
) -> Result<(StatusCode, Json<AuthResponse>), ApiError> {
    let result = app
        .use_cases
        .auth
        .register
        .execute(body.name, body.email, body.password)
        .await?;
    Ok((
        StatusCode::CREATED,
        Json(AuthResponse {
            token: result.token,
            player: result.player,
        }),
    ))
}

async fn login(
    State(app): State<Arc<App>>,
    Json(body): Json<LoginBody>,
) -> Result<Json<AuthResponse>, ApiError> {
    let result = app
        .use_cases
        .auth
        .login
        .execute(body.email, body.password)
        .await?;
    Ok(Json(AuthResponse {
        token: result.token,
        player: result.player,
    }))
}

// =============================================================================
// Item catalog
// =============================================================================

#[derive(Deserialize)]
struct ItemListQuery {
    #[serde(rename = "type")]
    item_type: Option<String>,
}

async fn list_items(
    State(app): State<Arc<App>>,
    _player: AuthPlayer,
    Query(query): Query<ItemListQuery>,
) -> Result<Json<Vec<Item>>, ApiError> {
    let item_type = query
        .item_type
        .as_deref()
        .map(parse_item_type)
        .transpose()?;
    let items = app.use_cases.catalog.queries.list(item_type).await?;
    Ok(Json(items))
}

async fn get_item(
    State(app): State<Arc<App>>,
    _player: AuthPlayer,
    Path(id): Path<Uuid>,
) -> Result<Json<Item>, ApiError> {
    let item = app
        .use_cases
        .catalog
        .queries
        .get(ItemId::from_uuid(id))
        .await?;
    Ok(Json(item))
}

async fn list_items_by_type(
    State(app): State<Arc<App>>,
    _player: AuthPlayer,
    Path(item_type): Path<String>,
) -> Result<Json<Vec<Item>>, ApiError> {
    let item_type = parse_item_type(&item_type)?;
    let items = app.use_cases.catalog.queries.list(Some(item_type)).await?;
    Ok(Json(items))
}

fn parse_item_type(raw: &str) -> Result<ItemType, ApiError> {
    ItemType::from_str(raw).map_err(|e| ApiError::BadRequest(e.to_string()))
}

// =============================================================================
// Quests
// =============================================================================

#[derive(Deserialize)]
struct QuestListQuery {
    status: Option<String>,
}

async fn list_quests(
    State(app): State<Arc<App>>,
    _player: AuthPlayer,
    Query(query): Query<QuestListQuery>,
) -> Result<Json<Vec<Quest>>, ApiError> {
    // Unfiltered listing defaults to the quests a player can take.
    let status = match query.status.as_deref() {
        None => Some(QuestStatus::Available),
        Some("all") => None,
        Some(raw) => Some(parse_quest_status(raw)?),
    };
    let quests = app.use_cases.quests.queries.list(status).await?;
    Ok(Json(quests))
}

async fn get_quest(
    State(app): State<Arc<App>>,
    _player: AuthPlayer,
    Path(id): Path<Uuid>,
) -> Result<Json<Quest>, ApiError> {
    let quest = app
        .use_cases
        .quests
        .queries
        .get(QuestId::from_uuid(id))
        .await?;
    Ok(Json(quest))
}

async fn list_quests_by_status(
    State(app): State<Arc<App>>,
    _player: AuthPlayer,
    Path(status): Path<String>,
) -> Result<Json<Vec<Quest>>, ApiError> {
    let status = parse_quest_status(&status)?;
    let quests = app.use_cases.quests.queries.list(Some(status)).await?;
    Ok(Json(quests))
}

fn parse_quest_status(raw: &str) -> Result<QuestStatus, ApiError> {
    QuestStatus::from_str(raw).map_err(|e| ApiError::BadRequest(e.to_string()))
}

// =============================================================================
// Player actions
// =============================================================================

async fn get_profile(
    State(app): State<Arc<App>>,
    AuthPlayer(player): AuthPlayer,
) -> Result<Json<PlayerProfile>, ApiError> {
    let profile = app.use_cases.profile.get.execute(player.id).await?;
    Ok(Json(profile))
}

async fn accept_quest(
    State(app): State<Arc<App>>,
    AuthPlayer(player): AuthPlayer,
    Path(quest_id): Path<Uuid>,
) -> Result<Json<AcceptedQuest>, ApiError> {
    let result = app
        .use_cases
        .quests
        .accept
        .execute(player.id, QuestId::from_uuid(quest_id))
        .await?;
    Ok(Json(result))
}

#[derive(Deserialize, Default)]
struct UseItemBody {
    quantity: Option<u32>,
}

async fn use_item(
    State(app): State<Arc<App>>,
    AuthPlayer(player): AuthPlayer,
    Path(item_id): Path<Uuid>,
    body: Option<Json<UseItemBody>>,
) -> Result<Json<ItemUsage>, ApiError> {
    let quantity = body
        .map(|Json(b)| b.quantity.unwrap_or(1))
        .unwrap_or(1);
    let result = app
        .use_cases
        .inventory
        .use_item
        .execute(player.id, ItemId::from_uuid(item_id), quantity)
        .await?;
    Ok(Json(result))
}

async fn complete_quest(
    State(app): State<Arc<App>>,
    AuthPlayer(player): AuthPlayer,
    Path(quest_id): Path<Uuid>,
) -> Result<Json<QuestCompletion>, ApiError> {
    let result = app
        .use_cases
        .quests
        .complete
        .execute(player.id, QuestId::from_uuid(quest_id))
        .await?;
    Ok(Json(result))
}

async fn abandon_quest(
    State(app): State<Arc<App>>,
    AuthPlayer(player): AuthPlayer,
    Path(quest_id): Path<Uuid>,
) -> Result<Json<Quest>, ApiError> {
    let quest = app
        .use_cases
        .quests
        .abandon
        .execute(player.id, QuestId::from_uuid(quest_id))
        .await?;
    Ok(Json(quest))
}

// =============================================================================
// Error mapping
// =============================================================================

#[derive(Debug)]
pub enum ApiError {
    Unauthorized,
    Forbidden(String),
    NotFound,
    BadRequest(String),
    Internal(String),
}

impl axum::response::IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        match self {
            ApiError::Unauthorized => {
                (StatusCode::UNAUTHORIZED, "Unauthorized").into_response()
            }
            ApiError::Forbidden(msg) => (StatusCode::FORBIDDEN, msg).into_response(),
            ApiError::NotFound => (StatusCode::NOT_FOUND, "Not found").into_response(),
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg).into_response(),
            ApiError::Internal(msg) => {
                tracing::error!(error = %msg, "Internal error");
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal error").into_response()
            }
        }
    }
}

impl From<AuthError> for ApiError {
    fn from(e: AuthError) -> Self {
        match e {
            AuthError::EmailTaken => ApiError::BadRequest(e.to_string()),
            AuthError::InvalidCredentials => ApiError::Unauthorized,
            AuthError::Validation(inner) => ApiError::BadRequest(inner.to_string()),
            AuthError::Credential(inner) => ApiError::Internal(inner.to_string()),
            AuthError::Token(inner) => ApiError::Internal(inner.to_string()),
            AuthError::Repo(inner) => ApiError::Internal(inner.to_string()),
        }
    }
}

impl From<QuestError> for ApiError {
    fn from(e: QuestError) -> Self {
        match e {
            QuestError::QuestNotFound(_)
            | QuestError::PlayerNotFound(_)
            | QuestError::RewardItemNotFound(_) => ApiError::NotFound,
            QuestError::DuplicateAssignment => ApiError::BadRequest(e.to_string()),
            QuestError::NotQuestOwner => ApiError::Forbidden(e.to_string()),
            QuestError::Domain(inner) => domain_to_api(inner),
            QuestError::Repo(inner) => ApiError::Internal(inner.to_string()),
        }
    }
}

impl From<InventoryError> for ApiError {
    fn from(e: InventoryError) -> Self {
        match e {
            InventoryError::ItemNotFound(_) | InventoryError::PlayerNotFound(_) => {
                ApiError::NotFound
            }
            InventoryError::InsufficientQuantity { .. } => ApiError::BadRequest(e.to_string()),
            InventoryError::Domain(inner) => domain_to_api(inner),
            InventoryError::Repo(inner) => ApiError::Internal(inner.to_string()),
        }
    }
}

impl From<CatalogError> for ApiError {
    fn from(e: CatalogError) -> Self {
        match e {
            CatalogError::ItemNotFound(_) => ApiError::NotFound,
            CatalogError::Repo(inner) => ApiError::Internal(inner.to_string()),
        }
    }
}

impl From<ProfileError> for ApiError {
    fn from(e: ProfileError) -> Self {
        match e {
            ProfileError::PlayerNotFound(_) => ApiError::NotFound,
            ProfileError::Repo(inner) => ApiError::Internal(inner.to_string()),
        }
    }
}

fn domain_to_api(e: DomainError) -> ApiError {
    match e {
        DomainError::NotFound { .. } => ApiError::NotFound,
        other => ApiError::BadRequest(other.to_string()),
    }
}
