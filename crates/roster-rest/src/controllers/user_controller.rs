//! User CRUD controller.

use crate::{
    extractors::PaginationQuery,
    responses::{created, ok, ApiResponse, ApiResult, AppError},
    state::AppState,
};
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use roster_core::{
    CreateUser, LeanView, Page, Role, RosterError, UpdateUser, UserDocument, UserId,
};
use roster_repository::UserQuery;
use serde::Serialize;
use tracing::debug;
use utoipa::ToSchema;

/// Creates the user router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_users).post(create_user))
        .route(
            "/:id",
            get(get_user).put(update_user).delete(delete_user),
        )
        .route("/:id/roles", get(get_user_roles))
        .route("/email/:email", get(get_user_by_email))
}

/// User list response with pagination metadata.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct UserListResponse {
    pub users: Vec<LeanView>,
    pub page: usize,
    pub size: usize,
    pub total_count: u64,
    pub total_pages: u64,
}

impl From<Page<LeanView>> for UserListResponse {
    fn from(page: Page<LeanView>) -> Self {
        Self {
            users: page.items,
            page: page.page,
            size: page.size,
            total_count: page.total_count,
            total_pages: page.total_pages,
        }
    }
}

/// Roles held by a single user.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct UserRolesResponse {
    pub id: UserId,
    pub roles: Vec<Role>,
}

/// List all users, paginated.
#[utoipa::path(
    get,
    path = "/api/users",
    tag = "users",
    params(
        ("page" = Option<usize>, Query, description = "Page number, 0-indexed"),
        ("size" = Option<usize>, Query, description = "Page size"),
    ),
    responses(
        (status = 200, description = "A page of users", body = UserListResponse),
        (status = 404, description = "No users exist"),
    )
)]
pub async fn list_users(
    State(state): State<AppState>,
    Query(pagination): Query<PaginationQuery>,
) -> ApiResult<UserListResponse> {
    debug!("List users request");

    let page = state.users.get_all(pagination.into()).await?;
    ok(UserListResponse::from(page))
}

/// Create a new user.
#[utoipa::path(
    post,
    path = "/api/users",
    tag = "users",
    request_body = CreateUser,
    responses(
        (status = 201, description = "User created", body = LeanView),
        (status = 400, description = "Missing or invalid fields"),
    )
)]
pub async fn create_user(
    State(state): State<AppState>,
    Json(request): Json<CreateUser>,
) -> Result<(StatusCode, Json<ApiResponse<LeanView>>), AppError> {
    debug!("Create user request");

    let user = state.users.create(request).await?;
    Ok(created(user))
}

/// Get a user by id.
#[utoipa::path(
    get,
    path = "/api/users/{id}",
    tag = "users",
    params(("id" = String, Path, description = "User id")),
    responses(
        (status = 200, description = "The user", body = LeanView),
        (status = 404, description = "No such user"),
    )
)]
pub async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<LeanView> {
    debug!(%id, "Get user request");

    let user_id = parse_user_id(&id)?;
    let user = state.users.get_by_id(user_id).await?;
    ok(user)
}

/// Get a user by email.
#[utoipa::path(
    get,
    path = "/api/users/email/{email}",
    tag = "users",
    params(("email" = String, Path, description = "User email")),
    responses(
        (status = 200, description = "The user", body = LeanView),
        (status = 404, description = "No such user"),
    )
)]
pub async fn get_user_by_email(
    State(state): State<AppState>,
    Path(email): Path<String>,
) -> ApiResult<LeanView> {
    debug!(%email, "Get user by email request");

    let user = state.users.get_by_email(&email).await?;
    ok(user)
}

/// Get the roles of a user.
#[utoipa::path(
    get,
    path = "/api/users/{id}/roles",
    tag = "users",
    params(("id" = String, Path, description = "User id")),
    responses(
        (status = 200, description = "The user's roles", body = UserRolesResponse),
        (status = 404, description = "No such user"),
    )
)]
pub async fn get_user_roles(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<UserRolesResponse> {
    debug!(%id, "Get user roles request");

    let user_id = parse_user_id(&id)?;
    let roles = state.users.get_roles(user_id).await?;
    ok(UserRolesResponse { id: user_id, roles })
}

/// Update a user in place.
#[utoipa::path(
    put,
    path = "/api/users/{id}",
    tag = "users",
    params(("id" = String, Path, description = "User id")),
    request_body = UpdateUser,
    responses(
        (status = 200, description = "The updated user", body = LeanView),
        (status = 400, description = "No updatable fields provided"),
        (status = 404, description = "No such user"),
    )
)]
pub async fn update_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(request): Json<UpdateUser>,
) -> ApiResult<LeanView> {
    debug!(%id, "Update user request");

    let user_id = parse_user_id(&id)?;
    let user = state
        .users
        .update(&UserQuery::by_id(user_id), request)
        .await?;
    ok(user)
}

/// Soft-delete a user. Returns the removed record in its raw form.
#[utoipa::path(
    delete,
    path = "/api/users/{id}",
    tag = "users",
    params(("id" = String, Path, description = "User id")),
    responses(
        (status = 200, description = "The removed record"),
        (status = 404, description = "No such user"),
    )
)]
pub async fn delete_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<UserDocument> {
    debug!(%id, "Delete user request");

    let user_id = parse_user_id(&id)?;
    let removed = state.users.delete(&UserQuery::by_id(user_id)).await?;
    ok(removed)
}

/// Parses a path segment into a typed user id.
fn parse_user_id(id: &str) -> Result<UserId, AppError> {
    UserId::parse(id)
        .map_err(|_| AppError(RosterError::validation(format!("Invalid user id \"{id}\"."))))
}
