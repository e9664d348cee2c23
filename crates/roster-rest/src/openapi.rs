//! OpenAPI documentation configuration.

use crate::controllers::{
    health_controller::HealthResponse,
    user_controller::{UserListResponse, UserRolesResponse},
};
use roster_core::{CreateUser, Email, ErrorResponse, Gender, LeanView, Role, UpdateUser, UserId};
use utoipa::OpenApi;

/// OpenAPI documentation for the Roster API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Roster API",
        version = "1.0.0",
        description = "RESTful API for the Roster user directory",
        license(
            name = "MIT",
            url = "https://opensource.org/licenses/MIT"
        )
    ),
    paths(
        crate::controllers::user_controller::list_users,
        crate::controllers::user_controller::create_user,
        crate::controllers::user_controller::get_user,
        crate::controllers::user_controller::get_user_by_email,
        crate::controllers::user_controller::get_user_roles,
        crate::controllers::user_controller::update_user,
        crate::controllers::user_controller::delete_user,
        crate::controllers::health_controller::health_check,
    ),
    components(
        schemas(
            UserId,
            Email,
            Gender,
            Role,
            ErrorResponse,
            CreateUser,
            UpdateUser,
            LeanView,
            UserListResponse,
            UserRolesResponse,
            HealthResponse,
        )
    ),
    tags(
        (name = "users", description = "User management endpoints"),
        (name = "health", description = "Health check endpoints")
    )
)]
pub struct ApiDoc;
