//! OpenAPI documentation.

use utoipa::OpenApi;

use crate::api::handlers::user_handler::{CreateUserRequest, UpdateUserRequest};
use domain::{Memory, MemoryTitle, PointView, UserResponse, UserWithMemories};

/// API documentation struct.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "User Service",
        description = "User accounts with their memories and points",
        license(name = "MIT", url = "https://opensource.org/licenses/MIT")
    ),
    paths(
        crate::api::handlers::user_handler::create_user,
        crate::api::handlers::user_handler::list_users,
        crate::api::handlers::user_handler::get_user,
        crate::api::handlers::user_handler::update_user,
        crate::api::handlers::user_handler::delete_user,
        crate::api::handlers::user_handler::list_user_memories,
        crate::api::handlers::user_handler::list_user_points,
    ),
    components(
        schemas(
            CreateUserRequest,
            UpdateUserRequest,
            UserResponse,
            UserWithMemories,
            Memory,
            MemoryTitle,
            PointView,
        )
    ),
    tags(
        (name = "Users", description = "User management endpoints"),
    )
)]
pub struct ApiDoc;
