//! HTTP request handlers.

pub mod health_handler;
pub mod user_handler;

pub use health_handler::{health_check, health_routes};
pub use user_handler::{
    create_user, delete_user, get_user, list_user_memories, list_user_points, list_users,
    update_user, user_routes, CreateUserRequest, UpdateUserRequest,
};
