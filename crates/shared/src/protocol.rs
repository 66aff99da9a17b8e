//! Paths of the users REST collection, relative to the configured API base.

use crate::domain::UserId;

pub fn users_route() -> &'static str {
    "/users"
}

pub fn user_route(id: UserId) -> String {
    format!("/users/{id}")
}
