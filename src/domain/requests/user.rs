use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateUserRequest {
    #[validate(length(min = 1, message = "Login must not be empty"))]
    pub login: String,

    #[validate(length(min = 1, message = "Password must not be empty"))]
    pub password: String,

    pub phone_num: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(length(min = 1, message = "Login must not be empty"))]
    pub login: String,

    pub password: String,
}
