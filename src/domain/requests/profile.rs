use serde::{Deserialize, Serialize};
use validator::Validate;

/// The one profile column a targeted update may touch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProfileField {
    Login,
    Phone,
    Password,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct UpdateProfileRequest {
    /// Login of the session issuing the update, used as the row key.
    #[validate(length(min = 1, message = "Login must not be empty"))]
    pub login: String,

    pub field: ProfileField,

    #[validate(length(min = 1, message = "New value must not be empty"))]
    pub value: String,
}
