use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateMenuItemRequest {
    #[validate(length(min = 1, message = "Item name must not be empty"))]
    pub item_name: String,

    #[validate(length(min = 1, message = "Item type must not be empty"))]
    pub item_type: String,

    #[validate(range(min = 0.0, message = "Price must not be negative"))]
    pub price: f64,

    pub description: String,

    pub image_url: String,
}
