use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct MenuItem {
    #[sqlx(rename = "itemname")]
    pub item_name: String,
    #[sqlx(rename = "type")]
    pub item_type: String,
    pub price: f64,
    pub description: String,
    #[sqlx(rename = "imageurl")]
    pub image_url: String,
}
