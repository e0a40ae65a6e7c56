use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Order {
    #[sqlx(rename = "orderid")]
    pub order_id: i32,
    pub login: String,
    pub paid: bool,
    #[sqlx(rename = "timestamprecieved")]
    pub received_at: NaiveDateTime,
    pub total: f64,
}
