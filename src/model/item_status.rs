use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Per-order, per-item fulfillment record.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ItemStatus {
    #[sqlx(rename = "orderid")]
    pub order_id: i32,
    #[sqlx(rename = "itemname")]
    pub item_name: String,
    #[sqlx(rename = "lastupdated")]
    pub last_updated: NaiveDateTime,
    pub status: String,
    pub comments: String,
}
