use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct User {
    pub login: String,
    pub password: String,
    #[sqlx(rename = "phonenum")]
    pub phone_num: String,
    #[sqlx(rename = "favitems")]
    pub fav_items: String,
    #[sqlx(rename = "type")]
    pub user_type: String,
}

/// Privilege level derived from the `type` column. Anything carrying the
/// `Manager` marker gets the extended menu operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Role {
    Customer,
    Manager,
}

impl Role {
    pub fn from_type_column(user_type: &str) -> Self {
        if user_type.contains("Manager") {
            Role::Manager
        } else {
            Role::Customer
        }
    }

    pub fn is_manager(self) -> bool {
        self == Role::Manager
    }
}

#[cfg(test)]
mod tests {
    use super::Role;

    #[test]
    fn manager_marker_anywhere_in_type_grants_manager() {
        assert_eq!(Role::from_type_column("Manager"), Role::Manager);
        assert_eq!(Role::from_type_column("Manager "), Role::Manager);
        assert_eq!(Role::from_type_column("StoreManager"), Role::Manager);
    }

    #[test]
    fn everything_else_is_customer() {
        assert_eq!(Role::from_type_column("Customer"), Role::Customer);
        assert_eq!(Role::from_type_column(""), Role::Customer);
        assert_eq!(Role::from_type_column("manager"), Role::Customer);
    }
}
