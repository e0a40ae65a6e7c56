mod auth;
mod menu;
mod order;
mod profile;

pub use self::auth::AuthService;
pub use self::menu::MenuService;
pub use self::order::OrderService;
pub use self::profile::ProfileService;
