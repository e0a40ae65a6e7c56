pub mod executor;

mod menu;
mod order;
mod user;

pub use self::menu::MenuRepository;
pub use self::order::OrderRepository;
pub use self::user::UserRepository;
