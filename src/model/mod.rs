mod item_status;
mod menu_item;
mod order;
mod user;

pub use self::item_status::ItemStatus;
pub use self::menu_item::MenuItem;
pub use self::order::Order;
pub use self::user::{Role, User};
