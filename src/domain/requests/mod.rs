mod menu;
mod profile;
mod user;

pub use self::menu::CreateMenuItemRequest;
pub use self::profile::{ProfileField, UpdateProfileRequest};
pub use self::user::{CreateUserRequest, LoginRequest};
