mod menu;
mod order;
mod user;

pub use self::menu::{
    DynMenuCommandRepository, DynMenuQueryRepository, MenuCommandRepositoryTrait,
    MenuQueryRepositoryTrait,
};
pub use self::order::{
    DynOrderCommandRepository, DynOrderQueryRepository, OrderCommandRepositoryTrait,
    OrderQueryRepositoryTrait,
};
pub use self::user::{
    DynUserCommandRepository, DynUserQueryRepository, UserCommandRepositoryTrait,
    UserQueryRepositoryTrait,
};
