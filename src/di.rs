use crate::{
    config::ConnectionPool,
    repository::{MenuRepository, OrderRepository, UserRepository},
    service::{AuthService, MenuService, OrderService, ProfileService},
};
use std::fmt;

#[derive(Clone)]
pub struct DependenciesInject {
    pub auth_service: AuthService,
    pub profile_service: ProfileService,
    pub menu_service: MenuService,
    pub order_service: OrderService,
}

impl fmt::Debug for DependenciesInject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DependenciesInject")
            .field("auth_service", &"AuthService")
            .field("profile_service", &"ProfileService")
            .field("menu_service", &"MenuService")
            .field("order_service", &"OrderService")
            .finish()
    }
}

impl DependenciesInject {
    pub fn new(pool: ConnectionPool) -> Self {
        let user_repo = UserRepository::new(pool.clone());
        let menu_repo = MenuRepository::new(pool.clone());
        let order_repo = OrderRepository::new(pool.clone());

        let auth_service = AuthService::new(user_repo.query.clone(), user_repo.command.clone());
        let profile_service = ProfileService::new(user_repo.command.clone());
        let menu_service = MenuService::new(
            user_repo.query.clone(),
            menu_repo.query.clone(),
            menu_repo.command.clone(),
        );
        let order_service = OrderService::new(
            menu_repo.query.clone(),
            order_repo.query.clone(),
            order_repo.command.clone(),
        );

        Self {
            auth_service,
            profile_service,
            menu_service,
            order_service,
        }
    }
}
