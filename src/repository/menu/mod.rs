mod command;
mod query;

use self::command::MenuCommandRepository;
use self::query::MenuQueryRepository;

use crate::{
    abstract_trait::{DynMenuCommandRepository, DynMenuQueryRepository},
    config::ConnectionPool,
};
use std::sync::Arc;

#[derive(Clone)]
pub struct MenuRepository {
    pub query: DynMenuQueryRepository,
    pub command: DynMenuCommandRepository,
}

impl MenuRepository {
    pub fn new(pool: ConnectionPool) -> Self {
        let query = Arc::new(MenuQueryRepository::new(pool.clone())) as DynMenuQueryRepository;
        let command =
            Arc::new(MenuCommandRepository::new(pool.clone())) as DynMenuCommandRepository;

        Self { query, command }
    }
}
