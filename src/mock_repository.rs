//! In-memory repository doubles used by the flow tests. They honor the
//! same contracts as the Postgres implementations: uniqueness on
//! logins and item names, sequence-style order ids, stringified row
//! sets for the printable reads.

use crate::{
    abstract_trait::{
        MenuCommandRepositoryTrait, MenuQueryRepositoryTrait, OrderCommandRepositoryTrait,
        OrderQueryRepositoryTrait, UserCommandRepositoryTrait, UserQueryRepositoryTrait,
    },
    domain::{
        requests::{CreateMenuItemRequest, CreateUserRequest},
        responses::RowSet,
    },
    errors::RepositoryError,
    model::{ItemStatus, MenuItem, Order, User},
    session::Cart,
};
use async_trait::async_trait;
use chrono::Utc;
use std::{
    collections::BTreeMap,
    sync::{
        Mutex,
        atomic::{AtomicI32, Ordering},
    },
};

pub(crate) struct MockUserRepository {
    users: Mutex<BTreeMap<String, User>>,
}

impl MockUserRepository {
    pub(crate) fn new() -> Self {
        Self {
            users: Mutex::new(BTreeMap::new()),
        }
    }

    pub(crate) fn seed(&self, user: User) {
        self.users.lock().unwrap().insert(user.login.clone(), user);
    }

    pub(crate) fn seed_manager(&self, login: &str, password: &str) {
        self.seed(User {
            login: login.to_string(),
            password: password.to_string(),
            phone_num: String::new(),
            fav_items: String::new(),
            user_type: "Manager".to_string(),
        });
    }
}

#[async_trait]
impl UserQueryRepositoryTrait for MockUserRepository {
    async fn find_by_login(&self, login: &str) -> Result<Option<User>, RepositoryError> {
        Ok(self.users.lock().unwrap().get(login).cloned())
    }

    async fn count_by_credentials(
        &self,
        login: &str,
        password: &str,
    ) -> Result<usize, RepositoryError> {
        let users = self.users.lock().unwrap();
        Ok(users
            .get(login)
            .filter(|user| user.password == password)
            .map(|_| 1)
            .unwrap_or(0))
    }

    async fn type_of(&self, login: &str) -> Result<Option<String>, RepositoryError> {
        let users = self.users.lock().unwrap();
        Ok(users.get(login).map(|user| user.user_type.clone()))
    }
}

#[async_trait]
impl UserCommandRepositoryTrait for MockUserRepository {
    async fn create_user(&self, req: &CreateUserRequest) -> Result<User, RepositoryError> {
        let mut users = self.users.lock().unwrap();
        if users.contains_key(&req.login) {
            return Err(RepositoryError::AlreadyExists(req.login.clone()));
        }

        let user = User {
            login: req.login.clone(),
            password: req.password.clone(),
            phone_num: req.phone_num.clone(),
            fav_items: String::new(),
            user_type: "Customer".to_string(),
        };
        users.insert(user.login.clone(), user.clone());
        Ok(user)
    }

    async fn update_login(
        &self,
        current_login: &str,
        new_login: &str,
    ) -> Result<Option<User>, RepositoryError> {
        let mut users = self.users.lock().unwrap();
        if users.contains_key(new_login) {
            return Err(RepositoryError::AlreadyExists(new_login.to_string()));
        }

        let Some(mut user) = users.remove(current_login) else {
            return Ok(None);
        };
        user.login = new_login.to_string();
        users.insert(user.login.clone(), user.clone());
        Ok(Some(user))
    }

    async fn update_phone(
        &self,
        login: &str,
        phone_num: &str,
    ) -> Result<Option<User>, RepositoryError> {
        let mut users = self.users.lock().unwrap();
        Ok(users.get_mut(login).map(|user| {
            user.phone_num = phone_num.to_string();
            user.clone()
        }))
    }

    async fn update_password(
        &self,
        login: &str,
        password: &str,
    ) -> Result<Option<User>, RepositoryError> {
        let mut users = self.users.lock().unwrap();
        Ok(users.get_mut(login).map(|user| {
            user.password = password.to_string();
            user.clone()
        }))
    }
}

pub(crate) struct MockMenuRepository {
    items: Mutex<BTreeMap<String, MenuItem>>,
}

impl MockMenuRepository {
    pub(crate) fn new() -> Self {
        Self {
            items: Mutex::new(BTreeMap::new()),
        }
    }
}

fn menu_rowset<'a>(items: impl Iterator<Item = &'a MenuItem>) -> RowSet {
    let mut rowset = RowSet::new(vec![
        "itemname".to_string(),
        "type".to_string(),
        "description".to_string(),
        "price".to_string(),
    ]);
    for item in items {
        rowset.push(vec![
            item.item_name.clone(),
            item.item_type.clone(),
            item.description.clone(),
            item.price.to_string(),
        ]);
    }
    if rowset.is_empty() {
        return RowSet::default();
    }
    rowset
}

#[async_trait]
impl MenuQueryRepositoryTrait for MockMenuRepository {
    async fn list_all(&self) -> Result<RowSet, RepositoryError> {
        let items = self.items.lock().unwrap();
        Ok(menu_rowset(items.values()))
    }

    async fn search_by_name(&self, name: &str) -> Result<RowSet, RepositoryError> {
        let items = self.items.lock().unwrap();
        Ok(menu_rowset(
            items.values().filter(|item| item.item_name == name),
        ))
    }

    async fn search_by_type(&self, item_type: &str) -> Result<RowSet, RepositoryError> {
        let items = self.items.lock().unwrap();
        Ok(menu_rowset(
            items.values().filter(|item| item.item_type == item_type),
        ))
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<MenuItem>, RepositoryError> {
        Ok(self.items.lock().unwrap().get(name).cloned())
    }

    async fn find_by_type(&self, item_type: &str) -> Result<Vec<MenuItem>, RepositoryError> {
        let items = self.items.lock().unwrap();
        Ok(items
            .values()
            .filter(|item| item.item_type == item_type)
            .cloned()
            .collect())
    }
}

#[async_trait]
impl MenuCommandRepositoryTrait for MockMenuRepository {
    async fn create_item(&self, req: &CreateMenuItemRequest) -> Result<MenuItem, RepositoryError> {
        let mut items = self.items.lock().unwrap();
        if items.contains_key(&req.item_name) {
            return Err(RepositoryError::AlreadyExists(req.item_name.clone()));
        }

        let item = MenuItem {
            item_name: req.item_name.clone(),
            item_type: req.item_type.clone(),
            price: req.price,
            description: req.description.clone(),
            image_url: req.image_url.clone(),
        };
        items.insert(item.item_name.clone(), item.clone());
        Ok(item)
    }

    async fn delete_item(&self, name: &str) -> Result<u64, RepositoryError> {
        let mut items = self.items.lock().unwrap();
        Ok(items.remove(name).map(|_| 1).unwrap_or(0))
    }
}

pub(crate) struct MockOrderRepository {
    orders: Mutex<Vec<Order>>,
    statuses: Mutex<Vec<ItemStatus>>,
    next_id: AtomicI32,
}

impl MockOrderRepository {
    pub(crate) fn new() -> Self {
        Self {
            orders: Mutex::new(Vec::new()),
            statuses: Mutex::new(Vec::new()),
            next_id: AtomicI32::new(1),
        }
    }

    pub(crate) fn seed_order(&self, order: Order) {
        self.next_id
            .fetch_max(order.order_id + 1, Ordering::SeqCst);
        self.orders.lock().unwrap().push(order);
    }
}

#[async_trait]
impl OrderQueryRepositoryTrait for MockOrderRepository {
    async fn history(&self, login: &str, limit: i64) -> Result<RowSet, RepositoryError> {
        let orders = self.orders.lock().unwrap();
        let mut mine: Vec<&Order> = orders.iter().filter(|o| o.login == login).collect();
        mine.sort_by(|a, b| {
            b.received_at
                .cmp(&a.received_at)
                .then(b.order_id.cmp(&a.order_id))
        });
        mine.truncate(limit as usize);

        if mine.is_empty() {
            return Ok(RowSet::default());
        }

        let mut rowset = RowSet::new(vec![
            "orderid".to_string(),
            "login".to_string(),
            "paid".to_string(),
            "timestamprecieved".to_string(),
            "total".to_string(),
        ]);
        for order in mine {
            rowset.push(vec![
                order.order_id.to_string(),
                order.login.clone(),
                order.paid.to_string(),
                order.received_at.to_string(),
                order.total.to_string(),
            ]);
        }
        Ok(rowset)
    }

    async fn items_for_order(&self, order_id: i32) -> Result<Vec<ItemStatus>, RepositoryError> {
        let statuses = self.statuses.lock().unwrap();
        let mut items: Vec<ItemStatus> = statuses
            .iter()
            .filter(|s| s.order_id == order_id)
            .cloned()
            .collect();
        items.sort_by(|a, b| a.item_name.cmp(&b.item_name));
        Ok(items)
    }
}

#[async_trait]
impl OrderCommandRepositoryTrait for MockOrderRepository {
    async fn checkout(&self, login: &str, cart: &Cart) -> Result<Order, RepositoryError> {
        let order_id = self.next_id.fetch_add(1, Ordering::SeqCst);
        let received_at = Utc::now().naive_utc();

        let order = Order {
            order_id,
            login: login.to_string(),
            paid: false,
            received_at,
            total: cart.total(),
        };
        self.orders.lock().unwrap().push(order.clone());

        let mut statuses = self.statuses.lock().unwrap();
        for item in cart.items() {
            statuses.push(ItemStatus {
                order_id,
                item_name: item.name.clone(),
                last_updated: received_at,
                status: "Not Shipped".to_string(),
                comments: "NONE".to_string(),
            });
        }

        Ok(order)
    }

    async fn remove_item(&self, order_id: i32, item_name: &str) -> Result<u64, RepositoryError> {
        let mut statuses = self.statuses.lock().unwrap();
        let before = statuses.len();
        statuses.retain(|s| !(s.order_id == order_id && s.item_name == item_name));
        Ok((before - statuses.len()) as u64)
    }
}
