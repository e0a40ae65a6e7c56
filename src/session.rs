//! Session-scoped state: the authenticated login and the order cart.
//! Both live only for the duration of one interactive session; all
//! durable state belongs to the store.

/// Explicit session context threaded through the dispatcher instead of
/// a process-global authorized-user value.
#[derive(Debug, Default)]
pub struct Session {
    login: Option<String>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn authorize(&mut self, login: impl Into<String>) {
        self.login = Some(login.into());
    }

    /// Dropped on Log out so returning to the main menu never carries
    /// authentication over.
    pub fn clear(&mut self) {
        self.login = None;
    }

    pub fn login(&self) -> Option<&str> {
        self.login.as_deref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.login.is_some()
    }
}

#[derive(Debug, Clone)]
pub struct CartItem {
    pub name: String,
    pub price: f64,
}

/// In-memory list of selected item names with a running price total,
/// used only during order placement.
#[derive(Debug, Default)]
pub struct Cart {
    items: Vec<CartItem>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, name: impl Into<String>, price: f64) {
        self.items.push(CartItem {
            name: name.into(),
            price,
        });
    }

    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    pub fn total(&self) -> f64 {
        self.items.iter().map(|item| item.price).sum()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
