use std::collections::HashMap;
use std::sync::Mutex;

use order_intake_core::contract::Order;

use crate::adapters::order_store::{OrderStore, StoreError};

/// Process-local store used by tests and local runs.
#[derive(Debug, Default)]
pub struct InMemoryOrderStore {
    orders: Mutex<HashMap<String, Order>>,
}

impl InMemoryOrderStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, order_id: &str) -> Option<Order> {
        self.orders
            .lock()
            .ok()
            .and_then(|orders| orders.get(order_id).cloned())
    }

    pub fn len(&self) -> usize {
        self.orders.lock().map(|orders| orders.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl OrderStore for InMemoryOrderStore {
    fn put_order(&self, order: &Order) -> Result<(), StoreError> {
        let mut orders = self.orders.lock().map_err(|_| StoreError::Write {
            order_id: order.order_id.clone(),
            message: "in-memory store lock poisoned".to_string(),
        })?;
        orders.insert(order.order_id.clone(), order.clone());
        Ok(())
    }
}
