#![allow(dead_code)]

use std::sync::Mutex;

use order_intake_core::contract::Order;
use order_intake_lambda::adapters::order_store::{OrderStore, StoreError};

/// Rejects every write, recording the attempts.
#[derive(Default)]
pub struct FailingStore {
    attempts: Mutex<Vec<String>>,
}

impl FailingStore {
    pub fn new() -> Self {
        Self {
            attempts: Mutex::new(Vec::new()),
        }
    }

    pub fn attempts(&self) -> Vec<String> {
        self.attempts.lock().expect("poisoned mutex").clone()
    }
}

impl OrderStore for FailingStore {
    fn put_order(&self, order: &Order) -> Result<(), StoreError> {
        self.attempts
            .lock()
            .expect("poisoned mutex")
            .push(order.order_id.clone());
        Err(StoreError::Write {
            order_id: order.order_id.clone(),
            message: "simulated ProvisionedThroughputExceededException".to_string(),
        })
    }
}
