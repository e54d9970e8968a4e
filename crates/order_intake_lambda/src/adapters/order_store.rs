use order_intake_core::contract::Order;
use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("failed to write order {order_id}: {message}")]
    Write { order_id: String, message: String },
}

/// Single-insert persistence keyed by `Order::order_id`.
pub trait OrderStore {
    fn put_order(&self, order: &Order) -> Result<(), StoreError>;
}
