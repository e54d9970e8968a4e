pub mod dynamodb;
pub mod memory;
pub mod order_store;
