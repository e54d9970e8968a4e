use std::collections::HashMap;

use aws_sdk_dynamodb::types::AttributeValue;
use order_intake_core::contract::Order;

use crate::adapters::order_store::{OrderStore, StoreError};

/// DynamoDB-backed store. Built once per execution environment and shared
/// read-only by every invocation.
///
/// `put_order` bridges to the async SDK with `block_in_place`, so it must run
/// on the multi-threaded Tokio runtime that `#[tokio::main]` sets up in
/// `bin/order_intake.rs`; a current-thread runtime panics.
#[derive(Debug, Clone)]
pub struct DynamoOrderStore {
    table_name: String,
    client: aws_sdk_dynamodb::Client,
}

impl DynamoOrderStore {
    pub fn new(table_name: impl Into<String>, client: aws_sdk_dynamodb::Client) -> Self {
        Self {
            table_name: table_name.into(),
            client,
        }
    }

    pub fn table_name(&self) -> &str {
        &self.table_name
    }
}

impl OrderStore for DynamoOrderStore {
    fn put_order(&self, order: &Order) -> Result<(), StoreError> {
        let client = self.client.clone();
        let table_name = self.table_name.clone();
        let item = order_item(order);

        tokio::task::block_in_place(|| {
            tokio::runtime::Handle::current().block_on(async move {
                client
                    .put_item()
                    .table_name(table_name)
                    .set_item(Some(item))
                    .send()
                    .await
                    .map(|_| ())
            })
        })
        .map_err(|error| StoreError::Write {
            order_id: order.order_id.clone(),
            message: format!("{}", aws_sdk_dynamodb::error::DisplayErrorContext(&error)),
        })
    }
}

/// Item attributes for a single `PutItem`; every attribute is a string.
pub fn order_item(order: &Order) -> HashMap<String, AttributeValue> {
    HashMap::from([
        string_attribute("orderId", &order.order_id),
        string_attribute("customerName", &order.customer_name),
        string_attribute("customerEmail", &order.customer_email),
        string_attribute("customerPhone", &order.customer_phone),
        string_attribute("description", &order.description),
        string_attribute("status", order.status.as_str()),
        string_attribute("createdAt", &order.created_at),
        string_attribute("type", order.record_type.as_str()),
    ])
}

fn string_attribute(name: &str, value: &str) -> (String, AttributeValue) {
    (name.to_string(), AttributeValue::S(value.to_string()))
}
