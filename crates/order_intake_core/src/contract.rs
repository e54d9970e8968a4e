use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use thiserror::Error;

pub const DEFAULT_CUSTOMER_PHONE: &str = "N/A";
pub const ORDER_CREATED_MESSAGE: &str = "Order created successfully";
pub const INTERNAL_ERROR_MESSAGE: &str = "Internal server error processing the order";

/// Body keys a caller must supply, in the order they are reported when absent.
pub const REQUIRED_FIELDS: [&str; 3] = ["name", "email", "description"];
pub const PHONE_FIELD: &str = "phone";

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderStatus {
    Pending,
}

impl OrderStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "PENDING",
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RecordType {
    Quote,
}

impl RecordType {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Quote => "QUOTE",
        }
    }
}

/// Caller-supplied fields after validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderRequest {
    pub name: String,
    pub email: String,
    pub description: String,
    pub phone: Option<String>,
}

/// A flower quote request as persisted, keyed by `order_id`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub order_id: String,
    pub customer_name: String,
    pub customer_email: String,
    pub customer_phone: String,
    pub description: String,
    pub status: OrderStatus,
    pub created_at: String,
    #[serde(rename = "type")]
    pub record_type: RecordType,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct OrderCreatedResponse {
    pub message: String,
    pub order_id: String,
    pub status: OrderStatus,
    pub timestamp: String,
}

impl OrderCreatedResponse {
    pub fn for_order(order: &Order) -> Self {
        Self {
            message: ORDER_CREATED_MESSAGE.to_string(),
            order_id: order.order_id.clone(),
            status: order.status,
            timestamp: order.created_at.clone(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ValidationErrorBody {
    pub error: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct InternalErrorBody {
    pub message: String,
    pub request_id: String,
}

impl InternalErrorBody {
    pub fn new(request_id: impl Into<String>) -> Self {
        Self {
            message: INTERNAL_ERROR_MESSAGE.to_string(),
            request_id: request_id.into(),
        }
    }

    /// Built as a `Value` so the 500 path has no fallible encoding step.
    pub fn to_json(&self) -> Value {
        json!({
            "message": self.message,
            "requestId": self.request_id,
        })
    }
}

/// Client-caused rejections. Each one maps to a 400 response.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Request body is empty")]
    EmptyBody,

    #[error("Malformed JSON body: {0}")]
    MalformedBody(String),

    #[error("Request body must be a JSON object")]
    BodyNotObject,

    #[error("Missing required fields: {}", .0.join(", "))]
    MissingFields(Vec<&'static str>),

    #[error("Field '{0}' must be a string")]
    FieldNotString(&'static str),
}
