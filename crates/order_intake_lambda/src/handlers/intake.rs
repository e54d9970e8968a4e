use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use order_intake_core::contract::{
    InternalErrorBody, OrderCreatedResponse, ValidationError, ValidationErrorBody,
};
use order_intake_core::intake::{build_order, parse_order_request, RequestBody};
use order_intake_core::stamp::OrderStamper;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tracing::{debug, error, info, warn};

use crate::adapters::order_store::OrderStore;
use crate::error::IntakeError;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ApiGatewayResponse {
    #[serde(rename = "statusCode")]
    pub status_code: u16,
    pub headers: Value,
    pub body: String,
}

/// Per-invocation metadata supplied by the Lambda runtime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvocationMeta {
    pub request_id: String,
}

impl InvocationMeta {
    pub fn new(request_id: impl Into<String>) -> Self {
        Self {
            request_id: request_id.into(),
        }
    }
}

pub fn handle_order_event(
    event: Value,
    invocation: &InvocationMeta,
    stamper: &dyn OrderStamper,
    store: &dyn OrderStore,
) -> ApiGatewayResponse {
    debug!(request_id = %invocation.request_id, event = %event, "processing order event");

    let outcome = create_order(&event, stamper, store);
    if let Ok(created) = &outcome {
        info!(
            request_id = %invocation.request_id,
            order_id = %created.order_id,
            "order saved"
        );
    }
    respond(201, outcome, invocation)
}

fn create_order(
    event: &Value,
    stamper: &dyn OrderStamper,
    store: &dyn OrderStore,
) -> Result<OrderCreatedResponse, IntakeError> {
    let body = extract_body(event)?;
    let request = parse_order_request(&body)?;
    let order = build_order(request, stamper);

    store.put_order(&order)?;
    Ok(OrderCreatedResponse::for_order(&order))
}

/// Single boundary for every outcome: validation failures become 400s,
/// everything else (including a payload that fails to serialize) a 500.
fn respond<T: Serialize>(
    status_code: u16,
    outcome: Result<T, IntakeError>,
    invocation: &InvocationMeta,
) -> ApiGatewayResponse {
    match outcome.and_then(|payload| json_response(status_code, &payload)) {
        Ok(response) => response,
        Err(failure) if failure.is_validation() => validation_error_response(&failure, invocation),
        Err(failure) => internal_error_response(&failure, invocation),
    }
}

/// Pulls the JSON object out of an API Gateway proxy event. A `body` that is
/// already an object (direct invocation) is accepted as-is.
pub fn extract_body(event: &Value) -> Result<RequestBody, ValidationError> {
    let Some(object) = event.as_object() else {
        return Err(ValidationError::BodyNotObject);
    };

    let base64_encoded = object
        .get("isBase64Encoded")
        .and_then(Value::as_bool)
        .unwrap_or(false);

    match object.get("body") {
        None | Some(Value::Null) => Err(ValidationError::EmptyBody),
        Some(Value::String(text)) if text.trim().is_empty() => Err(ValidationError::EmptyBody),
        Some(Value::String(text)) if base64_encoded => parse_object(&decode_base64(text)?),
        Some(Value::String(text)) => parse_object(text),
        Some(Value::Object(map)) if map.is_empty() => Err(ValidationError::EmptyBody),
        Some(Value::Object(map)) => Ok(map.clone()),
        Some(_) => Err(ValidationError::BodyNotObject),
    }
}

fn decode_base64(text: &str) -> Result<String, ValidationError> {
    let bytes = BASE64
        .decode(text.trim())
        .map_err(|error| ValidationError::MalformedBody(format!("invalid base64: {error}")))?;
    let decoded = String::from_utf8(bytes)
        .map_err(|error| ValidationError::MalformedBody(format!("invalid UTF-8: {error}")))?;
    if decoded.trim().is_empty() {
        return Err(ValidationError::EmptyBody);
    }
    Ok(decoded)
}

fn parse_object(text: &str) -> Result<RequestBody, ValidationError> {
    match serde_json::from_str::<Value>(text) {
        Ok(Value::Object(map)) => Ok(map),
        Ok(_) => Err(ValidationError::BodyNotObject),
        Err(error) => Err(ValidationError::MalformedBody(error.to_string())),
    }
}

fn response_headers() -> Value {
    json!({
        "Content-Type": "application/json",
        "Access-Control-Allow-Origin": "*",
        "Access-Control-Allow-Methods": "POST",
    })
}

fn json_response(
    status_code: u16,
    payload: &impl Serialize,
) -> Result<ApiGatewayResponse, IntakeError> {
    Ok(ApiGatewayResponse {
        status_code,
        headers: response_headers(),
        body: serde_json::to_string(payload)?,
    })
}

fn validation_error_response(
    failure: &IntakeError,
    invocation: &InvocationMeta,
) -> ApiGatewayResponse {
    warn!(
        request_id = %invocation.request_id,
        reason = %failure,
        "order rejected"
    );
    let body = ValidationErrorBody {
        error: failure.to_string(),
    };
    json_response(400, &body).unwrap_or_else(|error| internal_error_response(&error, invocation))
}

fn internal_error_response(
    failure: &IntakeError,
    invocation: &InvocationMeta,
) -> ApiGatewayResponse {
    error!(
        request_id = %invocation.request_id,
        error = %failure,
        "order intake failed"
    );
    ApiGatewayResponse {
        status_code: 500,
        headers: response_headers(),
        body: InternalErrorBody::new(&invocation.request_id)
            .to_json()
            .to_string(),
    }
}
