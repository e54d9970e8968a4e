#![allow(dead_code)]

use order_intake_lambda::handlers::intake::ApiGatewayResponse;
use serde_json::{json, Value};

/// API Gateway proxy event carrying `body` serialized as a JSON string.
pub fn proxy_event(body: Value) -> Value {
    json!({
        "httpMethod": "POST",
        "path": "/orders",
        "headers": {"Content-Type": "application/json"},
        "isBase64Encoded": false,
        "body": body.to_string(),
    })
}

pub fn response_json(response: &ApiGatewayResponse) -> Value {
    serde_json::from_str(&response.body).expect("response body should be JSON")
}

pub fn error_text(response: &ApiGatewayResponse) -> String {
    response_json(response)["error"]
        .as_str()
        .expect("error field should be a string")
        .to_string()
}
