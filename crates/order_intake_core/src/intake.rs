use serde_json::{Map, Value};

use crate::contract::{
    Order, OrderRequest, OrderStatus, RecordType, ValidationError, DEFAULT_CUSTOMER_PHONE,
    PHONE_FIELD, REQUIRED_FIELDS,
};
use crate::stamp::OrderStamper;

pub type RequestBody = Map<String, Value>;

/// Required keys absent from `body`, in `REQUIRED_FIELDS` order. An explicit
/// `null` counts as absent.
pub fn missing_required_fields(body: &RequestBody) -> Vec<&'static str> {
    REQUIRED_FIELDS
        .iter()
        .copied()
        .filter(|field| body.get(*field).unwrap_or(&Value::Null).is_null())
        .collect()
}

pub fn parse_order_request(body: &RequestBody) -> Result<OrderRequest, ValidationError> {
    let missing = missing_required_fields(body);
    if !missing.is_empty() {
        return Err(ValidationError::MissingFields(missing));
    }

    let [name_key, email_key, description_key] = REQUIRED_FIELDS;
    Ok(OrderRequest {
        name: required_string(body, name_key)?,
        email: required_string(body, email_key)?,
        description: required_string(body, description_key)?,
        phone: optional_string(body, PHONE_FIELD)?,
    })
}

pub fn build_order(request: OrderRequest, stamper: &dyn OrderStamper) -> Order {
    let stamp = stamper.stamp();
    Order {
        order_id: stamp.order_id,
        customer_name: request.name,
        customer_email: request.email,
        customer_phone: request
            .phone
            .unwrap_or_else(|| DEFAULT_CUSTOMER_PHONE.to_string()),
        description: request.description,
        status: OrderStatus::Pending,
        created_at: stamp.created_at,
        record_type: RecordType::Quote,
    }
}

/// Presence is checked by `missing_required_fields` first, so any non-string
/// value left here is a type error.
fn required_string(body: &RequestBody, field: &'static str) -> Result<String, ValidationError> {
    match body.get(field) {
        Some(Value::String(text)) => Ok(text.clone()),
        _ => Err(ValidationError::FieldNotString(field)),
    }
}

fn optional_string(
    body: &RequestBody,
    field: &'static str,
) -> Result<Option<String>, ValidationError> {
    match body.get(field) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(text)) => Ok(Some(text.clone())),
        Some(_) => Err(ValidationError::FieldNotString(field)),
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::stamp::OrderStamp;

    struct FixedStamper;

    impl OrderStamper for FixedStamper {
        fn stamp(&self) -> OrderStamp {
            OrderStamp {
                order_id: "fixed-id".to_string(),
                created_at: "2026-02-14T00:00:00.000000Z".to_string(),
            }
        }
    }

    fn body(value: Value) -> RequestBody {
        match value {
            Value::Object(map) => map,
            other => panic!("expected object, got {other}"),
        }
    }

    #[test]
    fn reports_missing_fields_in_required_order() {
        let missing = missing_required_fields(&body(json!({"email": "ana@x.com"})));
        assert_eq!(missing, vec!["name", "description"]);
    }

    #[test]
    fn null_required_field_counts_as_missing() {
        let error = parse_order_request(&body(json!({
            "name": "Ana",
            "email": null,
            "description": "tulips",
        })))
        .expect_err("null email should be rejected");

        assert_eq!(error, ValidationError::MissingFields(vec!["email"]));
    }

    #[test]
    fn rejects_non_string_values() {
        let error = parse_order_request(&body(json!({
            "name": "Ana",
            "email": "ana@x.com",
            "description": "tulips",
            "phone": 5551234,
        })))
        .expect_err("numeric phone should be rejected");

        assert_eq!(error, ValidationError::FieldNotString("phone"));
        assert_eq!(error.to_string(), "Field 'phone' must be a string");
    }

    #[test]
    fn rejects_non_string_required_field() {
        let error = parse_order_request(&body(json!({
            "name": ["Ana"],
            "email": "ana@x.com",
            "description": "tulips",
        })))
        .expect_err("array name should be rejected");

        assert_eq!(error, ValidationError::FieldNotString("name"));
    }

    #[test]
    fn ignores_unknown_keys() {
        let request = parse_order_request(&body(json!({
            "name": "Ana",
            "email": "ana@x.com",
            "description": "tulips",
            "giftWrap": true,
        })))
        .expect("request should pass");

        assert_eq!(request.phone, None);
    }

    #[test]
    fn build_order_defaults_phone_and_fixes_status() {
        let request = OrderRequest {
            name: "Ana".to_string(),
            email: "ana@x.com".to_string(),
            description: "12 red roses".to_string(),
            phone: None,
        };

        let order = build_order(request, &FixedStamper);
        assert_eq!(order.order_id, "fixed-id");
        assert_eq!(order.customer_phone, DEFAULT_CUSTOMER_PHONE);
        assert_eq!(order.status, OrderStatus::Pending);
        assert_eq!(order.record_type, RecordType::Quote);
        assert_eq!(order.created_at, "2026-02-14T00:00:00.000000Z");
    }

    #[test]
    fn build_order_keeps_supplied_phone() {
        let request = OrderRequest {
            name: "Ana".to_string(),
            email: "ana@x.com".to_string(),
            description: "12 red roses".to_string(),
            phone: Some("555-1234".to_string()),
        };

        assert_eq!(
            build_order(request, &FixedStamper).customer_phone,
            "555-1234"
        );
    }
}
