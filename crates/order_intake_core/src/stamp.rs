use chrono::{SecondsFormat, Utc};
use uuid::Uuid;

/// Identity and creation time assigned to a new order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderStamp {
    pub order_id: String,
    pub created_at: String,
}

pub trait OrderStamper {
    fn stamp(&self) -> OrderStamp;
}

/// Random v4 identifiers and the current UTC time in RFC 3339.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemStamper;

impl OrderStamper for SystemStamper {
    fn stamp(&self) -> OrderStamp {
        OrderStamp {
            order_id: Uuid::new_v4().to_string(),
            created_at: Utc::now().to_rfc3339_opts(SecondsFormat::Micros, true),
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::DateTime;

    use super::*;

    #[test]
    fn system_stamper_issues_distinct_ids() {
        let first = SystemStamper.stamp();
        let second = SystemStamper.stamp();

        assert_ne!(first.order_id, second.order_id);
        assert!(Uuid::parse_str(&first.order_id).is_ok());
    }

    #[test]
    fn system_stamper_timestamp_is_rfc3339_utc() {
        let stamp = SystemStamper.stamp();

        assert!(stamp.created_at.ends_with('Z'));
        assert!(DateTime::parse_from_rfc3339(&stamp.created_at).is_ok());
    }
}
