use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A customer record as accepted and returned by the HTTP API.
///
/// `id` is supplied by the caller and used as the lookup key; nothing in the
/// workspace generates or deduplicates it.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, ToSchema)]
pub struct Customer {
    pub id: i32,
    pub name: String,
    pub address: String,
    pub age: i32,
}

impl Customer {
    pub fn new(id: i32, name: impl Into<String>, address: impl Into<String>, age: i32) -> Self {
        Self { id, name: name.into(), address: address.into(), age }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn json_round_trip_keeps_every_field() {
        let c = Customer::new(1, "Jude", "Street", 38);
        let text = serde_json::to_string(&c).unwrap();
        let back: Customer = serde_json::from_str(&text).unwrap();
        assert_eq!(back, c);
    }

    #[test]
    fn uses_plain_field_names_on_the_wire() {
        let c = Customer::new(7, "Ada", "Main Rd", 36);
        let v = serde_json::to_value(&c).unwrap();
        assert_eq!(v, json!({"id": 7, "name": "Ada", "address": "Main Rd", "age": 36}));
    }

    #[test]
    fn rejects_body_with_missing_field() {
        let res = serde_json::from_value::<Customer>(json!({"id": 1, "name": "Jude", "age": 38}));
        assert!(res.is_err());
    }
}
