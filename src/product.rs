//! Product entity and request payloads.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;

/// One catalog row, as stored and as returned to clients.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, sqlx::FromRow, ToSchema)]
pub struct Product {
    /// Assigned by the store; unique and immutable.
    #[schema(example = 1)]
    pub id: i64,
    #[schema(example = "Monitor Curvo 49 Pulgadas")]
    pub name: String,
    #[schema(example = 300)]
    pub price: f64,
    #[schema(example = true)]
    pub availability: bool,
}

/// Create payload. Availability starts at the store default (`true`).
#[derive(Clone, Debug, Deserialize, ToSchema)]
pub struct NewProduct {
    #[schema(example = "Monitor Curvo 49 Pulgadas")]
    pub name: String,
    #[schema(example = 300)]
    pub price: f64,
}

impl NewProduct {
    /// Extract from a body that already passed the create plan.
    pub fn from_body(body: &Value) -> Self {
        Self {
            name: string_field(body, "name"),
            price: numeric_field(body, "price"),
        }
    }
}

/// Full-update payload: every mutable column is overwritten.
#[derive(Clone, Debug, Deserialize, ToSchema)]
pub struct ProductUpdate {
    #[schema(example = "Monitor Curvo 49 Pulgadas")]
    pub name: String,
    #[schema(example = 300)]
    pub price: f64,
    #[schema(example = true)]
    pub availability: bool,
}

impl ProductUpdate {
    /// Extract from a body that already passed the full-update plan.
    pub fn from_body(body: &Value) -> Self {
        Self {
            name: string_field(body, "name"),
            price: numeric_field(body, "price"),
            availability: body
                .get("availability")
                .and_then(Value::as_bool)
                .unwrap_or_default(),
        }
    }
}

fn string_field(body: &Value, field: &str) -> String {
    body.get(field)
        .and_then(Value::as_str)
        .map(str::trim)
        .unwrap_or_default()
        .to_string()
}

/// Validated prices may arrive as numbers or numeric strings.
fn numeric_field(body: &Value, field: &str) -> f64 {
    match body.get(field) {
        Some(Value::Number(n)) => n.as_f64().unwrap_or_default(),
        Some(Value::String(s)) => s.trim().parse().unwrap_or_default(),
        _ => 0.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn create_payload_trims_name_and_parses_numeric_strings() {
        let draft = NewProduct::from_body(&json!({"name": "  Mouse Gamer  ", "price": "49.99"}));
        assert_eq!(draft.name, "Mouse Gamer");
        assert_eq!(draft.price, 49.99);
    }

    #[test]
    fn update_payload_carries_all_three_columns() {
        let update = ProductUpdate::from_body(
            &json!({"name": "Teclado", "price": 120, "availability": false}),
        );
        assert_eq!(update.name, "Teclado");
        assert_eq!(update.price, 120.0);
        assert!(!update.availability);
    }
}
