//! Per-route validation plans.
//!
//! A plan is an ordered list of fields, each with an ordered list of pure
//! predicates. Every predicate runs independently of the others; failures
//! aggregate into structured error records in plan order, and a non-empty
//! list short-circuits the request with HTTP 400 before any handler runs.

use serde::Serialize;
use serde_json::Value;
use utoipa::ToSchema;

use crate::error::AppError;

/// Where a field is read from.
#[derive(Clone, Copy, Debug)]
pub enum Location {
    Body,
    Params,
}

impl Location {
    fn as_str(self) -> &'static str {
        match self {
            Location::Body => "body",
            Location::Params => "params",
        }
    }
}

/// One failed check. Serialized shape:
/// `{"type": "field", "value": ..., "msg": ..., "path": ..., "location": ...}`;
/// the `value` key is omitted when the field was absent.
#[derive(Clone, Debug, Serialize, ToSchema)]
pub struct FieldError {
    #[serde(rename = "type")]
    #[schema(example = "field")]
    pub kind: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Object)]
    pub value: Option<Value>,
    #[schema(example = "Id Inválido")]
    pub msg: String,
    #[schema(example = "id")]
    pub path: String,
    #[schema(example = "params")]
    pub location: String,
}

impl FieldError {
    fn new(value: Option<Value>, msg: &str, path: &str, location: Location) -> Self {
        Self {
            kind: "field".to_string(),
            value,
            msg: msg.to_string(),
            path: path.to_string(),
            location: location.as_str().to_string(),
        }
    }
}

/// A single-field synchronous check: `Some(message)` on failure.
pub type Check = fn(Option<&Value>) -> Option<&'static str>;

/// Ordered checks for one field of a request.
pub struct FieldChecks {
    pub path: &'static str,
    pub location: Location,
    pub checks: &'static [Check],
}

const NAME: FieldChecks = FieldChecks {
    path: "name",
    location: Location::Body,
    checks: &[name_is_string, name_not_empty, name_max_length],
};

const PRICE: FieldChecks = FieldChecks {
    path: "price",
    location: Location::Body,
    checks: &[price_is_numeric, price_not_empty, price_positive],
};

const AVAILABILITY: FieldChecks = FieldChecks {
    path: "availability",
    location: Location::Body,
    checks: &[availability_is_boolean],
};

const ID: FieldChecks = FieldChecks {
    path: "id",
    location: Location::Params,
    checks: &[id_is_integer],
};

/// Plan for POST /api/products.
pub const CREATE_PRODUCT: &[FieldChecks] = &[NAME, PRICE];

/// Plan for PUT /api/products/:id. The path id is checked together with the
/// body so one 400 carries every failure.
pub const UPDATE_PRODUCT: &[FieldChecks] = &[ID, NAME, PRICE, AVAILABILITY];

/// Plan for GET/PATCH/DELETE /api/products/:id.
pub const PRODUCT_ID: &[FieldChecks] = &[ID];

/// Run every check in the plan. Errors aggregate in plan order; an empty
/// result means the request is well-formed.
pub fn collect(plan: &[FieldChecks], path_id: Option<&str>, body: &Value) -> Vec<FieldError> {
    let path_value = path_id.map(|raw| Value::String(raw.to_string()));
    let mut errors = Vec::new();
    for field in plan {
        let value = match field.location {
            Location::Body => body.get(field.path),
            Location::Params => path_value.as_ref(),
        };
        for check in field.checks {
            if let Some(msg) = check(value) {
                errors.push(FieldError::new(value.cloned(), msg, field.path, field.location));
            }
        }
    }
    errors
}

/// Aggregation gate: empty error list passes, anything else becomes a 400.
pub fn validate(plan: &[FieldChecks], path_id: Option<&str>, body: &Value) -> Result<(), AppError> {
    let errors = collect(plan, path_id, body);
    if errors.is_empty() {
        Ok(())
    } else {
        Err(AppError::Validation(errors))
    }
}

/// Check and parse a path id in one step. Produces the same single
/// "Id Inválido" record as the id-only plans.
pub fn path_id(raw: &str) -> Result<i64, AppError> {
    raw.parse::<i64>().map_err(|_| {
        AppError::Validation(vec![FieldError::new(
            Some(Value::String(raw.to_string())),
            "Id Inválido",
            "id",
            Location::Params,
        )])
    })
}

// A missing name is reported only as required, so the three checks stay
// independent without double-counting absence.
fn name_is_string(value: Option<&Value>) -> Option<&'static str> {
    match value {
        Some(v) if !v.is_string() && !v.is_null() => Some("Nombre Inválido"),
        _ => None,
    }
}

fn name_not_empty(value: Option<&Value>) -> Option<&'static str> {
    match value {
        Some(Value::String(s)) if !s.trim().is_empty() => None,
        Some(v) if !v.is_string() && !v.is_null() => None,
        _ => Some("Nombre Requerido"),
    }
}

fn name_max_length(value: Option<&Value>) -> Option<&'static str> {
    match value {
        Some(Value::String(s)) if s.trim().chars().count() >= 100 => {
            Some("Nombre Demasiado Largo")
        }
        _ => None,
    }
}

/// Numbers and numeric strings both count; everything else is `None`.
fn numeric(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    }
}

fn price_is_numeric(value: Option<&Value>) -> Option<&'static str> {
    match value {
        Some(v) if numeric(v).is_some() => None,
        _ => Some("Precio Inválido"),
    }
}

fn price_not_empty(value: Option<&Value>) -> Option<&'static str> {
    match value {
        None | Some(Value::Null) => Some("Precio Requerido"),
        Some(Value::String(s)) if s.is_empty() => Some("Precio Requerido"),
        _ => None,
    }
}

fn price_positive(value: Option<&Value>) -> Option<&'static str> {
    match value.and_then(numeric) {
        Some(n) if n > 0.0 => None,
        _ => Some("Precio debe ser Mayor a 0"),
    }
}

fn availability_is_boolean(value: Option<&Value>) -> Option<&'static str> {
    match value {
        Some(Value::Bool(_)) => None,
        _ => Some("Disponibilidad Inválida"),
    }
}

fn id_is_integer(value: Option<&Value>) -> Option<&'static str> {
    match value {
        Some(Value::String(raw)) if raw.parse::<i64>().is_ok() => None,
        _ => Some("Id Inválido"),
    }
}
