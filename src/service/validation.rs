//! Request validation against per-endpoint field rules.

use crate::error::AppError;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

/// Expected JSON type of a body field.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Integer,
    Number,
}

#[derive(Clone, Copy, Debug)]
pub struct FieldRule {
    pub name: &'static str,
    pub kind: FieldKind,
    pub required: bool,
}

impl FieldRule {
    pub const fn required(name: &'static str, kind: FieldKind) -> Self {
        FieldRule { name, kind, required: true }
    }

    pub const fn optional(name: &'static str, kind: FieldKind) -> Self {
        FieldRule { name, kind, required: false }
    }
}

pub struct RequestValidator;

impl RequestValidator {
    /// Validate body against the rules. Required fields must be present and non-null;
    /// every present, non-null field must have the rule's type. Unknown fields are ignored.
    pub fn validate(body: &Map<String, Value>, rules: &[FieldRule]) -> Result<(), AppError> {
        for rule in rules {
            let val = body.get(rule.name);
            if rule.required && (val.is_none() || val == Some(&Value::Null)) {
                return Err(AppError::Validation(format!("{} is required", rule.name)));
            }
            if let Some(v) = val {
                validate_field(rule, v)?;
            }
        }
        Ok(())
    }

    /// Validate, then deserialize the body into the endpoint's typed request.
    pub fn parse<T: DeserializeOwned>(body: Map<String, Value>, rules: &[FieldRule]) -> Result<T, AppError> {
        Self::validate(&body, rules)?;
        serde_json::from_value(Value::Object(body)).map_err(|e| AppError::Validation(e.to_string()))
    }
}

fn validate_field(rule: &FieldRule, v: &Value) -> Result<(), AppError> {
    if v.is_null() {
        return Ok(());
    }
    let ok = match rule.kind {
        FieldKind::Text => v.is_string(),
        FieldKind::Integer => v.is_i64(),
        FieldKind::Number => v.is_number(),
    };
    if ok {
        return Ok(());
    }
    let expected = match rule.kind {
        FieldKind::Text => "a string",
        FieldKind::Integer => "an integer",
        FieldKind::Number => "a number",
    };
    Err(AppError::Validation(format!("{} must be {}", rule.name, expected)))
}
