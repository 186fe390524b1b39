//! Declarative field rules and the [`ValidJson`] extractor that enforces them.
//!
//! Every rule of a body type is checked against the raw JSON object before it
//! is deserialised, so a single 400 response lists all violations.

use axum::{
  Json,
  extract::{FromRequest, Request},
};
use email_address::EmailAddress;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::{ApiError, FieldError};

/// What a [`FieldRule`] requires of its field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Check {
  /// Present and not the empty string.
  NotEmpty,
  /// Present with any value.
  Exists,
  /// A plausible email address.
  IsEmail,
  /// At least this many characters.
  MinLength(usize),
}

#[derive(Debug, Clone, Copy)]
pub struct FieldRule {
  pub field:   &'static str,
  pub check:   Check,
  pub message: &'static str,
}

impl FieldRule {
  pub const fn not_empty(field: &'static str, message: &'static str) -> Self {
    Self { field, check: Check::NotEmpty, message }
  }

  pub const fn exists(field: &'static str, message: &'static str) -> Self {
    Self { field, check: Check::Exists, message }
  }

  pub const fn email(field: &'static str, message: &'static str) -> Self {
    Self { field, check: Check::IsEmail, message }
  }

  pub const fn min_length(field: &'static str, min: usize, message: &'static str) -> Self {
    Self { field, check: Check::MinLength(min), message }
  }

  fn passes(&self, value: Option<&str>) -> bool {
    match (self.check, value) {
      (_, None) => false,
      (Check::Exists, Some(_)) => true,
      (Check::NotEmpty, Some(v)) => !v.is_empty(),
      (Check::IsEmail, Some(v)) => is_email(v),
      (Check::MinLength(min), Some(v)) => v.chars().count() >= min,
    }
  }
}

/// Implemented by request bodies that declare field rules.
pub trait Validate {
  const RULES: &'static [FieldRule];
}

/// Textual form of a JSON field as seen by the rules. `null` is absent.
fn field_text(body: &Value, field: &str) -> Option<String> {
  match body.get(field)? {
    Value::Null => None,
    Value::String(s) => Some(s.clone()),
    Value::Array(items) => Some(
      items
        .iter()
        .filter_map(|item| match item {
          Value::String(s) => Some(s.clone()),
          Value::Null => None,
          other => Some(other.to_string()),
        })
        .collect::<Vec<_>>()
        .join(","),
    ),
    other => Some(other.to_string()),
  }
}

/// Evaluate every rule against `body`, returning the violations in rule
/// order.
pub fn check(body: &Value, rules: &[FieldRule]) -> Vec<FieldError> {
  rules
    .iter()
    .filter(|rule| !rule.passes(field_text(body, rule.field).as_deref()))
    .map(|rule| FieldError::new(rule.field, rule.message))
    .collect()
}

/// An address [`EmailAddress`] accepts whose domain is a dotted host name
/// ending in an alphabetic top-level label. Display names and domain
/// literals are refused.
pub fn is_email(s: &str) -> bool {
  if s.contains(['<', '>']) || s.chars().any(char::is_whitespace) {
    return false;
  }
  match s.parse::<EmailAddress>() {
    Ok(address) => is_host_name(address.domain()),
    Err(_) => false,
  }
}

fn is_host_name(domain: &str) -> bool {
  let labels: Vec<&str> = domain.split('.').collect();
  let Some(tld) = labels.last().filter(|_| labels.len() >= 2) else {
    return false;
  };
  let label_ok = |l: &&str| {
    !l.is_empty()
      && !l.starts_with('-')
      && !l.ends_with('-')
      && l.chars().all(|c| c.is_ascii_alphanumeric() || c == '-')
  };
  labels.iter().all(label_ok) && tld.len() >= 2 && tld.chars().all(|c| c.is_ascii_alphabetic())
}

/// JSON body extractor that applies `T::RULES` before deserialising.
pub struct ValidJson<T>(pub T);

impl<S, T> FromRequest<S> for ValidJson<T>
where
  S: Send + Sync,
  T: DeserializeOwned + Validate,
{
  type Rejection = ApiError;

  async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
    let Json(body) = Json::<Value>::from_request(req, state)
      .await
      .map_err(|e| ApiError::BadRequest(e.body_text()))?;

    if !body.is_object() {
      return Err(ApiError::BadRequest("request body must be a JSON object".into()));
    }

    let violations = check(&body, T::RULES);
    if !violations.is_empty() {
      return Err(ApiError::Validation(violations));
    }

    let value = serde_json::from_value(body).map_err(|e| ApiError::BadRequest(e.to_string()))?;
    Ok(ValidJson(value))
  }
}
