//! Total accessors over ARIN's XML-derived JSON.
//!
//! ARIN wraps every scalar as `{"$": value}` and every attribute as an
//! `@`-prefixed key. The helpers here walk that shape and never fail: a
//! missing step degrades to the empty default instead of an error.

use serde_json::Value;

/// Key holding the text content of an ARIN element.
pub const TEXT_KEY: &str = "$";

/// Renders a JSON scalar as text. Containers and `null` have no text.
fn scalar_text(value: &Value) -> Option<String> {
  match value {
    Value::String(s) => Some(s.clone()),
    Value::Number(n) => Some(n.to_string()),
    Value::Bool(b) => Some(b.to_string()),
    Value::Null | Value::Array(_) | Value::Object(_) => None,
  }
}

/// Walks `path` from `root`, stopping at the first missing or non-object step.
fn walk<'a>(root: &'a Value, path: &[&str]) -> Option<&'a Value> {
  path
    .iter()
    .try_fold(root, |current, key| current.as_object()?.get(*key))
}

/// Returns the `"$"` text found at the end of `path`, or `None`.
///
/// An empty path reads `"$"` directly off `root`.
#[must_use]
pub fn extract_opt(root: &Value, path: &[&str]) -> Option<String> {
  walk(root, path)?
    .as_object()?
    .get(TEXT_KEY)
    .and_then(scalar_text)
}

/// Returns the `"$"` text found at the end of `path`, or `""` when any step
/// is absent or the walk lands on something other than an object.
///
/// # Example
/// ```
/// use serde_json::json;
/// let net = json!({"handle": {"$": "NET-1"}});
/// assert_eq!(arinq::extract::extract(&net, &["handle"]), "NET-1");
/// assert_eq!(arinq::extract::extract(&net, &["handle", "nope"]), "");
/// ```
#[must_use]
pub fn extract(root: &Value, path: &[&str]) -> String {
  extract_opt(root, path).unwrap_or_default()
}

/// Reads an attribute-style key (`@handle`, `@name`) that is not wrapped in
/// `{"$": ...}`.
#[must_use]
pub fn attribute(obj: &Value, name: &str) -> String {
  obj
    .get(name)
    .and_then(scalar_text)
    .unwrap_or_default()
}
