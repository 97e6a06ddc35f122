//! Price-string and condition normalization shared by the providers.

use fraud_engine::types::Condition;

/// Convert a raw price string to dollars. Unparseable input yields 0.0.
///
/// Strips currency symbols, thousands separators, and surrounding text
/// ("$1,299.99", "from $89.00 each").
pub fn normalize_price(raw: &str) -> f64 {
  let cleaned: String = raw.chars().filter(|c| c.is_ascii_digit() || *c == '.').collect();
  if cleaned.is_empty() {
    return 0.0;
  }
  cleaned.parse().unwrap_or(0.0)
}

/// Detect listing condition: explicit provider field first, then title
/// keywords, else unknown. Refurbished markers are checked before "new"
/// so "renewed"/"certified refurbished" don't misread as new.
pub fn detect_condition(condition_field: &str, title: &str) -> Condition {
  let field = condition_field.to_lowercase();
  if !field.is_empty() {
    if field.contains("refurbished") || field.contains("renewed") {
      return Condition::Refurbished;
    }
    if field.contains("new") {
      return Condition::New;
    }
    if field.contains("used") || field.contains("pre-owned") {
      return Condition::Used;
    }
  }

  let title = title.to_lowercase();
  if ["refurbished", "renewed", "restored"].iter().any(|k| title.contains(k)) {
    Condition::Refurbished
  } else if ["brand new", "new in box", "nib", "sealed"].iter().any(|k| title.contains(k)) {
    Condition::New
  } else if ["used", "pre-owned", "preowned"].iter().any(|k| title.contains(k)) {
    Condition::Used
  } else {
    Condition::Unknown
  }
}
