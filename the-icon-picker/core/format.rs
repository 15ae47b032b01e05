//! Encoding and decoding of the persisted field value.
//!
//! The canonical identifier is always kebab-case; the host may want it
//! stored in one of four shapes. Decoding is total: anything we don't
//! recognize reads back as "no selection", which the UI treats exactly like
//! an explicit clear.

use serde::{
  Deserialize,
  Serialize,
};
use serde_json::Value;

/// How the selected identifier is written to the host field.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IconFormat {
  #[default]
  Kebab,
  Camel,
  Pascal,
  Json,
}

impl IconFormat {
  pub const ALL: [IconFormat; 4] = [
    IconFormat::Kebab,
    IconFormat::Camel,
    IconFormat::Pascal,
    IconFormat::Json,
  ];

  pub fn label(&self) -> &'static str {
    match self {
      IconFormat::Kebab => "kebab-case",
      IconFormat::Camel => "camelCase",
      IconFormat::Pascal => "PascalCase",
      IconFormat::Json => "JSON",
    }
  }

  /// Example of the persisted shape, shown next to the option label.
  pub fn example(&self) -> &'static str {
    match self {
      IconFormat::Kebab => r#""credit-card""#,
      IconFormat::Camel => r#""creditCard""#,
      IconFormat::Pascal => r#""CreditCard""#,
      IconFormat::Json => r#"{ "name": "credit-card" }"#,
    }
  }
}

/// Encode a canonical identifier into the persisted field value.
pub fn encode(name: &str, format: IconFormat) -> Value {
  match format {
    IconFormat::Kebab => Value::String(name.to_owned()),
    IconFormat::Camel => Value::String(camel_case(name)),
    IconFormat::Pascal => Value::String(pascal_case(name)),
    IconFormat::Json => serde_json::json!({ "name": name }),
  }
}

/// Extract the stored identifier from any persisted shape.
///
/// Strings come back verbatim (display uses the stored string as-is, no case
/// normalization on read); a record with a string `name` yields that name.
/// Everything else, including empty strings, is "no selection".
pub fn decode(value: &Value) -> Option<&str> {
  match value {
    Value::String(name) if !name.is_empty() => Some(name),
    Value::Object(map) => match map.get("name") {
      Some(Value::String(name)) if !name.is_empty() => Some(name),
      _ => None,
    },
    _ => None,
  }
}

fn camel_case(kebab: &str) -> String {
  let mut out = String::with_capacity(kebab.len());
  for (i, segment) in kebab.split('-').enumerate() {
    if i == 0 {
      out.push_str(segment);
    } else {
      push_capitalized(&mut out, segment);
    }
  }
  out
}

fn pascal_case(kebab: &str) -> String {
  let mut out = String::with_capacity(kebab.len());
  for segment in kebab.split('-') {
    push_capitalized(&mut out, segment);
  }
  out
}

fn push_capitalized(out: &mut String, segment: &str) {
  let mut chars = segment.chars();
  if let Some(first) = chars.next() {
    out.extend(first.to_uppercase());
    out.push_str(chars.as_str());
  }
}

#[cfg(test)]
mod tests {
  use quickcheck::quickcheck;
  use serde_json::json;

  use super::*;

  #[test]
  fn kebab_passes_through() {
    assert_eq!(encode("credit-card", IconFormat::Kebab), json!("credit-card"));
  }

  #[test]
  fn camel_joins_segments() {
    assert_eq!(encode("credit-card", IconFormat::Camel), json!("creditCard"));
    assert_eq!(
      encode("a-arrow-down", IconFormat::Camel),
      json!("aArrowDown")
    );
    assert_eq!(encode("smile", IconFormat::Camel), json!("smile"));
  }

  #[test]
  fn pascal_capitalizes_every_segment() {
    assert_eq!(
      encode("credit-card", IconFormat::Pascal),
      json!("CreditCard")
    );
    assert_eq!(encode("smile", IconFormat::Pascal), json!("Smile"));
  }

  #[test]
  fn json_wraps_the_canonical_name() {
    assert_eq!(
      encode("credit-card", IconFormat::Json),
      json!({ "name": "credit-card" })
    );
  }

  #[test]
  fn decode_roundtrips_kebab_and_json() {
    for format in [IconFormat::Kebab, IconFormat::Json] {
      let value = encode("credit-card", format);
      assert_eq!(decode(&value), Some("credit-card"));
    }
  }

  #[test]
  fn decode_is_identity_on_transformed_strings() {
    // Camel/pascal are not reversed on read; the stored string comes back
    // verbatim.
    let camel = encode("credit-card", IconFormat::Camel);
    assert_eq!(decode(&camel), Some("creditCard"));

    let pascal = encode("credit-card", IconFormat::Pascal);
    assert_eq!(decode(&pascal), Some("CreditCard"));
  }

  #[test]
  fn unrecognized_shapes_decode_to_none() {
    assert_eq!(decode(&Value::Null), None);
    assert_eq!(decode(&json!("")), None);
    assert_eq!(decode(&json!(42)), None);
    assert_eq!(decode(&json!(["credit-card"])), None);
    assert_eq!(decode(&json!({ "name": 42 })), None);
    assert_eq!(decode(&json!({ "name": "" })), None);
    assert_eq!(decode(&json!({ "icon": "smile" })), None);
  }

  #[test]
  fn format_serde_names_are_lowercase() {
    assert_eq!(serde_json::to_string(&IconFormat::Kebab).unwrap(), "\"kebab\"");
    assert_eq!(
      serde_json::from_str::<IconFormat>("\"pascal\"").unwrap(),
      IconFormat::Pascal
    );
  }

  quickcheck! {
    fn kebab_and_json_always_roundtrip(segments: Vec<u8>) -> bool {
      // Build a plausible kebab identifier from the generated segments.
      let name = if segments.is_empty() {
        "icon".to_owned()
      } else {
        segments
          .iter()
          .map(|b| format!("s{b}"))
          .collect::<Vec<_>>()
          .join("-")
      };

      [IconFormat::Kebab, IconFormat::Json].iter().all(|format| {
        decode(&encode(&name, *format)) == Some(name.as_str())
      })
    }
  }
}
