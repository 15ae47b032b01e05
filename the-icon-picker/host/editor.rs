//! Bridge to the rich-text editor's document model.
//!
//! The picker never manipulates the document tree itself; it asks the host
//! editor for its selection, hands the selection back after the overlay
//! closes, and submits exactly one inline void node per committed pick. The
//! concrete document binding lives in the embedding application.

use std::sync::atomic::{
  AtomicU64,
  Ordering,
};

use serde::Serialize;
use serde_json::Value;

/// Element type tag carried by every inserted node.
pub const ELEMENT_TYPE: &str = "lucide-icon";

/// Attribute holding the icon identifier.
pub const ICON_ATTR: &str = "icon-name";

/// A snapshot of the editor's cursor/selection, captured before the overlay
/// steals focus and handed back verbatim on commit. Char-indexed, anchor to
/// head, the way the editor reports it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SavedSelection {
  pub anchor: usize,
  pub head:   usize,
}

impl SavedSelection {
  pub fn point(at: usize) -> Self {
    Self {
      anchor: at,
      head:   at,
    }
  }
}

/// The required single child of a void inline node: one empty text leaf.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TextChild {
  pub text: String,
}

/// The inline void node inserted into the document.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IconNode {
  pub uid:       String,
  #[serde(rename = "type")]
  pub node_type: String,
  pub attrs:     serde_json::Map<String, Value>,
  pub children:  Vec<TextChild>,
}

impl IconNode {
  /// A node for `icon_name`, with a fresh uid and the mandatory single
  /// empty text child.
  pub fn new(icon_name: &str) -> Self {
    let mut attrs = serde_json::Map::new();
    attrs.insert(ICON_ATTR.to_owned(), Value::String(icon_name.to_owned()));
    Self {
      uid: next_uid(),
      node_type: ELEMENT_TYPE.to_owned(),
      attrs,
      children: vec![TextChild {
        text: String::new(),
      }],
    }
  }

  /// The stored identifier, unless the attribute is absent or falsy.
  pub fn icon_name(&self) -> Option<&str> {
    self
      .attrs
      .get(ICON_ATTR)
      .and_then(Value::as_str)
      .filter(|name| !name.is_empty())
  }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InsertOptions {
  /// Move the caret onto the inserted node.
  pub select: bool,
}

/// Capability surface over the host editor.
pub trait EditorBridge: Send {
  /// The current selection, if the editor has one.
  fn selection(&self) -> Option<SavedSelection>;

  fn set_selection(&mut self, range: SavedSelection);

  /// Insert one inline void node at the current selection. The host may
  /// reject the node shape; the error is terminal for this invocation.
  fn insert_inline_void_node(&mut self, node: IconNode, options: InsertOptions)
  -> anyhow::Result<()>;
}

/// Nine lowercase base-36 characters, unique within the process. Durable
/// identity is assigned by the host when the document is persisted.
fn next_uid() -> String {
  const DIGITS: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";
  static COUNTER: AtomicU64 = AtomicU64::new(1);

  let mut n = COUNTER.fetch_add(1, Ordering::Relaxed);
  let mut out = [b'0'; 9];
  for slot in out.iter_mut().rev() {
    *slot = DIGITS[(n % 36) as usize];
    n /= 36;
  }
  out.iter().map(|&b| b as char).collect()
}

#[cfg(test)]
mod tests {
  use serde_json::json;

  use super::*;

  #[test]
  fn node_has_the_required_shape() {
    let node = IconNode::new("smile");
    assert_eq!(node.node_type, ELEMENT_TYPE);
    assert_eq!(node.icon_name(), Some("smile"));
    assert_eq!(node.children.len(), 1);
    assert_eq!(node.children[0].text, "");
  }

  #[test]
  fn node_serializes_to_the_host_wire_shape() {
    let node = IconNode::new("credit-card");
    let wire = serde_json::to_value(&node).unwrap();

    assert_eq!(wire["type"], json!("lucide-icon"));
    assert_eq!(wire["attrs"], json!({ "icon-name": "credit-card" }));
    assert_eq!(wire["children"], json!([{ "text": "" }]));
    assert_eq!(wire["uid"].as_str().unwrap().len(), 9);
  }

  #[test]
  fn uids_are_unique_and_base36() {
    let a = IconNode::new("smile").uid;
    let b = IconNode::new("smile").uid;
    assert_ne!(a, b);
    for uid in [&a, &b] {
      assert_eq!(uid.len(), 9);
      assert!(
        uid
          .chars()
          .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit())
      );
    }
  }

  #[test]
  fn missing_or_empty_attr_reads_as_none() {
    let mut node = IconNode::new("smile");
    node.attrs.clear();
    assert_eq!(node.icon_name(), None);

    node
      .attrs
      .insert(ICON_ATTR.to_owned(), Value::String(String::new()));
    assert_eq!(node.icon_name(), None);
  }
}
