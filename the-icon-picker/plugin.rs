//! Rich-text-editor plugin surface.
//!
//! What the host editor needs to know about us: the toolbar entry, the
//! element type we own, the exec entry point that opens the insertion
//! overlay, and how to render the inserted node.

use std::sync::Arc;

use crate::{
  core::catalog::Catalog,
  host::editor::{
    ELEMENT_TYPE,
    IconNode,
  },
  ui::{
    INLINE_ICON_SIZE,
    TOOLBAR_ICON_SIZE,
    components::overlay::InsertOverlay,
    compositor::{
      Compositor,
      Context,
    },
    palette,
    surface::Surface,
  },
};

/// Registration descriptor handed to the host editor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PluginSpec {
  element_type:  &'static str,
  title:         String,
  toolbar_glyph: Option<&'static str>,
  inline:        bool,
  void:          bool,
}

impl PluginSpec {
  pub fn new(element_type: &'static str) -> Self {
    Self {
      element_type,
      title: String::new(),
      toolbar_glyph: None,
      inline: false,
      void: false,
    }
  }

  // --- Builder API -------------------------------------------------------

  pub fn title(mut self, title: impl Into<String>) -> Self {
    self.title = title.into();
    self
  }

  /// Show the plugin in the editor toolbar, with the given catalog glyph as
  /// its button.
  pub fn toolbar(mut self, glyph: &'static str) -> Self {
    self.toolbar_glyph = Some(glyph);
    self
  }

  /// Register the element as inline and void: it flows with text, is not
  /// editable, and carries exactly one empty text child.
  pub fn inline_void(mut self) -> Self {
    self.inline = true;
    self.void = true;
    self
  }

  // --- Accessors ---------------------------------------------------------

  pub fn element_type(&self) -> &'static str {
    self.element_type
  }

  pub fn display_title(&self) -> &str {
    &self.title
  }

  pub fn in_toolbar(&self) -> bool {
    self.toolbar_glyph.is_some()
  }

  /// The toolbar button glyph and its pixel size.
  pub fn toolbar_glyph(&self) -> Option<(&'static str, f32)> {
    self.toolbar_glyph.map(|glyph| (glyph, TOOLBAR_ICON_SIZE))
  }

  pub fn is_inline(&self) -> bool {
    self.inline
  }

  pub fn is_void(&self) -> bool {
    self.void
  }
}

/// The icon plugin's registration.
pub fn plugin() -> PluginSpec {
  PluginSpec::new(ELEMENT_TYPE)
    .title("Insert Icon")
    .toolbar("smile")
    .inline_void()
}

/// Exec entry point, wired to the host editor's toolbar event.
///
/// Captures the selection synchronously — before the overlay can steal
/// focus — and mounts the insertion overlay. At most one overlay is up at a
/// time; re-invocation while it is open is a no-op.
pub fn exec(compositor: &mut Compositor, cx: &mut Context) {
  if compositor.has(InsertOverlay::ID) {
    return;
  }
  let Some(editor) = cx.session.editor.as_ref() else {
    log::debug!("icon exec outside the rich-text context");
    return;
  };
  let saved = editor.selection();
  let overlay = InsertOverlay::new(saved, Arc::clone(&cx.session.catalog));
  compositor.push(Box::new(overlay));
}

/// Render contract for the inserted node: the glyph at its inline size,
/// non-editable, drawn through the icon-rendering capability. Returns the
/// horizontal advance. A missing or falsy attribute renders as an empty
/// placeholder rather than failing; an identifier outside the catalog is
/// treated the same way.
pub fn render_inline_node(
  node: &IconNode,
  catalog: &Catalog,
  surface: &mut Surface,
  x: f32,
  y: f32,
) -> f32 {
  let Some(name) = node.icon_name() else {
    return 0.0;
  };
  if !catalog.contains(name) {
    log::debug!("not rendering unknown icon identifier: {name}");
    return 0.0;
  }
  surface.draw_icon(name, x, y, INLINE_ICON_SIZE, palette::TEXT);
  INLINE_ICON_SIZE
}
