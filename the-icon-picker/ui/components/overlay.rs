//! The editor-triggered insertion overlay.
//!
//! One invocation, one lifecycle: the exec handler snapshots the editor
//! selection before anything can steal focus, mounts this layer (dimmed
//! backdrop + centered panel hosting the grid in overlay mode), and the
//! layer removes itself on either outcome. Commit tears the overlay down
//! first, then restores the saved selection and inserts the node, so the
//! document edit happens with the editor back in its pre-overlay state.
//! Cancel tears down and touches nothing.

use std::sync::Arc;

use crate::{
  core::catalog::Catalog,
  host::editor::{
    IconNode,
    InsertOptions,
    SavedSelection,
  },
  ui::{
    components::grid::{
      GridMode,
      IconGrid,
    },
    compositor::{
      Callback,
      Component,
      Context,
      Event,
      EventResult,
    },
    input::{
      Key,
      MouseButton,
    },
    palette,
    surface::{
      Rect,
      Surface,
    },
  },
};

const PANEL_MAX_WIDTH: f32 = 700.0;
const PANEL_HEIGHT_RATIO: f32 = 0.8;

pub struct InsertOverlay {
  grid:            IconGrid,
  saved_selection: Option<SavedSelection>,
  /// Panel rect from the last render, for backdrop hit testing.
  panel_rect:      Option<Rect>,
}

impl InsertOverlay {
  pub const ID: &'static str = "icon-insert-overlay";

  /// Fresh overlay: empty query, first page, nothing preselected.
  pub fn new(saved_selection: Option<SavedSelection>, catalog: Arc<Catalog>) -> Self {
    Self {
      grid: IconGrid::new(catalog, GridMode::Overlay),
      saved_selection,
      panel_rect: None,
    }
  }

  fn cancel_callback() -> Callback {
    Box::new(|compositor, _cx| {
      compositor.remove(Self::ID);
    })
  }

  fn commit_callback(&mut self, name: String) -> Callback {
    let saved = self.saved_selection.take();
    Box::new(move |compositor, cx| {
      // Teardown first: the editor must have focus back before the
      // selection is restored and the node lands.
      compositor.remove(Self::ID);

      let Some(editor) = cx.session.editor.as_mut() else {
        log::error!("icon insertion without an editor bridge");
        return;
      };
      if let Some(range) = saved {
        editor.set_selection(range);
      }
      let node = IconNode::new(&name);
      if let Err(err) = editor.insert_inline_void_node(node, InsertOptions { select: true }) {
        // Terminal for this invocation; the user re-invokes if they still
        // want the node.
        log::error!("icon insertion failed: {err:#}");
      }
    })
  }
}

impl Component for InsertOverlay {
  fn handle_event(&mut self, event: &Event, cx: &mut Context) -> EventResult {
    if let Event::Key(key) = event
      && key.pressed
      && key.code == Key::Escape
    {
      return EventResult::Consumed(Some(Self::cancel_callback()));
    }

    let result = self.grid.handle_event(event, cx);
    if let Some(name) = self.grid.take_choice() {
      return EventResult::Consumed(Some(self.commit_callback(name)));
    }
    if let EventResult::Consumed(callback) = result {
      return EventResult::Consumed(callback);
    }

    if let Event::Mouse(mouse) = event
      && mouse.pressed
      && mouse.button == Some(MouseButton::Left)
      && let Some(panel) = self.panel_rect
      && !panel.contains(mouse.position.0, mouse.position.1)
    {
      return EventResult::Consumed(Some(Self::cancel_callback()));
    }

    // A modal layer: nothing falls through to the editor underneath.
    EventResult::Consumed(None)
  }

  fn render(&mut self, area: Rect, surface: &mut Surface, cx: &mut Context) {
    surface.draw_rect(area, palette::BACKDROP);

    let width = PANEL_MAX_WIDTH.min(area.width * 0.9);
    let height = area.height * PANEL_HEIGHT_RATIO;
    let panel = Rect::new(
      area.x + (area.width - width) / 2.0,
      area.y + (area.height - height) / 2.0,
      width,
      height,
    );
    surface.draw_rect(panel, palette::PANEL_BG);
    self.panel_rect = Some(panel);

    self.grid.render(panel, surface, cx);
  }

  fn id(&self) -> Option<&'static str> {
    Some(Self::ID)
  }

  fn as_any_mut(&mut self) -> &mut dyn std::any::Any {
    self
  }
}
