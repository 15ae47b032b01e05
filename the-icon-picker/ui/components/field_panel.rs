//! The custom-field surface: selected icon summary plus the grid.
//!
//! Collapsed, it shows a compact row (icon, name, Change, Clear) when a
//! selection exists; expanded, it shows the selected row above the grid.
//! Every host write goes through a job, and the triggering controls are
//! disabled until the write resolves — a second activation while a write is
//! outstanding is dropped, not queued.

use crate::{
  host::bridge::HostError,
  ui::{
    FIELD_ICON_SIZE,
    UI_FONT_SIZE,
    components::{
      button::Button,
      grid::{
        GridMode,
        IconGrid,
      },
    },
    compositor::{
      Callback,
      Component,
      Compositor,
      Context,
      Event,
      EventResult,
    },
    palette,
    surface::{
      Rect,
      Surface,
    },
  },
};

const TOPBAR_HEIGHT: f32 = 48.0;
const BUTTON_WIDTH: f32 = 72.0;
const BUTTON_HEIGHT: f32 = 26.0;

/// What a pending host write will do once it lands.
enum WriteAction {
  Select(String),
  Clear,
}

pub struct FieldPanel {
  grid:          IconGrid,
  /// Canonical identifier currently persisted, as far as we know.
  selected:      Option<String>,
  expanded:      bool,
  write_pending: bool,
  change_button: Button,
  clear_button:  Button,
}

impl FieldPanel {
  pub const ID: &'static str = "icon-field";

  /// Mount the panel: requests auto-resize once and kicks off the initial
  /// field read. The panel shows the grid until the read lands.
  pub fn open(cx: &mut Context) -> Self {
    cx.session.bridge().enable_auto_resize();

    let field = cx.session.field.clone();
    cx.jobs.spawn(async move {
      let selected = field.read_selection().await;
      Box::new(move |compositor: &mut Compositor, _cx: &mut Context| {
        if let Some(panel) = compositor.find_mut::<FieldPanel>(FieldPanel::ID) {
          panel.finish_load(selected);
        }
      }) as Callback
    });

    Self {
      grid:          IconGrid::new(cx.session.catalog.clone(), GridMode::Panel),
      selected:      None,
      expanded:      true,
      write_pending: false,
      change_button: Button::new("Change"),
      clear_button:  Button::new("Clear"),
    }
  }

  fn finish_load(&mut self, selected: Option<String>) {
    // Collapse when an icon is already selected on load.
    self.expanded = selected.is_none();
    self.grid.set_selected(selected.clone());
    self.selected = selected;
  }

  fn spawn_write(&mut self, cx: &mut Context, action: WriteAction) {
    self.write_pending = true;
    let field = cx.session.field.clone();
    let format = cx.session.icon_format();

    cx.jobs.spawn(async move {
      let result = match &action {
        WriteAction::Select(name) => field.write_selection(name, format).await,
        WriteAction::Clear => field.clear().await,
      };
      Box::new(move |compositor: &mut Compositor, _cx: &mut Context| {
        if let Some(panel) = compositor.find_mut::<FieldPanel>(FieldPanel::ID) {
          panel.finish_write(action, result);
        }
      }) as Callback
    });
  }

  fn finish_write(&mut self, action: WriteAction, result: Result<(), HostError>) {
    self.write_pending = false;
    match result {
      Ok(()) => match action {
        WriteAction::Select(name) => {
          self.grid.set_selected(Some(name.clone()));
          self.selected = Some(name);
          self.expanded = false;
        },
        WriteAction::Clear => {
          self.grid.set_selected(None);
          self.selected = None;
          self.expanded = true;
        },
      },
      // The prior value stays displayed; no retry.
      Err(err) => log::warn!("field write failed: {err}"),
    }
  }

  fn render_selected_row(&mut self, area: Rect, surface: &mut Surface) {
    let row_y = area.y + 12.0;
    match self.selected.as_deref() {
      Some(name) => {
        surface.draw_icon(name, area.x + 12.0, row_y, FIELD_ICON_SIZE, palette::TEXT);
        surface.draw_text(
          area.x + 12.0 + FIELD_ICON_SIZE + 8.0,
          row_y + (FIELD_ICON_SIZE - UI_FONT_SIZE) / 2.0,
          name.to_owned(),
          UI_FONT_SIZE,
          palette::TEXT,
        );

        let button_y = row_y + (FIELD_ICON_SIZE - BUTTON_HEIGHT) / 2.0;
        let clear_x = area.x + area.width - 12.0 - BUTTON_WIDTH;
        self.clear_button.set_enabled(!self.write_pending);
        self
          .clear_button
          .render(Rect::new(clear_x, button_y, BUTTON_WIDTH, BUTTON_HEIGHT), surface);

        if !self.expanded {
          let change_x = clear_x - 8.0 - BUTTON_WIDTH;
          self.change_button.set_enabled(!self.write_pending);
          self.change_button.render(
            Rect::new(change_x, button_y, BUTTON_WIDTH, BUTTON_HEIGHT),
            surface,
          );
        }
      },
      None => {
        surface.draw_text(
          area.x + 12.0,
          row_y + (FIELD_ICON_SIZE - UI_FONT_SIZE) / 2.0,
          "No icon selected",
          UI_FONT_SIZE,
          palette::TEXT_DIM,
        );
      },
    }
  }
}

impl Component for FieldPanel {
  fn handle_event(&mut self, event: &Event, cx: &mut Context) -> EventResult {
    if let Event::Mouse(mouse) = event {
      if self.selected.is_some() && self.clear_button.handle_mouse(mouse) {
        if !self.write_pending {
          self.spawn_write(cx, WriteAction::Clear);
        }
        return EventResult::Consumed(None);
      }
      if !self.expanded && self.change_button.handle_mouse(mouse) {
        self.expanded = true;
        return EventResult::Consumed(None);
      }
    }

    if !self.expanded {
      return EventResult::Ignored(None);
    }

    let result = self.grid.handle_event(event, cx);
    if let Some(name) = self.grid.take_choice() {
      // Guard against a second pick racing the outstanding write.
      if !self.write_pending {
        self.spawn_write(cx, WriteAction::Select(name));
      }
      return EventResult::Consumed(None);
    }
    result
  }

  fn render(&mut self, area: Rect, surface: &mut Surface, cx: &mut Context) {
    surface.draw_rect(area, palette::PANEL_BG);
    self.render_selected_row(area, surface);

    if self.expanded {
      let grid_area = Rect::new(
        area.x,
        area.y + TOPBAR_HEIGHT,
        area.width,
        (area.height - TOPBAR_HEIGHT).max(0.0),
      );
      self.grid.render(grid_area, surface, cx);
    }
  }

  fn required_size(&mut self, viewport: (f32, f32)) -> Option<(f32, f32)> {
    if self.expanded {
      let (width, grid_height) = self.grid.required_size(viewport)?;
      Some((width, TOPBAR_HEIGHT + grid_height))
    } else {
      Some((viewport.0, TOPBAR_HEIGHT))
    }
  }

  fn id(&self) -> Option<&'static str> {
    Some(Self::ID)
  }

  fn as_any_mut(&mut self) -> &mut dyn std::any::Any {
    self
  }
}
