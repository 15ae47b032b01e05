//! The selection grid: search box, one page of icons, pager.
//!
//! The grid owns the query/page state and reports a chosen identifier; it
//! never writes anything itself. Embedding components (field panel,
//! insertion overlay) poll `take_choice` after delegating events and decide
//! what a pick means in their context.

use std::sync::Arc;

use crate::{
  core::{
    catalog::Catalog,
    search::PagedSearch,
  },
  ui::{
    GRID_ICON_SIZE,
    UI_FONT_SIZE,
    components::button::Button,
    compositor::{
      Component,
      Context,
      Event,
      EventResult,
    },
    input::{
      Key,
      MouseButton,
      MouseEvent,
    },
    palette,
    surface::{
      Rect,
      Surface,
      text_width,
      truncate_to_width,
    },
  },
};

const SEARCH_PLACEHOLDER: &str = "Search icons...";
const SEARCH_HEIGHT: f32 = 32.0;
const CELL_MIN_WIDTH: f32 = 90.0;
const CELL_HEIGHT: f32 = 56.0;
const CELL_GAP: f32 = 4.0;
const LABEL_SIZE: f32 = 10.0;
const PAGER_HEIGHT: f32 = 28.0;
const PAGER_BUTTON_WIDTH: f32 = 80.0;

/// Presentation variant. `Overlay` renders borderless inside the insertion
/// overlay's panel; `Panel` draws its own background. Selection semantics
/// are identical in both.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridMode {
  Panel,
  Overlay,
}

pub struct IconGrid {
  catalog:     Arc<Catalog>,
  search:      PagedSearch,
  mode:        GridMode,
  /// Highlighted as the current selection, if any.
  selected:    Option<String>,
  /// Keyboard cursor, as an index into the current page.
  cursor:      usize,
  /// A pick waiting for the embedding component to take it.
  chosen:      Option<String>,
  prev_button: Button,
  next_button: Button,
  /// Cached layout info for mouse hit testing.
  layout:      Option<GridLayout>,
}

#[derive(Clone)]
struct GridLayout {
  area:    Rect,
  cells:   Vec<Rect>,
  columns: usize,
}

impl IconGrid {
  pub fn new(catalog: Arc<Catalog>, mode: GridMode) -> Self {
    Self {
      catalog,
      search: PagedSearch::new(),
      mode,
      selected: None,
      cursor: 0,
      chosen: None,
      prev_button: Button::new("Previous"),
      next_button: Button::new("Next"),
      layout: None,
    }
  }

  pub fn query(&self) -> &str {
    self.search.query()
  }

  pub fn set_selected(&mut self, selected: Option<String>) {
    self.selected = selected;
  }

  pub fn selected(&self) -> Option<&str> {
    self.selected.as_deref()
  }

  /// The identifier picked since the last call, if any.
  pub fn take_choice(&mut self) -> Option<String> {
    self.chosen.take()
  }

  fn page_item(&mut self, index: usize) -> Option<String> {
    let view = self.search.view(&self.catalog);
    view.items.get(index).map(|name| (*name).to_owned())
  }

  fn choose(&mut self, index: usize) {
    if let Some(name) = self.page_item(index) {
      self.chosen = Some(name);
    }
  }

  fn page_len(&mut self) -> usize {
    self.search.view(&self.catalog).items.len()
  }

  fn columns(&self) -> usize {
    self
      .layout
      .as_ref()
      .map(|layout| layout.columns)
      .unwrap_or(1)
  }

  fn move_cursor(&mut self, delta: isize) {
    let len = self.page_len();
    if len == 0 {
      self.cursor = 0;
      return;
    }
    let cursor = self.cursor as isize + delta;
    self.cursor = cursor.clamp(0, len as isize - 1) as usize;
  }

  fn handle_key(&mut self, key: &crate::ui::input::KeyPress) -> EventResult {
    if !key.pressed {
      return EventResult::Ignored(None);
    }
    match key.code {
      Key::Char(c) if !key.ctrl && !key.alt => {
        self.search.push_char(c);
        self.cursor = 0;
        EventResult::Consumed(None)
      },
      Key::Backspace => {
        self.search.pop_char();
        self.cursor = 0;
        EventResult::Consumed(None)
      },
      Key::Left => {
        self.move_cursor(-1);
        EventResult::Consumed(None)
      },
      Key::Right => {
        self.move_cursor(1);
        EventResult::Consumed(None)
      },
      Key::Up => {
        self.move_cursor(-(self.columns() as isize));
        EventResult::Consumed(None)
      },
      Key::Down => {
        self.move_cursor(self.columns() as isize);
        EventResult::Consumed(None)
      },
      Key::PageUp => {
        self.search.prev_page();
        self.cursor = 0;
        EventResult::Consumed(None)
      },
      Key::PageDown => {
        self.search.next_page();
        self.cursor = 0;
        EventResult::Consumed(None)
      },
      Key::Enter => {
        let cursor = self.cursor;
        self.choose(cursor);
        EventResult::Consumed(None)
      },
      _ => EventResult::Ignored(None),
    }
  }

  fn handle_mouse(&mut self, mouse: &MouseEvent) -> EventResult {
    if self.prev_button.handle_mouse(mouse) {
      self.search.prev_page();
      self.cursor = 0;
      return EventResult::Consumed(None);
    }
    if self.next_button.handle_mouse(mouse) {
      self.search.next_page();
      self.cursor = 0;
      return EventResult::Consumed(None);
    }

    let Some(layout) = self.layout.clone() else {
      return EventResult::Ignored(None);
    };
    let (mx, my) = mouse.position;

    if mouse.button == Some(MouseButton::Left) && mouse.pressed {
      for (index, cell) in layout.cells.iter().enumerate() {
        if cell.contains(mx, my) {
          self.cursor = index;
          self.choose(index);
          return EventResult::Consumed(None);
        }
      }
      // Clicks on the grid chrome (search box, padding) stay ours so they
      // don't read as backdrop clicks in the overlay.
      if layout.area.contains(mx, my) {
        return EventResult::Consumed(None);
      }
    }
    EventResult::Ignored(None)
  }

  fn render_search_box(&self, rect: Rect, surface: &mut Surface) {
    surface.draw_rect_stroke(rect, 1.0, palette::OUTLINE);
    let text_y = rect.y + (rect.height - UI_FONT_SIZE) / 2.0;
    if self.search.query().is_empty() {
      surface.draw_text(
        rect.x + 8.0,
        text_y,
        SEARCH_PLACEHOLDER,
        UI_FONT_SIZE,
        palette::TEXT_DIM,
      );
    } else {
      surface.draw_text(
        rect.x + 8.0,
        text_y,
        self.search.query().to_owned(),
        UI_FONT_SIZE,
        palette::TEXT,
      );
    }
  }

  fn render_cell(&self, rect: Rect, name: &str, at_cursor: bool, surface: &mut Surface) {
    let is_selected = self.selected.as_deref() == Some(name);
    if is_selected {
      surface.draw_rect(rect, palette::ACCENT_BG);
      surface.draw_rect_stroke(rect, 1.0, palette::ACCENT);
    } else if at_cursor {
      surface.draw_rect_stroke(rect, 1.0, palette::ACCENT.with_alpha(0.6));
    }

    surface.draw_icon(
      name,
      rect.center_x() - GRID_ICON_SIZE / 2.0,
      rect.y + 8.0,
      GRID_ICON_SIZE,
      palette::TEXT,
    );

    let label = truncate_to_width(name, rect.width - 8.0, LABEL_SIZE);
    let label_x = rect.center_x() - text_width(&label, LABEL_SIZE) / 2.0;
    surface.draw_text(
      label_x,
      rect.y + 8.0 + GRID_ICON_SIZE + 6.0,
      label,
      LABEL_SIZE,
      palette::TEXT_DIM,
    );
  }
}

impl Component for IconGrid {
  fn handle_event(&mut self, event: &Event, _cx: &mut Context) -> EventResult {
    match event {
      Event::Key(key) => self.handle_key(key),
      Event::Mouse(mouse) => self.handle_mouse(mouse),
    }
  }

  fn render(&mut self, area: Rect, surface: &mut Surface, _cx: &mut Context) {
    let catalog = Arc::clone(&self.catalog);
    let view = self.search.view(&catalog);
    self.cursor = self.cursor.min(view.items.len().saturating_sub(1));

    if self.mode == GridMode::Panel {
      surface.draw_rect(area, palette::PANEL_BG);
    }

    let padding = 16.0;
    let inner_x = area.x + padding;
    let inner_width = (area.width - padding * 2.0).max(CELL_MIN_WIDTH);

    // Search box
    let search_box = Rect::new(inner_x, area.y + padding, inner_width, SEARCH_HEIGHT);
    self.render_search_box(search_box, surface);

    // Cells, CSS-grid style: as many fixed-minimum columns as fit.
    let columns = (((inner_width + CELL_GAP) / (CELL_MIN_WIDTH + CELL_GAP)) as usize).max(1);
    let cell_width = (inner_width - CELL_GAP * (columns as f32 - 1.0)) / columns as f32;
    let cells_y = search_box.y + search_box.height + 12.0;

    let mut cells = Vec::with_capacity(view.items.len());
    for (index, name) in view.items.iter().enumerate() {
      let row = index / columns;
      let col = index % columns;
      let rect = Rect::new(
        inner_x + col as f32 * (cell_width + CELL_GAP),
        cells_y + row as f32 * (CELL_HEIGHT + CELL_GAP),
        cell_width,
        CELL_HEIGHT,
      );
      self.render_cell(rect, name, index == self.cursor, surface);
      cells.push(rect);
    }

    // Pager row: the count line always, Previous/Next only when there is
    // more than one page to move between.
    let rows = view.items.len().div_ceil(columns);
    let pager_y = cells_y + rows as f32 * (CELL_HEIGHT + CELL_GAP) + 8.0;
    let count_line = view.count_line();
    let count_x = area.center_x() - text_width(&count_line, UI_FONT_SIZE) / 2.0;
    surface.draw_text(
      count_x,
      pager_y + (PAGER_HEIGHT - UI_FONT_SIZE) / 2.0,
      count_line,
      UI_FONT_SIZE,
      palette::TEXT_DIM,
    );

    if view.total_pages > 1 {
      self.prev_button.set_enabled(view.page > 0);
      self.next_button.set_enabled(view.page + 1 < view.total_pages);

      let prev_rect = Rect::new(inner_x, pager_y, PAGER_BUTTON_WIDTH, PAGER_HEIGHT);
      let next_rect = Rect::new(
        inner_x + inner_width - PAGER_BUTTON_WIDTH,
        pager_y,
        PAGER_BUTTON_WIDTH,
        PAGER_HEIGHT,
      );
      self.prev_button.render(prev_rect, surface);
      self.next_button.render(next_rect, surface);
    }

    self.layout = Some(GridLayout {
      area,
      cells,
      columns,
    });
  }

  fn required_size(&mut self, viewport: (f32, f32)) -> Option<(f32, f32)> {
    let padding = 16.0;
    let inner_width = (viewport.0 - padding * 2.0).max(CELL_MIN_WIDTH);
    let columns = (((inner_width + CELL_GAP) / (CELL_MIN_WIDTH + CELL_GAP)) as usize).max(1);
    let rows = self.page_len().div_ceil(columns);
    let height = padding
      + SEARCH_HEIGHT
      + 12.0
      + rows as f32 * (CELL_HEIGHT + CELL_GAP)
      + 8.0
      + PAGER_HEIGHT
      + padding;
    Some((viewport.0, height))
  }

  fn as_any_mut(&mut self) -> &mut dyn std::any::Any {
    self
  }
}
