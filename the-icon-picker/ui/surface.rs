//! Draw-command recording surface.
//!
//! Components don't rasterize anything. They append `RenderCommand`s to a
//! `Surface` and the embedding renderer executes the batch; in particular
//! `Icon` commands are resolved by the external icon-rendering capability.
//! Recording keeps every component's output inspectable in tests.

use unicode_width::UnicodeWidthChar;

// Monospace fonts typically have a width-to-height ratio of ~0.6
const FONT_WIDTH_RATIO: f32 = 0.6;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
  pub r: f32,
  pub g: f32,
  pub b: f32,
  pub a: f32,
}

impl Color {
  pub const BLACK: Color = Color::new(0.0, 0.0, 0.0, 1.0);
  pub const WHITE: Color = Color::new(1.0, 1.0, 1.0, 1.0);

  pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
    Self { r, g, b, a }
  }

  pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
    Self { r, g, b, a: 1.0 }
  }

  pub fn with_alpha(mut self, a: f32) -> Self {
    self.a = a;
    self
  }
}

/// A rectangle in surface pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
  pub x:      f32,
  pub y:      f32,
  pub width:  f32,
  pub height: f32,
}

impl Rect {
  pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
    Self {
      x,
      y,
      width,
      height,
    }
  }

  pub fn contains(&self, px: f32, py: f32) -> bool {
    px >= self.x && px <= self.x + self.width && py >= self.y && py <= self.y + self.height
  }

  pub fn center_x(&self) -> f32 {
    self.x + self.width / 2.0
  }
}

/// A render command that the embedding renderer executes.
#[derive(Debug, Clone, PartialEq)]
pub enum RenderCommand {
  /// Filled rectangle
  Rect {
    x:      f32,
    y:      f32,
    width:  f32,
    height: f32,
    color:  Color,
  },
  /// Rectangle outline
  RectStroke {
    x:          f32,
    y:          f32,
    width:      f32,
    height:     f32,
    line_width: f32,
    color:      Color,
  },
  /// Text run at a fixed size
  Text {
    x:       f32,
    y:       f32,
    content: String,
    size:    f32,
    color:   Color,
  },
  /// Glyph drawn by the external icon-rendering capability. `name` is
  /// always a validated catalog identifier.
  Icon {
    name:  String,
    x:     f32,
    y:     f32,
    size:  f32,
    color: Color,
  },
}

/// Recording surface handed to components during render.
pub struct Surface {
  width:    f32,
  height:   f32,
  commands: Vec<RenderCommand>,
}

impl Surface {
  pub fn new(width: f32, height: f32) -> Self {
    Self {
      width,
      height,
      commands: Vec::new(),
    }
  }

  pub fn width(&self) -> f32 {
    self.width
  }

  pub fn height(&self) -> f32 {
    self.height
  }

  pub fn resize(&mut self, width: f32, height: f32) {
    self.width = width;
    self.height = height;
  }

  pub fn clear(&mut self) {
    self.commands.clear();
  }

  pub fn draw_rect(&mut self, rect: Rect, color: Color) {
    self.commands.push(RenderCommand::Rect {
      x: rect.x,
      y: rect.y,
      width: rect.width,
      height: rect.height,
      color,
    });
  }

  pub fn draw_rect_stroke(&mut self, rect: Rect, line_width: f32, color: Color) {
    self.commands.push(RenderCommand::RectStroke {
      x: rect.x,
      y: rect.y,
      width: rect.width,
      height: rect.height,
      line_width,
      color,
    });
  }

  pub fn draw_text(&mut self, x: f32, y: f32, content: impl Into<String>, size: f32, color: Color) {
    self.commands.push(RenderCommand::Text {
      x,
      y,
      content: content.into(),
      size,
      color,
    });
  }

  pub fn draw_icon(&mut self, name: &str, x: f32, y: f32, size: f32, color: Color) {
    self.commands.push(RenderCommand::Icon {
      name: name.to_owned(),
      x,
      y,
      size,
      color,
    });
  }

  pub fn commands(&self) -> &[RenderCommand] {
    &self.commands
  }

  /// Hand the recorded batch to the renderer, leaving the surface empty.
  pub fn take_commands(&mut self) -> Vec<RenderCommand> {
    std::mem::take(&mut self.commands)
  }
}

/// Approximate pixel width of `text` at `size`, from unicode cell widths and
/// the UI font's width ratio.
pub fn text_width(text: &str, size: f32) -> f32 {
  let cells: usize = text.chars().filter_map(UnicodeWidthChar::width).sum();
  cells as f32 * size * FONT_WIDTH_RATIO
}

/// Truncate `text` so it fits within `max_width` pixels at `size`, appending
/// an ellipsis when anything was cut.
pub fn truncate_to_width(text: &str, max_width: f32, size: f32) -> String {
  if text_width(text, size) <= max_width {
    return text.to_owned();
  }

  let ellipsis_width = text_width("…", size);
  let mut out = String::new();
  let mut used = 0.0;
  for ch in text.chars() {
    let w = ch.width().unwrap_or(0) as f32 * size * FONT_WIDTH_RATIO;
    if used + w + ellipsis_width > max_width {
      break;
    }
    out.push(ch);
    used += w;
  }
  out.push('…');
  out
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn surface_records_in_draw_order() {
    let mut surface = Surface::new(100.0, 100.0);
    surface.draw_rect(Rect::new(0.0, 0.0, 10.0, 10.0), Color::BLACK);
    surface.draw_icon("smile", 2.0, 2.0, 20.0, Color::BLACK);

    let commands = surface.take_commands();
    assert_eq!(commands.len(), 2);
    assert!(matches!(commands[0], RenderCommand::Rect { .. }));
    assert!(matches!(
      &commands[1],
      RenderCommand::Icon { name, size, .. } if name == "smile" && *size == 20.0
    ));
    assert!(surface.commands().is_empty());
  }

  #[test]
  fn truncation_appends_ellipsis_only_when_needed() {
    assert_eq!(truncate_to_width("smile", 1000.0, 14.0), "smile");

    let cut = truncate_to_width("picture-in-picture", 60.0, 14.0);
    assert!(cut.ends_with('…'));
    assert!(text_width(&cut, 14.0) <= 60.0);
  }

  #[test]
  fn rect_containment_is_inclusive() {
    let rect = Rect::new(10.0, 10.0, 20.0, 10.0);
    assert!(rect.contains(10.0, 10.0));
    assert!(rect.contains(30.0, 20.0));
    assert!(!rect.contains(31.0, 20.0));
    assert!(!rect.contains(9.0, 15.0));
  }
}
