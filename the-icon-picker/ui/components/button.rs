//! A small push button widget.
//!
//! Not a compositor layer of its own: owning components render it into a
//! rect and feed it mouse events, then act on the returned activation. A
//! disabled button swallows clicks without activating — that is what guards
//! write-triggering controls while a host write is in flight.

use crate::ui::{
  UI_FONT_SIZE,
  input::{
    MouseButton,
    MouseEvent,
  },
  palette,
  surface::{
    Rect,
    Surface,
    text_width,
  },
};

pub struct Button {
  label:   String,
  enabled: bool,
  hovered: bool,
  pressed: bool,
  // Last rendered area, for mouse hit testing
  area:    Rect,
}

impl Button {
  pub fn new(label: impl Into<String>) -> Self {
    Self {
      label:   label.into(),
      enabled: true,
      hovered: false,
      pressed: false,
      area:    Rect::default(),
    }
  }

  pub fn label(&self) -> &str {
    &self.label
  }

  pub fn set_enabled(&mut self, enabled: bool) {
    self.enabled = enabled;
    if !enabled {
      self.pressed = false;
    }
  }

  pub fn is_enabled(&self) -> bool {
    self.enabled
  }

  /// Last rendered area.
  pub fn area(&self) -> Rect {
    self.area
  }

  /// Feed a mouse event. Returns true when the button was activated: a left
  /// press followed by a release inside the button, while enabled.
  pub fn handle_mouse(&mut self, mouse: &MouseEvent) -> bool {
    let (mx, my) = mouse.position;
    let inside = self.area.contains(mx, my);
    self.hovered = inside;

    if let Some(MouseButton::Left) = mouse.button {
      if mouse.pressed {
        self.pressed = inside && self.enabled;
      } else if self.pressed {
        self.pressed = false;
        return inside && self.enabled;
      }
    }
    false
  }

  pub fn render(&mut self, area: Rect, surface: &mut Surface) {
    self.area = area;

    if self.pressed {
      surface.draw_rect(area, palette::ACCENT_BG);
    }
    let outline = if !self.enabled {
      palette::OUTLINE.with_alpha(0.5)
    } else if self.hovered {
      palette::ACCENT
    } else {
      palette::OUTLINE
    };
    surface.draw_rect_stroke(area, 1.0, outline);

    let color = if self.enabled {
      palette::TEXT
    } else {
      palette::TEXT_DIM.with_alpha(0.6)
    };
    let text_x = area.center_x() - text_width(&self.label, UI_FONT_SIZE) / 2.0;
    let text_y = area.y + (area.height - UI_FONT_SIZE) / 2.0;
    surface.draw_text(text_x, text_y, self.label.clone(), UI_FONT_SIZE, color);
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn rendered_button(enabled: bool) -> Button {
    let mut button = Button::new("Save");
    button.set_enabled(enabled);
    let mut surface = Surface::new(200.0, 100.0);
    button.render(Rect::new(10.0, 10.0, 80.0, 24.0), &mut surface);
    button
  }

  #[test]
  fn press_and_release_inside_activates() {
    let mut button = rendered_button(true);
    assert!(!button.handle_mouse(&MouseEvent::click(20.0, 20.0)));
    assert!(button.handle_mouse(&MouseEvent::release(20.0, 20.0)));
  }

  #[test]
  fn release_outside_does_not_activate() {
    let mut button = rendered_button(true);
    button.handle_mouse(&MouseEvent::click(20.0, 20.0));
    assert!(!button.handle_mouse(&MouseEvent::release(200.0, 90.0)));
  }

  #[test]
  fn disabled_buttons_swallow_clicks() {
    let mut button = rendered_button(false);
    assert!(!button.handle_mouse(&MouseEvent::click(20.0, 20.0)));
    assert!(!button.handle_mouse(&MouseEvent::release(20.0, 20.0)));
  }

  #[test]
  fn disabling_mid_press_cancels_the_press() {
    let mut button = rendered_button(true);
    button.handle_mouse(&MouseEvent::click(20.0, 20.0));
    button.set_enabled(false);
    assert!(!button.handle_mouse(&MouseEvent::release(20.0, 20.0)));
  }
}
