pub mod components;
pub mod compositor;
pub mod input;
pub mod jobs;
pub mod surface;

// UI font constants - used across all components for consistency
pub const UI_FONT_SIZE: f32 = 14.0;

// Icon pixel sizes per surface
pub const GRID_ICON_SIZE: f32 = 20.0;
pub const FIELD_ICON_SIZE: f32 = 24.0;
pub const INLINE_ICON_SIZE: f32 = 18.0;
pub const TOOLBAR_ICON_SIZE: f32 = 16.0;

/// Shared UI colors. The host theme may override these at the render
/// boundary; the picker only needs a consistent default set.
pub mod palette {
  use crate::ui::surface::Color;

  pub const PANEL_BG: Color = Color::new(1.0, 1.0, 1.0, 1.0);
  pub const BACKDROP: Color = Color::new(0.0, 0.0, 0.0, 0.4);
  pub const TEXT: Color = Color::new(0.13, 0.13, 0.15, 1.0);
  pub const TEXT_DIM: Color = Color::new(0.4, 0.4, 0.4, 1.0);
  pub const OUTLINE: Color = Color::new(0.8, 0.8, 0.8, 1.0);
  pub const ACCENT: Color = Color::new(0.42, 0.36, 0.91, 1.0);
  pub const ACCENT_BG: Color = Color::new(0.91, 0.88, 1.0, 1.0);
  pub const SAVED: Color = Color::new(0.18, 0.55, 0.34, 1.0);
}
