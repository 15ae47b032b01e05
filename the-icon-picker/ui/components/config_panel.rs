//! The app-configuration surface: pick how selections are persisted.
//!
//! Four format options, a Save button and a transient "Saved" indicator.
//! Saving writes `{"iconFormat": ...}` through the configuration write path
//! and updates the session's live config on success; a rejected write
//! leaves the indicator off and the previous choice in force. The
//! indicator clears itself two seconds after a successful save.

use std::time::Duration;

use the_icon_picker_event::{
  AsyncHook,
  send_blocking,
};
use tokio::{
  sync::mpsc,
  time::Instant,
};

use crate::{
  core::{
    config::Config,
    format::IconFormat,
  },
  host::bridge::HostError,
  ui::{
    UI_FONT_SIZE,
    components::button::Button,
    compositor::{
      Callback,
      Component,
      Compositor,
      Context,
      Event,
      EventResult,
    },
    jobs::JobsHandle,
    palette,
    surface::{
      Rect,
      Surface,
    },
  },
};

const SAVED_RESET_DELAY: Duration = Duration::from_secs(2);
const OPTION_HEIGHT: f32 = 44.0;
const RADIO_SIZE: f32 = 12.0;

/// Clears the "Saved" indicator a little while after the save landed.
struct SavedReset {
  jobs: JobsHandle,
}

impl AsyncHook for SavedReset {
  type Event = ();

  fn handle_event(&mut self, _event: (), _timeout: Option<Instant>) -> Option<Instant> {
    Some(Instant::now() + SAVED_RESET_DELAY)
  }

  fn finish_debounce(&mut self) {
    self.jobs.callback(Box::new(|compositor, _cx| {
      if let Some(panel) = compositor.find_mut::<ConfigPanel>(ConfigPanel::ID) {
        panel.saved = false;
      }
    }));
  }
}

pub struct ConfigPanel {
  choice:        IconFormat,
  saved:         bool,
  write_pending: bool,
  save_button:   Button,
  option_rects:  Vec<Rect>,
  reset_tx:      mpsc::Sender<()>,
}

impl ConfigPanel {
  pub const ID: &'static str = "icon-config";

  /// Mount the panel and kick off the initial configuration read.
  pub fn open(cx: &mut Context) -> Self {
    let bridge = cx.session.bridge().clone();
    cx.jobs.spawn(async move {
      let config = match bridge.read_config().await {
        Ok(value) => Config::from_host_value(&value),
        Err(err) => {
          log::debug!("config read failed, keeping defaults: {err}");
          Config::default()
        },
      };
      Box::new(move |compositor: &mut Compositor, _cx: &mut Context| {
        if let Some(panel) = compositor.find_mut::<ConfigPanel>(ConfigPanel::ID) {
          panel.choice = config.icon_format;
        }
      }) as Callback
    });

    let reset_tx = SavedReset {
      jobs: cx.jobs.clone(),
    }
    .spawn();

    Self {
      choice: IconFormat::Kebab,
      saved: false,
      write_pending: false,
      save_button: Button::new("Save"),
      option_rects: Vec::new(),
      reset_tx,
    }
  }

  fn spawn_save(&mut self, cx: &mut Context) {
    self.write_pending = true;
    let config = Config {
      icon_format: self.choice,
    };
    let bridge = cx.session.bridge().clone();

    cx.jobs.spawn(async move {
      let result = bridge.write_config(config.to_host_value()).await;
      Box::new(move |compositor: &mut Compositor, cx: &mut Context| {
        if let Some(panel) = compositor.find_mut::<ConfigPanel>(ConfigPanel::ID) {
          panel.finish_save(config, result, cx);
        }
      }) as Callback
    });
  }

  fn finish_save(&mut self, config: Config, result: Result<(), HostError>, cx: &mut Context) {
    self.write_pending = false;
    match result {
      Ok(()) => {
        self.saved = true;
        cx.session.set_config(config);
        send_blocking(&self.reset_tx, ());
      },
      // The indicator stays off and the previous choice stays in force.
      Err(err) => log::warn!("config write failed: {err}"),
    }
  }
}

impl Component for ConfigPanel {
  fn handle_event(&mut self, event: &Event, cx: &mut Context) -> EventResult {
    let Event::Mouse(mouse) = event else {
      return EventResult::Ignored(None);
    };

    if self.save_button.handle_mouse(mouse) {
      if !self.write_pending {
        self.spawn_save(cx);
      }
      return EventResult::Consumed(None);
    }

    if mouse.pressed && mouse.button.is_some() {
      let (mx, my) = mouse.position;
      for (index, rect) in self.option_rects.iter().enumerate() {
        if rect.contains(mx, my) {
          let choice = IconFormat::ALL[index];
          if choice != self.choice {
            self.choice = choice;
            self.saved = false;
          }
          return EventResult::Consumed(None);
        }
      }
    }
    EventResult::Ignored(None)
  }

  fn render(&mut self, area: Rect, surface: &mut Surface, _cx: &mut Context) {
    surface.draw_rect(area, palette::PANEL_BG);

    let x = area.x + 16.0;
    let mut y = area.y + 16.0;
    surface.draw_text(x, y, "Icon Format", 16.0, palette::TEXT);
    y += 26.0;
    surface.draw_text(
      x,
      y,
      "Choose how the selected icon name is saved to the custom field.",
      UI_FONT_SIZE,
      palette::TEXT_DIM,
    );
    y += 28.0;

    self.option_rects.clear();
    for format in IconFormat::ALL {
      let rect = Rect::new(x, y, area.width - 32.0, OPTION_HEIGHT);

      let radio = Rect::new(x + 4.0, y + (OPTION_HEIGHT - RADIO_SIZE) / 2.0, RADIO_SIZE, RADIO_SIZE);
      surface.draw_rect_stroke(radio, 1.0, palette::OUTLINE);
      if format == self.choice {
        surface.draw_rect(
          Rect::new(radio.x + 3.0, radio.y + 3.0, RADIO_SIZE - 6.0, RADIO_SIZE - 6.0),
          palette::ACCENT,
        );
      }

      let text_x = radio.x + RADIO_SIZE + 10.0;
      surface.draw_text(text_x, y + 6.0, format.label(), UI_FONT_SIZE, palette::TEXT);
      surface.draw_text(
        text_x,
        y + 6.0 + UI_FONT_SIZE + 4.0,
        format!("e.g. {}", format.example()),
        UI_FONT_SIZE - 2.0,
        palette::TEXT_DIM,
      );

      self.option_rects.push(rect);
      y += OPTION_HEIGHT + 4.0;
    }

    y += 8.0;
    self.save_button.set_enabled(!self.write_pending);
    self.save_button.render(Rect::new(x, y, 88.0, 28.0), surface);

    if self.saved {
      surface.draw_text(
        x + 88.0 + 12.0,
        y + (28.0 - UI_FONT_SIZE) / 2.0,
        "Saved",
        UI_FONT_SIZE,
        palette::SAVED,
      );
    }
  }

  fn id(&self) -> Option<&'static str> {
    Some(Self::ID)
  }

  fn as_any_mut(&mut self) -> &mut dyn std::any::Any {
    self
  }
}
