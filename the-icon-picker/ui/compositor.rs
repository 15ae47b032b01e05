//! Layered component stack.
//!
//! Events walk the layers top-down until one consumes them; rendering walks
//! bottom-up. A component can return a callback from event handling to
//! mutate the stack itself (push/remove layers) once the walk is over —
//! that is how overlays mount and tear themselves down without fighting the
//! borrow on the layer list.

use std::any::Any;

use crate::{
  session::Session,
  ui::{
    input::{
      KeyPress,
      MouseEvent,
    },
    jobs::JobsHandle,
    surface::{
      Rect,
      Surface,
    },
  },
};

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Event {
  Key(KeyPress),
  Mouse(MouseEvent),
}

/// Deferred mutation of the compositor, run after event dispatch.
pub type Callback = Box<dyn FnOnce(&mut Compositor, &mut Context) + Send>;

pub enum EventResult {
  Ignored(Option<Callback>),
  Consumed(Option<Callback>),
}

/// Per-dispatch context handed to components.
pub struct Context<'a> {
  pub session: &'a mut Session,
  pub jobs:    JobsHandle,
}

/// Core trait for UI components.
pub trait Component: Any {
  /// Handle an input event. Default ignores everything.
  fn handle_event(&mut self, _event: &Event, _cx: &mut Context) -> EventResult {
    EventResult::Ignored(None)
  }

  /// Render into the given area.
  fn render(&mut self, area: Rect, surface: &mut Surface, cx: &mut Context);

  /// Preferred size, if the component has one.
  fn required_size(&mut self, _viewport: (f32, f32)) -> Option<(f32, f32)> {
    None
  }

  /// Stable identifier for lookup/removal, if the component has one.
  fn id(&self) -> Option<&'static str> {
    None
  }

  /// Whether the component needs continuous redraws.
  fn is_animating(&self) -> bool {
    false
  }

  /// Enable downcasting to concrete types.
  fn as_any_mut(&mut self) -> &mut dyn Any;
}

pub struct Compositor {
  layers: Vec<Box<dyn Component>>,
  area:   Rect,
}

impl Compositor {
  pub fn new(area: Rect) -> Self {
    Self {
      layers: Vec::new(),
      area,
    }
  }

  pub fn area(&self) -> Rect {
    self.area
  }

  pub fn resize(&mut self, width: f32, height: f32) {
    self.area = Rect::new(0.0, 0.0, width, height);
  }

  pub fn push(&mut self, layer: Box<dyn Component>) {
    self.layers.push(layer);
  }

  /// Remove (and drop) the layer with the given id.
  pub fn remove(&mut self, id: &'static str) -> Option<Box<dyn Component>> {
    let index = self
      .layers
      .iter()
      .position(|layer| layer.id() == Some(id))?;
    Some(self.layers.remove(index))
  }

  pub fn has(&self, id: &'static str) -> bool {
    self.layers.iter().any(|layer| layer.id() == Some(id))
  }

  pub fn len(&self) -> usize {
    self.layers.len()
  }

  pub fn is_empty(&self) -> bool {
    self.layers.is_empty()
  }

  /// Find a layer by id and downcast it.
  pub fn find_mut<T: Component>(&mut self, id: &'static str) -> Option<&mut T> {
    self
      .layers
      .iter_mut()
      .find(|layer| layer.id() == Some(id))
      .and_then(|layer| layer.as_any_mut().downcast_mut::<T>())
  }

  /// Dispatch an event top-down. Returns whether any layer consumed it.
  pub fn handle_event(&mut self, event: &Event, cx: &mut Context) -> bool {
    let mut callbacks = Vec::new();
    let mut consumed = false;

    for layer in self.layers.iter_mut().rev() {
      match layer.handle_event(event, cx) {
        EventResult::Consumed(Some(callback)) => {
          callbacks.push(callback);
          consumed = true;
          break;
        },
        EventResult::Consumed(None) => {
          consumed = true;
          break;
        },
        EventResult::Ignored(Some(callback)) => {
          callbacks.push(callback);
        },
        EventResult::Ignored(None) => {},
      }
    }

    for callback in callbacks {
      callback(self, cx);
    }

    consumed
  }

  /// Render all layers bottom-up.
  pub fn render(&mut self, surface: &mut Surface, cx: &mut Context) {
    let area = self.area;
    for layer in self.layers.iter_mut() {
      layer.render(area, surface, cx);
    }
  }

  pub fn is_animating(&self) -> bool {
    self.layers.iter().any(|layer| layer.is_animating())
  }
}

#[cfg(test)]
mod tests {
  use std::sync::Arc;

  use super::*;
  use crate::{
    core::catalog::Catalog,
    host::standalone::StandaloneHost,
    ui::jobs::Jobs,
  };

  struct Probe {
    id:       &'static str,
    consume:  bool,
    seen:     usize,
    rendered: usize,
  }

  impl Probe {
    fn new(id: &'static str, consume: bool) -> Self {
      Self {
        id,
        consume,
        seen: 0,
        rendered: 0,
      }
    }
  }

  impl Component for Probe {
    fn handle_event(&mut self, _event: &Event, _cx: &mut Context) -> EventResult {
      self.seen += 1;
      if self.consume {
        EventResult::Consumed(None)
      } else {
        EventResult::Ignored(None)
      }
    }

    fn render(&mut self, _area: Rect, _surface: &mut Surface, _cx: &mut Context) {
      self.rendered += 1;
    }

    fn id(&self) -> Option<&'static str> {
      Some(self.id)
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
      self
    }
  }

  fn session() -> Session {
    Session::new(Catalog::builtin(), Arc::new(StandaloneHost::new()))
  }

  fn key_event() -> Event {
    Event::Key(crate::ui::input::KeyPress::plain(
      crate::ui::input::Key::Enter,
    ))
  }

  #[test]
  fn top_layer_consumes_first() {
    let jobs = Jobs::new();
    let mut session = session();
    let mut compositor = Compositor::new(Rect::new(0.0, 0.0, 800.0, 600.0));
    compositor.push(Box::new(Probe::new("bottom", true)));
    compositor.push(Box::new(Probe::new("top", true)));

    let mut cx = Context {
      session: &mut session,
      jobs:    jobs.handle(),
    };
    assert!(compositor.handle_event(&key_event(), &mut cx));

    assert_eq!(compositor.find_mut::<Probe>("top").unwrap().seen, 1);
    assert_eq!(compositor.find_mut::<Probe>("bottom").unwrap().seen, 0);
  }

  #[test]
  fn ignored_events_fall_through() {
    let jobs = Jobs::new();
    let mut session = session();
    let mut compositor = Compositor::new(Rect::new(0.0, 0.0, 800.0, 600.0));
    compositor.push(Box::new(Probe::new("bottom", false)));
    compositor.push(Box::new(Probe::new("top", false)));

    let mut cx = Context {
      session: &mut session,
      jobs:    jobs.handle(),
    };
    assert!(!compositor.handle_event(&key_event(), &mut cx));
    assert_eq!(compositor.find_mut::<Probe>("bottom").unwrap().seen, 1);
  }

  #[test]
  fn callbacks_can_remove_layers() {
    struct SelfClosing;

    impl Component for SelfClosing {
      fn handle_event(&mut self, _event: &Event, _cx: &mut Context) -> EventResult {
        EventResult::Consumed(Some(Box::new(|compositor, _cx| {
          compositor.remove("self-closing");
        })))
      }

      fn render(&mut self, _area: Rect, _surface: &mut Surface, _cx: &mut Context) {}

      fn id(&self) -> Option<&'static str> {
        Some("self-closing")
      }

      fn as_any_mut(&mut self) -> &mut dyn Any {
        self
      }
    }

    let jobs = Jobs::new();
    let mut session = session();
    let mut compositor = Compositor::new(Rect::new(0.0, 0.0, 800.0, 600.0));
    compositor.push(Box::new(SelfClosing));
    assert!(compositor.has("self-closing"));

    let mut cx = Context {
      session: &mut session,
      jobs:    jobs.handle(),
    };
    compositor.handle_event(&key_event(), &mut cx);
    assert!(!compositor.has("self-closing"));
  }

  #[test]
  fn render_walks_bottom_up() {
    let jobs = Jobs::new();
    let mut session = session();
    let mut compositor = Compositor::new(Rect::new(0.0, 0.0, 800.0, 600.0));
    compositor.push(Box::new(Probe::new("a", false)));
    compositor.push(Box::new(Probe::new("b", false)));

    let mut surface = Surface::new(800.0, 600.0);
    let mut cx = Context {
      session: &mut session,
      jobs:    jobs.handle(),
    };
    compositor.render(&mut surface, &mut cx);

    assert_eq!(compositor.find_mut::<Probe>("a").unwrap().rendered, 1);
    assert_eq!(compositor.find_mut::<Probe>("b").unwrap().rendered, 1);
  }
}
