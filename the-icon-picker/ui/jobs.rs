//! Async job plumbing for the UI.
//!
//! Host bridge calls are async; components are not. A component spawns a
//! future that resolves to a compositor callback, and the embedding shell
//! pumps finished callbacks back into the UI between events. At most one
//! write-job per control is in flight — the components guard that
//! themselves by disabling the triggering control.

use std::future::Future;

use tokio::sync::mpsc;

use crate::{
  session::Session,
  ui::compositor::{
    Callback,
    Compositor,
    Context,
  },
};

/// Cloneable handle components use to schedule work.
#[derive(Clone)]
pub struct JobsHandle {
  tx: mpsc::UnboundedSender<Callback>,
}

impl JobsHandle {
  /// Spawn a future onto the runtime; its resulting callback is delivered
  /// on the next pump.
  pub fn spawn<F>(&self, fut: F)
  where
    F: Future<Output = Callback> + Send + 'static,
  {
    let tx = self.tx.clone();
    tokio::spawn(async move {
      let _ = tx.send(fut.await);
    });
  }

  /// Queue a ready callback directly.
  pub fn callback(&self, callback: Callback) {
    let _ = self.tx.send(callback);
  }
}

pub struct Jobs {
  tx: mpsc::UnboundedSender<Callback>,
  rx: mpsc::UnboundedReceiver<Callback>,
}

impl Jobs {
  pub fn new() -> Self {
    let (tx, rx) = mpsc::unbounded_channel();
    Self { tx, rx }
  }

  pub fn handle(&self) -> JobsHandle {
    JobsHandle {
      tx: self.tx.clone(),
    }
  }

  /// A finished callback, if one is ready.
  pub fn try_next(&mut self) -> Option<Callback> {
    self.rx.try_recv().ok()
  }

  /// Await the next finished callback. Never returns `None` while the
  /// paired handle (held by `Jobs` itself) is alive.
  pub async fn next(&mut self) -> Option<Callback> {
    self.rx.recv().await
  }

  /// Run every finished callback against the compositor.
  pub fn pump(&mut self, compositor: &mut Compositor, session: &mut Session) {
    while let Some(callback) = self.try_next() {
      let mut cx = Context {
        session: &mut *session,
        jobs:    self.handle(),
      };
      callback(compositor, &mut cx);
    }
  }
}

impl Default for Jobs {
  fn default() -> Self {
    Self::new()
  }
}

#[cfg(test)]
mod tests {
  use std::sync::Arc;

  use super::*;
  use crate::{
    core::catalog::Catalog,
    host::standalone::StandaloneHost,
    ui::surface::Rect,
  };

  #[tokio::test]
  async fn spawned_jobs_deliver_their_callback() {
    let mut jobs = Jobs::new();
    jobs.handle().spawn(async {
      Box::new(|compositor: &mut Compositor, _cx: &mut Context| {
        compositor.resize(10.0, 10.0);
      }) as Callback
    });

    let callback = jobs.next().await.unwrap();

    let mut session = Session::new(Catalog::builtin(), Arc::new(StandaloneHost::new()));
    let mut compositor = Compositor::new(Rect::new(0.0, 0.0, 800.0, 600.0));
    let mut cx = Context {
      session: &mut session,
      jobs:    jobs.handle(),
    };
    callback(&mut compositor, &mut cx);
    assert_eq!(compositor.area().width, 10.0);
  }

  #[tokio::test]
  async fn pump_drains_ready_callbacks_in_order() {
    let mut jobs = Jobs::new();
    jobs.handle().callback(Box::new(|compositor, _cx| {
      compositor.resize(1.0, 1.0);
    }));
    jobs.handle().callback(Box::new(|compositor, _cx| {
      compositor.resize(2.0, 2.0);
    }));

    let mut session = Session::new(Catalog::builtin(), Arc::new(StandaloneHost::new()));
    let mut compositor = Compositor::new(Rect::new(0.0, 0.0, 800.0, 600.0));
    jobs.pump(&mut compositor, &mut session);
    assert_eq!(compositor.area().width, 2.0);
    assert!(jobs.try_next().is_none());
  }
}
