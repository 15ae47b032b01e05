//! Utilities for declaring an async (usually debounced) hook

use std::time::Duration;

use futures_executor::block_on;
use tokio::{
  sync::mpsc::{
    self,
    Sender,
    error::TrySendError,
  },
  time::Instant,
};

/// Maximum time to block when sending to a full channel. The hooks run on the
/// host's UI thread, so dropping an indicator update is always preferable to
/// stalling input handling.
const SEND_TIMEOUT_MS: u64 = 2;

/// A hook that consumes events sent from synchronous UI code and reacts to
/// them after a debounce interval. Implementations run as a background tokio
/// task reading from a channel: `handle_event` is called immediately for
/// every received event and may either act on it right away or schedule (or
/// extend) a debounce deadline; `finish_debounce` fires once the deadline
/// elapses with no further events.
pub trait AsyncHook: Sync + Send + 'static + Sized {
  type Event: Sync + Send + 'static;

  /// Called for every received event. Returns the new debounce deadline, or
  /// `None` to cancel a pending `finish_debounce`.
  fn handle_event(&mut self, event: Self::Event, timeout: Option<Instant>) -> Option<Instant>;

  /// Called when the debounce deadline is reached.
  fn finish_debounce(&mut self);

  fn spawn(self) -> mpsc::Sender<Self::Event> {
    // Events arrive at user-interaction rate, so a small buffer is plenty.
    let (tx, rx) = mpsc::channel(64);
    // Only spawn the worker when we are inside a runtime, so unit tests that
    // never drive the hook don't need one.
    if tokio::runtime::Handle::try_current().is_ok() {
      tokio::spawn(run(self, rx));
    }
    tx
  }
}

async fn run<Hook: AsyncHook>(mut hook: Hook, mut rx: mpsc::Receiver<Hook::Event>) {
  let mut deadline = None;
  loop {
    let event = match deadline {
      Some(deadline_) => {
        let res = tokio::time::timeout_at(deadline_, rx.recv()).await;
        match res {
          Ok(event) => event,
          Err(_) => {
            hook.finish_debounce();
            deadline = None;
            continue;
          },
        }
      },
      None => rx.recv().await,
    };
    let Some(event) = event else {
      break;
    };
    deadline = hook.handle_event(event, deadline);
  }
}

/// Send an event to a hook from synchronous code, blocking only briefly if
/// the channel is full. If the channel is still full after the timeout the
/// event is dropped.
pub fn send_blocking<T>(tx: &Sender<T>, data: T) {
  match tx.try_send(data) {
    Ok(()) => {},
    Err(TrySendError::Full(data)) => {
      let _ = block_on(tx.send_timeout(data, Duration::from_millis(SEND_TIMEOUT_MS)));
    },
    Err(TrySendError::Closed(_)) => {
      log::warn!("Attempted to send to closed channel");
    },
  }
}

/// Try to send an event without blocking at all.
/// Returns true if the event was sent, false if the channel was full or closed.
pub fn try_send<T>(tx: &Sender<T>, data: T) -> bool {
  tx.try_send(data).is_ok()
}

#[cfg(test)]
mod tests {
  use std::sync::{
    Arc,
    atomic::{
      AtomicUsize,
      Ordering,
    },
  };

  use super::*;

  struct CountingHook {
    fired: Arc<AtomicUsize>,
    delay: Duration,
  }

  impl AsyncHook for CountingHook {
    type Event = ();

    fn handle_event(&mut self, _event: (), _timeout: Option<Instant>) -> Option<Instant> {
      Some(Instant::now() + self.delay)
    }

    fn finish_debounce(&mut self) {
      self.fired.fetch_add(1, Ordering::SeqCst);
    }
  }

  #[tokio::test(start_paused = true)]
  async fn debounce_fires_once_after_deadline() {
    let fired = Arc::new(AtomicUsize::new(0));
    let tx = CountingHook {
      fired: fired.clone(),
      delay: Duration::from_secs(2),
    }
    .spawn();

    tx.send(()).await.unwrap();
    tokio::time::sleep(Duration::from_millis(100)).await;
    assert_eq!(fired.load(Ordering::SeqCst), 0);

    tokio::time::sleep(Duration::from_secs(3)).await;
    assert_eq!(fired.load(Ordering::SeqCst), 1);
  }

  #[tokio::test(start_paused = true)]
  async fn later_events_extend_the_deadline() {
    let fired = Arc::new(AtomicUsize::new(0));
    let tx = CountingHook {
      fired: fired.clone(),
      delay: Duration::from_secs(2),
    }
    .spawn();

    tx.send(()).await.unwrap();
    tokio::time::sleep(Duration::from_secs(1)).await;
    tx.send(()).await.unwrap();
    tokio::time::sleep(Duration::from_millis(1500)).await;
    // The second event pushed the deadline out past the original one.
    assert_eq!(fired.load(Ordering::SeqCst), 0);

    tokio::time::sleep(Duration::from_secs(1)).await;
    assert_eq!(fired.load(Ordering::SeqCst), 1);
  }
}
