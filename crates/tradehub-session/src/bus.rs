//! Process-wide typed event bus.
//!
//! A closed set of named events on a broadcast channel replaces ad-hoc
//! string-keyed registration, so subscriber wiring is checked at compile
//! time. Today the only event is the invalid-token notification raised by
//! other token-bearing requests.

use crate::state::{AuthStateHandle, AUTH_ERROR_MESSAGE};
use tokio::sync::broadcast;
use tokio::task::JoinHandle;
use tracing::{debug, warn};

/// Process-wide events.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEvent {
    /// A token-bearing request was rejected with an invalid-token error.
    InvalidToken,
}

/// Typed publish/subscribe channel.
#[derive(Debug, Clone)]
pub struct EventBus {
    tx: broadcast::Sender<AppEvent>,
}

impl EventBus {
    pub fn new(capacity: usize) -> Self {
        let (tx, _rx) = broadcast::channel(capacity);
        Self { tx }
    }

    /// Publish an event. Returns the number of live subscribers;
    /// publishing with no subscribers is not an error.
    pub fn publish(&self, event: AppEvent) -> usize {
        match self.tx.send(event) {
            Ok(receivers) => receivers,
            Err(_) => {
                debug!(?event, "No subscribers for event");
                0
            }
        }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<AppEvent> {
        self.tx.subscribe()
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new(16)
    }
}

/// Subscribe to invalid-token notifications and fold them into the auth
/// state.
///
/// The listener only transitions UI state; it performs no storage mutation.
/// It runs until the bus is dropped.
pub fn spawn_invalid_token_listener(bus: &EventBus, state: AuthStateHandle) -> JoinHandle<()> {
    let mut rx = bus.subscribe();
    tokio::spawn(async move {
        loop {
            match rx.recv().await {
                Ok(AppEvent::InvalidToken) => {
                    warn!("Invalid-token notification received");
                    state.record_invalid_token(AUTH_ERROR_MESSAGE);
                    state.mark_completed();
                }
                Err(broadcast::error::RecvError::Lagged(skipped)) => {
                    debug!(skipped, "Event listener lagged");
                }
                Err(broadcast::error::RecvError::Closed) => break,
            }
        }
    })
}
