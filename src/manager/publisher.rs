//! Observable state cell.
//!
//! Holds the latest published snapshot and pushes every new one to all
//! subscribers. A new subscriber first receives the current value, then
//! each later publication in the order it was made. Nothing is coalesced:
//! every subscriber has its own unbounded queue.

use std::sync::Arc;

use parking_lot::Mutex;
use tokio::sync::mpsc;

use crate::core::GameState;

/// A published value: `None` while no game is in progress.
pub type Snapshot = Option<Arc<GameState>>;

#[derive(Default)]
struct PublisherInner {
    current: Snapshot,
    subscribers: Vec<mpsc::UnboundedSender<Snapshot>>,
}

/// Latest-value cell with push notification.
#[derive(Default)]
pub struct StatePublisher {
    inner: Mutex<PublisherInner>,
}

impl StatePublisher {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The latest published snapshot.
    #[must_use]
    pub fn current(&self) -> Snapshot {
        self.inner.lock().current.clone()
    }

    /// Replace the current value and notify every live subscriber.
    ///
    /// Subscribers whose receiving end was dropped are pruned.
    pub fn publish(&self, snapshot: Snapshot) {
        let mut inner = self.inner.lock();
        inner
            .subscribers
            .retain(|subscriber| subscriber.send(snapshot.clone()).is_ok());
        inner.current = snapshot;
    }

    /// Start observing. The current value is delivered first.
    #[must_use]
    pub fn subscribe(&self) -> StateSubscription {
        let (sender, receiver) = mpsc::unbounded_channel();
        let mut inner = self.inner.lock();
        // Cannot fail: the receiver is still in hand
        let _ = sender.send(inner.current.clone());
        inner.subscribers.push(sender);
        StateSubscription { receiver }
    }

    /// Number of subscribers still registered.
    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.inner.lock().subscribers.len()
    }
}

/// Ordered stream of published snapshots.
pub struct StateSubscription {
    receiver: mpsc::UnboundedReceiver<Snapshot>,
}

impl StateSubscription {
    /// Wait for the next snapshot.
    ///
    /// Returns `None` once the publisher is gone and the queue is drained.
    pub async fn recv(&mut self) -> Option<Snapshot> {
        self.receiver.recv().await
    }

    /// Take the next snapshot if one is already queued.
    pub fn try_recv(&mut self) -> Option<Snapshot> {
        self.receiver.try_recv().ok()
    }
}
