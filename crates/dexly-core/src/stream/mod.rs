// ── Reactive list streams ──
//
// Subscription handle for the aggregator's published view.

use std::pin::Pin;
use std::task::{Context, Poll};

use futures_core::Stream;
use tokio::sync::watch;
use tokio_stream::wrappers::WatchStream;

use crate::store::ListSnapshot;

/// A subscription to the filtered list view.
///
/// Provides both point-in-time snapshot access and change notification
/// via [`changed()`](Self::changed) or by converting to a `Stream`.
pub struct ListStream {
    current: ListSnapshot,
    receiver: watch::Receiver<ListSnapshot>,
}

impl ListStream {
    pub(crate) fn new(receiver: watch::Receiver<ListSnapshot>) -> Self {
        let current = receiver.borrow().clone();
        Self { current, receiver }
    }

    /// The snapshot captured at creation or at the last `changed()`.
    pub fn current(&self) -> &ListSnapshot {
        &self.current
    }

    /// The latest published snapshot.
    pub fn latest(&self) -> ListSnapshot {
        self.receiver.borrow().clone()
    }

    /// Wait for the next publish. `None` once the aggregator is dropped.
    pub async fn changed(&mut self) -> Option<ListSnapshot> {
        self.receiver.changed().await.ok()?;
        let snap = self.receiver.borrow_and_update().clone();
        self.current = snap.clone();
        Some(snap)
    }

    /// Convert into a `Stream` for use with `StreamExt` combinators.
    pub fn into_stream(self) -> ListWatchStream {
        ListWatchStream {
            inner: WatchStream::new(self.receiver),
        }
    }
}

/// `Stream` adapter backed by a `watch::Receiver`. Yields the current
/// snapshot first, then one per publish.
pub struct ListWatchStream {
    inner: WatchStream<ListSnapshot>,
}

impl Stream for ListWatchStream {
    type Item = ListSnapshot;

    fn poll_next(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        Pin::new(&mut self.inner).poll_next(cx)
    }
}
