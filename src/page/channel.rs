//! Outbound notifications for features that react to table updates.

use serde::Serialize;
use tokio::sync::broadcast;
use tracing::trace;

/// Name of the notification fired after every completed render
pub const ROWS_UPDATED_EVENT: &str = "rankings:rows-updated";

/// Payload of [`ROWS_UPDATED_EVENT`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RowsUpdated {
    pub count: usize,
}

/// Broadcast channel for rows-updated notifications
///
/// Every subscriber gets its own receiver. Publishing never blocks; a slow
/// receiver sees `Lagged` and the sender is unaffected.
#[derive(Debug, Clone)]
pub struct EventChannel {
    sender: broadcast::Sender<RowsUpdated>,
}

impl EventChannel {
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity.max(1));
        Self { sender }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<RowsUpdated> {
        self.sender.subscribe()
    }

    pub fn publish(&self, event: RowsUpdated) {
        match self.sender.send(event) {
            Ok(receivers) => {
                trace!("{}: count={} receivers={}", ROWS_UPDATED_EVENT, event.count, receivers)
            }
            Err(_) => trace!("{}: count={} (no listeners)", ROWS_UPDATED_EVENT, event.count),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::sync::broadcast::error::TryRecvError;

    #[test]
    fn test_publish_without_listeners_is_ignored() {
        let channel = EventChannel::new(4);
        channel.publish(RowsUpdated { count: 3 });

        let mut late = channel.subscribe();
        assert!(matches!(late.try_recv(), Err(TryRecvError::Empty)));
    }

    #[test]
    fn test_each_subscriber_receives_events() {
        let channel = EventChannel::new(4);
        let mut first = channel.subscribe();
        let mut second = channel.subscribe();

        channel.publish(RowsUpdated { count: 2 });

        assert_eq!(first.try_recv().unwrap(), RowsUpdated { count: 2 });
        assert_eq!(second.try_recv().unwrap(), RowsUpdated { count: 2 });
        assert!(matches!(first.try_recv(), Err(TryRecvError::Empty)));
    }

    #[test]
    fn test_slow_receiver_lags() {
        let channel = EventChannel::new(1);
        let mut rx = channel.subscribe();
        channel.publish(RowsUpdated { count: 1 });
        channel.publish(RowsUpdated { count: 2 });

        assert!(matches!(rx.try_recv(), Err(TryRecvError::Lagged(1))));
        assert_eq!(rx.try_recv().unwrap(), RowsUpdated { count: 2 });
    }

    #[test]
    fn test_zero_capacity_is_raised_to_one() {
        let channel = EventChannel::new(0);
        let mut rx = channel.subscribe();
        channel.publish(RowsUpdated { count: 0 });
        assert_eq!(rx.try_recv().unwrap().count, 0);
    }

    #[test]
    fn test_payload_serializes_as_count_object() {
        let json = serde_json::to_string(&RowsUpdated { count: 5 }).unwrap();
        assert_eq!(json, "{\"count\":5}");
    }
}
