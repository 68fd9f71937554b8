//! Deadline-bounded analytics publisher
//!
//! One publish attempt = one short-lived producer: connect, one
//! acknowledged send to the topic (at-least-once intent), teardown. Three
//! completion triggers race — delivery acknowledgment, producer/setup
//! error, and an independent deadline timer. Whichever fires first wins; a
//! guard keeps the close-and-report step idempotent.
//!
//! State machine:
//! `Idle → Connecting → {Publishing → Done} | {SetupError → Done} |
//! {DeadlineExpired → Done}` — `Done` always releases the producer.

use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use rdkafka::config::ClientConfig;
use rdkafka::producer::{FutureProducer, FutureRecord};
use rdkafka::util::Timeout;

use shared::models::AnalyticsNotificationEvent;

/// Terminal outcome of one publish attempt. Observability only — never
/// surfaced to the order flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PublishOutcome {
    /// Broker acknowledged the event
    Delivered,
    /// Producer setup, serialization or delivery failed
    Failed,
    /// The hard deadline expired before any acknowledgment
    TimedOut,
}

/// One-shot completion flag.
///
/// The triggers can race; `try_complete` returns true for exactly one
/// caller, so the terminal report happens once no matter which trigger
/// fires first.
#[derive(Default)]
struct CompletionGuard {
    done: AtomicBool,
}

impl CompletionGuard {
    fn try_complete(&self) -> bool {
        !self.done.swap(true, Ordering::SeqCst)
    }
}

/// Publisher handle. `Clone` is cheap; each publish builds its own
/// producer so no broker connection outlives the attempt.
#[derive(Debug, Clone)]
pub struct AnalyticsPublisher {
    broker_url: String,
    topic: String,
    deadline: Duration,
}

impl AnalyticsPublisher {
    pub fn new(broker_url: impl Into<String>, topic: impl Into<String>, deadline: Duration) -> Self {
        Self {
            broker_url: broker_url.into(),
            topic: topic.into(),
            deadline,
        }
    }

    /// Fire-and-forget publish: spawn the attempt and return immediately.
    ///
    /// The spawned task outlives the caller's response path, bounded by
    /// the deadline. The caller never observes its outcome.
    pub fn publish_detached(&self, event: AnalyticsNotificationEvent) {
        let publisher = self.clone();
        tokio::spawn(async move {
            publisher.publish(event).await;
        });
    }

    /// Single best-effort publish, completing within the deadline.
    pub async fn publish(&self, event: AnalyticsNotificationEvent) -> PublishOutcome {
        let guard = CompletionGuard::default();

        // Connecting: no automatic reconnection, delivery bounded by the
        // same deadline as the race below.
        let producer: FutureProducer = match ClientConfig::new()
            .set("bootstrap.servers", &self.broker_url)
            .set("message.timeout.ms", self.deadline.as_millis().to_string())
            .create()
        {
            Ok(producer) => producer,
            Err(e) => {
                return self.finish(&guard, &event, PublishOutcome::Failed, Some(e.to_string()));
            }
        };

        let payload = match serde_json::to_string(&event) {
            Ok(payload) => payload,
            Err(e) => {
                return self.finish(&guard, &event, PublishOutcome::Failed, Some(e.to_string()));
            }
        };

        let record = FutureRecord::to(&self.topic)
            .key(&event.request_id)
            .payload(&payload);

        // The race: acknowledged delivery vs. the independent deadline
        // timer. The producer is dropped on every exit path.
        let outcome = tokio::select! {
            delivery = producer.send(record, Timeout::After(self.deadline)) => match delivery {
                Ok(_) => self.finish(&guard, &event, PublishOutcome::Delivered, None),
                Err((e, _)) => {
                    self.finish(&guard, &event, PublishOutcome::Failed, Some(e.to_string()))
                }
            },
            _ = tokio::time::sleep(self.deadline) => {
                self.finish(&guard, &event, PublishOutcome::TimedOut, None)
            }
        };

        drop(producer);
        outcome
    }

    fn finish(
        &self,
        guard: &CompletionGuard,
        event: &AnalyticsNotificationEvent,
        outcome: PublishOutcome,
        detail: Option<String>,
    ) -> PublishOutcome {
        if guard.try_complete() {
            match outcome {
                PublishOutcome::Delivered => tracing::debug!(
                    notification_id = %event.notification_id,
                    request_id = %event.request_id,
                    topic = %self.topic,
                    "analytics event delivered"
                ),
                PublishOutcome::Failed => tracing::warn!(
                    notification_id = %event.notification_id,
                    request_id = %event.request_id,
                    topic = %self.topic,
                    error = %detail.unwrap_or_default(),
                    "analytics publish failed"
                ),
                PublishOutcome::TimedOut => tracing::warn!(
                    notification_id = %event.notification_id,
                    request_id = %event.request_id,
                    topic = %self.topic,
                    deadline_ms = self.deadline.as_millis() as u64,
                    "analytics publish deadline expired"
                ),
            }
        }
        outcome
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::models::NotificationPriority;

    fn test_event() -> AnalyticsNotificationEvent {
        AnalyticsNotificationEvent {
            notification_id: "n-1".to_string(),
            request_id: "ord-1".to_string(),
            title: "Order created".to_string(),
            body: "test".to_string(),
            priority: NotificationPriority::Normal,
        }
    }

    #[test]
    fn completion_guard_fires_once() {
        let guard = CompletionGuard::default();
        assert!(guard.try_complete());
        assert!(!guard.try_complete());
        assert!(!guard.try_complete());
    }

    #[tokio::test]
    async fn unreachable_broker_completes_within_deadline() {
        // Nothing listens on this address; the deadline timer must win the
        // race and the call must return instead of hanging.
        let publisher = AnalyticsPublisher::new(
            "127.0.0.1:1",
            "order-notifications",
            Duration::from_millis(300),
        );

        let started = tokio::time::Instant::now();
        let outcome = publisher.publish(test_event()).await;
        let elapsed = started.elapsed();

        assert_ne!(outcome, PublishOutcome::Delivered);
        assert!(
            elapsed < Duration::from_secs(3),
            "publish did not respect its deadline: {elapsed:?}"
        );
    }

    #[tokio::test]
    async fn detached_publish_returns_immediately() {
        let publisher = AnalyticsPublisher::new(
            "127.0.0.1:1",
            "order-notifications",
            Duration::from_millis(300),
        );

        let started = tokio::time::Instant::now();
        publisher.publish_detached(test_event());
        assert!(started.elapsed() < Duration::from_millis(100));
    }
}
