//! InMemoryEventBus: synchronous fan-out to subscribed handlers.
//!
//! A panicking handler is logged and skipped; the publisher and the other
//! handlers are unaffected.

use std::panic::{self, AssertUnwindSafe};

use dashmap::DashMap;
use tracing::debug;

use ysrn_core::errors::YsrnResult;
use ysrn_core::events::{DomainEvent, EventKind};
use ysrn_core::traits::{EventHandler, IEventBus, SubscriptionId};
use ysrn_observability::events;

#[derive(Default)]
pub struct InMemoryEventBus {
    handlers: DashMap<EventKind, Vec<(SubscriptionId, EventHandler)>>,
}

impl InMemoryEventBus {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscriber_count(&self, kind: EventKind) -> usize {
        self.handlers.get(&kind).map(|h| h.len()).unwrap_or(0)
    }
}

impl IEventBus for InMemoryEventBus {
    fn publish(&self, event: &DomainEvent) -> YsrnResult<()> {
        let kind = event.kind();
        // Clone out so handlers may subscribe or publish without deadlocking the shard.
        let handlers: Vec<(SubscriptionId, EventHandler)> = self
            .handlers
            .get(&kind)
            .map(|h| h.value().clone())
            .unwrap_or_default();

        for (id, handler) in &handlers {
            if panic::catch_unwind(AssertUnwindSafe(|| handler(event))).is_err() {
                events::handler_panicked(&kind, id);
            }
        }
        debug!(event = %kind, delivered = handlers.len(), "event published");
        Ok(())
    }

    fn subscribe(&self, kind: EventKind, handler: EventHandler) -> YsrnResult<SubscriptionId> {
        let id = SubscriptionId(uuid::Uuid::new_v4().to_string());
        self.handlers
            .entry(kind)
            .or_default()
            .push((id.clone(), handler));
        Ok(id)
    }

    fn unsubscribe(&self, id: &SubscriptionId) -> YsrnResult<bool> {
        let mut removed = false;
        for mut entry in self.handlers.iter_mut() {
            let before = entry.len();
            entry.retain(|(sid, _)| sid != id);
            removed |= entry.len() != before;
        }
        Ok(removed)
    }
}
