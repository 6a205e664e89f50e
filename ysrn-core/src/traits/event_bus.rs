use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::errors::YsrnResult;
use crate::events::{DomainEvent, EventKind};

/// Callback invoked for each published event of a subscribed kind.
pub type EventHandler = Arc<dyn Fn(&DomainEvent) + Send + Sync>;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SubscriptionId(pub String);

impl fmt::Display for SubscriptionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Fire-and-forget publish/subscribe.
///
/// Implementations must not surface handler failures to the publisher.
pub trait IEventBus: Send + Sync {
    fn publish(&self, event: &DomainEvent) -> YsrnResult<()>;

    fn subscribe(&self, kind: EventKind, handler: EventHandler) -> YsrnResult<SubscriptionId>;

    /// Returns whether a subscription was removed.
    fn unsubscribe(&self, id: &SubscriptionId) -> YsrnResult<bool>;
}
