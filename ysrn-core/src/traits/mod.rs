//! Ports: capability contracts between the engine and its collaborators.

pub mod constraint_store;
pub mod encoder;
pub mod event_bus;
pub mod persistence;

pub use constraint_store::IConstraintStore;
pub use encoder::IEncoder;
pub use event_bus::{EventHandler, IEventBus, SubscriptionId};
pub use persistence::{IContextPersistence, IWeightPersistence};
