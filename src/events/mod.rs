mod channel;

pub use channel::{Channel, EventEmitter, EventObserver, SubscriptionId};
