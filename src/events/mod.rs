//! Host-facing events.
//!
//! Hosts that prefer a single entry point over calling `SecretsManager`
//! methods directly wrap each client notification in a [`SecretEvent`]
//! and pass it to `SecretsManager::handle`.

mod event;

pub use event::SecretEvent;
