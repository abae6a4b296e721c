//! Subscribers to the published candidate list.
//!
//! Observers get shared references only, so they cannot call back into
//! the engine while a publish is in progress.

use std::sync::mpsc::{self, Receiver, Sender};

use super::filter::SecretCard;
use super::secret::Secret;

/// Receives engine notifications.
pub trait SecretsObserver {
    /// Called after every state change with the freshly filtered list.
    fn on_secrets_changed(&mut self, cards: &[SecretCard]);

    /// Called once per secret, right after it is added and before the list
    /// that includes it is published.
    fn on_new_secret(&mut self, _secret: &Secret) {}
}

/// Forwards every published list into an `mpsc` channel.
///
/// A dropped receiver is not an error; later lists are discarded.
#[derive(Debug)]
pub struct ChannelObserver {
    sender: Sender<Vec<SecretCard>>,
}

impl ChannelObserver {
    #[must_use]
    pub fn new(sender: Sender<Vec<SecretCard>>) -> Self {
        Self { sender }
    }

    /// Create an observer together with the receiving end.
    #[must_use]
    pub fn channel() -> (Self, Receiver<Vec<SecretCard>>) {
        let (sender, receiver) = mpsc::channel();
        (Self::new(sender), receiver)
    }
}

impl SecretsObserver for ChannelObserver {
    fn on_secrets_changed(&mut self, cards: &[SecretCard]) {
        if self.sender.send(cards.to_vec()).is_err() {
            tracing::debug!("secrets channel closed, dropping update");
        }
    }
}
