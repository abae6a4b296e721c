//! Secret inference: the live secret collection and the candidate pipeline.
//!
//! ## Key Types
//!
//! - [`Secret`]: One face-down secret and its per-card exclusion flags
//! - [`SecretsManager`]: Lifecycle and exclusion operations; publishes on change
//! - [`CandidateFilter`]: Count aggregation, copy-limit rule, mode legality
//! - [`SecretCard`]: One row of the published list
//! - [`SecretsObserver`]: Subscriber interface for published lists
//! - [`PendingCombat`]: Attack whose secret exclusions are still outstanding
//!
//! ## Global Exclusion
//!
//! The engine never knows which candidate list belongs to which face-down
//! object, only the multiset of possibilities. Ruling a card out therefore
//! applies to every live secret at once.

mod combat;
mod filter;
mod manager;
mod observer;
mod secret;

pub use combat::PendingCombat;
pub use filter::{aggregate_counts, card_limit_exempt, played_starting_copies, CandidateFilter, SecretCard};
pub use manager::{SecretsManager, SecretsSnapshot};
pub use observer::{ChannelObserver, SecretsObserver};
pub use secret::{ExclusionEntry, Exclusions, Secret};
