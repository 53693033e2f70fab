//! Round aggregation domain
//!
//! One round collects contributions and votes, then resolves to a single
//! winner that is appended to the artifact, or is discarded on a tie.
//!
//! # Round lifecycle
//!
//! ```text
//!            submit / vote
//!              ┌──────┐
//!              ▼      │
//!         ┌─────────┐─┘   finalize    ┌────────────┐
//!   ─────▶│  Open   │──────────────▶│ Finalizing │
//!         └─────────┘               └─────┬──────┘
//!              ▲            unique leader │ tie / empty
//!              │               ┌──────────┴──────────┐
//!              │               ▼                     ▼
//!              │         ┌──────────┐         ┌───────────┐
//!              │         │ Accepted │         │ Discarded │
//!              │         └────┬─────┘         └─────┬─────┘
//!              │   artifact += winner               │
//!              └────────── working sets cleared ────┘
//! ```

pub mod aggregator;
pub mod config;
pub mod outcome;
pub mod policy;
pub mod snapshot;
pub mod vote;

// Re-export main types
pub use aggregator::RoundAggregator;
pub use config::RoundConfig;
pub use outcome::{DiscardReason, RoundOutcome, RoundReport};
pub use policy::CompletionPolicy;
pub use snapshot::RoundSnapshot;
pub use vote::{Standing, VoteTally, count_votes_for};
