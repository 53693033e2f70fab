//! Participant identity

use std::fmt::Debug;
use std::hash::Hash;

/// Opaque identity token for submitters and voters.
///
/// Identities are generated and authenticated by the caller; the domain only
/// compares and hashes them. Any `Clone + Eq + Hash + Debug` type qualifies,
/// so both numeric ids and string handles work out of the box.
///
/// ```
/// use meme_quorum_domain::ParticipantId;
///
/// fn accepts<I: ParticipantId>(_id: I) {}
/// accepts(7u32);
/// accepts(String::from("alice"));
/// ```
pub trait ParticipantId: Clone + Eq + Hash + Debug {}

impl<T> ParticipantId for T where T: Clone + Eq + Hash + Debug {}
