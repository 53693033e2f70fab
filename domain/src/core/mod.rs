//! Core domain concepts shared across the round subdomain.
//!
//! - [`identity::ParticipantId`] — opaque submitter/voter identity
//! - [`contribution::Contribution`] — a validated contribution text
//! - [`error::DomainError`] — domain-level errors

pub mod contribution;
pub mod error;
pub mod identity;
