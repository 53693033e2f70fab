//! Completion policy for the artifact
//!
//! How many accepted contributions make a finished artifact is a policy
//! decision of the caller, so it lives here rather than in the aggregator.

use serde::{Deserialize, Serialize};

/// Rule for deciding when the artifact is complete
///
/// # Example
///
/// ```
/// use meme_quorum_domain::round::CompletionPolicy;
///
/// let policy = CompletionPolicy::default();
/// assert!(!policy.is_satisfied(2));
/// assert!(policy.is_satisfied(3));
/// assert_eq!(policy.remaining(1), 2);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CompletionPolicy {
    threshold: usize,
}

impl CompletionPolicy {
    pub const DEFAULT_THRESHOLD: usize = 3;

    pub fn new(threshold: usize) -> Self {
        Self { threshold }
    }

    pub fn threshold(&self) -> usize {
        self.threshold
    }

    /// Check if an artifact of `len` entries is complete
    pub fn is_satisfied(&self, len: usize) -> bool {
        len >= self.threshold
    }

    /// Entries still missing before the artifact is complete
    pub fn remaining(&self, len: usize) -> usize {
        self.threshold.saturating_sub(len)
    }

    /// Get a human-readable description of this policy
    pub fn description(&self) -> String {
        match self.threshold {
            1 => "complete after 1 accepted contribution".to_string(),
            n => format!("complete after {} accepted contributions", n),
        }
    }
}

impl Default for CompletionPolicy {
    fn default() -> Self {
        Self::new(Self::DEFAULT_THRESHOLD)
    }
}

impl std::fmt::Display for CompletionPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.description())
    }
}

impl std::str::FromStr for CompletionPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let threshold: usize = s
            .trim()
            .parse()
            .map_err(|_| format!("Invalid completion threshold: {}", s))?;
        Ok(CompletionPolicy::new(threshold))
    }
}
