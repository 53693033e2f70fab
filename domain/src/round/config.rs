//! Per-aggregator configuration

use super::policy::CompletionPolicy;
use crate::core::contribution::ContributionLimits;
use serde::{Deserialize, Serialize};

/// Policy knobs of one round aggregator
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundConfig {
    /// Accepted contribution length
    pub limits: ContributionLimits,
    /// When the artifact counts as complete
    pub completion: CompletionPolicy,
}

impl RoundConfig {
    pub fn with_limits(mut self, limits: ContributionLimits) -> Self {
        self.limits = limits;
        self
    }

    pub fn with_completion_threshold(mut self, threshold: usize) -> Self {
        self.completion = CompletionPolicy::new(threshold);
        self
    }
}
