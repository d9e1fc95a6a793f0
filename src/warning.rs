//! Structured warning events.
//!
//! Expected degradations (an empty eligible set, for instance) are reported
//! through this channel rather than as errors. Delivery is gated on the
//! configured verbosity and goes to an injectable sink, falling back to
//! stderr.

use std::fmt;

/// Condition class of a warning event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WarningKind {
    /// Every candidate position was filtered out before sampling.
    NoEligibleTarget,
}

impl WarningKind {
    pub fn name(&self) -> &'static str {
        match self {
            WarningKind::NoEligibleTarget => "no eligible target",
        }
    }

    /// Stable code identifying the condition across releases.
    pub fn code(&self) -> &'static str {
        match self {
            WarningKind::NoEligibleTarget => "W002",
        }
    }
}

/// A single diagnostic event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Warning {
    pub kind: WarningKind,
    /// Name of the augmenter instance that produced the event.
    pub augmenter: String,
    pub message: String,
}

impl Warning {
    pub fn no_eligible_target(augmenter: &str) -> Self {
        Self {
            kind: WarningKind::NoEligibleTarget,
            augmenter: augmenter.to_string(),
            message: "no token left to augment after stopword and punctuation filtering"
                .to_string(),
        }
    }
}

impl fmt::Display for Warning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}] {}: {} ({})",
            self.kind.code(),
            self.augmenter,
            self.message,
            self.kind.name()
        )
    }
}

/// Callback receiving warning events instead of the default stderr print.
pub type WarningSink = dyn Fn(&Warning) + Send + Sync;
