//! Result of one lookup race.

use crate::{Address, Provider};

/// The single value a lookup race produces.
///
/// Exactly one outcome exists per race: either the first provider to
/// deliver a decoded address, or the deadline expiring with no delivery.
/// A race in which every provider failed still ends in [`Timeout`]: the
/// deadline timer runs unconditionally.
///
/// [`Timeout`]: RaceOutcome::Timeout
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RaceOutcome {
    /// A provider delivered a decoded address before the deadline.
    Winner {
        provider: Provider,
        address: Address,
    },
    /// The deadline fired with no delivery.
    Timeout,
}

impl RaceOutcome {
    #[must_use]
    pub const fn is_timeout(&self) -> bool {
        matches!(self, RaceOutcome::Timeout)
    }

    /// The winning provider and address, if any.
    #[must_use]
    pub const fn winner(&self) -> Option<(Provider, &Address)> {
        match self {
            RaceOutcome::Winner { provider, address } => Some((*provider, address)),
            RaceOutcome::Timeout => None,
        }
    }
}
