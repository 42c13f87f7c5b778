//! First-responder race over the CEP lookup providers.
//!
//! [`resolve`] launches one task per provider, each reporting a successful
//! decode through a shared completion channel, and commits to whichever
//! delivery it observes first, or to [`RaceOutcome::Timeout`] once the
//! deadline fires.
//!
//! # Semantics
//!
//! - Provider failures are logged and never delivered; a failing provider
//!   simply leaves the race.
//! - The deadline timer runs unconditionally: even when every provider has
//!   already failed, the race waits out the full deadline and reports
//!   `Timeout`.
//! - Losing tasks are not cancelled. They run to completion in the
//!   background and their late deliveries fail against the dropped
//!   receiver, which is harmless. Acceptable for a one-shot lookup; a
//!   long-lived service would want a cancellation signal here.
//! - Each call owns its channel and tasks, so concurrent calls are
//!   independent.
//!
//! The race deadline is independent of each provider client's own request
//! timeout; in normal operation the race resolves first.

use std::time::Duration;

use buscacep_providers::{AddressClients, fetch_address};
use buscacep_types::{Address, Cep, Provider, RaceOutcome};
use tokio::sync::mpsc;

/// How long [`resolve`] waits for a first delivery by default.
pub const DEFAULT_DEADLINE: Duration = Duration::from_secs(1);

/// Timing knobs for one race.
#[derive(Debug, Clone)]
pub struct RaceConfig {
    deadline: Duration,
}

impl RaceConfig {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            deadline: DEFAULT_DEADLINE,
        }
    }

    #[must_use]
    pub const fn with_deadline(mut self, deadline: Duration) -> Self {
        self.deadline = deadline;
        self
    }

    #[must_use]
    pub const fn deadline(&self) -> Duration {
        self.deadline
    }
}

impl Default for RaceConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Race every provider for one postcode and commit to the first delivery.
///
/// Returns [`RaceOutcome::Winner`] for the first provider whose task
/// delivers a decoded address, with no priority between providers, or
/// [`RaceOutcome::Timeout`] once `config.deadline()` elapses with nothing
/// delivered.
pub async fn resolve(clients: &AddressClients, cep: &Cep, config: &RaceConfig) -> RaceOutcome {
    // Bounded to the provider count so a sender never blocks while the
    // race is still undecided.
    let (tx, mut rx) = mpsc::channel::<(Provider, Address)>(Provider::ALL.len());

    for provider in Provider::ALL {
        let clients = clients.clone();
        let cep = cep.clone();
        let tx = tx.clone();
        tokio::spawn(async move {
            match fetch_address(&clients, provider, &cep).await {
                Ok(address) => {
                    // The receiver is gone once the race has resolved; a
                    // late delivery failing here is discarded.
                    let _ = tx.send((provider, address)).await;
                }
                Err(error) => {
                    tracing::warn!(provider = %provider, %error, "provider left the race");
                }
            }
        });
    }
    drop(tx);

    tokio::select! {
        // The recv arm is disabled if every sender drops without sending;
        // the sleep below still runs its full course.
        Some((provider, address)) = rx.recv() => {
            tracing::debug!(provider = %provider, "first delivery wins");
            RaceOutcome::Winner { provider, address }
        }
        () = tokio::time::sleep(config.deadline()) => {
            tracing::warn!(deadline = ?config.deadline(), "no delivery before the deadline");
            RaceOutcome::Timeout
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{DEFAULT_DEADLINE, RaceConfig};
    use std::time::Duration;

    #[test]
    fn default_deadline_is_one_second() {
        assert_eq!(RaceConfig::default().deadline(), Duration::from_secs(1));
        assert_eq!(DEFAULT_DEADLINE, Duration::from_secs(1));
    }

    #[test]
    fn deadline_is_overridable() {
        let config = RaceConfig::new().with_deadline(Duration::from_millis(250));
        assert_eq!(config.deadline(), Duration::from_millis(250));
    }
}
