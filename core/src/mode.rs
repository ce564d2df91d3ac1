//! Verbose-mode flag: persistence and change broadcast.
//!
//! One instance per page/session, constructed by the host at startup
//! rather than living as ambient module state. The flag persists across
//! reloads through confy; change notifications fan out to registered
//! listeners: the target tracker (fed as `ModeChanged` signals) and the
//! host's document-root marker. The host syncs the marker from
//! [`ModeSignal::is_active`] once at startup.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{info, warn};

/// Confy application name the mode flag persists under.
pub const MODE_STORE_APP: &str = "blueprint";

/// Failure while persisting the mode flag.
///
/// Loading never fails: a missing or unreadable store reads as the
/// default (off).
#[derive(Debug, Error)]
pub enum ModeError {
    #[error("failed to persist verbose mode: {0}")]
    Store(#[from] confy::ConfyError),
}

/// Persisted form of the flag.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct ModeConfig {
    pub active: bool,
}

type ModeListener = Box<dyn FnMut(bool)>;

/// Process-wide verbose/inspect mode.
pub struct ModeSignal {
    active: bool,
    /// Confy application name; `None` keeps the flag in memory only.
    store_app: Option<&'static str>,
    listeners: Vec<ModeListener>,
}

impl std::fmt::Debug for ModeSignal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ModeSignal")
            .field("active", &self.active)
            .field("store_app", &self.store_app)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

impl ModeSignal {
    /// Load the persisted flag (default off) from the standard store.
    pub fn load() -> Self {
        Self::load_from(MODE_STORE_APP)
    }

    /// Load from a specific confy application name.
    pub fn load_from(store_app: &'static str) -> Self {
        let config: ModeConfig = confy::load(store_app, None).unwrap_or_else(|e| {
            warn!(error = %e, "failed to load verbose mode, defaulting to off");
            ModeConfig::default()
        });
        Self {
            active: config.active,
            store_app: Some(store_app),
            listeners: Vec::new(),
        }
    }

    /// An unpersisted instance; state lives only in memory. For tests and
    /// hosts that manage their own storage.
    pub fn ephemeral(active: bool) -> Self {
        Self {
            active,
            store_app: None,
            listeners: Vec::new(),
        }
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Register a change listener. Listeners fire on every
    /// [`set_active`](Self::set_active) call, including redundant sets to
    /// the current value.
    pub fn subscribe(&mut self, listener: impl FnMut(bool) + 'static) {
        self.listeners.push(Box::new(listener));
    }

    /// Set the flag: apply, notify listeners, then persist.
    pub fn set_active(&mut self, active: bool) -> Result<(), ModeError> {
        self.active = active;
        info!(active, "verbose mode set");
        for listener in &mut self.listeners {
            listener(active);
        }
        if let Some(app) = self.store_app {
            confy::store(app, None, ModeConfig { active })?;
        }
        Ok(())
    }

    /// Flip the flag.
    pub fn toggle(&mut self) -> Result<(), ModeError> {
        self.set_active(!self.active)
    }
}
