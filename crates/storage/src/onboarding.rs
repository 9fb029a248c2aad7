//! Onboarding completion flag
//!
//! The only state the app persists: whether this device has already been
//! through onboarding. It decides which route the app opens on.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::info;

use crate::kv::{DeviceStore, KvError, KvStore};

/// Device key holding the flag
pub const HAS_SEEN_ONBOARDING: &str = "has_seen_onboarding";

/// Onboarding storage errors
#[derive(Debug, Error)]
pub enum OnboardingError {
    /// Underlying store failed
    #[error("Onboarding flag storage failed: {0}")]
    Storage(#[from] KvError),
}

/// Result type for onboarding operations
pub type Result<T> = std::result::Result<T, OnboardingError>;

/// Route the app opens on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InitialRoute {
    /// First launch
    Onboarding,
    /// Onboarding already completed
    Home,
}

/// Reads and writes the onboarding flag
#[derive(Clone)]
pub struct OnboardingStore {
    device: DeviceStore,
}

impl OnboardingStore {
    /// Create a store over a key-value store
    pub fn new(kv: Arc<KvStore>) -> Self {
        Self { device: DeviceStore::new(kv) }
    }

    /// Whether onboarding was completed on this device
    pub fn has_seen_onboarding(&self) -> Result<bool> {
        Ok(self.device.get::<bool>(HAS_SEEN_ONBOARDING)?.unwrap_or(false))
    }

    /// Mark onboarding as completed
    pub fn complete(&self) -> Result<()> {
        self.device.set(HAS_SEEN_ONBOARDING, &true)?;
        self.device.flush()?;
        info!("Onboarding completed");
        Ok(())
    }

    /// Forget onboarding so it shows again on next launch
    pub fn reset(&self) -> Result<()> {
        let existed = self.device.remove(HAS_SEEN_ONBOARDING)?;
        self.device.flush()?;
        info!(existed, "Onboarding reset");
        Ok(())
    }

    /// Route to open on launch
    pub fn initial_route(&self) -> Result<InitialRoute> {
        if self.has_seen_onboarding()? {
            Ok(InitialRoute::Home)
        } else {
            Ok(InitialRoute::Onboarding)
        }
    }
}
