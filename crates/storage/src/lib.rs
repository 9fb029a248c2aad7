//! Storage layer for Creditline
//!
//! The app persists a single device flag. This crate provides the sled
//! key-value store it lives in and the onboarding store on top of it.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod kv;
pub mod onboarding;

pub use kv::{DeviceStore, KvConfig, KvError, KvStore};
pub use onboarding::{InitialRoute, OnboardingError, OnboardingStore, HAS_SEEN_ONBOARDING};
