//! Test utilities for integration testing.
//!
//! This module provides:
//! - Test data factories for waitlist entries and pre-seeded stores
//! - Email sender mocks that capture or reject outgoing mail
//! - A builder for constructing `AppState` with in-memory dependencies

mod app_state_builder;
mod email_mocks;
mod factories;

pub use app_state_builder::*;
pub use email_mocks::*;
pub use factories::*;
