//! Test utilities.
//!
//! This module provides:
//! - Test data factories for creating valid signup requests
//! - In-memory repository implementations for mocking persistence
//! - A builder for an `AppState` wired to those mocks

mod app_state_builder;
mod factories;
mod waitlist_mocks;

pub use app_state_builder::*;
pub use factories::*;
pub use waitlist_mocks::*;
