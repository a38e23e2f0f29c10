// SPDX-FileCopyrightText: 2026 Issuetrack Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Test utilities for Issuetrack integration tests.
//!
//! Provides mock adapters and test harness infrastructure for fast,
//! deterministic tests without a configured database.
//!
//! # Components
//!
//! - [`MockStorage`] - In-memory storage adapter with injectable failures
//! - [`TestHarness`] - Full GraphQL stack over temp or mock storage

pub mod harness;
pub mod mock_storage;

pub use harness::TestHarness;
pub use mock_storage::MockStorage;
