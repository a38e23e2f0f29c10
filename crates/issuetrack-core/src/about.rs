// SPDX-FileCopyrightText: 2026 Issuetrack Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Process-wide "about" message.
//!
//! The message is created once at startup, read by the `about` query and
//! replaced by the `setAboutMessage` mutation. It is never persisted, so a
//! restart resets it to the configured initial value. Concurrent writers do
//! not coordinate: whichever store lands last wins.

use std::sync::Arc;

use arc_swap::ArcSwap;

/// Message served before anyone calls `setAboutMessage`.
pub const DEFAULT_ABOUT_MESSAGE: &str = "Issue Tracker API v1.0";

/// Single-slot holder for the current about message.
#[derive(Debug)]
pub struct AboutMessage {
    current: ArcSwap<String>,
}

impl AboutMessage {
    pub fn new(initial: impl Into<String>) -> Self {
        Self {
            current: ArcSwap::from_pointee(initial.into()),
        }
    }

    /// Returns the current message.
    pub fn get(&self) -> String {
        self.current.load().as_ref().clone()
    }

    /// Replaces the message and returns the value that was stored.
    pub fn set(&self, message: impl Into<String>) -> String {
        let message = message.into();
        self.current.store(Arc::new(message.clone()));
        message
    }
}

impl Default for AboutMessage {
    fn default() -> Self {
        Self::new(DEFAULT_ABOUT_MESSAGE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_with_default_message() {
        assert_eq!(AboutMessage::default().get(), "Issue Tracker API v1.0");
    }

    #[test]
    fn set_returns_new_value_and_replaces_it() {
        let about = AboutMessage::new("v1");
        assert_eq!(about.set("v2"), "v2");
        assert_eq!(about.get(), "v2");
    }

    #[test]
    fn empty_message_is_accepted() {
        let about = AboutMessage::default();
        about.set("");
        assert_eq!(about.get(), "");
    }

    #[test]
    fn concurrent_writers_leave_one_of_their_values() {
        let about = Arc::new(AboutMessage::default());
        let handles: Vec<_> = (0..8)
            .map(|i| {
                let about = Arc::clone(&about);
                std::thread::spawn(move || {
                    about.set(format!("writer-{i}"));
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }
        let last = about.get();
        assert!(last.starts_with("writer-"), "unexpected value {last}");
    }
}
