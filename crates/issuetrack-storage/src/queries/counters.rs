// SPDX-FileCopyrightText: 2026 Issuetrack Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Named monotonic counters used to allocate sequential ids.

use issuetrack_core::TrackerError;
use rusqlite::params;

use crate::database::Database;

/// Increment the counter `name` and return its new value.
///
/// A counter that does not exist yet is created at `1`. The upsert and the
/// read happen in one statement, so no two callers (in this process or any
/// other process sharing the file) can observe the same value.
pub async fn next_value(db: &Database, name: &str) -> Result<i64, TrackerError> {
    let name = name.to_string();
    db.connection()
        .call(move |conn| -> Result<i64, rusqlite::Error> {
            conn.query_row(
                "INSERT INTO counters (name, current) VALUES (?1, 1)
                 ON CONFLICT(name) DO UPDATE SET current = current + 1
                 RETURNING current",
                params![name],
                |row| row.get(0),
            )
        })
        .await
        .map_err(crate::database::map_tr_err)
}
