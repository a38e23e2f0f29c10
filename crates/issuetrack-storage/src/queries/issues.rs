// SPDX-FileCopyrightText: 2026 Issuetrack Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Issue persistence.
//!
//! Timestamps are stored as ISO-8601 text in the same form the API emits.

use chrono::{DateTime, Utc};
use issuetrack_core::date::{format_date, parse_date};
use issuetrack_core::TrackerError;
use rusqlite::types::Type;
use rusqlite::{params, Row};

use crate::database::Database;
use crate::models::{Issue, NewIssue};

const ISSUE_COLUMNS: &str = "row_id, id, title, status, owner, effort, created, due";

/// Insert a new issue and return its assigned `row_id`.
pub async fn insert_issue(db: &Database, issue: &NewIssue) -> Result<i64, TrackerError> {
    let issue = issue.clone();
    db.connection()
        .call(move |conn| -> Result<i64, rusqlite::Error> {
            conn.execute(
                "INSERT INTO issues (id, title, status, owner, effort, created, due)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
                params![
                    issue.id,
                    issue.title,
                    issue.status,
                    issue.owner,
                    issue.effort,
                    format_date(&issue.created),
                    issue.due.as_ref().map(format_date),
                ],
            )?;
            Ok(conn.last_insert_rowid())
        })
        .await
        .map_err(crate::database::map_tr_err)
}

/// Get an issue by its public id.
pub async fn get_issue(db: &Database, id: i64) -> Result<Option<Issue>, TrackerError> {
    get_one(db, "id", id).await
}

/// Get an issue by its storage row id.
pub async fn get_issue_by_row_id(db: &Database, row_id: i64) -> Result<Option<Issue>, TrackerError> {
    get_one(db, "row_id", row_id).await
}

/// List issues in insertion order, optionally restricted to an exact status.
pub async fn list_issues(db: &Database, status: Option<&str>) -> Result<Vec<Issue>, TrackerError> {
    let status = status.map(|s| s.to_string());
    db.connection()
        .call(move |conn| -> Result<Vec<Issue>, rusqlite::Error> {
            let mut issues = Vec::new();
            match &status {
                Some(status_filter) => {
                    let mut stmt = conn.prepare(&format!(
                        "SELECT {ISSUE_COLUMNS} FROM issues WHERE status = ?1 ORDER BY row_id"
                    ))?;
                    let rows = stmt.query_map(params![status_filter], row_to_issue)?;
                    for row in rows {
                        issues.push(row?);
                    }
                }
                None => {
                    let mut stmt =
                        conn.prepare(&format!("SELECT {ISSUE_COLUMNS} FROM issues ORDER BY row_id"))?;
                    let rows = stmt.query_map([], row_to_issue)?;
                    for row in rows {
                        issues.push(row?);
                    }
                }
            }
            Ok(issues)
        })
        .await
        .map_err(crate::database::map_tr_err)
}

async fn get_one(
    db: &Database,
    column: &'static str,
    key: i64,
) -> Result<Option<Issue>, TrackerError> {
    db.connection()
        .call(move |conn| -> Result<Option<Issue>, rusqlite::Error> {
            let mut stmt = conn.prepare(&format!(
                "SELECT {ISSUE_COLUMNS} FROM issues WHERE {column} = ?1"
            ))?;
            match stmt.query_row(params![key], row_to_issue) {
                Ok(issue) => Ok(Some(issue)),
                Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
                Err(e) => Err(e),
            }
        })
        .await
        .map_err(crate::database::map_tr_err)
}

fn row_to_issue(row: &Row<'_>) -> Result<Issue, rusqlite::Error> {
    let created: String = row.get(6)?;
    let due: Option<String> = row.get(7)?;
    Ok(Issue {
        row_id: row.get(0)?,
        id: row.get(1)?,
        title: row.get(2)?,
        status: row.get(3)?,
        owner: row.get(4)?,
        effort: row.get(5)?,
        created: date_column(6, &created)?,
        due: due.map(|text| date_column(7, &text)).transpose()?,
    })
}

fn date_column(idx: usize, text: &str) -> Result<DateTime<Utc>, rusqlite::Error> {
    parse_date(text).ok_or_else(|| {
        rusqlite::Error::FromSqlConversionFailure(
            idx,
            Type::Text,
            format!("invalid stored date `{text}`").into(),
        )
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use tempfile::tempdir;

    async fn setup_db() -> (Database, tempfile::TempDir) {
        let dir = tempdir().unwrap();
        let db_path = dir.path().join("issues.db");
        let db = Database::open(db_path.to_str().unwrap()).await.unwrap();
        (db, dir)
    }

    fn make_issue(id: i64, status: &str) -> NewIssue {
        NewIssue {
            id,
            title: format!("Issue number {id}"),
            status: status.to_string(),
            owner: None,
            effort: None,
            created: Utc.with_ymd_and_hms(2024, 3, 1, 9, 30, 0).unwrap(),
            due: None,
        }
    }

    #[tokio::test]
    async fn insert_and_get_round_trips_all_fields() {
        let (db, _dir) = setup_db().await;
        let issue = NewIssue {
            id: 1,
            title: "Error in console when clicking Add".to_string(),
            status: "Assigned".to_string(),
            owner: Some("Ravan".to_string()),
            effort: Some(5),
            created: Utc.with_ymd_and_hms(2019, 1, 15, 0, 0, 0).unwrap(),
            due: Some(Utc.with_ymd_and_hms(2019, 2, 1, 12, 0, 0).unwrap()),
        };

        let row_id = insert_issue(&db, &issue).await.unwrap();
        assert!(row_id > 0);

        let by_id = get_issue(&db, 1).await.unwrap().unwrap();
        assert_eq!(by_id.row_id, row_id);
        assert_eq!(by_id.id, 1);
        assert_eq!(by_id.title, issue.title);
        assert_eq!(by_id.status, "Assigned");
        assert_eq!(by_id.owner.as_deref(), Some("Ravan"));
        assert_eq!(by_id.effort, Some(5));
        assert_eq!(by_id.created, issue.created);
        assert_eq!(by_id.due, issue.due);

        let by_row = get_issue_by_row_id(&db, row_id).await.unwrap().unwrap();
        assert_eq!(by_row, by_id);

        db.close().await.unwrap();
    }

    #[tokio::test]
    async fn absent_optional_fields_stay_absent() {
        let (db, _dir) = setup_db().await;
        insert_issue(&db, &make_issue(1, "New")).await.unwrap();

        let issue = get_issue(&db, 1).await.unwrap().unwrap();
        assert!(issue.owner.is_none());
        assert!(issue.effort.is_none());
        assert!(issue.due.is_none());
    }

    #[tokio::test]
    async fn missing_issue_returns_none() {
        let (db, _dir) = setup_db().await;
        assert!(get_issue(&db, 999).await.unwrap().is_none());
        assert!(get_issue_by_row_id(&db, 999).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn duplicate_public_id_is_a_storage_error() {
        let (db, _dir) = setup_db().await;
        insert_issue(&db, &make_issue(1, "New")).await.unwrap();
        let err = insert_issue(&db, &make_issue(1, "New")).await.unwrap_err();
        assert!(matches!(err, TrackerError::Storage { .. }));
    }

    #[tokio::test]
    async fn list_without_filter_returns_everything_in_insert_order() {
        let (db, _dir) = setup_db().await;
        insert_issue(&db, &make_issue(1, "New")).await.unwrap();
        insert_issue(&db, &make_issue(2, "Fixed")).await.unwrap();
        insert_issue(&db, &make_issue(3, "Closed")).await.unwrap();

        let all = list_issues(&db, None).await.unwrap();
        let ids: Vec<i64> = all.iter().map(|i| i.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[tokio::test]
    async fn status_filter_is_exact_and_case_sensitive() {
        let (db, _dir) = setup_db().await;
        insert_issue(&db, &make_issue(1, "New")).await.unwrap();
        insert_issue(&db, &make_issue(2, "Fixed")).await.unwrap();
        insert_issue(&db, &make_issue(3, "Fixed")).await.unwrap();

        let fixed = list_issues(&db, Some("Fixed")).await.unwrap();
        assert_eq!(fixed.len(), 2);
        assert!(fixed.iter().all(|i| i.status == "Fixed"));

        assert!(list_issues(&db, Some("fixed")).await.unwrap().is_empty());
        assert!(list_issues(&db, Some("Assigned")).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn corrupt_stored_date_is_reported() {
        let (db, _dir) = setup_db().await;
        db.connection()
            .call(|conn| -> Result<(), rusqlite::Error> {
                conn.execute(
                    "INSERT INTO issues (id, title, status, created) VALUES (1, 'abc', 'New', 'yesterday')",
                    [],
                )?;
                Ok(())
            })
            .await
            .unwrap();

        let err = get_issue(&db, 1).await.unwrap_err();
        assert!(matches!(err, TrackerError::Storage { .. }));
    }

    #[tokio::test]
    async fn row_ids_survive_vacuum() {
        let (db, _dir) = setup_db().await;
        for id in 1..=3 {
            insert_issue(&db, &make_issue(id, "New")).await.unwrap();
        }
        let before = get_issue(&db, 3).await.unwrap().unwrap().row_id;

        db.connection()
            .call(|conn| -> Result<(), rusqlite::Error> {
                conn.execute("DELETE FROM issues WHERE id = 1", [])?;
                conn.execute_batch("VACUUM;")
            })
            .await
            .unwrap();

        let after = get_issue(&db, 3).await.unwrap().unwrap();
        assert_eq!(after.row_id, before);
        assert_eq!(get_issue_by_row_id(&db, before).await.unwrap().unwrap().id, 3);
    }
}
