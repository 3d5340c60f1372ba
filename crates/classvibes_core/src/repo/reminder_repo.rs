//! Reminder repository contract and SQLite implementation.
//!
//! # Responsibility
//! - Persist reminders one row at a time, in insertion order.
//! - Report whether a mutation matched a row without treating a miss as error.
//!
//! # Invariants
//! - `list_reminders` order equals insertion order (`seq ASC`).
//! - `mark_read` never flips a read reminder back to unread.

use crate::model::reminder::{Reminder, ReminderCategory, ReminderId};
use crate::repo::{StoreError, StoreResult};
use rusqlite::{params, Connection, OptionalExtension, Row};
use uuid::Uuid;

const REMINDER_SELECT_SQL: &str = "SELECT
    id,
    title,
    message,
    due_at,
    category,
    is_read,
    created_at
FROM reminders";

/// Repository interface for reminder persistence.
pub trait ReminderRepository {
    fn insert_reminder(&self, reminder: &Reminder) -> StoreResult<()>;
    fn get_reminder(&self, id: ReminderId) -> StoreResult<Option<Reminder>>;
    fn list_reminders(&self) -> StoreResult<Vec<Reminder>>;
    /// Returns `true` when a row matched `id`.
    fn mark_read(&self, id: ReminderId) -> StoreResult<bool>;
    /// Returns `true` when a row was removed.
    fn delete_reminder(&self, id: ReminderId) -> StoreResult<bool>;
    fn count_unread(&self) -> StoreResult<u64>;
}

/// SQLite-backed reminder repository.
pub struct SqliteReminderRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteReminderRepository<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl ReminderRepository for SqliteReminderRepository<'_> {
    fn insert_reminder(&self, reminder: &Reminder) -> StoreResult<()> {
        self.conn.execute(
            "INSERT INTO reminders (
                id,
                title,
                message,
                due_at,
                category,
                is_read,
                created_at
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7);",
            params![
                reminder.id.to_string(),
                reminder.title.as_str(),
                reminder.message.as_str(),
                reminder.due_at,
                reminder.category.as_str(),
                i64::from(reminder.read),
                reminder.created_at,
            ],
        )?;
        Ok(())
    }

    fn get_reminder(&self, id: ReminderId) -> StoreResult<Option<Reminder>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{REMINDER_SELECT_SQL} WHERE id = ?1;"))?;
        let raw = stmt
            .query_row([id.to_string()], RawReminderRow::from_row)
            .optional()?;
        raw.map(RawReminderRow::into_reminder).transpose()
    }

    fn list_reminders(&self) -> StoreResult<Vec<Reminder>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{REMINDER_SELECT_SQL} ORDER BY seq ASC;"))?;
        let mut rows = stmt.query([])?;
        let mut reminders = Vec::new();

        while let Some(row) = rows.next()? {
            reminders.push(RawReminderRow::from_row(row)?.into_reminder()?);
        }

        Ok(reminders)
    }

    fn mark_read(&self, id: ReminderId) -> StoreResult<bool> {
        let changed = self.conn.execute(
            "UPDATE reminders SET is_read = 1 WHERE id = ?1;",
            [id.to_string()],
        )?;
        Ok(changed > 0)
    }

    fn delete_reminder(&self, id: ReminderId) -> StoreResult<bool> {
        let changed = self
            .conn
            .execute("DELETE FROM reminders WHERE id = ?1;", [id.to_string()])?;
        Ok(changed > 0)
    }

    fn count_unread(&self) -> StoreResult<u64> {
        let count: i64 = self.conn.query_row(
            "SELECT COUNT(*) FROM reminders WHERE is_read = 0;",
            [],
            |row| row.get(0),
        )?;
        u64::try_from(count)
            .map_err(|_| StoreError::InvalidData(format!("negative unread count `{count}`")))
    }
}

/// Untyped row as read from SQLite, decoded in a second step so that decode
/// failures become `StoreError::InvalidData` instead of SQL errors.
struct RawReminderRow {
    id: String,
    title: String,
    message: String,
    due_at: i64,
    category: String,
    is_read: i64,
    created_at: i64,
}

impl RawReminderRow {
    fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            id: row.get("id")?,
            title: row.get("title")?,
            message: row.get("message")?,
            due_at: row.get("due_at")?,
            category: row.get("category")?,
            is_read: row.get("is_read")?,
            created_at: row.get("created_at")?,
        })
    }

    fn into_reminder(self) -> StoreResult<Reminder> {
        let id = Uuid::parse_str(&self.id).map_err(|_| {
            StoreError::InvalidData(format!("invalid id `{}` in reminders.id", self.id))
        })?;
        let category = ReminderCategory::parse(&self.category).ok_or_else(|| {
            StoreError::InvalidData(format!(
                "invalid category `{}` in reminders.category",
                self.category
            ))
        })?;
        let read = match self.is_read {
            0 => false,
            1 => true,
            other => {
                return Err(StoreError::InvalidData(format!(
                    "invalid is_read value `{other}` in reminders.is_read"
                )));
            }
        };

        Ok(Reminder {
            id,
            title: self.title,
            message: self.message,
            due_at: self.due_at,
            category,
            read,
            created_at: self.created_at,
        })
    }
}
