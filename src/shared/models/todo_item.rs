/**
 * Todo Item Model
 *
 * Items belong to exactly one list through the `lists_items` join table.
 *
 * # Deadlines
 *
 * - On creation a missing deadline defaults to seven days from now, and a
 *   deadline strictly before now is rejected
 * - On update a new deadline is compared against the item's creation time
 */

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::shared::error::SharedError;
use crate::shared::models::todo_list::{check_description, check_title};

/// Deadline applied when a new item carries none
pub const DEFAULT_DEADLINE_DAYS: i64 = 7;

/// A todo item as stored and returned to clients
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct TodoItem {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub created_at: DateTime<Utc>,
    pub deadline: DateTime<Utc>,
    pub completed: bool,
}

/// Payload for creating an item
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateTodoItemDto {
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub deadline: Option<DateTime<Utc>>,
}

impl CreateTodoItemDto {
    /// Validate the payload against `now` and resolve the deadline
    pub fn into_new_item(self, now: DateTime<Utc>) -> Result<NewTodoItem, SharedError> {
        check_title(&self.title)?;
        check_description(&self.description)?;

        let deadline = self
            .deadline
            .unwrap_or_else(|| now + Duration::days(DEFAULT_DEADLINE_DAYS));
        if deadline < now {
            return Err(SharedError::validation(
                "deadline",
                "deadline cannot be in the past",
            ));
        }

        Ok(NewTodoItem {
            title: self.title,
            description: self.description,
            created_at: now,
            deadline,
        })
    }
}

/// A validated item ready to be inserted
#[derive(Debug, Clone)]
pub struct NewTodoItem {
    pub title: String,
    pub description: String,
    pub created_at: DateTime<Utc>,
    pub deadline: DateTime<Utc>,
}

/// Partial update of an item; absent fields stay untouched
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UpdateTodoItemDto {
    pub title: Option<String>,
    pub description: Option<String>,
    pub deadline: Option<DateTime<Utc>>,
    pub completed: Option<bool>,
}

impl UpdateTodoItemDto {
    /// True when no field is present
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.description.is_none()
            && self.deadline.is_none()
            && self.completed.is_none()
    }

    /// Reject an empty patch and re-check present text fields
    pub fn validate(&self) -> Result<(), SharedError> {
        if self.is_empty() {
            return Err(SharedError::EmptyPatch);
        }
        if let Some(title) = &self.title {
            check_title(title)?;
        }
        if let Some(description) = &self.description {
            check_description(description)?;
        }
        Ok(())
    }

    /// Check a present deadline against the item's creation time
    pub fn validate_deadline(&self, created_at: DateTime<Utc>) -> Result<(), SharedError> {
        match self.deadline {
            Some(deadline) if deadline < created_at => Err(SharedError::validation(
                "deadline",
                "deadline cannot be in the past",
            )),
            _ => Ok(()),
        }
    }
}
