/**
 * Todo List Model
 *
 * A list carries no owner field: ownership lives in the `users_lists` join
 * table and is applied by every store query.
 */

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::shared::error::SharedError;

/// Minimum title length for lists and items
pub const MIN_TITLE_LENGTH: usize = 3;

/// Minimum description length for lists and items
pub const MIN_DESCRIPTION_LENGTH: usize = 3;

/// Maximum number of lists a single user may own
pub const MAX_LISTS_PER_USER: i64 = 5;

/// A todo list as stored and returned to clients
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct TodoList {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub created_at: DateTime<Utc>,
}

/// Payload for creating a list
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateTodoListDto {
    pub title: String,
    pub description: String,
}

impl CreateTodoListDto {
    pub fn validate(&self) -> Result<(), SharedError> {
        check_title(&self.title)?;
        check_description(&self.description)
    }
}

/// Partial update of a list; absent fields stay untouched
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UpdateTodoListDto {
    pub title: Option<String>,
    pub description: Option<String>,
}

impl UpdateTodoListDto {
    /// True when no field is present
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.description.is_none()
    }

    /// Reject an empty patch, then re-check every present field
    ///
    /// A present empty string is a value like any other and fails the length
    /// rule.
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
}

pub(crate) fn check_title(title: &str) -> Result<(), SharedError> {
    if title.chars().count() < MIN_TITLE_LENGTH {
        return Err(SharedError::validation("title", "title length is too short"));
    }
    Ok(())
}

pub(crate) fn check_description(description: &str) -> Result<(), SharedError> {
    if description.chars().count() < MIN_DESCRIPTION_LENGTH {
        return Err(SharedError::validation(
            "description",
            "description length is too short",
        ));
    }
    Ok(())
}
