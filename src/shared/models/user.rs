/**
 * User Model
 *
 * Identity record persisted by the credential store, and the registration
 * payload with its format rules.
 *
 * # Registration Rules
 *
 * - Email: one or more characters from `[A-Za-z0-9._%+-]` before the `@`,
 *   a domain of `[A-Za-z0-9.-]` characters and a top-level domain of at least
 *   two letters
 * - Username: at least 3 characters from `[A-Za-z0-9_-]`
 * - Password: more than 8 characters
 */

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::shared::error::SharedError;

/// Minimum username length
const MIN_USERNAME_LENGTH: usize = 3;

/// Minimum length of the part of an email before `@`
const MIN_EMAIL_LOCAL_LENGTH: usize = 1;

/// Passwords must be strictly longer than this
const PASSWORD_LENGTH_FLOOR: usize = 8;

/// User struct representing a registered account
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct User {
    /// Unique user ID (UUID)
    pub id: Uuid,
    /// User email address (unique)
    pub email: String,
    /// Username (unique)
    pub username: String,
    /// Hashed password (bcrypt), never serialized
    #[serde(skip_serializing, default)]
    pub password_hash: String,
}

/// Registration payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateUserDto {
    pub email: String,
    pub username: String,
    pub password: String,
}

impl CreateUserDto {
    /// Check the registration format rules, email first
    pub fn validate(&self) -> Result<(), SharedError> {
        if !is_valid_email(&self.email) {
            return Err(SharedError::validation("email", "email is not valid"));
        }
        if !is_valid_username(&self.username) {
            return Err(SharedError::validation("username", "username is not valid"));
        }
        if !is_valid_password(&self.password) {
            return Err(SharedError::validation("password", "password is not valid"));
        }
        Ok(())
    }
}

/// A user row ready to be inserted: the password is already hashed
#[derive(Debug, Clone)]
pub struct NewUser {
    pub email: String,
    pub username: String,
    pub password_hash: String,
}

fn is_email_local_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '%' | '+' | '-')
}

fn is_email_domain_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '.' | '-')
}

/// Validate email format
///
/// The domain is split at its last dot: everything before it must be
/// non-empty domain characters, everything after it at least two letters.
pub fn is_valid_email(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };

    if local.chars().count() < MIN_EMAIL_LOCAL_LENGTH || !local.chars().all(is_email_local_char) {
        return false;
    }

    let Some((host, tld)) = domain.rsplit_once('.') else {
        return false;
    };

    !host.is_empty()
        && host.chars().all(is_email_domain_char)
        && tld.len() >= 2
        && tld.chars().all(|c| c.is_ascii_alphabetic())
}

/// Validate username format
///
/// Usernames must be at least 3 characters long and contain only
/// alphanumeric characters, underscores and hyphens.
pub fn is_valid_username(username: &str) -> bool {
    username.chars().count() >= MIN_USERNAME_LENGTH
        && username
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
}

/// Validate password length
pub fn is_valid_password(password: &str) -> bool {
    password.chars().count() > PASSWORD_LENGTH_FLOOR
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dto(email: &str, username: &str, password: &str) -> CreateUserDto {
        CreateUserDto {
            email: email.to_string(),
            username: username.to_string(),
            password: password.to_string(),
        }
    }

    #[test]
    fn test_valid_emails() {
        assert!(is_valid_email("abc@example.com"));
        assert!(is_valid_email("first.last+tag@mail.example.org"));
        assert!(is_valid_email("a_b@x-y.io"));
        assert!(is_valid_email("a@x.com"));
    }

    #[test]
    fn test_invalid_emails() {
        assert!(!is_valid_email("@x.com"));
        assert!(!is_valid_email("missing-at.example.com"));
        assert!(!is_valid_email("abc@nodot"));
        assert!(!is_valid_email("abc@.com"));
        assert!(!is_valid_email("abc@example.c"));
        assert!(!is_valid_email("abc@example.c0m"));
        assert!(!is_valid_email("abc@exa@mple.com"));
        assert!(!is_valid_email("a bc@example.com"));
    }

    #[test]
    fn test_username_rules() {
        assert!(is_valid_username("alice"));
        assert!(is_valid_username("bob_the-builder42"));
        assert!(!is_valid_username("al"));
        assert!(!is_valid_username("alice!"));
        assert!(!is_valid_username("ali ce"));
    }

    #[test]
    fn test_password_rules() {
        assert!(is_valid_password("password123"));
        assert!(is_valid_password("123456789"));
        assert!(!is_valid_password("12345678"));
        assert!(!is_valid_password(""));
    }

    #[test]
    fn test_validate_reports_first_failing_field() {
        let err = dto("bad", "x", "short").validate().unwrap_err();
        assert_eq!(err.message(), "email is not valid");

        let err = dto("alice@example.com", "x", "short").validate().unwrap_err();
        assert_eq!(err.message(), "username is not valid");

        let err = dto("alice@example.com", "alice", "short").validate().unwrap_err();
        assert_eq!(err.message(), "password is not valid");

        assert!(dto("alice@example.com", "alice", "password123").validate().is_ok());
    }

    #[test]
    fn test_password_hash_is_not_serialized() {
        let user = User {
            id: Uuid::new_v4(),
            email: "alice@example.com".to_string(),
            username: "alice".to_string(),
            password_hash: "$2b$12$secret".to_string(),
        };
        let json = serde_json::to_value(&user).unwrap();
        assert!(json.get("password_hash").is_none());
        assert_eq!(json["username"], "alice");
    }
}
