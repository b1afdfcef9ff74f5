//! Users of the admin panel and their database queries.

use std::{fmt::Display, str::FromStr};

use email_address::EmailAddress;
use rusqlite::{Connection, Row, types::Type};
use serde::{Deserialize, Serialize};

use crate::{Error, auth::password::PasswordHash};

/// A newtype wrapper for integer user IDs.
/// This helps disambiguate user IDs from other types of IDs, leading to better compile time
/// errors, and more flexible generics that can have distinct implementations for multiple ID types.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UserID(i64);

impl UserID {
    pub fn new(id: i64) -> Self {
        Self(id)
    }

    pub fn as_i64(&self) -> i64 {
        self.0
    }
}

impl Display for UserID {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

/// What a user is allowed to do in the application.
///
/// Authors can write blog posts through the public API but only admins may
/// manage the blog through the admin panel.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// May manage the blog through the admin panel.
    Admin,
    /// May write blog posts but not manage the blog.
    Author,
}

impl Role {
    /// The string stored in the user table for this role.
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::Author => "author",
        }
    }
}

impl Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Role {
    type Err = Error;

    fn from_str(string: &str) -> Result<Self, Self::Err> {
        match string {
            "admin" => Ok(Role::Admin),
            "author" => Ok(Role::Author),
            _ => Err(Error::UnknownRole(string.to_string())),
        }
    }
}

/// A user of the application.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: UserID,
    pub email: EmailAddress,
    pub role: Role,
    pub password_hash: PasswordHash,
}

/// Create the user table in the database `connection`.
pub fn create_user_table(connection: &Connection) -> Result<(), rusqlite::Error> {
    connection.execute(
        "CREATE TABLE IF NOT EXISTS user (
            id INTEGER PRIMARY KEY,
            email TEXT NOT NULL UNIQUE,
            role TEXT NOT NULL DEFAULT 'author',
            password TEXT NOT NULL
        )",
        (),
    )?;

    Ok(())
}

/// Create a user with `email` and `role` in the database `connection`.
///
/// # Errors
///
/// Returns [Error::DuplicateEmail] if a user with `email` already exists.
pub fn create_user(
    email: EmailAddress,
    role: Role,
    password_hash: PasswordHash,
    connection: &Connection,
) -> Result<User, Error> {
    connection.execute(
        "INSERT INTO user (email, role, password) VALUES (?1, ?2, ?3)",
        (email.as_str(), role.as_str(), password_hash.to_string()),
    )?;

    let id = UserID::new(connection.last_insert_rowid());

    Ok(User {
        id,
        email,
        role,
        password_hash,
    })
}

/// Get the user with `user_id` from the database `connection`.
///
/// # Errors
///
/// Returns [Error::NotFound] if there is no user with `user_id`.
pub fn get_user_by_id(user_id: UserID, connection: &Connection) -> Result<User, Error> {
    connection
        .prepare("SELECT id, email, role, password FROM user WHERE id = :id")?
        .query_row(&[(":id", &user_id.as_i64())], map_user_row)
        .map_err(|error| error.into())
}

/// Get the user with `email` from the database `connection`.
///
/// # Errors
///
/// Returns [Error::NotFound] if there is no user with `email`.
pub fn get_user_by_email(email: &EmailAddress, connection: &Connection) -> Result<User, Error> {
    connection
        .prepare("SELECT id, email, role, password FROM user WHERE email = :email")?
        .query_row(&[(":email", &email.as_str())], map_user_row)
        .map_err(|error| error.into())
}

/// Count the users in the database `connection`.
pub fn count_users(connection: &Connection) -> Result<usize, Error> {
    connection
        .prepare("SELECT COUNT(id) FROM user")?
        .query_row([], |row| row.get(0))
        .map_err(|error| error.into())
}

fn map_user_row(row: &Row) -> Result<User, rusqlite::Error> {
    let raw_id = row.get(0)?;
    let raw_email: String = row.get(1)?;
    let raw_role: String = row.get(2)?;
    let raw_password_hash: String = row.get(3)?;

    let email = EmailAddress::from_str(&raw_email).map_err(|error| {
        rusqlite::Error::FromSqlConversionFailure(1, Type::Text, Box::new(error))
    })?;
    let role = Role::from_str(&raw_role).map_err(|_| {
        rusqlite::Error::FromSqlConversionFailure(
            2,
            Type::Text,
            format!("unknown role \"{raw_role}\"").into(),
        )
    })?;

    Ok(User {
        id: UserID::new(raw_id),
        email,
        role,
        password_hash: PasswordHash::new_unchecked(&raw_password_hash),
    })
}
