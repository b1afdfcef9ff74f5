//! Defines the errors that may occur in the application, and how to convert them into HTTP
//! responses for HTML pages, htmx fragments, and the JSON API.

use axum::{
    Json,
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use serde_json::json;

use crate::{
    alert::Alert, html::error_view, internal_server_error::InternalServerError,
    not_found::NotFoundError,
};

/// The errors that may occur in the application.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum Error {
    /// The provided log-in credentials did not match a user.
    #[error("invalid email or password")]
    InvalidCredentials,

    /// The logged-in user does not have the administrator role.
    #[error("this action requires an administrator account")]
    Forbidden,

    /// The request did not contain an auth cookie.
    #[error("no auth cookie found in the cookie jar")]
    CookieMissing,

    /// The auth cookie did not contain a valid token.
    #[error("the auth cookie does not contain a valid token")]
    InvalidAuthCookie,

    /// The auth token has passed its expiry time.
    #[error("the auth token has expired")]
    ExpiredAuthToken,

    /// The provided password is too easy to guess.
    #[error("{0}")]
    TooWeak(String),

    /// An unexpected error occurred in the underlying hashing library.
    ///
    /// The error string should only be logged on the server, not shown to
    /// the client.
    #[error("an error occurred while hashing a password: {0}")]
    HashingError(String),

    /// A role string did not name a known role.
    #[error("unknown role \"{0}\", expected \"admin\" or \"author\"")]
    UnknownRole(String),

    /// The category name did not meet the minimum length.
    #[error("Category name must be at least 3 characters long")]
    CategoryNameTooShort,

    /// The slug did not meet the minimum length.
    #[error("Slug must be at least 3 characters long")]
    SlugTooShort,

    /// The slug contained characters that are not URL friendly.
    #[error("Slug may only contain lowercase letters, digits, and hyphens")]
    InvalidSlug,

    /// A create request left out the name or the slug.
    #[error("Name and slug are required.")]
    MissingCategoryFields,

    /// The slug is already taken by another category.
    #[error("Category slug already exists.")]
    DuplicateCategorySlug,

    /// The email address is already registered to another user.
    #[error("the email address is already in use")]
    DuplicateEmail,

    /// The requested resource does not exist in the database.
    #[error("the requested resource could not be found")]
    NotFound,

    /// An update referred to a category that is not in the database.
    #[error("tried to update a category that does not exist")]
    UpdateMissingCategory,

    /// A required environment variable is missing or empty.
    #[error("the environment variable '{0}' must be set")]
    MissingEnvVar(String),

    /// An unexpected SQL error.
    #[error("an unexpected SQL error occurred: {0}")]
    SqlError(rusqlite::Error),

    /// A value could not be serialized as JSON.
    #[error("could not serialize as JSON: {0}")]
    JSONSerializationError(String),

    /// The mutex guarding the database connection could not be locked.
    #[error("could not acquire the database lock")]
    DatabaseLockError,
}

impl From<rusqlite::Error> for Error {
    fn from(value: rusqlite::Error) -> Self {
        match value {
            // Extended error code 2067 is a UNIQUE constraint violation. The message names
            // the column, which tells us which constraint was hit.
            rusqlite::Error::SqliteFailure(sql_error, Some(ref description))
                if sql_error.extended_code == 2067 && description.ends_with("category.slug") =>
            {
                Error::DuplicateCategorySlug
            }
            rusqlite::Error::SqliteFailure(sql_error, Some(ref description))
                if sql_error.extended_code == 2067 && description.ends_with("user.email") =>
            {
                Error::DuplicateEmail
            }
            rusqlite::Error::QueryReturnedNoRows => Error::NotFound,
            error => {
                tracing::error!("an unhandled SQL error occurred: {error}");
                Error::SqlError(error)
            }
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Error::NotFound => NotFoundError.into_response(),
            Error::Forbidden => (
                StatusCode::FORBIDDEN,
                Html(
                    error_view(
                        "Access Denied",
                        "403",
                        "Access denied: Admins only.",
                        "Sign in with an administrator account to manage the blog.",
                    )
                    .into_string(),
                ),
            )
                .into_response(),
            Error::DatabaseLockError => InternalServerError::default().into_response(),
            error => {
                tracing::error!("An unexpected error occurred: {error}");

                InternalServerError::default().into_response()
            }
        }
    }
}

impl Error {
    /// Convert the error into a response that renders an alert in the page's alert container.
    pub fn into_alert_response(self) -> Response {
        let (status_code, alert) = match self {
            Error::UpdateMissingCategory => (
                StatusCode::NOT_FOUND,
                Alert::Error {
                    message: "Could not update category".to_owned(),
                    details: "The category could not be found. It may have been deleted."
                        .to_owned(),
                },
            ),
            Error::DuplicateCategorySlug => (
                StatusCode::CONFLICT,
                Alert::Error {
                    message: "Duplicate slug".to_owned(),
                    details: "Another category already uses this slug. Choose a different slug \
                        or edit the existing category."
                        .to_owned(),
                },
            ),
            Error::CategoryNameTooShort | Error::SlugTooShort | Error::InvalidSlug => (
                StatusCode::BAD_REQUEST,
                Alert::ErrorSimple {
                    message: self.to_string(),
                },
            ),
            _ => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Alert::Error {
                    message: "Something went wrong".to_owned(),
                    details: "An unexpected error occurred, check the server logs for more \
                        details."
                        .to_owned(),
                },
            ),
        };

        (status_code, alert.into_html()).into_response()
    }

    /// Convert the error into a JSON response with a `message` body.
    ///
    /// The messages for client facing errors (missing fields, duplicate slug, not found)
    /// match what the blog frontend expects. Everything else reports its own description
    /// with a 500 status.
    pub fn into_json_response(self) -> Response {
        let (status_code, message) = match self {
            Error::MissingCategoryFields
            | Error::CategoryNameTooShort
            | Error::SlugTooShort
            | Error::InvalidSlug => (StatusCode::BAD_REQUEST, self.to_string()),
            Error::DuplicateCategorySlug => (StatusCode::CONFLICT, self.to_string()),
            Error::NotFound | Error::UpdateMissingCategory => {
                (StatusCode::NOT_FOUND, "Data not found.".to_owned())
            }
            Error::InvalidCredentials => (
                StatusCode::UNAUTHORIZED,
                "Invalid login credentials.".to_owned(),
            ),
            Error::CookieMissing | Error::InvalidAuthCookie | Error::ExpiredAuthToken => (
                StatusCode::UNAUTHORIZED,
                "Authentication required.".to_owned(),
            ),
            Error::Forbidden => (
                StatusCode::FORBIDDEN,
                "Access denied: Admins only".to_owned(),
            ),
            error => {
                tracing::error!("An unexpected error occurred: {error}");

                (StatusCode::INTERNAL_SERVER_ERROR, error.to_string())
            }
        };

        (status_code, Json(json!({ "message": message }))).into_response()
    }
}
