//! Core category domain types.

use std::{fmt::Display, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::Error;

/// The minimum number of characters in a category name.
pub const CATEGORY_NAME_MIN_LENGTH: usize = 3;

/// The minimum number of characters in a slug.
pub const SLUG_MIN_LENGTH: usize = 3;

/// A validated category name.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, Hash)]
pub struct CategoryName(String);

impl CategoryName {
    /// Create a category name.
    ///
    /// # Errors
    ///
    /// This function will return an [Error::CategoryNameTooShort] if the trimmed `name` is
    /// shorter than [CATEGORY_NAME_MIN_LENGTH] characters.
    pub fn new(name: &str) -> Result<Self, Error> {
        let name = name.trim();

        if name.chars().count() < CATEGORY_NAME_MIN_LENGTH {
            Err(Error::CategoryNameTooShort)
        } else {
            Ok(Self(name.to_string()))
        }
    }

    /// Create a category name without validation.
    ///
    /// The caller should ensure that the string meets the minimum length.
    ///
    /// This function has `_unchecked` in the name but is not `unsafe`, because if the length invariant is violated it will cause incorrect behaviour but not affect memory safety.
    pub fn new_unchecked(name: &str) -> Self {
        Self(name.to_string())
    }
}

impl AsRef<str> for CategoryName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl FromStr for CategoryName {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CategoryName::new(s)
    }
}

impl Display for CategoryName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A validated URL slug.
///
/// Slugs identify a category in blog post URLs, so they are restricted to
/// lowercase ASCII letters, digits, and hyphens.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, Hash)]
pub struct Slug(String);

impl Slug {
    /// Create a slug.
    ///
    /// # Errors
    ///
    /// This function will return an [Error::SlugTooShort] if the trimmed `slug` is shorter
    /// than [SLUG_MIN_LENGTH] characters, or an [Error::InvalidSlug] if it contains
    /// characters other than lowercase ASCII letters, digits, and hyphens.
    pub fn new(slug: &str) -> Result<Self, Error> {
        let slug = slug.trim();

        if slug.chars().count() < SLUG_MIN_LENGTH {
            return Err(Error::SlugTooShort);
        }

        let is_url_safe = slug
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-');

        if !is_url_safe {
            return Err(Error::InvalidSlug);
        }

        Ok(Self(slug.to_string()))
    }

    /// Create a slug without validation.
    pub fn new_unchecked(slug: &str) -> Self {
        Self(slug.to_string())
    }
}

impl AsRef<str> for Slug {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl FromStr for Slug {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Slug::new(s)
    }
}

impl Display for Slug {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Database identifier for a category.
pub type CategoryId = i64;

/// A label that groups blog posts (e.g., 'Technology', 'Travel').
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Hash)]
pub struct Category {
    pub id: CategoryId,
    pub name: CategoryName,
    pub slug: Slug,
}

/// Form data for category creation and editing.
#[derive(Debug, Serialize, Deserialize)]
pub struct CategoryFormData {
    pub name: String,
    pub slug: String,
}

/// Derive a URL slug from a category name.
///
/// Lowercases ASCII letters and collapses every run of other characters into
/// a single hyphen. This mirrors the suggestion the admin form shows while
/// the user types, the final slug is whatever the user submits.
pub fn slugify(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    let mut previous_was_hyphen = true;

    for c in name.chars() {
        if c.is_ascii_alphanumeric() {
            slug.push(c.to_ascii_lowercase());
            previous_was_hyphen = false;
        } else if !previous_was_hyphen {
            slug.push('-');
            previous_was_hyphen = true;
        }
    }

    if slug.ends_with('-') {
        slug.pop();
    }

    slug
}
