//! Database operations for categories.

use rusqlite::{Connection, Row};

use crate::{
    Error,
    category::{Category, CategoryId, CategoryName, Slug},
};

/// The number of rows changed by a delete statement.
pub type RowsAffected = usize;

/// Create a category and return it with its generated ID.
///
/// # Errors
///
/// Returns an [Error::DuplicateCategorySlug] if another category already uses `slug`.
pub fn create_category(
    name: CategoryName,
    slug: Slug,
    connection: &Connection,
) -> Result<Category, Error> {
    connection.execute(
        "INSERT INTO category (name, slug) VALUES (?1, ?2);",
        (name.as_ref(), slug.as_ref()),
    )?;

    let id = connection.last_insert_rowid();

    Ok(Category { id, name, slug })
}

/// Retrieve a single category by ID.
pub fn get_category(category_id: CategoryId, connection: &Connection) -> Result<Category, Error> {
    connection
        .prepare("SELECT id, name, slug FROM category WHERE id = :id;")?
        .query_row(&[(":id", &category_id)], map_row)
        .map_err(|error| error.into())
}

/// Retrieve all categories ordered alphabetically by name.
pub fn get_all_categories(connection: &Connection) -> Result<Vec<Category>, Error> {
    connection
        .prepare("SELECT id, name, slug FROM category ORDER BY name ASC;")?
        .query_map([], map_row)?
        .map(|maybe_category| maybe_category.map_err(|error| error.into()))
        .collect()
}

/// Update a category and return the stored result. Fields passed as `None`
/// keep their current value.
///
/// # Errors
///
/// Returns an [Error::UpdateMissingCategory] if `category_id` is not in the database,
/// or an [Error::DuplicateCategorySlug] if `new_slug` is taken by another category.
pub fn update_category(
    category_id: CategoryId,
    new_name: Option<CategoryName>,
    new_slug: Option<Slug>,
    connection: &Connection,
) -> Result<Category, Error> {
    let rows_affected = connection.execute(
        "UPDATE category
        SET name = COALESCE(?1, name), slug = COALESCE(?2, slug)
        WHERE id = ?3",
        (
            new_name.as_ref().map(|name| name.as_ref()),
            new_slug.as_ref().map(|slug| slug.as_ref()),
            category_id,
        ),
    )?;

    if rows_affected == 0 {
        return Err(Error::UpdateMissingCategory);
    }

    get_category(category_id, connection)
}

/// Delete a category by ID.
///
/// Deleting an ID that is not in the database is not an error. Callers that
/// care can check the returned row count.
pub fn delete_category(
    category_id: CategoryId,
    connection: &Connection,
) -> Result<RowsAffected, Error> {
    connection
        .execute("DELETE FROM category WHERE id = ?1", [category_id])
        .map_err(Error::from)
}

/// Initialize the category table and indexes.
pub fn create_category_table(connection: &Connection) -> Result<(), rusqlite::Error> {
    connection.execute_batch(
        "CREATE TABLE IF NOT EXISTS category (
            id INTEGER PRIMARY KEY,
            name TEXT NOT NULL,
            slug TEXT NOT NULL UNIQUE
        );

        CREATE INDEX IF NOT EXISTS idx_category_slug ON category(slug);",
    )?;

    Ok(())
}

fn map_row(row: &Row) -> Result<Category, rusqlite::Error> {
    let id = row.get(0)?;
    let raw_name: String = row.get(1)?;
    let raw_slug: String = row.get(2)?;

    Ok(Category {
        id,
        name: CategoryName::new_unchecked(&raw_name),
        slug: Slug::new_unchecked(&raw_slug),
    })
}

#[cfg(test)]
mod category_name_tests {
    use crate::{Error, category::CategoryName};

    #[test]
    fn new_fails_on_short_string() {
        let name = CategoryName::new("ab");

        assert_eq!(name, Err(Error::CategoryNameTooShort));
    }

    #[test]
    fn new_fails_on_whitespace_padding() {
        let name = CategoryName::new("  a  ");

        assert_eq!(name, Err(Error::CategoryNameTooShort));
    }

    #[test]
    fn new_trims_whitespace() {
        let name = CategoryName::new("  Technology  ").expect("Could not create category name");

        assert_eq!(name.as_ref(), "Technology");
    }

    #[test]
    fn new_succeeds_at_minimum_length() {
        let name = CategoryName::new("Art");

        assert!(name.is_ok());
    }
}
