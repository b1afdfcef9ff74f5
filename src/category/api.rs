//! The JSON category API consumed by the blog frontend.
//!
//! These endpoints keep the request and response shapes the frontend was
//! built against: every response carries a `message` or a `category` key,
//! and error bodies are `{"message": "..."}`.

use std::sync::{Arc, Mutex};

use axum::{
    Json,
    extract::{FromRef, Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use rusqlite::Connection;
use serde::Deserialize;
use serde_json::json;

use crate::{
    AppState, Error,
    category::{
        CategoryId, CategoryName, Slug, create_category, delete_category, get_all_categories,
        get_category, update_category,
    },
};

/// The state needed for the category API endpoints.
#[derive(Debug, Clone)]
pub struct CategoryApiState {
    pub db_connection: Arc<Mutex<Connection>>,
}

impl FromRef<AppState> for CategoryApiState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            db_connection: state.db_connection.clone(),
        }
    }
}

/// The payload for creating a category.
///
/// Both fields are declared optional so that a missing field reports the
/// frontend's expected "Name and slug are required." message instead of a
/// deserialization error.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AddCategoryData {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub slug: Option<String>,
}

/// The payload for updating a category. Omitted fields keep their stored value.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct UpdateCategoryData {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub slug: Option<String>,
}

/// Handle requests to create a category.
pub async fn add_category_endpoint(
    State(state): State<CategoryApiState>,
    Json(payload): Json<AddCategoryData>,
) -> Response {
    // An empty string counts as missing, matching what the frontend sends
    // when a form field is left blank.
    let name = payload.name.filter(|name| !name.is_empty());
    let slug = payload.slug.filter(|slug| !slug.is_empty());

    let (Some(name), Some(slug)) = (name, slug) else {
        return Error::MissingCategoryFields.into_json_response();
    };

    let name = match CategoryName::new(&name) {
        Ok(name) => name,
        Err(error) => return error.into_json_response(),
    };

    let slug = match Slug::new(&slug) {
        Ok(slug) => slug,
        Err(error) => return error.into_json_response(),
    };

    let connection = match state.db_connection.lock() {
        Ok(connection) => connection,
        Err(error) => {
            tracing::error!("could not acquire database lock: {error}");
            return Error::DatabaseLockError.into_json_response();
        }
    };

    match create_category(name, slug, &connection) {
        Ok(category) => (
            StatusCode::CREATED,
            Json(json!({
                "message": "Category added successfully.",
                "category": category,
            })),
        )
            .into_response(),
        Err(error) => error.into_json_response(),
    }
}

/// Handle requests to fetch a single category by ID.
pub async fn show_category_endpoint(
    Path(category_id): Path<CategoryId>,
    State(state): State<CategoryApiState>,
) -> Response {
    let connection = match state.db_connection.lock() {
        Ok(connection) => connection,
        Err(error) => {
            tracing::error!("could not acquire database lock: {error}");
            return Error::DatabaseLockError.into_json_response();
        }
    };

    match get_category(category_id, &connection) {
        Ok(category) => Json(json!({ "category": category })).into_response(),
        Err(error) => error.into_json_response(),
    }
}

/// Handle requests to update a category.
///
/// The slug's uniqueness is checked the same as on create, so an update
/// cannot steal another category's slug.
pub async fn update_category_endpoint(
    Path(category_id): Path<CategoryId>,
    State(state): State<CategoryApiState>,
    Json(payload): Json<UpdateCategoryData>,
) -> Response {
    let new_name = match payload.name.filter(|name| !name.is_empty()) {
        Some(raw_name) => match CategoryName::new(&raw_name) {
            Ok(name) => Some(name),
            Err(error) => return error.into_json_response(),
        },
        None => None,
    };

    let new_slug = match payload.slug.filter(|slug| !slug.is_empty()) {
        Some(raw_slug) => match Slug::new(&raw_slug) {
            Ok(slug) => Some(slug),
            Err(error) => return error.into_json_response(),
        },
        None => None,
    };

    let connection = match state.db_connection.lock() {
        Ok(connection) => connection,
        Err(error) => {
            tracing::error!("could not acquire database lock: {error}");
            return Error::DatabaseLockError.into_json_response();
        }
    };

    match update_category(category_id, new_name, new_slug, &connection) {
        Ok(category) => Json(json!({
            "success": true,
            "message": "Category updated successfully.",
            "category": category,
        }))
        .into_response(),
        Err(error) => error.into_json_response(),
    }
}

/// Handle requests to delete a category.
///
/// Deletion is idempotent: deleting an ID that is already gone reports
/// success so that client retries cannot fail.
pub async fn delete_category_endpoint(
    Path(category_id): Path<CategoryId>,
    State(state): State<CategoryApiState>,
) -> Response {
    let connection = match state.db_connection.lock() {
        Ok(connection) => connection,
        Err(error) => {
            tracing::error!("could not acquire database lock: {error}");
            return Error::DatabaseLockError.into_json_response();
        }
    };

    match delete_category(category_id, &connection) {
        Ok(_) => Json(json!({
            "success": true,
            "message": "Category Deleted successfully.",
        }))
        .into_response(),
        Err(error) => error.into_json_response(),
    }
}

/// Handle requests to list all categories, ordered by name.
pub async fn all_categories_endpoint(State(state): State<CategoryApiState>) -> Response {
    let connection = match state.db_connection.lock() {
        Ok(connection) => connection,
        Err(error) => {
            tracing::error!("could not acquire database lock: {error}");
            return Error::DatabaseLockError.into_json_response();
        }
    };

    match get_all_categories(&connection) {
        Ok(categories) => Json(json!({ "category": categories })).into_response(),
        Err(error) => error.into_json_response(),
    }
}



#[cfg(test)]
mod update_category_api_tests {
    use std::sync::{Arc, Mutex};

    use axum::{
        Json,
        extract::{Path, State},
        http::StatusCode,
    };
    use rusqlite::Connection;

    use crate::{
        category::{
            Category, CategoryName, Slug,
            api::{CategoryApiState, UpdateCategoryData, update_category_endpoint},
            create_category, create_category_table,
        },
        test_utils::parse_json_body,
    };

    fn get_state_with_category() -> (CategoryApiState, Category) {
        let connection =
            Connection::open_in_memory().expect("Could not open in-memory SQLite database");
        create_category_table(&connection).expect("Could not create category table");
        let category = create_category(
            CategoryName::new_unchecked("Technology"),
            Slug::new_unchecked("technology"),
            &connection,
        )
        .expect("Could not create test category");

        let state = CategoryApiState {
            db_connection: Arc::new(Mutex::new(connection)),
        };

        (state, category)
    }

    #[tokio::test]
    async fn updates_supplied_fields_and_keeps_the_rest() {
        let (state, category) = get_state_with_category();
        let payload = UpdateCategoryData {
            name: None,
            slug: Some("tech".to_owned()),
        };

        let response =
            update_category_endpoint(Path(category.id), State(state), Json(payload)).await;

        assert_eq!(response.status(), StatusCode::OK);
        let body = parse_json_body(response).await;
        assert_eq!(body["success"], true);
        assert_eq!(body["message"], "Category updated successfully.");
        assert_eq!(body["category"]["name"], "Technology");
        assert_eq!(body["category"]["slug"], "tech");
    }

    #[tokio::test]
    async fn unknown_id_returns_not_found() {
        let (state, category) = get_state_with_category();
        let payload = UpdateCategoryData {
            name: Some("Updated".to_owned()),
            slug: None,
        };

        let response =
            update_category_endpoint(Path(category.id + 123), State(state), Json(payload)).await;

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let body = parse_json_body(response).await;
        assert_eq!(body["message"], "Data not found.");
    }

    #[tokio::test]
    async fn taken_slug_returns_conflict() {
        let (state, category) = get_state_with_category();
        {
            let connection = state.db_connection.lock().unwrap();
            create_category(
                CategoryName::new_unchecked("Travel"),
                Slug::new_unchecked("travel"),
                &connection,
            )
            .expect("Could not create test category");
        }
        let payload = UpdateCategoryData {
            name: None,
            slug: Some("travel".to_owned()),
        };

        let response =
            update_category_endpoint(Path(category.id), State(state), Json(payload)).await;

        assert_eq!(response.status(), StatusCode::CONFLICT);
        let body = parse_json_body(response).await;
        assert_eq!(body["message"], "Category slug already exists.");
    }

    #[tokio::test]
    async fn invalid_slug_returns_bad_request() {
        let (state, category) = get_state_with_category();
        let payload = UpdateCategoryData {
            name: None,
            slug: Some("Tech News".to_owned()),
        };

        let response =
            update_category_endpoint(Path(category.id), State(state), Json(payload)).await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = parse_json_body(response).await;
        assert_eq!(
            body["message"],
            "Slug may only contain lowercase letters, digits, and hyphens"
        );
    }
}
