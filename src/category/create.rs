//! Category creation form and the live slug preview endpoint.

use std::sync::{Arc, Mutex};

use axum::{
    Form,
    extract::{FromRef, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use axum_htmx::HxRedirect;
use maud::{Markup, html};
use rusqlite::Connection;
use serde::Deserialize;

use crate::{
    AppState, Error,
    category::{
        CategoryName, Slug, create_category,
        domain::{CATEGORY_NAME_MIN_LENGTH, CategoryFormData, SLUG_MIN_LENGTH, slugify},
    },
    endpoints,
    html::{BUTTON_PRIMARY_STYLE, FORM_LABEL_STYLE, FORM_TEXT_INPUT_STYLE, loading_spinner},
};

/// The state needed for creating a category.
#[derive(Debug, Clone)]
pub struct CreateCategoryEndpointState {
    pub db_connection: Arc<Mutex<Connection>>,
}

impl FromRef<AppState> for CreateCategoryEndpointState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            db_connection: state.db_connection.clone(),
        }
    }
}

/// Handle category creation form submission.
pub async fn create_category_endpoint(
    State(state): State<CreateCategoryEndpointState>,
    Form(form_data): Form<CategoryFormData>,
) -> Response {
    let name = match CategoryName::new(&form_data.name) {
        Ok(name) => name,
        Err(error) => {
            return new_category_form(&form_data.name, &form_data.slug, &format!("Error: {error}"))
                .into_response();
        }
    };

    let slug = match Slug::new(&form_data.slug) {
        Ok(slug) => slug,
        Err(error) => {
            return new_category_form(&form_data.name, &form_data.slug, &format!("Error: {error}"))
                .into_response();
        }
    };

    let connection = match state.db_connection.lock() {
        Ok(connection) => connection,
        Err(error) => {
            tracing::error!("could not acquire database lock: {error}");
            return Error::DatabaseLockError.into_alert_response();
        }
    };

    match create_category(name, slug, &connection) {
        Ok(_) => (
            HxRedirect(endpoints::CATEGORIES_VIEW.to_owned()),
            StatusCode::SEE_OTHER,
        )
            .into_response(),
        Err(error) => {
            tracing::error!("Could not create category: {error}");

            error.into_alert_response()
        }
    }
}

/// The query string for the slug preview endpoint.
#[derive(Debug, Deserialize)]
pub struct SlugPreviewQuery {
    #[serde(default)]
    pub name: String,
}

/// Return the slug input pre-filled with a slug derived from `name`.
///
/// The category name input triggers this endpoint as the user types, so the
/// slug field follows the name until the user submits or edits the slug by
/// hand.
pub async fn slug_preview_endpoint(Query(query): Query<SlugPreviewQuery>) -> Markup {
    slug_input(&slugify(&query.name))
}

/// The category creation form, shown at the top of the category overview page.
pub(super) fn new_category_form(name: &str, slug: &str, error_message: &str) -> Markup {
    html! {
        form
            hx-post=(endpoints::POST_CATEGORY)
            hx-target-error="#alert-container"
            hx-indicator="#indicator"
            hx-disabled-elt="#name, #slug, #submit-button"
            class="w-full space-y-4 md:space-y-6"
        {
            div
            {
                label
                    for="name"
                    class=(FORM_LABEL_STYLE)
                {
                    "Category Name"
                }

                input
                    id="name"
                    type="text"
                    name="name"
                    placeholder="Category Name"
                    required
                    minlength=(CATEGORY_NAME_MIN_LENGTH)
                    value=(name)
                    hx-get=(endpoints::SLUG_PREVIEW)
                    hx-trigger="input changed delay:300ms"
                    hx-target="#slug"
                    hx-swap="outerHTML"
                    class=(FORM_TEXT_INPUT_STYLE);
            }

            div
            {
                label
                    for="slug"
                    class=(FORM_LABEL_STYLE)
                {
                    "Slug"
                }

                (slug_input(slug))

                span class="block mt-1 text-xs text-gray-500 dark:text-gray-400"
                {
                    "Follows the name as you type. Edit it before saving for a different URL."
                }
            }

            @if !error_message.is_empty() {
                p class="text-red-600 dark:text-red-400"
                {
                    (error_message)
                }
            }

            button type="submit" id="submit-button" class=(BUTTON_PRIMARY_STYLE)
            {
                span class="inline htmx-indicator" id="indicator"
                {
                    (loading_spinner())
                }
                "Add Category"
            }
        }
    }
}

/// The slug input, kept in its own fragment so the preview endpoint can swap it.
pub(super) fn slug_input(value: &str) -> Markup {
    html! {
        input
            id="slug"
            type="text"
            name="slug"
            placeholder="category-slug"
            required
            minlength=(SLUG_MIN_LENGTH)
            pattern="[a-z0-9-]+"
            value=(value)
            class=(FORM_TEXT_INPUT_STYLE);
    }
}
