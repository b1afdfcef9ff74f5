//! The application's route URIs.
//!
//! Routes fall into three groups: the admin pages, the JSON API that the blog
//! frontend consumes, and the `/api` routes that back the admin panel's htmx
//! forms. For endpoints that take a parameter, e.g., '/category/show/{category_id}',
//! use [format_endpoint].

/// The root route which redirects to the category overview or log in page.
pub const ROOT: &str = "/";
/// The landing page for logged in administrators.
pub const CATEGORIES_VIEW: &str = "/admin/categories";
/// The page for editing an existing category.
pub const EDIT_CATEGORY_VIEW: &str = "/admin/categories/{category_id}/edit";
/// The route for getting the log in page.
pub const LOG_IN_VIEW: &str = "/log_in";
/// The page to display when an internal server error occurs.
pub const INTERNAL_ERROR_VIEW: &str = "/error";
/// The route for static files.
pub const STATIC: &str = "/static";

/// The route to create a category (JSON).
pub const ADD_CATEGORY_API: &str = "/category/add";
/// The route to update a category (JSON).
pub const UPDATE_CATEGORY_API: &str = "/category/update/{category_id}";
/// The route to fetch a single category (JSON).
pub const SHOW_CATEGORY_API: &str = "/category/show/{category_id}";
/// The route to delete a category (JSON).
pub const DELETE_CATEGORY_API: &str = "/category/delete/{category_id}";
/// The route to list all categories (JSON).
pub const ALL_CATEGORIES_API: &str = "/category/all-category";
/// The route for logging in an API client (JSON).
pub const LOG_IN_JSON_API: &str = "/auth/login";
/// The route for an API client to log out the current user.
pub const LOG_OUT_JSON_API: &str = "/auth/logout";

/// The route to request a cup of coffee (experimental).
pub const COFFEE: &str = "/api/coffee";
/// The route for logging in through the admin panel's form.
pub const LOG_IN_API: &str = "/api/log_in";
/// The route for the client to log out the current user.
pub const LOG_OUT: &str = "/api/log_out";
/// The route to create a category from the admin panel's form.
pub const POST_CATEGORY: &str = "/api/categories";
/// The route to update a category from the admin panel's form.
pub const PUT_CATEGORY: &str = "/api/categories/{category_id}";
/// The route to delete a category from the admin panel.
pub const DELETE_CATEGORY: &str = "/api/categories/{category_id}";
/// The route that suggests a slug for a category name as the user types.
pub const SLUG_PREVIEW: &str = "/api/categories/slug-preview";

/// Replace the parameter in `endpoint_path` with `id`.
///
/// A parameter is a string that starts with a left brace, followed by
/// lowercase letters or underscores, and ends with a right brace.
/// For example, in the endpoint path '/category/show/{category_id}',
/// '{category_id}' is the parameter.
///
/// This function assumes that an endpoint path only contains ASCII characters
/// and a single parameter.
///
/// If no parameter is found in `endpoint_path`, the function returns the
/// the original `endpoint_path`.
pub fn format_endpoint(endpoint_path: &str, id: i64) -> String {
    let mut param_start = None;
    let mut param_end = None;

    for (i, c) in endpoint_path.chars().enumerate() {
        if c == '{' {
            param_start = Some(i);
        } else if param_start.is_some() && c == '}' {
            param_end = Some(i + 1);
            break;
        }
    }

    let param_start = match param_start {
        Some(start) => start,
        None => return endpoint_path.to_string(),
    };

    let param_end = param_end.unwrap_or(endpoint_path.len());

    format!(
        "{}{}{}",
        &endpoint_path[..param_start],
        id,
        &endpoint_path[param_end..]
    )
}
