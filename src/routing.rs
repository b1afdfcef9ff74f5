//! Application router configuration with protected and unprotected route definitions.

use axum::{
    Router,
    http::StatusCode,
    middleware,
    response::{Html, IntoResponse, Redirect, Response},
    routing::{delete, get, post, put},
};
use tower_http::services::ServeDir;

use crate::{
    AppState,
    auth::{
        auth_guard, auth_guard_api, auth_guard_hx, get_log_in_page, get_log_out, post_log_in,
        post_log_in_json,
    },
    category::{
        api, create_category_endpoint, delete_category_endpoint, get_categories_page,
        get_edit_category_page, slug_preview_endpoint, update_category_endpoint,
    },
    endpoints,
    internal_server_error::get_internal_server_error_page,
    not_found::get_404_not_found,
};

/// Return a router with all the app's routes.
pub fn build_router(state: AppState) -> Router {
    let unprotected_routes = Router::new()
        .route(endpoints::COFFEE, get(get_coffee))
        .route(endpoints::LOG_IN_VIEW, get(get_log_in_page))
        .route(endpoints::LOG_IN_API, post(post_log_in))
        .route(endpoints::LOG_OUT, get(get_log_out))
        .route(endpoints::LOG_IN_JSON_API, post(post_log_in_json))
        .route(endpoints::LOG_OUT_JSON_API, get(get_log_out))
        .route(
            endpoints::SHOW_CATEGORY_API,
            get(api::show_category_endpoint),
        )
        .route(
            endpoints::ALL_CATEGORIES_API,
            get(api::all_categories_endpoint),
        )
        .route(
            endpoints::INTERNAL_ERROR_VIEW,
            get(get_internal_server_error_page),
        );

    let protected_routes = Router::new()
        .route(endpoints::ROOT, get(get_index_page))
        .route(endpoints::CATEGORIES_VIEW, get(get_categories_page))
        .route(endpoints::EDIT_CATEGORY_VIEW, get(get_edit_category_page))
        .layer(middleware::from_fn_with_state(state.clone(), auth_guard));

    // These POST/PUT routes need to use the HX-REDIRECT header for auth redirects to work properly for HTMX requests.
    let protected_routes = protected_routes.merge(
        Router::new()
            .route(endpoints::POST_CATEGORY, post(create_category_endpoint))
            .route(endpoints::PUT_CATEGORY, put(update_category_endpoint))
            .route(endpoints::DELETE_CATEGORY, delete(delete_category_endpoint))
            .route(endpoints::SLUG_PREVIEW, get(slug_preview_endpoint))
            .layer(middleware::from_fn_with_state(state.clone(), auth_guard_hx)),
    );

    // The JSON API reports auth failures in the response body instead of redirecting.
    let protected_routes = protected_routes.merge(
        Router::new()
            .route(
                endpoints::ADD_CATEGORY_API,
                post(api::add_category_endpoint),
            )
            .route(
                endpoints::UPDATE_CATEGORY_API,
                put(api::update_category_endpoint),
            )
            .route(
                endpoints::DELETE_CATEGORY_API,
                delete(api::delete_category_endpoint),
            )
            .layer(middleware::from_fn_with_state(state.clone(), auth_guard_api)),
    );

    protected_routes
        .merge(unprotected_routes)
        .nest_service(endpoints::STATIC, ServeDir::new("static/"))
        .fallback(get_404_not_found)
        .with_state(state)
}

/// Attempt to get a cup of coffee from the server.
async fn get_coffee() -> Response {
    (StatusCode::IM_A_TEAPOT, Html("I'm a teapot")).into_response()
}

/// The root path '/' redirects to the category overview page.
async fn get_index_page() -> Redirect {
    Redirect::to(endpoints::CATEGORIES_VIEW)
}
