//! Category management for organizing blog posts.

pub mod api;

mod create;
mod db;
mod delete;
mod domain;
mod edit;
mod list;

pub use create::{create_category_endpoint, slug_preview_endpoint};
pub use db::{
    create_category, create_category_table, delete_category, get_all_categories, get_category,
    update_category,
};
pub use delete::delete_category_endpoint;
pub use domain::{Category, CategoryId, CategoryName, Slug, slugify};
pub use edit::{get_edit_category_page, update_category_endpoint};
pub use list::get_categories_page;
