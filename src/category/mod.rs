//! Categories for grouping transactions, e.g. 'Food' or 'Rent'.

mod create;
mod delete;
mod domain;
mod edit;
mod get;
mod state;

pub use create::create_category_endpoint;
pub use delete::delete_category_endpoint;
pub use domain::{CATEGORY_COLLECTION, CATEGORY_ID_FIELD, Category, CategoryData, TITLE_FIELD};
pub use edit::update_category_endpoint;
pub use get::{get_category_endpoint, list_categories_endpoint};
pub use state::CategoryState;
