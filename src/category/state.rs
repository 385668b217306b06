use axum::extract::FromRef;

use crate::{AppState, DocumentCollection};

/// The state needed by the category endpoints.
#[derive(Debug, Clone)]
pub struct CategoryState<C> {
    /// The collection of category records.
    pub categories: C,
    /// Whether a missing category is reported as 404 rather than 500.
    pub distinct_not_found: bool,
}

impl<C> FromRef<AppState<C>> for CategoryState<C>
where
    C: DocumentCollection + Clone + Send + Sync,
{
    fn from_ref(state: &AppState<C>) -> Self {
        Self {
            categories: state.categories.clone(),
            distinct_not_found: state.distinct_not_found,
        }
    }
}
