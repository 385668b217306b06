//! Transactions and the endpoints that record them.
//!
//! Creating a transaction also creates its category when no category with the same title
//! exists yet.

mod create;
mod delete;
mod domain;
mod edit;
mod get;
mod state;

pub use create::create_transaction_endpoint;
pub use delete::delete_transaction_endpoint;
pub use domain::{
    CATEGORY_FIELD, TRANSACTION_COLLECTION, TRANSACTION_ID_FIELD, Transaction,
    TransactionData,
};
pub use edit::update_transaction_endpoint;
pub use get::{get_transaction_endpoint, list_transactions_endpoint};
pub use state::TransactionState;
