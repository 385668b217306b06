//! The transaction document and the payload used to create and update it.

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::{Category, DocumentId, timestamp, validation::ValidationErrors};

/// The name of the collection that holds transaction records.
pub const TRANSACTION_COLLECTION: &str = "transaction";
/// The field that holds the transaction's string identifier.
pub const TRANSACTION_ID_FIELD: &str = "transaction_id";
/// The field that holds the transaction's embedded category.
pub const CATEGORY_FIELD: &str = "category";

pub(crate) const NAME_FIELD: &str = "name";
pub(crate) const PRICE_FIELD: &str = "price";
pub(crate) const DATA_FIELD: &str = "data";
pub(crate) const TYPE_OF_TRANSACTION_FIELD: &str = "type_of_transaction";
pub(crate) const COMMENT_FIELD: &str = "comment";

/// A recorded income or expense.
///
/// The amount, date and type are free-form strings chosen by the client.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    /// The document ID.
    #[serde(rename = "_id", default)]
    pub id: DocumentId,

    /// The document ID in string form, set once when the transaction is created.
    #[serde(default)]
    pub transaction_id: String,

    /// What the money was spent on or received for.
    #[serde(default)]
    pub name: Option<String>,

    /// The amount, as entered by the client.
    #[serde(default)]
    pub price: Option<String>,

    /// The date of the transaction.
    #[serde(default)]
    pub data: Option<String>,

    /// Whether the transaction is an income or expense, e.g. "expense".
    #[serde(default)]
    pub type_of_transaction: Option<String>,

    /// An optional free-text note.
    #[serde(default)]
    pub comment: Option<String>,

    /// A copy of the category at the time the transaction was created or last updated.
    #[serde(default)]
    pub category: Category,

    /// When the transaction was created.
    #[serde(default, with = "time::serde::rfc3339::option")]
    pub created_at: Option<OffsetDateTime>,

    /// When the transaction was last changed.
    #[serde(default, with = "time::serde::rfc3339::option")]
    pub updated_at: Option<OffsetDateTime>,
}

impl Transaction {
    /// Create a transaction with a fresh ID and equal creation and update times.
    pub fn new(new_transaction: NewTransaction, category: Category) -> Self {
        let id = DocumentId::generate();
        let now = timestamp::now();

        Self {
            transaction_id: id.to_string(),
            id,
            name: Some(new_transaction.name),
            price: Some(new_transaction.price),
            data: Some(new_transaction.data),
            type_of_transaction: Some(new_transaction.type_of_transaction),
            comment: new_transaction.comment,
            category,
            created_at: Some(now),
            updated_at: Some(now),
        }
    }
}

/// The JSON body for creating or updating a transaction.
///
/// Fields other than the category that are missing or `null` are left unchanged by an update.
#[allow(missing_docs)]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionData {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub price: Option<String>,
    #[serde(default)]
    pub data: Option<String>,
    #[serde(default)]
    pub type_of_transaction: Option<String>,
    #[serde(default)]
    pub comment: Option<String>,
    /// The category to file the transaction under. Only the title is used when creating.
    #[serde(default)]
    pub category: Option<Category>,
}

/// A transaction payload that passed validation.
#[allow(missing_docs)]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTransaction {
    pub name: String,
    pub price: String,
    pub data: String,
    pub type_of_transaction: String,
    pub comment: Option<String>,
    /// The title used to find or create the transaction's category.
    pub category_title: String,
}

impl TransactionData {
    /// Check the payload for creating a transaction.
    ///
    /// Every field except the comment is required, including the category's title.
    ///
    /// # Errors
    ///
    /// Returns every violation found, not just the first.
    pub fn validate(self) -> Result<NewTransaction, ValidationErrors> {
        let mut errors = ValidationErrors::new("Transaction");

        let name = errors.require(NAME_FIELD, self.name);
        let price = errors.require(PRICE_FIELD, self.price);
        let data = errors.require(DATA_FIELD, self.data);
        let type_of_transaction =
            errors.require(TYPE_OF_TRANSACTION_FIELD, self.type_of_transaction);
        let category_title = errors.require(
            "category.title",
            self.category.and_then(|category| category.title),
        );

        errors.finish().map(|_| NewTransaction {
            name,
            price,
            data,
            type_of_transaction,
            comment: self.comment,
            category_title,
        })
    }
}
