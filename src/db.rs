//! Prepares the application's SQLite database.

use rusqlite::{Connection, Transaction as SqlTransaction};

use crate::{Error, stores::create_document_table};

/// Create the tables used by the document collections.
///
/// This function is idempotent and is safe to call on a database that has already been
/// initialized.
///
/// # Errors
/// Returns an [Error::SqlError] if the tables cannot be created.
pub fn initialize(connection: &Connection) -> Result<(), Error> {
    let transaction =
        SqlTransaction::new_unchecked(connection, rusqlite::TransactionBehavior::Exclusive)?;

    create_document_table(&transaction)?;

    transaction.commit()?;

    Ok(())
}

#[cfg(test)]
mod initialize_tests {
    use rusqlite::Connection;

    use super::initialize;

    #[test]
    fn initialize_twice_succeeds() {
        let connection = Connection::open_in_memory().unwrap();

        assert_eq!(initialize(&connection), Ok(()));
        assert_eq!(initialize(&connection), Ok(()));
    }

    #[test]
    fn initialize_creates_document_table() {
        let connection = Connection::open_in_memory().unwrap();
        initialize(&connection).unwrap();

        let count: i64 = connection
            .query_row("SELECT COUNT(*) FROM document", [], |row| row.get(0))
            .unwrap();

        assert_eq!(count, 0);
    }
}
