//! The record service, the single entry point for front ends.
//!
//! Every operation opens its own connection to the database and closes it
//! before returning.

use crate::{
    Error,
    config::Config,
    csv_exchange::{self, CsvRow},
    database_id::TransactionId,
    db::Database,
    pagination::Pagination,
    period::Period,
    report::{self, CategoryTotals, IncomeExpense},
    transaction::{self, NewTransaction, Transaction},
};

/// Validates user input and stores, lists, aggregates, imports and exports
/// transactions.
#[derive(Debug, Clone)]
pub struct RecordService {
    database: Database,
    page_size: u64,
}

impl RecordService {
    /// Create a service for `database`, creating the schema if it does not exist.
    ///
    /// # Errors
    /// Returns [Error::SqlError] if the database cannot be opened or initialized.
    pub fn new(database: Database) -> Result<Self, Error> {
        database.initialize()?;

        Ok(Self {
            database,
            page_size: Pagination::default().limit,
        })
    }

    /// Create a service from the database path and page size in `config`.
    ///
    /// # Errors
    /// Returns [Error::SqlError] if the database cannot be opened or initialized.
    pub fn from_config(config: &Config) -> Result<Self, Error> {
        let mut service = Self::new(Database::new(&config.db_path))?;
        service.page_size = config.page_size;

        Ok(service)
    }

    /// The default page used by front ends that do not page through transactions.
    pub fn default_page(&self) -> Pagination {
        Pagination::new(self.page_size, 0)
    }

    /// Validate and store a new transaction, returning its ID.
    ///
    /// # Errors
    /// Returns [Error::InvalidDate] or [Error::InvalidAmount] if the input is
    /// invalid, in which case nothing is stored, or [Error::SqlError] if the
    /// transaction could not be saved.
    pub fn add_transaction(
        &self,
        date: &str,
        amount: f64,
        category: &str,
        description: &str,
    ) -> Result<TransactionId, Error> {
        let new_transaction = NewTransaction::validate(date, amount, category, description)?;

        let connection = self.database.connect()?;
        let transaction = transaction::create_transaction(new_transaction, &connection)?;
        tracing::info!("Added transaction #{}", transaction.id);

        Ok(transaction.id)
    }

    /// Validate and replace every field of the transaction `id`.
    ///
    /// Updating a transaction that does not exist does nothing and is not an error.
    ///
    /// # Errors
    /// Returns [Error::InvalidDate] or [Error::InvalidAmount] if the input is
    /// invalid, or [Error::SqlError] if the transaction could not be saved.
    pub fn update_transaction(
        &self,
        id: TransactionId,
        date: &str,
        amount: f64,
        category: &str,
        description: &str,
    ) -> Result<(), Error> {
        let new_transaction = NewTransaction::validate(date, amount, category, description)?;

        let connection = self.database.connect()?;
        match transaction::update_transaction(id, new_transaction, &connection)? {
            0 => tracing::debug!("Ignoring update for missing transaction #{id}"),
            _ => tracing::info!("Updated transaction #{id}"),
        }

        Ok(())
    }

    /// Delete the transaction `id`.
    ///
    /// Deleting a transaction that does not exist does nothing and is not an error.
    ///
    /// # Errors
    /// Returns [Error::SqlError] if there is an SQL error.
    pub fn delete_transaction(&self, id: TransactionId) -> Result<(), Error> {
        let connection = self.database.connect()?;
        match transaction::delete_transaction(id, &connection)? {
            0 => tracing::debug!("Ignoring delete for missing transaction #{id}"),
            _ => tracing::info!("Deleted transaction #{id}"),
        }

        Ok(())
    }

    /// Get a page of transactions, most recent first.
    ///
    /// # Errors
    /// Returns [Error::SqlError] if there is an SQL error.
    pub fn list_transactions(&self, pagination: Pagination) -> Result<Vec<Transaction>, Error> {
        let connection = self.database.connect()?;

        transaction::list_transactions(pagination, &connection)
    }

    /// The signed total for each category in a month, where `month` is 1 to 12.
    ///
    /// # Errors
    /// Returns [Error::InvalidMonth] if `month` is out of range, or
    /// [Error::SqlError] if there is an SQL error.
    pub fn monthly_totals(&self, year: i32, month: u8) -> Result<CategoryTotals, Error> {
        self.category_totals(Period::month(year, month)?)
    }

    /// The signed total for each category in a year.
    ///
    /// # Errors
    /// Returns [Error::SqlError] if there is an SQL error.
    pub fn yearly_totals(&self, year: i32) -> Result<CategoryTotals, Error> {
        self.category_totals(Period::year(year))
    }

    /// The total income and expenses in a month, where `month` is 1 to 12.
    ///
    /// # Errors
    /// Returns [Error::InvalidMonth] if `month` is out of range, or
    /// [Error::SqlError] if there is an SQL error.
    pub fn monthly_income_expense(&self, year: i32, month: u8) -> Result<IncomeExpense, Error> {
        self.income_expense(Period::month(year, month)?)
    }

    /// The total income and expenses in a year.
    ///
    /// # Errors
    /// Returns [Error::SqlError] if there is an SQL error.
    pub fn yearly_income_expense(&self, year: i32) -> Result<IncomeExpense, Error> {
        self.income_expense(Period::year(year))
    }

    /// Get every transaction as CSV rows, oldest first, preceded by a header row.
    ///
    /// # Errors
    /// Returns [Error::SqlError] if there is an SQL error.
    pub fn export_csv_rows(&self) -> Result<Vec<CsvRow>, Error> {
        let connection = self.database.connect()?;

        csv_exchange::export_rows(&connection)
    }

    /// Insert a transaction for every valid CSV row and return how many were inserted.
    ///
    /// Header rows, empty rows and rows with an invalid date or amount are skipped.
    ///
    /// # Errors
    /// Returns [Error::SqlError] if there is an SQL error.
    pub fn import_csv_rows(&self, rows: &[CsvRow]) -> Result<usize, Error> {
        let connection = self.database.connect()?;

        csv_exchange::import_rows(rows, &connection)
    }

    fn category_totals(&self, period: Period) -> Result<CategoryTotals, Error> {
        let connection = self.database.connect()?;

        report::category_totals(period, &connection)
    }

    fn income_expense(&self, period: Period) -> Result<IncomeExpense, Error> {
        let connection = self.database.connect()?;

        report::income_expense_split(period, &connection)
    }
}
