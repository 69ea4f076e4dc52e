//! Transaction records and their storage.
//!
//! This module contains everything related to transactions:
//! - The `Transaction` model and `NewTransaction` for creating and replacing transactions
//! - Parsing and validation of dates and amounts entered by the user
//! - Database functions for storing, listing, and managing transactions

mod core;
mod parse;

pub use core::{
    NewTransaction, Transaction, create_transaction, create_transaction_table, delete_transaction,
    list_transactions, list_transactions_chronologically, update_transaction,
};
pub use parse::{parse_amount, parse_date};

#[cfg(test)]
pub use core::count_transactions;
