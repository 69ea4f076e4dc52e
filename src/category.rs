//! Suggested category labels.
//!
//! Transactions accept any category text. These labels are offered to the
//! user as a starting point and used when no category is given.

/// The categories suggested when entering a transaction.
pub const SUGGESTED_CATEGORIES: [&str; 12] = [
    "Income",
    "Rent",
    "Utilities",
    "Groceries",
    "Dining",
    "Transportation",
    "Healthcare",
    "Subscriptions",
    "Education",
    "Entertainment",
    "Vacation",
    "Other",
];

/// The category used when the user leaves the category blank.
pub const DEFAULT_CATEGORY: &str = "Other";

/// Trim `category`, falling back to [DEFAULT_CATEGORY] if nothing is left.
pub fn category_or_default(category: &str) -> &str {
    match category.trim() {
        "" => DEFAULT_CATEGORY,
        trimmed => trimmed,
    }
}
