//! Found-item model and search outcome

use serde::Serialize;
use sqlx::FromRow;

/// Found-item report.
///
/// Reporter details are denormalized: they come from the entry form, not
/// from the owning user's record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, FromRow)]
pub struct LostItem {
    pub id: i64,
    pub user_id: i64,
    pub name: String,
    pub stream: String,
    pub year: String,
    pub contact: String,
    pub item_name: String,
    /// Free text, no date format enforced
    pub found_date: String,
}

/// Validated payload for a new found-item report
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewLostItem {
    pub name: String,
    pub stream: String,
    pub year: String,
    pub contact: String,
    pub item_name: String,
    pub found_date: String,
}

/// Outcome of an item lookup for one user
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ItemSearch {
    /// No item name was supplied; nothing was queried
    MissingName,
    /// Rows whose item name matched exactly
    Matches(Vec<LostItem>),
    /// Nothing matched, so every item of the user is returned instead
    NoMatch(Vec<LostItem>),
}

impl ItemSearch {
    /// Rows to display, empty when no query ran
    pub fn items(&self) -> &[LostItem] {
        match self {
            ItemSearch::MissingName => &[],
            ItemSearch::Matches(items) | ItemSearch::NoMatch(items) => items,
        }
    }
}
