//! Frontend Models
//!
//! The to-do item and its identifier.

use std::fmt;

use chrono::NaiveDate;
use uuid::Uuid;

/// Random identifier assigned when an item is created
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ItemId(Uuid);

impl ItemId {
    pub fn random() -> Self {
        Self(Uuid::new_v4())
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// A single to-do entry
#[derive(Debug, Clone, PartialEq)]
pub struct Item {
    pub id: ItemId,
    pub value: String,
    pub completed: bool,
    pub due_date: Option<NaiveDate>,
}

impl Item {
    pub fn new(value: impl Into<String>, due_date: Option<NaiveDate>) -> Self {
        Self {
            id: ItemId::random(),
            value: value.into(),
            completed: false,
            due_date,
        }
    }

    /// Due date rendered with `format`, if one is set
    pub fn due_label(&self, format: &str) -> Option<String> {
        self.due_date.map(|date| date.format(format).to_string())
    }
}

/// Parse the value of an `<input type="date">`; blank or malformed means no date.
pub fn parse_date_input(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok()
}

/// Inverse of [`parse_date_input`]
pub fn date_input_value(date: Option<NaiveDate>) -> String {
    date.map(|d| d.format("%Y-%m-%d").to_string()).unwrap_or_default()
}
