//! List Errors
//!
//! Reasons a list operation was rejected. The UI logs and drops these.

use thiserror::Error;

use crate::models::ItemId;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ListError {
    #[error("item text is empty")]
    EmptyText,

    #[error("no item with id {0}")]
    UnknownItem(ItemId),

    #[error("drop target is outside the list")]
    InvalidDropTarget,

    #[error("index {index} is out of range for {len} visible items")]
    IndexOutOfRange { index: usize, len: usize },
}
