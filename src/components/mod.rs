//! UI Components
//!
//! Leptos components making up the widget.

mod title_bar;
mod new_item_form;
mod search_box;
mod item_row;
mod item_list_view;
mod list_actions;

pub use title_bar::TitleBar;
pub use new_item_form::NewItemForm;
pub use search_box::SearchBox;
pub use item_row::ItemRow;
pub use item_list_view::ItemListView;
pub use list_actions::ListActions;
