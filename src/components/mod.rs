//! UI Components
//!
//! Reusable Leptos components.

mod add_item_form;
mod board_picker;
mod board_view;
mod card_tile;
mod delete_confirm_button;
mod drop_slot;
mod editable_title;
mod list_column;

pub use add_item_form::AddItemForm;
pub use board_picker::BoardPicker;
pub use board_view::BoardView;
pub use card_tile::CardTile;
pub use delete_confirm_button::DeleteConfirmButton;
pub use drop_slot::DropSlot;
pub use editable_title::EditableTitle;
pub use list_column::ListColumn;
