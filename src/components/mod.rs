//! UI Components
//!
//! Reusable Leptos components.

mod card_list;
mod item_row;
mod theme_toggle;
mod todo_card;
mod todo_form;

pub use card_list::CardList;
pub use item_row::ItemRowInput;
pub use theme_toggle::ThemeToggle;
pub use todo_card::TodoCard;
pub use todo_form::TodoForm;
