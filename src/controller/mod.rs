pub mod dialogs;
pub mod inquiry;
pub mod list;
pub mod menu;
pub mod mutation;

pub use dialogs::{ConsoleDialogs, Dialogs};
pub use inquiry::{Direction, Inquiry, Search, StatusTab};
pub use list::{ListController, ListSnapshot};
pub use menu::RowMenus;
pub use mutation::MutationOutcome;

#[cfg(test)]
pub(crate) mod fixtures;
