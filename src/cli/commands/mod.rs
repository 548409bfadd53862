//! Command implementations

mod add;
mod complete;
mod list;
mod menu;
mod next;

pub use add::add;
pub use complete::complete;
pub use list::list;
pub use menu::menu;
pub use next::next;
