pub mod add;
pub mod list;

pub use add::handle_add;
pub use list::handle_list;
